//! Dependency information structures

use super::VersionSpec;
use std::collections::HashMap;
use std::fmt;

/// Represents a declared package dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Package name
    pub name: String,
    /// Version specification
    pub version_spec: VersionSpec,
}

impl Dependency {
    /// Creates a new dependency
    pub fn new(name: impl Into<String>, version_spec: VersionSpec) -> Self {
        Self {
            name: name.into(),
            version_spec,
        }
    }

    /// Returns the raw version specifier
    pub fn version(&self) -> &str {
        &self.version_spec.raw
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version_spec)
    }
}

/// Package name to version specifier mapping in declaration order
///
/// Names are unique: inserting an existing name replaces its specifier but
/// keeps the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyMap {
    entries: Vec<Dependency>,
    index: HashMap<String, usize>,
}

impl DependencyMap {
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a dependency
    pub fn insert(&mut self, name: impl Into<String>, version_spec: VersionSpec) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&position) => self.entries[position].version_spec = version_spec,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push(Dependency::new(name, version_spec));
            }
        }
    }

    /// Looks up the version specification for a package
    pub fn get(&self, name: &str) -> Option<&VersionSpec> {
        self.index
            .get(name)
            .map(|&position| &self.entries[position].version_spec)
    }

    /// Returns true if the package is declared
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of declared packages
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no packages are declared
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Dependency> {
        self.entries.iter()
    }
}

impl<N, V> FromIterator<(N, V)> for DependencyMap
where
    N: Into<String>,
    V: Into<VersionSpec>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut map = DependencyMap::new();
        for (name, spec) in iter {
            map.insert(name, spec.into());
        }
        map
    }
}

impl<'a> IntoIterator for &'a DependencyMap {
    type Item = &'a Dependency;
    type IntoIter = std::slice::Iter<'a, Dependency>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
