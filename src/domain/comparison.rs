//! Comparison result types
//!
//! Holds the classification of every package name declared by either project.

use super::{Dependency, VersionSpec};
use std::fmt;

/// Classification of a package name relative to a pair of dependency maps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonBucket {
    /// Declared by both projects with compatible specifiers
    Match,
    /// Declared by both projects with incompatible specifiers
    Mismatch,
    /// Declared only by the first project
    UniqueToFirst,
    /// Declared only by the second project
    UniqueToSecond,
}

impl fmt::Display for ComparisonBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonBucket::Match => write!(f, "match"),
            ComparisonBucket::Mismatch => write!(f, "mismatch"),
            ComparisonBucket::UniqueToFirst => write!(f, "unique to first"),
            ComparisonBucket::UniqueToSecond => write!(f, "unique to second"),
        }
    }
}

/// A package declared by both projects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedDependency {
    /// Package name
    pub name: String,
    /// Specifier in the first project
    pub first: VersionSpec,
    /// Specifier in the second project
    pub second: VersionSpec,
}

impl SharedDependency {
    /// Creates a new SharedDependency
    pub fn new(name: impl Into<String>, first: VersionSpec, second: VersionSpec) -> Self {
        Self {
            name: name.into(),
            first,
            second,
        }
    }

    /// Returns true if the normalized major components differ as text
    ///
    /// `latest` against `0.4.1` ("" vs "0") and `01.2.0` against `1.3.0`
    /// ("01" vs "1") both count as differences.
    pub fn has_major_difference(&self) -> bool {
        self.first.major_str() != self.second.major_str()
    }
}

/// A mismatched package whose major versions differ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MajorVersionDifference {
    /// Package name
    pub package: String,
    /// Raw specifier in the first project
    pub version1: String,
    /// Raw specifier in the second project
    pub version2: String,
}

impl From<&SharedDependency> for MajorVersionDifference {
    fn from(shared: &SharedDependency) -> Self {
        Self {
            package: shared.name.clone(),
            version1: shared.first.raw.clone(),
            version2: shared.second.raw.clone(),
        }
    }
}

/// Result of comparing two dependency maps
///
/// Counts are derived from the bucket lists, so
/// `both_count() == matches_count() + mismatches_count()` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyComparison {
    /// Number of packages declared by the first project
    pub total_packages1: usize,
    /// Number of packages declared by the second project
    pub total_packages2: usize,
    /// Shared packages with compatible specifiers, in first-project order
    pub matches: Vec<SharedDependency>,
    /// Shared packages with incompatible specifiers, in first-project order
    pub mismatches: Vec<SharedDependency>,
    /// Packages only the first project declares
    pub unique_to_first: Vec<Dependency>,
    /// Packages only the second project declares, in second-project order
    pub unique_to_second: Vec<Dependency>,
    /// Mismatches whose major versions differ
    pub major_version_differences: Vec<MajorVersionDifference>,
}

impl DependencyComparison {
    /// Returns the number of packages declared by both projects
    pub fn both_count(&self) -> usize {
        self.matches.len() + self.mismatches.len()
    }

    /// Returns the number of compatible shared packages
    pub fn matches_count(&self) -> usize {
        self.matches.len()
    }

    /// Returns the number of incompatible shared packages
    pub fn mismatches_count(&self) -> usize {
        self.mismatches.len()
    }

    /// Returns the number of packages unique to the first project
    pub fn unique_to_first_count(&self) -> usize {
        self.unique_to_first.len()
    }

    /// Returns the number of packages unique to the second project
    pub fn unique_to_second_count(&self) -> usize {
        self.unique_to_second.len()
    }

    /// Returns the number of major version differences
    pub fn major_version_difference_count(&self) -> usize {
        self.major_version_differences.len()
    }

    /// Returns the bucket a package name was classified into
    pub fn bucket_of(&self, name: &str) -> Option<ComparisonBucket> {
        if self.matches.iter().any(|d| d.name == name) {
            Some(ComparisonBucket::Match)
        } else if self.mismatches.iter().any(|d| d.name == name) {
            Some(ComparisonBucket::Mismatch)
        } else if self.unique_to_first.iter().any(|d| d.name == name) {
            Some(ComparisonBucket::UniqueToFirst)
        } else if self.unique_to_second.iter().any(|d| d.name == name) {
            Some(ComparisonBucket::UniqueToSecond)
        } else {
            None
        }
    }
}
