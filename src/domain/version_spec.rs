//! Version specification types
//!
//! Handles the specifier forms found in `package.json` dependency maps:
//! - Exact: `1.2.3`
//! - Caret: `^1.2.3`
//! - Tilde: `~1.2.3`
//!
//! Anything else (`>=1.0.0`, `latest`, `1.x`) is kept verbatim and treated
//! as an exact specifier for comparison purposes.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// Everything that is not part of a dotted numeric version
static NON_VERSION_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.]").unwrap());

/// The kind of version specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionSpecKind {
    /// No range marker (e.g., `1.2.3`, `>=1.0.0`, `latest`)
    Exact,
    /// Caret range (e.g., `^1.2.3`) - compatible with major version
    Caret,
    /// Tilde range (e.g., `~1.2.3`) - compatible with minor version
    Tilde,
}

impl VersionSpecKind {
    /// Detects the kind from the leading character of a raw specifier
    pub fn detect(raw: &str) -> Self {
        if raw.starts_with('^') {
            VersionSpecKind::Caret
        } else if raw.starts_with('~') {
            VersionSpecKind::Tilde
        } else {
            VersionSpecKind::Exact
        }
    }
}

/// A version specification with its original string representation
///
/// `normalized` and `kind` are derived from `raw` on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSpec {
    /// The raw version string as it appears in the manifest
    pub raw: String,
    normalized: String,
    kind: VersionSpecKind,
}

impl VersionSpec {
    /// Creates a new VersionSpec from a raw specifier string
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw);
        let kind = VersionSpecKind::detect(&raw);
        Self {
            raw,
            normalized,
            kind,
        }
    }

    /// The raw string reduced to digits and dots
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// The kind of version specification
    pub fn kind(&self) -> VersionSpecKind {
        self.kind
    }

    /// Leading component of the normalized string, unparsed
    ///
    /// Empty for specifiers without digits (`latest`, `*`), and keeps
    /// leading zeros (`01`).
    pub fn major_str(&self) -> &str {
        self.normalized.split('.').next().unwrap_or_default()
    }

    /// Major component, 0 when absent
    pub fn major(&self) -> u64 {
        self.component(0)
    }

    /// Minor component, 0 when absent
    pub fn minor(&self) -> u64 {
        self.component(1)
    }

    /// Patch component, 0 when absent
    pub fn patch(&self) -> u64 {
        self.component(2)
    }

    fn component(&self, index: usize) -> u64 {
        self.normalized
            .split('.')
            .nth(index)
            .and_then(|part| part.parse().ok())
            .unwrap_or(0)
    }
}

/// Strips every character that is not a digit or `.`
pub fn normalize(raw: &str) -> String {
    NON_VERSION_CHARS_RE.replace_all(raw, "").into_owned()
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl From<&str> for VersionSpec {
    fn from(raw: &str) -> Self {
        VersionSpec::new(raw)
    }
}

impl From<String> for VersionSpec {
    fn from(raw: String) -> Self {
        VersionSpec::new(raw)
    }
}
