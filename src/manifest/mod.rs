//! Manifest file loading and parsing
//!
//! This module provides functionality to:
//! - Read a project's package.json from disk
//! - Parse its `dependencies` into a DependencyMap

mod package_json;

pub use package_json::PackageJsonParser;

use crate::domain::DependencyMap;
use crate::error::ManifestError;
use log::debug;
use std::io::ErrorKind;
use std::path::Path;

/// Parse the dependency map from a manifest file path
pub fn parse_manifest(path: &Path) -> Result<DependencyMap, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ManifestError::not_found(path),
        _ => ManifestError::read_error(path, e),
    })?;

    let dependencies = PackageJsonParser.parse_at(&content, path)?;
    debug!(
        "loaded {} dependencies from {}",
        dependencies.len(),
        path.display()
    );
    Ok(dependencies)
}
