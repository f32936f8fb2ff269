//! Run configuration
//!
//! Manifests live in sibling directories named after each project
//! (`../<project>/package.json`) and the report is written to the working
//! directory. Neither location is exposed on the command line.

use std::path::{Path, PathBuf};

/// Default directory holding the project checkouts
pub const DEFAULT_PROJECTS_ROOT: &str = "..";

/// Manifest file name inside each project directory
pub const DEFAULT_MANIFEST_FILE_NAME: &str = "package.json";

/// Report file name
pub const DEFAULT_OUTPUT_PATH: &str = "comparison-results.md";

/// Locations used by a comparison run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareConfig {
    /// Directory containing one sub-directory per project
    pub projects_root: PathBuf,
    /// Manifest file name inside each project directory
    pub manifest_file_name: String,
    /// Where the report is written
    pub output_path: PathBuf,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            projects_root: PathBuf::from(DEFAULT_PROJECTS_ROOT),
            manifest_file_name: DEFAULT_MANIFEST_FILE_NAME.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl CompareConfig {
    /// Create a configuration with the default locations
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory containing the project checkouts
    pub fn with_projects_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.projects_root = root.into();
        self
    }

    /// Set the report path
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Resolve the manifest path for a project name
    pub fn manifest_path(&self, project: &str) -> PathBuf {
        self.projects_root
            .join(project)
            .join(&self.manifest_file_name)
    }

    /// Report path
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}
