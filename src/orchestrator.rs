//! Comparison orchestrator for coordinating the whole run
//!
//! This module provides:
//! - Workflow coordination: load → classify → render → write
//! - Fail-fast error handling: the report is rendered in memory before the
//!   output file is touched, so a failed load never leaves a partial report

use crate::compare::compare_dependencies;
use crate::config::CompareConfig;
use crate::domain::DependencyComparison;
use crate::error::{AppError, OutputError};
use crate::manifest::parse_manifest;
use crate::output::{write_report, MarkdownFormatter};
use log::debug;
use std::path::PathBuf;

/// Orchestrator for coordinating the comparison workflow
pub struct Orchestrator {
    /// Manifest and report locations
    config: CompareConfig,
}

/// Result of a comparison run
#[derive(Debug)]
pub struct OrchestratorResult {
    /// Classified dependencies
    pub comparison: DependencyComparison,
    /// Rendered markdown report
    pub report: String,
    /// Where the report was written
    pub output_path: PathBuf,
}

impl Orchestrator {
    /// Create a new orchestrator
    pub fn new(config: CompareConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use
    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Load both manifests, classify and render without writing anything
    pub fn compare(
        &self,
        project1: &str,
        project2: &str,
    ) -> Result<(DependencyComparison, String), AppError> {
        let first = parse_manifest(&self.config.manifest_path(project1))?;
        let second = parse_manifest(&self.config.manifest_path(project2))?;

        let comparison = compare_dependencies(&first, &second);
        let report = MarkdownFormatter::new(project1, project2)
            .render(&comparison)
            .map_err(OutputError::RenderError)?;

        Ok((comparison, report))
    }

    /// Run the full workflow and write the report
    pub fn run(&self, project1: &str, project2: &str) -> Result<OrchestratorResult, AppError> {
        debug!("comparing {} against {}", project1, project2);
        let (comparison, report) = self.compare(project1, project2)?;

        let output_path = self.config.output_path().to_path_buf();
        write_report(&output_path, &report)?;

        Ok(OrchestratorResult {
            comparison,
            report,
            output_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ManifestError;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_project(root: &Path, name: &str, manifest: &str) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("package.json"), manifest).unwrap();
    }

    fn setup() -> (TempDir, Orchestrator) {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = CompareConfig::new()
            .with_projects_root(temp_dir.path())
            .with_output_path(temp_dir.path().join("comparison-results.md"));
        (temp_dir, Orchestrator::new(config))
    }

    #[test]
    fn test_run_writes_report() {
        let (temp_dir, orchestrator) = setup();
        write_project(
            temp_dir.path(),
            "first",
            r#"{"dependencies": {"a": "^1.0.0", "b": "1.0.0"}}"#,
        );
        write_project(
            temp_dir.path(),
            "second",
            r#"{"dependencies": {"a": "^1.0.0", "c": "1.0.0"}}"#,
        );

        let result = orchestrator.run("first", "second").unwrap();

        assert_eq!(result.comparison.matches_count(), 1);
        assert_eq!(result.comparison.unique_to_first_count(), 1);
        assert_eq!(result.comparison.unique_to_second_count(), 1);
        let written = fs::read_to_string(&result.output_path).unwrap();
        assert_eq!(written, result.report);
        assert!(written.starts_with("# Package Version Comparison between first and second\n"));
    }

    #[test]
    fn test_compare_does_not_write() {
        let (temp_dir, orchestrator) = setup();
        write_project(temp_dir.path(), "first", "{}");
        write_project(temp_dir.path(), "second", "{}");

        let (comparison, _) = orchestrator.compare("first", "second").unwrap();
        assert_eq!(comparison.both_count(), 0);
        assert!(!orchestrator.config().output_path().exists());
    }

    #[test]
    fn test_missing_manifest_leaves_no_report() {
        let (temp_dir, orchestrator) = setup();
        write_project(temp_dir.path(), "first", r#"{"dependencies": {}}"#);

        let err = orchestrator.run("first", "absent").unwrap_err();
        assert!(matches!(
            err,
            AppError::Manifest(ManifestError::NotFound { .. })
        ));
        assert!(!orchestrator.config().output_path().exists());
    }

    #[test]
    fn test_malformed_manifest_leaves_existing_report_untouched() {
        let (temp_dir, orchestrator) = setup();
        write_project(temp_dir.path(), "first", "{ broken");
        write_project(temp_dir.path(), "second", "{}");
        fs::write(orchestrator.config().output_path(), "previous run\n").unwrap();

        let err = orchestrator.run("first", "second").unwrap_err();
        assert!(matches!(
            err,
            AppError::Manifest(ManifestError::JsonParseError { .. })
        ));
        assert_eq!(
            fs::read_to_string(orchestrator.config().output_path()).unwrap(),
            "previous run\n"
        );
    }
}
