//! CLI argument parsing module for depcompare

use crate::error::ConfigError;
use clap::Parser;

/// Printed to stderr when a project name is missing
pub const MISSING_PROJECTS_MESSAGE: &str = "Please provide two project names as arguments.";

/// Printed to stdout when a project name is missing
pub const USAGE: &str = "Usage: depcompare <project1> <project2>";

/// Compare the dependencies declared by two projects
///
/// Each project is read from `../<project>/package.json` and the report is
/// written to `comparison-results.md` in the current directory.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depcompare",
    version,
    about = "Compare the dependencies declared by two projects"
)]
pub struct CliArgs {
    /// First project (sibling directory of the current one)
    pub project1: Option<String>,

    /// Second project (sibling directory of the current one)
    pub project2: Option<String>,
}

impl CliArgs {
    /// Returns both project names, or an error if either is missing or empty
    pub fn project_names(&self) -> Result<(&str, &str), ConfigError> {
        match (non_empty(&self.project1), non_empty(&self.project2)) {
            (Some(project1), Some(project2)) => Ok((project1, project2)),
            _ => Err(ConfigError::MissingProjectName),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_project_names() {
        let args = CliArgs::parse_from(["depcompare", "web", "api"]);
        assert_eq!(args.project1.as_deref(), Some("web"));
        assert_eq!(args.project2.as_deref(), Some("api"));
        assert_eq!(args.project_names().unwrap(), ("web", "api"));
    }

    #[test]
    fn test_no_arguments() {
        let args = CliArgs::parse_from(["depcompare"]);
        assert!(args.project1.is_none());
        assert!(matches!(
            args.project_names(),
            Err(ConfigError::MissingProjectName)
        ));
    }

    #[test]
    fn test_single_argument() {
        let args = CliArgs::parse_from(["depcompare", "web"]);
        assert!(args.project_names().is_err());
    }

    #[test]
    fn test_empty_argument_counts_as_missing() {
        let args = CliArgs::parse_from(["depcompare", "web", ""]);
        assert!(args.project_names().is_err());
    }

    #[test]
    fn test_too_many_arguments_rejected() {
        let result = CliArgs::try_parse_from(["depcompare", "a", "b", "c"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_usage_mentions_both_projects() {
        assert!(USAGE.contains("<project1> <project2>"));
    }
}
