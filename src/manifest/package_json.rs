//! package.json parser for Node.js projects
//!
//! Only the `dependencies` object is read. Entries keep their declaration
//! order so reports list packages the way the manifest does.

use crate::domain::{DependencyMap, VersionSpec};
use crate::error::ManifestError;
use log::debug;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Parser for package.json files
pub struct PackageJsonParser;

impl PackageJsonParser {
    /// Parse the dependency map from package.json content
    pub fn parse(&self, content: &str) -> Result<DependencyMap, ManifestError> {
        self.parse_at(content, "package.json")
    }

    /// Parse content read from `path`, reporting errors against that path
    pub fn parse_at(
        &self,
        content: &str,
        path: impl Into<PathBuf>,
    ) -> Result<DependencyMap, ManifestError> {
        let json: Value = serde_json::from_str(content)
            .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))?;

        let mut dependencies = DependencyMap::new();
        if let Some(deps) = json.get("dependencies").and_then(|v| v.as_object()) {
            parse_dependency_object(deps, &mut dependencies);
        }

        Ok(dependencies)
    }
}

fn parse_dependency_object(deps: &Map<String, Value>, output: &mut DependencyMap) {
    for (name, version_value) in deps {
        match version_value.as_str() {
            Some(version_str) => output.insert(name.clone(), VersionSpec::new(version_str)),
            None => debug!("skipping '{}': version is not a string", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VersionSpecKind;

    fn parse(content: &str) -> Result<DependencyMap, ManifestError> {
        PackageJsonParser.parse(content)
    }

    #[test]
    fn test_parse_simple_dependencies() {
        let content = r#"{
            "dependencies": {
                "lodash": "^4.17.21",
                "express": "~4.18.2"
            }
        }"#;

        let deps = parse(content).unwrap();
        assert_eq!(deps.len(), 2);

        let lodash = deps.get("lodash").unwrap();
        assert_eq!(lodash.kind(), VersionSpecKind::Caret);
        assert_eq!(lodash.raw, "^4.17.21");

        let express = deps.get("express").unwrap();
        assert_eq!(express.kind(), VersionSpecKind::Tilde);
    }

    #[test]
    fn test_parse_keeps_declaration_order() {
        let content = r#"{
  "dependencies": {
    "zod": "^3.0.0",
    "axios": "^1.0.0",
    "lodash": "^4.17.21"
  }
}"#;

        let deps = parse(content).unwrap();
        let names: Vec<&str> = deps.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["zod", "axios", "lodash"]);
    }

    #[test]
    fn test_parse_ignores_other_dependency_sections() {
        let content = r#"{
            "dependencies": {
                "react": "^18.2.0"
            },
            "devDependencies": {
                "typescript": "^5.0.0"
            },
            "peerDependencies": {
                "react-dom": "^18.0.0"
            }
        }"#;

        let deps = parse(content).unwrap();
        assert_eq!(deps.len(), 1);
        assert!(deps.contains("react"));
        assert!(!deps.contains("typescript"));
    }

    #[test]
    fn test_parse_missing_dependencies_is_empty() {
        let deps = parse(r#"{"name": "tool", "version": "1.0.0"}"#).unwrap();
        assert!(deps.is_empty());
    }

    #[test]
    fn test_parse_empty_object() {
        let deps = parse("{}").unwrap();
        assert!(deps.is_empty());
    }

    #[test]
    fn test_parse_non_object_dependencies_is_empty() {
        let deps = parse(r#"{"dependencies": ["lodash"]}"#).unwrap();
        assert!(deps.is_empty());
    }

    #[test]
    fn test_parse_skips_non_string_versions() {
        let content = r#"{
            "dependencies": {
                "weird": { "version": "1.0.0" },
                "number": 2,
                "ok": "1.0.0"
            }
        }"#;

        let deps = parse(content).unwrap();
        assert_eq!(deps.len(), 1);
        assert!(deps.contains("ok"));
    }

    #[test]
    fn test_parse_keeps_unusual_specifiers_verbatim() {
        let content = r#"{
            "dependencies": {
                "next": "^14.0.0-canary.1",
                "local": "file:../local",
                "any": "*"
            }
        }"#;

        let deps = parse(content).unwrap();
        assert_eq!(deps.get("next").unwrap().raw, "^14.0.0-canary.1");
        assert_eq!(deps.get("local").unwrap().raw, "file:../local");
        assert_eq!(deps.get("any").unwrap().kind(), VersionSpecKind::Exact);
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse("not json");
        assert!(matches!(result, Err(ManifestError::JsonParseError { .. })));
    }

    #[test]
    fn test_parse_at_reports_path() {
        let err = PackageJsonParser
            .parse_at("{", "../web/package.json")
            .unwrap_err();
        let msg = format!("{}", err);
        assert!(msg.contains("../web/package.json"));
    }
}
