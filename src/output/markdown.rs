//! Markdown report formatter
//!
//! Section order:
//! - Title and per-project totals
//! - Packages present in both projects, split into matches and mismatches
//! - Packages present in only one project
//! - Major version differences
//! - Final counts
//!
//! Every count is printed before the list it describes; the counts come from
//! the already-classified DependencyComparison, so nothing is traversed twice.

use crate::domain::{Dependency, DependencyComparison, SharedDependency};
use std::io::{self, Write};

/// Markdown formatter for a comparison between two named projects
pub struct MarkdownFormatter {
    /// Display name of the first project
    project1: String,
    /// Display name of the second project
    project2: String,
}

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new(project1: impl Into<String>, project2: impl Into<String>) -> Self {
        Self {
            project1: project1.into(),
            project2: project2.into(),
        }
    }

    /// Render the full report into a string
    pub fn render(&self, comparison: &DependencyComparison) -> io::Result<String> {
        let mut buffer: Vec<u8> = Vec::new();
        self.format(comparison, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Format and write the full report
    pub fn format(
        &self,
        comparison: &DependencyComparison,
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        self.format_summary(comparison, writer)?;
        self.format_shared(comparison, writer)?;
        self.format_unique(&self.project1, &comparison.unique_to_first, writer)?;
        self.format_unique(&self.project2, &comparison.unique_to_second, writer)?;
        self.format_major_differences(comparison, writer)?;
        self.format_final_counts(comparison, writer)
    }

    fn format_summary(
        &self,
        comparison: &DependencyComparison,
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        writeln!(
            writer,
            "# Package Version Comparison between {} and {}",
            self.project1, self.project2
        )?;
        writeln!(writer)?;
        writeln!(writer, "## Summary")?;
        writeln!(
            writer,
            "- Total packages in **{}**: {}",
            self.project1, comparison.total_packages1
        )?;
        writeln!(
            writer,
            "- Total packages in **{}**: {}",
            self.project2, comparison.total_packages2
        )
    }

    fn format_shared(
        &self,
        comparison: &DependencyComparison,
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        writeln!(
            writer,
            "## Packages present in both {} and {} (Total: {})",
            self.project1,
            self.project2,
            comparison.both_count()
        )?;
        writeln!(writer)?;

        writeln!(writer, "### Matches (Total: {})", comparison.matches_count())?;
        writeln!(writer)?;
        for shared in &comparison.matches {
            writeln!(
                writer,
                "- **{}** - Version match: `{}`",
                shared.name, shared.first
            )?;
        }

        writeln!(
            writer,
            "### Mismatches (Total: {})",
            comparison.mismatches_count()
        )?;
        writeln!(writer)?;
        for shared in &comparison.mismatches {
            self.format_mismatch(shared, writer)?;
        }

        Ok(())
    }

    fn format_mismatch(
        &self,
        shared: &SharedDependency,
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        writeln!(writer, "- **{}** - Version mismatch:", shared.name)?;
        writeln!(writer, "  - {}: `{}`", self.project1, shared.first)?;
        writeln!(writer, "  - {}: `{}`", self.project2, shared.second)
    }

    fn format_unique(
        &self,
        project: &str,
        dependencies: &[Dependency],
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        writeln!(writer)?;
        writeln!(
            writer,
            "## Packages present only in {} (Total: {})",
            project,
            dependencies.len()
        )?;
        writeln!(writer)?;
        for dependency in dependencies {
            writeln!(
                writer,
                "- **{}**: `{}`",
                dependency.name, dependency.version_spec
            )?;
        }
        Ok(())
    }

    fn format_major_differences(
        &self,
        comparison: &DependencyComparison,
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        writeln!(writer)?;
        writeln!(
            writer,
            "## Major Version Differences (Total: {})",
            comparison.major_version_difference_count()
        )?;

        if comparison.major_version_differences.is_empty() {
            return writeln!(writer, "- No major version differences found.");
        }

        for diff in &comparison.major_version_differences {
            writeln!(
                writer,
                "- **{}**: `{}` (in {}) vs `{}` (in {})",
                diff.package, diff.version1, self.project1, diff.version2, self.project2
            )?;
        }
        Ok(())
    }

    fn format_final_counts(
        &self,
        comparison: &DependencyComparison,
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        writeln!(writer)?;
        writeln!(writer, "## Final Counts")?;
        writeln!(
            writer,
            "- Total packages found in both: {}",
            comparison.both_count()
        )?;
        writeln!(
            writer,
            "- Total packages unique to **{}**: {}",
            self.project1,
            comparison.unique_to_first_count()
        )?;
        writeln!(
            writer,
            "- Total packages unique to **{}**: {}",
            self.project2,
            comparison.unique_to_second_count()
        )?;
        writeln!(
            writer,
            "- Total major version differences: {}",
            comparison.major_version_difference_count()
        )
    }
}
