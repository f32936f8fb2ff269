//! Dependency comparison logic
//!
//! This module provides:
//! - Version compatibility judgment between two specifiers
//! - Classification of every declared package into a comparison bucket

mod compatibility;

pub use compatibility::{are_compatible, are_versions_compatible};

use crate::domain::{DependencyComparison, DependencyMap, MajorVersionDifference, SharedDependency};
use log::debug;

/// Classify every package declared by either map
///
/// Walks the first map once (matches, mismatches, packages unique to the
/// first project) and the second map once (packages unique to the second
/// project). Presence is decided by name alone.
pub fn compare_dependencies(
    first: &DependencyMap,
    second: &DependencyMap,
) -> DependencyComparison {
    let mut comparison = DependencyComparison {
        total_packages1: first.len(),
        total_packages2: second.len(),
        ..DependencyComparison::default()
    };

    for dependency in first {
        let Some(other_spec) = second.get(&dependency.name) else {
            comparison.unique_to_first.push(dependency.clone());
            continue;
        };

        let shared = SharedDependency::new(
            dependency.name.clone(),
            dependency.version_spec.clone(),
            other_spec.clone(),
        );

        if are_compatible(&shared.first, &shared.second) {
            comparison.matches.push(shared);
        } else {
            if shared.has_major_difference() {
                comparison
                    .major_version_differences
                    .push(MajorVersionDifference::from(&shared));
            }
            comparison.mismatches.push(shared);
        }
    }

    comparison.unique_to_second = second
        .iter()
        .filter(|dependency| !first.contains(&dependency.name))
        .cloned()
        .collect();

    debug!(
        "classified {} + {} packages: {} matches, {} mismatches, {} unique to first, {} unique to second",
        comparison.total_packages1,
        comparison.total_packages2,
        comparison.matches_count(),
        comparison.mismatches_count(),
        comparison.unique_to_first_count(),
        comparison.unique_to_second_count()
    );

    comparison
}
