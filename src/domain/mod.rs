//! Core domain models for depcompare
//!
//! This module contains the fundamental types used throughout the application:
//! - Version specification types for parsing range markers and numeric components
//! - Dependency information structures
//! - Comparison buckets and result structures

mod comparison;
mod dependency;
mod version_spec;

pub use comparison::{
    ComparisonBucket, DependencyComparison, MajorVersionDifference, SharedDependency,
};
pub use dependency::{Dependency, DependencyMap};
pub use version_spec::{normalize, VersionSpec, VersionSpecKind};
