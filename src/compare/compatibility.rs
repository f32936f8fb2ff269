//! Version compatibility judgment
//!
//! Two specifiers are compatible when their normalized forms are identical,
//! or when their majors agree and the range-marker pair allows it:
//!
//! | first | second | compatible iff |
//! |-------|--------|----------------|
//! | `~`   | `~`    | same minor, first patch >= second patch |
//! | `^`   | `^`    | same major, minor and patch |
//! | `~`   | `^`    | same major and minor, first patch >= second patch |
//! | `^`   | `~`    | same major and minor, second patch >= first patch |
//! | other |        | raw strings are equal |
//!
//! The table is order-sensitive: swapping the arguments can change the answer.

use crate::domain::{VersionSpec, VersionSpecKind};

/// Returns true if two raw specifiers are compatible
pub fn are_versions_compatible(version1: &str, version2: &str) -> bool {
    are_compatible(&VersionSpec::new(version1), &VersionSpec::new(version2))
}

/// Returns true if two parsed specifiers are compatible
pub fn are_compatible(first: &VersionSpec, second: &VersionSpec) -> bool {
    if first.normalized() == second.normalized() {
        return true;
    }

    let (major1, major2) = (first.major(), second.major());
    if major1 != major2 {
        return false;
    }

    let (minor1, minor2) = (first.minor(), second.minor());
    let (patch1, patch2) = (first.patch(), second.patch());

    match (first.kind(), second.kind()) {
        (VersionSpecKind::Tilde, VersionSpecKind::Tilde) => minor1 == minor2 && patch1 >= patch2,
        (VersionSpecKind::Caret, VersionSpecKind::Caret) => {
            major1 == major2 && minor1 == minor2 && patch1 == patch2
        }
        (VersionSpecKind::Tilde, VersionSpecKind::Caret) => {
            major1 == major2 && minor1 == minor2 && patch1 >= patch2
        }
        (VersionSpecKind::Caret, VersionSpecKind::Tilde) => {
            major1 == major2 && minor1 == minor2 && patch2 >= patch1
        }
        _ => first.raw == second.raw,
    }
}
