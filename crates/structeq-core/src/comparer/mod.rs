//! Deep structural comparison.
//!
//! The engine walks both values depth-first:
//!
//! - null equals only null
//! - simple values compare natively, or numerically when their types differ
//! - collections compare element by element in order, except collections
//!   held by a member, which compare as unordered multisets
//! - composites compare member by member, with a pending pair set that
//!   assumes equality for pairs already being compared (cycles)
//!
//! The functions below are one-shot shorthands for the configuration presets.

pub mod config;
pub mod engine;
pub mod pending;

pub use config::ComparisonConfig;
pub use engine::StructuralComparer;
pub use pending::{Identity, PendingComparisonSet};

use crate::errors::Result;
use crate::reflect::Reflect;

/// Full deep equality
///
/// # Errors
///
/// Member access failures, see [`StructuralComparer::compare`]
pub fn deep_equal(left: &dyn Reflect, right: &dyn Reflect) -> Result<bool> {
    StructuralComparer::full().compare(left, right)
}

/// Deep equality tolerating members of `left` that `right` lacks
///
/// # Errors
///
/// Member access failures, see [`StructuralComparer::compare`]
pub fn sub_equal(left: &dyn Reflect, right: &dyn Reflect) -> Result<bool> {
    StructuralComparer::sub().compare(left, right)
}

/// Deep equality over the members both sides share by name and type
///
/// # Errors
///
/// Member access failures, see [`StructuralComparer::compare`]
pub fn intersection_equal(left: &dyn Reflect, right: &dyn Reflect) -> Result<bool> {
    StructuralComparer::intersection().compare(left, right)
}

/// Same member names and types, values ignored
///
/// # Errors
///
/// Member access failures, see [`StructuralComparer::compare`]
pub fn shape_equal(left: &dyn Reflect, right: &dyn Reflect) -> Result<bool> {
    StructuralComparer::shape().compare(left, right)
}

/// Shape equality tolerating members of `left` that `right` lacks
///
/// # Errors
///
/// Member access failures, see [`StructuralComparer::compare`]
pub fn sub_shape_equal(left: &dyn Reflect, right: &dyn Reflect) -> Result<bool> {
    StructuralComparer::sub_shape().compare(left, right)
}
