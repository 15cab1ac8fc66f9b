//! structeq core - deep structural equality for Rust object graphs
//!
//! This crate provides:
//! - A reflection model ([`reflect`]) through which types describe their
//!   members, collections and simple values
//! - The [`StructuralComparer`], deciding full, sub, intersection and shape
//!   equality of two values, cyclic graphs included
//! - A diagnostic printer and test assertions built on both
//! - The error and logging facilities shared by the workspace

pub mod assertions;
pub mod comparer;
pub mod errors;
pub mod logging_facility;
pub mod printer;
pub mod reflect;

// Re-export commonly used types
pub use comparer::{
    deep_equal, intersection_equal, shape_equal, sub_equal, sub_shape_equal, ComparisonConfig,
    StructuralComparer,
};
pub use errors::{ExError, ExErrorKind, Result, StructEqError};
pub use printer::stringify;
pub use reflect::{Composite, MemberDescriptor, Reflect, Sequence, TypeDescriptor, Typed};

pub use structeq_core_types;

#[doc(hidden)]
pub use tracing as __tracing;
