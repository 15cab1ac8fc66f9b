//! Core types shared by the structeq crates
//!
//! This crate provides the small vocabulary used by the comparer's logging
//! facility and by anything that wants to correlate comparison events:
//!
//! - **Correlation types**: ComparisonId
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::ComparisonId;
