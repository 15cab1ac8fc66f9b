//! Structured logging facility for structeq
//!
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//!   that emit the canonical fields of `structeq_core_types::schema`
//! - Test capture mode for deterministic assertions on emitted events
//!
//! # Usage
//!
//! ```rust
//! use structeq_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```
//!
//! Every top-level comparison logs a `start` and an `end` (or `end_error`)
//! event carrying its `comparison_id`; recorded mismatches are logged at
//! debug level as `mismatch` events.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
