//! Canonical schema constants for structured logging
//!
//! These constants keep the comparer's log events consistent so that tests
//! and log pipelines can match on them.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_COMPARISON_ID: &str = "comparison_id";

// Comparison subjects
pub const FIELD_LEFT_TYPE: &str = "left_type";
pub const FIELD_RIGHT_TYPE: &str = "right_type";
pub const FIELD_MEMBER: &str = "member";

// Comparison outcome
pub const FIELD_EQUAL: &str = "equal";
pub const FIELD_ERROR_COUNT: &str = "error_count";
pub const FIELD_DIAGNOSTIC: &str = "diagnostic";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_MISMATCH: &str = "mismatch";
