//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

static INIT_ONCE: Once = Once::new();

const DEVELOPMENT_FILTER: &str = "structeq_core=debug,structeq=debug";
const PRODUCTION_FILTER: &str = "structeq_core=info,structeq=info";

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialize the logging facility
///
/// Sets up the global tracing subscriber once; later calls are no-ops.
/// `RUST_LOG` overrides the profile's default filter.
///
/// # Profiles
///
/// - **Development**: Human-readable logs, `structeq_core=debug` (mismatch events included)
/// - **Production**: JSON structured logs, `structeq_core=info` (start/end events only)
/// - **Test**: Bare registry; use `init_test_capture()` to capture events
///
/// # Example
///
/// ```
/// use structeq_core::logging_facility::{init, Profile};
///
/// init(Profile::Production);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        match profile {
            Profile::Development => {
                let _ = tracing_subscriber::fmt()
                    .with_env_filter(filter(DEVELOPMENT_FILTER))
                    .with_writer(std::io::stderr)
                    .try_init();
            }
            Profile::Production => {
                let _ = tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter(PRODUCTION_FILTER))
                    .with_writer(std::io::stderr)
                    .try_init();
            }
            Profile::Test => {
                // events are captured through init_test_capture() instead
                let _ = tracing_subscriber::registry().try_init();
            }
        }
    });
}
