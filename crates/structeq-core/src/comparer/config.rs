//! Comparison configuration and its presets.

use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// Flags controlling what "equal" means for one comparison.
///
/// Missing keys take the [`ComparisonConfig::full`] values when the
/// configuration is deserialized.
///
/// ```
/// use structeq_core::ComparisonConfig;
///
/// let config = ComparisonConfig::from_toml_str("only_compare_shape = true").unwrap();
/// assert!(config.only_compare_shape);
/// assert!(config.fail_on_missing_members);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComparisonConfig {
    /// Keep a human-readable diagnostic for every mismatch found
    pub record_errors: bool,
    /// A member of the left value that the right value lacks is a mismatch
    pub fail_on_missing_members: bool,
    /// Compare only members present with the same name and type on both sides
    pub only_intersecting_members: bool,
    /// Compare fields as well as properties
    pub include_fields: bool,
    /// Compare member names and types, not values
    pub only_compare_shape: bool,
}

impl ComparisonConfig {
    /// Full deep equality: every member must exist on both sides and match
    pub const fn full() -> Self {
        Self {
            record_errors: false,
            fail_on_missing_members: true,
            only_intersecting_members: false,
            include_fields: false,
            only_compare_shape: false,
        }
    }

    /// Deep equality that tolerates members of the left value missing on the right
    pub const fn sub() -> Self {
        Self {
            fail_on_missing_members: false,
            ..Self::full()
        }
    }

    /// Deep equality over the members both sides have in common
    pub const fn intersection() -> Self {
        Self {
            only_intersecting_members: true,
            ..Self::full()
        }
    }

    /// Equality of member names and types, fields included
    pub const fn shape() -> Self {
        Self {
            include_fields: true,
            only_compare_shape: true,
            ..Self::full()
        }
    }

    /// Shape equality that tolerates missing members
    pub const fn sub_shape() -> Self {
        Self {
            fail_on_missing_members: false,
            ..Self::shape()
        }
    }

    pub fn with_record_errors(mut self, record_errors: bool) -> Self {
        self.record_errors = record_errors;
        self
    }

    pub fn with_include_fields(mut self, include_fields: bool) -> Self {
        self.include_fields = include_fields;
        self
    }

    /// Look up a preset by name (`full`, `sub`, `intersection`, `shape`, `sub-shape`)
    ///
    /// # Errors
    ///
    /// `InvalidConfig` for an unknown name
    pub fn preset(name: &str) -> Result<Self> {
        match name {
            "full" => Ok(Self::full()),
            "sub" => Ok(Self::sub()),
            "intersection" => Ok(Self::intersection()),
            "shape" => Ok(Self::shape()),
            "sub-shape" | "sub_shape" => Ok(Self::sub_shape()),
            other => Err(crate::errors::StructEqError::InvalidConfig {
                reason: format!("unknown comparison mode '{}'", other),
            }),
        }
    }

    /// Parse a TOML document whose keys are the flag names
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the document is malformed or has unknown keys
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self::full()
    }
}
