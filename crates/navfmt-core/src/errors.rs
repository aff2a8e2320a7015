// ABOUTME: Error types for measurement formatting, parsing, and configuration
// ABOUTME: Defines FormatError with structured context for every failure mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Format Error Types
//!
//! Formatting entry points never fail: they sanitize their inputs and always
//! return a string. `FormatError` is produced by the fallible edges instead
//! (parsers, constructors, configuration loading, and the checked rounding
//! primitive), and by the sanitization paths as a structured value for logging.

/// Kind of unit a string failed to parse as
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// Unit system name (`metric`, `imperial_feet`, ...)
    UnitSystem,
    /// Speed unit name (`mps`, `mph`, `kmh`)
    Speed,
    /// Duration unit name (`days`, `hours`, ...)
    Duration,
    /// Duration style name (`short`, `long`)
    DurationStyle,
    /// Leading zero policy name (`skip`, `render`)
    LeadingZeroPolicy,
}

impl UnitKind {
    /// Human-readable name used in error messages
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnitSystem => "unit system",
            Self::Speed => "speed unit",
            Self::Duration => "duration unit",
            Self::DurationStyle => "duration style",
            Self::LeadingZeroPolicy => "leading zero policy",
        }
    }
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by the measurement formatting engine
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// Rounding increment was zero, negative, or not finite
    #[error("Rounding increment must be positive and finite, got {increment}")]
    InvalidIncrement {
        /// Increment that was rejected
        increment: f64,
    },

    /// Region code is not in the unit system table
    #[error("Unknown region '{region}', falling back to metric")]
    UnknownRegion {
        /// Region code as supplied by the caller
        region: String,
    },

    /// Distance or duration magnitude was negative
    #[error("Negative magnitude {value} clamped to zero")]
    NegativeMagnitude {
        /// Value that was clamped
        value: f64,
    },

    /// Magnitude was NaN or infinite
    #[error("Non-finite magnitude {value} replaced with zero")]
    NonFiniteInput {
        /// Value that was replaced
        value: f64,
    },

    /// Duration unit list was empty
    #[error("Duration unit list must contain at least one unit")]
    EmptyDurationUnits,

    /// Locale tag could not be parsed
    #[error("Invalid locale tag '{tag}'")]
    InvalidLocaleTag {
        /// Tag as supplied by the caller
        tag: String,
    },

    /// Unit name could not be parsed
    #[error("Unknown {kind} '{value}'")]
    UnknownUnit {
        /// Which kind of unit was expected
        kind: UnitKind,
        /// Value that failed to parse
        value: String,
    },

    /// Configuration value was rejected
    #[error("Invalid configuration for {key}: {reason}")]
    InvalidConfig {
        /// Configuration key (environment variable or field name)
        key: &'static str,
        /// Reason the value is invalid
        reason: String,
    },
}

impl FormatError {
    /// Create an unknown unit error
    #[must_use]
    pub fn unknown_unit(kind: UnitKind, value: impl Into<String>) -> Self {
        Self::UnknownUnit {
            kind,
            value: value.into(),
        }
    }

    /// Create an invalid configuration error
    #[must_use]
    pub fn invalid_config(key: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key,
            reason: reason.into(),
        }
    }
}

/// Result type for fallible formatting operations
pub type FormatResult<T> = Result<T, FormatError>;
