// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for unit conversion, thresholds, and configuration keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in one flat file.

/// Unit conversion and measurement constants
pub mod units;

/// Environment variable names read by configuration loading
pub mod env_config {
    /// Locale tag used for separators and region resolution (e.g. `de-DE`)
    pub const LOCALE: &str = "NAVFMT_LOCALE";
    /// Unit system override (`auto`, `metric`, `imperial_feet`, `imperial_yards`)
    pub const UNIT_SYSTEM: &str = "NAVFMT_UNIT_SYSTEM";
    /// Comma separated duration units (e.g. `hours,minutes`)
    pub const DURATION_UNITS: &str = "NAVFMT_DURATION_UNITS";
    /// Duration style (`short` or `long`)
    pub const DURATION_STYLE: &str = "NAVFMT_DURATION_STYLE";
    /// Leading zero duration policy (`skip` or `render`)
    pub const LEADING_ZERO: &str = "NAVFMT_LEADING_ZERO";
}

/// Defaults applied when no configuration is supplied
pub mod defaults {
    /// Locale used when none is configured
    pub const LOCALE: &str = "en-US";

    /// Language used when a configured locale tag is malformed
    pub const FALLBACK_LANGUAGE: &str = "en";
}

/// Service identity used in structured logs
pub mod service_names {
    /// CLI service name
    pub const NAVFMT_CLI: &str = "navfmt";
}
