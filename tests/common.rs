// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and locale/formatter constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::expect_used
)]
//! Shared test utilities for `navfmt`

use navfmt::config::{FormatterConfig, UnitSystemPreference};
use navfmt::formatters::MeasurementFormatter;
use navfmt::locale::LocaleInfo;
use navfmt::models::{DurationUnit, DurationUnits};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Parse a locale tag known to be valid
pub fn locale(tag: &str) -> LocaleInfo {
    init_test_logging();
    LocaleInfo::parse(tag).expect("test locale tag should parse")
}

/// Build a unit set from a literal list
pub fn units(list: &[DurationUnit]) -> DurationUnits {
    DurationUnits::new(list.iter().copied()).expect("test unit list should be non-empty")
}

/// Formatter for a locale with the unit system resolved from its region
pub fn formatter_for(tag: &str) -> MeasurementFormatter {
    init_test_logging();
    MeasurementFormatter::new(&FormatterConfig::default().with_locale(tag))
}

/// Formatter for a locale with a forced unit system
pub fn formatter_with_units(tag: &str, units: UnitSystemPreference) -> MeasurementFormatter {
    init_test_logging();
    MeasurementFormatter::new(
        &FormatterConfig::default()
            .with_locale(tag)
            .with_unit_system(units),
    )
}
