// ABOUTME: Measurement formatters for distance, duration, and speed
// ABOUTME: MeasurementFormatter bundles a resolved configuration for UI callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Measurement Formatting Layer
//!
//! The individual formatters are stateless and take every input as an
//! argument. [`MeasurementFormatter`] resolves a [`FormatterConfig`] once
//! (locale parsing, unit system selection) so a screen can hold it and
//! format many values cheaply.
//!
//! ## Usage
//!
//! ```rust
//! use navfmt::config::FormatterConfig;
//! use navfmt::formatters::MeasurementFormatter;
//!
//! let formatter = MeasurementFormatter::new(&FormatterConfig::default().with_locale("en-US"));
//! assert_eq!(formatter.distance(260.0), "900 ft");
//! assert_eq!(formatter.duration(86_340.0), "23h 59m");
//! ```

/// Banded distance formatting
pub mod distance;
/// Unit-decomposed duration formatting
pub mod duration;
/// Speed conversion and speed labels
pub mod speed;

pub use distance::{DistanceFormatter, DistanceMeasurement};
pub use duration::{DurationComponent, DurationFormatter};
pub use speed::SpeedConverter;

use navfmt_core::errors::FormatError;
use navfmt_core::models::{
    DurationStyle, DurationUnits, LeadingZeroPolicy, SpeedUnit, UnitSystem,
};
use tracing::debug;

use crate::config::FormatterConfig;
use crate::locale::LocaleInfo;

/// Replace negative or non-finite magnitudes with zero
///
/// Upstream engines briefly report negative remaining distance or duration
/// during state transitions; the replacement is logged, never surfaced.
pub(crate) fn sanitize_magnitude(value: f64, quantity: &'static str) -> f64 {
    if !value.is_finite() {
        debug!(quantity, "{}", FormatError::NonFiniteInput { value });
        return 0.0;
    }
    if value < 0.0 {
        debug!(quantity, "{}", FormatError::NegativeMagnitude { value });
        return 0.0;
    }
    value
}

/// A formatter configuration resolved for repeated use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementFormatter {
    locale: LocaleInfo,
    unit_system: UnitSystem,
    duration_units: DurationUnits,
    duration_style: DurationStyle,
    leading_zero: LeadingZeroPolicy,
}

impl MeasurementFormatter {
    /// Resolve `config` into a ready formatter
    ///
    /// A malformed locale tag falls back to region-less English, which
    /// resolves to metric under `UnitSystemPreference::Auto`.
    #[must_use]
    pub fn new(config: &FormatterConfig) -> Self {
        let locale = LocaleInfo::parse_or_default(&config.locale);
        let unit_system = config.unit_system.resolve(&locale);
        debug!(
            locale = %locale,
            unit_system = %unit_system,
            duration_units = %config.duration_units,
            "Resolved measurement formatter"
        );
        Self {
            locale,
            unit_system,
            duration_units: config.duration_units.clone(),
            duration_style: config.duration_style,
            leading_zero: config.leading_zero,
        }
    }

    /// Locale used for punctuation and abbreviations
    #[must_use]
    pub const fn locale(&self) -> &LocaleInfo {
        &self.locale
    }

    /// Unit system distances and speeds are displayed in
    #[must_use]
    pub const fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    /// Format a distance in meters
    #[must_use]
    pub fn distance(&self, meters: f64) -> String {
        DistanceFormatter::format(meters, self.unit_system, &self.locale)
    }

    /// Unit selection and rounding for a distance, without rendering
    #[must_use]
    pub fn distance_measurement(&self, meters: f64) -> DistanceMeasurement {
        DistanceFormatter::measure(meters, self.unit_system)
    }

    /// Format a duration in seconds with the configured units and style
    #[must_use]
    pub fn duration(&self, seconds: f64) -> String {
        self.duration_with_style(seconds, self.duration_style)
    }

    /// Format a duration overriding the configured style
    #[must_use]
    pub fn duration_with_style(&self, seconds: f64, style: DurationStyle) -> String {
        DurationFormatter::format_with_policy(
            seconds,
            &self.duration_units,
            style,
            self.leading_zero,
        )
    }

    /// Format a speed in m/s in the unit system's speed unit
    #[must_use]
    pub fn speed(&self, meters_per_second: f64) -> String {
        SpeedConverter::format(meters_per_second, self.unit_system, &self.locale)
    }

    /// Speed unit this formatter displays
    #[must_use]
    pub const fn speed_unit(&self) -> SpeedUnit {
        SpeedConverter::display_unit(self.unit_system)
    }
}

impl Default for MeasurementFormatter {
    fn default() -> Self {
        Self::new(&FormatterConfig::default())
    }
}
