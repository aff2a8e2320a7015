// ABOUTME: Distance formatting with unit selection and magnitude-banded rounding
// ABOUTME: Turns raw meters into strings like "900 ft", "8,1 km", or "1,000 mi"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Distance Formatter
//!
//! 1. Pick the short or long unit by comparing raw meters with the system threshold.
//! 2. Convert to that unit and look up the band holding the *unrounded* value.
//! 3. Round with the band's rule and render with the locale's punctuation.

use navfmt_core::models::{DistanceUnit, UnitSystem};
use serde::Serialize;

use super::sanitize_magnitude;
use crate::locale::LocaleInfo;
use crate::units::{band_for, RoundingRule};

/// A distance after unit selection and rounding, before rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceMeasurement {
    /// Display unit chosen for the input
    pub unit: DistanceUnit,
    /// Input converted into `unit`, unrounded
    pub converted: f64,
    /// Converted value after the band's rounding rule
    pub rounded: f64,
    /// Whether the value is rendered with a fractional digit when non-integral
    pub fractional: bool,
}

impl DistanceMeasurement {
    /// Render only the number, with locale punctuation
    #[must_use]
    pub fn format_value(&self, locale: &LocaleInfo) -> String {
        if self.fractional {
            locale.format_tenths(self.rounded)
        } else {
            locale.format_integer(self.rounded.max(0.0).round() as u64)
        }
    }
}

/// Stateless distance formatter
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceFormatter;

impl DistanceFormatter {
    /// Select the unit and rounding for `meters` without rendering
    ///
    /// Negative and non-finite inputs are treated as zero.
    #[must_use]
    pub fn measure(meters: f64, system: UnitSystem) -> DistanceMeasurement {
        let meters = sanitize_magnitude(meters, "distance");
        let unit = system.display_unit_for(meters);
        let converted = unit.from_meters(meters);
        let rule = band_for(unit, converted).rule;
        DistanceMeasurement {
            unit,
            converted,
            rounded: rule.apply(converted),
            fractional: matches!(rule, RoundingRule::Tenths),
        }
    }

    /// Format `meters` for display in `system` using `locale` punctuation
    #[must_use]
    pub fn format(meters: f64, system: UnitSystem, locale: &LocaleInfo) -> String {
        let measurement = Self::measure(meters, system);
        locale.with_unit(
            &measurement.format_value(locale),
            locale.distance_abbreviation(measurement.unit),
        )
    }
}
