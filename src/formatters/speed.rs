// ABOUTME: Linear speed conversion between m/s, mph, and km/h
// ABOUTME: Includes a simple whole-unit speed label formatter for display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use navfmt_core::models::{SpeedUnit, UnitSystem};

use super::sanitize_magnitude;
use crate::locale::LocaleInfo;
use crate::rounding::round_to_nearest;

/// Stateless speed converter
#[derive(Debug, Clone, Copy, Default)]
pub struct SpeedConverter;

impl SpeedConverter {
    /// Convert `value` from one speed unit to another
    ///
    /// No rounding is applied. 1 m/s = 2.23694 mph = 3.6 km/h.
    #[must_use]
    pub fn convert(value: f64, from: SpeedUnit, to: SpeedUnit) -> f64 {
        if from == to {
            return value;
        }
        value / from.per_meter_per_second() * to.per_meter_per_second()
    }

    /// Display unit for speeds in `system`
    #[must_use]
    pub const fn display_unit(system: UnitSystem) -> SpeedUnit {
        if system.is_imperial() {
            SpeedUnit::MilesPerHour
        } else {
            SpeedUnit::KilometersPerHour
        }
    }

    /// Format a speed in m/s as a whole number of km/h or mph ("40 km/h", "25 mph")
    ///
    /// Negative and non-finite inputs are treated as zero.
    #[must_use]
    pub fn format(meters_per_second: f64, system: UnitSystem, locale: &LocaleInfo) -> String {
        let unit = Self::display_unit(system);
        let speed = sanitize_magnitude(meters_per_second, "speed");
        let converted = Self::convert(speed, SpeedUnit::MetersPerSecond, unit);
        let rounded = round_to_nearest(converted, 1.0) as u64;
        locale.with_unit(&locale.format_integer(rounded), unit.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_conversion_constants() {
        assert!(approx(
            SpeedConverter::convert(1.0, SpeedUnit::MetersPerSecond, SpeedUnit::MilesPerHour),
            2.23694
        ));
        assert!(approx(
            SpeedConverter::convert(1.0, SpeedUnit::MetersPerSecond, SpeedUnit::KilometersPerHour),
            3.6
        ));
        assert!(approx(
            SpeedConverter::convert(36.0, SpeedUnit::KilometersPerHour, SpeedUnit::MetersPerSecond),
            10.0
        ));
    }

    #[test]
    fn test_format_uses_system_unit() {
        let locale = LocaleInfo::default();
        assert_eq!(SpeedConverter::format(11.176, UnitSystem::ImperialFeet, &locale), "25 mph");
        assert_eq!(SpeedConverter::format(11.176, UnitSystem::ImperialYards, &locale), "25 mph");
        assert_eq!(SpeedConverter::format(11.111, UnitSystem::Metric, &locale), "40 km/h");
        assert_eq!(SpeedConverter::format(-3.0, UnitSystem::Metric, &locale), "0 km/h");
    }
}
