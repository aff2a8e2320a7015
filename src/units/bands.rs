// ABOUTME: Magnitude band tables selecting a rounding rule per display unit
// ABOUTME: Bands are evaluated on the converted, unrounded value and cover [0, inf)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use navfmt_core::models::DistanceUnit;

use crate::rounding::round_to_nearest;

/// How values inside a band are rounded
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundingRule {
    /// Round to the nearest multiple of a whole number
    Nearest(u32),
    /// Round to the nearest tenth, displayed with one fractional digit
    /// unless the result is integral
    Tenths,
}

impl RoundingRule {
    /// Increment handed to [`round_to_nearest`]
    #[must_use]
    pub fn increment(self) -> f64 {
        match self {
            Self::Nearest(step) => f64::from(step),
            Self::Tenths => 0.1,
        }
    }

    /// Whether results of this rule may carry a fractional digit
    #[must_use]
    pub const fn is_fractional(self) -> bool {
        matches!(self, Self::Tenths)
    }

    /// Apply the rule to a converted value
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        round_to_nearest(value, self.increment())
    }
}

/// A contiguous range `[previous upper bound, upper_bound)` sharing one rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnitudeBand {
    /// Exclusive upper bound in the display unit
    pub upper_bound: f64,
    /// Rule applied to values inside the band
    pub rule: RoundingRule,
}

const fn band(upper_bound: f64, rule: RoundingRule) -> MagnitudeBand {
    MagnitudeBand { upper_bound, rule }
}

const METER_BANDS: &[MagnitudeBand] = &[
    band(10.0, RoundingRule::Nearest(5)),
    band(100.0, RoundingRule::Nearest(10)),
    band(f64::INFINITY, RoundingRule::Nearest(100)),
];

const KILOMETER_BANDS: &[MagnitudeBand] = &[
    band(10.0, RoundingRule::Tenths),
    band(f64::INFINITY, RoundingRule::Nearest(1)),
];

const FOOT_BANDS: &[MagnitudeBand] = &[
    band(50.0, RoundingRule::Nearest(5)),
    band(100.0, RoundingRule::Nearest(10)),
    band(500.0, RoundingRule::Nearest(50)),
    band(f64::INFINITY, RoundingRule::Nearest(100)),
];

// Yards stop at the 300 m mile threshold (~328 yd); the last band runs open-ended.
const YARD_BANDS: &[MagnitudeBand] = &[
    band(10.0, RoundingRule::Nearest(5)),
    band(f64::INFINITY, RoundingRule::Nearest(10)),
];

const MILE_BANDS: &[MagnitudeBand] = &[
    band(10.0, RoundingRule::Tenths),
    band(f64::INFINITY, RoundingRule::Nearest(1)),
];

/// Band table for a display unit, ordered by upper bound
#[must_use]
pub const fn bands_for(unit: DistanceUnit) -> &'static [MagnitudeBand] {
    match unit {
        DistanceUnit::Meters => METER_BANDS,
        DistanceUnit::Kilometers => KILOMETER_BANDS,
        DistanceUnit::Feet => FOOT_BANDS,
        DistanceUnit::Yards => YARD_BANDS,
        DistanceUnit::Miles => MILE_BANDS,
    }
}

/// Band containing `value` in `unit`
///
/// Every table ends with an unbounded band, so the fallback only matters
/// for NaN, which callers sanitize away before reaching here.
#[must_use]
pub fn band_for(unit: DistanceUnit, value: f64) -> MagnitudeBand {
    let bands = bands_for(unit);
    bands
        .iter()
        .find(|band| value < band.upper_bound)
        .or_else(|| bands.last())
        .copied()
        .unwrap_or(band(f64::INFINITY, RoundingRule::Nearest(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_UNITS: [DistanceUnit; 5] = [
        DistanceUnit::Meters,
        DistanceUnit::Kilometers,
        DistanceUnit::Feet,
        DistanceUnit::Yards,
        DistanceUnit::Miles,
    ];

    #[test]
    fn test_tables_are_ordered_and_unbounded() {
        for unit in ALL_UNITS {
            let bands = bands_for(unit);
            assert!(!bands.is_empty(), "{unit:?} has no bands");
            for pair in bands.windows(2) {
                assert!(pair[0].upper_bound < pair[1].upper_bound, "{unit:?} out of order");
            }
            assert!(
                bands.last().is_some_and(|b| b.upper_bound.is_infinite()),
                "{unit:?} does not cover [0, inf)"
            );
        }
    }

    #[test]
    fn test_boundary_uses_upper_band() {
        assert_eq!(band_for(DistanceUnit::Kilometers, 9.99).rule, RoundingRule::Tenths);
        assert_eq!(band_for(DistanceUnit::Kilometers, 10.0).rule, RoundingRule::Nearest(1));
        assert_eq!(band_for(DistanceUnit::Feet, 49.9).rule, RoundingRule::Nearest(5));
        assert_eq!(band_for(DistanceUnit::Feet, 50.0).rule, RoundingRule::Nearest(10));
        assert_eq!(band_for(DistanceUnit::Feet, 500.0).rule, RoundingRule::Nearest(100));
        assert_eq!(band_for(DistanceUnit::Yards, 10.0).rule, RoundingRule::Nearest(10));
        assert_eq!(band_for(DistanceUnit::Meters, 100.0).rule, RoundingRule::Nearest(100));
    }

    #[test]
    fn test_rule_application() {
        assert!((RoundingRule::Nearest(100).apply(853.0) - 900.0).abs() < f64::EPSILON);
        assert!((RoundingRule::Tenths.apply(8.145) - 8.1).abs() < 1e-9);
        assert!(RoundingRule::Tenths.is_fractional());
        assert!(!RoundingRule::Nearest(5).is_fractional());
    }
}
