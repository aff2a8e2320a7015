// ABOUTME: Unit system enumeration pairing short and long distance units
// ABOUTME: Carries the raw-meter threshold at which display switches units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::units::DistanceUnit;
use crate::constants::units::{
    IMPERIAL_FEET_LARGE_UNIT_THRESHOLD_METERS, IMPERIAL_YARDS_LARGE_UNIT_THRESHOLD_METERS,
    METRIC_LARGE_UNIT_THRESHOLD_METERS,
};
use crate::errors::{FormatError, UnitKind};

/// A coherent pair of short/long distance units plus the switch-over threshold
///
/// The threshold is always expressed in meters so that unit selection is a
/// single comparison against the raw input, whatever the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Meters and kilometers
    Metric,
    /// Feet and miles (United States)
    ImperialFeet,
    /// Yards and miles (United Kingdom)
    ImperialYards,
}

impl UnitSystem {
    /// All unit systems, in declaration order
    pub const ALL: [Self; 3] = [Self::Metric, Self::ImperialFeet, Self::ImperialYards];

    /// Unit used below the large-unit threshold
    #[must_use]
    pub const fn short_unit(self) -> DistanceUnit {
        match self {
            Self::Metric => DistanceUnit::Meters,
            Self::ImperialFeet => DistanceUnit::Feet,
            Self::ImperialYards => DistanceUnit::Yards,
        }
    }

    /// Unit used at or above the large-unit threshold
    #[must_use]
    pub const fn long_unit(self) -> DistanceUnit {
        match self {
            Self::Metric => DistanceUnit::Kilometers,
            Self::ImperialFeet | Self::ImperialYards => DistanceUnit::Miles,
        }
    }

    /// Short and long units as a pair
    #[must_use]
    pub const fn short_and_long_units(self) -> (DistanceUnit, DistanceUnit) {
        (self.short_unit(), self.long_unit())
    }

    /// Raw meters at which the long unit becomes preferred
    #[must_use]
    pub const fn large_unit_threshold_meters(self) -> f64 {
        match self {
            Self::Metric => METRIC_LARGE_UNIT_THRESHOLD_METERS,
            Self::ImperialFeet => IMPERIAL_FEET_LARGE_UNIT_THRESHOLD_METERS,
            Self::ImperialYards => IMPERIAL_YARDS_LARGE_UNIT_THRESHOLD_METERS,
        }
    }

    /// Select the display unit for a raw meter value
    #[must_use]
    pub fn display_unit_for(self, meters: f64) -> DistanceUnit {
        if meters < self.large_unit_threshold_meters() {
            self.short_unit()
        } else {
            self.long_unit()
        }
    }

    /// Whether this system displays speed in miles per hour
    #[must_use]
    pub const fn is_imperial(self) -> bool {
        matches!(self, Self::ImperialFeet | Self::ImperialYards)
    }

    /// Configuration name for this system
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::ImperialFeet => "imperial_feet",
            Self::ImperialYards => "imperial_yards",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "metric" => Ok(Self::Metric),
            "imperial_feet" | "imperial" | "us" | "feet" => Ok(Self::ImperialFeet),
            "imperial_yards" | "uk" | "yards" => Ok(Self::ImperialYards),
            _ => Err(FormatError::unknown_unit(UnitKind::UnitSystem, s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_pairs_and_thresholds() {
        assert_eq!(
            UnitSystem::Metric.short_and_long_units(),
            (DistanceUnit::Meters, DistanceUnit::Kilometers)
        );
        assert_eq!(
            UnitSystem::ImperialFeet.short_and_long_units(),
            (DistanceUnit::Feet, DistanceUnit::Miles)
        );
        assert_eq!(
            UnitSystem::ImperialYards.short_and_long_units(),
            (DistanceUnit::Yards, DistanceUnit::Miles)
        );
        assert!((UnitSystem::Metric.large_unit_threshold_meters() - 1000.0).abs() < f64::EPSILON);
        assert!((UnitSystem::ImperialFeet.large_unit_threshold_meters() - 289.0).abs() < f64::EPSILON);
        assert!((UnitSystem::ImperialYards.large_unit_threshold_meters() - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display_unit_switches_at_threshold() {
        assert_eq!(UnitSystem::Metric.display_unit_for(999.9), DistanceUnit::Meters);
        assert_eq!(UnitSystem::Metric.display_unit_for(1000.0), DistanceUnit::Kilometers);
        assert_eq!(UnitSystem::ImperialFeet.display_unit_for(288.9), DistanceUnit::Feet);
        assert_eq!(UnitSystem::ImperialFeet.display_unit_for(289.0), DistanceUnit::Miles);
        assert_eq!(UnitSystem::ImperialYards.display_unit_for(299.0), DistanceUnit::Yards);
        assert_eq!(UnitSystem::ImperialYards.display_unit_for(300.0), DistanceUnit::Miles);
    }

    #[test]
    fn test_parse_unit_system() {
        assert_eq!("metric".parse::<UnitSystem>(), Ok(UnitSystem::Metric));
        assert_eq!("Imperial-Feet".parse::<UnitSystem>(), Ok(UnitSystem::ImperialFeet));
        assert_eq!("imperial_yards".parse::<UnitSystem>(), Ok(UnitSystem::ImperialYards));
        assert!("nautical".parse::<UnitSystem>().is_err());
    }
}
