// ABOUTME: Distance and speed unit enumerations with conversion factors
// ABOUTME: Converts raw SI magnitudes into display units and back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::units::{
    KMH_PER_MPS, METERS_PER_FOOT, METERS_PER_KM, METERS_PER_MILE, METERS_PER_YARD, MPH_PER_MPS,
};
use crate::errors::{FormatError, UnitKind};

/// Distance units the engine can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    /// Meters
    Meters,
    /// Kilometers
    Kilometers,
    /// International feet
    Feet,
    /// International yards
    Yards,
    /// International miles
    Miles,
}

impl DistanceUnit {
    /// Length of one unit in meters
    #[must_use]
    pub const fn meters_per_unit(self) -> f64 {
        match self {
            Self::Meters => 1.0,
            Self::Kilometers => METERS_PER_KM,
            Self::Feet => METERS_PER_FOOT,
            Self::Yards => METERS_PER_YARD,
            Self::Miles => METERS_PER_MILE,
        }
    }

    /// Convert a raw meter value into this unit
    #[must_use]
    pub fn from_meters(self, meters: f64) -> f64 {
        meters / self.meters_per_unit()
    }

    /// Default abbreviation ("m", "km", "ft", "yd", "mi")
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Kilometers => "km",
            Self::Feet => "ft",
            Self::Yards => "yd",
            Self::Miles => "mi",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Speed units supported by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedUnit {
    /// Meters per second (SI, as reported by the navigation engine)
    MetersPerSecond,
    /// Miles per hour
    MilesPerHour,
    /// Kilometers per hour
    KilometersPerHour,
}

impl SpeedUnit {
    /// How many of this unit make up one meter per second
    #[must_use]
    pub const fn per_meter_per_second(self) -> f64 {
        match self {
            Self::MetersPerSecond => 1.0,
            Self::MilesPerHour => MPH_PER_MPS,
            Self::KilometersPerHour => KMH_PER_MPS,
        }
    }

    /// Display label ("m/s", "mph", "km/h")
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::MetersPerSecond => "m/s",
            Self::MilesPerHour => "mph",
            Self::KilometersPerHour => "km/h",
        }
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for SpeedUnit {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mps" | "m/s" | "meters_per_second" => Ok(Self::MetersPerSecond),
            "mph" | "miles_per_hour" => Ok(Self::MilesPerHour),
            "kmh" | "km/h" | "kph" | "kilometers_per_hour" => Ok(Self::KilometersPerHour),
            _ => Err(FormatError::unknown_unit(UnitKind::Speed, s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_conversion_factors() {
        assert!((DistanceUnit::Miles.from_meters(1_609_344.0) - 1000.0).abs() < 1e-9);
        assert!((DistanceUnit::Feet.from_meters(0.3048) - 1.0).abs() < 1e-12);
        assert!((DistanceUnit::Yards.from_meters(0.9144) - 1.0).abs() < 1e-12);
        assert!((DistanceUnit::Kilometers.from_meters(8_145.0) - 8.145).abs() < 1e-12);
    }

    #[test]
    fn test_parse_units() {
        assert_eq!("km/h".parse::<SpeedUnit>(), Ok(SpeedUnit::KilometersPerHour));
        assert_eq!("MPS".parse::<SpeedUnit>(), Ok(SpeedUnit::MetersPerSecond));
        assert!("knots".parse::<SpeedUnit>().is_err());
    }
}
