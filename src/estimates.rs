// ABOUTME: Trip estimate builder turning navigation progress into display strings
// ABOUTME: Feeds banners, notifications, and car display estimate panels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::formatters::MeasurementFormatter;

/// Raw progress values reported by the navigation engine, in SI units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TripProgress {
    /// Meters left until arrival
    pub distance_remaining: f64,
    /// Seconds left until arrival
    pub duration_remaining: f64,
    /// Meters until the next maneuver, when a maneuver is upcoming
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_to_next_maneuver: Option<f64>,
    /// Current speed in meters per second, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_speed: Option<f64>,
}

/// Display strings derived from one [`TripProgress`] snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripEstimate {
    /// Remaining distance ("12 km")
    pub distance_remaining: String,
    /// Remaining duration ("1h 5m")
    pub duration_remaining: String,
    /// Distance to the next maneuver ("900 ft")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_maneuver: Option<String>,
    /// Current speed ("25 mph")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,
}

impl MeasurementFormatter {
    /// Build every display string for a progress snapshot
    #[must_use]
    pub fn estimate(&self, progress: &TripProgress) -> TripEstimate {
        TripEstimate {
            distance_remaining: self.distance(progress.distance_remaining),
            duration_remaining: self.duration(progress.duration_remaining),
            next_maneuver: progress
                .distance_to_next_maneuver
                .map(|meters| self.distance(meters)),
            speed: progress.current_speed.map(|mps| self.speed(mps)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormatterConfig;

    #[test]
    fn test_estimate_us_trip() {
        let formatter = MeasurementFormatter::new(&FormatterConfig::default());
        let estimate = formatter.estimate(&TripProgress {
            distance_remaining: 16_093.44,
            duration_remaining: 3_900.0,
            distance_to_next_maneuver: Some(250.0),
            current_speed: Some(11.176),
        });
        assert_eq!(estimate.distance_remaining, "10 mi");
        assert_eq!(estimate.duration_remaining, "1h 5m");
        assert_eq!(estimate.next_maneuver.as_deref(), Some("800 ft"));
        assert_eq!(estimate.speed.as_deref(), Some("25 mph"));
    }

    #[test]
    fn test_estimate_omits_missing_fields() {
        let formatter = MeasurementFormatter::new(&FormatterConfig::default().with_locale("de-DE"));
        let estimate = formatter.estimate(&TripProgress {
            distance_remaining: 8_145.0,
            duration_remaining: 59.0,
            ..TripProgress::default()
        });
        assert_eq!(estimate.distance_remaining, "8,1 km");
        assert_eq!(estimate.duration_remaining, "0m");
        assert!(estimate.next_maneuver.is_none());
        let json = serde_json::to_string(&estimate).expect("estimate serializes");
        assert!(!json.contains("next_maneuver"));
    }
}
