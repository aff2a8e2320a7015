// ABOUTME: Integration tests for the MeasurementFormatter facade and trip estimates
// ABOUTME: Checks locale-driven defaults, overrides, and sharing across threads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod common;

use std::thread;

use common::{formatter_for, formatter_with_units, units};
use navfmt::config::{FormatterConfig, UnitSystemPreference};
use navfmt::estimates::TripProgress;
use navfmt::formatters::MeasurementFormatter;
use navfmt::models::{DurationStyle, DurationUnit, LeadingZeroPolicy, SpeedUnit, UnitSystem};

#[test]
fn test_locale_drives_units_and_punctuation() {
    let us = formatter_for("en-US");
    assert_eq!(us.unit_system(), UnitSystem::ImperialFeet);
    assert_eq!(us.distance(1_609_344.0), "1,000 mi");

    let uk = formatter_for("en-GB");
    assert_eq!(uk.distance(275.0), "300 yd");
    assert_eq!(uk.speed_unit(), SpeedUnit::MilesPerHour);

    let de = formatter_for("de-DE");
    assert_eq!(de.distance(1_000_000.0), "1.000 km");
    assert_eq!(de.speed(11.111), "40 km/h");
}

#[test]
fn test_forced_unit_system_keeps_locale_punctuation() {
    let formatter = formatter_with_units("de-DE", UnitSystemPreference::ImperialFeet);
    assert_eq!(formatter.distance(1_770.0), "1,1 mi");
    assert_eq!(formatter.speed(11.176), "25 mph");
}

#[test]
fn test_duration_settings() {
    common::init_test_logging();
    let formatter = MeasurementFormatter::new(
        &FormatterConfig::default()
            .with_duration_units(units(&[DurationUnit::Minutes, DurationUnit::Seconds]))
            .with_duration_style(DurationStyle::Long)
            .with_leading_zero(LeadingZeroPolicy::Render),
    );
    assert_eq!(formatter.duration(125.0), "2 minutes 5 seconds");
    assert_eq!(formatter.duration(5.0), "0 minutes 5 seconds");
    assert_eq!(formatter.duration_with_style(125.0, DurationStyle::Short), "2m 5s");
}

#[test]
fn test_distance_measurement_matches_rendered_value() {
    let formatter = formatter_for("en-US");
    let measurement = formatter.distance_measurement(260.0);
    assert_eq!(
        measurement.format_value(formatter.locale()),
        formatter.distance(260.0).trim_end_matches(" ft")
    );
}

#[test]
fn test_estimate_for_uk_trip() {
    let formatter = formatter_for("en-GB");
    let estimate = formatter.estimate(&TripProgress {
        distance_remaining: 4_828.032,
        duration_remaining: 540.0,
        distance_to_next_maneuver: Some(20.0),
        current_speed: None,
    });
    assert_eq!(estimate.distance_remaining, "3 mi");
    assert_eq!(estimate.duration_remaining, "9m");
    assert_eq!(estimate.next_maneuver.as_deref(), Some("20 yd"));
    assert!(estimate.speed.is_none());
}

#[test]
fn test_estimate_from_json_progress() {
    let progress: TripProgress = serde_json::from_str(
        r#"{"distance_remaining":8145.0,"duration_remaining":3900.0,"current_speed":13.9}"#,
    )
    .expect("progress document parses");
    let estimate = formatter_for("de-DE").estimate(&progress);
    assert_eq!(estimate.distance_remaining, "8,1 km");
    assert_eq!(estimate.duration_remaining, "1h 5m");
    assert_eq!(estimate.speed.as_deref(), Some("50 km/h"));
    assert!(estimate.next_maneuver.is_none());
}

#[test]
fn test_formatter_is_shareable_across_threads() {
    let formatter = formatter_for("en-US");
    let results: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (1..=4)
            .map(|step| {
                let formatter = &formatter;
                scope.spawn(move || formatter.distance(f64::from(step) * 65.0))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("formatter thread completes"))
            .collect()
    });
    let sequential: Vec<String> = (1..=4)
        .map(|step| formatter.distance(f64::from(step) * 65.0))
        .collect();
    assert_eq!(results, sequential);
}

#[test]
fn test_malformed_locale_agrees_with_region_resolution() {
    common::init_test_logging();
    for tag in ["C", "POSIX", "??", "C.UTF-8"] {
        let formatter = MeasurementFormatter::new(&FormatterConfig::default().with_locale(tag));
        assert_eq!(formatter.unit_system(), UnitSystem::Metric, "{tag}");
        assert_eq!(
            formatter.unit_system(),
            navfmt::units::UnitSystemResolver::resolve_str(tag),
            "{tag}"
        );
        assert_eq!(formatter.distance(260.0), "300 m", "{tag}");
    }
}
