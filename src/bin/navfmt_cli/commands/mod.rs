// ABOUTME: Command implementations for the navfmt CLI
// ABOUTME: Each command formats its inputs and hands rows to the display helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use navfmt::estimates::TripProgress;
use navfmt::formatters::{MeasurementFormatter, SpeedConverter};
use navfmt::models::SpeedUnit;

use crate::helpers::display::{print_estimate, print_rows, FormattedRow};

/// Format each distance in meters
pub fn distance(formatter: &MeasurementFormatter, meters: &[f64], json: bool) -> Result<()> {
    let rows: Vec<FormattedRow> = meters
        .iter()
        .map(|&value| FormattedRow::new(value, "m", formatter.distance(value)))
        .collect();
    print_rows(&rows, json)
}

/// Format each duration in seconds
pub fn duration(formatter: &MeasurementFormatter, seconds: &[f64], json: bool) -> Result<()> {
    let rows: Vec<FormattedRow> = seconds
        .iter()
        .map(|&value| FormattedRow::new(value, "s", formatter.duration(value)))
        .collect();
    print_rows(&rows, json)
}

/// Convert a speed, or render its display label when `label` is set
pub fn speed(
    formatter: &MeasurementFormatter,
    value: f64,
    from: SpeedUnit,
    to: SpeedUnit,
    label: bool,
    json: bool,
) -> Result<()> {
    let output = if label {
        let mps = SpeedConverter::convert(value, from, SpeedUnit::MetersPerSecond);
        formatter.speed(mps)
    } else {
        format!("{} {}", SpeedConverter::convert(value, from, to), to.abbreviation())
    };
    print_rows(&[FormattedRow::new(value, from.abbreviation(), output)], json)
}

/// Build and print a trip estimate
pub fn estimate(
    formatter: &MeasurementFormatter,
    distance_remaining: f64,
    duration_remaining: f64,
    distance_to_next_maneuver: Option<f64>,
    current_speed: Option<f64>,
    json: bool,
) -> Result<()> {
    let progress = TripProgress {
        distance_remaining,
        duration_remaining,
        distance_to_next_maneuver,
        current_speed,
    };
    print_estimate(&formatter.estimate(&progress), json)
}
