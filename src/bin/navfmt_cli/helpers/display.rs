// ABOUTME: Output formatting helpers for the navfmt CLI
// ABOUTME: Prints formatted rows and estimates as plain text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use navfmt::estimates::TripEstimate;
use serde::Serialize;

/// One formatted input value
#[derive(Debug, Serialize)]
pub struct FormattedRow {
    /// Raw input value
    pub input: f64,
    /// Unit of the raw input
    pub input_unit: &'static str,
    /// Display string
    pub output: String,
}

impl FormattedRow {
    pub const fn new(input: f64, input_unit: &'static str, output: String) -> Self {
        Self {
            input,
            input_unit,
            output,
        }
    }
}

/// Print rows one per line, or as a JSON array
pub fn print_rows(rows: &[FormattedRow], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rows)?);
    } else {
        for row in rows {
            println!("{}", row.output);
        }
    }
    Ok(())
}

/// Print a trip estimate as labelled lines, or as a JSON object
pub fn print_estimate(estimate: &TripEstimate, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(estimate)?);
        return Ok(());
    }
    println!("Distance remaining: {}", estimate.distance_remaining);
    println!("Time remaining:     {}", estimate.duration_remaining);
    if let Some(next) = &estimate.next_maneuver {
        println!("Next maneuver in:   {next}");
    }
    if let Some(speed) = &estimate.speed {
        println!("Speed:              {speed}");
    }
    Ok(())
}
