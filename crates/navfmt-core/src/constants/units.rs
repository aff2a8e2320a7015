// ABOUTME: Unit conversion constants for distance, speed, and time
// ABOUTME: Provides named constants to eliminate magic numbers in formatting code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Meters per kilometer conversion factor
pub const METERS_PER_KM: f64 = 1000.0;

/// Meters per international mile
pub const METERS_PER_MILE: f64 = 1609.344;

/// Meters per international foot
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Meters per international yard
pub const METERS_PER_YARD: f64 = 0.9144;

/// Miles per hour in one meter per second
pub const MPH_PER_MPS: f64 = 2.23694;

/// Kilometers per hour in one meter per second
pub const KMH_PER_MPS: f64 = 3.6;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Seconds per hour
pub const SECONDS_PER_HOUR: u64 = 3_600;

/// Seconds per day
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Raw meters at which metric display switches from meters to kilometers
pub const METRIC_LARGE_UNIT_THRESHOLD_METERS: f64 = 1000.0;

/// Raw meters at which US display switches from feet to miles
pub const IMPERIAL_FEET_LARGE_UNIT_THRESHOLD_METERS: f64 = 289.0;

/// Raw meters at which UK display switches from yards to miles
pub const IMPERIAL_YARDS_LARGE_UNIT_THRESHOLD_METERS: f64 = 300.0;

/// Whole numbers at or above this value get digit grouping
pub const DIGIT_GROUPING_MIN: u64 = 1000;
