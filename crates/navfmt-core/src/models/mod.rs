// ABOUTME: Value models for measurement formatting
// ABOUTME: Unit systems, distance/speed/duration units, and region codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Immutable value models shared across the formatting engine.
//!
//! All types here are `Copy` or cheaply clonable and carry no mutable state,
//! so they can be cached per screen and shared across threads freely.

/// Duration units, styles, and the ordered unit set
pub mod duration;
/// ISO 3166 region codes
pub mod region;
/// Distance and speed units
pub mod units;
/// Metric / imperial unit systems
pub mod unit_system;

pub use duration::{DurationStyle, DurationUnit, DurationUnits, LeadingZeroPolicy};
pub use region::RegionCode;
pub use unit_system::UnitSystem;
pub use units::{DistanceUnit, SpeedUnit};
