// ABOUTME: Main library entry point for the navfmt measurement formatting engine
// ABOUTME: Locale-aware distance, duration, and speed formatting for navigation UIs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # navfmt
//!
//! Turn-by-turn navigation screens repeatedly turn raw SI values from the
//! routing engine into short, locale-correct strings: "1.1 mi", "23h 59m",
//! "900 ft". This crate is the single implementation of those rules so every
//! client platform displays the same numbers for the same trip.
//!
//! ## Components
//!
//! - **rounding**: round to the nearest increment, ties away from zero
//! - **units**: region to unit system resolution and magnitude band tables
//! - **locale**: separators, unit spacing, and abbreviations per locale tag
//! - **formatters**: distance, duration, and speed formatters plus the
//!   [`MeasurementFormatter`](formatters::MeasurementFormatter) facade
//! - **estimates**: trip progress to display strings
//! - **config**: immutable `FormatterConfig` values, JSON and environment loading
//!
//! All formatting is pure and synchronous; the lookup tables are read-only
//! statics, so formatters can be shared across threads without coordination.
//!
//! ## Example
//!
//! ```rust
//! use navfmt::formatters::DistanceFormatter;
//! use navfmt::locale::LocaleInfo;
//! use navfmt::models::UnitSystem;
//!
//! let german = LocaleInfo::parse("de-DE")?;
//! assert_eq!(DistanceFormatter::format(8_145.0, UnitSystem::Metric, &german), "8,1 km");
//! # Ok::<(), navfmt::errors::FormatError>(())
//! ```

/// Configuration values and environment loading
pub mod config;

/// Error types re-exported from `navfmt-core`
pub mod errors;

/// Trip progress to display string estimates
pub mod estimates;

/// Distance, duration, and speed formatters
pub mod formatters;

/// Locale parsing and number punctuation
pub mod locale;

/// Logging configuration for binaries
pub mod logging;

/// Round-to-nearest-increment primitive
pub mod rounding;

/// Unit system resolution and magnitude bands
pub mod units;

/// Conversion constants and configuration keys
pub use navfmt_core::constants;

/// Unit and style value models
pub use navfmt_core::models;

pub use config::{FormatterConfig, FormatterOverrides, UnitSystemPreference};
pub use estimates::{TripEstimate, TripProgress};
pub use formatters::{DistanceFormatter, DurationFormatter, MeasurementFormatter, SpeedConverter};
pub use locale::LocaleInfo;
pub use rounding::round_to_nearest;
pub use units::UnitSystemResolver;
