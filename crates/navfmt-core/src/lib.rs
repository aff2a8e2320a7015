// ABOUTME: Core types and constants for the navfmt measurement formatting engine
// ABOUTME: Foundation crate with error handling, unit models, and conversion constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # navfmt Core
//!
//! Foundation crate providing the shared value types for the navfmt
//! measurement formatting engine. Everything here is plain immutable data:
//! the formatting algorithms themselves live in the `navfmt` crate.
//!
//! ## Modules
//!
//! - **errors**: `FormatError` taxonomy and the `FormatResult` alias
//! - **constants**: Conversion factors and environment variable names
//! - **models**: Unit systems, distance/speed/duration units, region codes

/// Error taxonomy shared by every formatting component
pub mod errors;

/// Conversion factors and configuration keys organized by domain
pub mod constants;

/// Value models (unit systems, units, region codes, duration styles)
pub mod models;

pub use errors::{FormatError, FormatResult};
