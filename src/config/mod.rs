// ABOUTME: Configuration module for measurement formatting
// ABOUTME: Immutable FormatterConfig values built in code or loaded from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for navfmt
//!
//! - **Formatter**: `FormatterConfig` and the `UnitSystemPreference` override
//! - **Environment**: `NAVFMT_*` environment variable loading
//!
//! There is no process-wide formatter state: callers construct a config,
//! hold it for as long as a screen lives, and pass it to a formatter.

/// Environment variable loading for `FormatterConfig`
pub mod environment;
/// Formatter configuration value types
pub mod formatter;

pub use environment::FormatterOverrides;
pub use formatter::{FormatterConfig, UnitSystemPreference};
