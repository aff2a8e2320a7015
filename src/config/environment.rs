// ABOUTME: Environment-based formatter configuration loading
// ABOUTME: Reads NAVFMT_* variables, falling back to defaults for unset keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;

use navfmt_core::constants::env_config;
use navfmt_core::errors::FormatError;
use navfmt_core::models::{DurationStyle, DurationUnits, LeadingZeroPolicy};
use tracing::{info, warn};

use super::formatter::{FormatterConfig, UnitSystemPreference};
use crate::locale::LocaleInfo;

/// Values that replace their `NAVFMT_*` variable when set
///
/// A replaced variable is never read, so an invalid value in it is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatterOverrides {
    /// Replaces `NAVFMT_LOCALE`
    pub locale: Option<String>,
    /// Replaces `NAVFMT_UNIT_SYSTEM`
    pub unit_system: Option<UnitSystemPreference>,
    /// Replaces `NAVFMT_DURATION_UNITS`
    pub duration_units: Option<DurationUnits>,
    /// Replaces `NAVFMT_DURATION_STYLE`
    pub duration_style: Option<DurationStyle>,
    /// Replaces `NAVFMT_LEADING_ZERO`
    pub leading_zero: Option<LeadingZeroPolicy>,
}

impl FormatterConfig {
    /// Load configuration from `NAVFMT_*` environment variables
    ///
    /// Unset variables keep their defaults. Set-but-invalid variables are errors.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the offending environment variable.
    pub fn from_env() -> Result<Self, FormatError> {
        Self::from_env_with_overrides(FormatterOverrides::default())
    }

    /// Load configuration, taking each value from `overrides` when set and
    /// from its environment variable otherwise
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the offending environment variable, or
    /// the `locale` field when an overriding locale tag is malformed.
    pub fn from_env_with_overrides(overrides: FormatterOverrides) -> Result<Self, FormatError> {
        let defaults = Self::default();

        let locale_key = if overrides.locale.is_some() {
            "locale"
        } else {
            env_config::LOCALE
        };
        let config = Self {
            unit_system: layered(overrides.unit_system, env_config::UNIT_SYSTEM, str::parse)?
                .unwrap_or(defaults.unit_system),
            locale: overrides
                .locale
                .unwrap_or_else(|| env_var_or(env_config::LOCALE, &defaults.locale)),
            duration_units: layered(
                overrides.duration_units,
                env_config::DURATION_UNITS,
                DurationUnits::parse_list,
            )?
            .unwrap_or(defaults.duration_units),
            duration_style: layered(overrides.duration_style, env_config::DURATION_STYLE, str::parse)?
                .unwrap_or(defaults.duration_style),
            leading_zero: layered(overrides.leading_zero, env_config::LEADING_ZERO, str::parse)?
                .unwrap_or(defaults.leading_zero),
        };

        LocaleInfo::parse(&config.locale)
            .map_err(|err| FormatError::invalid_config(locale_key, err.to_string()))?;

        info!(
            locale = %config.locale,
            unit_system = %config.unit_system,
            duration_units = %config.duration_units,
            duration_style = ?config.duration_style,
            leading_zero = ?config.leading_zero,
            "Formatter configuration loaded from environment"
        );
        Ok(config)
    }

    /// Load from the environment, logging and falling back to defaults on error
    #[must_use]
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|err| {
            warn!("Ignoring invalid formatter environment: {err}");
            Self::default()
        })
    }
}

/// Take `value` when set, otherwise parse the environment variable `key`
fn layered<T>(
    value: Option<T>,
    key: &'static str,
    parse: impl Fn(&str) -> Result<T, FormatError>,
) -> Result<Option<T>, FormatError> {
    match value {
        Some(value) => Ok(Some(value)),
        None => parse_env(key, parse),
    }
}

/// Parse an optional environment variable
fn parse_env<T>(
    key: &'static str,
    parse: impl Fn(&str) -> Result<T, FormatError>,
) -> Result<Option<T>, FormatError> {
    match env::var(key) {
        Ok(raw) => parse(&raw)
            .map(Some)
            .map_err(|err| FormatError::invalid_config(key, err.to_string())),
        Err(_) => Ok(None),
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
