// ABOUTME: Formatter configuration value and unit system preference
// ABOUTME: Serializable, immutable settings a UI layer holds per screen
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use navfmt_core::constants::defaults;
use navfmt_core::errors::{FormatError, UnitKind};
use navfmt_core::models::{DurationStyle, DurationUnits, LeadingZeroPolicy, UnitSystem};
use serde::{Deserialize, Serialize};

use crate::locale::LocaleInfo;
use crate::units::UnitSystemResolver;

/// Unit system selection: derived from the locale or forced by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystemPreference {
    /// Resolve from the locale's region
    #[default]
    Auto,
    /// Always meters and kilometers
    Metric,
    /// Always feet and miles
    ImperialFeet,
    /// Always yards and miles
    ImperialYards,
}

impl UnitSystemPreference {
    /// Concrete unit system for `locale`
    #[must_use]
    pub fn resolve(self, locale: &LocaleInfo) -> UnitSystem {
        match self {
            Self::Auto => UnitSystemResolver::resolve_optional(locale.region()),
            Self::Metric => UnitSystem::Metric,
            Self::ImperialFeet => UnitSystem::ImperialFeet,
            Self::ImperialYards => UnitSystem::ImperialYards,
        }
    }

    /// Configuration name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Metric => "metric",
            Self::ImperialFeet => "imperial_feet",
            Self::ImperialYards => "imperial_yards",
        }
    }
}

impl From<UnitSystem> for UnitSystemPreference {
    fn from(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Metric => Self::Metric,
            UnitSystem::ImperialFeet => Self::ImperialFeet,
            UnitSystem::ImperialYards => Self::ImperialYards,
        }
    }
}

impl fmt::Display for UnitSystemPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystemPreference {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" | "locale" | "" => Ok(Self::Auto),
            other => other
                .parse::<UnitSystem>()
                .map(Self::from)
                .map_err(|_| FormatError::unknown_unit(UnitKind::UnitSystem, s)),
        }
    }
}

/// Everything a caller chooses about how measurements are displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Unit system override, or `Auto` to follow the locale
    pub unit_system: UnitSystemPreference,
    /// Locale tag (`en-US`, `de_DE`, ...)
    pub locale: String,
    /// Units durations are decomposed into, largest first
    pub duration_units: DurationUnits,
    /// Short ("1h") or long ("1 hour") duration labels
    pub duration_style: DurationStyle,
    /// Whether a zero leading duration component is rendered
    pub leading_zero: LeadingZeroPolicy,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            unit_system: UnitSystemPreference::Auto,
            locale: defaults::LOCALE.to_owned(),
            duration_units: DurationUnits::default(),
            duration_style: DurationStyle::Short,
            leading_zero: LeadingZeroPolicy::Skip,
        }
    }
}

impl FormatterConfig {
    /// Replace the locale tag
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Replace the unit system preference
    #[must_use]
    pub const fn with_unit_system(mut self, unit_system: UnitSystemPreference) -> Self {
        self.unit_system = unit_system;
        self
    }

    /// Replace the duration units
    #[must_use]
    pub fn with_duration_units(mut self, units: DurationUnits) -> Self {
        self.duration_units = units;
        self
    }

    /// Replace the duration style
    #[must_use]
    pub const fn with_duration_style(mut self, style: DurationStyle) -> Self {
        self.duration_style = style;
        self
    }

    /// Replace the leading-zero policy
    #[must_use]
    pub const fn with_leading_zero(mut self, policy: LeadingZeroPolicy) -> Self {
        self.leading_zero = policy;
        self
    }

    /// Check that the locale tag parses
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the `locale` field when the tag is malformed.
    pub fn validate(&self) -> Result<(), FormatError> {
        LocaleInfo::parse(&self.locale)
            .map(|_| ())
            .map_err(|err| FormatError::invalid_config("locale", err.to_string()))
    }

    /// Load from a JSON document; missing fields take their defaults
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` when the JSON is malformed or the result fails validation.
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| FormatError::invalid_config("json", err.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
