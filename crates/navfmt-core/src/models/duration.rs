// ABOUTME: Duration unit, style, and leading-zero policy types
// ABOUTME: DurationUnits is a non-empty, largest-first, duplicate-free unit set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::units::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::errors::{FormatError, UnitKind};

/// A unit a duration can be decomposed into
///
/// Variants are declared largest first, so the derived `Ord` sorts
/// days before hours before minutes before seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationUnit {
    /// 86 400 seconds
    Days,
    /// 3 600 seconds
    Hours,
    /// 60 seconds
    Minutes,
    /// 1 second
    Seconds,
}

impl DurationUnit {
    /// Number of whole seconds in one unit
    #[must_use]
    pub const fn seconds(self) -> u64 {
        match self {
            Self::Days => SECONDS_PER_DAY,
            Self::Hours => SECONDS_PER_HOUR,
            Self::Minutes => SECONDS_PER_MINUTE,
            Self::Seconds => 1,
        }
    }

    /// Abbreviated label ("d", "h", "m", "s")
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Days => "d",
            Self::Hours => "h",
            Self::Minutes => "m",
            Self::Seconds => "s",
        }
    }

    /// Spelled-out label, singular for exactly one and plural otherwise
    #[must_use]
    pub const fn long_label(self, value: u64) -> &'static str {
        let singular = value == 1;
        match self {
            Self::Days if singular => "day",
            Self::Days => "days",
            Self::Hours if singular => "hour",
            Self::Hours => "hours",
            Self::Minutes if singular => "minute",
            Self::Minutes => "minutes",
            Self::Seconds if singular => "second",
            Self::Seconds => "seconds",
        }
    }

    /// Configuration name for this unit
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DurationUnit {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "d" | "day" | "days" => Ok(Self::Days),
            "h" | "hour" | "hours" => Ok(Self::Hours),
            "m" | "min" | "minute" | "minutes" => Ok(Self::Minutes),
            "s" | "sec" | "second" | "seconds" => Ok(Self::Seconds),
            _ => Err(FormatError::unknown_unit(UnitKind::Duration, s)),
        }
    }
}

/// Non-empty ordered set of duration units, largest unit first
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<DurationUnit>", into = "Vec<DurationUnit>")]
pub struct DurationUnits(Vec<DurationUnit>);

impl DurationUnits {
    /// Build a unit set, sorting largest to smallest and dropping duplicates
    ///
    /// # Errors
    ///
    /// Returns `EmptyDurationUnits` when no units are given.
    pub fn new(units: impl IntoIterator<Item = DurationUnit>) -> Result<Self, FormatError> {
        let mut units: Vec<DurationUnit> = units.into_iter().collect();
        units.sort_unstable();
        units.dedup();
        if units.is_empty() {
            return Err(FormatError::EmptyDurationUnits);
        }
        Ok(Self(units))
    }

    /// Set containing a single unit
    #[must_use]
    pub fn single(unit: DurationUnit) -> Self {
        Self(vec![unit])
    }

    /// Parse a comma separated list such as `hours,minutes`
    ///
    /// # Errors
    ///
    /// Returns `UnknownUnit` for an unrecognized entry, or
    /// `EmptyDurationUnits` when the list has no entries.
    pub fn parse_list(list: &str) -> Result<Self, FormatError> {
        let units = list
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<DurationUnit>, _>>()?;
        Self::new(units)
    }

    /// Units in order, largest first
    #[must_use]
    pub fn as_slice(&self) -> &[DurationUnit] {
        &self.0
    }

    /// Smallest unit in the set, which absorbs the remainder
    #[must_use]
    pub fn smallest(&self) -> DurationUnit {
        // Non-empty by construction
        self.0.last().copied().unwrap_or(DurationUnit::Seconds)
    }
}

impl Default for DurationUnits {
    fn default() -> Self {
        Self(vec![DurationUnit::Hours, DurationUnit::Minutes])
    }
}

impl TryFrom<Vec<DurationUnit>> for DurationUnits {
    type Error = FormatError;

    fn try_from(units: Vec<DurationUnit>) -> Result<Self, Self::Error> {
        Self::new(units)
    }
}

impl From<DurationUnits> for Vec<DurationUnit> {
    fn from(units: DurationUnits) -> Self {
        units.0
    }
}

impl fmt::Display for DurationUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|unit| unit.as_str()).collect();
        f.write_str(&names.join(","))
    }
}

/// Label style for rendered duration components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationStyle {
    /// Abbreviated labels with no space ("23h 59m")
    #[default]
    Short,
    /// Spelled-out labels ("23 hours 59 minutes")
    Long,
}

impl FromStr for DurationStyle {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" | "abbreviated" => Ok(Self::Short),
            "long" | "full" => Ok(Self::Long),
            _ => Err(FormatError::unknown_unit(UnitKind::DurationStyle, s)),
        }
    }
}

/// How a zero-valued leading component is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadingZeroPolicy {
    /// Omit leading zero components ("5m"); an all-zero duration renders
    /// only the smallest unit ("0m")
    #[default]
    Skip,
    /// Always render the first unit, even when zero ("0h 5m")
    Render,
}

impl FromStr for LeadingZeroPolicy {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "skip" | "drop" => Ok(Self::Skip),
            "render" | "keep" => Ok(Self::Render),
            _ => Err(FormatError::unknown_unit(UnitKind::LeadingZeroPolicy, s)),
        }
    }
}
