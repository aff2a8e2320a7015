// ABOUTME: Region code newtype for unit system resolution
// ABOUTME: Normalizes ISO 3166-1 alpha-2 and UN M.49 numeric region identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FormatError;

/// A normalized region identifier (`US`, `GB`, `DE`, `419`, ...)
///
/// Alphabetic codes are upper-cased on construction so lookups are
/// case-insensitive for callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegionCode(String);

impl RegionCode {
    /// Parse and normalize a region code
    ///
    /// # Errors
    ///
    /// Returns `InvalidLocaleTag` when the code is neither two ASCII letters
    /// nor three ASCII digits.
    pub fn new(code: &str) -> Result<Self, FormatError> {
        let code = code.trim();
        let is_alpha2 = code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic());
        let is_numeric3 = code.len() == 3 && code.chars().all(|c| c.is_ascii_digit());
        if is_alpha2 || is_numeric3 {
            Ok(Self(code.to_ascii_uppercase()))
        } else {
            Err(FormatError::InvalidLocaleTag {
                tag: code.to_owned(),
            })
        }
    }

    /// Normalized code as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RegionCode {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RegionCode {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<RegionCode> for String {
    fn from(region: RegionCode) -> Self {
        region.0
    }
}
