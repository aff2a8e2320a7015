// ABOUTME: Locale descriptors carrying separators, unit spacing, and abbreviations
// ABOUTME: Parses BCP 47 / POSIX locale tags into an explicit LocaleInfo value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Locale Information
//!
//! Callers resolve the platform locale once and hand the tag to
//! [`LocaleInfo::parse`]; nothing here queries the operating system.
//! The separator table covers the languages the navigation clients ship in.
//! Unknown languages use English punctuation.

use std::fmt;
use std::str::FromStr;

use navfmt_core::constants::defaults;
use navfmt_core::constants::units::DIGIT_GROUPING_MIN;
use navfmt_core::errors::{FormatError, FormatResult};
use navfmt_core::models::{DistanceUnit, RegionCode};

const NO_BREAK_SPACE: char = '\u{00A0}';
const NARROW_NO_BREAK_SPACE: char = '\u{202F}';
const RIGHT_SINGLE_QUOTE: char = '\u{2019}';

/// Number punctuation for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NumberSymbols {
    decimal: char,
    grouping: char,
    unit_spacing: char,
}

impl NumberSymbols {
    const ENGLISH: Self = Self {
        decimal: '.',
        grouping: ',',
        unit_spacing: ' ',
    };

    const fn new(decimal: char, grouping: char, unit_spacing: char) -> Self {
        Self {
            decimal,
            grouping,
            unit_spacing,
        }
    }

    fn lookup(language: &str, region: Option<&RegionCode>) -> Self {
        let region = region.map(RegionCode::as_str);
        match (language, region) {
            ("de" | "it", Some("CH")) => Self::new('.', RIGHT_SINGLE_QUOTE, ' '),
            ("de" | "es" | "it" | "nl" | "pt" | "da" | "id" | "tr", _) => Self::new(',', '.', ' '),
            ("fr", _) => Self::new(',', NARROW_NO_BREAK_SPACE, NO_BREAK_SPACE),
            ("sv" | "nb" | "fi" | "pl" | "cs" | "ru" | "uk", _) => {
                Self::new(',', NO_BREAK_SPACE, ' ')
            }
            _ => Self::ENGLISH,
        }
    }
}

/// Resolved locale: language, optional region, and number punctuation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
    tag: String,
    language: String,
    region: Option<RegionCode>,
    symbols: NumberSymbols,
}

impl LocaleInfo {
    /// Parse a locale tag such as `de-DE`, `en_US`, `fr`, or `en_GB.UTF-8`
    ///
    /// Script subtags (`zh-Hant-TW`) and extensions are skipped; the first
    /// two-letter or three-digit subtag after the language is the region.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLocaleTag` when the language subtag is missing or is
    /// not two or three ASCII letters.
    pub fn parse(tag: &str) -> FormatResult<Self> {
        let trimmed = tag.trim();
        let without_encoding = trimmed.split(['.', '@']).next().unwrap_or_default();
        let mut subtags = without_encoding.split(['-', '_']);

        let language = subtags.next().unwrap_or_default().to_ascii_lowercase();
        let valid_language = (2..=3).contains(&language.len())
            && language.chars().all(|c| c.is_ascii_alphabetic());
        if !valid_language {
            return Err(FormatError::InvalidLocaleTag {
                tag: trimmed.to_owned(),
            });
        }

        let region = subtags
            .take_while(|subtag| *subtag != "u" && *subtag != "x")
            .find_map(|subtag| RegionCode::new(subtag).ok());

        let symbols = NumberSymbols::lookup(&language, region.as_ref());
        Ok(Self {
            tag: trimmed.to_owned(),
            language,
            region,
            symbols,
        })
    }

    /// Parse a tag, falling back to region-less English when it is malformed
    ///
    /// The fallback carries no region, so unit system resolution from it
    /// yields metric rather than the default locale's units.
    #[must_use]
    pub fn parse_or_default(tag: &str) -> Self {
        Self::parse(tag).unwrap_or_else(|err| {
            tracing::debug!(tag = %tag, "{err}, using {}", defaults::FALLBACK_LANGUAGE);
            Self::fallback()
        })
    }

    /// English punctuation without a region
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            tag: defaults::FALLBACK_LANGUAGE.to_owned(),
            language: defaults::FALLBACK_LANGUAGE.to_owned(),
            region: None,
            symbols: NumberSymbols::ENGLISH,
        }
    }

    /// The tag as supplied
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Lower-case language subtag
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Region subtag, if the tag carried one
    #[must_use]
    pub const fn region(&self) -> Option<&RegionCode> {
        self.region.as_ref()
    }

    /// Decimal separator ('.' in English, ',' in German)
    #[must_use]
    pub const fn decimal_separator(&self) -> char {
        self.symbols.decimal
    }

    /// Digit grouping separator (',' in English, '.' in German)
    #[must_use]
    pub const fn grouping_separator(&self) -> char {
        self.symbols.grouping
    }

    /// Character placed between a number and its unit abbreviation
    #[must_use]
    pub const fn unit_spacing(&self) -> char {
        self.symbols.unit_spacing
    }

    /// Abbreviation for a distance unit in this locale
    #[must_use]
    pub fn distance_abbreviation(&self, unit: DistanceUnit) -> &'static str {
        match (self.language.as_str(), unit) {
            ("ru" | "uk", DistanceUnit::Meters) => "м",
            ("ru" | "uk", DistanceUnit::Kilometers) => "км",
            ("ru" | "uk", DistanceUnit::Feet) => "фт",
            ("ru" | "uk", DistanceUnit::Yards) => "ярд",
            ("ru" | "uk", DistanceUnit::Miles) => "ми",
            _ => unit.abbreviation(),
        }
    }

    /// Render a whole number, grouping digits at or above 1000
    #[must_use]
    pub fn format_integer(&self, value: u64) -> String {
        let digits = value.to_string();
        if value < DIGIT_GROUPING_MIN {
            return digits;
        }
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 3);
        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(self.symbols.grouping);
            }
            grouped.push(digit);
        }
        grouped
    }

    /// Render a non-negative value with exactly one fractional digit,
    /// or none when the value rounds to a whole number
    #[must_use]
    pub fn format_tenths(&self, value: f64) -> String {
        let tenths = (value.max(0.0) * 10.0).round() as u64;
        let whole = self.format_integer(tenths / 10);
        match tenths % 10 {
            0 => whole,
            fraction => format!("{whole}{}{fraction}", self.symbols.decimal),
        }
    }

    /// Join a rendered number and a unit label with this locale's spacing
    #[must_use]
    pub fn with_unit(&self, number: &str, unit_label: &str) -> String {
        format!("{number}{}{unit_label}", self.symbols.unit_spacing)
    }
}

impl Default for LocaleInfo {
    fn default() -> Self {
        Self {
            tag: defaults::LOCALE.to_owned(),
            language: "en".to_owned(),
            region: RegionCode::new("US").ok(),
            symbols: NumberSymbols::ENGLISH,
        }
    }
}

impl fmt::Display for LocaleInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl FromStr for LocaleInfo {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
