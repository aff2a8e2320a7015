// ABOUTME: Round-to-nearest-increment primitive shared by distance and speed formatting
// ABOUTME: Rounds half away from zero and never panics in release builds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Round To Nearest
//!
//! Every human-friendly distance passes through [`round_to_nearest`]: the
//! magnitude bands only differ in which increment they hand it.

use navfmt_core::errors::{FormatError, FormatResult};

/// Round `value` to the nearest multiple of `increment`
///
/// Ties round away from zero (`0.5` with increment `1` becomes `1`).
///
/// An `increment` that is not strictly positive and finite is a programmer
/// error: it trips a debug assertion, and release builds return `value`
/// unchanged.
#[must_use]
pub fn round_to_nearest(value: f64, increment: f64) -> f64 {
    debug_assert!(
        increment > 0.0 && increment.is_finite(),
        "rounding increment must be positive and finite, got {increment}"
    );
    try_round_to_nearest(value, increment).unwrap_or(value)
}

/// Checked variant of [`round_to_nearest`]
///
/// # Errors
///
/// Returns `InvalidIncrement` when `increment` is zero, negative, or not finite.
pub fn try_round_to_nearest(value: f64, increment: f64) -> FormatResult<f64> {
    if !(increment > 0.0 && increment.is_finite()) {
        return Err(FormatError::InvalidIncrement { increment });
    }
    // Fractional increments scale by their reciprocal so 0.1 rounds in whole tenths
    if increment < 1.0 {
        let scale = increment.recip();
        return Ok(round_half_away_from_zero(value * scale) / scale);
    }
    Ok(round_half_away_from_zero(value / increment) * increment)
}

/// Ulps of slack within which a scaled value counts as an exact tie
const TIE_TOLERANCE_ULPS: f64 = 16.0;

/// `f64::round`, treating values a few ulps short of `.5` as ties
///
/// Decimal ties such as 1.15 km are not representable, so after scaling they
/// land just below `.5` and would round toward zero.
fn round_half_away_from_zero(scaled: f64) -> f64 {
    let whole = scaled.trunc();
    let tolerance = scaled.abs() * TIE_TOLERANCE_ULPS * f64::EPSILON;
    if ((scaled - whole).abs() - 0.5).abs() <= tolerance {
        whole + scaled.signum()
    } else {
        scaled.round()
    }
}
