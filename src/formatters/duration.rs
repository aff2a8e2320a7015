// ABOUTME: Duration formatting by decomposition into caller-chosen units
// ABOUTME: Renders "25h 1m" or "25 hours 1 minute" from a second count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use navfmt_core::models::{DurationStyle, DurationUnit, DurationUnits, LeadingZeroPolicy};
use serde::Serialize;

use super::sanitize_magnitude;

/// One decomposed duration component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationComponent {
    /// Unit of this component
    pub unit: DurationUnit,
    /// Whole number of `unit`s
    pub value: u64,
}

impl DurationComponent {
    /// Render as "23h" (short) or "23 hours" / "1 hour" (long)
    #[must_use]
    pub fn render(&self, style: DurationStyle) -> String {
        match style {
            DurationStyle::Short => format!("{}{}", self.value, self.unit.short_label()),
            DurationStyle::Long => format!("{} {}", self.value, self.unit.long_label(self.value)),
        }
    }
}

/// Stateless duration formatter
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationFormatter;

impl DurationFormatter {
    /// Split `total_seconds` across `units`, largest first
    ///
    /// Fractional seconds are truncated; negative and non-finite inputs are
    /// treated as zero. The smallest unit absorbs the remainder by floor
    /// division, so the components never sum to more than the input.
    #[must_use]
    pub fn decompose(total_seconds: f64, units: &DurationUnits) -> Vec<DurationComponent> {
        let mut remainder = sanitize_magnitude(total_seconds, "duration").trunc() as u64;
        units
            .as_slice()
            .iter()
            .map(|&unit| {
                let value = remainder / unit.seconds();
                remainder -= value * unit.seconds();
                DurationComponent { unit, value }
            })
            .collect()
    }

    /// Components that survive zero-dropping, never empty
    ///
    /// Zero components after the first rendered one are omitted. Whether a
    /// zero *leading* component is rendered is decided by `policy`.
    #[must_use]
    pub fn visible_components(
        components: &[DurationComponent],
        policy: LeadingZeroPolicy,
    ) -> Vec<DurationComponent> {
        let mut visible: Vec<DurationComponent> = match policy {
            LeadingZeroPolicy::Render => components
                .iter()
                .enumerate()
                .filter(|(index, component)| *index == 0 || component.value != 0)
                .map(|(_, component)| *component)
                .collect(),
            LeadingZeroPolicy::Skip => components
                .iter()
                .filter(|component| component.value != 0)
                .copied()
                .collect(),
        };
        if visible.is_empty() {
            if let Some(smallest) = components.last() {
                visible.push(*smallest);
            }
        }
        visible
    }

    /// Format with the default leading-zero policy (`Skip`)
    #[must_use]
    pub fn format(total_seconds: f64, units: &DurationUnits, style: DurationStyle) -> String {
        Self::format_with_policy(total_seconds, units, style, LeadingZeroPolicy::default())
    }

    /// Format with an explicit leading-zero policy
    #[must_use]
    pub fn format_with_policy(
        total_seconds: f64,
        units: &DurationUnits,
        style: DurationStyle,
        policy: LeadingZeroPolicy,
    ) -> String {
        let components = Self::decompose(total_seconds, units);
        Self::visible_components(&components, policy)
            .iter()
            .map(|component| component.render(style))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
