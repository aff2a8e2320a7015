// ABOUTME: Region-driven unit system resolution and magnitude band tables
// ABOUTME: Maps region codes to metric, US imperial (feet), or UK imperial (yards)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unit System Resolution
//!
//! A small closed lookup table rather than a CLDR implementation: a handful
//! of regions drive on miles, everything else is metric.

/// Magnitude band tables per display unit
pub mod bands;

pub use bands::{band_for, bands_for, MagnitudeBand, RoundingRule};

use navfmt_core::errors::FormatError;
use navfmt_core::models::{DistanceUnit, RegionCode, UnitSystem};
use tracing::debug;

/// Regions displaying feet and miles
const IMPERIAL_FEET_REGIONS: &[&str] = &["US", "LR", "MM", "PR", "VI", "GU", "AS", "MP", "UM"];

/// Regions displaying yards and miles
const IMPERIAL_YARDS_REGIONS: &[&str] = &["GB", "IM", "JE", "GG"];

/// Stateless resolver from region to unit system
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitSystemResolver;

impl UnitSystemResolver {
    /// Resolve the unit system for a region
    ///
    /// Regions outside the imperial tables resolve to metric; the fallback
    /// is logged at debug level.
    #[must_use]
    pub fn resolve(region: &RegionCode) -> UnitSystem {
        Self::imperial_system_for(region).unwrap_or_else(|| {
            let fallback = FormatError::UnknownRegion {
                region: region.as_str().to_owned(),
            };
            debug!(region = %region, "{fallback}");
            UnitSystem::Metric
        })
    }

    /// Imperial unit system listed for `region`, if any
    #[must_use]
    pub fn imperial_system_for(region: &RegionCode) -> Option<UnitSystem> {
        let code = region.as_str();
        if IMPERIAL_FEET_REGIONS.contains(&code) {
            Some(UnitSystem::ImperialFeet)
        } else if IMPERIAL_YARDS_REGIONS.contains(&code) {
            Some(UnitSystem::ImperialYards)
        } else {
            None
        }
    }

    /// Resolve from an optional region, falling back to metric when absent
    #[must_use]
    pub fn resolve_optional(region: Option<&RegionCode>) -> UnitSystem {
        region.map_or_else(
            || {
                debug!("No region available, defaulting unit system to metric");
                UnitSystem::Metric
            },
            Self::resolve,
        )
    }

    /// Resolve from a raw region string
    ///
    /// Malformed codes fall back to metric; the fallback is logged, never returned.
    #[must_use]
    pub fn resolve_str(region: &str) -> UnitSystem {
        match RegionCode::new(region) {
            Ok(code) => Self::resolve(&code),
            Err(_) => {
                let fallback = FormatError::UnknownRegion {
                    region: region.to_owned(),
                };
                debug!(region = %region, "{fallback}");
                UnitSystem::Metric
            }
        }
    }

    /// Raw meters at which `system` switches to its long unit
    #[must_use]
    pub const fn threshold_for_large_unit(system: UnitSystem) -> f64 {
        system.large_unit_threshold_meters()
    }

    /// Short and long units of `system`
    #[must_use]
    pub const fn short_and_long_units(system: UnitSystem) -> (DistanceUnit, DistanceUnit) {
        system.short_and_long_units()
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    fn region(code: &str) -> RegionCode {
        RegionCode::new(code).expect("valid region code")
    }

    #[test]
    fn test_known_regions() {
        assert_eq!(UnitSystemResolver::resolve(&region("US")), UnitSystem::ImperialFeet);
        assert_eq!(UnitSystemResolver::resolve(&region("gb")), UnitSystem::ImperialYards);
        assert_eq!(UnitSystemResolver::resolve(&region("DE")), UnitSystem::Metric);
        assert_eq!(UnitSystemResolver::resolve(&region("419")), UnitSystem::Metric);
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("log buffer lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn resolve_with_logs(code: &str) -> (UnitSystem, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || writer.clone())
            .without_time()
            .finish();
        let system =
            tracing::subscriber::with_default(subscriber, || UnitSystemResolver::resolve(&region(code)));
        let output = String::from_utf8(logs.0.lock().expect("log buffer lock").clone())
            .expect("logs are utf-8");
        (system, output)
    }

    #[test]
    fn test_unlisted_region_fallback_is_logged() {
        let (system, output) = resolve_with_logs("ZZ");
        assert_eq!(system, UnitSystem::Metric);
        assert!(output.contains("ZZ"), "missing fallback event: {output}");

        let (system, output) = resolve_with_logs("US");
        assert_eq!(system, UnitSystem::ImperialFeet);
        assert!(output.is_empty(), "unexpected event: {output}");
    }

    #[test]
    fn test_imperial_table_lookup() {
        assert_eq!(
            UnitSystemResolver::imperial_system_for(&region("JE")),
            Some(UnitSystem::ImperialYards)
        );
        assert_eq!(UnitSystemResolver::imperial_system_for(&region("ZZ")), None);
    }

    #[test]
    fn test_fallbacks_are_metric() {
        assert_eq!(UnitSystemResolver::resolve_str("not-a-region"), UnitSystem::Metric);
        assert_eq!(UnitSystemResolver::resolve_str(""), UnitSystem::Metric);
        assert_eq!(UnitSystemResolver::resolve_optional(None), UnitSystem::Metric);
        assert_eq!(UnitSystemResolver::resolve_str("us"), UnitSystem::ImperialFeet);
    }
}
