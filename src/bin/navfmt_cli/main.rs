// ABOUTME: navfmt CLI - format navigation measurements from the command line
// ABOUTME: Exposes distance, duration, speed, and trip estimate formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Format distances for a German locale
//! navfmt --locale de-DE distance 8145 1000000
//!
//! # Force US units regardless of locale
//! navfmt --units imperial_feet distance 260
//!
//! # Long-style durations in hours and minutes
//! navfmt --style long --duration-units hours,minutes duration 90060
//!
//! # Raw speed conversion
//! navfmt speed 10 --from mps --to kmh
//!
//! # Full trip estimate as JSON
//! navfmt --json estimate --distance 16093 --duration 3900 --next-maneuver 250
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use navfmt::config::{FormatterConfig, FormatterOverrides, UnitSystemPreference};
use navfmt::formatters::MeasurementFormatter;
use navfmt::logging::LoggingConfig;
use navfmt::models::{DurationStyle, DurationUnits, LeadingZeroPolicy, SpeedUnit};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "navfmt",
    about = "Locale-aware navigation measurement formatter",
    long_about = "Formats raw SI distances, durations, and speeds the way navigation screens display them."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Locale tag (overrides NAVFMT_LOCALE)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Unit system: auto, metric, imperial_feet, imperial_yards (overrides NAVFMT_UNIT_SYSTEM)
    #[arg(long, global = true)]
    units: Option<UnitSystemPreference>,

    /// Comma separated duration units, e.g. hours,minutes (overrides NAVFMT_DURATION_UNITS)
    #[arg(long, global = true, value_parser = DurationUnits::parse_list)]
    duration_units: Option<DurationUnits>,

    /// Duration style: short or long (overrides NAVFMT_DURATION_STYLE)
    #[arg(long, global = true)]
    style: Option<DurationStyle>,

    /// Leading zero duration policy: skip or render (overrides NAVFMT_LEADING_ZERO)
    #[arg(long, global = true)]
    leading_zero: Option<LeadingZeroPolicy>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Format distances given in meters
    Distance {
        /// Distances in meters
        #[arg(required = true, allow_negative_numbers = true)]
        meters: Vec<f64>,
    },

    /// Format durations given in seconds
    Duration {
        /// Durations in seconds
        #[arg(required = true, allow_negative_numbers = true)]
        seconds: Vec<f64>,
    },

    /// Convert a speed between units, or format it for display with --label
    Speed {
        /// Speed value
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Unit of the value: mps, mph, kmh
        #[arg(long, default_value = "mps")]
        from: SpeedUnit,

        /// Target unit: mps, mph, kmh
        #[arg(long, default_value = "kmh")]
        to: SpeedUnit,

        /// Print a rounded display label in the configured unit system instead
        #[arg(long)]
        label: bool,
    },

    /// Build the display strings for a trip progress snapshot
    Estimate {
        /// Remaining distance in meters
        #[arg(long)]
        distance: f64,

        /// Remaining duration in seconds
        #[arg(long)]
        duration: f64,

        /// Distance to the next maneuver in meters
        #[arg(long)]
        next_maneuver: Option<f64>,

        /// Current speed in meters per second
        #[arg(long)]
        speed: Option<f64>,
    },
}

impl Cli {
    /// Environment configuration with command-line flags taking precedence
    fn formatter_config(&self) -> Result<FormatterConfig> {
        Ok(FormatterConfig::from_env_with_overrides(self.overrides())?)
    }

    fn overrides(&self) -> FormatterOverrides {
        FormatterOverrides {
            locale: self.locale.clone(),
            unit_system: self.units,
            duration_units: self.duration_units.clone(),
            duration_style: self.style,
            leading_zero: self.leading_zero,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let config = cli.formatter_config()?;
    let formatter = MeasurementFormatter::new(&config);
    debug!(
        locale = %formatter.locale(),
        unit_system = %formatter.unit_system(),
        "navfmt CLI ready"
    );

    match cli.command {
        Command::Distance { meters } => commands::distance(&formatter, &meters, cli.json)?,
        Command::Duration { seconds } => commands::duration(&formatter, &seconds, cli.json)?,
        Command::Speed {
            value,
            from,
            to,
            label,
        } => commands::speed(&formatter, value, from, to, label, cli.json)?,
        Command::Estimate {
            distance,
            duration,
            next_maneuver,
            speed,
        } => commands::estimate(
            &formatter,
            distance,
            duration,
            next_maneuver,
            speed,
            cli.json,
        )?,
    }

    Ok(())
}
