// ABOUTME: Criterion benchmarks for distance, duration, and speed formatting
// ABOUTME: Measures per-call latency across unit systems and locales
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for measurement formatting.
//!
//! Navigation screens reformat every value on each location update, so
//! these track the cost of a single formatting call.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use navfmt::config::FormatterConfig;
use navfmt::estimates::TripProgress;
use navfmt::formatters::{DistanceFormatter, DurationFormatter, MeasurementFormatter};
use navfmt::locale::LocaleInfo;
use navfmt::models::{DurationStyle, DurationUnit, DurationUnits, UnitSystem};

/// Distances spanning every magnitude band, in meters
const DISTANCES: [f64; 8] = [
    3.0, 42.0, 260.0, 875.0, 1_260.0, 8_145.0, 48_000.0, 1_609_344.0,
];

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");
    group.throughput(Throughput::Elements(DISTANCES.len() as u64));

    for (system, tag) in [
        (UnitSystem::Metric, "de-DE"),
        (UnitSystem::ImperialFeet, "en-US"),
        (UnitSystem::ImperialYards, "en-GB"),
    ] {
        let locale = LocaleInfo::parse(tag).unwrap();
        group.bench_with_input(BenchmarkId::new("format", system), &locale, |b, locale| {
            b.iter(|| {
                for meters in DISTANCES {
                    black_box(DistanceFormatter::format(black_box(meters), system, locale));
                }
            });
        });
    }

    group.finish();
}

fn bench_duration(c: &mut Criterion) {
    let mut group = c.benchmark_group("duration");

    let sets = [
        ("hours_minutes", DurationUnits::default()),
        (
            "days_to_seconds",
            DurationUnits::new([
                DurationUnit::Days,
                DurationUnit::Hours,
                DurationUnit::Minutes,
                DurationUnit::Seconds,
            ])
            .unwrap(),
        ),
    ];

    for (name, units) in &sets {
        for style in [DurationStyle::Short, DurationStyle::Long] {
            group.bench_function(BenchmarkId::new(*name, format!("{style:?}")), |b| {
                b.iter(|| DurationFormatter::format(black_box(90_061.0), units, style));
            });
        }
    }

    group.finish();
}

fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate");

    let progress = TripProgress {
        distance_remaining: 16_093.44,
        duration_remaining: 3_900.0,
        distance_to_next_maneuver: Some(250.0),
        current_speed: Some(11.176),
    };

    // Resolving the locale dominates when the formatter is rebuilt per call
    group.bench_function("cached_formatter", |b| {
        let formatter = MeasurementFormatter::new(&FormatterConfig::default());
        b.iter(|| formatter.estimate(black_box(&progress)));
    });
    group.bench_function("fresh_formatter", |b| {
        let config = FormatterConfig::default().with_locale("en-GB");
        b.iter(|| MeasurementFormatter::new(black_box(&config)).estimate(&progress));
    });

    group.finish();
}

criterion_group!(benches, bench_distance, bench_duration, bench_estimate);
criterion_main!(benches);
