// ABOUTME: Integration tests for derived metrics enrichment
// ABOUTME: Covers workload, 1RM suppression, bodyweight interpolation, and week counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use forja::config::PipelineConfig;
use forja::models::{
    BodyweightSample, NormalizedRange, ProgressionClass, RepRangeBand, Rir, RirBand, ValidatedSet,
};
use forja_analytics::bodyweight::interpolate_bodyweight;
use forja_analytics::metrics::{count_training_days, enrich_set, iso_week_key, MetricsContext};
use std::collections::HashMap;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn set(exercise: &str, reps: u32, weight: f64, rir: Option<Rir>) -> ValidatedSet {
    ValidatedSet {
        date: ymd(2025, 6, 2),
        routine: "Push A".to_owned(),
        exercise: exercise.to_owned(),
        range: NormalizedRange::Unset,
        reps,
        weight,
        rir,
    }
}

fn context<'a>(
    config: &'a PipelineConfig,
    samples: &'a [BodyweightSample],
    weeks: &'a HashMap<(i32, u32), u32>,
) -> MetricsContext<'a> {
    MetricsContext {
        config,
        bodyweight_samples: samples,
        week_day_counts: weeks,
    }
}

#[test]
fn test_worked_example_one_rm() {
    // 100 kg x 5 at RIR 2: reps potential 7, 100 / (1.0278 - 0.0278*7) ≈ 120.02
    let config = PipelineConfig::default();
    let weeks = HashMap::new();
    let ctx = context(&config, &[], &weeks);
    let enriched = enrich_set(&set("Machine row", 5, 100.0, Some(Rir::Reserve(2))), 1, &ctx);

    assert!((enriched.workload - 500.0).abs() < f64::EPSILON);
    assert!(enriched.effective);
    assert!(enriched.metrics_complete);
    assert_eq!(enriched.estimated_one_rm, Some(120.0));
    assert_eq!(enriched.rep_range_band, RepRangeBand::Strength);
    assert_eq!(enriched.rir_band, Some(RirBand::OneToThree));
}

#[test]
fn test_one_rm_suppressed_outside_accuracy_envelope() {
    let config = PipelineConfig::default();
    let weeks = HashMap::new();
    let ctx = context(&config, &[], &weeks);

    // Under the 50 kg floor
    let light = enrich_set(&set("Preacher curl machine", 5, 40.0, Some(Rir::Reserve(2))), 1, &ctx);
    assert_eq!(light.estimated_one_rm, None);

    // Over the 8-rep ceiling
    let high_rep = enrich_set(&set("Machine row", 12, 100.0, Some(Rir::Reserve(2))), 2, &ctx);
    assert_eq!(high_rep.estimated_one_rm, None);

    // Failure set at zero reps potential degenerates
    let empty = enrich_set(&set("Machine row", 0, 100.0, Some(Rir::Failure)), 3, &ctx);
    assert_eq!(empty.estimated_one_rm, None);
}

#[test]
fn test_effectiveness_boundary_over_rir() {
    let config = PipelineConfig::default();
    let weeks = HashMap::new();
    let ctx = context(&config, &[], &weeks);

    // Failure and 0 both sit at the effective end of the scale
    let failure = enrich_set(&set("Machine row", 8, 60.0, Some(Rir::Failure)), 1, &ctx);
    assert!(failure.effective);
    assert_eq!(failure.rir_band, Some(RirBand::FailureOrZero));

    let zero = enrich_set(&set("Machine row", 8, 60.0, Some(Rir::Reserve(0))), 2, &ctx);
    assert!(zero.effective);
    assert_eq!(zero.rir_band, Some(RirBand::FailureOrZero));

    // 4 is still effective; 5 is junk volume
    let four = enrich_set(&set("Machine row", 8, 60.0, Some(Rir::Reserve(4))), 3, &ctx);
    assert!(four.effective);

    let five = enrich_set(&set("Machine row", 8, 60.0, Some(Rir::Reserve(5))), 4, &ctx);
    assert!(!five.effective);
}

#[test]
fn test_missing_rir_marks_row_incomplete() {
    let config = PipelineConfig::default();
    let weeks = HashMap::new();
    let ctx = context(&config, &[], &weeks);
    let enriched = enrich_set(&set("Machine row", 8, 60.0, None), 1, &ctx);

    assert!(!enriched.metrics_complete);
    assert!(!enriched.effective);
    assert_eq!(enriched.estimated_one_rm, None);
    assert_eq!(enriched.rir_band, None);
    // The row itself is kept with its direct metrics
    assert!((enriched.workload - 480.0).abs() < f64::EPSILON);
}

#[test]
fn test_bodyweight_exercise_adds_interpolated_bodyweight() {
    let config = PipelineConfig::default();
    let samples = vec![
        BodyweightSample {
            date: ymd(2025, 6, 1),
            weight_kg: 79.0,
        },
        BodyweightSample {
            date: ymd(2025, 6, 3),
            weight_kg: 81.0,
        },
    ];
    let weeks = HashMap::new();
    let ctx = context(&config, &samples, &weeks);

    // June 2nd interpolates halfway: 80 kg; 20 kg added load lifts 100 kg total
    let enriched = enrich_set(&set("Pull-ups", 5, 20.0, Some(Rir::Reserve(2))), 1, &ctx);
    assert_eq!(enriched.estimated_bodyweight, Some(80.0));
    assert!((enriched.true_lifted_weight - 100.0).abs() < f64::EPSILON);
    // 1RM estimated on the full lifted total
    assert_eq!(enriched.estimated_one_rm, Some(120.0));

    // Non-bodyweight exercise: lifted weight is the external load only
    let plain = enrich_set(&set("Machine row", 5, 20.0, Some(Rir::Reserve(2))), 2, &ctx);
    assert!((plain.true_lifted_weight - 20.0).abs() < f64::EPSILON);
}

#[test]
fn test_bodyweight_interpolation_edges() {
    let samples = vec![
        BodyweightSample {
            date: ymd(2025, 6, 1),
            weight_kg: 79.0,
        },
        BodyweightSample {
            date: ymd(2025, 6, 11),
            weight_kg: 84.0,
        },
    ];
    // Before the first sample: nearest sample
    assert_eq!(interpolate_bodyweight(ymd(2025, 5, 20), &samples), Some(79.0));
    // After the last sample: carried forward flat
    assert_eq!(interpolate_bodyweight(ymd(2025, 7, 1), &samples), Some(84.0));
    // Between samples: linear on day deltas
    assert_eq!(interpolate_bodyweight(ymd(2025, 6, 5), &samples), Some(81.0));
    // No samples at all
    assert_eq!(interpolate_bodyweight(ymd(2025, 6, 5), &[]), None);
}

#[test]
fn test_training_day_counts_per_iso_week() {
    let dates = vec![
        ymd(2025, 6, 2),
        ymd(2025, 6, 2), // same day twice counts once
        ymd(2025, 6, 4),
        ymd(2025, 6, 9), // following week
    ];
    let counts = count_training_days(dates);
    assert_eq!(counts.get(&iso_week_key(ymd(2025, 6, 2))), Some(&2));
    assert_eq!(counts.get(&iso_week_key(ymd(2025, 6, 9))), Some(&1));

    let config = PipelineConfig::default();
    let ctx = context(&config, &[], &counts);
    let enriched = enrich_set(&set("Machine row", 5, 60.0, Some(Rir::Reserve(2))), 1, &ctx);
    assert_eq!(enriched.training_days_this_week, 2);
}

#[test]
fn test_progression_class_lookup() {
    let config = PipelineConfig::default();
    let weeks = HashMap::new();
    let ctx = context(&config, &[], &weeks);

    let compound = enrich_set(&set("Pull-ups", 5, 60.0, Some(Rir::Reserve(2))), 1, &ctx);
    assert_eq!(compound.progression_class, Some(ProgressionClass::Compound));

    let isolate = enrich_set(&set("Machine row", 5, 60.0, Some(Rir::Reserve(2))), 2, &ctx);
    assert_eq!(isolate.progression_class, Some(ProgressionClass::Isolate));

    let unmapped = enrich_set(&set("Face pull", 5, 60.0, Some(Rir::Reserve(2))), 3, &ctx);
    assert_eq!(unmapped.progression_class, None);
}
