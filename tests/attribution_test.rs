// ABOUTME: Integration tests for per-muscle attribution fan-out
// ABOUTME: Covers role multipliers, set counting, and unmapped exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use forja::config::PipelineConfig;
use forja::models::{ExerciseMuscleRole, MuscleRole, NormalizedRange, Rir, ValidatedSet};
use forja_analytics::attribution::fan_out;
use forja_analytics::metrics::{enrich_set, MetricsContext};
use std::collections::HashMap;

fn role(exercise: &str, muscle: &str, role: MuscleRole) -> ExerciseMuscleRole {
    ExerciseMuscleRole {
        exercise: exercise.to_owned(),
        muscle: muscle.to_owned(),
        role,
    }
}

fn enriched(exercise: &str, reps: u32, weight: f64, rir: Option<Rir>) -> forja::models::EnrichedSet {
    let set = ValidatedSet {
        date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        routine: "Pull A".to_owned(),
        exercise: exercise.to_owned(),
        range: NormalizedRange::Unset,
        reps,
        weight,
        rir,
    };
    let config = PipelineConfig::default();
    let weeks = HashMap::new();
    let ctx = MetricsContext {
        config: &config,
        bodyweight_samples: &[],
        week_day_counts: &weeks,
    };
    enrich_set(&set, 7, &ctx)
}

#[test]
fn test_fan_out_scales_workload_by_role() {
    let mapping = vec![
        role("Machine row", "Lats", MuscleRole::Primary),
        role("Machine row", "Biceps", MuscleRole::Secondary),
        role("Machine row", "Forearms", MuscleRole::Stabilizer),
    ];
    // 10 x 50 = 500 workload
    let set = enriched("Machine row", 10, 50.0, Some(Rir::Reserve(2)));
    let rows = fan_out(&set, &mapping);

    assert_eq!(rows.len(), 3);
    let by_muscle: HashMap<&str, f64> = rows
        .iter()
        .map(|row| (row.muscle.as_str(), row.attributed_workload))
        .collect();
    assert_eq!(by_muscle["Lats"], 500.0);
    assert_eq!(by_muscle["Biceps"], 250.0);
    assert_eq!(by_muscle["Forearms"], 50.0);
}

#[test]
fn test_fan_out_set_counts_per_role() {
    let mapping = vec![
        role("Machine row", "Lats", MuscleRole::Primary),
        role("Machine row", "Biceps", MuscleRole::Secondary),
        role("Machine row", "Forearms", MuscleRole::Stabilizer),
    ];
    let set = enriched("Machine row", 10, 50.0, Some(Rir::Reserve(2)));
    let rows = fan_out(&set, &mapping);

    for row in &rows {
        let expected = match row.role {
            MuscleRole::Primary => 1.0,
            MuscleRole::Secondary => 0.5,
            MuscleRole::Stabilizer => 0.0,
        };
        assert!((row.attributed_set_count - expected).abs() < f64::EPSILON);
        assert_eq!(row.is_primary, matches!(row.role, MuscleRole::Primary));
        assert_eq!(row.set_id, 7);
    }
}

#[test]
fn test_effective_set_count_follows_rir() {
    let mapping = vec![role("Machine row", "Lats", MuscleRole::Primary)];

    // Effective set (RIR <= 4): counts fully
    let effective = enriched("Machine row", 10, 50.0, Some(Rir::Reserve(2)));
    let rows = fan_out(&effective, &mapping);
    assert_eq!(rows[0].effective_set_count, Some(1.0));

    // Ineffective set (RIR 5): counts zero
    let junk = enriched("Machine row", 10, 50.0, Some(Rir::Reserve(5)));
    let rows = fan_out(&junk, &mapping);
    assert_eq!(rows[0].effective_set_count, Some(0.0));

    // Unknown RIR: effectiveness unknowable
    let unknown = enriched("Machine row", 10, 50.0, None);
    let rows = fan_out(&unknown, &mapping);
    assert_eq!(rows[0].effective_set_count, None);
}

#[test]
fn test_unmapped_exercise_yields_no_rows() {
    let mapping = vec![role("Machine row", "Lats", MuscleRole::Primary)];
    let set = enriched("Face pull", 10, 20.0, Some(Rir::Reserve(2)));
    assert!(fan_out(&set, &mapping).is_empty());
}

#[test]
fn test_mapping_join_is_case_insensitive_on_canonical_names() {
    let mapping = vec![role("machine ROW", "Lats", MuscleRole::Primary)];
    let set = enriched("Machine row", 10, 50.0, Some(Rir::Reserve(2)));
    let rows = fan_out(&set, &mapping);
    assert_eq!(rows.len(), 1);
}
