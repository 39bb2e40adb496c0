// ABOUTME: Muscle attribution fan-out expanding enriched sets into per-muscle rows
// ABOUTME: Joins on the static exercise-muscle-role mapping with role multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs

//! # Muscle Attribution Fan-Out
//!
//! Expands one enriched set into one row per muscle it trains, using the
//! static exercise→muscle→role reference mapping. An exercise with no
//! mapping entries yields zero attributions: the set still counts in
//! overall volume, just not in muscle-level reports.
//!
//! Fan-out is **not** idempotent: running it twice over the same set
//! produces duplicate rows. Deduplication is the caller's contract; the
//! pipeline writes each run's attributions exactly once.

use crate::normalizer::canonical_exercise_name;
use forja_core::models::{EnrichedSet, ExerciseMuscleRole, MuscleAttribution};
use tracing::debug;

/// Fan one enriched set out into its muscle attributions.
///
/// The join is case-insensitive: both sides are compared in the canonical
/// exercise-name form. Each matching (muscle, role) entry yields one row
/// sharing the parent set id as a non-owning back-reference.
#[must_use]
pub fn fan_out(set: &EnrichedSet, mapping: &[ExerciseMuscleRole]) -> Vec<MuscleAttribution> {
    let exercise = canonical_exercise_name(&set.exercise);
    let attributions: Vec<MuscleAttribution> = mapping
        .iter()
        .filter(|entry| canonical_exercise_name(&entry.exercise) == exercise)
        .map(|entry| {
            let attributed_set_count = entry.role.attributed_set_count();
            MuscleAttribution {
                set_id: set.id,
                muscle: entry.muscle.clone(),
                role: entry.role,
                contribution_multiplier: entry.role.multiplier(),
                attributed_workload: set.workload * entry.role.multiplier(),
                attributed_set_count,
                is_primary: (attributed_set_count - 1.0).abs() < f64::EPSILON,
                effective_set_count: set
                    .metrics_complete
                    .then(|| if set.effective { attributed_set_count } else { 0.0 }),
            }
        })
        .collect();

    if attributions.is_empty() {
        debug!(set_id = set.id, exercise = %set.exercise, "no muscle mapping; set skipped in muscle reports");
    }
    attributions
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use forja_core::models::{MuscleRole, NormalizedRange, RepRangeBand, Rir, RirBand};

    fn enriched(exercise: &str, workload: f64) -> EnrichedSet {
        EnrichedSet {
            id: 42,
            date: "2025-06-02".parse().unwrap(),
            routine: "Push A".to_owned(),
            exercise: exercise.to_owned(),
            range: NormalizedRange::Unset,
            reps: 10,
            weight: workload / 10.0,
            rir: Some(Rir::Reserve(2)),
            workload,
            effective: true,
            estimated_bodyweight: None,
            true_lifted_weight: workload / 10.0,
            estimated_one_rm: None,
            is_personal_record: false,
            rep_range_band: RepRangeBand::HypertrophyStrength,
            rir_band: Some(RirBand::OneToThree),
            training_days_this_week: 1,
            metrics_complete: true,
            progression_class: None,
        }
    }

    fn mapping() -> Vec<ExerciseMuscleRole> {
        vec![
            ExerciseMuscleRole {
                exercise: "Bench press".to_owned(),
                muscle: "Chest".to_owned(),
                role: MuscleRole::Primary,
            },
            ExerciseMuscleRole {
                exercise: "Bench press".to_owned(),
                muscle: "Triceps".to_owned(),
                role: MuscleRole::Secondary,
            },
            ExerciseMuscleRole {
                exercise: "Bench press".to_owned(),
                muscle: "Front delt".to_owned(),
                role: MuscleRole::Stabilizer,
            },
        ]
    }

    #[test]
    fn fan_out_applies_role_multipliers() {
        let set = enriched("bench press", 500.0);
        let rows = fan_out(&set, &mapping());
        assert_eq!(rows.len(), 3);

        let workloads: Vec<f64> = rows.iter().map(|r| r.attributed_workload).collect();
        assert_eq!(workloads, vec![500.0, 250.0, 50.0]);

        let set_counts: Vec<f64> = rows.iter().map(|r| r.attributed_set_count).collect();
        assert_eq!(set_counts, vec![1.0, 0.5, 0.0]);

        assert!(rows[0].is_primary);
        assert!(!rows[1].is_primary);
        assert!(rows.iter().all(|r| r.set_id == 42));
    }

    #[test]
    fn unmapped_exercise_yields_no_rows() {
        let set = enriched("Leg press", 300.0);
        assert!(fan_out(&set, &mapping()).is_empty());
    }

    #[test]
    fn effective_set_counts_follow_parent_flag() {
        let mut set = enriched("Bench press", 500.0);
        set.effective = false;
        let rows = fan_out(&set, &mapping());
        assert!(rows.iter().all(|r| r.effective_set_count == Some(0.0)));

        set.metrics_complete = false;
        let rows = fan_out(&set, &mapping());
        assert!(rows.iter().all(|r| r.effective_set_count.is_none()));
    }
}
