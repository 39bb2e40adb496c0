// ABOUTME: Pipeline configuration shared across the workspace
// ABOUTME: Validation thresholds, bodyweight exercise allow-list, and progression tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs

use crate::constants::{defaults, strength, validation};
use crate::models::ProgressionClass;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Deployment-overridable pipeline configuration.
///
/// The defaults carry the fixed constants the pipeline ships with; a
/// deployment may replace any of them at construction. The bodyweight
/// allow-list and progression map are matched case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Weight (kg) at or above which a set needs operator confirmation
    pub high_weight_threshold_kg: f64,
    /// Rep count at or above which a set needs operator confirmation
    pub high_reps_threshold: u32,
    /// Empty-set ratio above which a batch needs operator confirmation
    pub empty_set_ratio_threshold: f64,
    /// Minimum true lifted weight (kg) for 1RM estimation
    pub min_one_rm_weight_kg: f64,
    /// Maximum rep count for 1RM estimation (Brzycki accuracy envelope)
    pub max_one_rm_reps: u32,
    /// Exercises whose true lifted weight includes interpolated bodyweight
    pub bodyweight_exercises: Vec<String>,
    /// Benchmark exercises tracked for progression, by class
    pub progression_exercises: HashMap<String, ProgressionClass>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let progression_exercises = [
            ("Pull-ups", ProgressionClass::Compound),
            ("Romanian deadlift", ProgressionClass::Compound),
            ("Parallel bar dips", ProgressionClass::Compound),
            ("Smith machine squat", ProgressionClass::Compound),
            ("Preacher curl machine", ProgressionClass::Isolate),
            ("Dumbbell lateral raise", ProgressionClass::Isolate),
            ("Incline machine press", ProgressionClass::Isolate),
            ("Machine row", ProgressionClass::Isolate),
            ("Calf raise on machine", ProgressionClass::Isolate),
        ]
        .into_iter()
        .map(|(name, class)| (name.to_owned(), class))
        .collect();

        Self {
            high_weight_threshold_kg: validation::HIGH_WEIGHT_THRESHOLD_KG,
            high_reps_threshold: validation::HIGH_REPS_THRESHOLD,
            empty_set_ratio_threshold: validation::EMPTY_SET_RATIO_THRESHOLD,
            min_one_rm_weight_kg: strength::MIN_ONE_RM_WEIGHT_KG,
            max_one_rm_reps: strength::MAX_ONE_RM_REPS,
            bodyweight_exercises: defaults::BODYWEIGHT_EXERCISES
                .iter()
                .map(|name| (*name).to_owned())
                .collect(),
            progression_exercises,
        }
    }
}

impl PipelineConfig {
    /// Whether an exercise's true lifted weight includes bodyweight
    #[must_use]
    pub fn is_bodyweight_exercise(&self, exercise: &str) -> bool {
        self.bodyweight_exercises
            .iter()
            .any(|name| name.eq_ignore_ascii_case(exercise))
    }

    /// Progression-tracking class for an exercise, if it is a benchmark
    #[must_use]
    pub fn progression_class(&self, exercise: &str) -> Option<ProgressionClass> {
        self.progression_exercises
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(exercise))
            .map(|(_, class)| *class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_allow_list_matches_case_insensitively() {
        let config = PipelineConfig::default();
        assert!(config.is_bodyweight_exercise("Pull-ups"));
        assert!(config.is_bodyweight_exercise("pull-ups"));
        assert!(!config.is_bodyweight_exercise("Machine row"));
    }

    #[test]
    fn progression_classes_resolve() {
        let config = PipelineConfig::default();
        assert_eq!(
            config.progression_class("pull-ups"),
            Some(ProgressionClass::Compound)
        );
        assert_eq!(
            config.progression_class("Machine row"),
            Some(ProgressionClass::Isolate)
        );
        assert_eq!(config.progression_class("Leg press"), None);
    }
}
