// ABOUTME: Muscle attribution models including MuscleRole and MuscleAttribution
// ABOUTME: Static exercise-to-muscle mapping entries and per-muscle fan-out rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a muscle plays in an exercise, with its contribution multiplier.
///
/// Closed enumeration so the multiplier and set-count logic is exhaustive:
/// primary movers take the full workload and a full set, secondaries half of
/// each, stabilizers a tenth of the workload and no counted set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleRole {
    /// Primary mover (multiplier 1.0, one attributed set)
    Primary,
    /// Secondary/synergist (multiplier 0.5, half an attributed set)
    Secondary,
    /// Stabilizer (multiplier 0.1, zero attributed sets)
    Stabilizer,
}

impl MuscleRole {
    /// Workload contribution multiplier for this role
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        match self {
            Self::Primary => 1.0,
            Self::Secondary => 0.5,
            Self::Stabilizer => 0.1,
        }
    }

    /// Attributed set count for this role
    #[must_use]
    pub const fn attributed_set_count(&self) -> f64 {
        match self {
            Self::Primary => 1.0,
            Self::Secondary => 0.5,
            Self::Stabilizer => 0.0,
        }
    }
}

impl fmt::Display for MuscleRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Stabilizer => "stabilizer",
        };
        f.write_str(name)
    }
}

/// One entry of the static exercise→muscle→role reference mapping.
///
/// Read-only configuration supplied by the storage collaborator; the
/// pipeline never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseMuscleRole {
    /// Exercise name (matched case-insensitively, title-cased)
    pub exercise: String,
    /// Muscle trained by the exercise
    pub muscle: String,
    /// Role the muscle plays
    pub role: MuscleRole,
}

/// One muscle-level row fanned out from an enriched set.
///
/// `set_id` is a non-owning back-reference to the parent `EnrichedSet`;
/// attributions are owned by the pipeline run and written once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MuscleAttribution {
    /// Parent enriched set id (back-reference, not ownership)
    pub set_id: u64,
    /// Muscle name
    pub muscle: String,
    /// Role the muscle plays in the exercise
    pub role: MuscleRole,
    /// Multiplier applied to the parent workload
    pub contribution_multiplier: f64,
    /// workload × multiplier
    pub attributed_workload: f64,
    /// 1.0 for primary, 0.5 for secondary, 0.0 for stabilizer
    pub attributed_set_count: f64,
    /// Whether this row carries a full attributed set
    pub is_primary: bool,
    /// Attributed set count when the parent set was effective;
    /// `None` when effectiveness could not be computed
    pub effective_set_count: Option<f64>,
}
