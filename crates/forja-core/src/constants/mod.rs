// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Validation thresholds and strength-estimation coefficients for the pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs

//! Constants module
//!
//! Application constants grouped by domain. Deployment-overridable values
//! carry their defaults here and surface through `config::PipelineConfig`.

/// Validation rule thresholds
pub mod validation {
    /// A set at or above this weight (kg) requires operator confirmation
    pub const HIGH_WEIGHT_THRESHOLD_KG: f64 = 300.0;
    /// A set at or above this rep count requires operator confirmation
    pub const HIGH_REPS_THRESHOLD: u32 = 50;
    /// Batches whose empty-set ratio exceeds this require confirmation
    pub const EMPTY_SET_RATIO_THRESHOLD: f64 = 0.5;
    /// Weights are rounded to the nearest multiple of this granularity
    pub const WEIGHT_ROUNDING_STEPS_PER_UNIT: f64 = 4.0;
}

/// Strength-estimation (Brzycki) coefficients and envelope
pub mod strength {
    /// Brzycki formula intercept: 1RM = weight / (1.0278 - 0.0278 × reps)
    pub const BRZYCKI_INTERCEPT: f64 = 1.0278;
    /// Brzycki formula per-rep slope
    pub const BRZYCKI_SLOPE: f64 = 0.0278;
    /// 1RM estimation is suppressed below this total lifted weight (kg)
    pub const MIN_ONE_RM_WEIGHT_KG: f64 = 50.0;
    /// 1RM estimation is suppressed above this rep count (formula accuracy envelope)
    pub const MAX_ONE_RM_REPS: u32 = 8;
    /// Rep-max table rows estimate the 2RM through this rep count
    pub const REP_MAX_TABLE_MAX_REPS: u32 = 10;
}

/// Default reference lists for deployment configuration
pub mod defaults {
    /// Exercises whose true lifted weight includes bodyweight
    pub const BODYWEIGHT_EXERCISES: [&str; 8] = [
        "Chin-ups",
        "Parallel bar dips",
        "Pull-ups",
        "Muscle-ups",
        "Neutral grip pull-ups",
        "Ring chin-ups",
        "Parallel bar dips 210",
        "Barbell squat",
    ];
}
