// ABOUTME: Enriched set model with derived metrics and categorical bands
// ABOUTME: RepRangeBand, RirBand, ProgressionClass, and the EnrichedSet record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs

use super::entry::{NormalizedRange, Rir};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rep-count band for volume analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepRangeBand {
    /// 6 reps or fewer
    Strength,
    /// 7 to 10 reps
    HypertrophyStrength,
    /// 11 to 15 reps
    HypertrophyEndurance,
    /// More than 15 reps
    Endurance,
}

impl RepRangeBand {
    /// Classify a rep count into its band
    #[must_use]
    pub const fn from_reps(reps: u32) -> Self {
        match reps {
            0..=6 => Self::Strength,
            7..=10 => Self::HypertrophyStrength,
            11..=15 => Self::HypertrophyEndurance,
            _ => Self::Endurance,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::HypertrophyStrength => "Hypertrophy-Strength",
            Self::HypertrophyEndurance => "Hypertrophy-Endurance",
            Self::Endurance => "Endurance",
        }
    }
}

impl fmt::Display for RepRangeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Proximity-to-failure band over the numeric RIR value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RirBand {
    /// Failure or zero reps in reserve
    FailureOrZero,
    /// 1 to 3 reps in reserve
    OneToThree,
    /// Exactly 4 reps in reserve
    Four,
    /// 5 or more reps in reserve
    FivePlus,
}

impl RirBand {
    /// Classify a canonical RIR into its band
    #[must_use]
    pub const fn from_rir(rir: Rir) -> Self {
        match rir.numeric() {
            0 => Self::FailureOrZero,
            1..=3 => Self::OneToThree,
            4 => Self::Four,
            _ => Self::FivePlus,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FailureOrZero => "F|0",
            Self::OneToThree => "1|2|3",
            Self::Four => "4",
            Self::FivePlus => "+5",
        }
    }
}

impl fmt::Display for RirBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Progression-tracking classification for selected exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionClass {
    /// Multi-joint movement tracked as a strength benchmark
    Compound,
    /// Single-joint movement tracked for volume progression
    Isolate,
}

/// A validated set enriched with derived metrics, owned by one pipeline run.
///
/// When `metrics_complete` is false a required field (the RIR cell) was
/// missing: workload and bands that depend only on reps/weight are still
/// populated, everything derived from RIR is null, and the row is kept
/// rather than dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedSet {
    /// Unique monotonic set identifier
    pub id: u64,
    /// Training date
    pub date: NaiveDate,
    /// Routine name
    pub routine: String,
    /// Exercise name
    pub exercise: String,
    /// Canonical rep-range prescription
    pub range: NormalizedRange,
    /// Repetitions performed
    pub reps: u32,
    /// Weight used (kg)
    pub weight: f64,
    /// Canonical RIR; `None` when not recorded
    pub rir: Option<Rir>,
    /// reps × weight, the volume proxy
    pub workload: f64,
    /// Close enough to failure (RIR ≤ 4) to count toward hypertrophy stimulus
    pub effective: bool,
    /// Bodyweight interpolated for the training date, when samples exist
    pub estimated_bodyweight: Option<f64>,
    /// Weight plus bodyweight for bodyweight-assisted exercises, else weight
    pub true_lifted_weight: f64,
    /// Estimated one-rep max (Brzycki), suppressed outside the formula's
    /// accuracy envelope
    pub estimated_one_rm: Option<f64>,
    /// Whether this set ties the best recorded 1RM for its exercise
    pub is_personal_record: bool,
    /// Rep-count band
    pub rep_range_band: RepRangeBand,
    /// RIR band; `None` when RIR was not recorded
    pub rir_band: Option<RirBand>,
    /// Distinct training dates sharing this set's ISO year-week
    pub training_days_this_week: u32,
    /// False when a missing required field suppressed the RIR-derived metrics
    pub metrics_complete: bool,
    /// Progression-tracking class, for the configured benchmark exercises
    pub progression_class: Option<ProgressionClass>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rep_band_boundaries() {
        assert_eq!(RepRangeBand::from_reps(6), RepRangeBand::Strength);
        assert_eq!(RepRangeBand::from_reps(7), RepRangeBand::HypertrophyStrength);
        assert_eq!(RepRangeBand::from_reps(10), RepRangeBand::HypertrophyStrength);
        assert_eq!(RepRangeBand::from_reps(11), RepRangeBand::HypertrophyEndurance);
        assert_eq!(RepRangeBand::from_reps(15), RepRangeBand::HypertrophyEndurance);
        assert_eq!(RepRangeBand::from_reps(16), RepRangeBand::Endurance);
    }

    #[test]
    fn rir_band_boundaries() {
        assert_eq!(RirBand::from_rir(Rir::Failure), RirBand::FailureOrZero);
        assert_eq!(RirBand::from_rir(Rir::Reserve(0)), RirBand::FailureOrZero);
        assert_eq!(RirBand::from_rir(Rir::Reserve(2)), RirBand::OneToThree);
        assert_eq!(RirBand::from_rir(Rir::Reserve(4)), RirBand::Four);
        assert_eq!(RirBand::from_rir(Rir::Reserve(5)), RirBand::FivePlus);
    }
}
