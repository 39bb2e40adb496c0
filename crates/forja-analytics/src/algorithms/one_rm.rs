// ABOUTME: One-rep-max estimation via the Brzycki formula with RIR adjustment
// ABOUTME: Supports a second calibration sample, bodyweight inclusion, and rep-max tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs

use forja_core::constants::strength::{
    BRZYCKI_INTERCEPT, BRZYCKI_SLOPE, REP_MAX_TABLE_MAX_REPS,
};
use forja_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// One logged set used as an estimation sample
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SetSample {
    /// External load lifted (kg)
    pub weight_kg: f64,
    /// Repetitions performed
    pub reps: u32,
    /// Reps left in reserve
    pub rir: u32,
}

/// Estimated rep max for a given rep count
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RepMaxEntry {
    /// Rep count (2 through 10)
    pub reps: u32,
    /// Estimated maximum weight for that rep count (kg)
    pub weight_kg: f64,
    /// Percentage of the 1RM
    pub percent_of_one_rm: f64,
}

/// Result of a one-rep-max estimation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneRmEstimate {
    /// Estimated one-rep max, expressed as external load (kg)
    pub one_rm_kg: f64,
    /// Estimated 2RM through 10RM
    pub rep_maxes: Vec<RepMaxEntry>,
}

/// One-rep-max estimator using the Brzycki formula.
///
/// Formula: `1RM = weight / (1.0278 − 0.0278 × effective_reps)` where
/// `effective_reps = reps + RIR`. A second sample, when provided, is
/// estimated independently and the two results averaged. When the lifter's
/// bodyweight formed part of the load (chin-ups, dips), it is added to each
/// sample for the formula and subtracted back out of the results, so the
/// estimate reads as external load.
///
/// The formula holds best for low-rep strength work; prefer samples of six
/// reps or fewer.
///
/// # Scientific References
///
/// - Brzycki, M. (1993). "Strength testing: predicting a one-rep max from
///   reps-to-fatigue." *Journal of Physical Education, Recreation & Dance*,
///   64(1), 88-90.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneRmEstimator {
    /// Primary estimation sample
    pub primary: SetSample,
    /// Optional second sample, averaged with the first
    pub secondary: Option<SetSample>,
    /// Bodyweight to include in the lifted total, when applicable
    pub bodyweight_kg: Option<f64>,
}

impl OneRmEstimator {
    /// Estimate the one-rep max and the 2RM-10RM table.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if any sample has a non-finite or
    /// negative weight, or reps plus RIR of zero or beyond the `u32` range.
    ///
    /// # Example
    ///
    /// ```rust
    /// use forja_analytics::algorithms::{OneRmEstimator, SetSample};
    ///
    /// let estimator = OneRmEstimator {
    ///     primary: SetSample { weight_kg: 100.0, reps: 5, rir: 2 },
    ///     secondary: None,
    ///     bodyweight_kg: None,
    /// };
    /// let estimate = estimator.estimate().unwrap();
    /// // 100 / (1.0278 - 0.0278 * 7) ≈ 120.02, rounded to one decimal
    /// assert!((estimate.one_rm_kg - 120.0).abs() < f64::EPSILON);
    /// ```
    pub fn estimate(&self) -> AppResult<OneRmEstimate> {
        let bodyweight = self.bodyweight_kg.unwrap_or(0.0);
        if !bodyweight.is_finite() || bodyweight < 0.0 {
            return Err(AppError::invalid_input(format!(
                "bodyweight {bodyweight} must be a non-negative number"
            )));
        }

        let primary_rm = Self::sample_one_rm(self.primary, bodyweight)?;
        let one_rm = match self.secondary {
            Some(secondary) => {
                let secondary_rm = Self::sample_one_rm(secondary, bodyweight)?;
                (primary_rm + secondary_rm) / 2.0
            }
            None => primary_rm,
        };

        let rep_maxes = rep_max_table(one_rm)
            .into_iter()
            .map(|entry| RepMaxEntry {
                weight_kg: round2(entry.weight_kg - bodyweight),
                ..entry
            })
            .collect();

        Ok(OneRmEstimate {
            one_rm_kg: round1(one_rm - bodyweight),
            rep_maxes,
        })
    }

    fn sample_one_rm(sample: SetSample, bodyweight: f64) -> AppResult<f64> {
        if !sample.weight_kg.is_finite() || sample.weight_kg < 0.0 {
            return Err(AppError::invalid_input(format!(
                "sample weight {} must be a non-negative number",
                sample.weight_kg
            )));
        }
        let effective_reps = sample.reps.checked_add(sample.rir).ok_or_else(|| {
            AppError::invalid_input(format!(
                "reps {} plus RIR {} overflows",
                sample.reps, sample.rir
            ))
        })?;
        brzycki_one_rm(sample.weight_kg + bodyweight, f64::from(effective_reps)).ok_or_else(|| {
            AppError::invalid_input("reps plus RIR must be greater than zero".to_owned())
        })
    }
}

/// Raw Brzycki estimate: `weight / (1.0278 − 0.0278 × effective_reps)`.
///
/// Returns `None` when `effective_reps` is not positive or the denominator
/// degenerates (effective reps beyond the formula's domain).
#[must_use]
pub fn brzycki_one_rm(weight_kg: f64, effective_reps: f64) -> Option<f64> {
    if effective_reps <= 0.0 {
        return None;
    }
    let denominator = BRZYCKI_SLOPE.mul_add(-effective_reps, BRZYCKI_INTERCEPT);
    if denominator <= 0.0 {
        return None;
    }
    Some(weight_kg / denominator)
}

/// Estimated 2RM through 10RM for a given 1RM, with percent-of-1RM
#[must_use]
pub fn rep_max_table(one_rm_kg: f64) -> Vec<RepMaxEntry> {
    (2..=REP_MAX_TABLE_MAX_REPS)
        .map(|reps| {
            let weight_kg =
                round2(one_rm_kg * BRZYCKI_SLOPE.mul_add(-f64::from(reps), BRZYCKI_INTERCEPT));
            RepMaxEntry {
                reps,
                weight_kg,
                percent_of_one_rm: round1(weight_kg / one_rm_kg * 100.0),
            }
        })
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
