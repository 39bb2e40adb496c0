// ABOUTME: Bodyweight interpolation over the sparse bodyweight sample log
// ABOUTME: Linear interpolation between bracketing samples with flat extrapolation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs

//! # Bodyweight Interpolator
//!
//! Resolves the athlete's estimated bodyweight at an arbitrary training date
//! from sparse, irregularly-spaced samples. The result depends only on the
//! sample set and the target date: restartable and idempotent.

use chrono::NaiveDate;
use forja_core::models::BodyweightSample;

/// Estimate bodyweight at `target` from samples sorted ascending by date.
///
/// The latest sample strictly before the target (`prev`) and the earliest
/// sample at or after it (`next`) bracket the date:
///
/// - both present: linear interpolation on day deltas, rounded to 0.01 kg
/// - only `prev`: flat extrapolation forward
/// - only `next`: the nearest known sample
/// - no samples: `None` (callers skip the bodyweight adjustment)
///
/// Callers supply samples in ascending date order; the storage collaborator
/// guarantees this.
#[must_use]
pub fn interpolate_bodyweight(target: NaiveDate, samples: &[BodyweightSample]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    let prev = samples.iter().rev().find(|sample| sample.date < target);
    let next = samples.iter().find(|sample| sample.date >= target);

    match (prev, next) {
        (Some(prev), Some(next)) => {
            let span_days = (next.date - prev.date).num_days();
            if span_days == 0 {
                return Some(prev.weight_kg);
            }
            #[allow(clippy::cast_precision_loss)]
            let daily_delta = (next.weight_kg - prev.weight_kg) / span_days as f64;
            #[allow(clippy::cast_precision_loss)]
            let elapsed = (target - prev.date).num_days() as f64;
            Some(round2(elapsed.mul_add(daily_delta, prev.weight_kg)))
        }
        (Some(prev), None) => Some(prev.weight_kg),
        (None, Some(next)) => Some(next.weight_kg),
        (None, None) => None,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn sample(date: &str, weight_kg: f64) -> BodyweightSample {
        BodyweightSample {
            date: date.parse().unwrap(),
            weight_kg,
        }
    }

    #[test]
    fn interpolates_between_bracketing_samples() {
        let samples = vec![sample("2025-01-01", 80.0), sample("2025-01-11", 82.0)];
        let target = "2025-01-06".parse().unwrap();
        // 5 of 10 days elapsed at +0.2 kg/day
        assert_eq!(interpolate_bodyweight(target, &samples), Some(81.0));
    }

    #[test]
    fn flat_extrapolation_past_last_sample() {
        let samples = vec![sample("2025-01-01", 80.0), sample("2025-01-11", 82.0)];
        let target = "2025-03-01".parse().unwrap();
        assert_eq!(interpolate_bodyweight(target, &samples), Some(82.0));
    }

    #[test]
    fn nearest_sample_before_first_measurement() {
        let samples = vec![sample("2025-02-01", 79.5)];
        let target = "2025-01-15".parse().unwrap();
        assert_eq!(interpolate_bodyweight(target, &samples), Some(79.5));
    }

    #[test]
    fn empty_log_yields_none() {
        let target = "2025-01-15".parse().unwrap();
        assert_eq!(interpolate_bodyweight(target, &[]), None);
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let samples = vec![sample("2025-01-01", 80.0), sample("2025-01-31", 83.0)];
        let target = "2025-01-16".parse().unwrap();
        let first = interpolate_bodyweight(target, &samples);
        let second = interpolate_bodyweight(target, &samples);
        assert_eq!(first, second);
    }
}
