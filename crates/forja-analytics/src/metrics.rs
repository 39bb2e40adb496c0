// ABOUTME: Derived-metrics engine computing workload, effective flag, 1RM, and bands
// ABOUTME: Per-set enrichment over validated sets; rows are independent and parallelizable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs

//! # Derived-Metrics Engine
//!
//! Computes the per-set analytic columns for validated sets: workload,
//! the effective-set flag, estimated one-rep max, categorical bands, and
//! the per-week training-day count. Rows are enriched independently, so a
//! batch is processed in parallel with no ordering dependency.
//!
//! A row with a missing required field (the RIR cell) is never dropped: the
//! RIR-derived metrics stay null and the row is flagged via
//! `metrics_complete = false`.

use crate::algorithms::brzycki_one_rm;
use crate::bodyweight::interpolate_bodyweight;
use forja_core::config::PipelineConfig;
use forja_core::models::{
    BodyweightSample, EnrichedSet, RepRangeBand, RirBand, ValidatedSet,
};
use chrono::{Datelike, NaiveDate};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// ISO (year, week) key for training-day counting
pub type IsoWeekKey = (i32, u32);

/// ISO week key of a date
#[must_use]
pub fn iso_week_key(date: NaiveDate) -> IsoWeekKey {
    let week = date.iso_week();
    (week.year(), week.week())
}

/// Count distinct training dates per ISO week over the full history
/// (historical dates plus the pending batch)
pub fn count_training_days(dates: impl IntoIterator<Item = NaiveDate>) -> HashMap<IsoWeekKey, u32> {
    let distinct: HashSet<NaiveDate> = dates.into_iter().collect();
    let mut counts: HashMap<IsoWeekKey, u32> = HashMap::new();
    for date in distinct {
        *counts.entry(iso_week_key(date)).or_insert(0) += 1;
    }
    counts
}

/// Shared read-only inputs for enriching one batch
pub struct MetricsContext<'a> {
    /// Pipeline configuration (thresholds, bodyweight allow-list)
    pub config: &'a PipelineConfig,
    /// Bodyweight samples sorted ascending by date
    pub bodyweight_samples: &'a [BodyweightSample],
    /// Distinct training dates per ISO week, over the full history
    pub week_day_counts: &'a HashMap<IsoWeekKey, u32>,
}

/// Enrich one validated set with derived metrics.
///
/// `is_personal_record` is left false; the pipeline resolves it afterwards
/// against the historical per-exercise maxima.
#[must_use]
pub fn enrich_set(set: &ValidatedSet, id: u64, ctx: &MetricsContext<'_>) -> EnrichedSet {
    let workload = f64::from(set.reps) * set.weight;

    // RIR is the one required input that can legitimately be absent
    // (blank cells on empty or ghost sets); everything derived from it
    // stays null and the row is flagged.
    let metrics_complete = set.rir.is_some();
    let effective = set.rir.is_some_and(|rir| rir.numeric() <= 4);
    let rir_band = set.rir.map(RirBand::from_rir);

    let estimated_bodyweight = interpolate_bodyweight(set.date, ctx.bodyweight_samples);
    let true_lifted_weight = if ctx.config.is_bodyweight_exercise(&set.exercise) {
        set.weight + estimated_bodyweight.unwrap_or(0.0)
    } else {
        set.weight
    };

    let estimated_one_rm = set.rir.and_then(|rir| {
        let reps_potential = set.reps + u32::from(rir.numeric());
        if true_lifted_weight < ctx.config.min_one_rm_weight_kg
            || reps_potential == 0
            || set.reps > ctx.config.max_one_rm_reps
        {
            return None;
        }
        brzycki_one_rm(true_lifted_weight, f64::from(reps_potential)).map(round1)
    });
    if estimated_one_rm.is_none() {
        debug!(set_id = id, exercise = %set.exercise, "1RM suppressed outside accuracy envelope");
    }

    let training_days_this_week = ctx
        .week_day_counts
        .get(&iso_week_key(set.date))
        .copied()
        .unwrap_or(1);

    EnrichedSet {
        id,
        date: set.date,
        routine: set.routine.clone(),
        exercise: set.exercise.clone(),
        range: set.range.clone(),
        reps: set.reps,
        weight: set.weight,
        rir: set.rir,
        workload,
        effective,
        estimated_bodyweight,
        true_lifted_weight,
        estimated_one_rm,
        is_personal_record: false,
        rep_range_band: RepRangeBand::from_reps(set.reps),
        rir_band,
        training_days_this_week,
        metrics_complete,
        progression_class: ctx.config.progression_class(&set.exercise),
    }
}

/// Enrich a batch in parallel, assigning ids sequentially from `first_id`
#[must_use]
pub fn enrich_batch(
    sets: &[ValidatedSet],
    first_id: u64,
    ctx: &MetricsContext<'_>,
) -> Vec<EnrichedSet> {
    sets.par_iter()
        .enumerate()
        .map(|(offset, set)| enrich_set(set, first_id + offset as u64, ctx))
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use forja_core::models::{NormalizedRange, Rir};

    fn validated(exercise: &str, reps: u32, weight: f64, rir: Option<Rir>) -> ValidatedSet {
        ValidatedSet {
            date: "2025-06-02".parse().unwrap(),
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
        counts: &'a HashMap<IsoWeekKey, u32>,
    ) -> MetricsContext<'a> {
        MetricsContext {
            config,
            bodyweight_samples: &[],
            week_day_counts: counts,
        }
    }

    #[test]
    fn brzycki_worked_example() {
        let config = PipelineConfig::default();
        let counts = HashMap::new();
        let set = validated("Bench press", 5, 100.0, Some(Rir::Reserve(2)));
        let enriched = enrich_set(&set, 1, &context(&config, &counts));
        assert_eq!(enriched.estimated_one_rm, Some(120.0));
        assert!((enriched.workload - 500.0).abs() < f64::EPSILON);
        assert!(enriched.effective);
        assert!(enriched.metrics_complete);
    }

    #[test]
    fn one_rm_suppressed_above_eight_reps() {
        let config = PipelineConfig::default();
        let counts = HashMap::new();
        let set = validated("Bench press", 9, 150.0, Some(Rir::Reserve(0)));
        let enriched = enrich_set(&set, 1, &context(&config, &counts));
        assert_eq!(enriched.estimated_one_rm, None);
    }

    #[test]
    fn missing_rir_flags_row_without_dropping_it() {
        let config = PipelineConfig::default();
        let counts = HashMap::new();
        let set = validated("Bench press", 5, 100.0, None);
        let enriched = enrich_set(&set, 7, &context(&config, &counts));
        assert!(!enriched.metrics_complete);
        assert!(!enriched.effective);
        assert_eq!(enriched.estimated_one_rm, None);
        assert_eq!(enriched.rir_band, None);
        assert!((enriched.workload - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn week_counts_span_history() {
        let dates: Vec<NaiveDate> = [
            "2025-06-02",
            "2025-06-04",
            "2025-06-04", // same day logged twice counts once
            "2025-06-09",
        ]
        .iter()
        .map(|d| d.parse().unwrap())
        .collect();
        let counts = count_training_days(dates);
        let monday: NaiveDate = "2025-06-02".parse().unwrap();
        assert_eq!(counts.get(&iso_week_key(monday)), Some(&2));
    }
}
