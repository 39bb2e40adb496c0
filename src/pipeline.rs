// ABOUTME: Pipeline orchestration from raw batch to enriched and attributed rows
// ABOUTME: Validation gate, id reservation, enrichment, PR detection, and fan-out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs

//! # Ingestion Pipeline
//!
//! Drives one raw batch through the full flow: normalizer → validator
//! (which may suspend awaiting operator confirmation) → derived-metrics
//! engine → muscle attribution fan-out → the storage collaborator.
//!
//! The pipeline runs single-writer, one operator session at a time. Rows
//! inside a batch are independent and enriched in parallel; identifier
//! reservation is the one serialized step and delegates to the storage
//! collaborator's atomic counter.

use forja_analytics::attribution::fan_out;
use forja_analytics::metrics::{count_training_days, enrich_batch, MetricsContext};
use forja_analytics::validation::{ValidationState, Validator};
use forja_core::config::PipelineConfig;
use forja_core::errors::{AppError, AppResult};
use forja_core::models::{EnrichedSet, MuscleAttribution, RawEntry};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::storage::StorageProvider;

/// Rounded 1RM values are compared at one-decimal precision
const ONE_RM_TIE_EPSILON: f64 = 0.05;

/// The two output streams of one pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOutcome {
    /// Enriched, unattributed sets
    pub enriched: Vec<EnrichedSet>,
    /// Muscle-attributed rows fanned out from the enriched sets
    pub attributions: Vec<MuscleAttribution>,
}

/// Batch pipeline over a storage collaborator
pub struct Pipeline<S> {
    storage: S,
    config: PipelineConfig,
}

impl<S: StorageProvider> Pipeline<S> {
    /// Create a pipeline over the given storage and configuration
    pub const fn new(storage: S, config: PipelineConfig) -> Self {
        Self { storage, config }
    }

    /// The pipeline configuration
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The underlying storage collaborator
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Review a batch without promoting it.
    ///
    /// Updates `state` with per-rule findings for the data-entry
    /// collaborator to render as operator prompts.
    pub fn review_batch(&self, batch: &[RawEntry], state: &mut ValidationState) {
        Validator::new(&self.config).review(batch, state);
    }

    /// Process one raw batch end to end.
    ///
    /// Suspends (returns `ValidationPending`) while any rule category is
    /// unmet; the caller re-invokes with the same `state` after the
    /// operator confirms or corrects. On success both output streams are
    /// appended to storage and returned.
    ///
    /// # Errors
    ///
    /// - `AppError::ValidationPending` while operator confirmation is outstanding
    /// - `AppError::StorageError` when the storage collaborator fails
    /// - `AppError::MissingRequiredField` when promotion cannot forward-fill
    ///   an exercise name
    pub async fn process_batch(
        &self,
        batch: &[RawEntry],
        state: &mut ValidationState,
    ) -> AppResult<PipelineOutcome> {
        let validated = Validator::new(&self.config).promote(batch, state)?;
        if validated.is_empty() {
            info!(batch_id = %state.batch_id, "batch contained no retained rows");
            return Ok(PipelineOutcome {
                enriched: Vec::new(),
                attributions: Vec::new(),
            });
        }

        let bodyweight_samples = self
            .storage
            .bodyweight_samples()
            .await
            .map_err(|err| AppError::storage(format!("loading bodyweight samples: {err:#}")))?;
        let muscle_roles = self
            .storage
            .muscle_roles()
            .await
            .map_err(|err| AppError::storage(format!("loading muscle roles: {err:#}")))?;
        let mut training_dates = self
            .storage
            .training_dates()
            .await
            .map_err(|err| AppError::storage(format!("loading training dates: {err:#}")))?;
        training_dates.extend(validated.iter().map(|set| set.date));
        let week_day_counts = count_training_days(training_dates);

        // Ids are reserved once per batch and assigned sequentially within it
        let count = validated.len() as u64;
        let first_id = self
            .storage
            .reserve_set_ids(count)
            .await
            .map_err(|err| AppError::storage(format!("reserving set ids: {err:#}")))?;
        debug!(batch_id = %state.batch_id, first_id, count, "reserved id range");

        let ctx = MetricsContext {
            config: &self.config,
            bodyweight_samples: &bodyweight_samples,
            week_day_counts: &week_day_counts,
        };
        let mut enriched = enrich_batch(&validated, first_id, &ctx);

        self.mark_personal_records(&mut enriched).await?;

        let attributions: Vec<MuscleAttribution> = enriched
            .iter()
            .flat_map(|set| fan_out(set, &muscle_roles))
            .collect();

        self.storage
            .append_enriched(&enriched)
            .await
            .map_err(|err| AppError::storage(format!("appending enriched sets: {err:#}")))?;
        self.storage
            .append_attributions(&attributions)
            .await
            .map_err(|err| AppError::storage(format!("appending attributions: {err:#}")))?;

        info!(
            batch_id = %state.batch_id,
            enriched = enriched.len(),
            attributions = attributions.len(),
            "batch processed"
        );
        Ok(PipelineOutcome {
            enriched,
            attributions,
        })
    }

    /// Mark sets whose estimated 1RM ties the best ever recorded for their
    /// exercise, and push new maxima back to storage so later batches see
    /// them.
    async fn mark_personal_records(&self, enriched: &mut [EnrichedSet]) -> AppResult<()> {
        let mut batch_maxima: HashMap<String, f64> = HashMap::new();
        for set in enriched.iter() {
            if let Some(one_rm) = set.estimated_one_rm {
                batch_maxima
                    .entry(set.exercise.clone())
                    .and_modify(|best| *best = best.max(one_rm))
                    .or_insert(one_rm);
            }
        }

        let mut best_by_exercise: HashMap<String, f64> = HashMap::new();
        for (exercise, batch_max) in &batch_maxima {
            let historical = self
                .storage
                .max_one_rm(exercise)
                .await
                .map_err(|err| AppError::storage(format!("loading 1RM maxima: {err:#}")))?;
            let best = historical.map_or(*batch_max, |h| h.max(*batch_max));
            best_by_exercise.insert(exercise.clone(), best);

            if historical.map_or(true, |h| *batch_max > h) {
                self.storage
                    .record_one_rm(exercise, *batch_max)
                    .await
                    .map_err(|err| AppError::storage(format!("recording 1RM maximum: {err:#}")))?;
            }
        }

        for set in enriched.iter_mut() {
            if let (Some(one_rm), Some(best)) =
                (set.estimated_one_rm, best_by_exercise.get(&set.exercise))
            {
                // Ties all count: equality at the rounded precision
                set.is_personal_record = (one_rm - best).abs() < ONE_RM_TIE_EPSILON;
            }
        }
        Ok(())
    }
}
