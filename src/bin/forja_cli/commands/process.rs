// ABOUTME: Batch processing command for forja-cli
// ABOUTME: Loads raw entries from JSON, applies confirmations, and runs the pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs

use forja::config::PipelineConfig;
use forja::errors::{AppError, AppResult};
use forja::models::{BodyweightSample, ExerciseMuscleRole, RawEntry};
use forja::pipeline::Pipeline;
use forja::storage::MemoryStorage;
use forja_analytics::validation::{RuleCategory, ValidationState};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{info, warn};

type Result<T> = AppResult<T>;

/// Run one batch through the pipeline and print the outcome as JSON
pub async fn run(
    input: &Path,
    confirmations: &[RuleCategory],
    bodyweight: Option<&Path>,
    muscles: Option<&Path>,
) -> Result<()> {
    let batch: Vec<RawEntry> = load_json(input).await?;
    info!(rows = batch.len(), "loaded raw batch from {}", input.display());

    let mut storage = MemoryStorage::new();
    if let Some(path) = bodyweight {
        let samples: Vec<BodyweightSample> = load_json(path).await?;
        storage = storage.with_bodyweight_samples(samples);
    }
    if let Some(path) = muscles {
        let roles: Vec<ExerciseMuscleRole> = load_json(path).await?;
        storage = storage.with_muscle_roles(roles);
    } else {
        warn!("no muscle role mapping supplied; attribution output will be empty");
    }

    let pipeline = Pipeline::new(storage, PipelineConfig::default());
    let mut state = ValidationState::new();

    // Review first so pre-confirmed rules are applied against real findings
    pipeline.review_batch(&batch, &mut state);
    for rule in confirmations {
        state.confirm(*rule)?;
    }

    match pipeline.process_batch(&batch, &mut state).await {
        Ok(outcome) => {
            let rendered = serde_json::to_string_pretty(&outcome)
                .map_err(|err| AppError::internal(format!("serializing outcome: {err}")))?;
            println!("{rendered}");
            Ok(())
        }
        Err(err) if err.is_pending() => {
            eprintln!("batch suspended; the following rules need attention:");
            for (rule, finding) in state.unmet_rules() {
                eprintln!("  {rule}: {} (rows {:?})", rule.description(), finding.rows);
                if !rule.is_blocking() {
                    eprintln!("    re-run with --confirm {rule} to acknowledge");
                }
            }
            Err(err)
        }
        Err(err) => Err(err),
    }
}

async fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| AppError::invalid_input(format!("reading {}: {err}", path.display())))?;
    serde_json::from_str(&raw)
        .map_err(|err| AppError::invalid_input(format!("parsing {}: {err}", path.display())))
}
