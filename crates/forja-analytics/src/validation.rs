// ABOUTME: Staged field validator gating promotion of raw batches into validated sets
// ABOUTME: Six rule categories with explicit, resumable operator confirmation state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs

//! # Field Validator
//!
//! Gates promotion of a batch of raw entries into [`ValidatedSet`] rows
//! without ever silently dropping ambiguous data. Each rule category is
//! independently gateable: the operator must acknowledge every triggered
//! category before the pipeline proceeds, except range and RIR validity,
//! which block unconditionally and must be corrected upstream.
//!
//! Confirmation state lives in an explicit [`ValidationState`] passed by the
//! caller between invocations; there is no hidden ambient state. A batch
//! can stay suspended indefinitely and be re-reviewed without re-demanding
//! rules the operator already confirmed.

use crate::normalizer::{canonical_exercise_name, is_valid_range, normalize_range};
use forja_core::config::PipelineConfig;
use forja_core::constants::validation::WEIGHT_ROUNDING_STEPS_PER_UNIT;
use forja_core::errors::{AppError, AppResult};
use forja_core::models::{RawEntry, Rir, ValidatedSet};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};
use uuid::Uuid;

/// The six validation rule categories, each independently gateable
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    /// Every normalized range must pass the closed-vocabulary validity check
    RangeValidity,
    /// RIR must be "F" or 0-5 on rows where both reps and weight are nonzero
    RirValidity,
    /// More than half the batch with reps=0 and weight=0 needs confirmation
    EmptySetRatio,
    /// Weight at or above the high-weight threshold needs confirmation
    HighWeight,
    /// Reps at or above the high-reps threshold need confirmation
    HighReps,
    /// Ghost sets (exactly one of reps/weight zero) need confirmation
    RepsWeightConsistency,
}

impl RuleCategory {
    /// All rule categories, in evaluation order
    pub const ALL: [Self; 6] = [
        Self::RangeValidity,
        Self::RirValidity,
        Self::EmptySetRatio,
        Self::HighWeight,
        Self::HighReps,
        Self::RepsWeightConsistency,
    ];

    /// Blocking rules cannot be confirmed away; the data must be corrected
    #[must_use]
    pub const fn is_blocking(&self) -> bool {
        matches!(self, Self::RangeValidity | Self::RirValidity)
    }

    /// Operator-facing description of what triggered the rule
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::RangeValidity => "rep-range cell is not a number, range, or recognized technique",
            Self::RirValidity => "RIR must be F or 0-5 on worked sets",
            Self::EmptySetRatio => "more than half the batch has no reps and no weight",
            Self::HighWeight => "unusually high weight",
            Self::HighReps => "unusually high rep count",
            Self::RepsWeightConsistency => "ghost set: exactly one of reps and weight is zero",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RangeValidity => "range_validity",
            Self::RirValidity => "rir_validity",
            Self::EmptySetRatio => "empty_set_ratio",
            Self::HighWeight => "high_weight",
            Self::HighReps => "high_reps",
            Self::RepsWeightConsistency => "reps_weight_consistency",
        };
        f.write_str(name)
    }
}

impl FromStr for RuleCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "range_validity" => Ok(Self::RangeValidity),
            "rir_validity" => Ok(Self::RirValidity),
            "empty_set_ratio" => Ok(Self::EmptySetRatio),
            "high_weight" => Ok(Self::HighWeight),
            "high_reps" => Ok(Self::HighReps),
            "reps_weight_consistency" => Ok(Self::RepsWeightConsistency),
            other => Err(AppError::invalid_input(format!(
                "unknown rule category: {other}"
            ))),
        }
    }
}

/// Outcome of evaluating one rule category against a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleStatus {
    /// No offending rows
    Passed,
    /// Offending rows present; the operator may confirm them as intentional
    NeedsConfirmation,
    /// Offending rows present and already confirmed by the operator
    Confirmed,
    /// Offending rows present on a blocking rule; must be corrected upstream
    Blocked,
}

impl RuleStatus {
    /// Whether this status allows promotion
    #[must_use]
    pub const fn is_satisfied(&self) -> bool {
        matches!(self, Self::Passed | Self::Confirmed)
    }
}

/// Per-rule review result: status plus the offending row indices
/// (indices into the submitted batch)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFinding {
    /// Current status of the rule for this batch
    pub status: RuleStatus,
    /// Offending row indices into the submitted batch
    pub rows: Vec<usize>,
}

/// Explicit confirmation state for one pending batch.
///
/// Carried by the caller between invocations; operator confirmations
/// persist across re-reviews, so an already-acknowledged rule is never
/// demanded twice. Serializable so a suspended batch can outlive the
/// process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationState {
    /// Identifier for the pending batch, for log correlation
    pub batch_id: Uuid,
    confirmed: BTreeSet<RuleCategory>,
    findings: BTreeMap<RuleCategory, RuleFinding>,
}

impl ValidationState {
    /// Fresh state for a new batch
    #[must_use]
    pub fn new() -> Self {
        Self {
            batch_id: Uuid::new_v4(),
            confirmed: BTreeSet::new(),
            findings: BTreeMap::new(),
        }
    }

    /// Record the operator's confirmation for one rule category.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` when the rule is blocking: blocked
    /// rows must be corrected upstream, not acknowledged.
    pub fn confirm(&mut self, rule: RuleCategory) -> AppResult<()> {
        if rule.is_blocking() {
            return Err(AppError::invalid_input(format!(
                "rule '{rule}' blocks unconditionally and cannot be confirmed"
            )));
        }
        self.confirmed.insert(rule);
        Ok(())
    }

    /// Latest finding for a rule, if the batch has been reviewed
    #[must_use]
    pub fn finding(&self, rule: RuleCategory) -> Option<&RuleFinding> {
        self.findings.get(&rule)
    }

    /// Whether every reviewed rule allows promotion
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        !self.findings.is_empty()
            && self
                .findings
                .values()
                .all(|finding| finding.status.is_satisfied())
    }

    /// Rules still preventing promotion, with their offending rows
    #[must_use]
    pub fn unmet_rules(&self) -> Vec<(RuleCategory, &RuleFinding)> {
        self.findings
            .iter()
            .filter(|(_, finding)| !finding.status.is_satisfied())
            .map(|(rule, finding)| (*rule, finding))
            .collect()
    }
}

impl Default for ValidationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Staged rule-checker for one batch of raw entries
pub struct Validator<'a> {
    config: &'a PipelineConfig,
}

impl<'a> Validator<'a> {
    /// Create a validator over the given configuration
    #[must_use]
    pub const fn new(config: &'a PipelineConfig) -> Self {
        Self { config }
    }

    /// Rows retained for validation: completely blank rows are discarded
    fn retained_rows(batch: &[RawEntry]) -> Vec<(usize, &RawEntry)> {
        batch
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.is_blank())
            .collect()
    }

    /// Evaluate every rule category against the batch, merging the result
    /// with the operator confirmations already present in `state`.
    pub fn review(&self, batch: &[RawEntry], state: &mut ValidationState) {
        let rows = Self::retained_rows(batch);
        debug!(
            batch_id = %state.batch_id,
            submitted = batch.len(),
            retained = rows.len(),
            "reviewing batch"
        );

        for rule in RuleCategory::ALL {
            let offending = self.offending_rows(rule, &rows);
            let status = if offending.is_empty() {
                RuleStatus::Passed
            } else if rule.is_blocking() {
                RuleStatus::Blocked
            } else if state.confirmed.contains(&rule) {
                RuleStatus::Confirmed
            } else {
                RuleStatus::NeedsConfirmation
            };
            state.findings.insert(
                rule,
                RuleFinding {
                    status,
                    rows: offending,
                },
            );
        }

        let unmet = state.unmet_rules().len();
        if unmet > 0 {
            info!(batch_id = %state.batch_id, unmet, "batch suspended awaiting operator input");
        }
    }

    /// Offending batch indices for one rule category
    fn offending_rows(&self, rule: RuleCategory, rows: &[(usize, &RawEntry)]) -> Vec<usize> {
        match rule {
            RuleCategory::RangeValidity => rows
                .iter()
                .filter(|(_, row)| !is_valid_range(row.rep_range.as_deref()))
                .map(|(index, _)| *index)
                .collect(),
            RuleCategory::RirValidity => rows
                .iter()
                .filter(|(_, row)| {
                    let worked = row.reps_or_zero() > 0 && row.weight_or_zero() != 0.0;
                    worked
                        && !row
                            .rir
                            .as_deref()
                            .is_some_and(|raw| Rir::parse(raw).is_some())
                })
                .map(|(index, _)| *index)
                .collect(),
            RuleCategory::EmptySetRatio => {
                let empty: Vec<usize> = rows
                    .iter()
                    .filter(|(_, row)| row.reps_or_zero() == 0 && row.weight_or_zero() == 0.0)
                    .map(|(index, _)| *index)
                    .collect();
                if rows.is_empty() {
                    return Vec::new();
                }
                #[allow(clippy::cast_precision_loss)]
                let ratio = empty.len() as f64 / rows.len() as f64;
                if ratio > self.config.empty_set_ratio_threshold {
                    empty
                } else {
                    Vec::new()
                }
            }
            RuleCategory::HighWeight => rows
                .iter()
                .filter(|(_, row)| row.weight_or_zero() >= self.config.high_weight_threshold_kg)
                .map(|(index, _)| *index)
                .collect(),
            RuleCategory::HighReps => rows
                .iter()
                .filter(|(_, row)| row.reps_or_zero() >= self.config.high_reps_threshold)
                .map(|(index, _)| *index)
                .collect(),
            RuleCategory::RepsWeightConsistency => rows
                .iter()
                .filter(|(_, row)| {
                    (row.reps_or_zero() == 0) != (row.weight_or_zero() == 0.0)
                })
                .map(|(index, _)| *index)
                .collect(),
        }
    }

    /// Promote the batch into validated sets.
    ///
    /// Re-reviews the batch against the current confirmation state, then
    /// either finalizes every retained row or returns the suspended state.
    ///
    /// Finalization: exercise names forward-filled from the prior row and
    /// canonicalized, RIR brought to canonical form ("F" uppercase, else the
    /// stringified integer), numeric blanks and non-finite weights
    /// zero-filled, and weight rounded to the nearest quarter unit.
    ///
    /// # Errors
    ///
    /// - `AppError::ValidationPending` when any rule category is unmet; the
    ///   caller should surface `state.unmet_rules()` and re-invoke after the
    ///   operator acts
    /// - `AppError::MissingRequiredField` when the first retained row has no
    ///   exercise name to forward-fill from
    pub fn promote(
        &self,
        batch: &[RawEntry],
        state: &mut ValidationState,
    ) -> AppResult<Vec<ValidatedSet>> {
        self.review(batch, state);
        if !state.is_satisfied() {
            let unmet: Vec<String> = state
                .unmet_rules()
                .iter()
                .map(|(rule, _)| rule.to_string())
                .collect();
            return Err(AppError::validation_pending(format!(
                "unmet rule categories: {}",
                unmet.join(", ")
            )));
        }

        let rows = Self::retained_rows(batch);
        let mut validated = Vec::with_capacity(rows.len());
        let mut previous_exercise: Option<String> = None;

        for (index, row) in rows {
            let exercise = match &row.exercise {
                Some(name) => {
                    let canonical = canonical_exercise_name(name);
                    previous_exercise = Some(canonical.clone());
                    canonical
                }
                None => previous_exercise.clone().ok_or_else(|| {
                    AppError::missing_field(format!(
                        "row {index}: no exercise name and no prior row to fill from"
                    ))
                })?,
            };

            let weight = round_to_quarter(row.weight_or_zero());
            let rir = row.rir.as_deref().and_then(Rir::parse);

            validated.push(ValidatedSet {
                date: row.date,
                routine: row.routine.clone(),
                exercise,
                range: normalize_range(row.rep_range.as_deref()),
                reps: row.reps_or_zero(),
                weight,
                rir,
            });
        }

        info!(
            batch_id = %state.batch_id,
            promoted = validated.len(),
            "batch promoted to validated sets"
        );
        Ok(validated)
    }
}

/// Round a weight to the nearest quarter unit; zero stays zero.
/// Applying the rounding twice is idempotent.
#[must_use]
pub fn round_to_quarter(weight: f64) -> f64 {
    if weight == 0.0 {
        0.0
    } else {
        (weight * WEIGHT_ROUNDING_STEPS_PER_UNIT).round() / WEIGHT_ROUNDING_STEPS_PER_UNIT
    }
}
