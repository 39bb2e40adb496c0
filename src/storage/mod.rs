// ABOUTME: Storage abstraction for the Forja pipeline
// ABOUTME: Async trait over the storage collaborator with an in-memory backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs

//! # Storage Abstraction
//!
//! The pipeline treats persistence as an external collaborator: it appends
//! enriched sets and muscle attributions, reserves set identifiers, and
//! reads reference data (bodyweight samples, the exercise↔muscle map,
//! historical training dates and per-exercise 1RM maxima). Implementations
//! provide a consistent interface regardless of the backing technology.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use forja_core::models::{
    BodyweightSample, EnrichedSet, ExerciseMuscleRole, MuscleAttribution,
};

pub mod memory;

pub use memory::MemoryStorage;

/// Core storage abstraction trait
///
/// Identifier reservation is the single point requiring serialization under
/// concurrent writers: `reserve_set_ids` must hand out a contiguous range
/// atomically, never by re-reading a maximum.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Atomically reserve `count` contiguous set ids, returning the first
    async fn reserve_set_ids(&self, count: u64) -> Result<u64>;

    /// Best recorded estimated 1RM for an exercise, if any
    async fn max_one_rm(&self, exercise: &str) -> Result<Option<f64>>;

    /// Record a new best estimated 1RM for an exercise
    async fn record_one_rm(&self, exercise: &str, one_rm: f64) -> Result<()>;

    /// Append enriched sets for one pipeline run
    async fn append_enriched(&self, sets: &[EnrichedSet]) -> Result<()>;

    /// Append muscle attributions for one pipeline run
    async fn append_attributions(&self, rows: &[MuscleAttribution]) -> Result<()>;

    /// Bodyweight samples, sorted ascending by date
    async fn bodyweight_samples(&self) -> Result<Vec<BodyweightSample>>;

    /// The static exercise→muscle→role reference mapping
    async fn muscle_roles(&self) -> Result<Vec<ExerciseMuscleRole>>;

    /// Every historical training date (for ISO-week day counts)
    async fn training_dates(&self) -> Result<Vec<NaiveDate>>;
}
