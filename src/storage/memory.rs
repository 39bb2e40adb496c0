// ABOUTME: In-memory storage backend for tests, the CLI, and single-process runs
// ABOUTME: DashMap-backed tables with an atomic set-id counter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs

use super::StorageProvider;
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use forja_core::models::{
    BodyweightSample, EnrichedSet, ExerciseMuscleRole, MuscleAttribution,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// In-memory storage backend.
///
/// Set identifiers come from an atomic counter, so concurrent batches can
/// never reserve overlapping ranges. Reference data is seeded through the
/// builder methods and read-only afterwards.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    next_id: AtomicU64,
    sets: DashMap<u64, EnrichedSet>,
    attributions: DashMap<u64, Vec<MuscleAttribution>>,
    one_rm_maxima: DashMap<String, f64>,
    bodyweight: RwLock<Vec<BodyweightSample>>,
    muscle_roles: RwLock<Vec<ExerciseMuscleRole>>,
    extra_training_dates: RwLock<Vec<NaiveDate>>,
}

impl MemoryStorage {
    /// Empty storage; the first reserved set id is 1
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            ..Self::default()
        }
    }

    /// Seed bodyweight samples (kept sorted ascending by date)
    #[must_use]
    pub fn with_bodyweight_samples(self, mut samples: Vec<BodyweightSample>) -> Self {
        samples.sort_by_key(|sample| sample.date);
        if let Ok(mut guard) = self.bodyweight.write() {
            *guard = samples;
        }
        self
    }

    /// Seed the exercise→muscle→role reference mapping
    #[must_use]
    pub fn with_muscle_roles(self, roles: Vec<ExerciseMuscleRole>) -> Self {
        if let Ok(mut guard) = self.muscle_roles.write() {
            *guard = roles;
        }
        self
    }

    /// Seed historical training dates from before this store existed
    #[must_use]
    pub fn with_training_dates(self, dates: Vec<NaiveDate>) -> Self {
        if let Ok(mut guard) = self.extra_training_dates.write() {
            *guard = dates;
        }
        self
    }

    /// Seed a historical per-exercise 1RM maximum
    #[must_use]
    pub fn with_one_rm_maximum(self, exercise: &str, one_rm: f64) -> Self {
        self.one_rm_maxima.insert(exercise.to_owned(), one_rm);
        self
    }

    /// Number of enriched sets stored
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets.len()
    }

    /// Stored attributions for one set id
    #[must_use]
    pub fn attributions_for(&self, set_id: u64) -> Vec<MuscleAttribution> {
        self.attributions
            .get(&set_id)
            .map(|rows| rows.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl StorageProvider for MemoryStorage {
    async fn reserve_set_ids(&self, count: u64) -> Result<u64> {
        Ok(self.next_id.fetch_add(count, Ordering::SeqCst))
    }

    async fn max_one_rm(&self, exercise: &str) -> Result<Option<f64>> {
        Ok(self.one_rm_maxima.get(exercise).map(|entry| *entry))
    }

    async fn record_one_rm(&self, exercise: &str, one_rm: f64) -> Result<()> {
        self.one_rm_maxima
            .entry(exercise.to_owned())
            .and_modify(|best| {
                if one_rm > *best {
                    *best = one_rm;
                }
            })
            .or_insert(one_rm);
        Ok(())
    }

    async fn append_enriched(&self, sets: &[EnrichedSet]) -> Result<()> {
        for set in sets {
            self.sets.insert(set.id, set.clone());
        }
        Ok(())
    }

    async fn append_attributions(&self, rows: &[MuscleAttribution]) -> Result<()> {
        for row in rows {
            self.attributions
                .entry(row.set_id)
                .or_default()
                .push(row.clone());
        }
        Ok(())
    }

    async fn bodyweight_samples(&self) -> Result<Vec<BodyweightSample>> {
        Ok(self
            .bodyweight
            .read()
            .map_err(|_| anyhow::anyhow!("bodyweight lock poisoned"))?
            .clone())
    }

    async fn muscle_roles(&self) -> Result<Vec<ExerciseMuscleRole>> {
        Ok(self
            .muscle_roles
            .read()
            .map_err(|_| anyhow::anyhow!("muscle roles lock poisoned"))?
            .clone())
    }

    async fn training_dates(&self) -> Result<Vec<NaiveDate>> {
        let mut dates: Vec<NaiveDate> = self
            .extra_training_dates
            .read()
            .map_err(|_| anyhow::anyhow!("training dates lock poisoned"))?
            .clone();
        dates.extend(self.sets.iter().map(|entry| entry.date));
        Ok(dates)
    }
}
