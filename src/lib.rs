// ABOUTME: Main library entry point for the Forja training log pipeline
// ABOUTME: Re-exports core models and analytics plus orchestration and storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs

#![deny(unsafe_code)]

//! # Forja
//!
//! Ingestion and analysis pipeline for a strength-training log. Raw
//! spreadsheet-shaped rows flow through normalization, a resumable
//! validation gate, derived-metrics enrichment, and per-muscle
//! attribution fan-out, landing in a pluggable storage layer.
//!
//! ## Architecture
//!
//! - **Models** (`forja-core`): raw entries, validated and enriched sets,
//!   muscle attribution rows, bodyweight samples
//! - **Analytics** (`forja-analytics`): the normalizer, validation rules,
//!   metric derivations, and the attribution fan-out
//! - **Pipeline**: batch orchestration gluing the above to storage
//! - **Storage**: the [`storage::StorageProvider`] trait with an
//!   in-memory implementation
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use forja::config::PipelineConfig;
//! use forja::pipeline::Pipeline;
//! use forja::storage::MemoryStorage;
//!
//! let pipeline = Pipeline::new(MemoryStorage::new(), PipelineConfig::default());
//! println!("1RM weight floor: {} kg", pipeline.config().min_one_rm_weight_kg);
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by binary crates (src/bin/) and integration tests
// (tests/). They must remain `pub` so external consumers can access them.

/// Pipeline and rule configuration
pub mod config {
    pub use forja_core::config::*;
}

/// Domain constants (validation thresholds, strength formula coefficients)
pub mod constants {
    pub use forja_core::constants::*;
}

/// Unified error handling with standard error codes
pub mod errors {
    pub use forja_core::errors::*;
}

/// Domain data structures
pub mod models {
    pub use forja_core::models::*;
}

/// Normalization, validation, metrics, and attribution engines
pub mod analytics {
    pub use forja_analytics::*;
}

/// Structured logging configuration
pub mod logging;

/// Batch orchestration from raw rows to stored, attributed sets
pub mod pipeline;

/// Storage abstraction and the in-memory implementation
pub mod storage;
