// ABOUTME: Analytics engine for the Forja training-log pipeline
// ABOUTME: Normalization, staged validation, derived metrics, and muscle attribution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs

#![deny(unsafe_code)]

//! # Forja Analytics
//!
//! The algorithmic core of the Forja pipeline. Each module covers one stage
//! of the ingestion flow:
//!
//! - **normalizer**: free-text rep-range parsing into a closed vocabulary
//! - **validation**: staged rule checking with operator confirmation gates
//! - **metrics**: per-set derived metrics (workload, effective flag, 1RM, bands)
//! - **bodyweight**: date-based interpolation over sparse bodyweight samples
//! - **attribution**: weighted fan-out of a set's volume across muscles
//! - **algorithms**: standalone strength-estimation algorithms (Brzycki 1RM)

/// Rep-range and technique normalization
pub mod normalizer;

/// Staged field validation with per-rule confirmation gates
pub mod validation;

/// Derived-metrics engine for validated sets
pub mod metrics;

/// Bodyweight interpolation over sparse samples
pub mod bodyweight;

/// Muscle attribution fan-out
pub mod attribution;

/// Standalone strength-estimation algorithms
pub mod algorithms;
