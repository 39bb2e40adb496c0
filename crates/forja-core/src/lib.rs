// ABOUTME: Core types and constants for the Forja training-log pipeline
// ABOUTME: Foundation crate with models, error handling, configuration, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs

#![deny(unsafe_code)]

//! # Forja Core
//!
//! Foundation crate providing shared types and constants for the Forja
//! strength-training analytics pipeline. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **models**: Pipeline data model (raw entries, validated/enriched sets, attributions)
//! - **config**: Deployment-overridable pipeline configuration
//! - **constants**: Validation thresholds and strength-estimation coefficients

/// Unified error handling system with standard error codes
pub mod errors;

/// Pipeline data models (`RawEntry`, `EnrichedSet`, `MuscleAttribution`, etc.)
pub mod models;

/// Pipeline configuration with deployment defaults
pub mod config;

/// Validation thresholds and strength-estimation constants
pub mod constants;
