// ABOUTME: Core data models for the Forja training-log pipeline
// ABOUTME: Re-exports RawEntry, EnrichedSet, MuscleAttribution and related types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs

//! # Data Models
//!
//! Core data structures used throughout the Forja pipeline. A logged set
//! moves through three representations: `RawEntry` (straight from the
//! data-entry collaborator, immutable once submitted), `ValidatedSet`
//! (produced only by the validator after every rule category is satisfied),
//! and `EnrichedSet` (validated set plus derived metrics). Each enriched set
//! then fans out into zero or more `MuscleAttribution` rows.
//!
//! ## Design Principles
//!
//! - **Closed vocabularies**: techniques, RIR values, muscle roles, and
//!   categorical bands are enums, not open string sets, so multiplier and
//!   validity logic is exhaustive and statically checkable
//! - **Serializable**: all models support JSON for the data-entry and
//!   storage collaborators
//! - **Explicit sentinels**: a repeated exercise name is `None` in
//!   `RawEntry`, never inferred from a blank cell downstream

// Domain modules
mod bodyweight;
mod enriched;
mod entry;
mod muscle;

// Raw/validated entry domain
pub use entry::{NormalizedRange, RawEntry, Rir, Technique, ValidatedSet};

// Enriched set domain
pub use enriched::{EnrichedSet, ProgressionClass, RepRangeBand, RirBand};

// Muscle attribution domain
pub use muscle::{ExerciseMuscleRole, MuscleAttribution, MuscleRole};

// Bodyweight reference data
pub use bodyweight::BodyweightSample;
