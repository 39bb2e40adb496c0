// ABOUTME: Bodyweight sample model for the sparse bodyweight log
// ABOUTME: Externally supplied, append-only reference data for interpolation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single bodyweight measurement.
///
/// Samples arrive on an irregular cadence; the interpolator reads them and
/// never mutates the log.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BodyweightSample {
    /// Measurement date
    pub date: NaiveDate,
    /// Bodyweight in kg
    pub weight_kg: f64,
}
