// ABOUTME: Standalone strength-estimation algorithms
// ABOUTME: Brzycki one-rep-max estimation with RIR and rep-max tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs

/// Brzycki one-rep-max estimation
pub mod one_rm;

pub use one_rm::{brzycki_one_rm, OneRmEstimate, OneRmEstimator, RepMaxEntry, SetSample};
