// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs
// ABOUTME: Re-exports command modules for forja-cli
// ABOUTME: Provides access to batch processing and one-rep-max estimation

pub mod one_rm;
pub mod process;
