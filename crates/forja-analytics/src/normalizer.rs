// ABOUTME: Rep-range and technique normalizer for free-text prescription cells
// ABOUTME: Parses numeric ranges, single numbers, and the closed technique vocabulary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs

//! # Range/Technique Normalizer
//!
//! Turns the free-text "rep range" cell into a [`NormalizedRange`]:
//!
//! 1. Extract every numeric substring. Exactly two numbers → an ascending
//!    numeric range formatted `"{min} - {max}"`.
//! 2. Exactly one number, and the whole cell parses as that number → kept
//!    unchanged as text (never re-parsed downstream).
//! 3. Otherwise the trimmed cell is title-cased and classified against the
//!    closed technique vocabulary; unknown digit-free text is surfaced to
//!    the validator as unrecognized.
//!
//! Blank cells are valid and mean "no prescription".

use forja_core::models::{NormalizedRange, Technique};
use regex::Regex;
use std::sync::OnceLock;

static NUMBER_RE: OnceLock<Option<Regex>> = OnceLock::new();

/// Integer or decimal substrings, e.g. "8", "2.5"
fn number_re() -> Option<&'static Regex> {
    NUMBER_RE
        .get_or_init(|| Regex::new(r"\d+(?:\.\d+)?").ok())
        .as_ref()
}

/// Title-case a string: first letter of each whitespace-separated word
/// uppercased, the rest lowercased.
#[must_use]
pub fn title_case(text: &str) -> String {
    text.trim()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Canonical exercise-name form used for map joins and the allow-list:
/// first character uppercased, remainder lowercased.
#[must_use]
pub fn canonical_exercise_name(name: &str) -> String {
    let trimmed = name.trim();
    let mut chars = trimmed.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// Normalize a raw rep-range cell into its canonical form.
pub fn normalize_range(raw: Option<&str>) -> NormalizedRange {
    let Some(raw) = raw else {
        return NormalizedRange::Unset;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return NormalizedRange::Unset;
    }

    let numbers: Vec<f64> = number_re()
        .map(|re| {
            re.find_iter(trimmed)
                .filter_map(|m| m.as_str().parse::<f64>().ok())
                .collect()
        })
        .unwrap_or_default();

    if numbers.len() == 2 {
        let (a, b) = (numbers[0], numbers[1]);
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        return NormalizedRange::Numeric { min, max };
    }

    // A lone valid number is kept as the original text, not re-parsed
    if trimmed.parse::<f64>().is_ok() {
        return NormalizedRange::Single(trimmed.to_owned());
    }

    let titled = title_case(trimmed);
    Technique::from_name(&titled).map_or(NormalizedRange::Unrecognized(titled), |technique| {
        NormalizedRange::Technique(technique)
    })
}

/// Validity check for a raw rep-range cell.
///
/// Accepts blank cells, anything containing a digit (reducible to one or two
/// numbers), and digit-free text that title-cases into a recognized
/// technique. Everything else is invalid and blocks promotion.
#[must_use]
pub fn is_valid_range(raw: Option<&str>) -> bool {
    let Some(raw) = raw else { return true };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return true;
    }
    if trimmed.chars().any(|c| c.is_ascii_digit()) {
        return true;
    }
    Technique::from_name(&title_case(trimmed)).is_some()
}
