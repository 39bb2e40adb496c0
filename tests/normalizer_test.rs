// ABOUTME: Integration tests for rep-range normalization and exercise naming
// ABOUTME: Covers numeric ranges, single values, techniques, and validity checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use forja::models::{NormalizedRange, Technique};
use forja_analytics::normalizer::{
    canonical_exercise_name, is_valid_range, normalize_range, title_case,
};

#[test]
fn test_two_numbers_become_ascending_range() {
    assert_eq!(
        normalize_range(Some("6-8")),
        NormalizedRange::Numeric { min: 6.0, max: 8.0 }
    );
    // Reversed input is reordered
    assert_eq!(
        normalize_range(Some("10 a 6")),
        NormalizedRange::Numeric {
            min: 6.0,
            max: 10.0
        }
    );
}

#[test]
fn test_range_display_is_compact() {
    let range = normalize_range(Some("6-8"));
    assert_eq!(range.to_string(), "6 - 8");
    let fractional = normalize_range(Some("7.5 - 10"));
    assert_eq!(fractional.to_string(), "7.5 - 10");
}

#[test]
fn test_single_number_preserves_original_text() {
    assert_eq!(
        normalize_range(Some("12")),
        NormalizedRange::Single("12".to_owned())
    );
    // Surrounding whitespace is trimmed, the number itself is not re-parsed
    assert_eq!(
        normalize_range(Some(" 12 ")),
        NormalizedRange::Single("12".to_owned())
    );
}

#[test]
fn test_recognized_techniques_are_title_cased() {
    assert_eq!(
        normalize_range(Some("myo-reps")),
        NormalizedRange::Technique(Technique::MyoReps)
    );
    assert_eq!(
        normalize_range(Some("REST-PAUSE")),
        NormalizedRange::Technique(Technique::RestPause)
    );
    assert_eq!(
        normalize_range(Some("dropset")).to_string(),
        "Dropset"
    );
}

#[test]
fn test_unknown_text_is_unrecognized() {
    let range = normalize_range(Some("whatever"));
    assert_eq!(range, NormalizedRange::Unrecognized("Whatever".to_owned()));
    assert!(!range.is_valid());
}

#[test]
fn test_blank_cell_is_unset_and_valid() {
    assert_eq!(normalize_range(None), NormalizedRange::Unset);
    assert_eq!(normalize_range(Some("   ")), NormalizedRange::Unset);
    assert!(is_valid_range(None));
    assert!(is_valid_range(Some("")));
}

#[test]
fn test_validity_accepts_digits_and_techniques_only() {
    assert!(is_valid_range(Some("6-8")));
    assert!(is_valid_range(Some("12")));
    assert!(is_valid_range(Some("myo-reps")));
    assert!(!is_valid_range(Some("heavy")));
}

#[test]
fn test_title_case_per_word() {
    assert_eq!(title_case("myo-reps"), "Myo-reps");
    assert_eq!(title_case("rest pause"), "Rest Pause");
}

#[test]
fn test_canonical_exercise_name_capitalizes_first_letter_only() {
    assert_eq!(canonical_exercise_name("PULL-UPS"), "Pull-ups");
    assert_eq!(canonical_exercise_name("romanian Deadlift"), "Romanian deadlift");
}
