// ABOUTME: Raw log entry models including RawEntry, NormalizedRange, Technique, and Rir
// ABOUTME: Input-side types consumed by the normalizer and the field validator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One raw logged set as supplied by the data-entry collaborator.
///
/// Immutable once submitted. Numeric fields are optional because the entry
/// grid allows blank cells; the validator zero-fills them at promotion.
/// A `None` exercise means "same as previous row", an explicit sentinel
/// carried through instead of inferring grouping from blank cells.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawEntry {
    /// Training date
    pub date: NaiveDate,
    /// Routine name this set belongs to
    pub routine: String,
    /// Exercise name; `None` repeats the previous row's exercise
    pub exercise: Option<String>,
    /// Free-text rep-range prescription ("8 - 12", "5", "Myo-reps", ...)
    pub rep_range: Option<String>,
    /// Repetitions performed
    pub reps: Option<u32>,
    /// Weight used (kg)
    pub weight: Option<f64>,
    /// Reps-in-reserve text ("F", "0".."5"), case-insensitive
    pub rir: Option<String>,
}

impl RawEntry {
    /// Repetitions with blank treated as zero
    #[must_use]
    pub fn reps_or_zero(&self) -> u32 {
        self.reps.unwrap_or(0)
    }

    /// Weight with blank or non-finite values treated as zero
    #[must_use]
    pub fn weight_or_zero(&self) -> f64 {
        match self.weight {
            Some(w) if w.is_finite() => w,
            _ => 0.0,
        }
    }

    /// Whether every user-entered field of this row is blank
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.exercise.is_none()
            && self.rep_range.is_none()
            && self.reps.is_none()
            && self.weight.is_none()
            && self.rir.is_none()
    }
}

/// The five recognized hypertrophy techniques.
///
/// A rep-range cell that holds no numbers must title-case into one of these
/// names to be valid. Closed enumeration: anything else is surfaced to the
/// validator as an unrecognized range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Technique {
    /// Myo-reps: activation set followed by short-rest mini-sets
    MyoReps,
    /// Partials ("Parciales"): partial range-of-motion reps past failure
    Partials,
    /// Dropset: weight reduced without rest after reaching failure
    DropSet,
    /// Rest-pause: brief intra-set pauses to extend the set
    RestPause,
    /// Cluster ("Clúster"): set broken into mini-clusters with fixed rest
    Cluster,
}

impl Technique {
    /// All recognized techniques
    pub const ALL: [Self; 5] = [
        Self::MyoReps,
        Self::Partials,
        Self::DropSet,
        Self::RestPause,
        Self::Cluster,
    ];

    /// Title-cased display name, as stored in normalized ranges
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MyoReps => "Myo-reps",
            Self::Partials => "Parciales",
            Self::DropSet => "Dropset",
            Self::RestPause => "Rest-pause",
            Self::Cluster => "Clúster",
        }
    }

    /// Case-insensitive lookup by name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lowered = name.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.name().to_lowercase() == lowered)
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reps in reserve: self-reported proximity to failure.
///
/// "F" denotes training to failure; otherwise 0 to 5 reps were left in the
/// tank. For the effective-set comparison, failure counts as reserve 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rir {
    /// Trained to failure ("F")
    Failure,
    /// Reps left in reserve (0-5)
    Reserve(u8),
}

impl Rir {
    /// Parse a raw RIR cell, case-insensitive.
    ///
    /// Accepts "F"/"f" and the integer texts "0" through "5"; anything else
    /// (including out-of-range integers) is rejected.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("f") {
            return Some(Self::Failure);
        }
        match trimmed.parse::<u8>() {
            Ok(n) if n <= 5 => Some(Self::Reserve(n)),
            _ => None,
        }
    }

    /// Numeric reserve value: failure is treated as 0
    #[must_use]
    pub const fn numeric(&self) -> u8 {
        match self {
            Self::Failure => 0,
            Self::Reserve(n) => *n,
        }
    }
}

impl fmt::Display for Rir {
    /// Canonical form: uppercase "F" or the stringified integer
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failure => f.write_str("F"),
            Self::Reserve(n) => write!(f, "{n}"),
        }
    }
}

/// Canonical form of a free-text rep-range cell.
///
/// Invariants: a two-number input is always reordered ascending before
/// formatting; a recognized technique is always stored title-cased.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalizedRange {
    /// Two numbers, ascending
    Numeric {
        /// Lower bound of the prescribed range
        min: f64,
        /// Upper bound of the prescribed range
        max: f64,
    },
    /// A single number, preserved as the original text (not re-parsed)
    Single(String),
    /// One of the recognized hypertrophy techniques
    Technique(Technique),
    /// Digit-free text that is not a recognized technique (title-cased);
    /// blocks validation until corrected upstream
    Unrecognized(String),
    /// Blank cell: valid, meaning no prescription
    Unset,
}

impl NormalizedRange {
    /// Whether this range passes the closed-vocabulary validity check
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

/// Format a number compactly, without trailing zeros ("%g"-equivalent)
fn fmt_compact(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        #[allow(clippy::cast_possible_truncation)]
        let whole = n as i64;
        whole.to_string()
    } else {
        n.to_string()
    }
}

impl fmt::Display for NormalizedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric { min, max } => {
                write!(f, "{} - {}", fmt_compact(*min), fmt_compact(*max))
            }
            Self::Single(text) | Self::Unrecognized(text) => f.write_str(text),
            Self::Technique(technique) => write!(f, "{technique}"),
            Self::Unset => Ok(()),
        }
    }
}

/// A raw entry that has cleared every validation rule category.
///
/// Only the validator produces these: exercise names are forward-filled,
/// numeric blanks zero-filled, RIR canonicalized, and weight rounded to the
/// nearest quarter unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidatedSet {
    /// Training date
    pub date: NaiveDate,
    /// Routine name
    pub routine: String,
    /// Exercise name (forward-filled, never blank)
    pub exercise: String,
    /// Canonical rep-range
    pub range: NormalizedRange,
    /// Repetitions performed
    pub reps: u32,
    /// Weight used (kg), rounded to the nearest 0.25
    pub weight: f64,
    /// Canonical RIR; `None` when the cell was blank
    pub rir: Option<Rir>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rir_parse_accepts_failure_and_digits() {
        assert_eq!(Rir::parse("f"), Some(Rir::Failure));
        assert_eq!(Rir::parse("F"), Some(Rir::Failure));
        assert_eq!(Rir::parse("0"), Some(Rir::Reserve(0)));
        assert_eq!(Rir::parse(" 5 "), Some(Rir::Reserve(5)));
        assert_eq!(Rir::parse("6"), None);
        assert_eq!(Rir::parse("-1"), None);
        assert_eq!(Rir::parse("fail"), None);
    }

    #[test]
    fn rir_display_is_canonical() {
        assert_eq!(Rir::Failure.to_string(), "F");
        assert_eq!(Rir::Reserve(3).to_string(), "3");
    }

    #[test]
    fn technique_lookup_is_case_insensitive() {
        assert_eq!(Technique::from_name("myo-reps"), Some(Technique::MyoReps));
        assert_eq!(Technique::from_name("CLÚSTER"), Some(Technique::Cluster));
        assert_eq!(Technique::from_name("supersets"), None);
    }

    #[test]
    fn numeric_range_formats_compactly() {
        let range = NormalizedRange::Numeric { min: 8.0, max: 12.0 };
        assert_eq!(range.to_string(), "8 - 12");
        let decimal = NormalizedRange::Numeric { min: 2.5, max: 5.0 };
        assert_eq!(decimal.to_string(), "2.5 - 5");
    }
}
