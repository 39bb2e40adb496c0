// ABOUTME: One-rep-max estimation command for forja-cli
// ABOUTME: Prints the Brzycki estimate and the 2RM-10RM table for logged sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs

use forja::errors::AppResult;
use forja_analytics::algorithms::{OneRmEstimator, SetSample};

type Result<T> = AppResult<T>;

/// Estimate a one-rep max from one or two logged sets and print the table
pub fn run(
    weight: f64,
    reps: u32,
    rir: u32,
    second: Option<(f64, u32, u32)>,
    bodyweight: Option<f64>,
) -> Result<()> {
    let estimator = OneRmEstimator {
        primary: SetSample {
            weight_kg: weight,
            reps,
            rir,
        },
        secondary: second.map(|(weight_kg, reps, rir)| SetSample {
            weight_kg,
            reps,
            rir,
        }),
        bodyweight_kg: bodyweight,
    };
    let estimate = estimator.estimate()?;

    println!("Estimated 1RM: {:.1} kg", estimate.one_rm_kg);
    if bodyweight.is_some() {
        println!("(external load; bodyweight excluded from the figures)");
    }
    println!();
    println!("{:>5}  {:>10}  {:>7}", "reps", "weight", "% 1RM");
    for entry in &estimate.rep_maxes {
        println!(
            "{:>5}  {:>8.2} kg  {:>6.1}%",
            entry.reps, entry.weight_kg, entry.percent_of_one_rm
        );
    }
    Ok(())
}
