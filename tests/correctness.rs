//! Integration tests for numstats correctness.
//!
//! These tests check the documented output lines and verify the ordering
//! and consistency properties of the statistics on randomized samples.

use numstats::{
    median, parse_sample, percentile, render, report, summarize, OutputMode, Params, Summary,
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// Sample sizes for randomized tests
const SIZES: [usize; 7] = [1, 2, 3, 10, 11, 100, 1001];

/// Number of iterations per configuration
const ITERATIONS: usize = 50;

/// Slack for interpolated values, which may round one ulp past their bounds
const TOLERANCE: f64 = 1e-9;

/// Integer-valued samples keep sums exact, so mean bounds hold without tolerance.
fn random_sample(rng: &mut impl Rng, size: usize) -> Vec<f64> {
    (0..size)
        .map(|_| rng.gen_range(-10_000..10_000) as f64)
        .collect()
}

fn run(input: &str, params: Params) -> String {
    let mut values = parse_sample(input).unwrap();
    report(&mut values, &params).unwrap()
}

fn with_pct(percentile: f64) -> Params {
    Params {
        percentile,
        ..Params::default()
    }
}

#[test]
fn test_default_human_output() {
    assert_eq!(
        run("1 2 3 4 5", Params::default()),
        "Num 5 Min 1.00 Med 3.00 Avg 3.00 95% 4.80 Max 5.00"
    );
}

#[test]
fn test_median_percentile() {
    assert_eq!(
        run("1 2 3 4 5", with_pct(50.0)),
        "Num 5 Min 1.00 50% 3.00 Med 3.00 Avg 3.00 Max 5.00"
    );
}

#[test]
fn test_machine_output() {
    let params = Params {
        mode: OutputMode::Machine,
        ..Params::default()
    };
    assert_eq!(run("10 20 30 40", params), "4|10.00|25.00|25.00|39.00|40.00");
}

#[test]
fn test_zero_digits_single_value() {
    let params = Params {
        digits: 0,
        ..Params::default()
    };
    assert_eq!(run("5", params), "Num 1 Min 5 Med 5 Avg 5 95% 5 Max 5");
}

#[test]
fn test_low_percentile_layout() {
    assert_eq!(
        run("3 1 2", with_pct(30.0)),
        "Num 3 Min 1.00 30% 1.60 Med 2.00 Avg 2.00 Max 3.00"
    );
}

#[test]
fn test_fractional_percentile_label() {
    assert_eq!(
        run("1 2 3 4 5", with_pct(97.5)),
        "Num 5 Min 1.00 Med 3.00 Avg 3.00 97.50% 4.90 Max 5.00"
    );
}

#[test]
fn test_trailing_newline_input() {
    assert_eq!(
        run("1 2 3 4 5\n", Params::default()),
        run("1 2 3 4 5", Params::default())
    );
}

#[test]
fn test_ordering_invariants() {
    let mut rng = rand::thread_rng();

    for &size in &SIZES {
        for _ in 0..ITERATIONS {
            let mut values = random_sample(&mut rng, size);
            let pct = rng.gen_range(0.0..=100.0);
            let s = summarize(&mut values, pct).unwrap();

            assert_eq!(s.count, size);
            assert!(s.min <= s.median && s.median <= s.max, "{:?}", s);
            assert!(s.min <= s.mean && s.mean <= s.max, "{:?}", s);
            assert!(
                s.min - TOLERANCE <= s.percentile && s.percentile <= s.max + TOLERANCE,
                "{:?}",
                s
            );
        }
    }
}

#[test]
fn test_percentile_is_monotonic() {
    let mut rng = rand::thread_rng();

    for &size in &SIZES {
        let mut values = random_sample(&mut rng, size);
        values.sort_by(f64::total_cmp);

        let mut previous = f64::NEG_INFINITY;
        for step in 0..=200 {
            let value = percentile(&values, step as f64 / 2.0).unwrap();
            assert!(
                value >= previous - TOLERANCE,
                "size={}, pct={}",
                size,
                step as f64 / 2.0
            );
            previous = value;
        }
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let mut rng = rand::thread_rng();

    for &size in &SIZES {
        let original = random_sample(&mut rng, size);

        let mut first = original.clone();
        let mut second = original.clone();
        second.shuffle(&mut rng);

        let a = report(&mut first, &Params::default()).unwrap();
        let b = report(&mut second, &Params::default()).unwrap();
        let c = report(&mut first, &Params::default()).unwrap();

        assert_eq!(a, b, "input order changed the result for size={}", size);
        assert_eq!(a, c, "re-summarizing sorted input changed the result");
    }
}

#[test]
fn test_extreme_percentiles() {
    let mut rng = rand::thread_rng();

    for &size in &SIZES {
        for _ in 0..ITERATIONS {
            let mut values = random_sample(&mut rng, size);
            let low = summarize(&mut values, 0.0).unwrap();
            let high = summarize(&mut values, 100.0).unwrap();

            assert_eq!(low.percentile, low.min);
            assert_eq!(high.percentile, high.max);
        }
    }
}

#[test]
fn test_p50_matches_median() {
    let mut rng = rand::thread_rng();

    for &size in &SIZES {
        for _ in 0..ITERATIONS {
            // Arbitrary reals: halving is exact, so both routes round alike
            let mut values: Vec<f64> = (0..size).map(|_| rng.gen_range(-1e6..1e6)).collect();
            let s = summarize(&mut values, 50.0).unwrap();

            assert_eq!(
                s.percentile, s.median,
                "size={}, sorted={:?}",
                size, values
            );
            assert_eq!(median(&values), Some(s.median));
        }
    }
}

#[test]
fn test_machine_and_human_agree() {
    let mut rng = rand::thread_rng();

    for &size in &SIZES {
        let mut values: Vec<f64> = (0..size).map(|_| rng.gen_range(-1e3..1e3)).collect();
        for pct in [5.0, 50.0, 90.0, 99.9] {
            let s = summarize(&mut values, pct).unwrap();
            let machine = render(&s, 3, OutputMode::Machine);
            let human = render(&s, 3, OutputMode::Human);

            let from_machine: Vec<String> = machine.split('|').map(String::from).collect();
            let from_human = human_fields(&human);

            assert_eq!(from_machine.len(), 6);
            assert_eq!(from_machine, from_human, "pct={}: {} vs {}", pct, machine, human);
        }
    }
}

/// Extracts `count|min|med|avg|pct|max` values from a human-readable line.
fn human_fields(line: &str) -> Vec<String> {
    let tokens: Vec<&str> = line.split(' ').collect();
    let mut fields = HashMap::new();
    for pair in tokens.chunks(2) {
        let label = if pair[0].ends_with('%') { "Pct" } else { pair[0] };
        fields.insert(label, pair[1].to_string());
    }

    ["Num", "Min", "Med", "Avg", "Pct", "Max"]
        .iter()
        .map(|label| fields[label].clone())
        .collect()
}

#[test]
fn test_summary_display() {
    let summary = Summary {
        count: 2,
        min: 1.0,
        median: 1.5,
        mean: 1.5,
        percentile: 1.95,
        max: 2.0,
        pct: 95.0,
    };
    assert_eq!(
        summary.to_string(),
        "Num 2 Min 1.00 Med 1.50 Avg 1.50 95% 1.95 Max 2.00"
    );
}
