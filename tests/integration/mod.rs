// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a trace-level subscriber that writes through the test harness
pub fn init_test_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();
    });
}

/// Sum of a slice without overflow
pub fn sum(values: &[i32]) -> i64 {
    values.iter().map(|&v| i64::from(v)).sum()
}

/// Last dip start found by checking every triple directly
pub fn brute_force_last_dip(values: &[i32]) -> Option<usize> {
    if values.len() < 3 {
        return None;
    }
    (0..values.len() - 2)
        .rev()
        .find(|&i| values[i] == values[i + 2] && values[i + 1] < values[i])
}

/// Longest zero-sum `(start, end)` chosen by sorting all candidates on (length, start)
pub fn brute_force_balanced(values: &[i32]) -> Option<(usize, usize)> {
    let mut candidates = Vec::new();
    for start in 0..values.len() {
        for end in start + 1..=values.len() {
            if sum(&values[start..end]) == 0 {
                candidates.push((start, end));
            }
        }
    }
    candidates
        .into_iter()
        .max_by_key(|&(start, end)| (end - start, start))
}
