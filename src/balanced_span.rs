// WHY: candidates replace the best on `>=` while starts ascend, so equal-length ties go to the latest start

use crate::span::Span;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Replace `best` with `candidate` unless `best` is strictly longer
fn keep_longer_or_later(best: &mut Option<Span>, candidate: Span) {
    match *best {
        Some(current) if candidate.len() < current.len() => {}
        _ => *best = Some(candidate),
    }
}

/// Find the longest contiguous span of `values` summing to exactly zero
///
/// Among spans of the maximal length the one starting at the highest index is
/// returned. A single `0` element counts as a span of length 1. Returns `None`
/// for an empty sequence or when no zero-sum span exists.
///
/// Runs in O(n²): every start is paired with every end.
///
/// # Example
/// ```
/// use triad::{longest_balanced_span, Span};
/// assert_eq!(longest_balanced_span(&[1, -1, 7, 2, -2]), Some(Span::new(3, 5)));
/// assert_eq!(longest_balanced_span(&[1, 2, 3]), None);
/// ```
pub fn longest_balanced_span(values: &[i32]) -> Option<Span> {
    let mut best: Option<Span> = None;

    for start in 0..values.len() {
        // i64 keeps the running sum exact for any i32 input
        let mut sum: i64 = 0;
        for (end, &value) in values.iter().enumerate().skip(start) {
            sum += i64::from(value);
            if sum == 0 {
                keep_longer_or_later(&mut best, Span::new(start, end + 1));
            }
        }
    }

    debug!(len = values.len(), ?best, "balanced span search complete");
    best
}

/// Same result as [`longest_balanced_span`] in expected linear time
///
/// A span `[i, j)` sums to zero exactly when the prefix sums before `i` and
/// before `j` are equal, so for each `j` the longest candidate ending there
/// starts at the earliest prefix index with the same sum.
pub fn longest_balanced_span_indexed(values: &[i32]) -> Option<Span> {
    let mut first_seen: HashMap<i64, usize> = HashMap::with_capacity(values.len() + 1);
    first_seen.insert(0, 0);

    let mut best: Option<Span> = None;
    let mut prefix: i64 = 0;

    for (i, &value) in values.iter().enumerate() {
        prefix += i64::from(value);
        let end = i + 1;
        match first_seen.get(&prefix) {
            Some(&start) => keep_longer_or_later(&mut best, Span::new(start, end)),
            None => {
                first_seen.insert(prefix, end);
            }
        }
    }

    debug!(len = values.len(), ?best, "indexed balanced span search complete");
    best
}

/// Every zero-sum span of `values`, ordered by start then end
pub fn balanced_spans(values: &[i32]) -> Vec<Span> {
    let mut spans = Vec::new();

    for start in 0..values.len() {
        let mut sum: i64 = 0;
        for (end, &value) in values.iter().enumerate().skip(start) {
            sum += i64::from(value);
            if sum == 0 {
                spans.push(Span::new(start, end + 1));
            }
        }
    }

    trace!(len = values.len(), found = spans.len(), "enumerated balanced spans");
    spans
}
