// WHY: "last dip" semantics need a full scan; the candidate is overwritten on every match

use tracing::trace;

/// True when `first, middle, last` form a dip: outer values equal, middle strictly lower
pub fn is_dip(first: i32, middle: i32, last: i32) -> bool {
    first == last && middle < first
}

/// Find the start index of the last dip in `values`
///
/// Returns `None` when no dip exists, which is always the case for fewer than
/// three elements. Callers that want the past-the-end position instead can use
/// `find_dip(values).unwrap_or(values.len())`.
///
/// # Example
/// ```
/// use triad::find_dip;
/// assert_eq!(find_dip(&[8, 5, 8, 9, 4, 9]), Some(3));
/// assert_eq!(find_dip(&[8, 8, 8]), None);
/// ```
pub fn find_dip(values: &[i32]) -> Option<usize> {
    let mut last_dip = None;

    for (i, window) in values.windows(3).enumerate() {
        if is_dip(window[0], window[1], window[2]) {
            last_dip = Some(i);
        }
    }

    trace!(len = values.len(), ?last_dip, "dip scan complete");
    last_dip
}

/// Start indices of every dip in `values`, in increasing order
pub fn find_dips(values: &[i32]) -> Vec<usize> {
    values
        .windows(3)
        .enumerate()
        .filter(|(_, window)| is_dip(window[0], window[1], window[2]))
        .map(|(i, _)| i)
        .collect()
}
