// WHY: standalone normalization logic with a buffer-reusing variant for batch callers
// Classification and space collapsing happen in one pass; the terminator check runs once at the end

use super::char_class::{CharClass, DEFAULT_PERIOD_ALIASES};
use super::TelegraphRules;
use tracing::trace;

/// Literal every telegraph-style string ends with under the default rules
pub const TELEGRAPH_TERMINATOR: &str = "STOP.";

/// Convert `s` to telegraph style
///
/// Lower-case letters are upper-cased, `!`, `?` and `;` become periods, any
/// character that is not an upper-case ASCII letter, digit, space or period is
/// dropped, runs of spaces collapse to one space, and `STOP.` is appended
/// unless the result already ends with it.
///
/// # Example
/// ```
/// use triad::telegraph_style;
/// assert_eq!(telegraph_style("hello!!  world"), "HELLO.. WORLDSTOP.");
/// assert_eq!(telegraph_style(""), "STOP.");
/// ```
pub fn telegraph_style(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + TELEGRAPH_TERMINATOR.len());
    telegraph_style_into(s, &mut result);
    result
}

/// Convert `s` to telegraph style into a supplied buffer to avoid allocation
pub fn telegraph_style_into(s: &str, buffer: &mut String) {
    normalize_into(s, DEFAULT_PERIOD_ALIASES, TELEGRAPH_TERMINATOR, buffer);
}

/// Convert `s` to telegraph style using explicit `rules`
///
/// `rules` are expected to have passed [`TelegraphRules::validate`]; see
/// [`Telegrapher`](super::Telegrapher) for a handle that enforces this once.
pub fn telegraph_style_with(s: &str, rules: &TelegraphRules) -> String {
    let mut result = String::with_capacity(s.len() + rules.terminator.len());
    normalize_into(s, &rules.period_aliases, &rules.terminator, &mut result);
    result
}

pub(crate) fn normalize_into(
    s: &str,
    period_aliases: &[char],
    terminator: &str,
    buffer: &mut String,
) {
    buffer.clear();
    buffer.reserve(s.len() + terminator.len());

    let mut prev_was_space = false;
    let mut dropped = 0usize;

    for ch in s.chars() {
        match CharClass::classify(ch, period_aliases) {
            CharClass::Space => {
                // Only the first space of a run survives
                if !prev_was_space {
                    buffer.push(' ');
                    prev_was_space = true;
                }
            }
            CharClass::Dropped => {
                // WHY: a dropped character must not end a space run
                dropped += 1;
            }
            class => {
                if let Some(out) = class.emitted() {
                    buffer.push(out);
                }
                prev_was_space = false;
            }
        }
    }

    // WHY: literal tail match against the accumulated output, not the raw input
    let terminated = buffer.ends_with(terminator);
    if !terminated {
        buffer.push_str(terminator);
    }

    trace!(
        input_len = s.len(),
        output_len = buffer.len(),
        dropped,
        appended_terminator = !terminated,
        "telegraph normalization complete"
    );
}
