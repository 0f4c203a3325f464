// WHY: one classification per input character keeps the normalizer a single left-to-right pass

/// Characters rewritten to `.` under the default rules
pub const DEFAULT_PERIOD_ALIASES: &[char] = &['!', '?', ';'];

/// What a single input character contributes to telegraph output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII letter, already upper-cased
    Letter(char),
    /// ASCII decimal digit
    Digit(char),
    /// U+0020, subject to run collapsing
    Space,
    /// A literal period or one of the period aliases
    Period,
    /// Anything else; contributes nothing and leaves space tracking untouched
    Dropped,
}

impl CharClass {
    /// Classify `ch` under the default period aliases
    pub fn of(ch: char) -> Self {
        Self::classify(ch, DEFAULT_PERIOD_ALIASES)
    }

    /// Classify `ch`, treating every character in `period_aliases` as a period
    pub fn classify(ch: char, period_aliases: &[char]) -> Self {
        if period_aliases.contains(&ch) {
            return CharClass::Period;
        }
        match ch {
            'a'..='z' | 'A'..='Z' => CharClass::Letter(ch.to_ascii_uppercase()),
            '0'..='9' => CharClass::Digit(ch),
            ' ' => CharClass::Space,
            '.' => CharClass::Period,
            _ => CharClass::Dropped,
        }
    }

    /// The character written to output, if any
    ///
    /// Spaces report `Some(' ')`; whether one is actually written depends on
    /// the preceding output.
    pub fn emitted(self) -> Option<char> {
        match self {
            CharClass::Letter(ch) | CharClass::Digit(ch) => Some(ch),
            CharClass::Space => Some(' '),
            CharClass::Period => Some('.'),
            CharClass::Dropped => None,
        }
    }

    /// True for characters that already appear unchanged in telegraph output
    pub fn is_retained_as_is(ch: char) -> bool {
        matches!(ch, 'A'..='Z' | '0'..='9' | ' ' | '.')
    }
}
