// WHY: a span records indices only and never borrows the sequence it describes

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Non-empty half-open index range `[start, end)` into an integer sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    start: usize,
    end: usize,
}

/// Rejected span bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanError {
    /// `start >= end`, the range would cover no elements
    Empty { start: usize, end: usize },
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanError::Empty { start, end } => {
                write!(f, "span start {start} must be less than end {end}")
            }
        }
    }
}

impl std::error::Error for SpanError {}

impl Span {
    /// Create a span from bounds known to satisfy `start < end`
    ///
    /// # Panics
    /// Panics when `start >= end`. Use [`Span::try_new`] for untrusted bounds.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start < end, "span start {start} must be less than end {end}");
        Self { start, end }
    }

    /// Create a span from caller-supplied bounds
    pub fn try_new(start: usize, end: usize) -> Result<Self, SpanError> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(SpanError::Empty { start, end })
        }
    }

    /// First covered index
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last covered index
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of covered elements, always at least 1
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false; present so `len` reads naturally next to slice APIs
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index range suitable for slicing
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Borrow the covered elements of `values`
    ///
    /// # Panics
    /// Panics if the span reaches past the end of `values`.
    pub fn slice<'a, T>(&self, values: &'a [T]) -> &'a [T] {
        &values[self.range()]
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.range()
    }
}
