pub mod balanced_span;
pub mod dip;
pub mod span;
pub mod telegraph;

// Re-export main types for convenient access
pub use span::{Span, SpanError};

pub use dip::{find_dip, find_dips, is_dip};

pub use balanced_span::{balanced_spans, longest_balanced_span, longest_balanced_span_indexed};

// Re-export telegraph normalization entry points and configuration
pub use telegraph::{
    telegraph_style, telegraph_style_into, telegraph_style_with, CharClass, TelegraphRules,
    Telegrapher, TELEGRAPH_TERMINATOR,
};
