//! Deterministic paragraph layout for e-paper reader firmware.
//!
//! Turns an ordered sequence of styled words into rendered lines that fit a
//! fixed pixel width, splitting words at structural hyphenation points when
//! that recovers trailing space. Re-laying out the same paragraph against the
//! same metrics always yields the same line breaks.
//!
//! The engine performs no drawing of its own: it consumes the measurement
//! half of the [`TextRenderer`] capability and hands finished [`Line`]s to a
//! caller-supplied sink. [`draw_line`] and [`PageComposer`] are the
//! sink-side helpers a reader UI composes with.

#![cfg_attr(
    not(test),
    deny(
        clippy::disallowed_methods,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::panic_in_result_fn,
        clippy::todo,
        clippy::unimplemented
    )
)]

mod extract;
mod hyphenation;
mod layout;
mod line;
mod line_breaker;
mod measure;
mod pager;
mod painter;
mod renderer;
mod style;
mod word_buffer;

pub use extract::extract_line;
pub use hyphenation::{find_split, hyphen_points, hyphenate_word_at_index, HyphenationDecision};
pub use layout::{HyphenationMode, LayoutConfig, LayoutEngine};
pub use line::{Line, LineFragment};
pub use line_breaker::{compute_hyphenated_line_breaks, compute_line_breaks, BreakSet};
pub use measure::{LayoutWord, WidthMeasurer};
pub use pager::{Page, PageComposer, PagerConfig, PlacedLine};
pub use painter::draw_line;
pub use renderer::{FontId, TextMeasurer, TextRenderer};
pub use style::{Alignment, FontStyle, ParagraphStyle};
pub use word_buffer::{Word, WordBuffer};
