use std::collections::BTreeMap;

use crate::renderer::{FontId, TextMeasurer};
use crate::style::FontStyle;
use crate::word_buffer::WordBuffer;

/// A word annotated with its measured pixel width for the current pass.
///
/// This is the working unit flowing through the line breaker; hyphenation may
/// splice one entry into a head/tail pair mid-pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutWord {
    pub text: String,
    pub style: FontStyle,
    pub width: u16,
}

/// Width oracle for one layout pass.
///
/// Wraps the renderer's measurement calls and memoizes per-text results so a
/// hyphenation search never re-measures the same fragment. A measurer lives
/// for exactly one pass; changing font or viewport means building a new one.
pub struct WidthMeasurer<'a, M: ?Sized> {
    measurer: &'a M,
    font_id: FontId,
    cache: BTreeMap<FontStyle, BTreeMap<String, u16>>,
}

impl<'a, M: TextMeasurer + ?Sized> WidthMeasurer<'a, M> {
    /// Create a measurer bound to one renderer and font for this pass.
    pub fn new(measurer: &'a M, font_id: FontId) -> Self {
        Self {
            measurer,
            font_id,
            cache: BTreeMap::new(),
        }
    }

    /// Memoized pixel width of `text` in the given face variant.
    pub fn width(&mut self, text: &str, style: FontStyle) -> u16 {
        let by_text = self.cache.entry(style).or_default();
        if let Some(width) = by_text.get(text) {
            return *width;
        }
        let width = self.measurer.text_width(self.font_id, text, style);
        by_text.insert(text.to_string(), width);
        width
    }

    /// Width of a single inter-word space.
    pub fn space_width(&mut self) -> u16 {
        self.width(" ", FontStyle::Regular)
    }

    /// Advance height of one text row.
    pub fn line_height(&self) -> u16 {
        self.measurer.line_height(self.font_id)
    }

    /// Measure every word of the buffer, producing the pass's width table.
    ///
    /// The result always has one entry per buffered word.
    pub fn measure_words(&mut self, buffer: &WordBuffer) -> Vec<LayoutWord> {
        let mut out = Vec::with_capacity(buffer.len());
        for word in buffer.words() {
            let width = self.width(word.text(), word.style());
            out.push(LayoutWord {
                text: word.text().to_string(),
                style: word.style(),
                width,
            });
        }
        out
    }
}
