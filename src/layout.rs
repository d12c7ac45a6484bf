use crate::extract::extract_line;
use crate::line::Line;
use crate::line_breaker::{compute_hyphenated_line_breaks, compute_line_breaks};
use crate::measure::WidthMeasurer;
use crate::renderer::{FontId, TextMeasurer};
use crate::style::Alignment;
use crate::word_buffer::WordBuffer;

/// Word-splitting policy for the break pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HyphenationMode {
    /// Hyphenate left-aligned and justified paragraphs; centered and
    /// right-aligned text always uses plain breaks.
    #[default]
    Auto,
    /// Never split words.
    Off,
}

/// Layout configuration for one engine instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    /// First-line indent in pixels, applied when the paragraph style asks
    /// for one.
    pub first_line_indent_px: u16,
    /// Word-splitting policy.
    pub hyphenation: HyphenationMode,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            first_line_indent_px: 16,
            hyphenation: HyphenationMode::Auto,
        }
    }
}

/// Deterministic layout engine: styled words in, lines out via the sink.
#[derive(Clone, Copy, Debug, Default)]
pub struct LayoutEngine {
    cfg: LayoutConfig,
}

impl LayoutEngine {
    /// Create an engine with the given configuration.
    pub fn new(cfg: LayoutConfig) -> Self {
        Self { cfg }
    }

    /// The engine's configuration.
    pub fn config(&self) -> LayoutConfig {
        self.cfg
    }

    /// Lay out one paragraph against `viewport_width` and stream each
    /// finished row to `sink` in reading order.
    ///
    /// The pass measures every word once, computes a hyphenation-aware
    /// break set, and extracts one [`Line`] per break. With
    /// `include_last_line` false the final (possibly partial) row is
    /// withheld, which lets a caller count full rows without committing the
    /// remainder to the current page. Degenerate inputs (no words, zero
    /// viewport width) emit nothing.
    pub fn layout_and_extract_lines<M, F>(
        &self,
        buffer: &WordBuffer,
        renderer: &M,
        font_id: FontId,
        viewport_width: u16,
        mut sink: F,
        include_last_line: bool,
    ) where
        M: TextMeasurer + ?Sized,
        F: FnMut(Line),
    {
        if buffer.is_empty() || viewport_width == 0 {
            return;
        }
        let style = buffer.style();
        let mut measurer = WidthMeasurer::new(renderer, font_id);
        let mut words = measurer.measure_words(buffer);
        let space_width = measurer.space_width();
        let indent_px = if style.first_line_indent {
            self.cfg.first_line_indent_px
        } else {
            0
        };
        let hyphenate = match self.cfg.hyphenation {
            HyphenationMode::Off => false,
            HyphenationMode::Auto => {
                matches!(style.align, Alignment::Left | Alignment::Justified)
            }
        };
        let breaks = if hyphenate {
            compute_hyphenated_line_breaks(
                &mut measurer,
                viewport_width,
                space_width,
                indent_px,
                &mut words,
            )
        } else {
            let widths: Vec<u16> = words.iter().map(|word| word.width).collect();
            compute_line_breaks(viewport_width, space_width, indent_px, &widths)
        };
        log::debug!(
            "laid out {} words into {} lines at {}px",
            buffer.len(),
            breaks.len(),
            viewport_width
        );
        let emit = if include_last_line {
            breaks.len()
        } else {
            breaks.len().saturating_sub(1)
        };
        for break_pos in 0..emit {
            extract_line(&words, &breaks, break_pos, style, &mut sink);
        }
    }
}

impl WordBuffer {
    /// Lay out this paragraph with the default [`LayoutConfig`].
    ///
    /// Convenience wrapper over [`LayoutEngine::layout_and_extract_lines`];
    /// this is the single entry point UI code drives per paragraph.
    pub fn layout_and_extract_lines<M, F>(
        &self,
        renderer: &M,
        font_id: FontId,
        viewport_width: u16,
        sink: F,
        include_last_line: bool,
    ) where
        M: TextMeasurer + ?Sized,
        F: FnMut(Line),
    {
        LayoutEngine::default().layout_and_extract_lines(
            self,
            renderer,
            font_id,
            viewport_width,
            sink,
            include_last_line,
        )
    }
}
