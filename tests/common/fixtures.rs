use std::collections::BTreeMap;

use ink_flow::{FontId, FontStyle, Line, TextMeasurer};

/// Measurer with an explicit per-word width table.
///
/// Unknown strings (hyphenation fragments, spaces joined ad hoc) fall back
/// to a per-character width so searches stay deterministic.
pub struct TableMeasurer {
    widths: BTreeMap<&'static str, u16>,
    space_width: u16,
    fallback_char_px: u16,
}

impl TableMeasurer {
    pub fn new(entries: &[(&'static str, u16)], space_width: u16, fallback_char_px: u16) -> Self {
        Self {
            widths: entries.iter().copied().collect(),
            space_width,
            fallback_char_px,
        }
    }
}

impl TextMeasurer for TableMeasurer {
    fn text_width(&self, _font_id: FontId, text: &str, _style: FontStyle) -> u16 {
        if text == " " {
            return self.space_width;
        }
        self.widths
            .get(text)
            .copied()
            .unwrap_or((text.chars().count() as u16) * self.fallback_char_px)
    }

    fn line_height(&self, _font_id: FontId) -> u16 {
        16
    }

    fn viewport_width(&self) -> u16 {
        100
    }
}

/// Fixed-grid measurer: every character is the same number of pixels wide.
pub struct FixedGrid {
    pub char_px: u16,
    pub viewport: u16,
}

impl TextMeasurer for FixedGrid {
    fn text_width(&self, _font_id: FontId, text: &str, _style: FontStyle) -> u16 {
        (text.chars().count() as u16) * self.char_px
    }

    fn line_height(&self, _font_id: FontId) -> u16 {
        16
    }

    fn viewport_width(&self) -> u16 {
        self.viewport
    }
}

/// Rebuild the original word sequence from emitted lines, rejoining
/// hyphen-glyph splices across row boundaries.
pub fn rebuild_words(lines: &[Line]) -> Vec<String> {
    let mut out = Vec::new();
    let mut carry = String::new();
    for line in lines {
        let last = line.fragments.len().saturating_sub(1);
        for (index, fragment) in line.fragments.iter().enumerate() {
            let continues = index == last && !line.paragraph_end && fragment.text.ends_with('-');
            if continues {
                carry.push_str(&fragment.text[..fragment.text.len() - 1]);
            } else {
                let mut word = core::mem::take(&mut carry);
                word.push_str(&fragment.text);
                out.push(word);
            }
        }
    }
    out
}
