use serde::{Deserialize, Serialize};

use crate::style::{Alignment, FontStyle};

/// One styled run within a rendered line: a word or a hyphenated fragment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineFragment {
    pub text: String,
    pub style: FontStyle,
}

/// One visual row, ready for a sink (drawing or page-height accounting).
///
/// Ownership transfers to the sink; the engine keeps no reference after
/// emission. Fragments joined in order, with hyphen-glyph splices rejoined
/// across rows, reconstitute the paragraph's original word sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// The row's words/fragments in reading order.
    pub fragments: Vec<LineFragment>,
    /// Alignment inherited from the paragraph style.
    pub align: Alignment,
    /// The paragraph's first-line indent applies to this row.
    pub indent: bool,
    /// This row closes its paragraph.
    pub paragraph_end: bool,
    /// An extra vertical gap follows this row.
    pub extra_spacing: bool,
}

impl Line {
    /// The row's text with single spaces between fragments.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for fragment in &self.fragments {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&fragment.text);
        }
        out
    }
}
