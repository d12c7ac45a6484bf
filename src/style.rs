use serde::{Deserialize, Serialize};

/// Face variant selecting one face of the device font family.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

/// Horizontal alignment applied to a paragraph's lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

/// Paragraph-level layout style.
///
/// Attached once per [`WordBuffer`](crate::WordBuffer) and replaced whole via
/// [`set_style`](crate::WordBuffer::set_style), never partially mutated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Horizontal alignment for every line of the paragraph.
    pub align: Alignment,
    /// Indent the first line of the paragraph.
    pub first_line_indent: bool,
    /// Add an extra vertical gap after the paragraph's final line.
    pub extra_paragraph_spacing: bool,
}

impl ParagraphStyle {
    /// Style for plain body text: left aligned, indented, no trailing gap.
    pub fn body() -> Self {
        Self {
            align: Alignment::Left,
            first_line_indent: true,
            extra_paragraph_spacing: false,
        }
    }
}
