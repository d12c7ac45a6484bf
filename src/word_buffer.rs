use crate::style::{FontStyle, ParagraphStyle};

/// An immutable text token plus its face variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    text: String,
    style: FontStyle,
}

impl Word {
    /// The token text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The face variant the token renders with.
    pub fn style(&self) -> FontStyle {
        self.style
    }
}

/// Ordered, append-only words for one paragraph plus its paragraph style.
///
/// Words are write-once, read-many: accumulation must finish before layout
/// starts, and there is no removal. Holding word and style together in one
/// sequence keeps the two index-aligned by construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordBuffer {
    words: Vec<Word>,
    style: ParagraphStyle,
}

impl WordBuffer {
    /// Create an empty buffer with the given paragraph style.
    pub fn new(style: ParagraphStyle) -> Self {
        Self {
            words: Vec::new(),
            style,
        }
    }

    /// Append one word. Empty tokens are dropped.
    pub fn add_word(&mut self, text: impl Into<String>, style: FontStyle) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.words.push(Word { text, style });
    }

    /// Number of accumulated words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the buffer holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The paragraph style.
    pub fn style(&self) -> ParagraphStyle {
        self.style
    }

    /// Replace the paragraph style. Per-word styles are unaffected.
    pub fn set_style(&mut self, style: ParagraphStyle) {
        self.style = style;
    }

    /// The accumulated words in append order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}
