use smallvec::SmallVec;

use crate::measure::{LayoutWord, WidthMeasurer};
use crate::renderer::TextMeasurer;

/// Minimum characters each fragment keeps after a split.
const MIN_FRAGMENT_CHARS: usize = 2;
/// Words shorter than this are never split.
const MIN_WORD_CHARS: usize = 5;

/// Candidate interior split offsets for `word`, ascending, in characters.
///
/// Structural heuristic, not a pronunciation dictionary: a split is plausible
/// where a vowel/consonant transition occurs between two ASCII letters
/// (`y` counts as a vowel). Offsets are clamped so both fragments keep at
/// least [`MIN_FRAGMENT_CHARS`] characters, so no split produces an empty
/// fragment or strands the last character alone.
pub fn hyphen_points(word: &str) -> SmallVec<[usize; 8]> {
    let chars: SmallVec<[char; 24]> = word.chars().collect();
    let mut out = SmallVec::new();
    if chars.len() < MIN_WORD_CHARS {
        return out;
    }
    let is_vowel = |c: char| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    for offset in MIN_FRAGMENT_CHARS..=(chars.len() - MIN_FRAGMENT_CHARS) {
        let prev = chars[offset - 1];
        let next = chars[offset];
        if !prev.is_ascii_alphabetic() || !next.is_ascii_alphabetic() {
            continue;
        }
        if is_vowel(prev) != is_vowel(next) {
            out.push(offset);
        }
    }
    out
}

/// A committed split for one word at a line boundary.
///
/// Transient: decisions are recomputed every layout pass and never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HyphenationDecision {
    /// Character offset of the split inside the original word.
    pub split_at: usize,
    /// First fragment, carrying the trailing hyphen glyph.
    pub head: String,
    /// Remainder, prepended to the next line.
    pub tail: String,
}

/// Find the split whose hyphenated head is the widest that still fits
/// `available_width`.
///
/// Candidates are scanned ascending and the scan stops at the first head that
/// no longer fits; head width is monotone in prefix length for the device
/// font metrics this engine targets.
pub fn find_split<F>(word: &str, available_width: u16, mut measure: F) -> Option<HyphenationDecision>
where
    F: FnMut(&str) -> u16,
{
    let mut best = None;
    for split_at in hyphen_points(word) {
        let Some((head, tail)) = split_at_char(word, split_at) else {
            continue;
        };
        let mut hyphenated = String::with_capacity(head.len() + 1);
        hyphenated.push_str(head);
        hyphenated.push('-');
        if measure(&hyphenated) <= available_width {
            best = Some(HyphenationDecision {
                split_at,
                head: hyphenated,
                tail: tail.to_string(),
            });
        } else {
            break;
        }
    }
    best
}

/// Try to split `words[index]` against the pixel budget remaining on the
/// current line.
///
/// On success the entry is spliced into a hyphenated head (which ends the
/// current line) followed by the tail, both re-measured, and `true` is
/// returned. `false` means no candidate head fits; the caller then breaks
/// before the word, or lets it overflow when it is already alone on a line
/// wider than the page.
pub fn hyphenate_word_at_index<M: TextMeasurer + ?Sized>(
    words: &mut Vec<LayoutWord>,
    index: usize,
    available_width: u16,
    measurer: &mut WidthMeasurer<'_, M>,
) -> bool {
    let Some(word) = words.get(index) else {
        return false;
    };
    let style = word.style;
    let decision = find_split(&word.text, available_width, |text| {
        measurer.width(text, style)
    });
    let Some(decision) = decision else {
        return false;
    };
    log::trace!(
        "split {:?} at char {} into {:?} + {:?}",
        word.text,
        decision.split_at,
        decision.head,
        decision.tail
    );
    let head_width = measurer.width(&decision.head, style);
    let tail_width = measurer.width(&decision.tail, style);
    words[index] = LayoutWord {
        text: decision.head,
        style,
        width: head_width,
    };
    words.insert(
        index + 1,
        LayoutWord {
            text: decision.tail,
            style,
            width: tail_width,
        },
    );
    true
}

fn split_at_char(word: &str, split_chars: usize) -> Option<(&str, &str)> {
    if split_chars == 0 {
        return None;
    }
    let byte = word.char_indices().nth(split_chars).map(|(byte, _)| byte)?;
    Some(word.split_at(byte))
}
