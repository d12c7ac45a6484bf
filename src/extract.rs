use crate::line::{Line, LineFragment};
use crate::line_breaker::BreakSet;
use crate::measure::LayoutWord;
use crate::style::ParagraphStyle;

/// Materialize the line for one [`BreakSet`] entry and hand it to the sink.
///
/// The paragraph's first-line indent marks only the paragraph's first row;
/// the extra-spacing flag lands only on the final row when the style asks
/// for it. Out-of-range inputs emit nothing. No drawing happens here: all
/// pixel work belongs to whatever the sink composes with.
pub fn extract_line<F>(
    words: &[LayoutWord],
    breaks: &BreakSet,
    break_pos: usize,
    style: ParagraphStyle,
    sink: &mut F,
) where
    F: FnMut(Line),
{
    let Some(&end) = breaks.get(break_pos) else {
        return;
    };
    let start = if break_pos == 0 {
        0
    } else {
        breaks[break_pos - 1] + 1
    };
    if start > end || end >= words.len() {
        return;
    }
    let fragments = words[start..=end]
        .iter()
        .map(|word| LineFragment {
            text: word.text.clone(),
            style: word.style,
        })
        .collect();
    let last = break_pos + 1 == breaks.len();
    sink(Line {
        fragments,
        align: style.align,
        indent: break_pos == 0 && style.first_line_indent,
        paragraph_end: last,
        extra_spacing: last && style.extra_paragraph_spacing,
    });
}
