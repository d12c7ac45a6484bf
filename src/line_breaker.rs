use crate::hyphenation::hyphenate_word_at_index;
use crate::measure::{LayoutWord, WidthMeasurer};
use crate::renderer::TextMeasurer;

/// Strictly increasing word indices marking line boundaries.
///
/// A break at index `i` means the line ends after word `i`; the final entry
/// always equals the last word index, so the breaks partition the word range
/// into non-empty contiguous runs. Empty input yields an empty set.
pub type BreakSet = Vec<usize>;

/// Plain greedy wrap over precomputed word widths.
///
/// Words accumulate left to right with `space_width` between them until the
/// next word would exceed the line budget; the break lands before that word.
/// `first_line_indent_px` narrows line 0 only. A word wider than a whole
/// line occupies its own line and overflows rather than failing.
pub fn compute_line_breaks(
    page_width: u16,
    space_width: u16,
    first_line_indent_px: u16,
    word_widths: &[u16],
) -> BreakSet {
    let mut breaks = BreakSet::new();
    if word_widths.is_empty() {
        return breaks;
    }
    let space = u32::from(space_width);
    let mut budget = u32::from(page_width.saturating_sub(first_line_indent_px));
    let mut line_width = 0u32;
    let mut line_has_words = false;
    for (index, &width) in word_widths.iter().enumerate() {
        let needed = if line_has_words {
            line_width + space + u32::from(width)
        } else {
            u32::from(width)
        };
        if line_has_words && needed > budget {
            breaks.push(index - 1);
            budget = u32::from(page_width);
            line_width = u32::from(width);
        } else {
            line_width = needed;
            line_has_words = true;
        }
    }
    breaks.push(word_widths.len() - 1);
    breaks
}

/// Greedy wrap that tries a word-internal split before giving up a line's
/// trailing space.
///
/// Same accumulation as [`compute_line_breaks`], but when the next word
/// would overflow the remaining width the word is first offered to the
/// hyphenator against that remainder. A fitting head ends the line and the
/// tail starts the next one (`words` is spliced in place, so returned break
/// indices refer to the post-split sequence). With no fitting split the
/// word is pushed whole onto the next line; a word wider than the full line
/// that still cannot split is emitted as its own overflowing line rather
/// than looping.
///
/// Given widths that never overflow a boundary, the result is identical to
/// the plain algorithm, and identical inputs always produce identical
/// breaks.
pub fn compute_hyphenated_line_breaks<M: TextMeasurer + ?Sized>(
    measurer: &mut WidthMeasurer<'_, M>,
    page_width: u16,
    space_width: u16,
    first_line_indent_px: u16,
    words: &mut Vec<LayoutWord>,
) -> BreakSet {
    let mut breaks = BreakSet::new();
    if words.is_empty() {
        return breaks;
    }
    let space = u32::from(space_width);
    let mut budget = u32::from(page_width.saturating_sub(first_line_indent_px));
    let mut line_width = 0u32;
    let mut line_has_words = false;
    let mut index = 0usize;
    while index < words.len() {
        let width = u32::from(words[index].width);
        let needed = if line_has_words {
            line_width + space + width
        } else {
            width
        };
        if needed <= budget {
            line_width = needed;
            line_has_words = true;
            index += 1;
            continue;
        }

        // The word straddles the boundary; offer the remainder of the line
        // to the hyphenator first.
        let remaining = if line_has_words {
            budget.saturating_sub(line_width + space)
        } else {
            budget
        };
        let remaining = u16::try_from(remaining).unwrap_or(u16::MAX);
        if remaining > 0 && hyphenate_word_at_index(words, index, remaining, measurer) {
            breaks.push(index);
            index += 1;
            budget = u32::from(page_width);
            line_width = 0;
            line_has_words = false;
            continue;
        }

        if line_has_words {
            // Push the whole word onto a fresh line.
            breaks.push(index - 1);
            budget = u32::from(page_width);
            line_width = 0;
            line_has_words = false;
            continue;
        }

        // Alone on a full-width line and unsplittable: let it overflow.
        line_width = needed;
        line_has_words = true;
        index += 1;
    }
    breaks.push(words.len() - 1);
    breaks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::FontId;
    use crate::style::FontStyle;

    struct TenPxChars;

    impl TextMeasurer for TenPxChars {
        fn text_width(&self, _font_id: FontId, text: &str, _style: FontStyle) -> u16 {
            (text.chars().count() * 10) as u16
        }

        fn line_height(&self, _font_id: FontId) -> u16 {
            16
        }

        fn viewport_width(&self) -> u16 {
            100
        }
    }

    fn layout_words(words: &[&str]) -> Vec<LayoutWord> {
        words
            .iter()
            .map(|text| LayoutWord {
                text: (*text).to_string(),
                style: FontStyle::Regular,
                width: (text.chars().count() * 10) as u16,
            })
            .collect()
    }

    #[test]
    fn plain_breaks_match_the_reference_scenario() {
        // 30+5+40 = 75 fits; adding 45 overflows 100.
        let breaks = compute_line_breaks(100, 5, 0, &[30, 40, 45, 20]);
        assert_eq!(breaks, vec![1, 3]);
    }

    #[test]
    fn plain_breaks_on_empty_input_are_empty() {
        assert_eq!(compute_line_breaks(100, 5, 0, &[]), Vec::<usize>::new());
    }

    #[test]
    fn single_line_when_everything_fits() {
        assert_eq!(compute_line_breaks(200, 5, 0, &[30, 40, 45, 20]), vec![3]);
    }

    #[test]
    fn oversized_word_occupies_its_own_line() {
        let breaks = compute_line_breaks(100, 5, 0, &[150, 20, 20]);
        assert_eq!(breaks, vec![0, 2]);
    }

    #[test]
    fn first_line_indent_narrows_only_the_first_line() {
        // Without indent both words share line 0; 20px indent leaves 80px,
        // which 40+5+40 exceeds.
        assert_eq!(compute_line_breaks(85, 5, 0, &[40, 40]), vec![1]);
        assert_eq!(compute_line_breaks(85, 5, 20, &[40, 40]), vec![0, 1]);
    }

    #[test]
    fn hyphenated_breaks_split_a_straddling_word() {
        let renderer = TenPxChars;
        let mut measurer = WidthMeasurer::new(&renderer, 0);
        let mut words = layout_words(&["some", "hyphenation"]);
        // Line 0: "some" (40) + space (10) leaves 50; "hyphen-" (70) does
        // not fit but "hyph-" (50) does.
        let breaks = compute_hyphenated_line_breaks(&mut measurer, 100, 10, 0, &mut words);
        assert_eq!(words.len(), 3);
        assert_eq!(words[1].text, "hyph-");
        assert_eq!(words[2].text, "enation");
        assert_eq!(breaks, vec![1, 2]);
    }

    #[test]
    fn hyphenated_breaks_fall_back_to_a_plain_break() {
        let renderer = TenPxChars;
        let mut measurer = WidthMeasurer::new(&renderer, 0);
        // "the" has no split candidates; it moves whole to the next line.
        let mut words = layout_words(&["paragraph", "the"]);
        let breaks = compute_hyphenated_line_breaks(&mut measurer, 100, 10, 0, &mut words);
        assert_eq!(words.len(), 2);
        assert_eq!(breaks, vec![0, 1]);
    }

    #[test]
    fn hyphenated_breaks_match_plain_when_nothing_overflows() {
        let renderer = TenPxChars;
        let mut measurer = WidthMeasurer::new(&renderer, 0);
        let mut words = layout_words(&["one", "two", "six", "ten"]);
        let widths: Vec<u16> = words.iter().map(|word| word.width).collect();
        let plain = compute_line_breaks(100, 10, 0, &widths);
        let hyphenated = compute_hyphenated_line_breaks(&mut measurer, 100, 10, 0, &mut words);
        assert_eq!(plain, hyphenated);
        assert_eq!(words.len(), 4);
    }

    #[test]
    fn unsplittable_wide_word_overflows_without_looping() {
        let renderer = TenPxChars;
        let mut measurer = WidthMeasurer::new(&renderer, 0);
        // All vowels: no candidates at any width.
        let mut words = layout_words(&["aaaaaaaaaaaaaaa"]);
        let breaks = compute_hyphenated_line_breaks(&mut measurer, 100, 10, 0, &mut words);
        assert_eq!(breaks, vec![0]);
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn repeated_splits_consume_a_very_long_word() {
        let renderer = TenPxChars;
        let mut measurer = WidthMeasurer::new(&renderer, 0);
        let mut words = layout_words(&["paragraphparagraph"]);
        let breaks = compute_hyphenated_line_breaks(&mut measurer, 100, 10, 0, &mut words);
        // Every produced line fits the page width.
        for (position, &end) in breaks.iter().enumerate() {
            let start = if position == 0 {
                0
            } else {
                breaks[position - 1] + 1
            };
            let mut line = 0u32;
            for word in &words[start..=end] {
                if line > 0 {
                    line += 10;
                }
                line += u32::from(word.width);
            }
            assert!(line <= 100, "line {position} is {line}px");
        }
        assert!(words.len() > 1);
        assert_eq!(*breaks.last().unwrap(), words.len() - 1);
    }

    #[test]
    fn identical_inputs_break_identically() {
        let renderer = TenPxChars;
        let source = layout_words(&["some", "hyphenation", "heavy", "paragraph", "text"]);

        let mut first_words = source.clone();
        let mut first_measurer = WidthMeasurer::new(&renderer, 0);
        let first =
            compute_hyphenated_line_breaks(&mut first_measurer, 100, 10, 0, &mut first_words);

        let mut second_words = source;
        let mut second_measurer = WidthMeasurer::new(&renderer, 0);
        let second =
            compute_hyphenated_line_breaks(&mut second_measurer, 100, 10, 0, &mut second_words);

        assert_eq!(first, second);
        assert_eq!(first_words, second_words);
    }
}
