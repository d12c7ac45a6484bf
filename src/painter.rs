use crate::line::Line;
use crate::renderer::{FontId, TextRenderer};
use crate::style::Alignment;

/// Draw one line through the renderer capability.
///
/// Honors the line's alignment and indent flag within `content_width`
/// starting at `origin_x`. Justified rows spread their slack across the
/// inter-word gaps, except on a paragraph's final row, which stays ragged.
/// A row wider than the content (an unsplittable word) draws left-aligned
/// and overflows. Returns the row's advance height.
pub fn draw_line<R>(
    renderer: &mut R,
    font_id: FontId,
    line: &Line,
    origin_x: i32,
    origin_y: i32,
    content_width: u16,
    indent_px: u16,
) -> Result<u16, R::DrawError>
where
    R: TextRenderer + ?Sized,
{
    let space = u32::from(renderer.text_width(font_id, " ", crate::style::FontStyle::Regular));
    let widths: Vec<u32> = line
        .fragments
        .iter()
        .map(|fragment| u32::from(renderer.text_width(font_id, &fragment.text, fragment.style)))
        .collect();
    let gaps = widths.len().saturating_sub(1) as u32;
    let natural: u32 = widths.iter().sum::<u32>() + gaps * space;

    let indent = if line.indent { u32::from(indent_px) } else { 0 };
    let available = u32::from(content_width).saturating_sub(indent);
    let slack = available.saturating_sub(natural);

    let (lead, per_gap, spread) = match line.align {
        Alignment::Left => (0, 0, 0),
        Alignment::Center => (slack / 2, 0, 0),
        Alignment::Right => (slack, 0, 0),
        Alignment::Justified => {
            if line.paragraph_end || gaps == 0 {
                (0, 0, 0)
            } else {
                (0, slack / gaps, slack % gaps)
            }
        }
    };

    let mut x = origin_x + indent as i32 + lead as i32;
    for (index, fragment) in line.fragments.iter().enumerate() {
        renderer.draw_text(font_id, x, origin_y, &fragment.text, fragment.style, false)?;
        x += widths[index] as i32;
        if index + 1 < line.fragments.len() {
            let mut gap = space + per_gap;
            // Leftover justification pixels land on the leading gaps.
            if (index as u32) < spread {
                gap += 1;
            }
            x += gap as i32;
        }
    }
    Ok(renderer.line_height(font_id))
}
