use crate::style::FontStyle;

/// Backend-local font identifier used for metrics and draw dispatch.
pub type FontId = u8;

/// Measurement half of the renderer capability.
///
/// Layout consumes only this trait; all measurement calls are synchronous and
/// assumed cheap (direct font-table access on the target device).
pub trait TextMeasurer {
    /// Pixel width of `text` rendered with the given face variant.
    fn text_width(&self, font_id: FontId, text: &str, style: FontStyle) -> u16;

    /// Advance height of one text row for `font_id`.
    fn line_height(&self, font_id: FontId) -> u16;

    /// Usable display width in pixels.
    fn viewport_width(&self) -> u16;
}

/// Full renderer capability: measurement plus drawing.
///
/// Drawing is fallible and the backend error passes through untouched; the
/// layout engine itself never draws.
pub trait TextRenderer: TextMeasurer {
    /// Error surfaced by the drawing backend.
    type DrawError;

    /// Draw `text` with its top-left corner at `(x, y)`.
    ///
    /// `inverted` renders light-on-dark for selection/highlight chrome.
    fn draw_text(
        &mut self,
        font_id: FontId,
        x: i32,
        y: i32,
        text: &str,
        style: FontStyle,
        inverted: bool,
    ) -> Result<(), Self::DrawError>;

    /// Draw a one-pixel line between two points.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), Self::DrawError>;

    /// Fill a rectangle; `set` selects dark (`true`) or cleared pixels.
    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        set: bool,
    ) -> Result<(), Self::DrawError>;
}
