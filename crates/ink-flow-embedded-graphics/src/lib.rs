//! embedded-graphics renderer backend for `ink-flow` lines.
//!
//! Implements the [`TextRenderer`] capability over any monochrome
//! [`DrawTarget`], mapping face variants onto the built-in ASCII mono fonts.
//! Measurement stays exact for mono metrics: one advance per character.

#![cfg_attr(
    not(test),
    deny(
        clippy::disallowed_methods,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::panic_in_result_fn,
        clippy::todo,
        clippy::unimplemented
    )
)]

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_7X13_ITALIC, FONT_7X14, FONT_7X14_BOLD},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line as SegmentPrimitive, PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use ink_flow::{FontId, FontStyle, TextMeasurer, TextRenderer};

/// Mono face variants for one logical font id.
#[derive(Clone, Copy, Debug)]
pub struct FontFace {
    pub regular: &'static MonoFont<'static>,
    pub bold: &'static MonoFont<'static>,
    pub italic: &'static MonoFont<'static>,
    pub bold_italic: &'static MonoFont<'static>,
    /// Extra leading below the glyph box.
    pub line_gap_px: u16,
}

impl FontFace {
    /// A face where every variant maps to the same font.
    pub fn uniform(font: &'static MonoFont<'static>) -> Self {
        Self {
            regular: font,
            bold: font,
            italic: font,
            bold_italic: font,
            line_gap_px: 2,
        }
    }

    fn for_style(&self, style: FontStyle) -> &'static MonoFont<'static> {
        match style {
            FontStyle::Regular => self.regular,
            FontStyle::Bold => self.bold,
            FontStyle::Italic => self.italic,
            FontStyle::BoldItalic => self.bold_italic,
        }
    }
}

/// Default reader face: 7px body family plus a large uniform heading face.
///
/// Font id 0 is body text, font id 1 headings. The 7x14 family has no
/// bold-italic cut, so that variant falls back to bold.
pub fn default_faces() -> Vec<FontFace> {
    vec![
        FontFace {
            regular: &FONT_7X14,
            bold: &FONT_7X14_BOLD,
            italic: &FONT_7X13_ITALIC,
            bold_italic: &FONT_7X14_BOLD,
            line_gap_px: 2,
        },
        FontFace::uniform(&FONT_10X20),
    ]
}

/// Renderer over any monochrome draw target.
///
/// Unknown font ids resolve to the first registered face, so measurement
/// and drawing never fail on a stale id.
pub struct EgRenderer<D> {
    display: D,
    faces: Vec<FontFace>,
    fallback: FontFace,
}

impl<D> EgRenderer<D> {
    /// Wrap a display with the given face table.
    pub fn new(display: D, faces: Vec<FontFace>) -> Self {
        if faces.is_empty() {
            log::warn!("no font faces registered; using built-in 7x14 fallback");
        }
        let fallback = faces
            .first()
            .copied()
            .unwrap_or_else(|| FontFace::uniform(&FONT_7X14));
        Self {
            display,
            faces,
            fallback,
        }
    }

    /// Wrap a display with [`default_faces`].
    pub fn with_default_faces(display: D) -> Self {
        Self::new(display, default_faces())
    }

    /// Borrow the wrapped display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Unwrap the display, e.g. to flush it to the panel.
    pub fn into_display(self) -> D {
        self.display
    }

    fn face(&self, font_id: FontId) -> FontFace {
        self.faces
            .get(usize::from(font_id))
            .copied()
            .unwrap_or(self.fallback)
    }

    fn advance_px(font: &MonoFont<'_>) -> u32 {
        font.character_size.width + font.character_spacing
    }
}

impl<D> TextMeasurer for EgRenderer<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fn text_width(&self, font_id: FontId, text: &str, style: FontStyle) -> u16 {
        let font = self.face(font_id).for_style(style);
        let width = Self::advance_px(font) * text.chars().count() as u32;
        width.min(u32::from(u16::MAX)) as u16
    }

    fn line_height(&self, font_id: FontId) -> u16 {
        let face = self.face(font_id);
        let height = face.regular.character_size.height.min(u32::from(u16::MAX)) as u16;
        height.saturating_add(face.line_gap_px)
    }

    fn viewport_width(&self) -> u16 {
        self.display
            .bounding_box()
            .size
            .width
            .min(u32::from(u16::MAX)) as u16
    }
}

impl<D> TextRenderer for EgRenderer<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    type DrawError = D::Error;

    fn draw_text(
        &mut self,
        font_id: FontId,
        x: i32,
        y: i32,
        text: &str,
        style: FontStyle,
        inverted: bool,
    ) -> Result<(), Self::DrawError> {
        let font = self.face(font_id).for_style(style);
        if inverted {
            let width = u32::from(self.text_width(font_id, text, style));
            Rectangle::new(Point::new(x, y), Size::new(width, font.character_size.height))
                .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                .draw(&mut self.display)?;
        }
        let color = if inverted {
            BinaryColor::Off
        } else {
            BinaryColor::On
        };
        Text::with_baseline(
            text,
            Point::new(x, y),
            MonoTextStyle::new(font, color),
            Baseline::Top,
        )
        .draw(&mut self.display)?;
        Ok(())
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), Self::DrawError> {
        SegmentPrimitive::new(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut self.display)
    }

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        set: bool,
    ) -> Result<(), Self::DrawError> {
        let color = if set { BinaryColor::On } else { BinaryColor::Off };
        Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.display)
    }
}
