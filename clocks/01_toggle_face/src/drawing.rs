//! Drawing module - the canvas seam between the face and nannou
//!
//! The face issues primitives in its own frame (top-left origin, y down).
//! `NannouCanvas` maps them onto a window rect using nannou's Draw API.

use nannou::prelude::*;

/// Color palette for the face
pub mod colors {
    use nannou::prelude::*;

    pub const BACKGROUND: Srgb<u8> = Srgb {
        red: 0,
        green: 0,
        blue: 0,
        standard: std::marker::PhantomData,
    };
    pub const PRIMARY: Srgb<u8> = Srgb {
        red: 255,
        green: 255,
        blue: 255,
        standard: std::marker::PhantomData,
    };
    pub const SECONDARY: Srgb<u8> = Srgb {
        red: 204,
        green: 204,
        blue: 204,
        standard: std::marker::PhantomData,
    };
}

/// Colors used by each part of the face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub degrees: Srgb<u8>,
    pub numerals: Srgb<u8>,
    pub hour_needle: Srgb<u8>,
    pub minute_needle: Srgb<u8>,
    pub second_needle: Srgb<u8>,
    pub hub_outer: Srgb<u8>,
    pub hub_inner: Srgb<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            degrees: colors::PRIMARY,
            numerals: colors::PRIMARY,
            hour_needle: colors::PRIMARY,
            minute_needle: colors::PRIMARY,
            second_needle: colors::SECONDARY,
            hub_outer: colors::PRIMARY,
            hub_inner: colors::SECONDARY,
        }
    }
}

/// Line styling; caps are always round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Srgb<u8>,
    pub alpha: u8,
}

impl Stroke {
    pub fn solid(width: f32, color: Srgb<u8>) -> Self {
        Self {
            width,
            color,
            alpha: 255,
        }
    }
}

/// Drawing surface the face renders against
pub trait Canvas {
    fn line(&mut self, start: Point2, end: Point2, stroke: Stroke);

    /// Filled circle
    fn circle(&mut self, center: Point2, radius: f32, color: Srgb<u8>);

    /// Single line of text whose bounds start at `top_left`
    fn text(&mut self, text: &str, font_size: f32, top_left: Point2, color: Srgb<u8>);

    /// Width and height of the text's bounds at the given size
    fn measure_text(&self, text: &str, font_size: f32) -> Vec2;
}

/// Glyph size nannou can lay out; tiny faces would otherwise round to 0
fn font_px(font_size: f32) -> u32 {
    (font_size.round() as u32).max(1)
}

/// Canvas over a nannou `Draw`, targeting a square `Rect` of the window
pub struct NannouCanvas<'a> {
    draw: &'a Draw,
    rect: Rect,
}

impl<'a> NannouCanvas<'a> {
    pub fn new(draw: &'a Draw, rect: Rect) -> Self {
        Self { draw, rect }
    }

    /// Face coordinates to window coordinates (center origin, y up)
    fn to_window(&self, p: Point2) -> Point2 {
        pt2(self.rect.left() + p.x, self.rect.top() - p.y)
    }
}

impl Canvas for NannouCanvas<'_> {
    fn line(&mut self, start: Point2, end: Point2, stroke: Stroke) {
        let c = stroke.color;
        self.draw
            .line()
            .start(self.to_window(start))
            .end(self.to_window(end))
            .weight(stroke.width)
            .caps_round()
            .color(srgba(c.red, c.green, c.blue, stroke.alpha));
    }

    fn circle(&mut self, center: Point2, radius: f32, color: Srgb<u8>) {
        self.draw
            .ellipse()
            .xy(self.to_window(center))
            .radius(radius)
            .color(color);
    }

    fn text(&mut self, text: &str, font_size: f32, top_left: Point2, color: Srgb<u8>) {
        let size = self.measure_text(text, font_size);
        let center = self.to_window(top_left + size / 2.0);
        // Keep the box a little wider than the glyphs so nothing wraps
        self.draw
            .text(text)
            .xy(center)
            .wh(size + vec2(font_size, 0.0))
            .font_size(font_px(font_size))
            .no_line_wrap()
            .color(color);
    }

    fn measure_text(&self, text: &str, font_size: f32) -> Vec2 {
        let layout = nannou::text::text(text)
            .font_size(font_px(font_size))
            .no_line_wrap()
            .build(self.rect);
        layout.bounding_rect().wh()
    }
}
