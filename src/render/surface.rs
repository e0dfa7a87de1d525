use std::time::Instant;

use crate::foundation::{
    core::{Affine, Argb, Point, RoundedRect},
    error::TagTextResult,
    theme::FontHandle,
};

#[derive(Clone, Debug, PartialEq)]
/// One rounded background rectangle behind a glyph.
pub struct BackgroundDraw {
    /// Maps the cell's local box (origin at its top-left) into block space.
    pub transform: Affine,
    /// Rectangle in cell-local coordinates, already inflated by the margin.
    pub rect: RoundedRect,
    /// Fill color.
    pub color: Argb,
}

#[derive(Clone, Debug, PartialEq)]
/// One glyph (or its drop shadow) to paint.
pub struct GlyphDraw {
    /// The character.
    pub glyph: char,
    /// Maps the cell's local box (origin at its top-left) into block space.
    pub transform: Affine,
    /// Baseline origin in cell-local coordinates.
    pub baseline: Point,
    /// Fill color.
    pub color: Argb,
    /// Font size to draw at.
    pub font_size: f32,
}

/// The drawing side of the rendering collaborator.
///
/// Calls arrive in paint order: [`RenderSurface::set_font`] once per frame, then
/// every background, then glyphs (each shadow right before its glyph).
pub trait RenderSurface {
    /// Select the font for the following glyphs. `None` means the surface default.
    fn set_font(&mut self, font: Option<&FontHandle>, font_size: f32) -> TagTextResult<()>;

    /// Paint a rounded background rectangle.
    fn draw_background(&mut self, draw: &BackgroundDraw) -> TagTextResult<()>;

    /// Paint one glyph.
    fn draw_glyph(&mut self, draw: &GlyphDraw) -> TagTextResult<()>;
}

/// Millisecond animation clock.
pub trait Clock {
    /// Milliseconds elapsed since some fixed epoch of the clock.
    fn current_millis(&self) -> u64;
}

/// Wall clock counting from its own creation.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    /// Start counting now.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn current_millis(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Clock frozen at a given millisecond value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn current_millis(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
