use std::sync::Arc;

use rand::Rng as _;

use crate::{
    block::config::{BlockConfig, effective_wrap_width},
    effects::registry::EffectRegistry,
    foundation::{core::Point, error::TagTextResult, theme::Theme},
    layout::{
        cell::CharCell,
        engine::{LayoutEngine, LayoutParams, TextLayout},
        measure::TextMeasure,
    },
    render::{
        plan::{Align, FramePlan, GlyphStyle, execute_frame, plan_frame},
        surface::{Clock, RenderSurface},
    },
};

/// Upper bound (exclusive) of the per-block animation offset, in ms.
pub const ANIM_OFFSET_RANGE_MS: u64 = 1000;

fn random_anim_offset() -> u64 {
    rand::rng().random_range(0..ANIM_OFFSET_RANGE_MS)
}

/// A piece of marked-up text laid out once and drawn every frame.
///
/// The block owns the raw text, the wrap width and the typography, and keeps the
/// derived cells in sync with them. Layout is redone wholesale whenever the
/// text or wrap width changes; effects are only ever evaluated while drawing and
/// never feed back into [`TextBlock::width`] / [`TextBlock::height`].
pub struct TextBlock {
    measure: Arc<dyn TextMeasure + Send + Sync>,
    text: Option<String>,
    wrap_width: Option<f32>,
    text_size: f32,
    ascent: u32,
    text_height: u32,
    theme: Theme,
    layout: TextLayout,
    anim_offset: Option<u64>,
}

impl std::fmt::Debug for TextBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBlock")
            .field("text", &self.text)
            .field("wrap_width", &self.wrap_width)
            .field("text_size", &self.text_size)
            .field("cells", &self.layout.cells.len())
            .field("lines", &self.layout.line_count())
            .field("anim_offset", &self.anim_offset)
            .finish_non_exhaustive()
    }
}

impl TextBlock {
    /// Lay out `text` with `config`, measuring glyphs with `measure`.
    pub fn new(
        measure: Arc<dyn TextMeasure + Send + Sync>,
        text: &str,
        config: BlockConfig,
    ) -> TagTextResult<Self> {
        config.validate()?;

        let metrics = measure.vertical_metrics(config.text_size);
        let ascent = metrics.ascent.max(0.0) as u32;
        let descent = metrics.descent.max(0.0) as u32;

        let mut block = Self {
            measure,
            text: None,
            wrap_width: effective_wrap_width(config.wrap_width),
            text_size: config.text_size,
            ascent,
            text_height: ascent + descent,
            theme: config.theme,
            layout: TextLayout::default(),
            anim_offset: None,
        };
        block.set_text(text);
        Ok(block)
    }

    /// Replace the text. Does nothing when `text` equals the current text.
    pub fn set_text(&mut self, text: &str) {
        if self.text.as_deref() == Some(text) {
            return;
        }
        self.text = Some(text.to_owned());
        self.relayout();
    }

    /// Replace the text and wrap width; always lays out again.
    ///
    /// `None` or a negative width disables wrapping.
    pub fn set_text_wrapped(&mut self, text: &str, wrap_width: Option<f32>) {
        self.text = None;
        self.wrap_width = effective_wrap_width(wrap_width);
        self.set_text(text);
    }

    #[tracing::instrument(skip(self), fields(wrap_width = ?self.wrap_width))]
    fn relayout(&mut self) {
        let text = self.text.as_deref().unwrap_or_default();
        let params = LayoutParams {
            wrap_width: self.wrap_width,
            font_size: self.text_size,
            text_height: self.text_height,
            line_margin: self.theme.line_margin,
            default_color: self.theme.text_color,
        };
        self.layout = LayoutEngine::new(&*self.measure, params).layout(text);
    }

    /// The raw markup text.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    /// Emitted characters without markup.
    pub fn plain_text(&self) -> String {
        self.layout.cells.iter().map(|c| c.glyph).collect()
    }

    /// Current wrap width, `None` when unbounded.
    pub fn wrap_width(&self) -> Option<f32> {
        self.wrap_width
    }

    /// Width of the widest line, ignoring effects and backgrounds.
    pub fn width(&self) -> f32 {
        self.layout.width
    }

    /// Height of all lines, ignoring effects and backgrounds.
    pub fn height(&self) -> f32 {
        self.layout.height
    }

    /// Laid-out cells in emission order.
    pub fn cells(&self) -> &[CharCell] {
        &self.layout.cells
    }

    /// Width of every line.
    pub fn line_widths(&self) -> &[f32] {
        &self.layout.line_widths
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.layout.line_count()
    }

    /// The whole derived layout.
    pub fn layout(&self) -> &TextLayout {
        &self.layout
    }

    /// Font size.
    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    /// Height of one text box (ascent + descent).
    pub fn text_height(&self) -> u32 {
        self.text_height
    }

    /// Baseline distance from the top of a text box.
    pub fn ascent(&self) -> u32 {
        self.ascent
    }

    /// Display settings.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Pin the animation offset, e.g. for reproducible frames.
    pub fn set_anim_offset(&mut self, offset_ms: u64) {
        self.anim_offset = Some(offset_ms);
    }

    /// Per-block animation offset, picked at random on first use and kept after.
    pub fn anim_offset(&mut self) -> u64 {
        *self.anim_offset.get_or_insert_with(random_anim_offset)
    }

    /// Build the draw calls for one frame at `clock_ms` (before the block's offset).
    pub fn frame(
        &mut self,
        registry: &EffectRegistry,
        clock_ms: u64,
        origin: Point,
        align: Align,
    ) -> FramePlan {
        let time = clock_ms.saturating_add(self.anim_offset());
        let style = GlyphStyle {
            theme: &self.theme,
            font_size: self.text_size,
            ascent: self.ascent as f32,
        };
        plan_frame(&self.layout, style, registry, time, origin, align)
    }

    /// Draw the block onto `surface` with `origin` as the anchor point.
    #[tracing::instrument(skip(self, surface, registry, clock))]
    pub fn draw<S: RenderSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        registry: &EffectRegistry,
        clock: &dyn Clock,
        origin: Point,
        align: Align,
    ) -> TagTextResult<()> {
        let plan = self.frame(registry, clock.current_millis(), origin, align);
        execute_frame(surface, &plan)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/block/text_block.rs"]
mod tests;
