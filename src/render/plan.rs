use crate::{
    effects::{
        pipeline::{EffectParams, apply_effects},
        registry::EffectRegistry,
    },
    foundation::{
        core::{Affine, Point, Rect, RoundedRect, Vec2},
        error::TagTextResult,
        theme::{FontHandle, Theme},
    },
    layout::engine::TextLayout,
    render::surface::{BackgroundDraw, GlyphDraw, RenderSurface},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Which horizontal point of each line sits on the anchor.
pub enum HAlign {
    /// Lines start at the anchor.
    #[default]
    Left,
    /// Lines are centered on the anchor.
    Center,
    /// Lines end at the anchor.
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Which vertical point of the block sits on the anchor.
pub enum VAlign {
    /// Block top at the anchor.
    #[default]
    Top,
    /// Block centered on the anchor.
    Center,
    /// Block bottom at the anchor.
    Bottom,
}

impl HAlign {
    fn offset(self, line_width: f32) -> f32 {
        match self {
            Self::Left => 0.0,
            Self::Center => -line_width / 2.0,
            Self::Right => -line_width,
        }
    }
}

impl VAlign {
    fn offset(self, block_height: f32) -> f32 {
        match self {
            Self::Top => 0.0,
            Self::Center => -block_height / 2.0,
            Self::Bottom => -block_height,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Anchor placement of a block relative to its draw position.
pub struct Align {
    /// Per-line horizontal alignment.
    pub h: HAlign,
    /// Whole-block vertical alignment.
    pub v: VAlign,
}

impl Align {
    /// Build from both axes.
    pub fn new(h: HAlign, v: VAlign) -> Self {
        Self { h, v }
    }
}

#[derive(Clone, Copy, Debug)]
/// Glyph styling needed to turn cells into draw calls.
pub struct GlyphStyle<'a> {
    /// Theme supplying shadow and background settings.
    pub theme: &'a Theme,
    /// Font size to draw at.
    pub font_size: f32,
    /// Baseline distance from the top of a cell.
    pub ascent: f32,
}

#[derive(Clone, Debug, PartialEq)]
/// Everything needed to paint one animation frame of a block, in paint order.
pub struct FramePlan {
    /// Font to select before painting.
    pub font: Option<FontHandle>,
    /// Font size to select before painting.
    pub font_size: f32,
    /// Effect output for every cell, indexed like the layout's cells.
    pub params: Vec<EffectParams>,
    /// Background rectangles, painted first.
    pub backgrounds: Vec<BackgroundDraw>,
    /// Shadows and glyphs, painted last.
    pub glyphs: Vec<GlyphDraw>,
}

/// Evaluate effects at `time` and produce the draw calls for one frame.
///
/// `origin` is the anchor point in surface space; `align` says which point of the
/// text sits on it.
pub fn plan_frame(
    layout: &TextLayout,
    style: GlyphStyle<'_>,
    registry: &EffectRegistry,
    time: u64,
    origin: Point,
    align: Align,
) -> FramePlan {
    let theme = style.theme;
    let block_origin = Vec2::new(
        origin.x,
        origin.y + f64::from(align.v.offset(layout.height)),
    );
    let margin = f64::from(theme.background_margin);
    let shadow = f64::from(theme.drop_shadow_offset);
    let ascent = f64::from(style.ascent);

    let mut params = Vec::with_capacity(layout.cells.len());
    let mut transforms = Vec::with_capacity(layout.cells.len());
    let mut backgrounds = Vec::new();

    for cell in &layout.cells {
        let p = apply_effects(cell, registry, time);
        let w = f64::from(cell.width);
        let h = f64::from(cell.height);
        let line_offset = f64::from(align.h.offset(layout.line_width(cell.line)));

        let center = block_origin
            + Vec2::new(
                line_offset + f64::from(p.x) + w / 2.0,
                f64::from(p.y) + h / 2.0,
            );
        let transform = Affine::translate(center)
            * Affine::rotate(f64::from(p.rotation))
            * Affine::translate((-w / 2.0, -h / 2.0));

        if let Some(color) = p.background {
            backgrounds.push(BackgroundDraw {
                transform,
                rect: RoundedRect::from_rect(
                    Rect::new(-margin, -margin, w + margin, h + margin),
                    f64::from(theme.corner_radius),
                ),
                color,
            });
        }

        params.push(p);
        transforms.push(transform);
    }

    let shadow_color = theme.shadow_color();
    let mut glyphs = Vec::with_capacity(layout.cells.len() * 2);
    for ((cell, p), transform) in layout.cells.iter().zip(&params).zip(transforms) {
        if theme.drop_shadow_offset != 0 {
            glyphs.push(GlyphDraw {
                glyph: cell.glyph,
                transform,
                baseline: Point::new(shadow, ascent + shadow),
                color: shadow_color,
                font_size: style.font_size,
            });
        }
        glyphs.push(GlyphDraw {
            glyph: cell.glyph,
            transform,
            baseline: Point::new(0.0, ascent),
            color: p.color,
            font_size: style.font_size,
        });
    }

    FramePlan {
        font: theme.font.clone(),
        font_size: style.font_size,
        params,
        backgrounds,
        glyphs,
    }
}

/// Replay `plan` onto `surface`.
#[tracing::instrument(skip_all, fields(backgrounds = plan.backgrounds.len(), glyphs = plan.glyphs.len()))]
pub fn execute_frame<S: RenderSurface + ?Sized>(
    surface: &mut S,
    plan: &FramePlan,
) -> TagTextResult<()> {
    surface.set_font(plan.font.as_ref(), plan.font_size)?;
    for bg in &plan.backgrounds {
        surface.draw_background(bg)?;
    }
    for glyph in &plan.glyphs {
        surface.draw_glyph(glyph)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;
