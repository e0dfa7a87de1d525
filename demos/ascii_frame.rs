use std::sync::Arc;

use tagtext::{
    Align, BackgroundDraw, BlockConfig, EffectRegistry, FixedClock, FontHandle, GlyphDraw, HAlign,
    MonospaceMeasure, Point, RenderSurface, TagTextResult, TextBlock, Theme, VAlign, with_color,
    with_effect,
};

const COLS: usize = 48;
const ROWS: usize = 8;
const CELL: f64 = 10.0;

/// Rasterises glyph anchors onto a character grid, one grid cell per 10px.
struct AsciiSurface {
    grid: Vec<Vec<char>>,
}

impl AsciiSurface {
    fn new() -> Self {
        Self {
            grid: vec![vec![' '; COLS]; ROWS],
        }
    }

    fn put(&mut self, p: Point, ch: char) {
        let col = (p.x / CELL).floor();
        let row = (p.y / CELL).floor();
        if col < 0.0 || row < 0.0 {
            return;
        }
        if let Some(slot) = self
            .grid
            .get_mut(row as usize)
            .and_then(|r| r.get_mut(col as usize))
        {
            *slot = ch;
        }
    }
}

impl RenderSurface for AsciiSurface {
    fn set_font(&mut self, _font: Option<&FontHandle>, _font_size: f32) -> TagTextResult<()> {
        Ok(())
    }

    fn draw_background(&mut self, draw: &BackgroundDraw) -> TagTextResult<()> {
        let center = draw.transform * draw.rect.rect().center();
        self.put(center, '.');
        Ok(())
    }

    fn draw_glyph(&mut self, draw: &GlyphDraw) -> TagTextResult<()> {
        if draw.color.alpha() == 0xFF || draw.color.alpha() == 0 {
            let top = draw.transform * Point::new(draw.baseline.x, 0.0);
            self.put(top, draw.glyph);
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let text = format!(
        "{} and {}\nstill text",
        with_effect("wavy words", "WAVE"),
        with_color("red", "0xFFFF0000"),
    );
    let theme = Theme {
        drop_shadow_offset: 0,
        ..Theme::default()
    };
    let mut block = TextBlock::new(
        Arc::new(MonospaceMeasure::at_size(20.0, 10.0, 14.0, 6.0)),
        &text,
        BlockConfig::with_text_size(20.0).wrap_width(200.0).theme(theme),
    )?;
    block.set_anim_offset(0);

    let registry = EffectRegistry::with_builtins();
    for t in [0u64, 250, 500] {
        let mut surface = AsciiSurface::new();
        block.draw(
            &mut surface,
            &registry,
            &FixedClock(t),
            Point::new(CELL, 0.0),
            Align::new(HAlign::Left, VAlign::Top),
        )?;
        println!("t = {t} ms");
        for row in &surface.grid {
            println!("|{}|", row.iter().collect::<String>());
        }
    }

    Ok(())
}
