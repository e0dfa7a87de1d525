use crate::{
    foundation::core::Argb,
    layout::{cell::CharCell, measure::TextMeasure},
    markup::{
        directive::{Directive, ScopeStacks},
        token::{Token, tokenize},
    },
};

#[derive(Clone, Debug, PartialEq)]
/// Inputs that shape a layout pass.
pub struct LayoutParams {
    /// Wrap width in pixels; `None` disables wrapping.
    pub wrap_width: Option<f32>,
    /// Font size handed to the measurer.
    pub font_size: f32,
    /// Height of one text box (ascent + descent).
    pub text_height: u32,
    /// Gap between consecutive lines.
    pub line_margin: i32,
    /// Base text color.
    pub default_color: Argb,
}

impl LayoutParams {
    /// Vertical distance between the tops of consecutive lines.
    pub fn line_pitch(&self) -> f32 {
        self.text_height as f32 + self.line_margin as f32
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Result of laying out one markup string.
pub struct TextLayout {
    /// Emitted cells in emission order.
    pub cells: Vec<CharCell>,
    /// Width of every line, including empty ones and the last one.
    pub line_widths: Vec<f32>,
    /// Widest line.
    pub width: f32,
    /// Top of the last line plus one line pitch.
    pub height: f32,
}

impl TextLayout {
    /// Number of lines (always at least one).
    pub fn line_count(&self) -> usize {
        self.line_widths.len()
    }

    /// Width of line `line`, or `0.0` past the end.
    pub fn line_width(&self, line: usize) -> f32 {
        self.line_widths.get(line).copied().unwrap_or(0.0)
    }
}

/// Greedy word-wrapping layout over tokenized markup.
pub struct LayoutEngine<'m> {
    measure: &'m dyn TextMeasure,
    params: LayoutParams,
}

impl std::fmt::Debug for LayoutEngine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutEngine")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
struct Pen {
    x: f32,
    y: f32,
    line: usize,
    line_start: usize,
    last_space: Option<usize>,
}

struct Pass {
    cells: Vec<CharCell>,
    line_widths: Vec<f32>,
    pen: Pen,
    pitch: f32,
}

impl Pass {
    fn break_line(&mut self, closed_width: f32) {
        self.line_widths.push(closed_width);
        self.pen.x = 0.0;
        self.pen.y += self.pitch;
        self.pen.line += 1;
        self.pen.line_start = self.cells.len();
    }

    /// Move everything after the space at `space` onto a fresh line.
    fn reflow_after(&mut self, space: usize) {
        let off_x = self.cells[space].right();
        let pen_x = self.pen.x;

        self.break_line(off_x);
        self.pen.line_start = space + 1;
        for cell in &mut self.cells[space + 1..] {
            cell.x -= off_x;
            cell.y = self.pen.y;
            cell.line = self.pen.line;
        }
        self.pen.x = pen_x - off_x;
    }
}

impl<'m> LayoutEngine<'m> {
    /// Engine measuring glyphs with `measure`.
    pub fn new(measure: &'m dyn TextMeasure, params: LayoutParams) -> Self {
        Self { measure, params }
    }

    /// Parameters this engine lays out with.
    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Lay out `text`. Never fails: unknown or malformed markup is skipped.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn layout(&self, text: &str) -> TextLayout {
        let mut pass = Pass {
            cells: Vec::with_capacity(text.len()),
            line_widths: Vec::new(),
            pen: Pen::default(),
            pitch: self.params.line_pitch(),
        };
        let mut scopes = ScopeStacks::new(self.params.default_color);

        for token in tokenize(text) {
            match token {
                Token::Directive(body) => match Directive::parse(body) {
                    Some(d) => scopes.apply(d),
                    None => tracing::trace!(directive = body, "ignoring unrecognised directive"),
                },
                Token::Literal(run) => self.place_run(&mut pass, &scopes, run),
            }
        }

        let last = pass.pen.x;
        pass.line_widths.push(last);

        let width = pass.line_widths.iter().copied().fold(0.0f32, f32::max);
        let height = pass.pen.y + pass.pitch;
        tracing::debug!(
            cells = pass.cells.len(),
            lines = pass.line_widths.len(),
            width,
            height,
            "laid out markup"
        );

        TextLayout {
            cells: pass.cells,
            line_widths: pass.line_widths,
            width,
            height,
        }
    }

    fn place_run(&self, pass: &mut Pass, scopes: &ScopeStacks, run: &str) {
        for ch in run.chars() {
            if ch == '\n' {
                let closed = pass.pen.x;
                pass.break_line(closed);
                continue;
            }

            let index = pass.cells.len();
            if ch == ' ' {
                pass.pen.last_space = Some(index);
            }

            let width = self.measure.measure_width(ch, self.params.font_size) as u32;
            let advance = width as f32;
            pass.cells.push(CharCell {
                glyph: ch,
                color: scopes.color(),
                background: scopes.background(),
                index,
                x: pass.pen.x,
                y: pass.pen.y,
                width,
                height: self.params.text_height,
                line: pass.pen.line,
                effects: scopes.effects().to_vec(),
            });

            if let Some(wrap) = self.params.wrap_width
                && pass.pen.x + advance >= wrap
            {
                let line_start = pass.pen.line_start;
                match pass.pen.last_space.filter(|&s| s >= line_start && s < index) {
                    Some(space) => pass.reflow_after(space),
                    None => {
                        // No earlier space on this line. The cell stays where it
                        // is and the new line starts one advance in.
                        let closed = pass.pen.x;
                        pass.break_line(closed);
                    }
                }
            }

            pass.pen.x += advance;
        }
    }
}

/// Lay out `text` in one call.
pub fn layout_markup(text: &str, measure: &dyn TextMeasure, params: LayoutParams) -> TextLayout {
    LayoutEngine::new(measure, params).layout(text)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
