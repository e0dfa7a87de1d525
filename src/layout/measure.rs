/// Vertical font metrics in pixels at a given font size.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VerticalMetrics {
    /// Distance from the top of the text box to the baseline.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the text box.
    pub descent: f32,
}

/// Glyph measurement provided by whatever will eventually draw the text.
///
/// Layout only ever asks for single characters; the model is one visual cell
/// per `char`.
pub trait TextMeasure {
    /// Advance width of `ch` at `font_size`, in pixels.
    fn measure_width(&self, ch: char, font_size: f32) -> f32;

    /// Ascent and descent at `font_size`, in pixels.
    fn vertical_metrics(&self, font_size: f32) -> VerticalMetrics;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn measure_width(&self, ch: char, font_size: f32) -> f32 {
        (**self).measure_width(ch, font_size)
    }

    fn vertical_metrics(&self, font_size: f32) -> VerticalMetrics {
        (**self).vertical_metrics(font_size)
    }
}

/// Fixed-advance measurer expressed in ems (fractions of the font size).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MonospaceMeasure {
    /// Advance of every character, in ems.
    pub advance_em: f32,
    /// Ascent in ems.
    pub ascent_em: f32,
    /// Descent in ems.
    pub descent_em: f32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self {
            advance_em: 0.6,
            ascent_em: 0.8,
            descent_em: 0.2,
        }
    }
}

impl MonospaceMeasure {
    /// Measurer whose glyphs are `advance_px` wide at `font_size`, with the given
    /// pixel ascent and descent at that size.
    pub fn at_size(font_size: f32, advance_px: f32, ascent_px: f32, descent_px: f32) -> Self {
        Self {
            advance_em: advance_px / font_size,
            ascent_em: ascent_px / font_size,
            descent_em: descent_px / font_size,
        }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure_width(&self, _ch: char, font_size: f32) -> f32 {
        self.advance_em * font_size
    }

    fn vertical_metrics(&self, font_size: f32) -> VerticalMetrics {
        VerticalMetrics {
            ascent: self.ascent_em * font_size,
            descent: self.descent_em * font_size,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/measure.rs"]
mod tests;
