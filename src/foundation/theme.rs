use crate::foundation::core::Argb;

/// Opaque font reference handed through to the rendering surface.
///
/// The layout core never looks inside it; a surface decides what the name
/// means (family name, file path, registry key...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct FontHandle(pub String);

impl FontHandle {
    /// Build a handle from any string-like name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The raw name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Construction-time display settings for a text block.
///
/// Layout-affecting fields (`font`, `line_margin`, `text_color`) only apply
/// when a block lays its text out; changing them on a live block needs a
/// relayout to take effect.
pub struct Theme {
    /// Base text color, the bottom of the color scope stack.
    pub text_color: Argb,
    /// Font to draw with; `None` uses the surface default.
    pub font: Option<FontHandle>,
    /// Diagonal offset of the drop shadow in pixels. `0` disables the shadow.
    pub drop_shadow_offset: i32,
    /// Drop shadow opacity in `[0, 1]`.
    pub shadow_opacity: f32,
    /// Margin left around a glyph when painting its background.
    pub background_margin: i32,
    /// Corner radius of glyph backgrounds.
    pub corner_radius: i32,
    /// Gap between the bottom of one line and the top of the next.
    pub line_margin: i32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_color: Argb::BLACK,
            font: None,
            drop_shadow_offset: 2,
            shadow_opacity: 0.5,
            background_margin: 4,
            corner_radius: 4,
            line_margin: 4,
        }
    }
}

impl Theme {
    /// Shadow color derived from [`Theme::shadow_opacity`].
    pub fn shadow_color(&self) -> Argb {
        let a = (255.0 * self.shadow_opacity.clamp(0.0, 1.0)).round() as u8;
        Argb::BLACK.with_alpha(a)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/theme.rs"]
mod tests;
