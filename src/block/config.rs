use std::io::Read;

use crate::foundation::{
    error::{TagTextError, TagTextResult},
    theme::Theme,
};

fn default_text_size() -> f32 {
    16.0
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Construction-time settings of a [`TextBlock`](crate::TextBlock).
///
/// Usually built in code, but also loadable from JSON, where every field is
/// optional:
///
/// ```json
/// { "text_size": 24, "wrap_width": 320, "theme": { "text_color": 4294967295 } }
/// ```
pub struct BlockConfig {
    /// Font size used for measuring and drawing.
    #[serde(default = "default_text_size")]
    pub text_size: f32,
    /// Wrap width in pixels. `None` (or any negative value) disables wrapping.
    #[serde(default)]
    pub wrap_width: Option<f32>,
    /// Display settings.
    #[serde(default)]
    pub theme: Theme,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            text_size: default_text_size(),
            wrap_width: None,
            theme: Theme::default(),
        }
    }
}

impl BlockConfig {
    /// Config with the given text size and defaults elsewhere.
    pub fn with_text_size(text_size: f32) -> Self {
        Self {
            text_size,
            ..Self::default()
        }
    }

    /// Set the wrap width.
    pub fn wrap_width(mut self, wrap_width: f32) -> Self {
        self.wrap_width = Some(wrap_width);
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Check caller-provided values.
    pub fn validate(&self) -> TagTextResult<()> {
        if !self.text_size.is_finite() || self.text_size <= 0.0 {
            return Err(TagTextError::validation(
                "text_size must be finite and > 0",
            ));
        }
        if self.wrap_width.is_some_and(f32::is_nan) {
            return Err(TagTextError::validation("wrap_width must not be NaN"));
        }
        let opacity = self.theme.shadow_opacity;
        if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
            return Err(TagTextError::validation(
                "theme.shadow_opacity must be within [0, 1]",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> TagTextResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a JSON config from a reader.
    pub fn from_json_reader<R: Read>(reader: R) -> TagTextResult<Self> {
        let cfg: Self = serde_json::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Normalize a caller-facing wrap width: negative means unbounded.
pub(crate) fn effective_wrap_width(wrap_width: Option<f32>) -> Option<f32> {
    wrap_width.filter(|w| *w >= 0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/block/config.rs"]
mod tests;
