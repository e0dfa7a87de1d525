use std::fmt::Display;

use crate::markup::directive::{BACKGROUND, COLOUR, EFFECT, END_BACKGROUND, END_COLOUR, END_EFFECT};

/// Wrap `text` in a color scope. `color` is written verbatim, so an
/// [`Argb`](crate::Argb), a raw integer, or a literal such as `"#FF0000"` all work.
pub fn with_color(text: &str, color: impl Display) -> String {
    format!("[{COLOUR}={color}]{text}[{END_COLOUR}]")
}

/// Wrap `text` in a background scope.
pub fn with_background(text: &str, color: impl Display) -> String {
    format!("[{BACKGROUND}={color}]{text}[{END_BACKGROUND}]")
}

/// Wrap `text` in an effect scope.
pub fn with_effect(text: &str, effect: &str) -> String {
    format!("[{EFFECT}={effect}]{text}[{END_EFFECT}]")
}

#[cfg(test)]
#[path = "../../tests/unit/markup/tags.rs"]
mod tests;
