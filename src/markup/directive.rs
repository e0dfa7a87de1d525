use crate::{
    foundation::core::Argb,
    markup::color::{parse_color, try_parse_color},
};

/// Opening keyword for a text color scope.
pub const COLOUR: &str = "COLOUR";
/// Closing keyword for a text color scope.
pub const END_COLOUR: &str = "END_COLOUR";
/// Opening keyword for a background scope.
pub const BACKGROUND: &str = "BACKGROUND";
/// Closing keyword for a background scope.
pub const END_BACKGROUND: &str = "END_BACKGROUND";
/// Opening keyword for an effect scope.
pub const EFFECT: &str = "EFFECT";
/// Closing keyword for an effect scope.
pub const END_EFFECT: &str = "END_EFFECT";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A recognised bracket directive. Values are kept as raw text.
pub enum Directive<'a> {
    /// `[COLOUR=v]`
    PushColor(&'a str),
    /// `[BACKGROUND=v]`
    PushBackground(&'a str),
    /// `[EFFECT=name]`
    PushEffect(&'a str),
    /// `[END_COLOUR]`
    PopColor,
    /// `[END_BACKGROUND]`
    PopBackground,
    /// `[END_EFFECT]`
    PopEffect,
}

impl<'a> Directive<'a> {
    /// Classify the inside of a bracket pair; `None` for anything unrecognised.
    ///
    /// The body is split on every `=` with trailing empty parts dropped, so
    /// `COLOUR=` reads as a bare (unknown) keyword and `COLOUR=a=b` is ignored.
    pub fn parse(body: &'a str) -> Option<Self> {
        let mut parts: Vec<&str> = body.split('=').collect();
        while parts.len() > 1 && parts.last().is_some_and(|p| p.is_empty()) {
            parts.pop();
        }

        match parts.as_slice() {
            [key] => match *key {
                END_COLOUR => Some(Self::PopColor),
                END_BACKGROUND => Some(Self::PopBackground),
                END_EFFECT => Some(Self::PopEffect),
                _ => None,
            },
            [key, value] => match *key {
                COLOUR => Some(Self::PushColor(value)),
                BACKGROUND => Some(Self::PushBackground(value)),
                EFFECT => Some(Self::PushEffect(value)),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Active style scopes while scanning markup.
///
/// The color and background stacks always keep their bottom entry (the theme
/// color and "no background"); the effect stack may be empty. Popping at the
/// floor does nothing.
#[derive(Clone, Debug)]
pub struct ScopeStacks {
    default_color: Argb,
    colors: Vec<Argb>,
    backgrounds: Vec<Option<Argb>>,
    effects: Vec<String>,
}

impl ScopeStacks {
    /// Fresh stacks seeded with the theme's base text color.
    pub fn new(default_color: Argb) -> Self {
        Self {
            default_color,
            colors: vec![default_color],
            backgrounds: vec![None],
            effects: Vec::new(),
        }
    }

    /// Apply one directive.
    pub fn apply(&mut self, directive: Directive<'_>) {
        match directive {
            Directive::PushColor(v) => self.colors.push(parse_color(v, self.default_color)),
            Directive::PushBackground(v) => self.backgrounds.push(try_parse_color(v)),
            Directive::PushEffect(name) => self.effects.push(name.to_string()),
            Directive::PopColor => {
                if self.colors.len() > 1 {
                    self.colors.pop();
                }
            }
            Directive::PopBackground => {
                if self.backgrounds.len() > 1 {
                    self.backgrounds.pop();
                }
            }
            Directive::PopEffect => {
                self.effects.pop();
            }
        }
    }

    /// Current text color.
    pub fn color(&self) -> Argb {
        self.colors.last().copied().unwrap_or(self.default_color)
    }

    /// Current background, `None` when no background is active.
    pub fn background(&self) -> Option<Argb> {
        self.backgrounds.last().copied().flatten()
    }

    /// Active effect names, outermost first.
    pub fn effects(&self) -> &[String] {
        &self.effects
    }
}

#[cfg(test)]
#[path = "../../tests/unit/markup/directive.rs"]
mod tests;
