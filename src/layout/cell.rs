use crate::foundation::core::Argb;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One laid-out character with its resolved base style and position.
///
/// Cells are handed out by shared reference only; the layout engine is the
/// sole writer and only moves cells while reflowing a wrapped word.
pub struct CharCell {
    /// The literal character.
    pub glyph: char,
    /// Text color active when the cell was emitted.
    pub color: Argb,
    /// Background color active when the cell was emitted, if any.
    pub background: Option<Argb>,
    /// 0-based position among all emitted cells. Animation phase is keyed on it.
    pub index: usize,
    /// Left edge relative to the block origin.
    pub x: f32,
    /// Top edge relative to the block origin. Shared by every cell on a line.
    pub y: f32,
    /// Measured advance width.
    pub width: u32,
    /// Text box height (ascent + descent).
    pub height: u32,
    /// 0-based line number.
    pub line: usize,
    /// Effect scopes active at emission, outermost first.
    pub effects: Vec<String>,
}

impl CharCell {
    /// Horizontal end of the cell box.
    pub fn right(&self) -> f32 {
        self.x + self.width as f32
    }

    /// Whether any effect scope was active at emission.
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}
