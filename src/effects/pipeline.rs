use crate::{
    effects::registry::EffectRegistry, foundation::core::Argb, layout::cell::CharCell,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Per-frame draw parameters of one cell, mutated in place by its effects.
pub struct EffectParams {
    /// Text color.
    pub color: Argb,
    /// Background color, `None` for no background.
    pub background: Option<Argb>,
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Rotation about the cell center, in radians.
    pub rotation: f32,
    /// Animation clock in milliseconds. Effects read it but should not change it.
    pub time: u64,
}

impl EffectParams {
    /// Parameters equal to the cell's base values, with no rotation.
    pub fn from_cell(cell: &CharCell, time: u64) -> Self {
        Self {
            color: cell.color,
            background: cell.background,
            x: cell.x,
            y: cell.y,
            rotation: 0.0,
            time,
        }
    }
}

/// Evaluate every effect on `cell`, in its stored (outer to inner) order.
///
/// Names that are not registered are skipped. The cell is never modified.
pub fn apply_effects(cell: &CharCell, registry: &EffectRegistry, time: u64) -> EffectParams {
    let mut params = EffectParams::from_cell(cell, time);
    for name in &cell.effects {
        match registry.get(name) {
            Some(effect) => effect(cell, &mut params),
            None => tracing::trace!(effect = name.as_str(), "skipping unregistered effect"),
        }
    }
    params
}

impl EffectRegistry {
    /// Shorthand for [`apply_effects`] against this registry.
    pub fn evaluate(&self, cell: &CharCell, time: u64) -> EffectParams {
        apply_effects(cell, self, time)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/pipeline.rs"]
mod tests;
