use std::{collections::HashMap, sync::Arc};

use crate::{effects::pipeline::EffectParams, layout::cell::CharCell};

/// Name of the built-in vertical sine wave.
pub const WAVE: &str = "WAVE";
/// Name of the built-in half-wave hop.
pub const BOUNCE: &str = "BOUNCE";
/// Name of the built-in rotational wobble.
pub const JIGGLE: &str = "JIGGLE";

/// Phase divisor (ms) of [`WAVE`] and [`BOUNCE`].
pub const WAVE_PERIOD_MS: f32 = 500.0;
/// Phase divisor (ms) of [`JIGGLE`].
pub const JIGGLE_PERIOD_MS: f32 = 97.0;
/// Peak rotation of [`JIGGLE`], in radians.
pub const JIGGLE_AMPLITUDE: f32 = 0.4;

/// A per-character effect: reads the cell, mutates the frame parameters.
pub type EffectFn = Arc<dyn Fn(&CharCell, &mut EffectParams) + Send + Sync>;

/// Name to effect lookup consulted when cells are animated.
///
/// Build it once during setup (built-ins plus any custom effects), then share
/// it read-only with everything that draws. Registering an existing name
/// replaces the previous effect.
#[derive(Clone)]
pub struct EffectRegistry {
    effects: HashMap<String, EffectFn>,
}

impl std::fmt::Debug for EffectRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectRegistry")
            .field("effects", &self.names())
            .finish()
    }
}

impl Default for EffectRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl EffectRegistry {
    /// A registry with no effects at all.
    pub fn empty() -> Self {
        Self {
            effects: HashMap::new(),
        }
    }

    /// A registry seeded with [`WAVE`], [`BOUNCE`] and [`JIGGLE`].
    pub fn with_builtins() -> Self {
        let mut r = Self::empty();
        r.register(WAVE, wave);
        r.register(BOUNCE, bounce);
        r.register(JIGGLE, jiggle);
        r
    }

    /// Register `effect` under `name`; returns `true` when an earlier effect was replaced.
    pub fn register<F>(&mut self, name: impl Into<String>, effect: F) -> bool
    where
        F: Fn(&CharCell, &mut EffectParams) + Send + Sync + 'static,
    {
        self.effects
            .insert(name.into(), Arc::new(effect))
            .is_some()
    }

    /// Look up an effect by its exact (case-sensitive) name.
    pub fn get(&self, name: &str) -> Option<&EffectFn> {
        self.effects.get(name)
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.effects.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.effects.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered effects.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Whether no effects are registered.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

fn wave_phase(cell: &CharCell, params: &EffectParams) -> f32 {
    (cell.index as f32 - params.time as f32 / WAVE_PERIOD_MS).sin()
}

/// Vertical sine wave travelling along the text.
pub fn wave(cell: &CharCell, params: &mut EffectParams) {
    params.y -= wave_phase(cell, params) * cell.height as f32 / 4.0;
}

/// Like [`wave`] but only ever lifts the glyph.
pub fn bounce(cell: &CharCell, params: &mut EffectParams) {
    params.y -= wave_phase(cell, params).max(0.0) * cell.height as f32 / 4.0;
}

/// Rotational wobble.
pub fn jiggle(cell: &CharCell, params: &mut EffectParams) {
    let phase = (cell.index as f32 - params.time as f32 / JIGGLE_PERIOD_MS).sin();
    params.rotation += phase * JIGGLE_AMPLITUDE;
}

#[cfg(test)]
#[path = "../../tests/unit/effects/registry.rs"]
mod tests;
