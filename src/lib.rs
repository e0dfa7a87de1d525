//! tagtext turns strings with inline bracket tags into positioned, styled
//! character cells, and animates those cells with per-character effects.
//!
//! # Pipeline overview
//!
//! 1. **Tokenize**: split markup into literal runs and `[KEY=value]` directives.
//! 2. **Lay out**: resolve nested color/background/effect scopes and greedily
//!    word-wrap into [`CharCell`]s plus per-line widths ([`TextLayout`]).
//! 3. **Animate**: every frame, run each cell's effects from the
//!    [`EffectRegistry`] to get its [`EffectParams`].
//! 4. **Draw**: turn params into a [`FramePlan`] and replay it on a
//!    [`RenderSurface`].
//!
//! Markup is never an error: malformed colors fall back to the scope default,
//! unknown tags are ignored, unbalanced end tags are absorbed and unknown effect
//! names are skipped when animating.
//!
//! # Markup
//!
//! - `[COLOUR=v]...[END_COLOUR]` with `v` decimal, `0x` hex or `#` hex
//! - `[BACKGROUND=v]...[END_BACKGROUND]`
//! - `[EFFECT=NAME]...[END_EFFECT]`, built-ins `WAVE`, `BOUNCE`, `JIGGLE`
//!
//! ```
//! use std::sync::Arc;
//! use tagtext::{Argb, BlockConfig, MonospaceMeasure, TextBlock};
//!
//! let block = TextBlock::new(
//!     Arc::new(MonospaceMeasure::default()),
//!     "[COLOUR=#FF0000]red[END_COLOUR] plain",
//!     BlockConfig::with_text_size(20.0),
//! )
//! .unwrap();
//! assert_eq!(block.plain_text(), "red plain");
//! assert_eq!(block.cells()[0].color, Argb(0xFF0000));
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod effects;
mod foundation;
mod layout;
mod markup;
mod render;

pub use block::config::BlockConfig;
pub use block::text_block::{ANIM_OFFSET_RANGE_MS, TextBlock};
pub use effects::pipeline::{EffectParams, apply_effects};
pub use effects::registry::{
    BOUNCE, EffectFn, EffectRegistry, JIGGLE, JIGGLE_AMPLITUDE, JIGGLE_PERIOD_MS, WAVE,
    WAVE_PERIOD_MS, bounce, jiggle, wave,
};
pub use foundation::core::{Affine, Argb, Point, Rect, RoundedRect, Vec2};
pub use foundation::error::{TagTextError, TagTextResult};
pub use foundation::theme::{FontHandle, Theme};
pub use layout::cell::CharCell;
pub use layout::engine::{LayoutEngine, LayoutParams, TextLayout, layout_markup};
pub use layout::measure::{MonospaceMeasure, TextMeasure, VerticalMetrics};
pub use markup::color::{parse_color, try_parse_color};
pub use markup::directive::{Directive, ScopeStacks};
pub use markup::tags::{with_background, with_color, with_effect};
pub use markup::token::{Token, Tokens, tokenize};
pub use render::plan::{Align, FramePlan, GlyphStyle, HAlign, VAlign, execute_frame, plan_frame};
pub use render::surface::{
    BackgroundDraw, Clock, FixedClock, GlyphDraw, RenderSurface, SystemClock,
};
