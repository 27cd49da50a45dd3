//! Configuration cascade
//!
//! Shape options are resolved from five layers, lowest precedence first:
//!
//! 1. built-in fallbacks ([`Defaults::builtin`])
//! 2. deck `defaults`
//! 3. layout `defaults`
//! 4. shape-type preset ([`ShapePresets`])
//! 5. per-shape override from the layout's `shapes` section
//!
//! Layers 1-3 form the slide's [`Defaults`]; layers 4-5 form the entry's
//! [`ShapeConfig`]. Keeping them apart lets handlers tell an explicitly set
//! option from an inherited one.

mod cascade;
mod options;
mod presets;

pub use cascade::merge;
pub use options::{
    Defaults, Options, ShapeConfig, FALLBACK_FONT, FALLBACK_FONT_SIZE, FALLBACK_LEFT, FALLBACK_TOP,
};
pub use presets::ShapePresets;
