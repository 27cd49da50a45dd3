//! Deck and slide builders
//!
//! [`DeckBuilder`] walks the slides of a [`DeckSpec`](crate::spec::DeckSpec),
//! delegating each one to a [`SlideBuilder`], and collects everything that
//! had to be left out into a [`BuildReport`].

mod deck;
mod report;
mod slide;

pub use deck::{BuildOptions, BuildState, DeckBuilder};
pub use report::{BuildReport, Skipped};
pub use slide::{resolve_template_layout, SlideBuilder, DEFAULT_TEMPLATE_LAYOUT};
