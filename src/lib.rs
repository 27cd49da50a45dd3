//! Deck Layout - Builds slide decks from declarative deck and layout files
//!
//! A deck file lists slides; each slide names a layout file describing where
//! its content goes, and the content itself. This library cascades the
//! configuration layers, resolves colors, and binds every content entry into
//! a presentation document through the [`Presentation`] backend trait.
//!
//! # Example
//!
//! ```rust
//! use deck_layout::{build_deck, MemoryPresentation, Presentation};
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("title.yml"), "template_layout: Title Slide\n").unwrap();
//! let deck = format!(
//!     "defaults:\n  slide_layout_path: '{}'\nslides:\n  - layout: title.yml\n    content:\n      placeholder0: Quarterly Review\n",
//!     dir.path().display()
//! );
//! std::fs::write(dir.path().join("deck.yml"), deck).unwrap();
//!
//! let (pres, report) = build_deck::<MemoryPresentation>(&dir.path().join("deck.yml")).unwrap();
//! assert_eq!(report.slides_built, 1);
//! assert_eq!(pres.slide_count(), 1);
//! ```

pub mod backend;
pub mod builder;
pub mod color;
pub mod config;
pub mod error;
pub mod shape;
pub mod spec;

use std::path::Path;

use thiserror::Error;

pub use backend::{BackendError, MemoryPresentation, Presentation};
pub use builder::{BuildOptions, BuildReport, BuildState, DeckBuilder, SlideBuilder, Skipped};
pub use color::{ColorError, Rgb};
pub use config::{Defaults, ShapeConfig, ShapePresets};
pub use error::SpecError;
pub use shape::{ShapeError, ShapeKind};
pub use spec::{ContentValue, DeckSpec, LayoutSpec, Value};

/// Errors that abort a deck build
#[derive(Debug, Error)]
pub enum DeckError {
    /// A deck or layout file could not be read or parsed
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// The template could not be opened or the output not written
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Slides were added or saved before any document was opened
    #[error("no presentation document is open")]
    NoDocument,
}

/// Build the deck at `deck_path` with default options
///
/// Returns the finished document together with the report of skipped slides
/// and entries.
pub fn build_deck<P: Presentation>(deck_path: &Path) -> Result<(P, BuildReport), DeckError> {
    build_deck_with_options(deck_path, BuildOptions::default())
}

/// Build the deck at `deck_path` with custom options
pub fn build_deck_with_options<P: Presentation>(
    deck_path: &Path,
    options: BuildOptions,
) -> Result<(P, BuildReport), DeckError> {
    let mut builder = DeckBuilder::<P>::idle().with_options(options);
    let report = builder.build_from_file(deck_path)?.clone();
    let presentation = builder.into_presentation().ok_or(DeckError::NoDocument)?;
    Ok((presentation, report))
}

/// Build the deck at `deck_path` and save the result to `output`
///
/// Missing parent directories of `output` are created.
pub fn build_deck_to_file<P: Presentation>(
    deck_path: &Path,
    output: &Path,
    options: BuildOptions,
) -> Result<BuildReport, DeckError> {
    let mut builder = DeckBuilder::<P>::idle().with_options(options);
    builder.build_from_file(deck_path)?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    builder.save(output)?;
    Ok(builder.report().clone())
}
