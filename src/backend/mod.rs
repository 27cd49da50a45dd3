//! Presentation document backends
//!
//! The engine computes what to draw; a [`Presentation`] implementation
//! applies it to a concrete document. The crate ships
//! [`MemoryPresentation`], an in-memory document that loads its layouts from
//! a template description and saves a YAML outline.

pub mod memory;
pub mod model;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::SpecError;

pub use memory::MemoryPresentation;
pub use model::{
    Geometry, HorizontalAlign, Paragraph, PicturePlan, RunStyle, TableCell, TablePlan, TextFrame,
    VerticalAnchor,
};

/// Errors raised by a presentation backend
#[derive(Debug, Error)]
pub enum BackendError {
    /// The template document could not be read or parsed
    #[error("cannot load template: {0}")]
    Template(#[from] SpecError),

    /// Layout index outside the template's layout list
    #[error("slide layout {index} does not exist (template has {available})")]
    NoSuchLayout { index: usize, available: usize },

    /// Slide handle that does not belong to this document
    #[error("slide {0} does not exist")]
    NoSuchSlide(usize),

    /// Placeholder index outside the slide's placeholder list
    #[error("slide {slide} has no placeholder {index} ({available} available)")]
    NoSuchPlaceholder {
        slide: usize,
        index: usize,
        available: usize,
    },

    /// Writing the output document failed
    #[error("cannot save '{}': {message}", path.display())]
    Save { path: PathBuf, message: String },
}

/// Handle to a slide added to a presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideId(pub usize);

/// A placeholder region declared by a slide layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderInfo {
    /// Placeholder type, e.g. `title`, `body`, `pic`
    pub kind: String,
    #[serde(default)]
    pub name: String,
}

/// A slide layout of the template document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideLayout {
    pub name: String,
    #[serde(default)]
    pub placeholders: Vec<PlaceholderInfo>,
}

/// Operations the deck builder needs from a presentation document
pub trait Presentation {
    /// Open a document from a template file
    fn open(template: &Path) -> Result<Self, BackendError>
    where
        Self: Sized;

    /// A document based on the backend's built-in template
    fn blank() -> Self
    where
        Self: Sized;

    /// Layouts available for new slides, in template order
    fn layouts(&self) -> &[SlideLayout];

    fn slide_count(&self) -> usize;

    /// Remove every slide, keeping the layouts
    fn clear_slides(&mut self);

    /// Append a slide based on layout `layout`
    fn add_slide(&mut self, layout: usize) -> Result<SlideId, BackendError>;

    /// Number of placeholders on a slide
    fn placeholder_count(&self, slide: SlideId) -> Result<usize, BackendError>;

    /// Replace the text of placeholder `index` on a slide
    fn fill_placeholder(
        &mut self,
        slide: SlideId,
        index: usize,
        frame: TextFrame,
    ) -> Result<(), BackendError>;

    fn add_text_box(
        &mut self,
        slide: SlideId,
        geometry: Geometry,
        frame: TextFrame,
    ) -> Result<(), BackendError>;

    fn add_table(&mut self, slide: SlideId, table: TablePlan) -> Result<(), BackendError>;

    fn add_picture(&mut self, slide: SlideId, picture: PicturePlan) -> Result<(), BackendError>;

    /// Write the document to `path`
    fn save(&self, path: &Path) -> Result<(), BackendError>;
}
