//! Shape dispatch: routing a content entry to the handler for its kind
//!
//! Each content entry is classified once into a [`ShapeKind`] carrying the
//! typed options of its handler, then [`dispatch`]ed against a slide.

pub mod image;
pub mod placeholder;
pub mod table;
pub mod text;

use std::path::PathBuf;

use thiserror::Error;

use crate::backend::{BackendError, Presentation, RunStyle, SlideId};
use crate::color::{resolve, ColorError, ColorSchemes};
use crate::config::{Defaults, Options, ShapeConfig};
use crate::spec::{ContentValue, Value};

pub use image::ImageShape;
pub use placeholder::{PlaceholderShape, PLACEHOLDER_PREFIX};
pub use table::TableShape;
pub use text::TextShape;

/// Errors that cause a single content entry to be skipped
#[derive(Debug, Error)]
pub enum ShapeError {
    /// The digits after the placeholder prefix are missing or malformed
    #[error("'{name}' does not name a placeholder index")]
    PlaceholderName { name: String },

    /// The placeholder index is outside the slide's placeholders
    #[error("could not find placeholder '{name}': slide has {available} placeholders")]
    PlaceholderMissing {
        name: String,
        index: usize,
        available: usize,
    },

    /// The image file does not exist
    #[error("missing image at path: {}", path.display())]
    ImageMissing { path: PathBuf },

    /// The content value has the wrong shape for the handler
    #[error("'{name}' expects {expected} content, got {found}")]
    UnsupportedContent {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A table without rows or columns
    #[error("table '{name}' has no cells")]
    EmptyTable { name: String },

    /// A color expression references itself
    #[error(transparent)]
    Color(#[from] ColorError),

    /// The backend rejected the shape
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl ShapeError {
    /// Create an unsupported content error
    pub fn unsupported(name: impl Into<String>, expected: &'static str, content: &ContentValue) -> Self {
        Self::UnsupportedContent {
            name: name.into(),
            expected,
            found: content.kind(),
        }
    }
}

/// A content entry classified by the shape it produces
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Text(TextShape),
    Table(TableShape),
    Image(ImageShape),
    Placeholder(PlaceholderShape),
    /// Unknown `type`; the entry produces nothing
    Ignored { kind: String },
}

impl ShapeKind {
    /// Classify an entry from its name and cascaded configuration
    ///
    /// Names starting with `placeholder` always bind to a placeholder. Other
    /// entries use the `type` option, defaulting to `text`.
    pub fn classify(name: &str, config: &ShapeConfig, defaults: &Defaults) -> Self {
        if name.starts_with(PLACEHOLDER_PREFIX) {
            return ShapeKind::Placeholder(PlaceholderShape::from_config(name, config));
        }
        match config.shape_type() {
            Some("text") => ShapeKind::Text(TextShape::from_config(config, defaults)),
            Some("table") => ShapeKind::Table(TableShape::from_config(config, defaults)),
            Some("image") => ShapeKind::Image(ImageShape::from_config(config)),
            Some(other) => ShapeKind::Ignored {
                kind: other.to_string(),
            },
            None => ShapeKind::Ignored {
                kind: config.get("type").map(Value::to_string).unwrap_or_default(),
            },
        }
    }
}

/// Run the handler selected by `kind` for one content entry
pub fn dispatch<P: Presentation + ?Sized>(
    presentation: &mut P,
    slide: SlideId,
    name: &str,
    kind: &ShapeKind,
    content: &ContentValue,
    schemes: &ColorSchemes,
) -> Result<(), ShapeError> {
    match kind {
        ShapeKind::Text(shape) => text::add_text_box(presentation, slide, shape, content, schemes),
        ShapeKind::Table(shape) => table::add_table(presentation, slide, name, shape, content, schemes),
        ShapeKind::Image(shape) => image::add_picture(presentation, slide, name, shape, content),
        ShapeKind::Placeholder(shape) => {
            placeholder::fill_placeholder(presentation, slide, shape, content, schemes)
        }
        ShapeKind::Ignored { kind } => {
            log::debug!("ignoring '{}': unknown shape type '{}'", name, kind);
            Ok(())
        }
    }
}

/// Run styling as configured on a shape, before color resolution
///
/// Every field mirrors one option and stays unset when the option is
/// absent, so template-provided formatting survives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStyle {
    pub font: Option<String>,
    pub size: Option<f64>,
    /// `font_weight` equals "bold", case-insensitively
    pub bold: bool,
    pub italic: bool,
    pub color: Option<Value>,
}

impl TextStyle {
    pub fn from_config(config: &ShapeConfig) -> Self {
        Self {
            font: config.str("font").map(str::to_string),
            size: config.f64("font_size"),
            bold: config
                .str("font_weight")
                .is_some_and(|weight| weight.eq_ignore_ascii_case("bold")),
            italic: config.flag("font_italic").unwrap_or(false),
            color: config.get("font_color").cloned(),
        }
    }

    /// Resolve the font color and produce the run formatting
    pub fn resolve(&self, schemes: &ColorSchemes) -> Result<RunStyle, ColorError> {
        Ok(RunStyle {
            font: self.font.clone(),
            size: self.size,
            bold: self.bold.then_some(true),
            italic: self.italic.then_some(true),
            color: self.color.as_ref().map(|c| resolve(c, schemes)).transpose()?,
        })
    }
}
