//! Deck and layout specification documents

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Deserialize;

use super::value::{ConfigMap, Value};
use crate::color::ColorSchemes;

/// Top-level deck description
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeckSpec {
    /// Template document to open before building
    #[serde(default)]
    pub template: Option<PathBuf>,
    /// Deck-wide defaults, layered over the built-in fallbacks
    #[serde(default)]
    pub defaults: ConfigMap,
    /// Slides in presentation order
    #[serde(default)]
    pub slides: Vec<SlideEntry>,
}

/// One slide of a deck: a layout file plus the content bound into it
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlideEntry {
    /// Layout specification file, relative to `slide_layout_path`
    #[serde(default)]
    pub layout: Option<String>,
    /// Content entries in declaration order
    #[serde(default)]
    pub content: IndexMap<String, Value>,
}

/// Per-slide layout description
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LayoutSpec {
    /// Template layout by index or by name
    #[serde(default)]
    pub template_layout: Option<LayoutRef>,
    /// Defaults layered over the deck defaults for this slide only
    #[serde(default)]
    pub defaults: ConfigMap,
    /// Named color schemes visible to this slide
    #[serde(default)]
    pub color_schemes: ColorSchemes,
    /// Per-shape overrides keyed by content entry name
    #[serde(default)]
    pub shapes: IndexMap<String, ConfigMap>,
}

/// Reference to a layout of the template document
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LayoutRef {
    Index(i64),
    Name(String),
}
