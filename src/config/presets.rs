//! Shape-type presets keyed by content entry name

use std::path::Path;

use indexmap::IndexMap;

use crate::error::SpecError;
use crate::spec::{self, ConfigMap, Format};

/// Preset catalog bundled with the crate
const BUNDLED_PRESETS: &str = include_str!("../../resources/shape_defaults.toml");

/// Default shape configurations looked up by content entry name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapePresets {
    presets: IndexMap<String, ConfigMap>,
}

impl ShapePresets {
    /// An empty catalog
    pub fn empty() -> Self {
        Self::default()
    }

    /// The bundled catalog; a broken resource degrades to an empty catalog
    pub fn bundled() -> Self {
        Self::from_toml_str(BUNDLED_PRESETS).unwrap_or_else(|e| {
            log::warn!("could not load bundled shape presets: {}", e);
            Self::empty()
        })
    }

    /// Parse a catalog from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, SpecError> {
        let presets = spec::parse_str(content, Format::Toml, Path::new("shape_defaults.toml"))?;
        Ok(Self { presets })
    }

    /// Load a catalog file (YAML, or TOML by extension)
    pub fn from_file(path: &Path) -> Result<Self, SpecError> {
        let presets = spec::load(path)?;
        Ok(Self { presets })
    }

    /// Preset for a content entry name
    pub fn get(&self, name: &str) -> Option<&ConfigMap> {
        self.presets.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
