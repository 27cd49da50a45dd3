//! Reading specification files from disk

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::SpecError;

/// Serialization format of a specification file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Toml,
}

impl Format {
    /// Pick the format from a file extension; anything but `.toml` is YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Yaml,
        }
    }
}

/// Parse specification text; `origin` is only used in error messages
pub fn parse_str<T: DeserializeOwned>(
    source: &str,
    format: Format,
    origin: &Path,
) -> Result<T, SpecError> {
    match format {
        Format::Yaml => {
            serde_saphyr::from_str(source).map_err(|e| SpecError::yaml(origin, e.to_string()))
        }
        Format::Toml => toml::from_str(source).map_err(|e| SpecError::toml(origin, e)),
    }
}

/// Read and parse a specification file, choosing the format by extension
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, SpecError> {
    let content = std::fs::read_to_string(path).map_err(|e| SpecError::read(path, e))?;
    parse_str(&content, Format::from_path(path), path)
}
