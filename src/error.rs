//! Error types for reading deck, layout and template files

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while reading a specification file
#[derive(Error, Debug)]
pub enum SpecError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML in '{}': {message}", path.display())]
    Yaml { path: PathBuf, message: String },

    #[error("failed to parse TOML in '{}': {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl SpecError {
    /// Create a read error for a path
    pub fn read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a YAML parse error for a path
    pub fn yaml(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Yaml {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Create a TOML parse error for a path
    pub fn toml(path: impl AsRef<Path>, source: toml::de::Error) -> Self {
        Self::Toml {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// The file the error refers to
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Yaml { path, .. } | Self::Toml { path, .. } => path,
        }
    }
}
