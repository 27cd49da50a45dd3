//! Named color schemes declared by layout specifications

use indexmap::IndexMap;
use serde::Deserialize;

use super::{resolve, ColorError, Rgb};
use crate::spec::Value;

/// Key prefix marking the header fill of a table scheme
const HEADER_ROLE: &str = "header";
/// Key prefix marking a banding fill of a table scheme
const ROW_ROLE: &str = "row";

/// An ordered list of single-key color mappings
///
/// ```yaml
/// brand:
///   - header: "#1F3864"
///   - row_light: "#FFFFFF"
///   - row_dark: "220, 230, 241"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ColorScheme {
    entries: Vec<IndexMap<String, Value>>,
}

impl ColorScheme {
    /// Create a scheme from `(key, expression)` pairs, one mapping each
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| {
                    let mut entry = IndexMap::new();
                    entry.insert(k.into(), v.into());
                    entry
                })
                .collect(),
        }
    }

    /// First expression stored under `key`
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find_map(|entry| entry.get(key))
    }

    /// All `(key, expression)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .flat_map(|entry| entry.iter().map(|(k, v)| (k.as_str(), v)))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|entry| entry.is_empty())
    }
}

/// All color schemes visible while building one slide
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ColorSchemes {
    schemes: IndexMap<String, ColorScheme>,
}

impl ColorSchemes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a scheme
    pub fn with_scheme(mut self, name: impl Into<String>, scheme: ColorScheme) -> Self {
        self.schemes.insert(name.into(), scheme);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ColorScheme> {
        self.schemes.get(name)
    }

    /// Look up `key` within scheme `name`
    pub fn lookup(&self, name: &str, key: &str) -> Option<&Value> {
        self.get(name).and_then(|scheme| scheme.lookup(key))
    }

    /// Classify the scheme `name` into table fill roles
    ///
    /// Keys starting with `header` set the header fill (the last one wins);
    /// keys starting with `row` append a banding fill. An unknown scheme
    /// yields no fills.
    pub fn table_roles(&self, name: &str) -> Result<TableRoles, ColorError> {
        let mut roles = TableRoles::default();
        let Some(scheme) = self.get(name) else {
            log::warn!("table color scheme '{}' is not defined", name);
            return Ok(roles);
        };

        for (key, expr) in scheme.iter() {
            if key.starts_with(HEADER_ROLE) {
                roles.header = Some(resolve(expr, self)?);
            } else if key.starts_with(ROW_ROLE) {
                roles.banding.push(resolve(expr, self)?);
            }
        }
        Ok(roles)
    }
}

/// Fill colors of a banded table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRoles {
    /// Fill for row 0
    pub header: Option<Rgb>,
    /// Fills cycled over the data rows
    pub banding: Vec<Rgb>,
}

impl TableRoles {
    /// Fill for table row `row` (0 is the header)
    pub fn fill_for_row(&self, row: usize) -> Option<Rgb> {
        if row == 0 {
            self.header
        } else if self.banding.is_empty() {
            None
        } else {
            Some(self.banding[(row - 1) % self.banding.len()])
        }
    }
}
