//! Defaults and per-shape configuration built from cascaded layers

use std::path::PathBuf;

use super::cascade::merge;
use crate::spec::{ConfigMap, Value};

/// Built-in fallback font
pub const FALLBACK_FONT: &str = "Avenir LT Next Pro";
/// Built-in fallback font size, in points
pub const FALLBACK_FONT_SIZE: f64 = 18.0;
/// Built-in fallback left offset, in inches
pub const FALLBACK_LEFT: f64 = 0.67;
/// Built-in fallback top offset, in inches
pub const FALLBACK_TOP: f64 = 0.4;

/// Typed read access shared by [`Defaults`] and [`ShapeConfig`]
///
/// A value of the wrong type is reported once at `warn` level and treated as
/// absent, so a typo in one option never aborts the slide.
pub trait Options {
    fn values(&self) -> &ConfigMap;

    fn get(&self, key: &str) -> Option<&Value> {
        self.values().get(key).filter(|v| !matches!(v, Value::Null))
    }

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn f64(&self, key: &str) -> Option<f64> {
        let value = self.get(key)?;
        let number = value.as_f64();
        if number.is_none() {
            log::warn!("option '{}' expects a number, got {} {}", key, value.kind(), value);
        }
        number
    }

    fn str(&self, key: &str) -> Option<&str> {
        let value = self.get(key)?;
        let text = value.as_str();
        if text.is_none() {
            log::warn!("option '{}' expects a string, got {} {}", key, value.kind(), value);
        }
        text
    }

    /// Truthiness of a flag option; `None` when the key is absent
    fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).map(Value::is_truthy)
    }

    fn f64_list(&self, key: &str) -> Option<Vec<f64>> {
        let value = self.get(key)?;
        let numbers = value
            .as_list()
            .and_then(|items| items.iter().map(Value::as_f64).collect::<Option<Vec<_>>>());
        if numbers.is_none() {
            log::warn!("option '{}' expects a list of numbers, got {}", key, value);
        }
        numbers
    }
}

/// Slide-level defaults: built-in fallbacks, then deck, then layout values
#[derive(Debug, Clone, PartialEq)]
pub struct Defaults {
    values: ConfigMap,
}

impl Default for Defaults {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Defaults {
    /// The hardcoded fallback layer
    pub fn builtin() -> Self {
        let mut values = ConfigMap::new();
        values.insert("font".to_string(), Value::from(FALLBACK_FONT));
        values.insert("font_size".to_string(), Value::Float(FALLBACK_FONT_SIZE));
        values.insert("left".to_string(), Value::Float(FALLBACK_LEFT));
        values.insert("top".to_string(), Value::Float(FALLBACK_TOP));
        values.insert("horizontal_align".to_string(), Value::from("left"));
        values.insert("vertical_align".to_string(), Value::from("top"));
        Self { values }
    }

    /// A new defaults set with `layer` merged over this one
    pub fn layered(&self, layer: &ConfigMap) -> Self {
        Self {
            values: merge([&self.values, layer]),
        }
    }

    /// Root directory for relative layout file references
    pub fn slide_layout_path(&self) -> Option<PathBuf> {
        self.str("slide_layout_path").map(PathBuf::from)
    }

    /// Override file for the shape preset catalog
    pub fn shape_layout_path(&self) -> Option<PathBuf> {
        self.str("shape_layout_path").map(PathBuf::from)
    }
}

impl Options for Defaults {
    fn values(&self) -> &ConfigMap {
        &self.values
    }
}

/// The final option set of one content entry: preset overlaid by override
///
/// Only keys that were set explicitly live here; callers that want a
/// slide-level fallback ask through [`ShapeConfig::f64_or`] and friends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeConfig {
    values: ConfigMap,
}

impl ShapeConfig {
    /// Cascade a shape-type preset and a per-shape override
    pub fn cascade(preset: Option<&ConfigMap>, shape_override: Option<&ConfigMap>) -> Self {
        Self {
            values: merge([preset, shape_override]),
        }
    }

    pub fn from_map(values: ConfigMap) -> Self {
        Self { values }
    }

    /// Declared shape type, `"text"` when unset and `None` when not a string
    pub fn shape_type(&self) -> Option<&str> {
        match self.get("type") {
            Some(value) => value.as_str(),
            None => Some("text"),
        }
    }

    /// Number from this config, else from `defaults`
    pub fn f64_or(&self, key: &str, defaults: &Defaults) -> Option<f64> {
        self.f64(key).or_else(|| defaults.f64(key))
    }

    /// String from this config, else from `defaults`
    pub fn str_or<'a>(&'a self, key: &str, defaults: &'a Defaults) -> Option<&'a str> {
        self.str(key).or_else(|| defaults.str(key))
    }
}

impl Options for ShapeConfig {
    fn values(&self) -> &ConfigMap {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, Value)]) -> ConfigMap {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn test_builtin_defaults() {
        let defaults = Defaults::builtin();
        assert_eq!(defaults.str("font"), Some("Avenir LT Next Pro"));
        assert_eq!(defaults.f64("font_size"), Some(18.0));
        assert_eq!(defaults.f64("left"), Some(0.67));
        assert_eq!(defaults.f64("top"), Some(0.4));
        assert_eq!(defaults.str("horizontal_align"), Some("left"));
        assert_eq!(defaults.str("vertical_align"), Some("top"));
    }

    #[test]
    fn test_layered_defaults_do_not_mutate_parent() {
        let deck = Defaults::builtin();
        let slide = deck.layered(&map(&[("font_size", Value::Integer(24))]));
        assert_eq!(slide.f64("font_size"), Some(24.0));
        assert_eq!(deck.f64("font_size"), Some(18.0));
    }

    #[test]
    fn test_shape_cascade_override_wins() {
        let preset = map(&[("type", Value::from("table")), ("width", Value::Integer(8))]);
        let shape_override = map(&[("width", Value::Float(6.5))]);
        let config = ShapeConfig::cascade(Some(&preset), Some(&shape_override));
        assert_eq!(config.shape_type(), Some("table"));
        assert_eq!(config.f64("width"), Some(6.5));
    }

    #[test]
    fn test_fallback_to_defaults() {
        let config = ShapeConfig::cascade(None, Some(&map(&[("top", Value::Integer(2))])));
        let defaults = Defaults::builtin();
        assert_eq!(config.f64_or("top", &defaults), Some(2.0));
        assert_eq!(config.f64_or("left", &defaults), Some(0.67));
        assert_eq!(config.str_or("font", &defaults), Some("Avenir LT Next Pro"));
        assert!(!config.contains("left"));
    }

    #[test]
    fn test_wrong_type_is_absent() {
        let config = ShapeConfig::from_map(map(&[
            ("width", Value::from("wide")),
            ("column_widths", Value::from(vec!["a", "b"])),
            ("type", Value::Integer(5)),
        ]));
        assert_eq!(config.shape_type(), None);
        assert_eq!(config.f64("width"), None);
        assert_eq!(config.f64_list("column_widths"), None);
    }

    #[test]
    fn test_null_is_absent() {
        let config = ShapeConfig::from_map(map(&[("font", Value::Null)]));
        assert!(!config.contains("font"));
        assert_eq!(config.shape_type(), Some("text"));
    }

    #[test]
    fn test_flags() {
        let config = ShapeConfig::from_map(map(&[
            ("bullet", Value::Bool(true)),
            ("header_bold", Value::Bool(false)),
        ]));
        assert_eq!(config.flag("bullet"), Some(true));
        assert_eq!(config.flag("header_bold"), Some(false));
        assert_eq!(config.flag("font_italic"), None);
    }
}
