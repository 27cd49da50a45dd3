//! Color expressions and named color schemes
//!
//! Shape options such as `font_color` accept several color notations. This
//! module turns them into concrete [`Rgb`] values, following `scheme.key`
//! references into the color schemes declared by the slide's layout.
//!
//! # Example
//!
//! ```rust
//! use deck_layout::color::{resolve, ColorSchemes, Rgb};
//! use deck_layout::spec::Value;
//!
//! let schemes = ColorSchemes::default();
//! let rgb = resolve(&Value::from("#0A141E"), &schemes).unwrap();
//! assert_eq!(rgb, Rgb::new(10, 20, 30));
//! ```

mod resolve;
mod scheme;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use resolve::{resolve, MAX_REFERENCE_DEPTH};
pub use scheme::{ColorScheme, ColorSchemes, TableRoles};

/// A concrete 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Fallback for anything that cannot be resolved
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Upper-case `RRGGBB` form
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// Errors that abort the resolution of a color expression
///
/// Unparsable expressions are not errors; they resolve to [`Rgb::BLACK`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// A `scheme.key` reference leads back to itself, or nests too deeply
    #[error("color reference cycle: {}", chain.join(" -> "))]
    ReferenceCycle { chain: Vec<String> },
}

impl ColorError {
    /// Create a reference cycle error
    pub fn cycle(chain: Vec<String>) -> Self {
        Self::ReferenceCycle { chain }
    }
}
