//! Deck, layout and content specifications

pub mod content;
pub mod deck;
pub mod load;
pub mod value;

pub use content::ContentValue;
pub use deck::{DeckSpec, LayoutRef, LayoutSpec, SlideEntry};
pub use load::{load, parse_str, Format};
pub use value::{ConfigMap, Value};
