//! Rendering instructions computed by the shape handlers

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Position and size of a shape, in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Geometry {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl HorizontalAlign {
    /// Case-insensitive parse; unknown names fall back to `Left`
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "center" => Self::Center,
            "right" => Self::Right,
            "justify" => Self::Justify,
            _ => Self::Left,
        }
    }
}

/// Vertical anchor of text within its frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAnchor {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VerticalAnchor {
    /// Case-insensitive parse; unknown names fall back to `Top`
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "middle" => Self::Middle,
            "bottom" => Self::Bottom,
            _ => Self::Top,
        }
    }
}

/// Character formatting of a run; `None` leaves the inherited value alone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    /// Size in points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
}

impl RunStyle {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A paragraph holding a single styled run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<HorizontalAlign>,
    #[serde(default, skip_serializing_if = "RunStyle::is_empty")]
    pub style: RunStyle,
}

/// Full content of a text frame, replacing whatever it held before
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextFrame {
    pub paragraphs: Vec<Paragraph>,
    pub word_wrap: bool,
    /// `None` keeps the frame's inherited anchor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<VerticalAnchor>,
}

impl TextFrame {
    /// Paragraph texts, for inspection
    pub fn texts(&self) -> Vec<&str> {
        self.paragraphs.iter().map(|p| p.text.as_str()).collect()
    }
}

/// One table cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    pub text: String,
    pub word_wrap: bool,
    pub anchor: VerticalAnchor,
    /// Uniform margin on all four sides, in inches
    pub padding: f64,
    pub align: HorizontalAlign,
    pub style: RunStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Rgb>,
}

/// A fully computed table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TablePlan {
    pub geometry: Geometry,
    pub rows: usize,
    pub cols: usize,
    /// Explicit height per row; `None` keeps the backend's even split
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_heights: Option<Vec<f64>>,
    /// Explicit width per column; `None` keeps the backend's even split
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_widths: Option<Vec<f64>>,
    /// Row-major cells, `rows` x `cols`
    pub cells: Vec<Vec<TableCell>>,
}

impl TablePlan {
    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }
}

/// A picture to insert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PicturePlan {
    pub path: std::path::PathBuf,
    pub geometry: Geometry,
}
