//! Free text boxes

use super::{ShapeError, TextStyle};
use crate::backend::{
    Geometry, HorizontalAlign, Paragraph, Presentation, RunStyle, SlideId, TextFrame,
    VerticalAnchor,
};
use crate::color::ColorSchemes;
use crate::config::{Defaults, Options, ShapeConfig, FALLBACK_LEFT, FALLBACK_TOP};
use crate::spec::ContentValue;

const DEFAULT_WIDTH: f64 = 5.0;
const DEFAULT_HEIGHT: f64 = 1.0;

/// Textual bullet glyph prepended to each line when `bullet` is set
pub const BULLET: &str = "• ";

/// Options of a free text box
#[derive(Debug, Clone, PartialEq)]
pub struct TextShape {
    pub geometry: Geometry,
    pub bullet: bool,
    pub align: HorizontalAlign,
    pub anchor: VerticalAnchor,
    pub style: TextStyle,
}

impl TextShape {
    pub fn from_config(config: &ShapeConfig, defaults: &Defaults) -> Self {
        Self {
            geometry: Geometry::new(
                config.f64_or("left", defaults).unwrap_or(FALLBACK_LEFT),
                config.f64_or("top", defaults).unwrap_or(FALLBACK_TOP),
                config.f64("width").unwrap_or(DEFAULT_WIDTH),
                config.f64("height").unwrap_or(DEFAULT_HEIGHT),
            ),
            bullet: config.flag("bullet").unwrap_or(false),
            align: config
                .str_or("horizontal_align", defaults)
                .map(HorizontalAlign::parse)
                .unwrap_or_default(),
            anchor: config
                .str_or("vertical_align", defaults)
                .map(VerticalAnchor::parse)
                .unwrap_or_default(),
            style: TextStyle::from_config(config),
        }
    }

    /// Compute the frame for `content`
    pub fn plan(&self, content: &ContentValue, schemes: &ColorSchemes) -> Result<TextFrame, ShapeError> {
        let run = self.style.resolve(schemes)?;
        let lines = match content {
            ContentValue::Lines(lines) if self.bullet => {
                lines.iter().map(|line| format!("{}{}", BULLET, line)).collect()
            }
            other => content_lines(other),
        };
        Ok(TextFrame {
            paragraphs: paragraphs(lines, Some(self.align), &run),
            word_wrap: true,
            anchor: Some(self.anchor),
        })
    }
}

/// Add a text box for `content` to `slide`
pub fn add_text_box<P: Presentation + ?Sized>(
    presentation: &mut P,
    slide: SlideId,
    shape: &TextShape,
    content: &ContentValue,
    schemes: &ColorSchemes,
) -> Result<(), ShapeError> {
    let frame = shape.plan(content, schemes)?;
    presentation.add_text_box(slide, shape.geometry, frame)?;
    Ok(())
}

/// One line per paragraph; table rows collapse to tab-separated lines
pub(crate) fn content_lines(content: &ContentValue) -> Vec<String> {
    match content {
        ContentValue::Scalar(text) => vec![text.clone()],
        ContentValue::Lines(lines) => lines.clone(),
        ContentValue::Rows(rows) => rows.iter().map(|row| row.join("\t")).collect(),
    }
}

pub(crate) fn paragraphs(
    lines: Vec<String>,
    align: Option<HorizontalAlign>,
    run: &RunStyle,
) -> Vec<Paragraph> {
    lines
        .into_iter()
        .map(|text| Paragraph {
            text,
            align,
            style: run.clone(),
        })
        .collect()
}
