//! Filling placeholders inherited from the slide layout
//!
//! An entry named `placeholder<N>` writes into the N-th placeholder of the
//! slide, counted in layout order from zero. Only formatting options set
//! explicitly on the entry are applied; everything else keeps the
//! template's look.

use super::text::{content_lines, paragraphs};
use super::{ShapeError, TextStyle};
use crate::backend::{HorizontalAlign, Presentation, SlideId, TextFrame, VerticalAnchor};
use crate::color::ColorSchemes;
use crate::config::{Options, ShapeConfig};
use crate::spec::ContentValue;

/// Name prefix that binds an entry to a placeholder
pub const PLACEHOLDER_PREFIX: &str = "placeholder";

/// Options of a placeholder binding
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderShape {
    /// The entry name, e.g. `placeholder1`
    pub reference: String,
    pub align: Option<HorizontalAlign>,
    pub anchor: Option<VerticalAnchor>,
    pub style: TextStyle,
}

impl PlaceholderShape {
    pub fn from_config(name: &str, config: &ShapeConfig) -> Self {
        Self {
            reference: name.to_string(),
            align: config.str("horizontal_align").map(HorizontalAlign::parse),
            anchor: config.str("vertical_align").map(VerticalAnchor::parse),
            style: TextStyle::from_config(config),
        }
    }

    /// Placeholder index encoded in the entry name
    pub fn index(&self) -> Result<usize, ShapeError> {
        self.reference
            .strip_prefix(PLACEHOLDER_PREFIX)
            .and_then(|digits| digits.trim().parse().ok())
            .ok_or_else(|| ShapeError::PlaceholderName {
                name: self.reference.clone(),
            })
    }

    /// Compute the frame for `content`
    pub fn plan(&self, content: &ContentValue, schemes: &ColorSchemes) -> Result<TextFrame, ShapeError> {
        let run = self.style.resolve(schemes)?;
        Ok(TextFrame {
            paragraphs: paragraphs(content_lines(content), self.align, &run),
            word_wrap: true,
            anchor: self.anchor,
        })
    }
}

/// Replace the text of the placeholder named by `shape`
pub fn fill_placeholder<P: Presentation + ?Sized>(
    presentation: &mut P,
    slide: SlideId,
    shape: &PlaceholderShape,
    content: &ContentValue,
    schemes: &ColorSchemes,
) -> Result<(), ShapeError> {
    let index = shape.index()?;
    let available = presentation.placeholder_count(slide)?;
    if index >= available {
        return Err(ShapeError::PlaceholderMissing {
            name: shape.reference.clone(),
            index,
            available,
        });
    }
    let frame = shape.plan(content, schemes)?;
    presentation.fill_placeholder(slide, index, frame)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::backend::{MemoryPresentation, RunStyle};
    use crate::color::{ColorScheme, Rgb};
    use crate::spec::{ConfigMap, Value};

    fn shape(name: &str, pairs: &[(&str, Value)]) -> PlaceholderShape {
        let map: ConfigMap = pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect();
        PlaceholderShape::from_config(name, &ShapeConfig::from_map(map))
    }

    #[test]
    fn test_index_from_name() {
        assert_eq!(shape("placeholder0", &[]).index().unwrap(), 0);
        assert_eq!(shape("placeholder12", &[]).index().unwrap(), 12);
    }

    #[test]
    fn test_malformed_index() {
        for name in ["placeholder", "placeholderX", "placeholder-1"] {
            let result = shape(name, &[]).index();
            assert!(
                matches!(result, Err(ShapeError::PlaceholderName { .. })),
                "{} should not parse",
                name
            );
        }
    }

    #[test]
    fn test_unset_options_stay_unset() {
        let frame = shape("placeholder0", &[])
            .plan(&ContentValue::Scalar("Title".to_string()), &ColorSchemes::new())
            .unwrap();
        assert_eq!(frame.anchor, None);
        assert_eq!(frame.paragraphs[0].align, None);
        assert_eq!(frame.paragraphs[0].style, RunStyle::default());
        assert!(frame.word_wrap);
    }

    #[test]
    fn test_explicit_options_apply() {
        let schemes = ColorSchemes::new().with_scheme("brand", ColorScheme::from_pairs([("accent", "#FF8800")]));
        let frame = shape(
            "placeholder1",
            &[
                ("horizontal_align", Value::from("center")),
                ("vertical_align", Value::from("middle")),
                ("font_color", Value::from("brand.accent")),
            ],
        )
        .plan(&ContentValue::Scalar("x".to_string()), &schemes)
        .unwrap();
        assert_eq!(frame.anchor, Some(VerticalAnchor::Middle));
        assert_eq!(frame.paragraphs[0].align, Some(HorizontalAlign::Center));
        assert_eq!(frame.paragraphs[0].style.color, Some(Rgb::new(255, 136, 0)));
    }

    #[test]
    fn test_lines_become_paragraphs_without_bullets() {
        let lines = ContentValue::Lines(vec!["one".to_string(), "two".to_string()]);
        let frame = shape("placeholder1", &[("bullet", Value::Bool(true))])
            .plan(&lines, &ColorSchemes::new())
            .unwrap();
        assert_eq!(frame.texts(), vec!["one", "two"]);
    }

    #[test]
    fn test_fill_placeholder() {
        let mut pres = MemoryPresentation::default();
        // "Title and Content": title + body
        let slide = pres.add_slide(1).unwrap();
        fill_placeholder(
            &mut pres,
            slide,
            &shape("placeholder1", &[]),
            &ContentValue::Scalar("Body".to_string()),
            &ColorSchemes::new(),
        )
        .unwrap();
        let slots = &pres.slide(slide).unwrap().placeholders;
        assert_eq!(slots[0].frame, None);
        assert_eq!(slots[1].frame.as_ref().unwrap().texts(), vec!["Body"]);
    }

    #[test]
    fn test_index_out_of_range() {
        let mut pres = MemoryPresentation::default();
        let slide = pres.add_slide(1).unwrap();
        let result = fill_placeholder(
            &mut pres,
            slide,
            &shape("placeholder7", &[]),
            &ContentValue::Scalar("x".to_string()),
            &ColorSchemes::new(),
        );
        match result {
            Err(ShapeError::PlaceholderMissing { index, available, .. }) => {
                assert_eq!((index, available), (7, 2));
            }
            other => panic!("expected missing placeholder, got {:?}", other),
        }
    }
}
