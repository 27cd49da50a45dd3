//! In-memory presentation document

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    BackendError, Geometry, PicturePlan, PlaceholderInfo, Presentation, SlideId, SlideLayout,
    TablePlan, TextFrame,
};
use crate::spec::{self, Format};

/// Built-in template: the standard Office layouts, index 6 being "Blank"
const DEFAULT_TEMPLATE: &str = r#"
[[layouts]]
name = "Title Slide"
placeholders = [
    { kind = "ctr_title", name = "Title 1" },
    { kind = "sub_title", name = "Subtitle 2" },
]

[[layouts]]
name = "Title and Content"
placeholders = [
    { kind = "title", name = "Title 1" },
    { kind = "body", name = "Content Placeholder 2" },
]

[[layouts]]
name = "Section Header"
placeholders = [
    { kind = "title", name = "Title 1" },
    { kind = "body", name = "Text Placeholder 2" },
]

[[layouts]]
name = "Two Content"
placeholders = [
    { kind = "title", name = "Title 1" },
    { kind = "body", name = "Content Placeholder 2" },
    { kind = "body", name = "Content Placeholder 3" },
]

[[layouts]]
name = "Comparison"
placeholders = [
    { kind = "title", name = "Title 1" },
    { kind = "body", name = "Text Placeholder 2" },
    { kind = "body", name = "Content Placeholder 3" },
    { kind = "body", name = "Text Placeholder 4" },
    { kind = "body", name = "Content Placeholder 5" },
]

[[layouts]]
name = "Title Only"
placeholders = [
    { kind = "title", name = "Title 1" },
]

[[layouts]]
name = "Blank"
placeholders = []

[[layouts]]
name = "Content with Caption"
placeholders = [
    { kind = "title", name = "Title 1" },
    { kind = "body", name = "Content Placeholder 2" },
    { kind = "body", name = "Text Placeholder 3" },
]

[[layouts]]
name = "Picture with Caption"
placeholders = [
    { kind = "title", name = "Title 1" },
    { kind = "pic", name = "Picture Placeholder 2" },
    { kind = "body", name = "Text Placeholder 3" },
]

[[layouts]]
name = "Title and Vertical Text"
placeholders = [
    { kind = "title", name = "Title 1" },
    { kind = "body", name = "Vertical Text Placeholder 2" },
]

[[layouts]]
name = "Vertical Title and Text"
placeholders = [
    { kind = "title", name = "Vertical Title 1" },
    { kind = "body", name = "Vertical Text Placeholder 2" },
]
"#;

/// A placeholder on a slide, with the text written into it (if any)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderSlot {
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<TextFrame>,
}

impl PlaceholderSlot {
    fn from_info(info: &PlaceholderInfo) -> Self {
        Self {
            kind: info.kind.clone(),
            name: info.name.clone(),
            frame: None,
        }
    }
}

/// A freely positioned shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    TextBox { geometry: Geometry, frame: TextFrame },
    Table(TablePlan),
    Picture(PicturePlan),
}

/// One slide of the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub layout: usize,
    #[serde(default)]
    pub layout_name: String,
    #[serde(default)]
    pub placeholders: Vec<PlaceholderSlot>,
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

/// On-disk form of a template and of a saved document
#[derive(Debug, Serialize, Deserialize)]
struct DocumentFile {
    layouts: Vec<SlideLayout>,
    #[serde(default)]
    slides: Vec<Slide>,
}

/// A presentation held entirely in memory
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryPresentation {
    layouts: Vec<SlideLayout>,
    slides: Vec<Slide>,
}

impl Default for MemoryPresentation {
    fn default() -> Self {
        Self::from_toml_str(DEFAULT_TEMPLATE).expect("Default template should be valid TOML")
    }
}

impl MemoryPresentation {
    /// Parse a template description from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, BackendError> {
        let file: DocumentFile = spec::parse_str(content, Format::Toml, Path::new("template.toml"))?;
        Ok(Self::from_file(file))
    }

    fn from_file(file: DocumentFile) -> Self {
        Self {
            layouts: file.layouts,
            slides: file.slides,
        }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide(&self, id: SlideId) -> Option<&Slide> {
        self.slides.get(id.0)
    }

    /// YAML outline of the document, as written by [`Presentation::save`]
    pub fn to_yaml(&self) -> Result<String, String> {
        let file = DocumentFile {
            layouts: self.layouts.clone(),
            slides: self.slides.clone(),
        };
        serde_saphyr::to_string(&file).map_err(|e| e.to_string())
    }

    fn slide_mut(&mut self, id: SlideId) -> Result<&mut Slide, BackendError> {
        self.slides
            .get_mut(id.0)
            .ok_or(BackendError::NoSuchSlide(id.0))
    }
}

impl Presentation for MemoryPresentation {
    fn open(template: &Path) -> Result<Self, BackendError> {
        let file: DocumentFile = spec::load(template)?;
        Ok(Self::from_file(file))
    }

    fn blank() -> Self {
        Self::default()
    }

    fn layouts(&self) -> &[SlideLayout] {
        &self.layouts
    }

    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn clear_slides(&mut self) {
        self.slides.clear();
    }

    fn add_slide(&mut self, layout: usize) -> Result<SlideId, BackendError> {
        let template = self.layouts.get(layout).ok_or(BackendError::NoSuchLayout {
            index: layout,
            available: self.layouts.len(),
        })?;
        let slide = Slide {
            layout,
            layout_name: template.name.clone(),
            placeholders: template.placeholders.iter().map(PlaceholderSlot::from_info).collect(),
            shapes: Vec::new(),
        };
        self.slides.push(slide);
        Ok(SlideId(self.slides.len() - 1))
    }

    fn placeholder_count(&self, slide: SlideId) -> Result<usize, BackendError> {
        self.slide(slide)
            .map(|s| s.placeholders.len())
            .ok_or(BackendError::NoSuchSlide(slide.0))
    }

    fn fill_placeholder(
        &mut self,
        slide: SlideId,
        index: usize,
        frame: TextFrame,
    ) -> Result<(), BackendError> {
        let target = self.slide_mut(slide)?;
        let available = target.placeholders.len();
        let placeholder = target
            .placeholders
            .get_mut(index)
            .ok_or(BackendError::NoSuchPlaceholder {
                slide: slide.0,
                index,
                available,
            })?;
        placeholder.frame = Some(frame);
        Ok(())
    }

    fn add_text_box(
        &mut self,
        slide: SlideId,
        geometry: Geometry,
        frame: TextFrame,
    ) -> Result<(), BackendError> {
        self.slide_mut(slide)?
            .shapes
            .push(Shape::TextBox { geometry, frame });
        Ok(())
    }

    fn add_table(&mut self, slide: SlideId, table: TablePlan) -> Result<(), BackendError> {
        self.slide_mut(slide)?.shapes.push(Shape::Table(table));
        Ok(())
    }

    fn add_picture(&mut self, slide: SlideId, picture: PicturePlan) -> Result<(), BackendError> {
        self.slide_mut(slide)?.shapes.push(Shape::Picture(picture));
        Ok(())
    }

    fn save(&self, path: &Path) -> Result<(), BackendError> {
        let save_error = |message: String| BackendError::Save {
            path: path.to_path_buf(),
            message,
        };
        let yaml = self.to_yaml().map_err(save_error)?;
        std::fs::write(path, yaml).map_err(|e| save_error(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Paragraph;

    fn frame(text: &str) -> TextFrame {
        TextFrame {
            paragraphs: vec![Paragraph {
                text: text.to_string(),
                align: None,
                style: Default::default(),
            }],
            word_wrap: true,
            anchor: None,
        }
    }

    #[test]
    fn test_default_template_layouts() {
        let pres = MemoryPresentation::default();
        assert_eq!(pres.layouts().len(), 11);
        assert_eq!(pres.layouts()[6].name, "Blank");
        assert_eq!(pres.layouts()[1].placeholders.len(), 2);
        assert_eq!(pres.slide_count(), 0);
    }

    #[test]
    fn test_add_slide_copies_placeholders() {
        let mut pres = MemoryPresentation::default();
        let id = pres.add_slide(3).unwrap();
        assert_eq!(id, SlideId(0));
        let slide = pres.slide(id).unwrap();
        assert_eq!(slide.layout_name, "Two Content");
        assert_eq!(slide.placeholders.len(), 3);
        assert!(slide.placeholders.iter().all(|p| p.frame.is_none()));
    }

    #[test]
    fn test_add_slide_bad_layout() {
        let mut pres = MemoryPresentation::default();
        assert!(matches!(
            pres.add_slide(42),
            Err(BackendError::NoSuchLayout { index: 42, available: 11 })
        ));
    }

    #[test]
    fn test_fill_placeholder_out_of_range() {
        let mut pres = MemoryPresentation::default();
        let id = pres.add_slide(1).unwrap();
        pres.fill_placeholder(id, 0, frame("Title")).unwrap();
        assert!(matches!(
            pres.fill_placeholder(id, 5, frame("x")),
            Err(BackendError::NoSuchPlaceholder { index: 5, .. })
        ));
        let filled = pres.slide(id).unwrap().placeholders[0].frame.as_ref().unwrap();
        assert_eq!(filled.texts(), vec!["Title"]);
    }

    #[test]
    fn test_clear_slides_keeps_layouts() {
        let mut pres = MemoryPresentation::default();
        pres.add_slide(0).unwrap();
        pres.add_slide(6).unwrap();
        pres.clear_slides();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.layouts().len(), 11);
    }

    #[test]
    fn test_custom_template() {
        let pres = MemoryPresentation::from_toml_str(
            r#"
[[layouts]]
name = "Cover"
placeholders = [{ kind = "title" }]

[[slides]]
layout = 0
layout_name = "Cover"
placeholders = [{ kind = "title" }]
"#,
        )
        .expect("Should parse");
        assert_eq!(pres.layouts()[0].name, "Cover");
        assert_eq!(pres.slide_count(), 1);
    }

    #[test]
    fn test_save_writes_outline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.yml");
        let mut pres = MemoryPresentation::default();
        let id = pres.add_slide(6).unwrap();
        pres.add_text_box(id, Geometry::new(1.0, 1.0, 5.0, 1.0), frame("Hello"))
            .unwrap();
        pres.save(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Hello"));
        assert!(written.contains("text_box"));
    }
}
