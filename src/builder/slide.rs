//! Building one slide from its layout file and content entries

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use super::BuildReport;
use crate::backend::{Presentation, SlideId, SlideLayout};
use crate::config::{Defaults, ShapeConfig, ShapePresets};
use crate::shape::{self, ShapeKind};
use crate::spec::{self, ContentValue, LayoutRef, LayoutSpec, SlideEntry, Value};
use crate::DeckError;

/// Template layout used when a layout file names none, or names one that
/// does not exist
pub const DEFAULT_TEMPLATE_LAYOUT: usize = 6;

/// Pick the template layout for a slide
///
/// An in-range index selects that layout; a name matches case-insensitively
/// after trimming. Anything else falls back to [`DEFAULT_TEMPLATE_LAYOUT`],
/// and `None` is returned only when the template does not have that many
/// layouts either.
pub fn resolve_template_layout(reference: Option<&LayoutRef>, layouts: &[SlideLayout]) -> Option<usize> {
    let selected = match reference {
        Some(LayoutRef::Index(index)) => {
            let found = usize::try_from(*index).ok().filter(|i| *i < layouts.len());
            if found.is_none() {
                log::warn!(
                    "template layout {} out of range (template has {}), using layout {}",
                    index,
                    layouts.len(),
                    DEFAULT_TEMPLATE_LAYOUT
                );
            }
            found
        }
        Some(LayoutRef::Name(name)) => {
            let wanted = name.trim();
            let found = layouts
                .iter()
                .position(|layout| layout.name.trim().eq_ignore_ascii_case(wanted));
            if found.is_none() {
                log::warn!(
                    "no template layout named '{}', using layout {}",
                    wanted,
                    DEFAULT_TEMPLATE_LAYOUT
                );
            }
            found
        }
        None => None,
    };
    selected.or((DEFAULT_TEMPLATE_LAYOUT < layouts.len()).then_some(DEFAULT_TEMPLATE_LAYOUT))
}

/// Builds the slide at one position of the deck
#[derive(Debug, Clone)]
pub struct SlideBuilder<'a> {
    index: usize,
    defaults: &'a Defaults,
    presets: &'a ShapePresets,
    layout_root: &'a Path,
}

impl<'a> SlideBuilder<'a> {
    /// `defaults` are the deck-level defaults; layout defaults go on top
    pub fn new(index: usize, defaults: &'a Defaults, presets: &'a ShapePresets) -> Self {
        Self {
            index,
            defaults,
            presets,
            layout_root: Path::new(""),
        }
    }

    /// Directory that relative layout file names are resolved against
    pub fn with_layout_root(mut self, root: &'a Path) -> Self {
        self.layout_root = root;
        self
    }

    pub fn layout_path(&self, layout: &str) -> PathBuf {
        self.layout_root.join(layout)
    }

    /// Load the layout file of `entry`
    ///
    /// A missing `layout` key or file skips the slide; a file that exists
    /// but does not parse is an error.
    pub fn load_layout(
        &self,
        entry: &SlideEntry,
        report: &mut BuildReport,
    ) -> Result<Option<LayoutSpec>, DeckError> {
        let Some(layout) = entry.layout.as_deref() else {
            report.skip_slide(self.index, "no layout specified");
            return Ok(None);
        };
        let path = self.layout_path(layout);
        if !path.is_file() {
            report.skip_slide(
                self.index,
                format!("layout file not found: {}", path.display()),
            );
            return Ok(None);
        }
        Ok(Some(spec::load(&path)?))
    }

    /// Add the slide described by `entry` and fill in its content
    pub fn build<P: Presentation + ?Sized>(
        &self,
        presentation: &mut P,
        entry: &SlideEntry,
        report: &mut BuildReport,
    ) -> Result<Option<SlideId>, DeckError> {
        match self.load_layout(entry, report)? {
            Some(layout) => self.render(presentation, &layout, &entry.content, report),
            None => Ok(None),
        }
    }

    /// Add a slide for an already loaded layout
    pub fn render<P: Presentation + ?Sized>(
        &self,
        presentation: &mut P,
        layout: &LayoutSpec,
        content: &IndexMap<String, Value>,
        report: &mut BuildReport,
    ) -> Result<Option<SlideId>, DeckError> {
        let Some(template_layout) =
            resolve_template_layout(layout.template_layout.as_ref(), presentation.layouts())
        else {
            report.skip_slide(
                self.index,
                format!(
                    "template has no layout {} to fall back to",
                    DEFAULT_TEMPLATE_LAYOUT
                ),
            );
            return Ok(None);
        };
        let slide = presentation.add_slide(template_layout)?;
        let defaults = self.defaults.layered(&layout.defaults);

        for (name, value) in content {
            let Some(content) = ContentValue::from_value(value) else {
                report.skip_entry(self.index, name, format!("cannot place {} content", value.kind()));
                continue;
            };
            let config = ShapeConfig::cascade(self.presets.get(name), layout.shapes.get(name));
            let kind = ShapeKind::classify(name, &config, &defaults);
            if let Err(e) = shape::dispatch(
                presentation,
                slide,
                name,
                &kind,
                &content,
                &layout.color_schemes,
            ) {
                report.skip_entry(self.index, name, e.to_string());
            }
        }
        Ok(Some(slide))
    }
}
