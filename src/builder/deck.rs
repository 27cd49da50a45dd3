//! Building a whole deck into a presentation document

use std::path::{Path, PathBuf};

use super::{BuildReport, SlideBuilder};
use crate::backend::{Presentation, SlideId};
use crate::config::{Defaults, ShapePresets};
use crate::spec::{self, DeckSpec, SlideEntry};
use crate::DeckError;

/// Where a [`DeckBuilder`] is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    /// No document yet
    Idle,
    /// A document is open, no slide added by this builder yet
    TemplateLoaded,
    /// At least one slide was added
    SlideAdded,
    /// The document was written out
    Saved,
}

/// Options for a deck build
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Keep the slides that come with the template instead of clearing them
    pub keep_template_slides: bool,
    /// Template document to use instead of the deck's `template`
    pub template: Option<PathBuf>,
}

impl BuildOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep or clear the template's own slides
    pub fn with_keep_template_slides(mut self, keep: bool) -> Self {
        self.keep_template_slides = keep;
        self
    }

    /// Override the deck's template document
    pub fn with_template(mut self, template: impl Into<PathBuf>) -> Self {
        self.template = Some(template.into());
        self
    }
}

/// Builds decks into a presentation document
///
/// Slides are appended in deck order. Failures local to a slide or a content
/// entry end up in the [`BuildReport`]; only unreadable input and a failing
/// save are returned as errors.
#[derive(Debug)]
pub struct DeckBuilder<P: Presentation> {
    presentation: Option<P>,
    state: BuildState,
    options: BuildOptions,
    presets: ShapePresets,
    defaults: Defaults,
    layout_root: PathBuf,
    next_slide: usize,
    report: BuildReport,
}

impl<P: Presentation> Default for DeckBuilder<P> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<P: Presentation> DeckBuilder<P> {
    /// A builder working on an already open document
    pub fn new(presentation: P) -> Self {
        Self {
            presentation: Some(presentation),
            state: BuildState::TemplateLoaded,
            ..Self::idle()
        }
    }

    /// A builder without a document; the deck's template, or the backend's
    /// blank document, is opened when building starts
    pub fn idle() -> Self {
        Self {
            presentation: None,
            state: BuildState::Idle,
            options: BuildOptions::default(),
            presets: ShapePresets::bundled(),
            defaults: Defaults::builtin(),
            layout_root: PathBuf::new(),
            next_slide: 0,
            report: BuildReport::new(),
        }
    }

    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    pub fn presentation(&self) -> Option<&P> {
        self.presentation.as_ref()
    }

    pub fn into_presentation(self) -> Option<P> {
        self.presentation
    }

    /// Open `path` as the document, clearing its slides unless told to keep them
    pub fn load_template(&mut self, path: &Path) -> Result<(), DeckError> {
        let mut presentation = P::open(path)?;
        if !self.options.keep_template_slides {
            presentation.clear_slides();
        }
        self.presentation = Some(presentation);
        self.state = BuildState::TemplateLoaded;
        Ok(())
    }

    /// Read a deck file and build it
    ///
    /// Relative paths inside the deck (`template`, `slide_layout_path`,
    /// `shape_layout_path`, layout and image files) are used as given, so they
    /// resolve against the working directory rather than the deck file.
    pub fn build_from_file(&mut self, deck_path: &Path) -> Result<&BuildReport, DeckError> {
        let deck: DeckSpec = spec::load(deck_path)?;
        self.build(&deck)
    }

    /// Build every slide of `deck`
    pub fn build(&mut self, deck: &DeckSpec) -> Result<&BuildReport, DeckError> {
        self.prepare(deck)?;
        for entry in &deck.slides {
            self.add_slide(entry)?;
        }
        Ok(&self.report)
    }

    /// Open the document and set up deck-wide defaults and presets
    ///
    /// Starts a fresh [`BuildReport`] and slide numbering.
    pub fn prepare(&mut self, deck: &DeckSpec) -> Result<(), DeckError> {
        let template = self.options.template.clone().or_else(|| deck.template.clone());
        match template {
            Some(template) => self.load_template(&template)?,
            None if self.presentation.is_none() => {
                self.presentation = Some(P::blank());
                self.state = BuildState::TemplateLoaded;
            }
            None => {}
        }

        self.defaults = Defaults::builtin().layered(&deck.defaults);
        if let Some(path) = self.defaults.shape_layout_path() {
            match ShapePresets::from_file(&path) {
                Ok(presets) => self.presets = presets,
                Err(e) => log::warn!("keeping current shape presets: {}", e),
            }
        }
        self.layout_root = self.defaults.slide_layout_path().unwrap_or_default();
        self.next_slide = 0;
        self.report = BuildReport::new();
        Ok(())
    }

    /// Build the next slide of the deck
    ///
    /// Returns `None` when the slide was skipped.
    pub fn add_slide(&mut self, entry: &SlideEntry) -> Result<Option<SlideId>, DeckError> {
        let presentation = self.presentation.as_mut().ok_or(DeckError::NoDocument)?;
        let index = self.next_slide;
        self.next_slide += 1;

        let built = SlideBuilder::new(index, &self.defaults, &self.presets)
            .with_layout_root(&self.layout_root)
            .build(presentation, entry, &mut self.report)?;
        if built.is_some() {
            self.report.slides_built += 1;
            self.state = BuildState::SlideAdded;
        }
        Ok(built)
    }

    /// Write the document to `path`
    pub fn save(&mut self, path: &Path) -> Result<(), DeckError> {
        let presentation = self.presentation.as_ref().ok_or(DeckError::NoDocument)?;
        presentation.save(path)?;
        self.state = BuildState::Saved;
        Ok(())
    }
}
