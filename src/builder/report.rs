//! What a build produced and what it had to leave out

use std::fmt;

/// A slide or content entry omitted from the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// Zero-based index of the slide in the deck specification
    pub slide: usize,
    /// Content entry name; `None` when the whole slide was skipped
    pub entry: Option<String>,
    pub reason: String,
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.entry {
            Some(entry) => write!(f, "[Slide {}] {}: {}", self.slide, entry, self.reason),
            None => write!(f, "[Slide {}] {}", self.slide, self.reason),
        }
    }
}

/// Outcome of building a deck
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Slides added to the presentation
    pub slides_built: usize,
    pub skipped: Vec<Skipped>,
}

impl BuildReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a slide that was left out entirely
    pub fn skip_slide(&mut self, slide: usize, reason: impl Into<String>) {
        self.record(Skipped {
            slide,
            entry: None,
            reason: reason.into(),
        });
    }

    /// Record a content entry that was left out of an otherwise built slide
    pub fn skip_entry(&mut self, slide: usize, entry: &str, reason: impl Into<String>) {
        self.record(Skipped {
            slide,
            entry: Some(entry.to_string()),
            reason: reason.into(),
        });
    }

    /// True when nothing was skipped
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Skipped records of one slide
    pub fn skipped_on(&self, slide: usize) -> impl Iterator<Item = &Skipped> {
        self.skipped.iter().filter(move |s| s.slide == slide)
    }

    fn record(&mut self, skipped: Skipped) {
        log::warn!("{}", skipped);
        self.skipped.push(skipped);
    }
}
