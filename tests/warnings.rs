//! Warnings emitted while resolving colors and building slides

use std::fs;
use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};

use deck_layout::color::{resolve, ColorSchemes, Rgb};
use deck_layout::spec::Value;
use deck_layout::{build_deck, MemoryPresentation};

/// Keeps every warning so tests can look for the lines they expect
struct CapturingLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    lines: Mutex::new(Vec::new()),
};
static INSTALL: Once = Once::new();

fn capture() -> &'static CapturingLogger {
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).expect("Should install capturing logger");
        log::set_max_level(LevelFilter::Warn);
    });
    &LOGGER
}

/// Tests run in parallel and share the logger, so match on content only
fn warned(logger: &CapturingLogger, needle: &[&str]) -> bool {
    let lines = logger.lines.lock().expect("Should lock captured lines");
    lines.iter().any(|line| needle.iter().all(|part| line.contains(part)))
}

#[test]
fn test_unresolvable_color_warns_and_falls_back_to_black() {
    let logger = capture();

    let rgb = resolve(&Value::from("not a color"), &ColorSchemes::new()).expect("Should resolve");
    assert_eq!(rgb, Rgb::BLACK);
    assert!(
        warned(logger, &["unresolvable color expression", "'not a color'"]),
        "no warning captured for 'not a color'"
    );
}

#[test]
fn test_missing_layout_warning_names_the_slide() {
    let logger = capture();

    let dir = tempfile::tempdir().expect("Should create temp dir");
    fs::write(dir.path().join("title.yml"), "template_layout: 0\n").expect("Should write layout");
    let deck = format!(
        "defaults:\n  slide_layout_path: '{}'\nslides:\n  - layout: title.yml\n  - layout: gone.yml\n",
        dir.path().display()
    );
    let deck_path = dir.path().join("deck.yml");
    fs::write(&deck_path, deck).expect("Should write deck");

    let (_, report) = build_deck::<MemoryPresentation>(&deck_path).expect("Should build");
    assert_eq!(report.slides_built, 1);
    assert!(
        warned(logger, &["[Slide 1]", "layout file not found", "gone.yml"]),
        "no warning captured for the missing layout of slide 1"
    );
}
