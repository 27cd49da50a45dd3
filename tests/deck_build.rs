//! End-to-end deck builds against the in-memory backend

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use deck_layout::backend::memory::Shape;
use deck_layout::{
    build_deck, build_deck_with_options, BuildOptions, MemoryPresentation, Presentation, Rgb,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        init_logging();
        Self {
            dir: tempfile::tempdir().expect("Should create temp dir"),
        }
    }

    /// Write a fixture file; `{root}` expands to the fixture directory
    fn write(&self, name: &str, content: &str) -> PathBuf {
        let content = content.replace("{root}", &self.dir.path().display().to_string());
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Should create parent dir");
        }
        fs::write(&path, content).expect("Should write fixture");
        path
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }
}

#[test]
fn test_missing_second_layout_skips_only_that_slide() {
    let fx = Fixture::new();
    fx.write("title.yml", "template_layout: 0\n");
    let deck = fx.write(
        "deck.yml",
        r#"
defaults:
  slide_layout_path: '{root}'
slides:
  - layout: title.yml
    content:
      placeholder0: Quarterly Review
  - layout: missing.yml
    content:
      title: Lost
"#,
    );

    let (pres, report) = build_deck::<MemoryPresentation>(&deck).expect("Should build");
    assert_eq!(pres.slide_count(), 1);
    assert_eq!(report.slides_built, 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].slide, 1);
    assert_eq!(report.skipped[0].entry, None);
}

#[test]
fn test_out_of_range_placeholder_does_not_block_others() {
    let fx = Fixture::new();
    fx.write("two.yml", "template_layout: Two Content\n");
    let deck = fx.write(
        "deck.yml",
        r#"
defaults:
  slide_layout_path: '{root}'
slides:
  - layout: two.yml
    content:
      placeholder0: Results
      placeholder7: Nowhere
      placeholder2:
        - left column
        - right column
"#,
    );

    let (pres, report) = build_deck::<MemoryPresentation>(&deck).expect("Should build");
    let slide = &pres.slides()[0];
    assert_eq!(slide.layout_name, "Two Content");

    let texts: Vec<Vec<&str>> = slide
        .placeholders
        .iter()
        .map(|p| p.frame.as_ref().map(|f| f.texts()).unwrap_or_default())
        .collect();
    assert_eq!(
        texts,
        vec![vec!["Results"], vec![], vec!["left column", "right column"]]
    );

    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].entry.as_deref(), Some("placeholder7"));
}

#[test]
fn test_banded_table() {
    let fx = Fixture::new();
    fx.write(
        "table.yml",
        r##"
template_layout: 6
color_schemes:
  brand:
    - header: "#1F3864"
    - row_light: [255, 255, 255]
    - row_dark: "220, 230, 241"
shapes:
  figures:
    type: table
    table_colors: brand
    column_widths: [3, 2]
"##,
    );
    let deck = fx.write(
        "deck.yml",
        r#"
defaults:
  slide_layout_path: '{root}'
slides:
  - layout: table.yml
    content:
      figures:
        - [Region, Revenue]
        - [North, 120]
        - [South, 95.0]
        - [East, 80]
"#,
    );

    let (pres, report) = build_deck::<MemoryPresentation>(&deck).expect("Should build");
    assert!(report.is_complete(), "unexpected skips: {:?}", report.skipped);

    let Shape::Table(table) = &pres.slides()[0].shapes[0] else {
        panic!("expected a table");
    };
    assert_eq!((table.rows, table.cols), (4, 2));
    assert_eq!(table.column_widths, Some(vec![3.0, 2.0]));
    assert_eq!(table.cell(2, 1).unwrap().text, "95.0");

    let fills: Vec<Option<Rgb>> = table.cells.iter().map(|row| row[0].fill).collect();
    assert_eq!(
        fills,
        vec![
            Some(Rgb::new(0x1F, 0x38, 0x64)),
            Some(Rgb::new(255, 255, 255)),
            Some(Rgb::new(220, 230, 241)),
            Some(Rgb::new(255, 255, 255)),
        ]
    );
    assert_eq!(table.cell(0, 0).unwrap().style.bold, Some(true));
}

#[test]
fn test_cascade_through_deck_layout_and_shape() {
    let fx = Fixture::new();
    fx.write(
        "layouts/body.yml",
        r#"
defaults:
  font_size: 14
shapes:
  body:
    left: 2
    font_color: brand.ink
color_schemes:
  brand:
    - ink: [10, 20, 30]
"#,
    );
    let deck = fx.write(
        "deck.yml",
        r#"
defaults:
  font: Inter
  top: 1.25
  slide_layout_path: '{root}/layouts'
slides:
  - layout: body.yml
    content:
      body:
        - first
        - second
"#,
    );

    let (pres, _) = build_deck::<MemoryPresentation>(&deck).expect("Should build");
    let Shape::TextBox { geometry, frame } = &pres.slides()[0].shapes[0] else {
        panic!("expected a text box");
    };
    // "body" preset fixes top/width/height and bullets; the layout moves it right
    assert_eq!(geometry.left, 2.0);
    assert_eq!(geometry.top, 2.1);
    assert_eq!(frame.texts(), vec!["• first", "• second"]);
    assert_eq!(frame.paragraphs[0].style.color, Some(Rgb::new(10, 20, 30)));
}

#[test]
fn test_color_cycle_skips_entry() {
    let fx = Fixture::new();
    fx.write(
        "loop.yml",
        r#"
color_schemes:
  a:
    - x: b.y
  b:
    - y: a.x
shapes:
  note:
    font_color: a.x
"#,
    );
    let deck = fx.write(
        "deck.yml",
        "defaults:\n  slide_layout_path: '{root}'\nslides:\n  - layout: loop.yml\n    content:\n      note: hello\n      other: fine\n",
    );

    let (pres, report) = build_deck::<MemoryPresentation>(&deck).expect("Should build");
    assert_eq!(pres.slides()[0].shapes.len(), 1);
    assert_eq!(report.skipped.len(), 1);
    assert!(report.skipped[0].reason.contains("cycle"));
}

#[test]
fn test_missing_image_is_skipped() {
    let fx = Fixture::new();
    fs::write(fx.path().join("chart.png"), b"\x89PNG").expect("Should write image");
    fx.write(
        "images.yml",
        "shapes:\n  chart:\n    type: image\n  photo:\n    type: image\n",
    );
    let chart = fx.path().join("chart.png");
    let deck = fx.write(
        "deck.yml",
        &format!(
            "defaults:\n  slide_layout_path: '{{root}}'\nslides:\n  - layout: images.yml\n    content:\n      chart: '{}'\n      photo: nowhere.png\n",
            chart.display()
        ),
    );

    let (pres, report) = build_deck::<MemoryPresentation>(&deck).expect("Should build");
    assert_eq!(pres.slides()[0].shapes.len(), 1);
    assert_eq!(report.skipped[0].entry.as_deref(), Some("photo"));
}

#[test]
fn test_template_from_deck_replaces_builtin_layouts() {
    let fx = Fixture::new();
    fx.write(
        "corporate.toml",
        r#"
[[layouts]]
name = "Cover"
placeholders = [{ kind = "ctr_title" }]

[[slides]]
layout = 0
placeholders = [{ kind = "ctr_title" }]
"#,
    );
    fx.write("cover.yml", "template_layout: cover\n");
    let deck = fx.write(
        "deck.yml",
        r#"
template: '{root}/corporate.toml'
defaults:
  slide_layout_path: '{root}'
slides:
  - layout: cover.yml
    content:
      placeholder0: Welcome
"#,
    );

    let (pres, _) = build_deck::<MemoryPresentation>(&deck).expect("Should build");
    assert_eq!(pres.slide_count(), 1);
    assert_eq!(pres.slides()[0].layout_name, "Cover");

    let (kept, _) = build_deck_with_options::<MemoryPresentation>(
        &deck,
        BuildOptions::new().with_keep_template_slides(true),
    )
    .expect("Should build");
    assert_eq!(kept.slide_count(), 2);
}

#[test]
fn test_template_without_default_layout_skips_unmatched_slide() {
    let fx = Fixture::new();
    fx.write(
        "small.toml",
        "[[layouts]]\nname = \"A\"\n\n[[layouts]]\nname = \"B\"\n",
    );
    fx.write("b.yml", "template_layout: b\n");
    fx.write("z.yml", "template_layout: z\n");
    let deck = fx.write(
        "deck.yml",
        "template: '{root}/small.toml'\ndefaults:\n  slide_layout_path: '{root}'\nslides:\n  - layout: b.yml\n  - layout: z.yml\n",
    );

    let (pres, report) = build_deck::<MemoryPresentation>(&deck).expect("Should build");
    assert_eq!(pres.slide_count(), 1);
    assert_eq!(report.skipped[0].slide, 1);
}

#[test]
fn test_saved_outline_reopens_as_template() {
    let fx = Fixture::new();
    fx.write("blank.yml", "{}\n");
    let deck = fx.write(
        "deck.yml",
        "defaults:\n  slide_layout_path: '{root}'\nslides:\n  - layout: blank.yml\n    content:\n      title: Hello\n",
    );
    let output = fx.path().join("out.yml");

    let report = deck_layout::build_deck_to_file::<MemoryPresentation>(
        &deck,
        &output,
        BuildOptions::new(),
    )
    .expect("Should build and save");
    assert_eq!(report.slides_built, 1);

    let reopened = MemoryPresentation::open(&output).expect("Should reopen");
    assert_eq!(reopened.slide_count(), 1);
    assert_eq!(reopened.layouts().len(), 11);
}
