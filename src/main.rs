//! Deck Layout CLI
//!
//! Usage:
//!   deck-layout build <DECK> -o <OUT> [--template FILE] [--keep-template-slides]
//!   deck-layout layouts [--template FILE]
//!
//! Logging goes to stderr; set `RUST_LOG` to change the level (default `warn`).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use deck_layout::{build_deck_to_file, BuildOptions, MemoryPresentation, Presentation};

#[derive(Parser)]
#[command(name = "deck-layout")]
#[command(about = "Build slide decks from deck and layout specifications")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a deck file into a presentation document
    Build {
        /// Deck specification (YAML, or TOML by extension)
        deck: PathBuf,

        /// Output document
        #[arg(short, long)]
        output: PathBuf,

        /// Template document, overriding the deck's `template`
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Keep the slides that come with the template
        #[arg(long)]
        keep_template_slides: bool,
    },

    /// List the layouts of a template and their placeholder indices
    Layouts {
        /// Template document (built-in layouts if not provided)
        #[arg(short, long)]
        template: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Build {
            deck,
            output,
            template,
            keep_template_slides,
        } => {
            let mut options = BuildOptions::new().with_keep_template_slides(keep_template_slides);
            if let Some(template) = template {
                options = options.with_template(template);
            }
            match build_deck_to_file::<MemoryPresentation>(&deck, &output, options) {
                Ok(report) => {
                    eprintln!(
                        "Built {} slide(s) into '{}', {} item(s) skipped",
                        report.slides_built,
                        output.display(),
                        report.skipped.len()
                    );
                }
                Err(e) => {
                    eprintln!("Error building '{}': {}", deck.display(), e);
                    std::process::exit(1);
                }
            }
        }
        Command::Layouts { template } => {
            let presentation = match &template {
                Some(path) => match MemoryPresentation::open(path) {
                    Ok(p) => p,
                    Err(e) => {
                        eprintln!("Error loading template '{}': {}", path.display(), e);
                        std::process::exit(1);
                    }
                },
                None => MemoryPresentation::blank(),
            };
            print_layouts(&presentation);
        }
    }
}

fn print_layouts(presentation: &impl Presentation) {
    for (index, layout) in presentation.layouts().iter().enumerate() {
        println!("{}: {}", index, layout.name);
        for (slot, placeholder) in layout.placeholders.iter().enumerate() {
            if placeholder.name.is_empty() {
                println!("    placeholder{} ({})", slot, placeholder.kind);
            } else {
                println!("    placeholder{} ({}) {}", slot, placeholder.kind, placeholder.name);
            }
        }
    }
}
