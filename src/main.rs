// SPDX-License-Identifier: MIT

//! vitrine: interactive bilingual CV and portfolio viewer
//!
//! Loads localized content and a portfolio catalog from static JSON files
//! and presents them either interactively (raw-mode TUI with language
//! switching, filtering, and scroll effects) or as a one-shot headless
//! render to text or JSON.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vitrine::content;
use vitrine::controller::{Event, PageController};
use vitrine::i18n::Lang;
use vitrine::page::Page;
use vitrine::prefs::PrefStore;
use vitrine::render::{self, text::PageFormatter};
use vitrine::tui::ViewTui;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(version)]
#[command(about = "Interactive bilingual (FR/EN) CV and portfolio viewer for the terminal")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the CV interactively
    View {
        /// Directory holding content.fr.json, content.en.json, portfolio.json
        #[arg(short, long, default_value = "content")]
        content_dir: PathBuf,

        /// Start in this language instead of the persisted preference
        #[arg(short, long, value_enum)]
        lang: Option<LangArg>,

        /// Preference file location
        #[arg(long)]
        prefs: Option<PathBuf>,
    },

    /// Render the page once and print it
    Render {
        /// Directory holding content.fr.json, content.en.json, portfolio.json
        #[arg(short, long, default_value = "content")]
        content_dir: PathBuf,

        /// Language to render (default: french)
        #[arg(short, long, value_enum)]
        lang: Option<LangArg>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: RenderFormat,
    },
}

// CLI argument types
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LangArg {
    Fr,
    En,
}

impl From<LangArg> for Lang {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::Fr => Lang::Fr,
            LangArg::En => Lang::En,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum RenderFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::View {
            content_dir,
            lang,
            prefs,
        } => {
            let store = content::load_store(&content_dir);
            let prefs = PrefStore::new(prefs.unwrap_or_else(PrefStore::default_path));
            let mut controller = PageController::new(store, prefs);

            if let Some(arg) = lang {
                let lang: Lang = arg.into();
                if lang != controller.lang() {
                    controller.dispatch(Event::SetLanguage(lang));
                }
            }

            ViewTui::run(&mut controller)?;
        }

        Commands::Render {
            content_dir,
            lang,
            output,
            format,
        } => {
            let store = content::load_store(&content_dir);
            let lang = lang.map(Lang::from).unwrap_or_default();

            let mut page = Page::new();
            render::render(&mut page, &store, lang, &Default::default());

            let rendered = match format {
                RenderFormat::Text => PageFormatter::new().format(&page),
                RenderFormat::Json => serde_json::to_string_pretty(&page)?,
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .map_err(|err| anyhow!("writing {}: {err}", path.display()))?;
                    println!("Page saved to: {}", path.display());
                }
                None => print!("{rendered}"),
            }
        }
    }

    Ok(())
}
