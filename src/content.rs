// SPDX-License-Identifier: MIT

//! One-shot content loading.
//!
//! Retrieves the three fixed documents — French content, English content,
//! portfolio catalog — in that order, inside a single failure boundary.
//! A failed or malformed document aborts the remaining steps, is reported
//! as a warning on stderr, and whatever loaded before the failure is kept.
//! No retry, no fallback document: rendering simply skips sections whose
//! data never arrived.

use crate::i18n::Lang;
use crate::types::{ContentStore, LanguagePack, PortfolioCatalog};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

pub const FR_CONTENT_FILE: &str = "content.fr.json";
pub const EN_CONTENT_FILE: &str = "content.en.json";
pub const PORTFOLIO_FILE: &str = "portfolio.json";

/// Load the content store from a directory. Never fails: load errors are
/// reported on the diagnostic channel and the partial store is returned.
pub fn load_store(dir: &Path) -> ContentStore {
    let mut store = ContentStore::default();
    if let Err(err) = fetch_all(&mut store, dir) {
        eprintln!("{} error loading content: {:#}", "warning:".yellow().bold(), err);
    }
    store
}

/// The sequential fetch. Ordering matters only for which partial state
/// survives a failure: fr, then en, then the catalog.
fn fetch_all(store: &mut ContentStore, dir: &Path) -> Result<()> {
    store.insert_pack(Lang::Fr, load_pack(&dir.join(FR_CONTENT_FILE))?);
    store.insert_pack(Lang::En, load_pack(&dir.join(EN_CONTENT_FILE))?);
    store.set_catalog(load_catalog(&dir.join(PORTFOLIO_FILE))?);
    Ok(())
}

fn load_pack(path: &Path) -> Result<LanguagePack> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let tree = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    LanguagePack::from_tree(tree).with_context(|| format!("parsing {}", path.display()))
}

fn load_catalog(path: &Path) -> Result<PortfolioCatalog> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
