// SPDX-License-Identifier: MIT

//! Core type definitions for vitrine.
//!
//! Mirrors the shape of the three content documents: two localized
//! `ContentDocument` trees (one per language) and one language-independent
//! `PortfolioCatalog`. Every section is optional — rendering guards on
//! presence, so a partially loaded store degrades to missing sections
//! instead of errors.

use crate::i18n::Lang;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Localized structured text tree for one language.
///
/// Only the sections the renderer builds dynamically are typed here; the
/// free-form strings (hero, nav, about, contact…) stay in the raw JSON tree
/// and are reached through dot-path field binding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentDocument {
    #[serde(default)]
    pub competencies: Option<Competencies>,
    #[serde(default)]
    pub experience: Option<Experience>,
    #[serde(default)]
    pub achievements: Option<Achievements>,
    #[serde(default, rename = "portfolioSection")]
    pub portfolio_section: Option<PortfolioSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Competencies {
    #[serde(default)]
    pub categories: Vec<CompetencyCategory>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompetencyCategory {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub positions: Vec<Position>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Position {
    pub company: String,
    pub title: String,
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Achievements {
    #[serde(default)]
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metric {
    pub value: String,
    pub label: String,
}

/// Localized labels for the portfolio category filter buttons, keyed by
/// category key ("video", "web", …). A category present in the catalog but
/// absent here falls back to its raw key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioSection {
    #[serde(default)]
    pub categories: HashMap<String, String>,
}

/// One localized document plus the raw tree it was parsed from.
///
/// The raw tree backs generic dot-path field binding; the typed document
/// backs section rendering. Both come from a single parse.
#[derive(Debug, Clone)]
pub struct LanguagePack {
    pub tree: Value,
    pub doc: ContentDocument,
}

impl LanguagePack {
    /// Build a pack from a parsed JSON tree. Fails when the tree's sections
    /// exist but do not match the expected shape (a parse failure per the
    /// loader's error policy).
    pub fn from_tree(tree: Value) -> Result<Self, serde_json::Error> {
        let doc = serde_json::from_value(tree.clone())?;
        Ok(Self { tree, doc })
    }
}

/// One work-sample record with category, media metadata, and optional link.
///
/// Title and description are in French (the primary language) with optional
/// English-only overrides. The catalog itself is not duplicated per
/// language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub year: Option<u16>,
    pub title: String,
    #[serde(default, rename = "titleEn")]
    pub title_en: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "descriptionEn")]
    pub description_en: Option<String>,
    /// Empty string means "not yet available" — the card renders a
    /// localized placeholder instead of a link.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PortfolioItem {
    pub fn has_url(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// Localized title: the English override when present, otherwise the
    /// primary French string.
    pub fn title_for(&self, lang: Lang) -> &str {
        match lang {
            Lang::Fr => &self.title,
            Lang::En => self.title_en.as_deref().unwrap_or(&self.title),
        }
    }

    /// Localized description, same fallback rule as [`title_for`].
    ///
    /// [`title_for`]: PortfolioItem::title_for
    pub fn description_for(&self, lang: Lang) -> &str {
        match lang {
            Lang::Fr => &self.description,
            Lang::En => self.description_en.as_deref().unwrap_or(&self.description),
        }
    }
}

/// The single language-independent list of portfolio items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioCatalog {
    #[serde(default)]
    pub items: Vec<PortfolioItem>,
}

impl PortfolioCatalog {
    /// Distinct category keys in first-seen order.
    pub fn distinct_categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category.as_str()) {
                seen.push(item.category.as_str());
            }
        }
        seen
    }
}

/// In-memory content store: both language packs plus the portfolio catalog,
/// loaded eagerly at startup and held for the session.
#[derive(Debug, Default)]
pub struct ContentStore {
    packs: HashMap<Lang, LanguagePack>,
    portfolio: Option<PortfolioCatalog>,
}

impl ContentStore {
    pub fn pack(&self, lang: Lang) -> Option<&LanguagePack> {
        self.packs.get(&lang)
    }

    pub fn catalog(&self) -> Option<&PortfolioCatalog> {
        self.portfolio.as_ref()
    }

    pub fn insert_pack(&mut self, lang: Lang, pack: LanguagePack) {
        self.packs.insert(lang, pack);
    }

    pub fn set_catalog(&mut self, catalog: PortfolioCatalog) {
        self.portfolio = Some(catalog);
    }
}
