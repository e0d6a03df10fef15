// SPDX-License-Identifier: MIT

//! The typed page model — vitrine's render surface.
//!
//! Plays the role the document tree plays in a browser: the renderer
//! projects content into it, the filter engine toggles visibility flags on
//! it, and a frontend (TUI or headless text/JSON) draws it. It is plain
//! data, so controller logic is testable without a terminal.
//!
//! Rebuild contract: the renderer replaces whole sections (`competencies`,
//! `timeline`, `portfolio`, …) wholesale rather than diffing them, so stale
//! per-element state is impossible by construction — any transient flag on
//! a replaced element is discarded with it.

use crate::i18n::Lang;
use serde::Serialize;

/// Fixed template paths bound to the content tree, the analogue of the
/// page template's content-path attributes. Each resolves dot-separated
/// against the current language's raw JSON tree.
pub const TEMPLATE_PATHS: &[&str] = &[
    "nav.about",
    "nav.experience",
    "nav.competencies",
    "nav.achievements",
    "nav.portfolio",
    "nav.contact",
    "hero.greeting",
    "hero.name",
    "hero.title",
    "hero.tagline",
    "about.title",
    "about.text",
    "experience.title",
    "competencies.title",
    "achievements.title",
    "portfolioSection.title",
    "portfolioSection.subtitle",
    "contact.title",
    "contact.text",
    "footer.note",
];

/// One template field: a content path plus its current text. A path that
/// resolves to nothing leaves the prior text untouched.
#[derive(Debug, Clone, Serialize)]
pub struct BoundField {
    pub path: &'static str,
    pub text: String,
}

/// One entry of the language selector, mirroring the per-option active
/// indicator of the original selector UI.
#[derive(Debug, Clone, Serialize)]
pub struct LangOption {
    pub lang: Lang,
    pub active: bool,
}

/// A clickable skill tag inside a competency block. `active` marks
/// membership of the (lowercased) label in the controller's filter set.
#[derive(Debug, Clone, Serialize)]
pub struct SkillTag {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompetencyBlock {
    pub name: String,
    pub tags: Vec<SkillTag>,
    /// One-shot fade-in flag, set the first time the block scrolls into view.
    pub seen: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry {
    /// Index-derived identifier wiring the toggle to its achievement list.
    pub index: usize,
    pub company: String,
    pub title: String,
    pub period: String,
    pub description: String,
    pub tags: Vec<String>,
    pub achievements: Vec<String>,
    pub expanded: bool,
    /// Toggle button label; localized, updated synchronously on each toggle.
    pub toggle_label: String,
    /// Tag-filter visibility (the timeline's display toggle).
    pub shown: bool,
    pub seen: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricCard {
    pub value: String,
    pub label: String,
    pub seen: bool,
}

/// A portfolio category filter button. Key "all" is the fixed first button.
#[derive(Debug, Clone, Serialize)]
pub struct FilterButton {
    pub key: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub enum CardLink {
    /// Opens in a new browsing context when activated.
    Url(String),
    /// Localized "coming soon" placeholder, no clickable link.
    ComingSoon(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioCard {
    pub category: String,
    pub kind: String,
    pub platform: String,
    pub year: Option<u16>,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub link: CardLink,
    pub thumbnail: Option<Thumbnail>,
    /// Category/tag-filter visibility (the card's "hidden" class).
    pub hidden: bool,
    pub seen: bool,
}

/// The whole page. Sections start empty and are filled by the renderer;
/// a missing content section simply stays empty.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub lang: Lang,
    /// Header compaction flag, driven by the scroll offset.
    pub header_compact: bool,
    pub lang_options: Vec<LangOption>,
    pub bound: Vec<BoundField>,
    pub competencies: Vec<CompetencyBlock>,
    pub timeline: Vec<TimelineEntry>,
    pub metrics: Vec<MetricCard>,
    pub filters: Vec<FilterButton>,
    pub portfolio: Vec<PortfolioCard>,
}

impl Page {
    pub fn new() -> Self {
        Self {
            lang: Lang::default(),
            header_compact: false,
            lang_options: Lang::all()
                .iter()
                .map(|&lang| LangOption {
                    lang,
                    active: lang == Lang::default(),
                })
                .collect(),
            bound: TEMPLATE_PATHS
                .iter()
                .map(|&path| BoundField {
                    path,
                    text: String::new(),
                })
                .collect(),
            competencies: Vec::new(),
            timeline: Vec::new(),
            metrics: Vec::new(),
            filters: Vec::new(),
            portfolio: Vec::new(),
        }
    }

    /// Text of a bound template field, for tests and frontends.
    pub fn bound_text(&self, path: &str) -> Option<&str> {
        self.bound
            .iter()
            .find(|field| field.path == path)
            .map(|field| field.text.as_str())
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
