// SPDX-License-Identifier: MIT

//! The page controller: the single owner of all session state.
//!
//! Frontends translate input into named [`Event`]s and hand them to
//! [`PageController::dispatch`]; every event is a synchronous state
//! transition plus whatever re-rendering it implies. Nothing else in the
//! crate mutates the page, so the whole interaction surface is testable
//! against the bare page model.
//!
//! ## Filter precedence
//!
//! The category filter and the tag filter both narrow the visible set but
//! are triggered from different regions. They reset each other: selecting
//! a category clears the active tag set, and toggling a skill tag snaps
//! the category selection back to "all". Click order can therefore never
//! leave the page in a mixed state.

use crate::effects::{self, ElementKey};
use crate::filter;
use crate::i18n::{t, Lang};
use crate::page::Page;
use crate::prefs::PrefStore;
use crate::render;
use crate::types::ContentStore;
use colored::Colorize;
use std::collections::BTreeSet;

/// Named interaction events, one per UI affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The header language toggle.
    ToggleLanguage,
    /// Direct selection (startup preference, `--lang`, selector click).
    SetLanguage(Lang),
    /// A skill tag was clicked; toggles its membership in the filter set.
    SkillToggled(String),
    /// A portfolio category button was clicked.
    CategorySelected(String),
    /// A timeline entry's detail toggle was clicked.
    DetailToggled(usize),
    /// The vertical scroll offset changed.
    Scrolled(u64),
}

pub struct PageController {
    lang: Lang,
    active_filters: BTreeSet<String>,
    store: ContentStore,
    prefs: PrefStore,
    pub page: Page,
}

impl PageController {
    /// Build the controller and run the startup sequence: initial render
    /// in the boot language, then apply a persisted preference when it
    /// differs.
    pub fn new(store: ContentStore, prefs: PrefStore) -> Self {
        let mut controller = Self {
            lang: Lang::default(),
            active_filters: BTreeSet::new(),
            store,
            prefs,
            page: Page::new(),
        };
        controller.render();

        if let Some(saved) = controller.prefs.read() {
            if saved != controller.lang {
                controller.switch_language(saved);
            }
        }
        controller
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn active_filters(&self) -> &BTreeSet<String> {
        &self.active_filters
    }

    /// The dispatch table: named event in, state transition + re-render out.
    pub fn dispatch(&mut self, event: Event) {
        match event {
            Event::ToggleLanguage => self.switch_language(self.lang.toggled()),
            Event::SetLanguage(lang) => self.switch_language(lang),
            Event::SkillToggled(label) => self.toggle_skill(&label),
            Event::CategorySelected(key) => self.select_category(&key),
            Event::DetailToggled(index) => self.toggle_detail(index),
            Event::Scrolled(offset) => {
                self.page.header_compact = effects::header_compact(offset);
            }
        }
    }

    /// Mark elements as seen (fade-in) — fed by the frontend's
    /// intersection watcher. The flag is permanent on the current subtree.
    pub fn mark_seen(&mut self, keys: &[ElementKey]) {
        for key in keys {
            match *key {
                ElementKey::Competency(i) => {
                    if let Some(block) = self.page.competencies.get_mut(i) {
                        block.seen = true;
                    }
                }
                ElementKey::Timeline(i) => {
                    if let Some(entry) = self.page.timeline.get_mut(i) {
                        entry.seen = true;
                    }
                }
                ElementKey::Metric(i) => {
                    if let Some(card) = self.page.metrics.get_mut(i) {
                        card.seen = true;
                    }
                }
                ElementKey::Portfolio(i) => {
                    if let Some(card) = self.page.portfolio.get_mut(i) {
                        card.seen = true;
                    }
                }
            }
        }
    }

    /// Fade-in candidates of the current page, in layout order.
    pub fn fade_candidates(&self) -> Vec<ElementKey> {
        let mut keys = Vec::new();
        keys.extend((0..self.page.competencies.len()).map(ElementKey::Competency));
        keys.extend((0..self.page.timeline.len()).map(ElementKey::Timeline));
        keys.extend((0..self.page.metrics.len()).map(ElementKey::Metric));
        keys.extend((0..self.page.portfolio.len()).map(ElementKey::Portfolio));
        keys
    }

    /// Switch language: persist the code, update the selector indicator,
    /// and fully re-render. The rebuilt subtrees drop transient visual
    /// state; the tag-filter set survives in controller state but is not
    /// re-applied to visibility until the next filter event.
    fn switch_language(&mut self, lang: Lang) {
        self.lang = lang;
        if let Err(err) = self.prefs.write(lang) {
            eprintln!(
                "{} could not persist language preference: {:#}",
                "warning:".yellow().bold(),
                err
            );
        }
        self.render();
    }

    fn render(&mut self) {
        render::render(&mut self.page, &self.store, self.lang, &self.active_filters);
    }

    fn toggle_skill(&mut self, label: &str) {
        let key = label.to_lowercase();
        if !self.active_filters.remove(&key) {
            self.active_filters.insert(key);
        }

        // Tag filtering resets the category selection to "all".
        for button in &mut self.page.filters {
            button.active = button.key == "all";
        }
        for block in &mut self.page.competencies {
            for tag in &mut block.tags {
                tag.active = self.active_filters.contains(&tag.label.to_lowercase());
            }
        }
        filter::apply_tag_filters(&mut self.page, &self.active_filters);
    }

    fn select_category(&mut self, key: &str) {
        // Category selection clears the tag set.
        self.active_filters.clear();
        for block in &mut self.page.competencies {
            for tag in &mut block.tags {
                tag.active = false;
            }
        }
        filter::apply_tag_filters(&mut self.page, &self.active_filters);
        filter::apply_category(&mut self.page, key);
    }

    fn toggle_detail(&mut self, index: usize) {
        let lang = self.lang;
        if let Some(entry) = self.page.timeline.get_mut(index) {
            entry.expanded = !entry.expanded;
            let key = if entry.expanded { "timeline.hide" } else { "timeline.show" };
            entry.toggle_label = t(lang, key).to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LanguagePack;
    use serde_json::json;
    use tempfile::tempdir;

    fn sample_store() -> ContentStore {
        let mut store = ContentStore::default();
        store
            .insert_pack(
                Lang::Fr,
                LanguagePack::from_tree(json!({
                    "hero": { "name": "Pascale Rivard", "title": "Productrice" },
                    "competencies": { "categories": [
                        { "name": "Production", "skills": ["Vidéo", "Montage"] }
                    ] },
                    "experience": { "positions": [ {
                        "company": "Studio Borée", "title": "Directrice",
                        "period": "2015 — 2022", "description": "d",
                        "tags": ["Vidéo"], "achievements": ["x"]
                    }, {
                        "company": "Agence Nord", "title": "Chargée de projet",
                        "period": "2010 — 2015", "description": "d",
                        "tags": ["Rédaction"], "achievements": ["y"]
                    } ] },
                    "portfolioSection": { "categories": { "video": "Vidéo" } }
                }))
                .unwrap(),
            );
        store.insert_pack(
            Lang::En,
            LanguagePack::from_tree(json!({
                "hero": { "name": "Pascale Rivard", "title": "Producer" },
                "competencies": { "categories": [
                    { "name": "Production", "skills": ["Vidéo", "Montage"] }
                ] },
                "experience": { "positions": [ {
                    "company": "Studio Borée", "title": "Head of production",
                    "period": "2015 — 2022", "description": "d",
                    "tags": ["Vidéo"], "achievements": ["x"]
                }, {
                    "company": "Agence Nord", "title": "Project lead",
                    "period": "2010 — 2015", "description": "d",
                    "tags": ["Rédaction"], "achievements": ["y"]
                } ] },
                "portfolioSection": { "categories": { "video": "Video" } }
            }))
            .unwrap(),
        );
        store.set_catalog(
            serde_json::from_value(json!({ "items": [
                { "category": "video", "type": "doc", "title": "Clip",
                  "tags": ["vidéo"] },
                { "category": "web", "type": "site", "title": "Refonte",
                  "tags": ["seo"] }
            ] }))
            .unwrap(),
        );
        store
    }

    fn controller() -> (PageController, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let prefs = PrefStore::new(dir.path().join("prefs.json"));
        (PageController::new(sample_store(), prefs), dir)
    }

    #[test]
    fn boots_in_french_without_a_preference() {
        let (controller, _dir) = controller();
        assert_eq!(controller.lang(), Lang::Fr);
        assert_eq!(controller.page.bound_text("hero.title"), Some("Productrice"));
    }

    #[test]
    fn startup_applies_a_differing_persisted_preference() {
        let dir = tempdir().unwrap();
        let prefs = PrefStore::new(dir.path().join("prefs.json"));
        prefs.write(Lang::En).unwrap();

        let controller = PageController::new(sample_store(), prefs);
        assert_eq!(controller.lang(), Lang::En);
        assert_eq!(controller.page.bound_text("hero.title"), Some("Producer"));
    }

    #[test]
    fn double_switch_restores_every_rendered_text() {
        let (mut controller, _dir) = controller();
        let before_bound: Vec<String> = controller
            .page
            .bound
            .iter()
            .map(|f| f.text.clone())
            .collect();
        let before_titles: Vec<String> = controller
            .page
            .timeline
            .iter()
            .map(|e| e.title.clone())
            .collect();

        controller.dispatch(Event::ToggleLanguage);
        assert_eq!(controller.lang(), Lang::En);
        controller.dispatch(Event::ToggleLanguage);
        assert_eq!(controller.lang(), Lang::Fr);

        let after_bound: Vec<String> = controller
            .page
            .bound
            .iter()
            .map(|f| f.text.clone())
            .collect();
        let after_titles: Vec<String> = controller
            .page
            .timeline
            .iter()
            .map(|e| e.title.clone())
            .collect();
        assert_eq!(before_bound, after_bound);
        assert_eq!(before_titles, after_titles);
    }

    #[test]
    fn switch_persists_the_preference() {
        let (mut controller, dir) = controller();
        controller.dispatch(Event::ToggleLanguage);

        let prefs = PrefStore::new(dir.path().join("prefs.json"));
        assert_eq!(prefs.read(), Some(Lang::En));
    }

    #[test]
    fn detail_toggle_twice_restores_collapsed_state_and_label() {
        let (mut controller, _dir) = controller();
        let original = controller.page.timeline[0].toggle_label.clone();

        controller.dispatch(Event::DetailToggled(0));
        assert!(controller.page.timeline[0].expanded);
        assert_eq!(controller.page.timeline[0].toggle_label, "Masquer Détails");

        controller.dispatch(Event::DetailToggled(0));
        assert!(!controller.page.timeline[0].expanded);
        assert_eq!(controller.page.timeline[0].toggle_label, original);
    }

    #[test]
    fn skill_toggle_narrows_then_releases() {
        let (mut controller, _dir) = controller();

        controller.dispatch(Event::SkillToggled("Vidéo".to_string()));
        assert!(controller.active_filters().contains("vidéo"));
        assert!(controller.page.timeline[0].shown);
        assert!(!controller.page.timeline[1].shown);
        assert!(!controller.page.portfolio[0].hidden);
        assert!(controller.page.portfolio[1].hidden);

        controller.dispatch(Event::SkillToggled("Vidéo".to_string()));
        assert!(controller.active_filters().is_empty());
        assert!(controller.page.timeline.iter().all(|e| e.shown));
        assert!(controller.page.portfolio.iter().all(|c| !c.hidden));
    }

    #[test]
    fn category_selection_clears_the_tag_set() {
        let (mut controller, _dir) = controller();
        controller.dispatch(Event::SkillToggled("Vidéo".to_string()));
        assert!(!controller.active_filters().is_empty());

        controller.dispatch(Event::CategorySelected("web".to_string()));
        assert!(controller.active_filters().is_empty());
        assert!(controller.page.portfolio[0].hidden, "video card hidden");
        assert!(!controller.page.portfolio[1].hidden, "web card shown");
        // the timeline is untouched by the category filter
        assert!(controller.page.timeline.iter().all(|e| e.shown));
    }

    #[test]
    fn skill_toggle_snaps_category_back_to_all() {
        let (mut controller, _dir) = controller();
        controller.dispatch(Event::CategorySelected("web".to_string()));

        controller.dispatch(Event::SkillToggled("seo".to_string()));
        let active: Vec<&str> = controller
            .page
            .filters
            .iter()
            .filter(|b| b.active)
            .map(|b| b.key.as_str())
            .collect();
        assert_eq!(active, vec!["all"]);
    }

    #[test]
    fn filter_set_survives_a_language_switch() {
        let (mut controller, _dir) = controller();
        controller.dispatch(Event::SkillToggled("Vidéo".to_string()));
        controller.dispatch(Event::ToggleLanguage);

        assert!(controller.active_filters().contains("vidéo"));
        // rebuilt tags reflect the surviving set
        let tag = &controller.page.competencies[0].tags[0];
        assert_eq!(tag.label, "Vidéo");
        assert!(tag.active);
        // visibility is rebuilt fresh and not re-filtered until next event
        assert!(controller.page.portfolio.iter().all(|c| !c.hidden));
    }

    #[test]
    fn scroll_drives_header_compaction() {
        let (mut controller, _dir) = controller();
        controller.dispatch(Event::Scrolled(80));
        assert!(controller.page.header_compact);
        controller.dispatch(Event::Scrolled(10));
        assert!(!controller.page.header_compact);
    }

    #[test]
    fn mark_seen_is_permanent_on_the_subtree() {
        let (mut controller, _dir) = controller();
        let keys = controller.fade_candidates();
        assert!(keys.contains(&ElementKey::Timeline(1)));

        controller.mark_seen(&[ElementKey::Timeline(1), ElementKey::Portfolio(0)]);
        assert!(controller.page.timeline[1].seen);
        assert!(controller.page.portfolio[0].seen);
        assert!(!controller.page.timeline[0].seen);
    }
}
