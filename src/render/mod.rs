// SPDX-License-Identifier: MIT

//! Page rendering: projects the current language's content document and
//! the portfolio catalog into the page model.
//!
//! Each call rebuilds the dynamic sections wholesale ("render replaces
//! subtree"). The only state carried across a rebuild lives in the
//! controller — notably the active tag-filter set, which is re-applied to
//! skill-tag `active` flags so the selector survives a language switch.

pub mod text;
pub mod video;

use crate::i18n::{t, Lang};
use crate::page::{
    CardLink, CompetencyBlock, FilterButton, MetricCard, Page, PortfolioCard, SkillTag,
    TimelineEntry,
};
use crate::types::{
    Achievements, Competencies, ContentDocument, ContentStore, Experience, PortfolioCatalog,
};
use serde_json::Value;
use std::collections::BTreeSet;

/// Full-page render against the store's document for `lang`.
///
/// Guards on presence at every level: a missing pack leaves the whole page
/// untouched (matching the source's early return), a missing section
/// leaves that section's prior markup in place.
pub fn render(page: &mut Page, store: &ContentStore, lang: Lang, active_filters: &BTreeSet<String>) {
    page.lang = lang;
    for opt in &mut page.lang_options {
        opt.active = opt.lang == lang;
    }

    let Some(pack) = store.pack(lang) else {
        return;
    };

    bind_fields(page, &pack.tree);

    if let Some(competencies) = &pack.doc.competencies {
        page.competencies = build_competencies(competencies, active_filters);
    }
    if let Some(experience) = &pack.doc.experience {
        page.timeline = build_timeline(experience, lang);
    }
    if let Some(achievements) = &pack.doc.achievements {
        page.metrics = build_metrics(achievements);
    }
    if let Some(catalog) = store.catalog() {
        page.filters = build_filter_buttons(catalog, &pack.doc, lang);
        page.portfolio = build_cards(catalog, lang);
    }
}

/// Resolve a dot-separated path against a JSON tree, yielding the string
/// value at the leaf or `None` anywhere along the way.
pub fn resolve_path<'a>(tree: &'a Value, path: &str) -> Option<&'a str> {
    let mut current = tree;
    for part in path.split('.') {
        current = current.get(part)?;
    }
    current.as_str()
}

/// Generic field binding: a resolvable path overwrites the field text, a
/// missing path leaves the prior text untouched (no clearing).
fn bind_fields(page: &mut Page, tree: &Value) {
    for field in &mut page.bound {
        if let Some(value) = resolve_path(tree, field.path) {
            field.text = value.to_string();
        }
    }
}

fn build_competencies(data: &Competencies, active_filters: &BTreeSet<String>) -> Vec<CompetencyBlock> {
    data.categories
        .iter()
        .map(|category| CompetencyBlock {
            name: category.name.clone(),
            tags: category
                .skills
                .iter()
                .map(|skill| SkillTag {
                    active: active_filters.contains(&skill.to_lowercase()),
                    label: skill.clone(),
                })
                .collect(),
            seen: false,
        })
        .collect()
}

fn build_timeline(data: &Experience, lang: Lang) -> Vec<TimelineEntry> {
    data.positions
        .iter()
        .enumerate()
        .map(|(index, position)| TimelineEntry {
            index,
            company: position.company.clone(),
            title: position.title.clone(),
            period: position.period.clone(),
            description: position.description.clone(),
            tags: position.tags.clone().unwrap_or_default(),
            achievements: position.achievements.clone(),
            expanded: false,
            toggle_label: t(lang, "timeline.show").to_string(),
            shown: true,
            seen: false,
        })
        .collect()
}

fn build_metrics(data: &Achievements) -> Vec<MetricCard> {
    data.metrics
        .iter()
        .map(|metric| MetricCard {
            value: metric.value.clone(),
            label: metric.label.clone(),
            seen: false,
        })
        .collect()
}

/// One filter button per distinct catalog category (first-seen order),
/// appended after the fixed "all" button. Labels come from the current
/// language's category map, falling back to the raw key.
fn build_filter_buttons(
    catalog: &PortfolioCatalog,
    doc: &ContentDocument,
    lang: Lang,
) -> Vec<FilterButton> {
    let labels = doc.portfolio_section.as_ref().map(|section| &section.categories);
    let mut buttons = vec![FilterButton {
        key: "all".to_string(),
        label: t(lang, "filter.all").to_string(),
        active: true,
    }];
    for category in catalog.distinct_categories() {
        let label = labels
            .and_then(|map| map.get(category))
            .map(String::as_str)
            .unwrap_or(category);
        buttons.push(FilterButton {
            key: category.to_string(),
            label: label.to_string(),
            active: false,
        });
    }
    buttons
}

fn build_cards(catalog: &PortfolioCatalog, lang: Lang) -> Vec<PortfolioCard> {
    catalog
        .items
        .iter()
        .map(|item| PortfolioCard {
            category: item.category.clone(),
            kind: item.kind.clone(),
            platform: item.platform.clone(),
            year: item.year,
            title: item.title_for(lang).to_string(),
            description: item.description_for(lang).to_string(),
            tags: item.tags.clone(),
            link: if item.has_url() {
                CardLink::Url(item.url.clone())
            } else {
                CardLink::ComingSoon(t(lang, "portfolio.coming_soon").to_string())
            },
            thumbnail: video::thumbnail_for(item),
            hidden: false,
            seen: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LanguagePack;
    use serde_json::json;

    fn store_with(fr: Value, en: Value, portfolio: Value) -> ContentStore {
        let mut store = ContentStore::default();
        store.insert_pack(Lang::Fr, LanguagePack::from_tree(fr).unwrap());
        store.insert_pack(Lang::En, LanguagePack::from_tree(en).unwrap());
        store.set_catalog(serde_json::from_value(portfolio).unwrap());
        store
    }

    fn sample_store() -> ContentStore {
        store_with(
            json!({
                "hero": { "name": "Pascale Rivard", "title": "Productrice multimédia" },
                "portfolioSection": {
                    "title": "Portfolio",
                    "categories": { "video": "Vidéo", "web": "Web" }
                },
                "experience": { "positions": [ {
                    "company": "Studio Borée",
                    "title": "Directrice de production",
                    "period": "2015 — 2022",
                    "description": "Production vidéo et campagnes web.",
                    "tags": ["Vidéo", "Gestion"],
                    "achievements": ["30 capsules livrées"]
                } ] }
            }),
            json!({
                "hero": { "name": "Pascale Rivard", "title": "Multimedia producer" },
                "portfolioSection": {
                    "title": "Portfolio",
                    "categories": { "video": "Video" }
                },
                "experience": { "positions": [ {
                    "company": "Studio Borée",
                    "title": "Head of production",
                    "period": "2015 — 2022",
                    "description": "Video production and web campaigns.",
                    "tags": ["Video", "Management"],
                    "achievements": ["Delivered 30 shorts"]
                } ] }
            }),
            json!({ "items": [
                {
                    "category": "video", "type": "Documentaire", "platform": "YouTube",
                    "year": 2021, "title": "Portrait", "titleEn": "Portrait (EN)",
                    "description": "Desc FR",
                    "url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
                    "tags": ["vidéo"]
                },
                {
                    "category": "web", "type": "Site", "platform": "Web",
                    "title": "Refonte", "description": "Desc FR seulement",
                    "url": "", "tags": ["web"]
                }
            ] }),
        )
    }

    #[test]
    fn binds_template_fields_and_leaves_missing_paths_untouched() {
        let store = sample_store();
        let mut page = Page::new();
        render(&mut page, &store, Lang::Fr, &BTreeSet::new());

        assert_eq!(page.bound_text("hero.name"), Some("Pascale Rivard"));
        assert_eq!(page.bound_text("hero.title"), Some("Productrice multimédia"));
        // no about.text in the document: prior (empty) text untouched
        assert_eq!(page.bound_text("about.text"), Some(""));
    }

    #[test]
    fn missing_pack_leaves_page_untouched() {
        let store = ContentStore::default();
        let mut page = Page::new();
        page.bound[0].text = "prior".to_string();
        render(&mut page, &store, Lang::Fr, &BTreeSet::new());
        assert_eq!(page.bound[0].text, "prior");
        assert!(page.timeline.is_empty());
    }

    #[test]
    fn filter_buttons_follow_first_seen_order_with_label_fallback() {
        let store = sample_store();
        let mut page = Page::new();
        render(&mut page, &store, Lang::En, &BTreeSet::new());

        let keys: Vec<&str> = page.filters.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, vec!["all", "video", "web"]);
        assert!(page.filters[0].active);
        assert_eq!(page.filters[0].label, "All");
        assert_eq!(page.filters[1].label, "Video");
        // "web" missing from the English category map: raw key fallback
        assert_eq!(page.filters[2].label, "web");
    }

    #[test]
    fn cards_localize_with_french_fallback() {
        let store = sample_store();
        let mut page = Page::new();
        render(&mut page, &store, Lang::En, &BTreeSet::new());

        assert_eq!(page.portfolio[0].title, "Portrait (EN)");
        // descriptionEn absent: primary-language string
        assert_eq!(page.portfolio[0].description, "Desc FR");
        assert!(matches!(page.portfolio[0].link, CardLink::Url(_)));
        assert!(page.portfolio[0].thumbnail.is_some());

        match &page.portfolio[1].link {
            CardLink::ComingSoon(label) => assert_eq!(label, "URL coming soon"),
            other => panic!("expected placeholder, got {other:?}"),
        }
        assert!(page.portfolio[1].thumbnail.is_none());
    }

    #[test]
    fn timeline_boots_collapsed_with_localized_toggle() {
        let store = sample_store();
        let mut page = Page::new();
        render(&mut page, &store, Lang::Fr, &BTreeSet::new());

        let entry = &page.timeline[0];
        assert_eq!(entry.index, 0);
        assert!(!entry.expanded);
        assert!(entry.shown);
        assert_eq!(entry.toggle_label, "Voir Détails");
    }

    #[test]
    fn rebuild_restores_active_flags_from_filter_set() {
        let mut store = sample_store();
        let fr = json!({
            "competencies": { "categories": [
                { "name": "Production", "skills": ["Vidéo", "Montage"] }
            ] }
        });
        store.insert_pack(Lang::Fr, LanguagePack::from_tree(fr).unwrap());

        let mut filters = BTreeSet::new();
        filters.insert("vidéo".to_string());

        let mut page = Page::new();
        render(&mut page, &store, Lang::Fr, &filters);
        let tags = &page.competencies[0].tags;
        assert!(tags[0].active);
        assert!(!tags[1].active);
    }

    #[test]
    fn resolve_path_walks_nested_objects_only() {
        let tree = json!({ "a": { "b": { "c": "leaf" } }, "n": 7 });
        assert_eq!(resolve_path(&tree, "a.b.c"), Some("leaf"));
        assert_eq!(resolve_path(&tree, "a.b.missing"), None);
        assert_eq!(resolve_path(&tree, "n"), None, "non-string leaf");
    }
}
