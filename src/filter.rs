// SPDX-License-Identifier: MIT

//! The two filtering mechanisms over the page model.
//!
//! - **Category filter** (single-select, portfolio only): one button
//!   active at a time; "all" unhides everything, any other key hides the
//!   cards whose category differs.
//! - **Tag filter** (multi-select skill tags, portfolio + experience): an
//!   element stays visible iff one of its tags and one active filter
//!   satisfy bidirectional substring containment. An empty set shows
//!   everything.
//!
//! Both only flip visibility flags; they never rebuild sections. The
//! precedence between the two is decided in the controller.

use crate::page::Page;
use std::collections::BTreeSet;

/// Bidirectional substring containment: a lowercased tag matches a filter
/// when either contains the other. Deliberately looser than equality so
/// "vidéo corporative" matches the "vidéo" skill tag and vice versa.
pub fn tags_match(tags: &[String], filters: &BTreeSet<String>) -> bool {
    tags.iter().any(|tag| {
        let tag = tag.to_lowercase();
        filters
            .iter()
            .any(|filter| tag.contains(filter.as_str()) || filter.contains(&tag))
    })
}

/// Apply a single-select category filter. Activates the matching button,
/// deactivates the rest, and hides non-matching portfolio cards.
pub fn apply_category(page: &mut Page, key: &str) {
    for button in &mut page.filters {
        button.active = button.key == key;
    }
    for card in &mut page.portfolio {
        card.hidden = key != "all" && card.category != key;
    }
}

/// Apply the active tag-filter set to the timeline and the portfolio grid.
/// The empty set shows everything regardless of prior visibility.
pub fn apply_tag_filters(page: &mut Page, filters: &BTreeSet<String>) {
    if filters.is_empty() {
        for entry in &mut page.timeline {
            entry.shown = true;
        }
        for card in &mut page.portfolio {
            card.hidden = false;
        }
        return;
    }

    for entry in &mut page.timeline {
        entry.shown = tags_match(&entry.tags, filters);
    }
    for card in &mut page.portfolio {
        card.hidden = !tags_match(&card.tags, filters);
    }
}
