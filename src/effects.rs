// SPDX-License-Identifier: MIT

//! Scroll-driven passive effects.
//!
//! Two independent behaviors, both stateless toward the rest of the app:
//! header compaction past a fixed scroll threshold, and one-shot fade-in
//! of page elements as they scroll into view. In the terminal frontend the
//! "viewport" is the visible line window and element positions are the
//! line spans produced by layout.

use std::time::Duration;

/// Scroll offset (in lines) past which the header compacts.
pub const HEADER_SCROLL_THRESHOLD: u64 = 50;

/// Fraction of an element that must be inside the viewport to count as
/// intersecting.
pub const FADE_VISIBILITY_RATIO: f64 = 0.1;

/// Bottom-margin bias: the effective viewport bottom is pulled up by this
/// many lines so elements trigger slightly before the literal edge.
pub const FADE_BOTTOM_MARGIN: u64 = 2;

/// Delay before elements are registered with the watcher, letting the
/// initial render settle first.
pub const OBSERVER_STARTUP_DELAY: Duration = Duration::from_millis(500);

/// Header compaction is a pure function of the scroll offset, evaluated on
/// every scroll event with no throttling.
pub fn header_compact(offset: u64) -> bool {
    offset > HEADER_SCROLL_THRESHOLD
}

/// Stable identity of a fade-in candidate across relayouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementKey {
    Competency(usize),
    Timeline(usize),
    Metric(usize),
    Portfolio(usize),
}

/// A laid-out element's vertical extent, in page lines.
#[derive(Debug, Clone, Copy)]
pub struct Span {
    pub top: u64,
    pub height: u64,
}

/// The visible line window.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub top: u64,
    pub height: u64,
}

/// One-shot intersection watcher: each registered element fires exactly
/// once, the first time it meets the visibility threshold, and is then
/// deregistered. Never re-triggers, even if the element scrolls away and
/// back.
#[derive(Debug, Default)]
pub struct IntersectionWatcher {
    pending: Vec<ElementKey>,
}

impl IntersectionWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register elements to watch. Duplicates are ignored.
    pub fn observe(&mut self, keys: impl IntoIterator<Item = ElementKey>) {
        for key in keys {
            if !self.pending.contains(&key) {
                self.pending.push(key);
            }
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Check every pending element against the viewport. Elements meeting
    /// the threshold are returned (in registration order) and deregistered.
    pub fn intersect(&mut self, viewport: Viewport, spans: &[(ElementKey, Span)]) -> Vec<ElementKey> {
        let mut fired = Vec::new();
        self.pending.retain(|key| {
            let hit = spans
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, span)| is_intersecting(*span, viewport))
                .unwrap_or(false);
            if hit {
                fired.push(*key);
            }
            !hit
        });
        fired
    }
}

fn is_intersecting(span: Span, viewport: Viewport) -> bool {
    let height = span.height.max(1);
    let span_bottom = span.top + height;
    // Bottom-margin bias shrinks the effective viewport.
    let view_bottom = (viewport.top + viewport.height).saturating_sub(FADE_BOTTOM_MARGIN);
    let overlap_top = span.top.max(viewport.top);
    let overlap_bottom = span_bottom.min(view_bottom);
    if overlap_bottom <= overlap_top {
        return false;
    }
    let overlap = (overlap_bottom - overlap_top) as f64;
    overlap / height as f64 >= FADE_VISIBILITY_RATIO
}
