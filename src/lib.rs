// SPDX-License-Identifier: MIT

//! vitrine — an interactive bilingual CV & portfolio for the terminal.
//!
//! The page is a single controller over three static JSON documents: two
//! localized content trees (fr/en) and one language-independent portfolio
//! catalog. Content is loaded once at startup, projected into a typed page
//! model, and mutated only through named interaction events:
//!
//! 1. **Controller**: owns session state (language, tag-filter set) and a
//!    dispatch table of event → state transition + re-render.
//! 2. **Renderer**: rebuilds page subtrees wholesale from the current
//!    language's document — no diffing, so stale element state cannot
//!    survive a rebuild.
//! 3. **Effects**: scroll-driven header compaction and a one-shot
//!    intersection watcher for fade-in.

pub mod content;
pub mod controller;
pub mod effects;
pub mod filter;
pub mod i18n;
pub mod page;
pub mod prefs;
pub mod render;
pub mod tui;
pub mod types;
