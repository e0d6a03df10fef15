// SPDX-License-Identifier: MIT

//! Internationalisation module for vitrine.
//!
//! The CV content itself ships as two localized JSON documents; this module
//! only covers the *chrome* — strings the application itself owns, such as
//! timeline toggle labels and the portfolio "coming soon" placeholder.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | fr   | French   | Français    |
//! | en   | English  | English     |
//!
//! ## Design
//!
//! Translation keys use dotted namespaces: `"timeline.show"`,
//! `"portfolio.coming_soon"`, `"filter.all"`. Lookups fall back to the
//! other language when a key is missing, and to `""` when it is missing
//! everywhere (fail-open, never panics).
//!
//! The catalog is embedded at compile time as static data — no file I/O,
//! no allocation during lookups.

mod catalog;

pub use catalog::{t, Lang};
