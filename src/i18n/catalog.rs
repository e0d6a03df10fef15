// SPDX-License-Identifier: MIT

//! Translation catalog for vitrine's UI chrome.
//!
//! Embeds the application-owned strings for both languages as compile-time
//! static tables. Lookup is O(n) on the key list, which is fine for the
//! dozen keys we have — this runs on toggle clicks and page rebuilds, not
//! in a hot loop.
//!
//! ## Adding a new key
//!
//! 1. Add the French entry to `FR`
//! 2. Add the English entry to `EN` (missing keys fall back to the other
//!    language's table)

use serde::{Deserialize, Serialize};

/// The two content locales of the CV.
///
/// Each variant maps to an ISO 639-1 two-letter code. The boot language is
/// French, matching the primary language of the content documents; English
/// strings carry per-item overrides in the portfolio catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Fr,
    En,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Fr => "fr",
            Lang::En => "en",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Returns `None` for unsupported codes. Case-sensitive (codes must be
    /// lowercase per ISO 639-1).
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "fr" => Some(Lang::Fr),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    /// The other language. The language selector is a two-state toggle.
    pub fn toggled(&self) -> Lang {
        match self {
            Lang::Fr => Lang::En,
            Lang::En => Lang::Fr,
        }
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::Fr, Lang::En]
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::Fr
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Look up a chrome string in the specified language.
///
/// Falls back to the other language if the key is missing, and returns `""`
/// for keys missing in both tables (fail-open — never panics, the caller
/// renders an empty label rather than crashing the page).
///
/// # Examples
///
/// ```
/// use vitrine::i18n::{t, Lang};
/// assert_eq!(t(Lang::En, "timeline.show"), "Show Details");
/// assert_eq!(t(Lang::Fr, "timeline.show"), "Voir Détails");
/// ```
pub fn t(lang: Lang, key: &str) -> &'static str {
    if let Some(value) = lookup(catalog_for(lang), key) {
        return value;
    }
    if let Some(value) = lookup(catalog_for(lang.toggled()), key) {
        return value;
    }
    ""
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    for &(k, v) in catalog {
        if k == key {
            return Some(v);
        }
    }
    None
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::Fr => FR,
        Lang::En => EN,
    }
}

const FR: &[(&str, &str)] = &[
    ("timeline.show", "Voir Détails"),
    ("timeline.hide", "Masquer Détails"),
    ("timeline.achievements", "Réalisations Clés :"),
    ("portfolio.coming_soon", "URL à venir"),
    ("portfolio.view", "Voir →"),
    ("filter.all", "Tous"),
    ("tui.controls", "[Tab] Sélection  [Entrée] Activer  [l] Langue  [↑↓] Défiler  [q] Quitter"),
];

const EN: &[(&str, &str)] = &[
    ("timeline.show", "Show Details"),
    ("timeline.hide", "Hide Details"),
    ("timeline.achievements", "Key Achievements:"),
    ("portfolio.coming_soon", "URL coming soon"),
    ("portfolio.view", "View →"),
    ("filter.all", "All"),
    ("tui.controls", "[Tab] Select  [Enter] Activate  [l] Language  [↑↓] Scroll  [q] Quit"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(Lang::Fr.toggled(), Lang::En);
        assert_eq!(Lang::En.toggled().toggled(), Lang::En);
    }

    #[test]
    fn codes_round_trip() {
        for &lang in Lang::all() {
            assert_eq!(Lang::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Lang::from_code("de"), None);
        assert_eq!(Lang::from_code("FR"), None, "codes are lowercase");
    }

    #[test]
    fn toggle_labels_are_localized() {
        assert_eq!(t(Lang::Fr, "timeline.hide"), "Masquer Détails");
        assert_eq!(t(Lang::En, "timeline.hide"), "Hide Details");
        assert_eq!(t(Lang::Fr, "portfolio.coming_soon"), "URL à venir");
        assert_eq!(t(Lang::En, "portfolio.coming_soon"), "URL coming soon");
    }

    #[test]
    fn missing_key_fails_open() {
        assert_eq!(t(Lang::Fr, "no.such.key"), "");
    }
}
