// SPDX-License-Identifier: MIT

//! Durable single-key preference storage.
//!
//! The only thing vitrine persists is the preferred language, read once at
//! startup and written on every switch. A missing or corrupt file is
//! treated as "no preference" — never an error surfaced to the user.

use crate::i18n::Lang;
use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
struct PrefFile {
    #[serde(rename = "preferred-language")]
    preferred_language: String,
    #[serde(default)]
    updated_at: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PrefStore {
    path: PathBuf,
}

impl PrefStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `$HOME/.vitrine/prefs.json`, falling back to the
    /// working directory when no home directory is available.
    pub fn default_path() -> PathBuf {
        match env::var_os("HOME") {
            Some(home) => Path::new(&home).join(".vitrine").join("prefs.json"),
            None => PathBuf::from(".vitrine-prefs.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted language, if any. Missing files, unreadable
    /// JSON, and unknown codes all yield `None`.
    pub fn read(&self) -> Option<Lang> {
        let text = fs::read_to_string(&self.path).ok()?;
        let pref: PrefFile = serde_json::from_str(&text).ok()?;
        Lang::from_code(&pref.preferred_language)
    }

    /// Persist the language, creating parent directories as needed.
    pub fn write(&self, lang: Lang) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        let pref = PrefFile {
            preferred_language: lang.code().to_string(),
            updated_at: Some(Utc::now().to_rfc3339()),
        };
        let payload = serde_json::to_string_pretty(&pref)?;
        fs::write(&self.path, payload)
            .with_context(|| format!("writing {}", self.path.display()))
    }
}
