//! Abbreviation expansion lookup.
//!
//! The map is built once, before classification runs, and is read-only for
//! the lifetime of the page view. Keys match marker text exactly and
//! case-sensitively; values are trusted expansion markup inserted verbatim
//! into popups.
//!
//! Maps can be assembled in code, loaded from a file (TOML or JSON), or
//! derived from XDXF-style definition groups where several keys share one
//! expansion (see [`AbbrDef`]).

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Failure to load an abbreviation file.
#[derive(Debug, Error)]
pub enum AbbrLoadError {
    #[error("failed to read abbreviation file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed TOML abbreviation file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("malformed JSON abbreviation file: {0}")]
    Json(#[from] serde_json::Error),
}

/// One abbreviation definition group: several keys sharing one expansion.
///
/// Mirrors XDXF `<abbr_def>` blocks, where each `<abbr_k>` key maps to the
/// same `<abbr_v>` expansion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AbbrDef {
    pub keys: Vec<String>,
    pub expansion: String,
}

/// Immutable mapping from abbreviation display text to expansion markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbbrMap {
    entries: HashMap<String, String>,
}

/// On-disk TOML shape: a flat table plus optional definition groups.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AbbrFile {
    abbreviations: HashMap<String, String>,
    defs: Vec<AbbrDef>,
}

impl AbbrMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one entry. Later inserts for the same key win.
    pub fn insert(&mut self, key: impl Into<String>, expansion: impl Into<String>) {
        self.entries.insert(key.into(), expansion.into());
    }

    /// Whether `text` is a known abbreviation (exact, case-sensitive).
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains_key(text)
    }

    /// Expansion markup for `text`, if known.
    #[must_use]
    pub fn expansion(&self, text: &str) -> Option<&str> {
        self.entries.get(text).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a map from definition groups.
    ///
    /// Every key in a group maps to the group's expansion. Keys that are
    /// empty, and groups with an empty expansion, contribute nothing.
    #[must_use]
    pub fn from_defs(defs: &[AbbrDef]) -> Self {
        let mut map = Self::new();
        map.extend_from_defs(defs);
        map
    }

    fn extend_from_defs(&mut self, defs: &[AbbrDef]) {
        for def in defs {
            if def.expansion.is_empty() {
                continue;
            }
            for key in &def.keys {
                if !key.is_empty() {
                    self.insert(key.clone(), def.expansion.clone());
                }
            }
        }
    }

    /// Load a map from a TOML or JSON file, selected by file extension.
    ///
    /// TOML files hold a flat `[abbreviations]` table plus optional
    /// `[[defs]]` groups; JSON files hold a single object of key to
    /// expansion. `.json` selects JSON, anything else parses as TOML.
    pub fn load_from(path: &Path) -> Result<Self, AbbrLoadError> {
        let content = std::fs::read_to_string(path)?;
        let map = if path.extension().is_some_and(|ext| ext == "json") {
            let entries: HashMap<String, String> = serde_json::from_str(&content)?;
            Self { entries }
        } else {
            let file: AbbrFile = toml::from_str(&content)?;
            let mut map = Self {
                entries: file.abbreviations,
            };
            map.extend_from_defs(&file.defs);
            map
        };
        if map.is_empty() {
            log::warn!("abbreviation file {} defines no usable entries", path.display());
        }
        Ok(map)
    }
}

impl FromIterator<(String, String)> for AbbrMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
