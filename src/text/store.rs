//! External string stores backing [`ResourceText`](super::ResourceText).

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::Culture;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error("required resource file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read resource file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse resource file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to parse resources: {0}")]
    Syntax(#[from] toml::de::Error),

    #[error("invalid culture code '{0}'")]
    InvalidCulture(String),

    #[error("no resource '{key}' for culture '{culture}'")]
    MissingResource { culture: String, key: String },
}

/// Looks up a named string for a culture code.
///
/// Culture fallback is the store's concern.
pub trait StringStore: fmt::Debug + Send + Sync {
    fn lookup(&self, culture: &str, key: &str) -> Result<String, StoreError>;
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Entry {
    Text(String),
    Culture(HashMap<String, String>),
}

/// A string store loaded from a TOML resource file.
///
/// Top-level string keys are neutral entries used when no culture matches.
/// Each table holds the entries of one culture code:
///
/// ```toml
/// Port = "Port to listen on"
///
/// [fr]
/// Port = "Port d'écoute"
///
/// [fr-CA]
/// Port = "Port d'écoute (Canada)"
/// ```
///
/// Lookups try the exact culture, then its language, then the neutral entries.
#[derive(Debug, Clone, Default)]
pub struct TomlStringStore {
    neutral: HashMap<String, String>,
    cultures: HashMap<String, HashMap<String, String>>,
}

impl TomlStringStore {
    /// Loads a resource file.
    ///
    /// If `required` is false, a missing file yields an empty store.
    pub fn load(path: impl AsRef<Path>, required: bool) -> Result<Self, StoreError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_entries(toml::from_str(&contents).map_err(|e| {
                StoreError::ParseError {
                    path: path.to_path_buf(),
                    source: e,
                }
            })?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if required {
                    Err(StoreError::FileNotFound(path.to_path_buf()))
                } else {
                    Ok(Self::default())
                }
            }
            Err(e) => Err(StoreError::ReadError {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Parses resources from a TOML string.
    pub fn from_toml_str(contents: &str) -> Result<Self, StoreError> {
        Self::from_entries(toml::from_str(contents)?)
    }

    fn from_entries(entries: HashMap<String, Entry>) -> Result<Self, StoreError> {
        let mut store = Self::default();
        for (key, entry) in entries {
            match entry {
                Entry::Text(text) => {
                    store.neutral.insert(key, text);
                }
                Entry::Culture(table) => {
                    let culture =
                        Culture::new(&key).map_err(|_| StoreError::InvalidCulture(key.clone()))?;
                    store
                        .cultures
                        .entry(culture.name().to_string())
                        .or_default()
                        .extend(table);
                }
            }
        }
        Ok(store)
    }

    /// Whether the store holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.neutral.is_empty() && self.cultures.is_empty()
    }
}

impl StringStore for TomlStringStore {
    fn lookup(&self, culture: &str, key: &str) -> Result<String, StoreError> {
        let missing = || StoreError::MissingResource {
            culture: culture.to_string(),
            key: key.to_string(),
        };
        let culture = Culture::new(culture).map_err(|_| StoreError::InvalidCulture(culture.into()))?;

        let specific = self.cultures.get(culture.name());
        let language = culture
            .parent()
            .and_then(|parent| self.cultures.get(parent.name()));

        [specific, language, Some(&self.neutral)]
            .into_iter()
            .flatten()
            .find_map(|table| table.get(key))
            .cloned()
            .ok_or_else(missing)
    }
}
