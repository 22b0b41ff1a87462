//! Persisted preference slots
//!
//! A tiny key/value surface, the moral equivalent of browser local storage.
//! The theme store uses exactly one key. Two backends are provided: an
//! in-memory map for tests and embedding, and a TOML file for the CLI.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

/// Errors from a preference backend
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse preferences: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, PreferenceError>;

/// A single-value-per-key preference backend
pub trait PreferenceStore {
    /// Read a value; absent keys and unreadable backends yield `None`
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value atomically
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory preferences
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with one key
    pub fn with(key: &str, value: &str) -> Self {
        let mut prefs = Self::new();
        prefs.values.insert(key.to_string(), value.to_string());
        prefs
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences stored in a TOML file on disk.
///
/// The file may hold more than folio's keys. Everything is kept as parsed
/// and written back untouched; only string values are visible through
/// [`PreferenceStore::get`].
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
    values: Table,
}

impl FilePreferences {
    /// Open the file at `path`. A missing file is an empty table; an
    /// unreadable or malformed one is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match Self::load(&path) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!("Ignoring preferences at {}: {}", path.display(), e);
                Table::new()
            }
        };
        Self { path, values }
    }

    /// Default location under the user's config directory
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio")
            .join("preferences.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<Table> {
        if !path.exists() {
            return Ok(Table::new());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    fn save(&self, values: &Table) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Write beside the target and rename so readers never see a torn file
        let content = toml::to_string_pretty(values)?;
        let tmp = self.path.with_extension("toml.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key)?.as_str().map(str::to_string)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.values.clone();
        next.insert(key.to_string(), Value::String(value.to_string()));
        self.save(&next)?;
        self.values = next;
        Ok(())
    }
}
