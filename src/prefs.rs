//! Preference persistence and the theme manager
//!
//! The theme flag lives behind an injected key-value store: read once at
//! startup, written through a single apply-and-persist path on change.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Key the theme flag is stored under
pub const THEME_KEY: &str = "theme";

/// Light/dark presentation preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Preference persistence errors
#[derive(Debug, Clone, PartialEq)]
pub enum PreferenceError {
    /// Store file I/O error
    Io { message: String },
    /// Store (de)serialization error
    Serialization { message: String },
}

impl fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceError::Io { message } => write!(f, "Preference I/O error: {}", message),
            PreferenceError::Serialization { message } => {
                write!(f, "Preference serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for PreferenceError {}

/// Result type for preference operations
pub type PreferenceResult<T> = Result<T, PreferenceError>;

/// Key-value persistence for user preferences
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> PreferenceResult<()>;
}

/// Volatile in-memory store for tests and platforms without persistence
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, for seeding test fixtures
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> PreferenceResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON-file-backed store. The whole map is rewritten on every set; a
/// missing file reads as an empty store.
pub struct JsonFilePreferenceStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl JsonFilePreferenceStore {
    pub fn open<P: AsRef<Path>>(path: P) -> PreferenceResult<Self> {
        let path = path.as_ref().to_path_buf();

        let values = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| PreferenceError::Io {
                message: format!("Failed to read preference file '{}': {}", path.display(), e),
            })?;

            serde_json::from_str(&content).map_err(|e| PreferenceError::Serialization {
                message: format!("Failed to parse preference file '{}': {}", path.display(), e),
            })?
        } else {
            HashMap::new()
        };

        Ok(Self { path, values })
    }

    fn persist(&self) -> PreferenceResult<()> {
        let content =
            serde_json::to_string_pretty(&self.values).map_err(|e| {
                PreferenceError::Serialization {
                    message: format!("Failed to serialize preferences: {}", e),
                }
            })?;

        fs::write(&self.path, content).map_err(|e| PreferenceError::Io {
            message: format!(
                "Failed to write preference file '{}': {}",
                self.path.display(),
                e
            ),
        })
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> PreferenceResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

/// Owns the current theme and its persistence
pub struct ThemeManager {
    store: Box<dyn PreferenceStore>,
    current: Theme,
}

impl ThemeManager {
    /// Read the stored preference once; fall back to the platform hint
    /// when nothing usable is stored.
    pub fn new(store: Box<dyn PreferenceStore>, system_preference: Theme) -> Self {
        let current = store
            .get(THEME_KEY)
            .and_then(|value| Theme::parse(&value))
            .unwrap_or(system_preference);

        Self { store, current }
    }

    pub fn theme(&self) -> Theme {
        self.current
    }

    /// Apply and persist a theme
    pub fn set_theme(&mut self, theme: Theme) -> PreferenceResult<()> {
        self.current = theme;
        self.store.set(THEME_KEY, theme.as_str())
    }

    /// Switch to the opposite theme, persisting the change
    pub fn toggle(&mut self) -> PreferenceResult<Theme> {
        let next = self.current.toggled();
        self.set_theme(next)?;
        Ok(next)
    }
}
