//! # Preferences
//!
//! A tiny persistent key-value store at `~/.salesboard/preferences.json`.
//! Only the theme lives here today (`{"theme": "dark"}`).
//!
//! Writes use atomic rename (write `.tmp`, then `rename()`) for crash safety.
//! A missing or unreadable file is treated as empty.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{debug, warn};

pub const THEME_KEY: &str = "theme";

const DARK: &str = "dark";
const LIGHT: &str = "light";

pub struct Preferences {
    /// `None` keeps everything in memory (tests, or no home directory).
    path: Option<PathBuf>,
    values: Mutex<BTreeMap<String, String>>,
}

impl Preferences {
    /// Open (or lazily create) the preferences file at `path`.
    pub fn open(path: PathBuf) -> Self {
        let values = match read_values(&path) {
            Ok(values) => values,
            Err(e) => {
                warn!("Ignoring unreadable preferences at {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        debug!("Loaded {} preference(s) from {}", values.len(), path.display());
        Self {
            path: Some(path),
            values: Mutex::new(values),
        }
    }

    /// Preferences under `~/.salesboard/`, or in memory when there's no home.
    pub fn open_default() -> Self {
        match preferences_path() {
            Some(path) => Self::open(path),
            None => {
                warn!("Could not determine home directory, preferences will not persist");
                Self::in_memory()
            }
        }
    }

    pub fn in_memory() -> Self {
        Self {
            path: None,
            values: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    /// Set `key` and write the whole map through to disk.
    pub fn set(&self, key: &str, value: &str) -> io::Result<()> {
        let mut values = self.lock();
        values.insert(key.to_string(), value.to_string());
        match &self.path {
            Some(path) => atomic_write_json(path, &*values),
            None => Ok(()),
        }
    }

    /// The stored theme: `Some(true)` for dark, `Some(false)` for any other
    /// stored value, `None` when nothing was ever stored.
    pub fn load_theme(&self) -> Option<bool> {
        self.get(THEME_KEY).map(|value| value == DARK)
    }

    pub fn save_theme(&self, is_dark: bool) -> io::Result<()> {
        self.set(THEME_KEY, if is_dark { DARK } else { LIGHT })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        // A poisoned map is still a valid map.
        self.values.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Returns `~/.salesboard/preferences.json`.
pub fn preferences_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".salesboard").join("preferences.json"))
}

fn read_values(path: &Path) -> io::Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let json = fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn atomic_write_json(path: &Path, values: &BTreeMap<String, String>) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(values)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
