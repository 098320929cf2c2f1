//! TOML-file-backed store
//!
//! Layout mirrors the store's section/key shape directly:
//!
//! ```toml
//! [scene]
//! gui_scale = "2"
//!
//! [audio]
//! music = "0.8"
//! ```
//!
//! Values written by the game are strings. Hand-edited files may carry bare
//! ints/floats/bools; those are accepted on read and normalized to strings
//! on the next write. Unrecognized sections and keys survive a rewrite.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{env, fs};

use crate::{ConfigError, ConfigStore};

const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV: &str = "DRIPPY_CONFIG_DIR";

/// Write-through store persisted to a single TOML file.
pub struct FileStore {
    path: PathBuf,
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// Never fails: a missing file starts an empty store, and a file that
    /// doesn't parse is treated the same way (with a warning) rather than
    /// blocking startup.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let sections = match fs::read_to_string(&path) {
            Ok(contents) => parse_sections(&contents, &path),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "config file unreadable, starting empty");
                BTreeMap::new()
            }
        };
        Self { path, sections }
    }

    /// Per-user config location: `$DRIPPY_CONFIG_DIR/config.toml` if the
    /// variable is set, otherwise the platform config dir.
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
            let trimmed = dir.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed).join(CONFIG_FILE));
            }
        }
        Some(dirs::config_dir()?.join("drippy-spelunk").join(CONFIG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut root = toml::Table::new();
        for (section, keys) in &self.sections {
            let mut table = toml::Table::new();
            for (key, value) in keys {
                table.insert(key.clone(), toml::Value::String(value.clone()));
            }
            root.insert(section.clone(), toml::Value::Table(table));
        }

        fs::write(&self.path, root.to_string()).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl ConfigStore for FileStore {
    fn raw(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|keys| keys.get(key))
            .map(String::as_str)
    }

    fn set_value(&mut self, section: &str, key: &str, value: &str) -> Result<(), ConfigError> {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        self.save()
    }
}

fn parse_sections(contents: &str, path: &Path) -> BTreeMap<String, BTreeMap<String, String>> {
    let table: toml::Table = match contents.parse() {
        Ok(table) => table,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "config file corrupt, starting empty");
            return BTreeMap::new();
        }
    };

    let mut sections: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
    for (name, value) in table {
        let toml::Value::Table(keys) = value else {
            tracing::warn!(key = %name, "ignoring top-level config entry outside a section");
            continue;
        };
        let section = sections.entry(name).or_default();
        for (key, value) in keys {
            match value {
                toml::Value::String(s) => section.insert(key, s),
                toml::Value::Integer(i) => section.insert(key, i.to_string()),
                toml::Value::Float(f) => section.insert(key, f.to_string()),
                toml::Value::Boolean(b) => section.insert(key, b.to_string()),
                other => {
                    tracing::warn!(key = %key, kind = other.type_str(), "ignoring non-scalar config value");
                    None
                }
            };
        }
    }
    sections
}
