//! In-memory store for tests and headless runs

use std::collections::BTreeMap;

use crate::{ConfigError, ConfigStore};

/// Store that never touches disk. Writes always succeed.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryStore {
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
        Ok(())
    }
}
