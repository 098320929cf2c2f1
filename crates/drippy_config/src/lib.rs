//! Drippy Spelunk Config
//!
//! Sectioned key/value persistence for user preferences. Values are stored
//! as strings; typed reads parse on the way out and fall back to a caller
//! default, so reads never fail. Writes persist immediately and surface
//! I/O errors to the caller.

mod error;
mod file;
mod memory;

pub use error::ConfigError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// A sectioned key/value store.
///
/// This is the seam the title screen is injected with: the game talks to
/// the trait, tests swap in [`MemoryStore`] or a failing stub, and the
/// shipped binary uses [`FileStore`].
pub trait ConfigStore {
    /// Raw string value, if the key is present.
    fn raw(&self, section: &str, key: &str) -> Option<&str>;

    /// Store a value and persist it. Partial persistence is possible when a
    /// caller issues several writes and one fails; each write stands alone.
    fn set_value(&mut self, section: &str, key: &str, value: &str) -> Result<(), ConfigError>;

    fn get_int(&self, section: &str, key: &str, default: i32) -> i32 {
        self.raw(section, key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.raw(section, key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    fn get_float(&self, section: &str, key: &str, default: f32) -> f32 {
        self.raw(section, key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_reads_parse_and_fall_back() {
        let mut store = MemoryStore::new();
        store.set_value("scene", "gui_scale", "3").unwrap();
        store.set_value("scene", "undecorated", "true").unwrap();
        store.set_value("audio", "music", "0.25").unwrap();
        store.set_value("audio", "sfx", "not a number").unwrap();

        assert_eq!(store.get_int("scene", "gui_scale", 1), 3);
        assert!(store.get_bool("scene", "undecorated", false));
        assert_eq!(store.get_float("audio", "music", 0.8), 0.25);

        // Unparsable and absent keys both yield the caller's default
        assert_eq!(store.get_float("audio", "sfx", 0.8), 0.8);
        assert_eq!(store.get_float("audio", "ui", 0.8), 0.8);
        assert_eq!(store.get_int("scene", "difficulty", 1), 1);
    }
}
