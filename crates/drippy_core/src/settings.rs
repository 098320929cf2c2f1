//! Settings snapshots

use serde::{Deserialize, Serialize};

/// The six user-configurable values in effect at one instant.
///
/// A snapshot never changes after construction; committing new settings
/// always replaces the whole value. No range validation happens here —
/// callers are responsible for keeping `gui_scale` at 1 or above and the
/// volumes inside [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SettingsSnapshot {
    pub gui_scale: i32,
    pub difficulty: i32,
    pub undecorated: bool,
    pub music_volume: f32,
    pub sfx_volume: f32,
    pub ui_volume: f32,
}

impl SettingsSnapshot {
    pub fn new(
        gui_scale: i32,
        difficulty: i32,
        undecorated: bool,
        music_volume: f32,
        sfx_volume: f32,
        ui_volume: f32,
    ) -> Self {
        Self {
            gui_scale,
            difficulty,
            undecorated,
            music_volume,
            sfx_volume,
            ui_volume,
        }
    }
}

impl Default for SettingsSnapshot {
    fn default() -> Self {
        Self {
            gui_scale: 1,
            difficulty: 1,
            undecorated: false,
            music_volume: 0.8,
            sfx_volume: 0.8,
            ui_volume: 0.8,
        }
    }
}
