//! Title-screen controller
//!
//! Bridges UI-entered settings and the persistent config store, holds the
//! transient character selection, and broadcasts committed changes to
//! whoever is listening (window wrapper, views).

use drippy_config::{ConfigError, ConfigStore};
use drippy_core::character::{Character, CharacterKind, Roster};
use drippy_core::events::{EventBus, SubscriptionId, TitleEvent};
use drippy_core::settings::SettingsSnapshot;
use drippy_core::time::TickClock;

const SCENE: &str = "scene";
const AUDIO: &str = "audio";

const KEY_GUI_SCALE: &str = "gui_scale";
const KEY_DIFFICULTY: &str = "difficulty";
const KEY_UNDECORATED: &str = "undecorated";
const KEY_MUSIC: &str = "music";
const KEY_SFX: &str = "sfx";
const KEY_UI: &str = "ui";

/// What an apply call did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Settings were persisted, committed, and announced.
    Applied,
    /// Nothing to apply; state and store untouched.
    Skipped,
}

/// One instance owns the authoritative settings snapshot and the current
/// selection. Single-threaded by design: callers drive it from the UI
/// thread and serialize access themselves.
pub struct TitleScreen<S: ConfigStore> {
    store: S,
    roster: Roster,
    current_settings: SettingsSnapshot,
    selected_character: Option<Character>,
    clock: TickClock,
    events: EventBus,
}

impl<S: ConfigStore> TitleScreen<S> {
    /// Build the controller over an injected store and roster. The initial
    /// snapshot comes straight from the store; construction never fails.
    pub fn new(store: S, roster: Roster) -> Self {
        let mut screen = Self {
            store,
            roster,
            current_settings: SettingsSnapshot::default(),
            selected_character: None,
            clock: TickClock::new(),
            events: EventBus::new(),
        };
        screen.load_current_settings();
        screen
    }

    /// Re-read the six settings keys from the store.
    ///
    /// Absent or unparsable values fall back to the defaults; nothing is
    /// surfaced and no event fires.
    pub fn load_current_settings(&mut self) {
        let defaults = SettingsSnapshot::default();
        let snapshot = SettingsSnapshot::new(
            self.store.get_int(SCENE, KEY_GUI_SCALE, defaults.gui_scale),
            self.store.get_int(SCENE, KEY_DIFFICULTY, defaults.difficulty),
            self.store.get_bool(SCENE, KEY_UNDECORATED, defaults.undecorated),
            self.store.get_float(AUDIO, KEY_MUSIC, defaults.music_volume),
            self.store.get_float(AUDIO, KEY_SFX, defaults.sfx_volume),
            self.store.get_float(AUDIO, KEY_UI, defaults.ui_volume),
        );
        tracing::debug!(settings = ?snapshot, "settings loaded");
        self.current_settings = snapshot;
    }

    /// Persist `new_settings` and make it the authoritative snapshot.
    ///
    /// The six fields are written as individual key/value writes; the store
    /// is not transactional, so a failure partway leaves the earlier keys
    /// persisted. The in-memory snapshot only swaps after all six writes
    /// succeed, and the `SettingsApplied` event fires only on that commit.
    /// A `None` argument is a no-op.
    pub fn apply_settings(
        &mut self,
        new_settings: Option<SettingsSnapshot>,
    ) -> Result<ApplyOutcome, ConfigError> {
        let Some(new_settings) = new_settings else {
            return Ok(ApplyOutcome::Skipped);
        };

        self.store
            .set_value(SCENE, KEY_GUI_SCALE, &new_settings.gui_scale.to_string())?;
        self.store
            .set_value(SCENE, KEY_DIFFICULTY, &new_settings.difficulty.to_string())?;
        self.store
            .set_value(SCENE, KEY_UNDECORATED, &new_settings.undecorated.to_string())?;
        self.store
            .set_value(AUDIO, KEY_MUSIC, &new_settings.music_volume.to_string())?;
        self.store
            .set_value(AUDIO, KEY_SFX, &new_settings.sfx_volume.to_string())?;
        self.store
            .set_value(AUDIO, KEY_UI, &new_settings.ui_volume.to_string())?;

        let previous = std::mem::replace(&mut self.current_settings, new_settings);
        tracing::info!(?previous, current = ?new_settings, "settings applied");
        self.events.publish(&TitleEvent::SettingsApplied {
            previous,
            current: new_settings,
        });
        Ok(ApplyOutcome::Applied)
    }

    pub fn current_settings(&self) -> SettingsSnapshot {
        self.current_settings
    }

    pub fn selected_character(&self) -> Option<&Character> {
        self.selected_character.as_ref()
    }

    /// Change (or clear) the selection. Nothing else ever resets it.
    pub fn set_selected_character(&mut self, character: Option<Character>) {
        self.selected_character = character;
    }

    /// Playable roster entries, in roster order.
    pub fn available_characters(&self) -> Vec<&Character> {
        self.roster.by_kind(CharacterKind::Player)
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&TitleEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    pub fn tick_count(&self) -> u64 {
        self.clock.tick_count()
    }

    /// Advance the title-screen clock one tick and announce it.
    pub fn advance_tick(&mut self) -> u64 {
        let previous = self.clock.tick_count();
        let current = self.clock.advance_tick();
        self.events.publish(&TitleEvent::Tick { previous, current });
        current
    }
}
