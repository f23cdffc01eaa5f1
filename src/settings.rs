//! Persisted user preferences, one store key per toggle ("1"/"0").

use crate::model::{DEFAULT_COUNTDOWN_MS, GameConfig};
use crate::storage::KeyValueStore;

pub const COUNTDOWN_KEY: &str = "ts_setting_countdown";
pub const LEVEL_PICKER_KEY: &str = "ts_setting_level_picker";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Count down before each wave and after resuming.
    pub countdown: bool,
    /// Show the debug level picker in the controls panel.
    pub show_level_picker: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { countdown: true, show_level_picker: false }
    }
}

fn read_flag(store: &dyn KeyValueStore, key: &str, default: bool) -> bool {
    match store.get_item(key) {
        Ok(Some(v)) => match v.as_str() {
            "1" | "true" => true,
            "0" | "false" => false,
            _ => default,
        },
        Ok(None) => default,
        Err(e) => {
            log::warn!("could not read setting '{}': {:#}", key, e);
            default
        }
    }
}

fn write_flag(store: &dyn KeyValueStore, key: &str, value: bool) {
    if let Err(e) = store.set_item(key, if value { "1" } else { "0" }) {
        log::error!("could not save setting '{}': {:#}", key, e);
    }
}

impl Settings {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let d = Self::default();
        Self {
            countdown: read_flag(store, COUNTDOWN_KEY, d.countdown),
            show_level_picker: read_flag(store, LEVEL_PICKER_KEY, d.show_level_picker),
        }
    }

    pub fn save(&self, store: &dyn KeyValueStore) {
        write_flag(store, COUNTDOWN_KEY, self.countdown);
        write_flag(store, LEVEL_PICKER_KEY, self.show_level_picker);
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig { countdown_ms: if self.countdown { DEFAULT_COUNTDOWN_MS } else { 0 } }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn defaults_when_unset_or_garbled() {
        let store = MemoryStore::default();
        assert_eq!(Settings::load(&store), Settings::default());
        store.set_item(COUNTDOWN_KEY, "maybe").unwrap();
        assert!(Settings::load(&store).countdown);
    }

    #[test]
    fn saved_flags_load_back() {
        let store = MemoryStore::default();
        let s = Settings { countdown: false, show_level_picker: true };
        s.save(&store);
        assert_eq!(store.get_item(COUNTDOWN_KEY).unwrap().as_deref(), Some("0"));
        assert_eq!(Settings::load(&store), s);
    }

    #[test]
    fn countdown_toggle_drives_config() {
        assert_eq!(Settings::default().game_config().countdown_ms, DEFAULT_COUNTDOWN_MS);
        let off = Settings { countdown: false, ..Settings::default() };
        assert_eq!(off.game_config().countdown_ms, 0);
    }
}
