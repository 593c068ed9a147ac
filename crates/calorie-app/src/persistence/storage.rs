use eframe::Storage;

use crate::state::Settings;

const SETTINGS_KEY: &str = "calorie_counter.settings";

#[must_use]
pub(crate) fn load_settings(storage: &dyn Storage) -> Option<Settings> {
    let settings = eframe::get_value(storage, SETTINGS_KEY);
    if settings.is_none() {
        log::debug!("no stored settings under {SETTINGS_KEY}, using defaults");
    }
    settings
}

pub(crate) fn save_settings(storage: &mut dyn Storage, settings: &Settings) {
    eframe::set_value(storage, SETTINGS_KEY, settings);
    log::debug!("saved settings");
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use eframe::Storage;

    use super::{SETTINGS_KEY, load_settings, save_settings};
    use crate::state::{ErrorDismissDelay, Settings};

    #[derive(Default)]
    struct MemoryStorage {
        values: HashMap<String, String>,
    }

    impl Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.values.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn settings_round_trip() {
        let mut storage = MemoryStorage::default();
        let settings = Settings {
            error_dismiss_delay: ErrorDismissDelay::FiveSeconds,
            greeting_name: "Ada".to_owned(),
        };

        save_settings(&mut storage, &settings);
        assert_eq!(load_settings(&storage), Some(settings));
    }

    #[test]
    fn missing_settings_load_as_none() {
        let storage = MemoryStorage::default();
        assert_eq!(load_settings(&storage), None);
    }

    #[test]
    fn corrupted_settings_load_as_none() {
        let mut storage = MemoryStorage::default();
        storage.set_string(SETTINGS_KEY, "not ron at all (".to_owned());
        assert_eq!(load_settings(&storage), None);
    }
}
