//! Swipe settings persistence.
//!
//! Settings are stored as JSON strings in eframe's persistent storage. A
//! stored value that fails to parse or validate is logged and replaced by the
//! defaults rather than aborting startup.

use serde::{Deserialize, Serialize};
use swipelist::SwipeConfig;

/// Storage key of the swipe configuration.
pub const SWIPE_CONFIG_KEY: &str = "swipe_config";

/// Coordinates loading and saving of persisted settings.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads the swipe configuration, falling back to defaults.
    pub fn load_swipe_config(storage: Option<&dyn eframe::Storage>) -> SwipeConfig {
        match Self::try_load_setting::<SwipeConfig>(storage, SWIPE_CONFIG_KEY) {
            Some(config) => config.validated_or_default(),
            None => SwipeConfig::default(),
        }
    }

    /// Saves the swipe configuration.
    pub fn save_swipe_config(storage: &mut dyn eframe::Storage, config: &SwipeConfig) {
        Self::save_setting(storage, SWIPE_CONFIG_KEY, config);
    }

    /// Serializes `value` as JSON under `key` and flushes the storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(e) => tracing::warn!(key, error = %e, "failed to serialize setting"),
        }
    }

    /// Loads and deserializes the value stored under `key`.
    ///
    /// # Returns
    /// `None` when there is no storage, no value, or the value does not parse
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring unreadable setting");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_missing_storage_gives_defaults() {
        assert_eq!(SettingsCoordinator::load_swipe_config(None), SwipeConfig::default());
    }

    #[test]
    fn test_swipe_config_round_trip() {
        let mut storage = MockStorage::new();
        let config = SwipeConfig {
            overshoot: 24.0,
            open_duration_ms: 180.0,
            ..SwipeConfig::default()
        };
        SettingsCoordinator::save_swipe_config(&mut storage, &config);

        let loaded = SettingsCoordinator::load_swipe_config(Some(&storage));
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_stored_config_falls_back() {
        let mut storage = MockStorage::new();
        let bad = SwipeConfig {
            button_width: -4.0,
            ..SwipeConfig::default()
        };
        SettingsCoordinator::save_swipe_config(&mut storage, &bad);
        assert_eq!(SettingsCoordinator::load_swipe_config(Some(&storage)), SwipeConfig::default());
    }

    #[test]
    fn test_unparsable_setting_is_none() {
        let mut storage = MockStorage::new();
        eframe::Storage::set_string(&mut storage, SWIPE_CONFIG_KEY, "not json".to_string());
        let result: Option<SwipeConfig> = SettingsCoordinator::try_load_setting(Some(&storage), SWIPE_CONFIG_KEY);
        assert_eq!(result, None);
        assert_eq!(SettingsCoordinator::load_swipe_config(Some(&storage)), SwipeConfig::default());
    }
}
