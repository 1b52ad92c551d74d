use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use log::warn;

use crate::constants::{OPTIONS_STORAGE_KEY, THEME_STORAGE_KEY};
use crate::option_list::OptionList;
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    Unavailable,
    Read(String),
    Write(String),
    Decode(String),
    Encode(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "storage is not available"),
            StorageError::Read(e) => write!(f, "failed to read from storage: {}", e),
            StorageError::Write(e) => write!(f, "failed to write to storage: {}", e),
            StorageError::Decode(e) => write!(f, "stored value is malformed: {}", e),
            StorageError::Encode(e) => write!(f, "failed to serialize value: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            StorageError::Encode(err.to_string())
        } else {
            StorageError::Decode(err.to_string())
        }
    }
}

/// String key-value store with the shape of the browser's `localStorage`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Store used off the browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads the persisted option list. A missing key yields an empty list.
pub fn load_options(store: &impl KeyValueStore) -> Result<OptionList, StorageError> {
    match store.get_item(OPTIONS_STORAGE_KEY)? {
        Some(raw) => {
            let value: serde_json::Value = serde_json::from_str(&raw)?;
            if !value.is_array() {
                return Err(StorageError::Decode(format!("expected an array, got {}", raw)));
            }
            let options: Vec<String> = serde_json::from_value(value)?;
            Ok(OptionList::from(options))
        }
        None => Ok(OptionList::new()),
    }
}

pub fn save_options(store: &impl KeyValueStore, options: &OptionList) -> Result<(), StorageError> {
    let raw = serde_json::to_string(options).map_err(|e| StorageError::Encode(e.to_string()))?;
    store.set_item(OPTIONS_STORAGE_KEY, &raw)
}

/// Startup restore: any failure falls back to an empty list.
pub fn restore_options(store: &impl KeyValueStore) -> OptionList {
    load_options(store).unwrap_or_else(|e| {
        warn!("Failed to load options from storage: {}", e);
        OptionList::new()
    })
}

/// Overwrites the stored list. Failures are logged and dropped.
pub fn persist_options(store: &impl KeyValueStore, options: &OptionList) {
    if let Err(e) = save_options(store, options) {
        warn!("Failed to save options to storage: {}", e);
    }
}

pub fn restore_theme(store: &impl KeyValueStore) -> Theme {
    match store.get_item(THEME_STORAGE_KEY) {
        Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_default(),
        Ok(None) => Theme::default(),
        Err(e) => {
            warn!("Failed to load theme from storage: {}", e);
            Theme::default()
        }
    }
}

pub fn persist_theme(store: &impl KeyValueStore, theme: Theme) {
    if let Err(e) = store.set_item(THEME_STORAGE_KEY, theme.as_str()) {
        warn!("Failed to save theme to storage: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read("SecurityError".to_string()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write("QuotaExceededError".to_string()))
        }
    }

    fn options(items: &[&str]) -> OptionList {
        OptionList::from(items.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_persist_then_restore_keeps_order() {
        let store = MemoryStore::new();
        let saved = options(&["Pizza", "Tacos", "pizza", "Ramen"]);
        persist_options(&store, &saved);
        assert_eq!(restore_options(&store), saved);
    }

    #[test]
    fn test_written_format_is_json_array_under_fixed_key() {
        let store = MemoryStore::new();
        save_options(&store, &options(&["a", "b"])).unwrap();
        assert_eq!(
            store.get_item("decision-spinner-options").unwrap().as_deref(),
            Some(r#"["a","b"]"#)
        );
    }

    #[test]
    fn test_missing_key_restores_empty() {
        let store = MemoryStore::new();
        assert_eq!(load_options(&store), Ok(OptionList::new()));
    }

    #[test]
    fn test_malformed_json_restores_empty() {
        let store = MemoryStore::new();
        store.set_item(OPTIONS_STORAGE_KEY, "[\"unterminated").unwrap();
        assert!(matches!(load_options(&store), Err(StorageError::Decode(_))));
        assert!(restore_options(&store).is_empty());
    }

    #[test]
    fn test_non_array_value_restores_empty() {
        let store = MemoryStore::new();
        for raw in [r#"{"a":1}"#, "42", "\"Pizza\"", "null"] {
            store.set_item(OPTIONS_STORAGE_KEY, raw).unwrap();
            assert!(matches!(load_options(&store), Err(StorageError::Decode(_))));
            assert!(restore_options(&store).is_empty());
        }
    }

    #[test]
    fn test_read_failure_restores_empty() {
        assert!(restore_options(&BrokenStore).is_empty());
        assert_eq!(restore_theme(&BrokenStore), Theme::Dark);
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let list = options(&["a"]);
        assert!(save_options(&BrokenStore, &list).is_err());
        persist_options(&BrokenStore, &list);
        persist_theme(&BrokenStore, Theme::Light);
    }

    #[test]
    fn test_theme_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(restore_theme(&store), Theme::Dark);
        persist_theme(&store, Theme::Light);
        assert_eq!(store.get_item("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(restore_theme(&store), Theme::Light);
        store.set_item(THEME_STORAGE_KEY, "sepia").unwrap();
        assert_eq!(restore_theme(&store), Theme::Dark);
    }
}
