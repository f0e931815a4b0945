/// Storage record for chrome.storage.local and the persistence seam

use crate::config::SCHEMA_VERSION;
use crate::item_data::{Link, Note, Settings};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Root storage structure, saved under `config::STORAGE_KEY`
///
/// Every field defaults so records from older versions, or with a missing
/// collection, still load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageData {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub settings: Settings,
}

impl StorageData {
    pub fn new() -> Self {
        StorageData {
            version: SCHEMA_VERSION,
            links: Vec::new(),
            notes: Vec::new(),
            settings: Settings::default(),
        }
    }

    /// Decode a stored record. Loading never fails: each part of the record
    /// is decoded on its own, unreadable links or notes are skipped one by
    /// one and anything else unreadable falls back to its default.
    pub fn from_stored(stored: Option<Value>) -> Self {
        let Some(value) = stored.filter(|v| !v.is_null()) else {
            log::info!("No saved data, starting empty");
            return StorageData::new();
        };

        let Value::Object(mut record) = value else {
            log::warn!("Ignoring saved data that is not a record");
            return StorageData::new();
        };

        StorageData {
            version: decode_or_default(record.remove("version"), "version"),
            links: decode_items(record.remove("links"), "link"),
            notes: decode_items(record.remove("notes"), "note"),
            settings: decode_or_default(record.remove("settings"), "settings"),
        }
    }
}

fn decode_or_default<T: DeserializeOwned + Default>(value: Option<Value>, what: &str) -> T {
    match value {
        None | Some(Value::Null) => T::default(),
        Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable saved {}: {}", what, e);
            T::default()
        }),
    }
}

fn decode_items<T: DeserializeOwned>(value: Option<Value>, what: &str) -> Vec<T> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match serde_json::from_value(item) {
                Ok(decoded) => Some(decoded),
                Err(e) => {
                    log::warn!("Skipping unreadable saved {}: {}", what, e);
                    None
                }
            })
            .collect(),
        Some(_) => {
            log::warn!("Ignoring saved {} list that is not a list", what);
            Vec::new()
        }
    }
}

impl Default for StorageData {
    fn default() -> Self {
        Self::new()
    }
}

/// Destination for state snapshots
///
/// `save` is fire-and-forget: implementations write the whole record in a
/// single call, report failures on their own and never block the caller.
pub trait Persist {
    fn save(&self, data: StorageData);
}
