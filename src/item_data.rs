/// Data structures for Glidebar
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::domain::{extract_domain, favicon_url};

/// A saved link
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    pub url: String,
    pub title: String,
    pub favicon: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Build a link for an already normalized URL. Title and favicon are
    /// derived here once and never recomputed.
    pub fn new(url: String, now: DateTime<Utc>) -> Link {
        Link {
            id: new_id(),
            title: extract_domain(&url),
            favicon: favicon_url(&url),
            url,
            created_at: now,
        }
    }
}

/// A free-form text note
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Build a note from trimmed title and content
    pub fn new(title: String, content: String, now: DateTime<Utc>) -> Note {
        Note {
            id: new_id(),
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Value of the `data-theme` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// Persisted user settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Settings {
    #[serde(default, deserialize_with = "theme_or_default")]
    pub theme: Theme,
}

// Themes this version doesn't know, e.g. "system", load as the default
fn theme_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Theme, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_else(|e| {
        log::warn!("Unknown theme in settings: {}", e);
        Theme::default()
    }))
}

/// Which collection the popup is browsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Links,
    Notes,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}
