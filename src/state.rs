/// Popup state and the mutations the UI performs on it
use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::domain::normalize_url;
use crate::item_data::{Link, Mode, Note, Settings, Theme};
use crate::operations::{filter_items, find_link_by_url};
use crate::render::{render, Listing, View};
use crate::storage::{Persist, StorageData};

/// Successful mutation, with the notice shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    LinkAdded,
    NoteAdded,
    NoteCreated,
    NoteUpdated,
    LinkDeleted,
    NoteDeleted,
    ThemeChanged(Theme),
}

impl Outcome {
    pub fn notice(&self) -> &'static str {
        match self {
            Outcome::LinkAdded => "Link added",
            Outcome::NoteAdded => "Note added",
            Outcome::NoteCreated => "Note created",
            Outcome::NoteUpdated => "Note updated",
            Outcome::LinkDeleted => "Link deleted",
            Outcome::NoteDeleted => "Note deleted",
            Outcome::ThemeChanged(Theme::Dark) => "Dark mode enabled",
            Outcome::ThemeChanged(Theme::Light) => "Light mode enabled",
        }
    }
}

/// Rejected mutation. Nothing changed and nothing was saved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Link already exists")]
    DuplicateLink { url: String },
    #[error("Note content cannot be empty")]
    EmptyNote,
}

/// Editor contents when the note editor opens
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

/// Everything the popup shows, built from saved data at startup
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub mode: Mode,
    /// Newest first
    pub links: Vec<Link>,
    /// Newest first
    pub notes: Vec<Note>,
    pub search_query: String,
    pub editing_note_id: Option<String>,
    pub settings: Settings,
}

impl AppState {
    pub fn from_storage(data: StorageData) -> AppState {
        log::info!("Loaded {} links and {} notes", data.links.len(), data.notes.len());
        AppState {
            links: data.links,
            notes: data.notes,
            settings: data.settings,
            ..AppState::default()
        }
    }

    /// Copy of the persisted part of the state
    pub fn snapshot(&self) -> StorageData {
        StorageData {
            links: self.links.clone(),
            notes: self.notes.clone(),
            settings: self.settings.clone(),
            ..StorageData::new()
        }
    }

    /// Save a link. Input without a scheme gets "https://".
    pub fn add_link(&mut self, raw: &str, storage: &impl Persist) -> Result<Outcome, Rejection> {
        let url = normalize_url(raw);

        if find_link_by_url(&self.links, &url).is_some() {
            log::warn!("Link already saved: {}", url);
            return Err(Rejection::DuplicateLink { url });
        }

        let link = Link::new(url, Utc::now());
        log::info!("Adding link {} ({})", link.url, link.id);
        self.links.insert(0, link);
        storage.save(self.snapshot());
        Ok(Outcome::LinkAdded)
    }

    /// Save a note. Title and content are trimmed; blank content is rejected.
    pub fn add_note(&mut self, content: &str, title: &str, storage: &impl Persist) -> Result<Outcome, Rejection> {
        self.insert_note(content, title)?;
        storage.save(self.snapshot());
        Ok(Outcome::NoteAdded)
    }

    pub fn delete_link(&mut self, id: &str, storage: &impl Persist) -> Result<Outcome, Rejection> {
        let original_len = self.links.len();
        self.links.retain(|link| link.id != id);
        if self.links.len() == original_len {
            log::debug!("No link with id {}", id);
        }
        storage.save(self.snapshot());
        Ok(Outcome::LinkDeleted)
    }

    pub fn delete_note(&mut self, id: &str, storage: &impl Persist) -> Result<Outcome, Rejection> {
        let original_len = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == original_len {
            log::debug!("No note with id {}", id);
        }
        if self.editing_note_id.as_deref() == Some(id) {
            self.editing_note_id = None;
        }
        storage.save(self.snapshot());
        Ok(Outcome::NoteDeleted)
    }

    /// Save the note editor's contents
    ///
    /// An `id` naming an existing note updates it in place and bumps
    /// `updated_at`; otherwise a new note is created. On success the
    /// editing pointer is cleared. Blank content is rejected and leaves
    /// everything, including the editing pointer, as it was.
    pub fn save_note(
        &mut self,
        id: Option<&str>,
        title: &str,
        content: &str,
        storage: &impl Persist,
    ) -> Result<Outcome, Rejection> {
        let content = content.trim();
        if content.is_empty() {
            log::warn!("Refusing to save an empty note");
            return Err(Rejection::EmptyNote);
        }

        let existing = match id {
            Some(id) => self.notes.iter_mut().find(|note| note.id == id),
            None => None,
        };
        let outcome = match existing {
            Some(note) => {
                note.title = title.trim().to_string();
                note.content = content.to_string();
                note.updated_at = next_update_time(note.updated_at, Utc::now());
                log::info!("Updated note {}", note.id);
                Outcome::NoteUpdated
            }
            None => {
                self.insert_note(content, title)?;
                Outcome::NoteCreated
            }
        };

        self.editing_note_id = None;
        storage.save(self.snapshot());
        Ok(outcome)
    }

    /// Point the editor at a note (or a new one) and return its contents
    pub fn open_note_editor(&mut self, id: Option<&str>) -> NoteDraft {
        let note = id.and_then(|id| self.notes.iter().find(|note| note.id == id));
        self.editing_note_id = note.map(|note| note.id.clone());

        note.map(|note| NoteDraft {
            title: note.title.clone(),
            content: note.content.clone(),
        })
        .unwrap_or_default()
    }

    pub fn close_note_editor(&mut self) {
        self.editing_note_id = None;
    }

    /// Switch between links and notes. Switching clears the search query.
    pub fn set_mode(&mut self, mode: Mode) -> bool {
        if self.mode == mode {
            log::debug!("Already showing {:?}", mode);
            return false;
        }
        self.mode = mode;
        self.search_query.clear();
        true
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    pub fn toggle_theme(&mut self, storage: &impl Persist) -> Result<Outcome, Rejection> {
        let theme = self.settings.theme.toggled();
        self.settings.theme = theme;
        storage.save(self.snapshot());
        Ok(Outcome::ThemeChanged(theme))
    }

    /// Items of the current mode matching the search query
    pub fn listing(&self) -> Listing<'_> {
        match self.mode {
            Mode::Links => Listing::Links(filter_items(&self.links, &self.search_query)),
            Mode::Notes => Listing::Notes(filter_items(&self.notes, &self.search_query)),
        }
    }

    pub fn view(&self, now: DateTime<Utc>) -> View {
        render(&self.listing(), &self.search_query, now)
    }

    fn insert_note(&mut self, content: &str, title: &str) -> Result<(), Rejection> {
        let content = content.trim();
        if content.is_empty() {
            log::warn!("Refusing to add an empty note");
            return Err(Rejection::EmptyNote);
        }

        let note = Note::new(title.trim().to_string(), content.to_string(), Utc::now());
        log::info!("Adding note {}", note.id);
        self.notes.insert(0, note);
        Ok(())
    }
}

// Updates always move forward, even within one clock tick
fn next_update_time(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    now.max(previous + Duration::milliseconds(1))
}
