/// Rendering: filtered items + query → view model (and its HTML text form)
use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::config::PREVIEW_CHARS;
use crate::format::{escape_attribute, escape_text, format_relative, truncate_chars};
use crate::item_data::{Link, Mode, Note};

/// A filtered collection, tagged with the mode it belongs to
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<'a> {
    Links(Vec<&'a Link>),
    Notes(Vec<&'a Note>),
}

impl Listing<'_> {
    pub fn mode(&self) -> Mode {
        match self {
            Listing::Links(_) => Mode::Links,
            Listing::Notes(_) => Mode::Notes,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Listing::Links(links) => links.is_empty(),
            Listing::Notes(notes) => notes.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmptyState {
    pub icon: &'static str,
    pub message: String,
    pub hint: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkRow {
    pub id: String,
    pub url: String,
    pub title: String,
    pub favicon: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoteCard {
    pub id: String,
    /// None when the note has no title
    pub title: Option<String>,
    pub preview: String,
    /// Relative time of the last update
    pub updated: String,
}

/// What the content area shows
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Empty(EmptyState),
    Links(Vec<LinkRow>),
    Notes(Vec<NoteCard>),
}

/// Build the view for a filtered listing
pub fn render(listing: &Listing<'_>, query: &str, now: DateTime<Utc>) -> View {
    if listing.is_empty() {
        return View::Empty(empty_state(listing.mode(), query));
    }

    match listing {
        Listing::Links(links) => View::Links(links.iter().map(|link| link_row(link)).collect()),
        Listing::Notes(notes) => View::Notes(notes.iter().map(|note| note_card(note, now)).collect()),
    }
}

fn empty_state(mode: Mode, query: &str) -> EmptyState {
    let (icon, noun, hint) = match mode {
        Mode::Links => ("🔗", "links", "Paste a URL above to get started"),
        Mode::Notes => ("📝", "notes", "Type something above to create a note"),
    };

    if query.is_empty() {
        EmptyState {
            icon,
            message: format!("No {} yet", noun),
            hint: Some(hint),
        }
    } else {
        EmptyState {
            icon,
            message: format!("No {} found for \"{}\"", noun, query),
            hint: None,
        }
    }
}

fn link_row(link: &Link) -> LinkRow {
    LinkRow {
        id: link.id.clone(),
        url: link.url.clone(),
        title: link.title.clone(),
        favicon: link.favicon.clone(),
    }
}

fn note_card(note: &Note, now: DateTime<Utc>) -> NoteCard {
    NoteCard {
        id: note.id.clone(),
        title: (!note.title.is_empty()).then(|| note.title.clone()),
        preview: truncate_chars(&note.content, PREVIEW_CHARS).to_string(),
        updated: format_relative(note.updated_at, now),
    }
}

impl View {
    /// HTML text for the content area. Every user-supplied field is escaped.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        // Writing to a String cannot fail
        let _ = self.write_html(&mut html);
        html
    }

    fn write_html(&self, out: &mut String) -> std::fmt::Result {
        match self {
            View::Empty(empty) => {
                write!(out, r#"<div class="empty-state">"#)?;
                write!(out, r#"<div class="empty-icon">{}</div>"#, empty.icon)?;
                write!(out, r#"<div class="empty-text">{}</div>"#, escape_text(&empty.message))?;
                if let Some(hint) = empty.hint {
                    write!(out, r#"<div class="empty-hint">{}</div>"#, hint)?;
                }
                write!(out, "</div>")
            }
            View::Links(rows) => {
                for row in rows {
                    write!(out, r#"<div class="link-item" data-id="{}">"#, escape_attribute(&row.id))?;
                    write!(out, r#"<img class="favicon" src="{}">"#, escape_attribute(&row.favicon))?;
                    write!(out, r#"<div class="link-text">"#)?;
                    write!(out, r#"<div class="link-title">{}</div>"#, escape_text(&row.title))?;
                    write!(out, r#"<div class="link-url">{}</div>"#, escape_text(&row.url))?;
                    write!(out, "</div></div>")?;
                }
                Ok(())
            }
            View::Notes(cards) => {
                write!(out, r#"<div class="notes-grid">"#)?;
                for card in cards {
                    write!(out, r#"<div class="note-card" data-id="{}">"#, escape_attribute(&card.id))?;
                    if let Some(title) = &card.title {
                        write!(out, r#"<div class="note-card-title">{}</div>"#, escape_text(title))?;
                    }
                    write!(out, r#"<div class="note-preview">{}</div>"#, escape_text(&card.preview))?;
                    write!(out, r#"<div class="note-time">{}</div>"#, card.updated)?;
                    write!(out, "</div>")?;
                }
                write!(out, "</div>")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_empty_links_without_query() {
        let view = render(&Listing::Links(vec![]), "", Utc::now());

        assert_eq!(
            view,
            View::Empty(EmptyState {
                icon: "🔗",
                message: "No links yet".to_string(),
                hint: Some("Paste a URL above to get started"),
            })
        );
    }

    #[test]
    fn test_empty_notes_without_query() {
        let View::Empty(empty) = render(&Listing::Notes(vec![]), "", Utc::now()) else {
            panic!("expected empty state");
        };

        assert_eq!(empty.message, "No notes yet");
        assert_eq!(empty.hint, Some("Type something above to create a note"));
    }

    #[test]
    fn test_empty_with_query_escapes_query() {
        let view = render(&Listing::Notes(vec![]), "<b>bold</b>", Utc::now());

        let View::Empty(empty) = &view else {
            panic!("expected empty state");
        };
        assert_eq!(empty.message, "No notes found for \"<b>bold</b>\"");
        assert_eq!(empty.hint, None);

        let html = view.to_html();
        assert!(html.contains("No notes found for \"&lt;b&gt;bold&lt;/b&gt;\""));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_links_render_in_order() {
        let now = Utc::now();
        let first = Link::new("https://github.com".to_string(), now);
        let second = Link::new("https://docs.rs".to_string(), now);

        let View::Links(rows) = render(&Listing::Links(vec![&first, &second]), "", now) else {
            panic!("expected links");
        };

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "github.com");
        assert_eq!(rows[1].title, "docs.rs");
        assert_eq!(rows[1].id, second.id);
    }

    #[test]
    fn test_note_preview_truncated_to_200_chars() {
        let now = Utc::now();
        let long = "x".repeat(250);
        let note = Note::new(String::new(), long, now);

        let View::Notes(cards) = render(&Listing::Notes(vec![&note]), "", now) else {
            panic!("expected notes");
        };

        assert_eq!(cards[0].preview.chars().count(), 200);
        assert_eq!(cards[0].title, None);
        assert_eq!(cards[0].updated, "Just now");
    }

    #[test]
    fn test_note_card_shows_title_and_relative_time() {
        let now = Utc::now();
        let mut note = Note::new("Plans".to_string(), "ship it".to_string(), now);
        note.updated_at = now - Duration::hours(3);

        let View::Notes(cards) = render(&Listing::Notes(vec![&note]), "", now) else {
            panic!("expected notes");
        };

        assert_eq!(cards[0].title.as_deref(), Some("Plans"));
        assert_eq!(cards[0].preview, "ship it");
        assert_eq!(cards[0].updated, "3h ago");
    }

    #[test]
    fn test_html_escapes_user_fields() {
        let now = Utc::now();
        let note = Note::new(
            "<img src=x onerror=alert(1)>".to_string(),
            "a & b <script>".to_string(),
            now,
        );

        let html = render(&Listing::Notes(vec![&note]), "", now).to_html();

        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("a &amp; b &lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img src=x"));
    }

    #[test]
    fn test_link_html_escapes_attributes() {
        let now = Utc::now();
        let mut link = Link::new("https://example.com".to_string(), now);
        link.favicon = r#"x" onerror="alert(1)"#.to_string();

        let html = render(&Listing::Links(vec![&link]), "", now).to_html();

        assert!(html.contains(r#"src="x&quot; onerror=&quot;alert(1)""#));
        assert!(html.contains(r#"<div class="link-url">https://example.com</div>"#));
    }
}
