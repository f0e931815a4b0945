/// Quick-add input classification: link or note
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::domain::{has_scheme, normalize_url};

// A dot followed by two or more lowercase letters, e.g. ".com" or ".io"
static TLD_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[a-z]{2,}").expect("TLD pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Link,
    Note,
}

/// Decide whether free-form text should be saved as a link or a note
///
/// Text is a URL candidate when it contains "://", "www." or a dotted
/// suffix of 2+ lowercase letters. A candidate only becomes a link when it
/// parses as a URL (with "https://" prefixed if it has no scheme).
///
/// This is a heuristic: "release.notes" is a link, "notes v1.2" is a note.
pub fn classify(text: &str) -> Classification {
    if is_url(text) {
        Classification::Link
    } else {
        Classification::Note
    }
}

/// URL heuristic behind `classify`
pub fn is_url(text: &str) -> bool {
    let text = text.trim();
    let looks_like_url = has_scheme(text) || text.contains("www.") || TLD_LIKE.is_match(text);
    looks_like_url && Url::parse(&normalize_url(text)).is_ok()
}

/// Which key combination submitted the quick-add box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submit {
    /// Plain Enter
    Enter,
    /// Shift+Enter
    ShiftEnter,
    /// Ctrl+Enter or Cmd+Enter
    CommandEnter,
}

impl Submit {
    /// Map the modifier state of an Enter keypress. Shift wins over Ctrl/Cmd.
    pub fn from_modifiers(shift: bool, ctrl_or_meta: bool) -> Submit {
        // Shift+Ctrl/Cmd+Enter is deliberately one action (quick note), never two
        if shift {
            Submit::ShiftEnter
        } else if ctrl_or_meta {
            Submit::CommandEnter
        } else {
            Submit::Enter
        }
    }
}

/// What a quick-add submission should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickAdd {
    AddLink(String),
    AddNote(String),
    /// Open the note editor with this text as content
    OpenEditor(String),
}

/// Resolve a quick-add submission. Blank input does nothing.
pub fn quick_add(text: &str, submit: Submit) -> Option<QuickAdd> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let text = text.to_string();
    let action = match submit {
        Submit::Enter => match classify(&text) {
            Classification::Link => QuickAdd::AddLink(text),
            Classification::Note => QuickAdd::OpenEditor(text),
        },
        Submit::ShiftEnter => QuickAdd::AddNote(text),
        Submit::CommandEnter => QuickAdd::OpenEditor(text),
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_note() {
        assert_eq!(classify("hello world"), Classification::Note);
        assert_eq!(classify("remember to stretch"), Classification::Note);
    }

    #[test]
    fn test_bare_domain_is_link() {
        assert_eq!(classify("github.com"), Classification::Link);
        assert_eq!(classify("docs.rs/serde/latest"), Classification::Link);
    }

    #[test]
    fn test_scheme_and_www_are_links() {
        assert_eq!(classify("https://example.com/path?q=1"), Classification::Link);
        assert_eq!(classify("http://localhost:8080"), Classification::Link);
        assert_eq!(classify("www.example.com"), Classification::Link);
    }

    #[test]
    fn test_version_numbers_are_notes() {
        // Digits after the dot do not look like a TLD
        assert_eq!(classify("notes v1.2"), Classification::Note);
        assert_eq!(classify("v1.2 release notes"), Classification::Note);
    }

    #[test]
    fn test_dotted_words_are_links() {
        // Known misclassification: any dotted lowercase word parses as a host
        assert_eq!(classify("release.notes"), Classification::Link);
    }

    #[test]
    fn test_sentences_with_domains_are_notes() {
        // Spaces cannot appear in a host, so URL parsing rejects these
        assert_eq!(classify("see example.com for details"), Classification::Note);
        assert_eq!(classify("check www.example.com later"), Classification::Note);
    }

    #[test]
    fn test_uppercase_tld_needs_other_marker() {
        assert_eq!(classify("EXAMPLE.COM"), Classification::Note);
        assert_eq!(classify("WWW.EXAMPLE.COM"), Classification::Note);
        assert_eq!(classify("HTTPS://EXAMPLE.COM"), Classification::Link);
    }

    #[test]
    fn test_submit_from_modifiers() {
        assert_eq!(Submit::from_modifiers(false, false), Submit::Enter);
        assert_eq!(Submit::from_modifiers(true, false), Submit::ShiftEnter);
        assert_eq!(Submit::from_modifiers(false, true), Submit::CommandEnter);
        assert_eq!(Submit::from_modifiers(true, true), Submit::ShiftEnter);
    }

    #[test]
    fn test_quick_add_enter_classifies() {
        assert_eq!(
            quick_add("  github.com ", Submit::Enter),
            Some(QuickAdd::AddLink("github.com".to_string()))
        );
        assert_eq!(
            quick_add("hello world", Submit::Enter),
            Some(QuickAdd::OpenEditor("hello world".to_string()))
        );
    }

    #[test]
    fn test_quick_add_modifiers_skip_classification() {
        assert_eq!(
            quick_add("github.com", Submit::ShiftEnter),
            Some(QuickAdd::AddNote("github.com".to_string()))
        );
        assert_eq!(
            quick_add("github.com", Submit::CommandEnter),
            Some(QuickAdd::OpenEditor("github.com".to_string()))
        );
    }

    #[test]
    fn test_quick_add_blank_does_nothing() {
        assert_eq!(quick_add("", Submit::Enter), None);
        assert_eq!(quick_add("   \n", Submit::ShiftEnter), None);
    }
}
