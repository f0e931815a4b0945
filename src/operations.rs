/// Collection operations: search filtering and duplicate lookup

use crate::item_data::{Link, Note};

/// Fields the search box matches against
pub trait Searchable {
    fn title(&self) -> &str;
    /// URL for links, content for notes
    fn secondary(&self) -> &str;
}

impl Searchable for Link {
    fn title(&self) -> &str {
        &self.title
    }

    fn secondary(&self) -> &str {
        &self.url
    }
}

impl Searchable for Note {
    fn title(&self) -> &str {
        &self.title
    }

    fn secondary(&self) -> &str {
        &self.content
    }
}

/// Keep the items whose title or secondary field contains `query`,
/// ignoring case. An empty query keeps everything. Order is preserved.
pub fn filter_items<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let query = query.to_lowercase();
    if query.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| {
            item.title().to_lowercase().contains(&query)
                || item.secondary().to_lowercase().contains(&query)
        })
        .collect()
}

/// Find a link with exactly this (normalized) URL
pub fn find_link_by_url<'a>(links: &'a [Link], url: &str) -> Option<&'a Link> {
    links.iter().find(|link| link.url == url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn create_test_link(url: &str) -> Link {
        Link::new(url.to_string(), Utc::now())
    }

    fn create_test_note(title: &str, content: &str) -> Note {
        Note::new(title.to_string(), content.to_string(), Utc::now())
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let links = vec![
            create_test_link("https://github.com"),
            create_test_link("https://google.com"),
            create_test_link("https://rust-lang.org"),
        ];

        let filtered = filter_items(&links, "");

        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().zip(links.iter()).all(|(a, b)| a.id == b.id));

        let notes = vec![create_test_note("", "one"), create_test_note("", "two")];
        let filtered = filter_items(&notes, "");
        assert_eq!(filtered[0].content, "one");
        assert_eq!(filtered[1].content, "two");
    }

    #[test]
    fn test_links_match_title_or_url_case_insensitive() {
        let links = vec![
            create_test_link("https://github.com/rust-lang"),
            create_test_link("https://google.com/search"),
            create_test_link("https://docs.rs/serde"),
        ];

        let by_title = filter_items(&links, "GitHub");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].url, "https://github.com/rust-lang");

        let by_path = filter_items(&links, "SEARCH");
        assert_eq!(by_path.len(), 1);
        assert_eq!(by_path[0].url, "https://google.com/search");

        let by_scheme = filter_items(&links, "https");
        assert_eq!(by_scheme.len(), 3);
    }

    #[test]
    fn test_notes_match_title_or_content() {
        let notes = vec![
            create_test_note("Groceries", "milk, eggs"),
            create_test_note("", "call the dentist"),
            create_test_note("Ideas", "a foo widget"),
        ];

        let filtered = filter_items(&notes, "groc");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Groceries");

        let filtered = filter_items(&notes, "Dentist");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].content, "call the dentist");
    }

    #[test]
    fn test_filter_never_returns_non_matching_items() {
        let notes = vec![
            create_test_note("alpha", "first"),
            create_test_note("beta", "second"),
            create_test_note("gamma", "third"),
        ];

        for query in ["a", "ph", "ir", "zzz", "Second"] {
            let q = query.to_lowercase();
            for note in filter_items(&notes, query) {
                assert!(
                    note.title.to_lowercase().contains(&q) || note.content.to_lowercase().contains(&q)
                );
            }
        }
        assert!(filter_items(&notes, "zzz").is_empty());
    }

    #[test]
    fn test_filter_only_second_note_matches() {
        let first = create_test_note("", "nothing here");
        let second = create_test_note("", "something about foo");
        // Newest first, as the store keeps them
        let notes = vec![second.clone(), first];

        let filtered = filter_items(&notes, "foo");

        assert_eq!(filtered, vec![&second]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let links = vec![create_test_link("https://a.com"), create_test_link("https://b.org")];

        let once = filter_items(&links, "a.com");
        let twice = filter_items(&links, "a.com");

        assert_eq!(once, twice);
    }

    #[test]
    fn test_find_link_by_url() {
        let links = vec![create_test_link("https://github.com"), create_test_link("https://google.com")];

        assert!(find_link_by_url(&links, "https://google.com").is_some());
        assert!(find_link_by_url(&links, "https://google.com/").is_none());
        assert!(find_link_by_url(&links, "google.com").is_none());
    }
}
