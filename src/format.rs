/// Display helpers: relative times, escaping, previews
use std::borrow::Cow;

use chrono::{DateTime, Utc};

/// Format a timestamp relative to `now`
///
/// - under a minute (or in the future): "Just now"
/// - under an hour: "5m ago"
/// - under a day: "3h ago"
/// - under a week: "2d ago"
/// - older: short month and day, e.g. "Jan 5"
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if elapsed.num_seconds() < 60 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if days < 7 {
        format!("{}d ago", days)
    } else {
        then.format("%b %-d").to_string()
    }
}

/// Escape text for an HTML text node
pub fn escape_text(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Escape text for a double-quoted HTML attribute
pub fn escape_attribute(text: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(text)
}

/// First `max_chars` characters of `text`
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
