/// URL normalization and domain extraction for saved links
use url::Url;

use crate::config::{favicon_service_url, DEFAULT_SCHEME};

/// Normalize quick-add input into a link URL
///
/// Input that already carries a scheme delimiter ("://") is kept as typed,
/// anything else gets "https://" prefixed. No other rewriting happens, so
/// "example.com" becomes "https://example.com" without a trailing slash.
pub fn normalize_url(raw: &str) -> String {
    let raw = raw.trim();
    if has_scheme(raw) {
        raw.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME, raw)
    }
}

/// True when the text contains a scheme delimiter
pub fn has_scheme(text: &str) -> bool {
    text.contains("://")
}

/// Extract the display domain from a URL
///
/// Algorithm:
/// 1. Parse the URL
/// 2. Take its hostname (lowercased, IDNs in punycode)
/// 3. Drop the first "www." occurrence
///
/// Anything that does not parse is returned unchanged. URLs that parse
/// without a host (file:, mailto:) give an empty string.
///
/// Examples:
/// - https://www.google.com/search → google.com
/// - https://ai.microsoft.com → ai.microsoft.com
/// - http://localhost:3000 → localhost
pub fn extract_domain(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed.host_str().unwrap_or_default().replacen("www.", "", 1),
        Err(_) => url.to_string(),
    }
}

/// Best-effort favicon URL for a link
pub fn favicon_url(url: &str) -> String {
    favicon_service_url(&extract_domain(url))
}
