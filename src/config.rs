/// Compile-time configuration for Glidebar
use std::time::Duration;

/// Key of the single record in chrome.storage.local
pub const STORAGE_KEY: &str = "Glidebar";

/// Version written into every saved record. Records without one load as version 0.
pub const SCHEMA_VERSION: u32 = 1;

/// Number of characters shown in a note card preview
pub const PREVIEW_CHARS: usize = 200;

/// How long a notice stays on screen
pub const NOTICE_DURATION: Duration = Duration::from_millis(2000);

/// Scheme prefixed to quick-add input that has none
pub const DEFAULT_SCHEME: &str = "https://";

const FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons";
const FAVICON_SIZE: u32 = 64;

/// Favicon service URL for a domain
pub fn favicon_service_url(domain: &str) -> String {
    format!("{}?domain={}&sz={}", FAVICON_SERVICE, domain, FAVICON_SIZE)
}
