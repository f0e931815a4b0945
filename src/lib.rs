/// Glidebar - Chrome Extension for saving links and notes
/// Built with Rust + WASM + Yew

mod classify;
mod config;
mod domain;
mod format;
mod item_data;
mod operations;
mod render;
mod state;
mod storage;
pub mod ui;

use wasm_bindgen::prelude::*;

pub use classify::{classify, quick_add, Classification, QuickAdd, Submit};
pub use item_data::{Link, Mode, Note, Settings, Theme};
pub use operations::{filter_items, Searchable};
pub use render::{render, EmptyState, LinkRow, Listing, NoteCard, View};
pub use state::{AppState, NoteDraft, Outcome, Rejection};
pub use storage::{Persist, StorageData};

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export core helpers for JavaScript access
#[wasm_bindgen]
pub fn extract_domain(url: &str) -> String {
    domain::extract_domain(url)
}

#[wasm_bindgen]
pub fn is_url(text: &str) -> bool {
    classify::is_url(text)
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
