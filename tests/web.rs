//! Browser tests, run with `wasm-pack test --headless --chrome`
#![cfg(target_arch = "wasm32")]

use chrono::Utc;
use glidebar::{AppState, Mode, Outcome, Persist, Rejection, StorageData, View};
use std::cell::Cell;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Default)]
struct CountingStorage {
    saves: Cell<usize>,
}

impl Persist for CountingStorage {
    fn save(&self, _data: StorageData) {
        self.saves.set(self.saves.get() + 1);
    }
}

#[wasm_bindgen_test]
fn quick_add_flow_in_browser() {
    let storage = CountingStorage::default();
    let mut state = AppState::default();

    assert_eq!(state.add_link("example.com", &storage), Ok(Outcome::LinkAdded));
    assert_eq!(
        state.add_link("https://example.com", &storage),
        Err(Rejection::DuplicateLink { url: "https://example.com".to_string() })
    );
    assert_eq!(state.add_note("", "", &storage), Err(Rejection::EmptyNote));
    assert_eq!(storage.saves.get(), 1);

    let View::Links(rows) = state.view(Utc::now()) else {
        panic!("expected links");
    };
    assert_eq!(rows[0].title, "example.com");
}

#[wasm_bindgen_test]
fn empty_notes_view_in_browser() {
    let mut state = AppState::default();
    state.set_mode(Mode::Notes);
    state.set_search_query("<i>x</i>");

    let html = state.view(Utc::now()).to_html();

    assert!(html.contains("No notes found for"));
    assert!(html.contains("&lt;i&gt;x&lt;/i&gt;"));
}
