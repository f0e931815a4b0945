/// Popup UI for the Glidebar extension

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use patternfly_yew::prelude::*;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::platform::time::sleep;
use yew::prelude::*;

use crate::classify::{quick_add, QuickAdd, Submit};
use crate::config::{NOTICE_DURATION, STORAGE_KEY};
use crate::item_data::{Mode, Theme};
use crate::state::{AppState, NoteDraft, Outcome, Rejection};
use crate::storage::{Persist, StorageData};
use crate::ui::components::ContentArea;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(key: &str, value: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn openTab(url: &str) -> Result<(), JsValue>;
}

#[derive(Clone, PartialEq)]
enum Notice {
    Success(String),
    Warning(String),
    Error(String),
}

impl From<Result<Outcome, Rejection>> for Notice {
    fn from(result: Result<Outcome, Rejection>) -> Self {
        match result {
            Ok(outcome) => Notice::Success(outcome.notice().to_string()),
            Err(rejection) => Notice::Warning(rejection.to_string()),
        }
    }
}

/// Hands out one ticket per notice; only the latest ticket may dismiss it
#[derive(Debug, Default)]
struct NoticeTickets {
    latest: u32,
}

impl NoticeTickets {
    fn issue(&mut self) -> u32 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    fn is_current(&self, ticket: u32) -> bool {
        self.latest == ticket
    }
}

/// Writes snapshots to chrome.storage.local without waiting for the result
#[derive(Clone)]
struct ChromeStorage {
    on_error: Callback<String>,
}

impl Persist for ChromeStorage {
    fn save(&self, data: StorageData) {
        let on_error = self.on_error.clone();
        spawn_local(async move {
            if let Err(e) = save_storage(&data).await {
                log::warn!("{}", e);
                on_error.emit(e);
            }
        });
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(AppState::default);
    let loading = use_state(|| true);
    let notice = use_state(|| None::<Notice>);
    let notice_tickets: Rc<RefCell<NoticeTickets>> = use_mut_ref(NoticeTickets::default);
    let quick_input = use_state(String::new);
    // Some while the note editor is open
    let draft = use_state(|| None::<NoteDraft>);

    let storage = {
        let notice = notice.clone();
        ChromeStorage {
            on_error: Callback::from(move |e: String| notice.set(Some(Notice::Error(e)))),
        }
    };

    // Load saved data on mount
    {
        let state = state.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let data = load_storage().await;
                apply_theme(data.settings.theme);
                state.set(AppState::from_storage(data));
                loading.set(false);
            });
            || ()
        });
    }

    // Dismiss each notice after a while unless a newer one replaced it
    {
        let notice = notice.clone();
        let notice_tickets = notice_tickets.clone();

        use_effect_with((*notice).clone(), move |current| {
            let ticket = notice_tickets.borrow_mut().issue();
            if current.is_some() {
                spawn_local(async move {
                    sleep(NOTICE_DURATION).await;
                    if notice_tickets.borrow().is_current(ticket) {
                        notice.set(None);
                    }
                });
            }
            || ()
        });
    }

    // Mode switch
    let on_mode = {
        let state = state.clone();
        move |mode: Mode| {
            let state = state.clone();
            Callback::from(move |_| {
                let mut next = (*state).clone();
                if next.set_mode(mode) {
                    state.set(next);
                }
            })
        }
    };

    let on_toggle_theme = {
        let state = state.clone();
        let notice = notice.clone();
        let storage = storage.clone();

        Callback::from(move |_| {
            let mut next = (*state).clone();
            let result = next.toggle_theme(&storage);
            apply_theme(next.settings.theme);
            state.set(next);
            notice.set(Some(result.into()));
        })
    };

    let on_search_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*state).clone();
                next.set_search_query(&input.value());
                state.set(next);
            }
        })
    };

    let on_quick_input = {
        let quick_input = quick_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                quick_input.set(input.value());
            }
        })
    };

    // Enter: classify, Shift+Enter: quick note, Ctrl/Cmd+Enter: full editor
    let on_quick_keydown = {
        let state = state.clone();
        let notice = notice.clone();
        let quick_input = quick_input.clone();
        let draft = draft.clone();
        let storage = storage.clone();

        Callback::from(move |e: KeyboardEvent| {
            if e.key() != "Enter" {
                return;
            }
            let submit = Submit::from_modifiers(e.shift_key(), e.ctrl_key() || e.meta_key());
            let Some(action) = quick_add(&quick_input, submit) else {
                return;
            };
            e.prevent_default();

            let mut next = (*state).clone();
            match action {
                QuickAdd::AddLink(url) => notice.set(Some(next.add_link(&url, &storage).into())),
                QuickAdd::AddNote(text) => notice.set(Some(next.add_note(&text, "", &storage).into())),
                QuickAdd::OpenEditor(text) => {
                    let opened = next.open_note_editor(None);
                    draft.set(Some(NoteDraft { content: text, ..opened }));
                }
            }
            state.set(next);
            quick_input.set(String::new());
        })
    };

    let on_open_link = Callback::from(move |url: String| {
        spawn_local(async move {
            if let Err(e) = openTab(&url).await {
                log::warn!("Failed to open {}: {:?}", url, e);
            }
        });
    });

    let on_delete_link = {
        let state = state.clone();
        let notice = notice.clone();
        let storage = storage.clone();

        Callback::from(move |id: String| {
            let mut next = (*state).clone();
            let result = next.delete_link(&id, &storage);
            state.set(next);
            notice.set(Some(result.into()));
        })
    };

    let on_delete_note = {
        let state = state.clone();
        let notice = notice.clone();
        let storage = storage.clone();

        Callback::from(move |id: String| {
            let mut next = (*state).clone();
            let result = next.delete_note(&id, &storage);
            state.set(next);
            notice.set(Some(result.into()));
        })
    };

    let on_open_note = {
        let state = state.clone();
        let draft = draft.clone();

        Callback::from(move |id: String| {
            let mut next = (*state).clone();
            draft.set(Some(next.open_note_editor(Some(&id))));
            state.set(next);
        })
    };

    let on_draft_title = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let (Some(input), Some(current)) = (e.target_dyn_into::<HtmlInputElement>(), (*draft).clone()) {
                draft.set(Some(NoteDraft { title: input.value(), ..current }));
            }
        })
    };

    let on_draft_content = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let (Some(input), Some(current)) = (e.target_dyn_into::<HtmlTextAreaElement>(), (*draft).clone()) {
                draft.set(Some(NoteDraft { content: input.value(), ..current }));
            }
        })
    };

    let on_save_note = {
        let state = state.clone();
        let notice = notice.clone();
        let draft = draft.clone();
        let storage = storage.clone();

        Callback::from(move |_: ()| {
            let Some(current) = (*draft).clone() else {
                return;
            };
            let mut next = (*state).clone();
            let editing = next.editing_note_id.clone();
            let result = next.save_note(editing.as_deref(), &current.title, &current.content, &storage);
            // The editor stays open on rejection
            if result.is_ok() {
                draft.set(None);
            }
            state.set(next);
            notice.set(Some(result.into()));
        })
    };

    let on_close_editor = {
        let state = state.clone();
        let draft = draft.clone();

        Callback::from(move |_: ()| {
            let mut next = (*state).clone();
            next.close_note_editor();
            state.set(next);
            draft.set(None);
        })
    };

    // Ctrl/Cmd+Enter saves, Escape closes
    let on_editor_keydown = {
        let on_save_note = on_save_note.clone();
        let on_close_editor = on_close_editor.clone();

        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && (e.ctrl_key() || e.meta_key()) {
                e.prevent_default();
                on_save_note.emit(());
            } else if e.key() == "Escape" {
                on_close_editor.emit(());
            }
        })
    };

    let is_busy = *loading;
    let mode = state.mode;
    let view = state.view(Utc::now());
    let theme_label = match state.settings.theme {
        Theme::Dark => "☀️",
        Theme::Light => "🌙",
    };

    html! {
        <div class="popup">
            <div class="popup-header">
                <h1 class="popup-title">{"Glidebar"}</h1>
                <Button onclick={on_toggle_theme} variant={ButtonVariant::Plain} disabled={is_busy}>
                    {theme_label}
                </Button>
            </div>

            // Mode navigation
            <div class="pf-v5-c-tabs tabs-nav">
                <ul class="pf-v5-c-tabs__list">
                    <li class={if mode == Mode::Links { "pf-v5-c-tabs__item pf-m-current" } else { "pf-v5-c-tabs__item" }}>
                        <button class="pf-v5-c-tabs__link" onclick={on_mode(Mode::Links)}>
                            <span class="pf-v5-c-tabs__item-text">{"Links"}</span>
                        </button>
                    </li>
                    <li class={if mode == Mode::Notes { "pf-v5-c-tabs__item pf-m-current" } else { "pf-v5-c-tabs__item" }}>
                        <button class="pf-v5-c-tabs__link" onclick={on_mode(Mode::Notes)}>
                            <span class="pf-v5-c-tabs__item-text">{"Notes"}</span>
                        </button>
                    </li>
                </ul>
            </div>

            // Status display
            {match &*notice {
                Some(Notice::Success(msg)) => html! {
                    <Alert r#type={AlertType::Success} title={msg.clone()} inline={true}>
                    </Alert>
                },
                Some(Notice::Warning(msg)) => html! {
                    <Alert r#type={AlertType::Warning} title={msg.clone()} inline={true}>
                    </Alert>
                },
                Some(Notice::Error(msg)) => html! {
                    <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                        {msg.clone()}
                    </Alert>
                },
                None => html! {}
            }}

            <input
                type="text"
                class="quick-add-input"
                placeholder="Paste a URL or type a note… (Shift+Enter: quick note)"
                value={(*quick_input).clone()}
                oninput={on_quick_input}
                onkeydown={on_quick_keydown}
                disabled={is_busy}
            />

            <input
                type="text"
                class="search-input"
                placeholder={if mode == Mode::Links { "Search links..." } else { "Search notes..." }}
                value={state.search_query.clone()}
                oninput={on_search_input}
                disabled={is_busy}
            />

            if is_busy {
                <div class="loading-text-center">
                    <Spinner />
                </div>
            } else {
                <div class="content-area">
                    <ContentArea
                        {view}
                        {on_open_link}
                        {on_delete_link}
                        {on_open_note}
                        {on_delete_note}
                    />
                </div>
            }

            // Note editor
            if let Some(current) = (*draft).clone() {
                <div class="note-editor">
                    <h2 class="note-editor-title">
                        {if state.editing_note_id.is_some() { "✍️ Edit Note" } else { "✨ New Note" }}
                    </h2>
                    <input
                        type="text"
                        class="note-title-input"
                        placeholder="Title (optional)"
                        value={current.title}
                        oninput={on_draft_title}
                    />
                    <textarea
                        class="note-content-input"
                        placeholder="Write your note…"
                        value={current.content}
                        oninput={on_draft_content}
                        onkeydown={on_editor_keydown}
                    />
                    <div class="note-editor-actions">
                        <Button onclick={on_close_editor.reform(|_| ())} variant={ButtonVariant::Secondary}>
                            {"Cancel"}
                        </Button>
                        <Button onclick={on_save_note.reform(|_| ())} variant={ButtonVariant::Primary}>
                            {"Save"}
                        </Button>
                    </div>
                </div>
            }

            <p class="footer-popup">
                {format!("{} links • {} notes", state.links.len(), state.notes.len())}
            </p>
        </div>
    }
}

// Helper functions

/// Load the saved record. Missing or unreadable data gives an empty record.
async fn load_storage() -> StorageData {
    let stored = match getStorage(STORAGE_KEY).await {
        Ok(value) if value.is_null() || value.is_undefined() => None,
        Ok(value) => match serde_wasm_bindgen::from_value::<serde_json::Value>(value) {
            Ok(json) => Some(json),
            Err(e) => {
                log::warn!("Failed to parse storage: {:?}", e);
                None
            }
        },
        Err(e) => {
            log::warn!("Failed to get storage: {:?}", e);
            None
        }
    };

    StorageData::from_stored(stored)
}

async fn save_storage(storage: &StorageData) -> Result<(), String> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let storage_js = storage
        .serialize(&serializer)
        .map_err(|e| format!("Failed to serialize storage: {:?}", e))?;

    setStorage(STORAGE_KEY, storage_js)
        .await
        .map_err(|e| format!("Failed to save: {:?}", e))
}

fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());

    match root {
        Some(root) => {
            if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
                log::warn!("Failed to apply theme: {:?}", e);
            }
        }
        None => log::warn!("No document to apply theme to"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_notice_ticket_is_current() {
        let mut tickets = NoticeTickets::default();

        let first = tickets.issue();
        assert!(tickets.is_current(first));

        let second = tickets.issue();
        assert!(!tickets.is_current(first));
        assert!(tickets.is_current(second));
    }

    #[test]
    fn test_notice_from_outcome() {
        assert!(matches!(
            Notice::from(Ok(Outcome::LinkAdded)),
            Notice::Success(msg) if msg == "Link added"
        ));
        assert!(matches!(
            Notice::from(Err(Rejection::EmptyNote)),
            Notice::Warning(msg) if msg == "Note content cannot be empty"
        ));
    }
}
