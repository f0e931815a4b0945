/// Components for the popup content area

use yew::prelude::*;

use crate::render::{EmptyState, LinkRow, NoteCard, View};

#[derive(Properties, PartialEq)]
pub struct ContentAreaProps {
    pub view: View,
    pub on_open_link: Callback<String>,
    pub on_delete_link: Callback<String>,
    pub on_open_note: Callback<String>,
    pub on_delete_note: Callback<String>,
}

#[function_component(ContentArea)]
pub fn content_area(props: &ContentAreaProps) -> Html {
    match &props.view {
        View::Empty(empty) => html! { <EmptyStateView state={empty.clone()} /> },
        View::Links(rows) => html! {
            <div class="links-list">
                {for rows.iter().map(|row| html! {
                    <LinkItem
                        key={row.id.clone()}
                        row={row.clone()}
                        on_open={props.on_open_link.clone()}
                        on_delete={props.on_delete_link.clone()}
                    />
                })}
            </div>
        },
        View::Notes(cards) => html! {
            <div class="notes-grid">
                {for cards.iter().map(|card| html! {
                    <NoteCardItem
                        key={card.id.clone()}
                        card={card.clone()}
                        on_open={props.on_open_note.clone()}
                        on_delete={props.on_delete_note.clone()}
                    />
                })}
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub state: EmptyState,
}

#[function_component(EmptyStateView)]
pub fn empty_state_view(props: &EmptyStateProps) -> Html {
    html! {
        <div class="empty-state">
            <div class="empty-icon">{props.state.icon}</div>
            <div class="empty-text">{&props.state.message}</div>
            if let Some(hint) = props.state.hint {
                <div class="empty-hint">{hint}</div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LinkItemProps {
    pub row: LinkRow,
    /// Receives the link URL
    pub on_open: Callback<String>,
    /// Receives the link id
    pub on_delete: Callback<String>,
}

#[function_component(LinkItem)]
pub fn link_item(props: &LinkItemProps) -> Html {
    let row = &props.row;

    let onclick = props.on_open.reform({
        let url = row.url.clone();
        move |_: MouseEvent| url.clone()
    });

    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = row.id.clone();
        Callback::from(move |e: MouseEvent| {
            // Don't open the link as well
            e.stop_propagation();
            on_delete.emit(id.clone());
        })
    };

    html! {
        <div class="link-item" {onclick}>
            <div class="link-left">
                <img class="favicon" src={row.favicon.clone()} alt="" />
                <div class="link-text">
                    <div class="link-title">{&row.title}</div>
                    <div class="link-url">{&row.url}</div>
                </div>
            </div>
            <button class="delete-link" title="Delete link" onclick={on_delete}>
                {"🗑️"}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoteCardProps {
    pub card: NoteCard,
    /// Both callbacks receive the note id
    pub on_open: Callback<String>,
    pub on_delete: Callback<String>,
}

#[function_component(NoteCardItem)]
pub fn note_card_item(props: &NoteCardProps) -> Html {
    let card = &props.card;

    let onclick = props.on_open.reform({
        let id = card.id.clone();
        move |_: MouseEvent| id.clone()
    });

    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = card.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_delete.emit(id.clone());
        })
    };

    html! {
        <div class="note-card" {onclick}>
            if let Some(title) = &card.title {
                <div class="note-card-title">{title}</div>
            }
            <div class="note-preview">{&card.preview}</div>
            <div class="note-footer">
                <div class="note-time">{&card.updated}</div>
                <button class="delete-note" title="Delete note" onclick={on_delete}>
                    {"🗑️"}
                </button>
            </div>
        </div>
    }
}
