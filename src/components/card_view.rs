//! Card View Component
//!
//! One card on the board. Clicking the card enters edit mode; leaving the
//! text area commits the text; Backspace on an empty card deletes it. The
//! rules live in `CardEditor`, this component only feeds it DOM events.

use corkboard_core::{Card, CardEditor, Commit, EditKey, KeyOutcome};
use leptos::html::Textarea;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn as_textarea(target: Option<web_sys::EventTarget>) -> Option<web_sys::HtmlTextAreaElement> {
    target.and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
}

fn caret_of(textarea: &web_sys::HtmlTextAreaElement) -> usize {
    textarea
        .selection_start()
        .ok()
        .flatten()
        .map(|pos| pos as usize)
        .unwrap_or(0)
}

/// A single card with view/edit modes. `stored` is the card as the board
/// currently holds it; confirmed and reverted records flow back through it.
#[component]
pub fn CardView(
    card: Card,
    #[prop(into)] stored: Signal<Option<Card>>,
    #[prop(into)] on_update: Callback<Card>,
    #[prop(into)] on_delete: Callback<u64>,
) -> impl IntoView {
    let id = card.id;
    let editor = RwSignal::new(CardEditor::new(&card));
    let is_editing = Memo::new(move |_| editor.with(|e| e.is_editing()));
    let is_empty = Memo::new(move |_| editor.with(|e| e.content().is_empty()));
    let textarea_ref = NodeRef::<Textarea>::new();

    Effect::new(move |_| {
        if let Some(card) = stored.get() {
            if !editor.with_untracked(|e| e.is_editing()) {
                editor.update(|e| e.sync(&card));
            }
        }
    });

    // Focus the text area once per edit session, caret at the start
    Effect::new(move |_| {
        if is_editing.get() {
            if let Some(textarea) = textarea_ref.get() {
                let _ = textarea.focus();
                let _ = textarea.set_selection_range(0, 0);
            }
        }
    });

    let sync_input = move |target: Option<web_sys::EventTarget>| {
        if let Some(textarea) = as_textarea(target) {
            let caret = caret_of(&textarea);
            editor.update(|e| e.input(textarea.value(), caret));
        }
    };

    // Only an empty card reacts here; ordinary deletion is left to the text
    // area and comes back through `input`.
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let key = EditKey::from_key(&ev.key());
        if key != EditKey::Backspace || !is_empty.get_untracked() {
            return;
        }
        let outcome = editor
            .try_update_untracked(|e| e.key_down(key))
            .unwrap_or(KeyOutcome::Ignored);
        if let KeyOutcome::Delete(card_id) = outcome {
            ev.prevent_default();
            log::debug!("card {} emptied, deleting", card_id);
            on_delete.run(card_id);
        }
    };

    let commit = move || {
        if let Some(Commit { card, changed }) = editor.try_update(|e| e.blur()).flatten() {
            log::debug!("card {} committed (changed: {})", card.id, changed);
            on_update.run(card);
        }
    };

    view! {
        <div
            class=move || if is_editing.get() { "card editing" } else { "card" }
            data-testid=format!("card-{}", id)
            on:click=move |_| editor.update(|e| e.activate())
        >
            <Show
                when=move || is_editing.get()
                fallback=move || view! {
                    <p class=move || if is_empty.get() { "card-text placeholder" } else { "card-text" }>
                        {move || editor.with(|e| e.display_text().to_string())}
                    </p>
                }
            >
                <textarea
                    class="card-textarea"
                    node_ref=textarea_ref
                    prop:value=move || editor.with(|e| e.content().to_string())
                    on:input=move |ev| sync_input(ev.target())
                    on:keydown=on_keydown
                    on:blur=move |_| commit()
                ></textarea>
            </Show>
        </div>
    }
}
