//! Add Card Component
//!
//! The tile that appends a new card to the board.

use leptos::prelude::*;

/// Run `on_add` unless the control is disabled; returns whether it ran
fn request_add(disabled: bool, on_add: impl FnOnce()) -> bool {
    if disabled {
        return false;
    }
    on_add();
    true
}

/// "Add new card" control; does nothing while disabled
#[component]
pub fn CardAddNew(
    #[prop(into)] on_add: Callback<()>,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            class="card card-add-new"
            data-testid="card-add-new"
            disabled=move || disabled.get()
            on:click=move |_| {
                request_add(disabled.get_untracked(), || on_add.run(()));
            }
        >
            "+"
        </button>
    }
}
