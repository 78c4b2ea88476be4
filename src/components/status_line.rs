//! Status Line Component
//!
//! Shows the last failed card operation; clears itself after a while.

use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{store_clear_status, use_app_store, AppStateStoreFields};

const STATUS_TIMEOUT: Duration = Duration::from_secs(6);

#[component]
pub fn StatusLine() -> impl IntoView {
    let store = use_app_store();

    // Auto-dismiss, unless a newer message replaced this one meanwhile
    Effect::new(move |_| {
        if let Some(message) = store.status().get() {
            spawn_local(async move {
                sleep(STATUS_TIMEOUT).await;
                if store.status().get_untracked().as_deref() == Some(message.as_str()) {
                    store_clear_status(&store);
                }
            });
        }
    });

    view! {
        <Show when=move || store.status().get().is_some()>
            <div class="status-line" role="alert">
                <span class="status-text">{move || store.status().get().unwrap_or_default()}</span>
                <button class="close-btn" on:click=move |_| store_clear_status(&store)>"×"</button>
            </div>
        </Show>
    }
}
