//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use corkboard_core::Cards;
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Cards on the board, in insertion order
    pub cards: Cards,
    /// Whether the initial load has finished (successfully or not)
    pub loaded: bool,
    /// Last failure to show the user
    pub status: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a change to the card collection, notifying readers once
pub fn store_with_cards<R>(store: &AppStore, f: impl FnOnce(&mut Cards) -> R) -> R {
    let field = store.cards();
    let mut cards = field.write();
    f(&mut *cards)
}

/// Show a failure in the status line
pub fn store_set_status(store: &AppStore, message: impl Into<String>) {
    store.status().set(Some(message.into()));
}

pub fn store_clear_status(store: &AppStore) {
    store.status().set(None);
}
