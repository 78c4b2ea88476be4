//! Corkboard Frontend App
//!
//! Main application component: the board with its cards and the add tile.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Board, CardAddNew, CardView, StatusLine};
use crate::context::BoardContext;
use crate::store::{AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::default());
    let board = BoardContext::new(store);

    // Provide context to all children
    provide_context(store);
    provide_context(board);

    // Load cards once on mount
    Effect::new(move |prev: Option<()>| {
        if prev.is_none() {
            board.load_all();
        }
    });

    view! {
        <main class="app-layout">
            <h1>"Corkboard"</h1>
            <StatusLine />
            <Board>
                <For
                    each=move || store.cards().read().to_vec()
                    key=|card| card.id
                    children=move |card| {
                        let id = card.id;
                        view! {
                            <CardView
                                card=card
                                stored=Signal::derive(move || store.cards().read().get(id).cloned())
                                on_update=move |card| board.update_card(card)
                                on_delete=move |id| board.delete_card(id)
                            />
                        }
                    }
                />
                <CardAddNew
                    on_add=move |_| board.add_card()
                    disabled=Signal::derive(move || !store.loaded().get())
                />
            </Board>
        </main>
    }
}
