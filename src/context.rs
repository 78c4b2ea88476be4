//! Board Context
//!
//! Card operations shared with every component via the Leptos Context API.
//! Each operation changes the store first, sends the request in the
//! background, then confirms or undoes the change when the answer arrives,
//! so other cards stay editable while a request is in flight.

use corkboard_core::{BoardError, Card, CardStore, Change};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{store_set_status, store_with_cards, AppStore, AppStateStoreFields};

#[derive(Clone, Copy)]
pub struct BoardContext {
    store: AppStore,
}

impl BoardContext {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Fetch every card once and replace the board
    pub fn load_all(&self) {
        let store = self.store;
        spawn_local(async move {
            match commands::remote_store().list_cards().await {
                Ok(cards) => {
                    log::info!("loaded {} cards", cards.len());
                    store_with_cards(&store, |c| c.replace_all(cards));
                }
                Err(e) => {
                    log::error!("loading cards failed: {}", e);
                    store_set_status(&store, format!("Could not load cards: {}", e));
                }
            }
            store.loaded().set(true);
        });
    }

    /// Append a fresh card and create it remotely
    pub fn add_card(&self) {
        let change = store_with_cards(&self.store, |cards| {
            let card = cards.new_card();
            cards.append(card)
        });
        self.sync(change);
    }

    /// Replace a card with its edited version and persist it
    pub fn update_card(&self, card: Card) {
        let change = store_with_cards(&self.store, |cards| cards.update(card));
        self.sync(change);
    }

    /// Remove a card locally and remotely
    pub fn delete_card(&self, id: u64) {
        let change = store_with_cards(&self.store, |cards| cards.remove(id));
        self.sync(change);
    }

    fn sync(&self, change: Result<Change, BoardError>) {
        let store = self.store;
        let change = match change {
            Ok(change) => change,
            Err(e) => {
                log::warn!("board change refused: {}", e);
                store_set_status(&store, e.to_string());
                return;
            }
        };
        spawn_local(async move {
            let outcome = change.push(&commands::remote_store()).await;
            if let Err(e) = store_with_cards(&store, |cards| cards.settle(&change, outcome)) {
                store_set_status(&store, format!("Card {} was not saved: {}", change.card_id(), e));
            }
        });
    }
}
