//! Corkboard Core
//!
//! Card lifecycle and synchronization, free of any UI toolkit:
//! - domain: Card record, factory, and the Card entity
//! - editor: a card's view/edit state machine
//! - board: the ordered card collection and its reconciliation
//! - store: remote store client (trait, HTTP, in-memory)

pub mod board;
pub mod domain;
pub mod editor;
pub mod store;

pub use board::{Board, BoardError, Cards, Change};
pub use domain::{
    create_card, create_many_cards, Ack, Card, CardModel, CardOverrides, Entity, PartialCard,
    PLACEHOLDER_TEXT,
};
pub use editor::{CardEditor, CardMode, Commit, EditKey, KeyOutcome};
pub use store::{CardStore, FailureKind, HttpCardStore, MemoryCardStore, StoreCall, StoreError, StoreResult};
