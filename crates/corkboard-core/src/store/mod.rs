//! Remote Store Client
//!
//! The card persistence contract and its implementations:
//! - http: JSON over HTTP against the `/cards` resource
//! - memory: in-process fake with failure injection, for tests and demos

mod http;
mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Ack, Card, PartialCard};

pub use http::HttpCardStore;
pub use memory::{FailureKind, MemoryCardStore, StoreCall};

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Why a store operation did not apply
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Transport failure: connection refused, timeout, unreadable body
    #[error("network error: {0}")]
    Network(String),
    /// Well-formed response saying the operation did not apply
    #[error("rejected by remote store: {0}")]
    RemoteRejected(String),
    /// The storage layer refused a write
    #[error("validation failed: {0}")]
    Validation(String),
}

/// Persistence contract for the board's cards
///
/// A returned `Ack` is always a positive one; implementations turn negative
/// acknowledgements into `StoreError::RemoteRejected`.
#[async_trait(?Send)]
pub trait CardStore {
    /// Every stored card, in store order
    async fn list_cards(&self) -> StoreResult<Vec<Card>>;

    /// Create a card. `None` means the store acknowledged without echoing
    /// the record back.
    async fn create_card(&self, card: &PartialCard) -> StoreResult<Option<Card>>;

    /// Replace the stored record for `id`
    async fn update_card(&self, id: u64, card: &Card) -> StoreResult<Ack>;

    /// Delete the stored record for `id`
    async fn delete_card(&self, id: u64) -> StoreResult<Ack>;
}

#[async_trait(?Send)]
impl<S: CardStore + ?Sized> CardStore for std::rc::Rc<S> {
    async fn list_cards(&self) -> StoreResult<Vec<Card>> {
        (**self).list_cards().await
    }

    async fn create_card(&self, card: &PartialCard) -> StoreResult<Option<Card>> {
        (**self).create_card(card).await
    }

    async fn update_card(&self, id: u64, card: &Card) -> StoreResult<Ack> {
        (**self).update_card(id, card).await
    }

    async fn delete_card(&self, id: u64) -> StoreResult<Ack> {
        (**self).delete_card(id).await
    }
}
