//! In-Memory Card Store
//!
//! Injectable stand-in for the remote store. Each instance owns its cards,
//! so tests build a fresh one instead of resetting shared state. Failures
//! can be scheduled for the next call, and every call is recorded.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use chrono::Utc;

use super::{CardStore, StoreError, StoreResult};
use crate::domain::{Ack, Card, PartialCard};

/// Failure to inject into the next store call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Rejected,
}

/// A call observed by the store
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    List,
    Create(PartialCard),
    Update(u64, Card),
    Delete(u64),
}

/// In-process card store
#[derive(Debug, Default)]
pub struct MemoryCardStore {
    cards: RefCell<Vec<Card>>,
    calls: RefCell<Vec<StoreCall>>,
    next_failure: Cell<Option<FailureKind>>,
    acknowledge_only: Cell<bool>,
}

impl MemoryCardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: RefCell::new(cards),
            ..Self::default()
        }
    }

    /// Answer creates with `{}` instead of echoing the stored card
    pub fn acknowledge_only(self) -> Self {
        self.acknowledge_only.set(true);
        self
    }

    /// Make the next call fail
    pub fn fail_next(&self, kind: FailureKind) {
        self.next_failure.set(Some(kind));
    }

    /// Snapshot of the stored cards
    pub fn cards(&self) -> Vec<Card> {
        self.cards.borrow().clone()
    }

    /// Every call received so far
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: StoreCall) -> StoreResult<()> {
        self.calls.borrow_mut().push(call);
        match self.next_failure.take() {
            Some(FailureKind::Network) => Err(StoreError::Network("connection refused".to_string())),
            Some(FailureKind::Rejected) => Err(StoreError::RemoteRejected("rejected".to_string())),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl CardStore for MemoryCardStore {
    async fn list_cards(&self) -> StoreResult<Vec<Card>> {
        self.record(StoreCall::List)?;
        Ok(self.cards())
    }

    async fn create_card(&self, card: &PartialCard) -> StoreResult<Option<Card>> {
        self.record(StoreCall::Create(card.clone()))?;
        let mut cards = self.cards.borrow_mut();
        let id = match card.id {
            Some(id) if cards.iter().any(|c| c.id == id) => {
                return Err(StoreError::RemoteRejected(format!("Card {} already exists", id)));
            }
            Some(id) => id,
            None => cards.iter().map(|c| c.id).max().unwrap_or(0) + 1,
        };
        let created = Card {
            id,
            content: card.content.clone().unwrap_or_default(),
            created_at: card.created_at.unwrap_or_else(Utc::now),
        };
        cards.push(created.clone());
        if self.acknowledge_only.get() {
            Ok(None)
        } else {
            Ok(Some(created))
        }
    }

    async fn update_card(&self, id: u64, card: &Card) -> StoreResult<Ack> {
        self.record(StoreCall::Update(id, card.clone()))?;
        let mut cards = self.cards.borrow_mut();
        let ack = match cards.iter_mut().find(|c| c.id == id) {
            Some(existing) => {
                *existing = card.clone();
                Ack::ok("Card updated successfully")
            }
            None => Ack::rejected(format!("Card {} not found", id)),
        };
        ack.into_result()
    }

    async fn delete_card(&self, id: u64) -> StoreResult<Ack> {
        self.record(StoreCall::Delete(id))?;
        let mut cards = self.cards.borrow_mut();
        let before = cards.len();
        cards.retain(|c| c.id != id);
        let ack = if cards.len() < before {
            Ack::ok("Card deleted successfully")
        } else {
            Ack::rejected(format!("Card {} not found", id))
        };
        ack.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{create_card, CardOverrides};

    #[tokio::test]
    async fn test_create_assigns_missing_id() {
        let store = MemoryCardStore::with_cards(vec![create_card(CardOverrides {
            id: Some(4),
            ..Default::default()
        })]);
        let created = store.create_card(&PartialCard::default()).await.unwrap().unwrap();
        assert_eq!(created.id, 5);
        assert_eq!(store.cards().len(), 2);
    }

    #[tokio::test]
    async fn test_create_duplicate_id_rejected() {
        let card = create_card(CardOverrides::default());
        let store = MemoryCardStore::with_cards(vec![card.clone()]);
        let err = store.create_card(&PartialCard::from(&card)).await.unwrap_err();
        assert!(matches!(err, StoreError::RemoteRejected(_)));
    }

    #[tokio::test]
    async fn test_acknowledge_only_returns_none() {
        let store = MemoryCardStore::new().acknowledge_only();
        let card = create_card(CardOverrides::default());
        assert_eq!(store.create_card(&PartialCard::from(&card)).await.unwrap(), None);
        assert_eq!(store.cards(), vec![card]);
    }

    #[tokio::test]
    async fn test_update_unknown_id_rejected() {
        let store = MemoryCardStore::new();
        let card = create_card(CardOverrides::default());
        let err = store.update_card(card.id, &card).await.unwrap_err();
        assert!(matches!(err, StoreError::RemoteRejected(_)));
    }

    #[tokio::test]
    async fn test_scheduled_failure_fires_once() {
        let store = MemoryCardStore::new();
        store.fail_next(FailureKind::Network);
        assert!(matches!(store.list_cards().await, Err(StoreError::Network(_))));
        assert!(store.list_cards().await.is_ok());
        assert_eq!(store.calls(), vec![StoreCall::List, StoreCall::List]);
    }
}
