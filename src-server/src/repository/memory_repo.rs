//! In-Memory Card Repository
//!
//! Each instance owns its own list, so tests construct a fresh repository
//! instead of resetting shared state between runs.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use super::traits::{CardRepository, Repository};
use crate::domain::{Card, DomainError, DomainResult};

/// Insertion-ordered card storage held in memory
#[derive(Debug, Default)]
pub struct InMemoryCardRepository {
    cards: Mutex<Vec<Card>>,
}

impl InMemoryCardRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: Mutex::new(cards),
        }
    }
}

#[async_trait]
impl Repository<Card> for InMemoryCardRepository {
    async fn create(&self, card: &Card) -> DomainResult<Card> {
        let mut cards = self.cards.lock().await;
        if cards.iter().any(|c| c.id == card.id) {
            return Err(DomainError::Conflict(format!("Card {} already exists", card.id)));
        }
        cards.push(card.clone());
        Ok(card.clone())
    }

    async fn find_by_id(&self, id: u64) -> DomainResult<Option<Card>> {
        let cards = self.cards.lock().await;
        Ok(cards.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Card>> {
        Ok(self.cards.lock().await.clone())
    }

    async fn update(&self, card: &Card) -> DomainResult<Card> {
        let mut cards = self.cards.lock().await;
        let existing = cards
            .iter_mut()
            .find(|c| c.id == card.id)
            .ok_or_else(|| DomainError::NotFound(format!("Card {} not found", card.id)))?;
        // createdAt is fixed at creation
        existing.content = card.content.clone();
        Ok(existing.clone())
    }

    async fn delete(&self, id: u64) -> DomainResult<()> {
        let mut cards = self.cards.lock().await;
        let before = cards.len();
        cards.retain(|c| c.id != id);
        if cards.len() == before {
            return Err(DomainError::NotFound(format!("Card {} not found", id)));
        }
        Ok(())
    }
}

#[async_trait]
impl CardRepository for InMemoryCardRepository {
    async fn create_with_next_id(&self, content: &str, created_at: DateTime<Utc>) -> DomainResult<Card> {
        let mut cards = self.cards.lock().await;
        let max = cards.iter().map(|c| c.id).max().unwrap_or(0);
        let id = max
            .checked_add(1)
            .ok_or_else(|| DomainError::Conflict(format!("No card id left after {}", max)))?;
        let card = Card {
            id,
            content: content.to_string(),
            created_at,
        };
        cards.push(card.clone());
        Ok(card)
    }
}
