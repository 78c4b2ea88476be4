//! Board Collection
//!
//! The canonical, insertion-ordered list of cards and its reconciliation
//! with the remote store.
//!
//! Every operation runs in three steps so a UI can release its state
//! between them while a request is in flight:
//! 1. apply the change locally (`Cards::append`, `update`, `remove`), which
//!    returns a `Change` record
//! 2. send it (`Change::push`)
//! 3. `Cards::settle` the outcome: confirm on success, compensate on failure
//!
//! `Board` runs all three for callers that can hold the collection across
//! the request. The client is the id authority: the factory assigns ids and
//! an echoed record only replaces the local one when the ids agree.

use thiserror::Error;

use crate::domain::{create_card, Card, CardModel, CardOverrides, PartialCard};
use crate::store::{CardStore, StoreError, StoreResult};

/// Board-level failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("no card with id {0} on the board")]
    UnknownCard(u64),
    #[error("card {0} is already on the board")]
    DuplicateCard(u64),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A local change waiting for the store's answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Added(Card),
    Updated { before: Card, after: Card },
    Removed { card: Card, index: usize },
}

impl Change {
    pub fn card_id(&self) -> u64 {
        match self {
            Change::Added(card) => card.id,
            Change::Updated { after, .. } => after.id,
            Change::Removed { card, .. } => card.id,
        }
    }

    /// Send the request matching this change. `Some` carries the record the
    /// store reported back.
    pub async fn push<S>(&self, store: &S) -> StoreResult<Option<Card>>
    where
        S: CardStore + ?Sized,
    {
        match self {
            Change::Added(card) => store.create_card(&PartialCard::from(card)).await,
            Change::Updated { before, after } => {
                let mut model = CardModel::new(before.clone());
                model.update(after.content.clone(), store).await.map(Some)
            }
            Change::Removed { card, .. } => store.delete_card(card.id).await.map(|_| None),
        }
    }
}

/// Ordered card collection with unique ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cards {
    cards: Vec<Card>,
}

impl Cards {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.clone()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    /// Replace everything with a freshly loaded list. Repeated ids keep the
    /// first occurrence.
    pub fn replace_all(&mut self, cards: Vec<Card>) {
        self.cards.clear();
        for card in cards {
            if self.contains(card.id) {
                log::warn!("dropping duplicate card {} from loaded list", card.id);
                continue;
            }
            self.cards.push(card);
        }
    }

    /// Fresh card from the factory whose id is not on the board yet
    pub fn new_card(&self) -> Card {
        loop {
            let card = create_card(CardOverrides::default());
            if !self.contains(card.id) {
                return card;
            }
        }
    }

    /// Append a card optimistically
    pub fn append(&mut self, card: Card) -> Result<Change, BoardError> {
        if self.contains(card.id) {
            return Err(BoardError::DuplicateCard(card.id));
        }
        self.cards.push(card.clone());
        Ok(Change::Added(card))
    }

    /// Replace the id-matched card in place
    pub fn update(&mut self, card: Card) -> Result<Change, BoardError> {
        let index = self.position(card.id).ok_or(BoardError::UnknownCard(card.id))?;
        let before = std::mem::replace(&mut self.cards[index], card.clone());
        Ok(Change::Updated { before, after: card })
    }

    /// Remove the id-matched card
    pub fn remove(&mut self, id: u64) -> Result<Change, BoardError> {
        let index = self.position(id).ok_or(BoardError::UnknownCard(id))?;
        let card = self.cards.remove(index);
        Ok(Change::Removed { card, index })
    }

    /// Fold the store's answer into the collection: confirm on success,
    /// undo the local change on failure. The store error is handed back.
    pub fn settle(&mut self, change: &Change, outcome: StoreResult<Option<Card>>) -> Result<(), BoardError> {
        match outcome {
            Ok(echoed) => {
                self.confirm(change, echoed);
                Ok(())
            }
            Err(e) => {
                log::warn!("card {} change failed, reverting: {}", change.card_id(), e);
                self.revert(change);
                Err(e.into())
            }
        }
    }

    fn confirm(&mut self, change: &Change, echoed: Option<Card>) {
        let Some(echoed) = echoed else {
            return;
        };
        let expected = match change {
            Change::Added(card) => card,
            Change::Updated { after, .. } => after,
            Change::Removed { .. } => return,
        };
        if echoed.id != expected.id {
            log::warn!(
                "store answered card {} with id {}, keeping local record",
                expected.id,
                echoed.id
            );
            return;
        }
        // Only overwrite what this change put there.
        if let Some(index) = self.position(expected.id) {
            if self.cards[index] == *expected {
                self.cards[index] = echoed;
            }
        }
    }

    fn revert(&mut self, change: &Change) {
        match change {
            Change::Added(card) => {
                self.cards.retain(|c| c.id != card.id);
            }
            Change::Updated { before, after } => {
                if let Some(index) = self.position(after.id) {
                    if self.cards[index] == *after {
                        self.cards[index] = before.clone();
                    }
                }
            }
            Change::Removed { card, index } => {
                if !self.contains(card.id) {
                    let at = (*index).min(self.cards.len());
                    self.cards.insert(at, card.clone());
                }
            }
        }
    }
}

impl From<Vec<Card>> for Cards {
    fn from(cards: Vec<Card>) -> Self {
        let mut collection = Cards::new();
        collection.replace_all(cards);
        collection
    }
}

/// Board collection bound to a store
#[derive(Debug)]
pub struct Board<S> {
    cards: Cards,
    store: S,
}

impl<S: CardStore> Board<S> {
    pub fn new(store: S) -> Self {
        Self {
            cards: Cards::new(),
            store,
        }
    }

    pub fn cards(&self) -> &Cards {
        &self.cards
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch every card once and replace the collection. On failure the
    /// collection keeps whatever it had.
    pub async fn load_all(&mut self) -> Result<usize, BoardError> {
        let loaded = self.store.list_cards().await.map_err(|e| {
            log::warn!("loading cards failed: {}", e);
            e
        })?;
        self.cards.replace_all(loaded);
        log::debug!("loaded {} cards", self.cards.len());
        Ok(self.cards.len())
    }

    /// Append a new empty card and create it remotely
    pub async fn add_card(&mut self) -> Result<Card, BoardError> {
        let card = self.cards.new_card();
        let id = card.id;
        let change = self.cards.append(card)?;
        self.apply(&change).await?;
        log::debug!("added card {}", id);
        self.cards.get(id).cloned().ok_or(BoardError::UnknownCard(id))
    }

    /// Replace the matching card and persist its content
    pub async fn update_card(&mut self, card: Card) -> Result<Card, BoardError> {
        let id = card.id;
        let change = self.cards.update(card)?;
        self.apply(&change).await?;
        log::debug!("updated card {}", id);
        self.cards.get(id).cloned().ok_or(BoardError::UnknownCard(id))
    }

    /// Remove the matching card locally and remotely
    pub async fn delete_card(&mut self, id: u64) -> Result<(), BoardError> {
        let change = self.cards.remove(id)?;
        self.apply(&change).await?;
        log::debug!("deleted card {}", id);
        Ok(())
    }

    async fn apply(&mut self, change: &Change) -> Result<(), BoardError> {
        let outcome = change.push(&self.store).await;
        self.cards.settle(change, outcome)
    }
}
