//! Card Entity
//!
//! A single free-text note on the board, plus the wire shapes exchanged with
//! the remote store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::store::{CardStore, StoreError};

/// Text shown in place of an empty card's content
pub const PLACEHOLDER_TEXT: &str = "Click to start noting";

/// A note on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique identifier, immutable after creation
    pub id: u64,
    /// Free text, may be empty
    pub content: String,
    /// Creation timestamp, immutable
    pub created_at: DateTime<Utc>,
}

impl Card {
    pub fn new(id: u64, content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            content: content.into(),
            created_at,
        }
    }

    /// Same card with different content
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..self.clone()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Content, or the placeholder when there is none
    pub fn display_text(&self) -> &str {
        if self.content.is_empty() {
            PLACEHOLDER_TEXT
        } else {
            &self.content
        }
    }
}

impl Entity for Card {
    type Id = u64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Create request body; the server fills in whatever is missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&Card> for PartialCard {
    fn from(card: &Card) -> Self {
        Self {
            id: Some(card.id),
            content: Some(card.content.clone()),
            created_at: Some(card.created_at),
        }
    }
}

/// Update/delete response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
    pub message: String,
}

impl Ack {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Negative acknowledgements become `RemoteRejected`
    pub fn into_result(self) -> Result<Ack, StoreError> {
        if self.success {
            Ok(self)
        } else {
            Err(StoreError::RemoteRejected(self.message))
        }
    }
}

/// Card entity: persists content edits through a store
///
/// The record handed to the store always carries the latest edited text;
/// the wrapped card only changes once the store accepted the write.
#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    card: Card,
}

impl CardModel {
    pub fn new(card: Card) -> Self {
        Self { card }
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn into_card(self) -> Card {
        self.card
    }

    /// Persist new content. A write refused by the store is reported as
    /// `StoreError::Validation`; transport failures pass through unchanged.
    pub async fn update<S>(&mut self, content: impl Into<String>, store: &S) -> Result<Card, StoreError>
    where
        S: CardStore + ?Sized,
    {
        let candidate = self.card.with_content(content);
        match store.update_card(candidate.id, &candidate).await {
            Ok(ack) => {
                log::debug!("card {} updated: {}", candidate.id, ack.message);
                self.card = candidate;
                Ok(self.card.clone())
            }
            Err(StoreError::RemoteRejected(message)) => {
                log::warn!("card {} update rejected: {}", candidate.id, message);
                Err(StoreError::Validation(message))
            }
            Err(e) => Err(e),
        }
    }
}

impl From<Card> for CardModel {
    fn from(card: Card) -> Self {
        Self::new(card)
    }
}
