//! Card Commands
//!
//! Handlers for the `/cards` resource.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;

use super::error::ApiError;
use crate::repository::{CardRepository, Repository};
use crate::domain::{Ack, Card, DomainError, PartialCard};
use crate::AppState;

/// `GET /cards`
pub async fn list_cards(State(state): State<AppState>) -> Result<Json<Vec<Card>>, ApiError> {
    let cards = state.cards.list().await?;
    tracing::debug!(count = cards.len(), "listed cards");
    Ok(Json(cards))
}

/// `POST /cards`: stores the card as sent; missing fields get defaults and
/// a missing id is assigned here
pub async fn create_card(
    State(state): State<AppState>,
    Json(partial): Json<PartialCard>,
) -> Result<Json<Card>, ApiError> {
    let content = partial.content.unwrap_or_default();
    let created_at = partial.created_at.unwrap_or_else(Utc::now);
    let created = match partial.id {
        Some(id) => state.cards.create(&Card { id, content, created_at }).await?,
        None => state.cards.create_with_next_id(&content, created_at).await?,
    };
    tracing::info!(card_id = created.id, "card created");
    Ok(Json(created))
}

/// `PUT /cards/{id}`: replaces the stored record
pub async fn update_card(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(card): Json<Card>,
) -> Result<Json<Ack>, ApiError> {
    if card.id != id {
        return Err(DomainError::InvalidInput(format!(
            "Card id {} does not match path id {}",
            card.id, id
        ))
        .into());
    }
    state.cards.update(&card).await?;
    tracing::info!(card_id = id, "card updated");
    Ok(Json(Ack::ok("Card updated successfully")))
}

/// `DELETE /cards/{id}`
pub async fn delete_card(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Ack>, ApiError> {
    state.cards.delete(id).await?;
    tracing::info!(card_id = id, "card deleted");
    Ok(Json(Ack::ok("Card deleted successfully")))
}
