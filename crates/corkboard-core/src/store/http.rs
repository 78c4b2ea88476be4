//! HTTP Card Store
//!
//! JSON client for the `/cards` resource:
//!
//! | Method | Path          | Body        | Response                  |
//! |--------|---------------|-------------|---------------------------|
//! | GET    | `/cards`      | -           | `[Card]`                  |
//! | POST   | `/cards`      | PartialCard | `Card` or `{}`            |
//! | PUT    | `/cards/{id}` | Card        | `{success, message}`      |
//! | DELETE | `/cards/{id}` | -           | `{success, message}`      |

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};

use super::{CardStore, StoreError, StoreResult};
use crate::domain::{Ack, Card, PartialCard};

/// Remote store reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpCardStore {
    client: Client,
    base_url: String,
}

impl HttpCardStore {
    /// `base_url` is the server root, e.g. `http://localhost:4100`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn cards_url(&self) -> String {
        format!("{}/cards", self.base_url)
    }

    fn card_url(&self, id: u64) -> String {
        format!("{}/cards/{}", self.base_url, id)
    }
}

fn network(e: reqwest::Error) -> StoreError {
    StoreError::Network(e.to_string())
}

/// Message for a non-2xx response: the Ack message if the body has one
fn rejection(status: StatusCode, body: &str) -> StoreError {
    match serde_json::from_str::<Ack>(body) {
        Ok(ack) => StoreError::RemoteRejected(ack.message),
        Err(_) => StoreError::RemoteRejected(format!("HTTP {}", status)),
    }
}

async fn read_body(response: Response) -> StoreResult<(StatusCode, String)> {
    let status = response.status();
    let body = response.text().await.map_err(network)?;
    Ok((status, body))
}

async fn read_ack(response: Response) -> StoreResult<Ack> {
    let (status, body) = read_body(response).await?;
    if !status.is_success() {
        return Err(rejection(status, &body));
    }
    serde_json::from_str::<Ack>(&body)
        .map_err(|e| StoreError::Network(format!("unreadable acknowledgement: {}", e)))?
        .into_result()
}

/// Echoed card from a create response. `{}` or anything that is not a card
/// leaves the caller's local record authoritative.
fn echoed_card(body: &str) -> Option<Card> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    if value.as_object().is_some_and(|o| o.is_empty()) {
        return None;
    }
    match serde_json::from_value::<Card>(value) {
        Ok(card) => Some(card),
        Err(e) => {
            log::debug!("create response is not a card, keeping local record: {}", e);
            None
        }
    }
}

#[async_trait(?Send)]
impl CardStore for HttpCardStore {
    async fn list_cards(&self) -> StoreResult<Vec<Card>> {
        let response = self.client.get(self.cards_url()).send().await.map_err(network)?;
        let (status, body) = read_body(response).await?;
        if !status.is_success() {
            return Err(rejection(status, &body));
        }
        serde_json::from_str(&body)
            .map_err(|e| StoreError::Network(format!("unreadable card list: {}", e)))
    }

    async fn create_card(&self, card: &PartialCard) -> StoreResult<Option<Card>> {
        let response = self
            .client
            .post(self.cards_url())
            .json(card)
            .send()
            .await
            .map_err(network)?;
        let (status, body) = read_body(response).await?;
        if !status.is_success() {
            return Err(rejection(status, &body));
        }
        Ok(echoed_card(&body))
    }

    async fn update_card(&self, id: u64, card: &Card) -> StoreResult<Ack> {
        let response = self
            .client
            .put(self.card_url(id))
            .json(card)
            .send()
            .await
            .map_err(network)?;
        read_ack(response).await
    }

    async fn delete_card(&self, id: u64) -> StoreResult<Ack> {
        let response = self
            .client
            .delete(self.card_url(id))
            .send()
            .await
            .map_err(network)?;
        read_ack(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_trim_trailing_slash() {
        let store = HttpCardStore::new("http://localhost:4100/");
        assert_eq!(store.base_url(), "http://localhost:4100");
        assert_eq!(store.cards_url(), "http://localhost:4100/cards");
        assert_eq!(store.card_url(42), "http://localhost:4100/cards/42");
    }

    #[test]
    fn test_empty_ack_body_is_not_a_card() {
        assert_eq!(echoed_card("{}"), None);
        assert_eq!(echoed_card(""), None);
        assert_eq!(echoed_card(r#"{"ok":true}"#), None);
    }

    #[test]
    fn test_echoed_card_is_parsed() {
        let card = echoed_card(r#"{"id":3,"content":"","createdAt":"2024-05-01T00:00:00Z"}"#)
            .expect("card");
        assert_eq!(card.id, 3);
        assert!(card.content.is_empty());
    }

    #[test]
    fn test_rejection_prefers_ack_message() {
        let err = rejection(StatusCode::NOT_FOUND, r#"{"success":false,"message":"Card 9 not found"}"#);
        assert_eq!(err, StoreError::RemoteRejected("Card 9 not found".to_string()));

        let err = rejection(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(err, StoreError::RemoteRejected("HTTP 500 Internal Server Error".to_string()));
    }
}
