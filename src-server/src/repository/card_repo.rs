//! Card Repository
//!
//! SQLite-backed card storage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::db::DbConnection;
use super::traits::{CardRepository, Repository};
use crate::domain::{Card, DomainError, DomainResult};

/// SQLite implementation of the card repository
pub struct SqliteCardRepository {
    conn: DbConnection,
}

impl SqliteCardRepository {
    pub fn new(conn: DbConnection) -> Self {
        Self { conn }
    }
}

fn to_sql_id(id: u64) -> DomainResult<i64> {
    i64::try_from(id).map_err(|_| DomainError::InvalidInput(format!("Card id {} out of range", id)))
}

fn row_to_card(row: &Row<'_>) -> rusqlite::Result<Card> {
    let id: i64 = row.get(0)?;
    let created_at: String = row.get(2)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e)))?;
    Ok(Card {
        id: u64::try_from(id).unwrap_or_default(),
        content: row.get(1)?,
        created_at,
    })
}

fn select_card(conn: &Connection, id: i64) -> DomainResult<Option<Card>> {
    let card = conn
        .query_row(
            "SELECT id, content, created_at FROM cards WHERE id = ?1",
            params![id],
            row_to_card,
        )
        .optional()?;
    Ok(card)
}

#[async_trait]
impl Repository<Card> for SqliteCardRepository {
    async fn create(&self, card: &Card) -> DomainResult<Card> {
        let id = to_sql_id(card.id)?;
        let conn = self.conn.lock().await;
        let inserted = conn.execute(
            "INSERT OR IGNORE INTO cards (id, content, created_at) VALUES (?1, ?2, ?3)",
            params![id, card.content, card.created_at.to_rfc3339()],
        )?;
        if inserted == 0 {
            return Err(DomainError::Conflict(format!("Card {} already exists", card.id)));
        }
        Ok(card.clone())
    }

    async fn find_by_id(&self, id: u64) -> DomainResult<Option<Card>> {
        let id = to_sql_id(id)?;
        let conn = self.conn.lock().await;
        select_card(&conn, id)
    }

    async fn list(&self) -> DomainResult<Vec<Card>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare("SELECT id, content, created_at FROM cards ORDER BY seq")?;
        let cards = stmt
            .query_map([], row_to_card)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(cards)
    }

    async fn update(&self, card: &Card) -> DomainResult<Card> {
        let id = to_sql_id(card.id)?;
        let conn = self.conn.lock().await;
        let changed = conn.execute(
            "UPDATE cards SET content = ?1 WHERE id = ?2",
            params![card.content, id],
        )?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("Card {} not found", card.id)));
        }
        select_card(&conn, id)?
            .ok_or_else(|| DomainError::NotFound(format!("Card {} not found", card.id)))
    }

    async fn delete(&self, id: u64) -> DomainResult<()> {
        let sql_id = to_sql_id(id)?;
        let conn = self.conn.lock().await;
        let deleted = conn.execute("DELETE FROM cards WHERE id = ?1", params![sql_id])?;
        if deleted == 0 {
            return Err(DomainError::NotFound(format!("Card {} not found", id)));
        }
        Ok(())
    }
}

#[async_trait]
impl CardRepository for SqliteCardRepository {
    async fn create_with_next_id(&self, content: &str, created_at: DateTime<Utc>) -> DomainResult<Card> {
        let conn = self.conn.lock().await;
        let max: Option<i64> = conn.query_row("SELECT MAX(id) FROM cards", [], |row| row.get(0))?;
        let max = max.unwrap_or(0).max(0);
        let id = max
            .checked_add(1)
            .ok_or_else(|| DomainError::Conflict(format!("No card id left after {}", max)))?;
        conn.execute(
            "INSERT INTO cards (id, content, created_at) VALUES (?1, ?2, ?3)",
            params![id, content, created_at.to_rfc3339()],
        )?;
        Ok(Card {
            id: id as u64,
            content: content.to_string(),
            created_at,
        })
    }
}
