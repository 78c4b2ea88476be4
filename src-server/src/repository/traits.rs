//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Card, DomainResult, Entity};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Create a new entity; `Conflict` if the id is taken
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities in insertion order
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Update an existing entity; `NotFound` if absent. Returns the stored
    /// record.
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID; `NotFound` if absent
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}

/// Card storage with server-side id assignment
#[async_trait]
pub trait CardRepository: Repository<Card> {
    /// Store a card created without an id, giving it one past the largest
    /// stored id. Picking the id and inserting happen under one lock.
    /// `Conflict` once the id space is exhausted.
    async fn create_with_next_id(&self, content: &str, created_at: DateTime<Utc>) -> DomainResult<Card>;
}
