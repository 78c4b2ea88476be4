//! Corkboard Backend
//!
//! Layered architecture:
//! - domain: the card record (shared with the client) and domain errors
//! - repository: data access abstractions and implementations
//! - commands: HTTP handlers for the `/cards` resource

use std::sync::Arc;

use axum::middleware::from_fn;
use axum::routing::{get, put};
use axum::Router;
use corkboard_core::{create_many_cards, CardOverrides};
use tokio::net::TcpListener;

mod commands;
pub mod config;
pub mod domain;
pub mod logging;
pub mod repository;

pub use config::ServerConfig;
use domain::DomainResult;
use repository::{init_db, CardRepository, InMemoryCardRepository, Repository, SqliteCardRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub cards: Arc<dyn CardRepository>,
}

impl AppState {
    pub fn new(cards: Arc<dyn CardRepository>) -> Self {
        Self { cards }
    }

    /// State over a fresh in-memory repository
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryCardRepository::new()))
    }
}

/// Routes for the `/cards` resource
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/cards", get(commands::list_cards).post(commands::create_card))
        .route("/cards/{id}", put(commands::update_card).delete(commands::delete_card))
        .layer(from_fn(commands::cors))
        .layer(from_fn(commands::trace_requests))
        .with_state(state)
}

/// Repository selected by the configuration
pub fn open_repository(config: &ServerConfig) -> DomainResult<Arc<dyn CardRepository>> {
    match &config.db_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "using SQLite card store");
            Ok(Arc::new(SqliteCardRepository::new(init_db(path)?)))
        }
        None => {
            tracing::info!("using in-memory card store");
            Ok(Arc::new(InMemoryCardRepository::new()))
        }
    }
}

/// Create `n` demo cards when the repository is empty
pub async fn seed_demo_cards(repo: &dyn CardRepository, n: usize) -> DomainResult<usize> {
    if n == 0 || !repo.list().await?.is_empty() {
        return Ok(0);
    }
    for card in create_many_cards(n, CardOverrides::content("test-content")) {
        repo.create(&card).await?;
    }
    tracing::info!(count = n, "seeded demo cards");
    Ok(n)
}

/// Serve until ctrl-c
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let cards = open_repository(&config)?;
    seed_demo_cards(cards.as_ref(), config.seed_cards).await?;

    let listener = TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "corkboard server listening");

    axum::serve(listener, build_router(AppState::new(cards)))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await?;
    Ok(())
}
