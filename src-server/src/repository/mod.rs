//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod card_repo;
mod memory_repo;


pub use traits::{CardRepository, Repository};
pub use db::{init_db, DbConnection};
pub use card_repo::SqliteCardRepository;
pub use memory_repo::InMemoryCardRepository;
