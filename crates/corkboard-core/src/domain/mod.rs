//! Domain Layer
//!
//! The Card record, how new cards are minted, and the Card entity that
//! persists content edits.

mod card;
mod entity;
mod factory;

pub use card::{Ack, Card, CardModel, PartialCard, PLACEHOLDER_TEXT};
pub use entity::Entity;
pub use factory::{create_card, create_many_cards, CardOverrides};
