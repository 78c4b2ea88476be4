//! Domain Layer
//!
//! The card record is shared with the client through `corkboard-core`;
//! this layer adds the server-side error model.

mod errors;

pub use corkboard_core::{Ack, Card, Entity, PartialCard};
pub use errors::{DomainError, DomainResult};
