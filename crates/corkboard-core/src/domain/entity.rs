//! Domain Layer - Core Entity Trait
//!
//! Every record kept in a collection or repository has a stable identifier.

/// Core trait for identifiable records
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}
