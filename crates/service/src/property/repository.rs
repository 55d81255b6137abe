use async_trait::async_trait;
use models::property::{PropertyInput, PropertyPatch, PropertyRecord};

use crate::errors::ServiceError;

/// Trait abstraction for property listing storage (CRUD over listings).
///
/// Handlers receive this as a trait object so the in-memory demo store can be
/// swapped for a real persistence layer without touching the HTTP surface.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// All records in insertion order.
    async fn list(&self) -> Vec<PropertyRecord>;
    /// Append a new record and return its id. Cannot fail.
    async fn create(&self, input: PropertyInput) -> u64;
    /// Shallow-merge `patch` into the record with the given id.
    async fn update(&self, id: u64, patch: PropertyPatch) -> Result<(), ServiceError>;
    /// Remove the record with the given id; returns whether anything was removed.
    async fn delete(&self, id: u64) -> bool;
}
