//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use the remote HTTP API, SQLite, in-memory, etc.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type. Creation and update take a draft
/// because identity is assigned by the backing store.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Unsaved form of the entity
    type Draft: Send + Sync;

    /// List all entities
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Create a new entity, returning it with its assigned ID
    async fn create(&self, draft: &Self::Draft) -> DomainResult<T>;

    /// Update an existing entity
    async fn update(&self, id: T::Id, draft: &Self::Draft) -> DomainResult<()>;

    /// Delete entity by ID
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}

/// Persistent string slots addressed by a fixed key
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> DomainResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> DomainResult<()>;

    /// Removing a missing key is not an error
    async fn remove(&self, key: &str) -> DomainResult<()>;
}
