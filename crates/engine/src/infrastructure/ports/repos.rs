//! Repository port traits for database access.

use async_trait::async_trait;
use reelstore_domain::{Movie, MovieDocument, MovieId, MovieQuery};

use super::error::RepoError;
use super::types::{DeleteOutcome, UpdateOutcome};

// =============================================================================
// Database Ports
// =============================================================================

/// Access to the single movie collection. Each call is one store round trip.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepo: Send + Sync {
    /// Stores a new document and returns it with its assigned id.
    async fn insert(&self, document: &MovieDocument) -> Result<Movie, RepoError>;

    /// One page of movies ordered by `year`, then `_id`.
    async fn list(&self, query: &MovieQuery) -> Result<Vec<Movie>, RepoError>;

    async fn get(&self, id: &MovieId) -> Result<Option<Movie>, RepoError>;

    /// Merges `document` into the stored movie (`$set` semantics).
    async fn update(
        &self,
        id: &MovieId,
        document: &MovieDocument,
    ) -> Result<UpdateOutcome, RepoError>;

    async fn delete(&self, id: &MovieId) -> Result<DeleteOutcome, RepoError>;
}
