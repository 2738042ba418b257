//! Movie CRUD use cases.
//!
//! Turns raw route inputs into domain values, makes exactly one repository
//! call, and classifies the result. "Not found" is decided here from the
//! result shape; the HTTP layer only chooses status codes and wording.

use std::sync::Arc;

use reelstore_domain::{DomainError, Movie, MovieDocument, MovieId, MovieQuery, PageRequest};
use serde_json::Value;

use crate::infrastructure::ports::{MovieRepo, RepoError};

/// Shared error type for movie use cases.
#[derive(Debug, thiserror::Error)]
pub enum MovieError {
    /// No document has this id. Malformed ids land here too since they
    /// cannot name a stored document.
    #[error("Movie not found: {id}")]
    NotFound { id: String },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl MovieError {
    fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}

impl From<DomainError> for MovieError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidId(raw) => Self::not_found(raw),
            DomainError::InvalidDocument(_) | DomainError::InvalidPagination(_) => {
                Self::InvalidInput(e.to_string())
            }
        }
    }
}

/// Raw list parameters exactly as they arrived in the query string.
#[derive(Debug, Clone, Default)]
pub struct ListMoviesInput<'a> {
    pub page: Option<&'a str>,
    pub per_page: Option<&'a str>,
    pub title: Option<&'a str>,
}

pub struct MovieCrud {
    repo: Arc<dyn MovieRepo>,
}

impl MovieCrud {
    pub fn new(repo: Arc<dyn MovieRepo>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, body: Value) -> Result<Movie, MovieError> {
        let document = MovieDocument::from_json(body)?;
        let movie = self.repo.insert(&document).await?;
        tracing::info!(movie_id = %movie.id, "Movie created");
        Ok(movie)
    }

    /// An empty `title` means no filter.
    pub async fn list(&self, input: ListMoviesInput<'_>) -> Result<Vec<Movie>, MovieError> {
        let page = PageRequest::parse(input.page, input.per_page)?;
        let title = input
            .title
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        Ok(self.repo.list(&MovieQuery::new(page, title)).await?)
    }

    pub async fn get(&self, raw_id: &str) -> Result<Movie, MovieError> {
        let id = MovieId::parse(raw_id)?;
        self.repo
            .get(&id)
            .await?
            .ok_or_else(|| MovieError::not_found(raw_id))
    }

    /// Succeeds only when the store acknowledged the write and matched a document.
    pub async fn update(&self, raw_id: &str, body: Value) -> Result<(), MovieError> {
        let id = MovieId::parse(raw_id)?;
        let document = MovieDocument::from_json(body)?;
        let outcome = self.repo.update(&id, &document).await?;
        if !outcome.matched() {
            return Err(MovieError::not_found(raw_id));
        }
        tracing::info!(
            movie_id = %id,
            modified = outcome.modified_count,
            "Movie updated"
        );
        Ok(())
    }

    pub async fn delete(&self, raw_id: &str) -> Result<(), MovieError> {
        let id = MovieId::parse(raw_id)?;
        let outcome = self.repo.delete(&id).await?;
        if !outcome.deleted() {
            return Err(MovieError::not_found(raw_id));
        }
        tracing::info!(movie_id = %id, "Movie deleted");
        Ok(())
    }
}
