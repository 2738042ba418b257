//! In-memory movie repository for testing.
//!
//! Mirrors the MongoDB adapter's observable behavior: exact title filter,
//! `year` then `_id` ordering, zero counts for missing ids. Nothing persists.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use async_trait::async_trait;
use reelstore_domain::{Movie, MovieDocument, MovieId, MovieQuery, YEAR_FIELD};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::infrastructure::ports::{DeleteOutcome, MovieRepo, RepoError, UpdateOutcome};

pub struct InMemoryMovieRepo {
    movies: RwLock<BTreeMap<MovieId, Movie>>,
    next_id: AtomicU64,
}

impl InMemoryMovieRepo {
    pub fn new() -> Self {
        Self {
            movies: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn allocate_id(&self) -> Result<MovieId, RepoError> {
        let n = self.next_id.fetch_add(1, AtomicOrdering::Relaxed);
        MovieId::parse(&format!("{n:024x}")).map_err(RepoError::serialization)
    }
}

impl Default for InMemoryMovieRepo {
    fn default() -> Self {
        Self::new()
    }
}

/// Missing or non-numeric years sort before numeric ones, as BSON null does.
fn compare_year(a: &Movie, b: &Movie) -> Ordering {
    let year = |m: &Movie| m.fields.get(YEAR_FIELD).and_then(Value::as_f64);
    match (year(a), year(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[async_trait]
impl MovieRepo for InMemoryMovieRepo {
    async fn insert(&self, document: &MovieDocument) -> Result<Movie, RepoError> {
        let movie = Movie::new(self.allocate_id()?, document.fields().clone());
        self.movies
            .write()
            .await
            .insert(movie.id.clone(), movie.clone());
        Ok(movie)
    }

    async fn list(&self, query: &MovieQuery) -> Result<Vec<Movie>, RepoError> {
        let movies = self.movies.read().await;
        let mut matching: Vec<&Movie> = movies
            .values()
            .filter(|m| match &query.title {
                Some(title) => m.title() == Some(title.as_str()),
                None => true,
            })
            .collect();
        matching.sort_by(|a, b| compare_year(a, b).then_with(|| a.id.cmp(&b.id)));

        let skip = usize::try_from(query.page.skip()).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.page.limit()).unwrap_or(usize::MAX);
        Ok(matching
            .into_iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn get(&self, id: &MovieId) -> Result<Option<Movie>, RepoError> {
        Ok(self.movies.read().await.get(id).cloned())
    }

    async fn update(
        &self,
        id: &MovieId,
        document: &MovieDocument,
    ) -> Result<UpdateOutcome, RepoError> {
        let mut movies = self.movies.write().await;
        let Some(movie) = movies.get_mut(id) else {
            return Ok(UpdateOutcome {
                acknowledged: true,
                ..UpdateOutcome::default()
            });
        };

        let before = movie.clone();
        movie.apply(document);
        Ok(UpdateOutcome {
            acknowledged: true,
            matched_count: 1,
            modified_count: u64::from(*movie != before),
        })
    }

    async fn delete(&self, id: &MovieId) -> Result<DeleteOutcome, RepoError> {
        let removed = self.movies.write().await.remove(id);
        Ok(DeleteOutcome {
            deleted_count: u64::from(removed.is_some()),
        })
    }
}
