//! MongoDB movie repository implementation.
//!
//! One collection, one round trip per operation, no retries.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Collection;
use reelstore_domain::{Movie, MovieDocument, MovieId, MovieQuery, TITLE_FIELD, YEAR_FIELD};

use super::helpers::{document_to_movie, fields_to_document, object_id};
use crate::infrastructure::ports::{DeleteOutcome, MovieRepo, RepoError, UpdateOutcome};

pub struct MongoMovieRepo {
    collection: Collection<Document>,
}

impl MongoMovieRepo {
    pub fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl MovieRepo for MongoMovieRepo {
    /// Insert with a client-generated ObjectId so the returned movie is
    /// exactly what was stored.
    async fn insert(&self, document: &MovieDocument) -> Result<Movie, RepoError> {
        let oid = ObjectId::new();
        let mut stored = doc! { "_id": oid };
        for (key, value) in fields_to_document(document.fields())? {
            stored.insert(key, value);
        }

        self.collection
            .insert_one(&stored)
            .await
            .map_err(|e| RepoError::database("movie.insert", e))?;

        tracing::debug!(movie_id = %oid, "Inserted movie");
        document_to_movie(stored)
    }

    async fn list(&self, query: &MovieQuery) -> Result<Vec<Movie>, RepoError> {
        let filter = match &query.title {
            Some(title) => doc! { TITLE_FIELD: title.as_str() },
            None => Document::new(),
        };
        let limit = i64::try_from(query.page.limit()).unwrap_or(i64::MAX);

        let cursor = self
            .collection
            .find(filter)
            .sort(doc! { YEAR_FIELD: 1, "_id": 1 })
            .skip(query.page.skip())
            .limit(limit)
            .await
            .map_err(|e| RepoError::database("movie.list", e))?;

        let documents: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| RepoError::database("movie.list", e))?;

        documents.into_iter().map(document_to_movie).collect()
    }

    async fn get(&self, id: &MovieId) -> Result<Option<Movie>, RepoError> {
        let found = self
            .collection
            .find_one(doc! { "_id": object_id(id)? })
            .await
            .map_err(|e| RepoError::database("movie.get", e))?;

        found.map(document_to_movie).transpose()
    }

    async fn update(
        &self,
        id: &MovieId,
        document: &MovieDocument,
    ) -> Result<UpdateOutcome, RepoError> {
        let filter = doc! { "_id": object_id(id)? };

        // `$set` with no fields is rejected by the server; report a no-op
        // against an existing document instead.
        if document.is_empty() {
            let matched_count = self
                .collection
                .count_documents(filter)
                .await
                .map_err(|e| RepoError::database("movie.update", e))?;
            return Ok(UpdateOutcome {
                acknowledged: true,
                matched_count,
                modified_count: 0,
            });
        }

        let changes = fields_to_document(document.fields())?;
        let result = self
            .collection
            .update_one(filter, doc! { "$set": changes })
            .await
            .map_err(|e| RepoError::database("movie.update", e))?;

        tracing::debug!(
            movie_id = %id,
            matched = result.matched_count,
            modified = result.modified_count,
            "Updated movie"
        );
        Ok(UpdateOutcome {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn delete(&self, id: &MovieId) -> Result<DeleteOutcome, RepoError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": object_id(id)? })
            .await
            .map_err(|e| RepoError::database("movie.delete", e))?;

        tracing::debug!(movie_id = %id, deleted = result.deleted_count, "Deleted movie");
        Ok(DeleteOutcome {
            deleted_count: result.deleted_count,
        })
    }
}
