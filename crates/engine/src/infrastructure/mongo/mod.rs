//! MongoDB database implementations.

use mongodb::bson::doc;
use mongodb::{Client, Database};
use std::sync::Arc;

use crate::infrastructure::ports::RepoError;

mod helpers;
mod movie_repo;

#[cfg(test)]
pub(crate) mod test_harness;


pub use movie_repo::MongoMovieRepo;

/// All MongoDB repositories, built from one shared database handle.
pub struct MongoRepositories {
    pub movie: Arc<MongoMovieRepo>,
}

impl MongoRepositories {
    pub fn new(database: &Database, movie_collection: &str) -> Self {
        Self {
            movie: Arc::new(MongoMovieRepo::new(database.collection(movie_collection))),
        }
    }
}

/// Open the client and verify the server answers before anything listens.
///
/// The database is `database` when given, else the one named in the URI,
/// else `fallback_database`.
pub async fn connect(
    uri: &str,
    database: Option<&str>,
    fallback_database: &str,
) -> Result<Database, RepoError> {
    let client = Client::with_uri_str(uri)
        .await
        .map_err(|e| RepoError::database("connect", e))?;

    let database = match database {
        Some(name) => client.database(name),
        None => client
            .default_database()
            .unwrap_or_else(|| client.database(fallback_database)),
    };

    database
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| RepoError::database("ping", e))?;

    tracing::info!(database = %database.name(), "MongoDB connection established and verified");
    Ok(database)
}
