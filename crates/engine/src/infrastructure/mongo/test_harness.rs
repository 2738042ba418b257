//! MongoDB test harness for integration testing.
//!
//! Provides testcontainer-based MongoDB instance management.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::Database;
use testcontainers::{core::WaitFor, runners::AsyncRunner, ContainerAsync, GenericImage};
use tokio::time::sleep;

use super::{connect, MongoRepositories};

const TEST_DATABASE: &str = "reelstore_test";
const TEST_COLLECTION: &str = "movies";

/// MongoDB test harness managing container lifecycle.
pub struct MongoTestHarness {
    _container: ContainerAsync<GenericImage>,
    database: Database,
}

impl MongoTestHarness {
    /// Start a new MongoDB container and establish a connection.
    pub async fn start() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let container: ContainerAsync<GenericImage> = mongo_image().start().await;
        let port = container.get_host_port_ipv4(27017).await;
        let uri = format!("mongodb://127.0.0.1:{port}");

        let database = connect_with_retry(&uri).await?;

        Ok(Self {
            _container: container,
            database,
        })
    }

    pub fn repositories(&self) -> MongoRepositories {
        MongoRepositories::new(&self.database, TEST_COLLECTION)
    }

    /// Drop every document in the movie collection.
    pub async fn clean(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.database
            .collection::<mongodb::bson::Document>(TEST_COLLECTION)
            .delete_many(doc! {})
            .await?;
        Ok(())
    }
}

/// Pinned MongoDB image. Readiness is confirmed by `connect_with_retry`.
pub fn mongo_image() -> GenericImage {
    GenericImage::new("mongo", "7.0")
        .with_exposed_port(27017)
        .with_wait_for(WaitFor::seconds(2))
}

/// Connect with exponential backoff: 250ms doubling up to 2s, 20 attempts.
pub async fn connect_with_retry(
    uri: &str,
) -> Result<Database, Box<dyn std::error::Error + Send + Sync>> {
    let max_attempts = 20;
    let max_delay = Duration::from_secs(2);
    let mut delay = Duration::from_millis(250);
    let mut last_err = None;

    for attempt in 1..=max_attempts {
        match connect(uri, Some(TEST_DATABASE), TEST_DATABASE).await {
            Ok(database) => return Ok(database),
            Err(e) => {
                tracing::debug!(attempt, error = %e, "Retrying MongoDB connection");
                last_err = Some(e.to_string());
            }
        }
        sleep(delay).await;
        delay = std::cmp::min(delay.saturating_mul(2), max_delay);
    }

    Err(format!(
        "Failed to connect to MongoDB at {uri} after {max_attempts} attempts: {:?}",
        last_err
    )
    .into())
}
