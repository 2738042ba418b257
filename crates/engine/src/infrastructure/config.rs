//! Application configuration

use std::env;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE: &str = "sample_mflix";
const DEFAULT_COLLECTION: &str = "movies";

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// MongoDB connection URI
    pub mongodb_uri: String,
    /// Database name override; `None` uses the URI's default database
    pub mongodb_database: Option<String>,
    /// Collection holding the movie documents
    pub mongodb_collection: String,

    /// Bind address
    pub server_host: String,
    /// HTTP listening port
    pub server_port: u16,

    /// CORS allowed origins (comma-separated, or "*" for any)
    pub cors_allowed_origins: Vec<String>,

    /// Echo raw store errors in 500 responses instead of a sanitized message
    pub expose_internal_errors: bool,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| var(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let server_port = match non_empty("PORT").or_else(|| non_empty("SERVER_PORT")) {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {port:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            mongodb_uri: non_empty("MONGODB_CONN_STRING")
                .context("MONGODB_CONN_STRING environment variable is required")?,
            mongodb_database: non_empty("MONGODB_DATABASE"),
            mongodb_collection: non_empty("MONGODB_COLLECTION")
                .unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),

            server_host: non_empty("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port,

            cors_allowed_origins: non_empty("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),

            expose_internal_errors: non_empty("EXPOSE_INTERNAL_ERRORS")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }

    /// Database to use when neither the URI nor `MONGODB_DATABASE` names one.
    pub fn fallback_database() -> &'static str {
        DEFAULT_DATABASE
    }

    /// Connection string reduced to scheme and hosts, safe to log.
    pub fn redacted_mongodb_uri(&self) -> String {
        redact_uri(&self.mongodb_uri)
    }
}

fn redact_uri(uri: &str) -> String {
    let (scheme, rest) = uri.split_once("://").unwrap_or(("", uri));
    let hosts = rest.rsplit_once('@').map_or(rest, |(_, hosts)| hosts);
    let hosts = hosts.split(['/', '?']).next().unwrap_or_default();
    if scheme.is_empty() {
        hosts.to_string()
    } else {
        format!("{scheme}://{hosts}")
    }
}
