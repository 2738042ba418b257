//! HTTP routes.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use reelstore_domain::Movie;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::api::error_sanitizer::{messages, sanitize_repo_error};
use crate::app::App;
use crate::use_cases::movies::{ListMoviesInput, MovieError};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/movies", get(list_movies).post(create_movie))
        .route(
            "/api/movies/{id}",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
        .fallback(unknown_route)
        .method_not_allowed_fallback(unsupported_method)
}

/// `{"message": ...}` body used for every non-domain response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

async fn health() -> Json<MessageBody> {
    MessageBody::new(messages::API_LISTENING)
}

async fn unknown_route() -> ApiError {
    ApiError::NotFound(messages::ROUTE_NOT_FOUND.to_string())
}

async fn unsupported_method() -> ApiError {
    ApiError::MethodNotAllowed(messages::METHOD_NOT_ALLOWED.to_string())
}

// =============================================================================
// Movies
// =============================================================================

#[derive(Debug, Deserialize)]
struct ListParams {
    page: Option<String>,
    #[serde(rename = "perPage")]
    per_page: Option<String>,
    title: Option<String>,
}

async fn create_movie(
    State(app): State<Arc<App>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let Json(body) = body?;
    let movie = app
        .use_cases
        .movies
        .create(body)
        .await
        .map_err(|e| movie_error(&app, "create movie", e))?;
    Ok((StatusCode::CREATED, Json(movie)))
}

async fn list_movies(
    State(app): State<Arc<App>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let Query(params) = params?;
    tracing::debug!(?params, "Listing movies");

    let movies = app
        .use_cases
        .movies
        .list(ListMoviesInput {
            page: params.page.as_deref(),
            per_page: params.per_page.as_deref(),
            title: params.title.as_deref(),
        })
        .await
        .map_err(|e| movie_error(&app, "list movies", e))?;
    Ok(Json(movies))
}

async fn get_movie(
    State(app): State<Arc<App>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Movie>, ApiError> {
    let Path(id) = id?;
    let movie = app
        .use_cases
        .movies
        .get(&id)
        .await
        .map_err(|e| movie_error(&app, "fetch movie", e))?;
    Ok(Json(movie))
}

async fn update_movie(
    State(app): State<Arc<App>>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let Path(id) = id?;
    let Json(body) = body?;
    app.use_cases
        .movies
        .update(&id, body)
        .await
        .map_err(|e| movie_error(&app, "update movie", e))?;
    Ok(MessageBody::new(messages::MOVIE_UPDATED))
}

async fn delete_movie(
    State(app): State<Arc<App>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let Path(id) = id?;
    app.use_cases
        .movies
        .delete(&id)
        .await
        .map_err(|e| match e {
            MovieError::NotFound { id } => {
                ApiError::NotFound(messages::movie_not_in_database(&id))
            }
            other => movie_error(&app, "delete movie", other),
        })?;
    Ok(MessageBody::new(messages::MOVIE_DELETED))
}

/// Single mapping from use-case outcomes to HTTP errors.
fn movie_error(app: &App, operation: &str, error: MovieError) -> ApiError {
    match error {
        MovieError::NotFound { id } => ApiError::NotFound(messages::movie_not_found(&id)),
        MovieError::InvalidInput(msg) => ApiError::BadRequest(msg),
        MovieError::Repo(e) => {
            ApiError::Internal(sanitize_repo_error(&e, operation, app.error_exposure))
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    MethodNotAllowed(String),
    /// Message is already safe to show the client.
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::NotFound(msg)
            | ApiError::BadRequest(msg)
            | ApiError::MethodNotAllowed(msg)
            | ApiError::Internal(msg) => msg,
        };
        (status, MessageBody::new(message)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
