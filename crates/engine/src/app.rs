//! Application state and composition.

use std::sync::Arc;

use crate::api::error_sanitizer::ErrorExposure;
use crate::infrastructure::ports::MovieRepo;
use crate::use_cases::movies::MovieCrud;

/// Main application state.
///
/// Built once at startup around the injected repository and passed to HTTP
/// handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
    pub error_exposure: ErrorExposure,
}

/// Container for all use cases.
pub struct UseCases {
    pub movies: MovieCrud,
}

impl App {
    pub fn new(movie_repo: Arc<dyn MovieRepo>, error_exposure: ErrorExposure) -> Self {
        Self {
            use_cases: UseCases {
                movies: MovieCrud::new(movie_repo),
            },
            error_exposure,
        }
    }
}
