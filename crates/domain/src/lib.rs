//! Reelstore domain types.
//!
//! Movies are opaque JSON documents keyed by a store-assigned object id.
//! This crate owns the few rules the service does enforce: identifier
//! syntax, the shape of a request body, and paging arithmetic.

pub mod error;
pub mod ids;
pub mod movie;
pub mod query;

pub use error::DomainError;
pub use ids::MovieId;
pub use movie::{Movie, MovieDocument, MovieFields, ID_FIELD, TITLE_FIELD, YEAR_FIELD};
pub use query::{MovieQuery, PageRequest, INVALID_PAGINATION_MESSAGE};
