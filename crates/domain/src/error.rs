//! Unified error types for the domain layer
//!
//! Every way a raw client input can fail to become a domain value lands here,
//! so adapters can classify failures without string matching.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Identifier is not a 24-character hexadecimal object id
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Request body cannot be stored as a movie document
    #[error("Invalid movie document: {0}")]
    InvalidDocument(String),

    /// Paging parameters are missing or out of range
    #[error("{0}")]
    InvalidPagination(String),
}

impl DomainError {
    pub fn invalid_id(raw: impl Into<String>) -> Self {
        Self::InvalidId(raw.into())
    }

    pub fn invalid_document(msg: impl Into<String>) -> Self {
        Self::InvalidDocument(msg.into())
    }

    pub fn invalid_pagination(msg: impl Into<String>) -> Self {
        Self::InvalidPagination(msg.into())
    }
}
