//! API layer - HTTP entry points.

pub mod cors;
pub mod error_sanitizer;
pub mod http;
