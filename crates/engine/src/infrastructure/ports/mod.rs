//! Port traits for infrastructure boundaries.
//!
//! `MovieRepo` is implemented by MongoDB in production and by in-memory or
//! mock repositories in tests.

mod error;
mod repos;
pub mod types;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::*;

// =============================================================================
// Write Outcomes
// =============================================================================
pub use types::{DeleteOutcome, UpdateOutcome};

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
