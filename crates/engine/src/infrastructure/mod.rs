//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod config;
pub mod correlation;
pub mod mongo;
pub mod ports;

#[cfg(test)]
pub mod memory;
