//! Use cases - User story orchestration.

pub mod movies;

pub use movies::{MovieCrud, MovieError};
