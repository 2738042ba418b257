//! Reelstore Engine library.
//!
//! A JSON REST service over a MongoDB movie collection.
//!
//! ## Structure
//!
//! - `use_cases/` - Movie CRUD orchestration
//! - `infrastructure/` - Configuration, ports, and the MongoDB adapter
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
