//! Pantry Engine library.
//!
//! This crate contains all server-side code for the pantry tracker.
//!
//! ## Structure
//!
//! - `repositories/` - Collection access wrapping the store port
//! - `use_cases/` - The inventory mutation protocol
//! - `infrastructure/` - Store port and adapters (memory, SQLite, Firestore), configuration
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod repositories;
pub mod use_cases;

pub use app::App;
