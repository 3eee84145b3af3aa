//! SQLite database modules.
//!
//! Provides connection setup, embedded migrations, schema definitions, and
//! Diesel model types for both stores.

pub mod connection;
pub mod model;
pub mod schema;
