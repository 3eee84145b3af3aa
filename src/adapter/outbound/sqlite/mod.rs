//! SQLite persistence adapters.
//!
//! Provides the authors and logs stores using Diesel ORM, one connection
//! per store file.

pub mod authors;
pub mod database;
pub mod logs;

pub use authors::SqliteAuthorsStore;
pub use logs::SqliteLogsStore;
