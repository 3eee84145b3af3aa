//! Blogstat - seed blog databases and export per-user analytics.
//!
//! Two SQLite stores back the tool: an authors store holding users, blogs,
//! posts and comments, and a logs store holding user actions. The crate can
//! fill both with random data and export CSV reports for one login.
//!
//! # Architecture
//!
//! - **`domain`** - Entities, random generation, and report shaping
//! - **`port`** - Store and report sink traits
//! - **`adapter`** - SQLite stores, CSV sink, and the command line
//! - **`application`** - Seeding, schema, and analytics use cases
//! - **`infrastructure`** - Configuration, logging, and wiring
//!
//! # Example
//!
//! ```no_run
//! use blogstat::adapter::outbound::csv::CsvReportSink;
//! use blogstat::application::{ensure_schema, Analytics, SeedCounts, Seeder};
//! use blogstat::domain::{Generator, Login};
//! use blogstat::infrastructure::bootstrap::open_stores;
//! use std::path::Path;
//!
//! fn main() -> blogstat::error::Result<()> {
//!     let mut stores = open_stores(Path::new("authors.db"), Path::new("logs.db"))?;
//!     ensure_schema(&mut stores.authors)?;
//!     ensure_schema(&mut stores.logs)?;
//!
//!     let counts = SeedCounts { users: 3, blogs: 2, posts: 5, comments: 10, actions: 4 };
//!     Seeder::new(Generator::new()).seed(&mut stores.authors, &mut stores.logs, counts)?;
//!
//!     let login = Login::parse("anna.smith.00ff00")?;
//!     let mut sink = CsvReportSink::new("comments.csv", "general.csv");
//!     Analytics::new(&mut stores.authors, &mut stores.logs).export(&login, &mut sink, false)?;
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
