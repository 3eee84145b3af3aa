//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate the store and
//! report ports.

pub mod analytics;
pub mod schema;
pub mod seeder;

pub use analytics::{Analytics, ReportSummary};
pub use schema::ensure_schema;
pub use seeder::{SeedCounts, SeedSummary, Seeder};
