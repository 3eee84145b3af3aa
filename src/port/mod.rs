//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                 ┌──────────────────────────┐
//!   CLI ─────────▶│  Application (seeder,    │
//!                 │  analytics) + Domain     │
//!                 └────────────┬─────────────┘
//!                              │ outbound ports
//!             ┌────────────────┼─────────────────┐
//!             ▼                ▼                 ▼
//!       ┌───────────┐    ┌───────────┐    ┌─────────────┐
//!       │  Authors  │    │   Logs    │    │   Report    │
//!       │  (SQLite) │    │  (SQLite) │    │ sink (CSV)  │
//!       └───────────┘    └───────────┘    └─────────────┘
//! ```

pub mod outbound;
