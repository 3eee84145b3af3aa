//! Infrastructure bootstrap helpers for runtime wiring.

use std::path::Path;

use tracing::info;

use crate::adapter::outbound::sqlite::{SqliteAuthorsStore, SqliteLogsStore};
use crate::domain::Generator;
use crate::error::Result;

/// Both stores of one run.
pub struct Stores {
    pub authors: SqliteAuthorsStore,
    pub logs: SqliteLogsStore,
}

/// Open the authors and logs stores at the given file paths.
///
/// # Errors
/// Returns [`crate::error::Error::StorageUnavailable`] naming the store that
/// could not be opened.
pub fn open_stores(authors: &Path, logs: &Path) -> Result<Stores> {
    let stores = Stores {
        authors: SqliteAuthorsStore::open(&authors.to_string_lossy())?,
        logs: SqliteLogsStore::open(&logs.to_string_lossy())?,
    };
    info!(
        authors = %authors.display(),
        logs = %logs.display(),
        "Stores opened"
    );
    Ok(stores)
}

/// Build the random generator, seeded when a seed is configured.
#[must_use]
pub fn build_generator(seed: Option<u64>) -> Generator {
    match seed {
        Some(seed) => Generator::with_seed(seed),
        None => Generator::new(),
    }
}
