//! Schema initialization use case.

use tracing::info;

use crate::error::Result;
use crate::port::outbound::store::Store;

/// Create any tables missing from `store`.
///
/// Safe to run against a store that already has its tables: nothing is
/// recreated and no rows are touched.
///
/// # Errors
/// Returns [`crate::error::Error::StorageUnavailable`] if the store cannot be
/// written.
pub fn ensure_schema<S: Store + ?Sized>(store: &mut S) -> Result<()> {
    store.ensure_schema()?;
    let tables = store.table_names()?;
    info!(store = store.name(), tables = ?tables, "Schema ready");
    Ok(())
}
