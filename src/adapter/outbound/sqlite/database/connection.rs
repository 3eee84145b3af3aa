//! Database connection management using Diesel ORM.
//!
//! Each store is a single `SqliteConnection` held for the whole run. Schema
//! creation goes through embedded migrations, one set per store.

use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded migrations for the authors store.
pub const AUTHORS_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/authors");

/// Embedded migrations for the logs store.
pub const LOGS_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/logs");

/// Largest number of rows sent in one `INSERT` statement.
const INSERT_CHUNK: usize = 500;

/// Open a connection to `database_url` and apply connection pragmas.
///
/// # Errors
/// Returns [`Error::StorageUnavailable`] if the file cannot be opened.
pub fn establish(store: &'static str, database_url: &str) -> Result<SqliteConnection> {
    let mut conn = SqliteConnection::establish(database_url)
        .map_err(|error| Error::storage(store, error))?;
    configure_sqlite_connection(&mut conn).map_err(|error| Error::storage(store, error))?;
    debug!(store, database_url, "Store opened");
    Ok(conn)
}

/// Configure SQLite connection pragmas.
///
/// # Errors
/// Returns an error if a pragma fails to apply.
pub fn configure_sqlite_connection(conn: &mut SqliteConnection) -> QueryResult<()> {
    diesel::sql_query("PRAGMA busy_timeout=5000").execute(conn)?;
    diesel::sql_query("PRAGMA foreign_keys=ON").execute(conn)?;
    Ok(())
}

/// Run all pending migrations of one store.
///
/// # Errors
/// Returns [`Error::StorageUnavailable`] if the store cannot be written.
pub fn run_migrations(
    store: &'static str,
    conn: &mut SqliteConnection,
    migrations: EmbeddedMigrations,
) -> Result<()> {
    let applied = conn
        .run_pending_migrations(migrations)
        .map_err(|error| Error::storage(store, error))?;
    debug!(store, applied = applied.len(), "Migrations applied");
    Ok(())
}

#[derive(QueryableByName)]
struct TableName {
    #[diesel(sql_type = Text)]
    name: String,
}

/// Names of user tables, excluding SQLite and migration bookkeeping.
///
/// # Errors
/// Returns an error if `sqlite_master` cannot be read.
pub fn table_names(conn: &mut SqliteConnection) -> Result<Vec<String>> {
    let names = diesel::sql_query(
        "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' AND name != '__diesel_schema_migrations' ORDER BY name",
    )
    .load::<TableName>(conn)?
    .into_iter()
    .map(|table| table.name)
    .collect();
    Ok(names)
}

/// Insert `rows` in chunks inside one transaction.
///
/// Returns the number of rows inserted; an empty batch touches nothing.
///
/// # Errors
/// Returns an error, with nothing from this batch stored, if any chunk fails.
pub fn insert_chunked<R>(
    conn: &mut SqliteConnection,
    rows: &[R],
    mut insert: impl FnMut(&mut SqliteConnection, &[R]) -> QueryResult<usize>,
) -> Result<usize> {
    if rows.is_empty() {
        return Ok(0);
    }

    let inserted = conn.transaction(|conn| {
        let mut total = 0;
        for chunk in rows.chunks(INSERT_CHUNK) {
            total += insert(conn, chunk)?;
        }
        QueryResult::Ok(total)
    })?;
    Ok(inserted)
}
