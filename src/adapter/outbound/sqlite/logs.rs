//! SQLite implementation of the logs store.

use diesel::prelude::*;
use diesel::SqliteConnection;

use super::database::connection::{self, LOGS_MIGRATIONS};
use super::database::model::{ActionRow, NewActionRow};
use super::database::schema::actions;
use crate::domain::{Action, NewAction};
use crate::error::Result;
use crate::port::outbound::store::{LogsStore, Store};

const STORE: &str = "logs";

/// Logs store backed by one SQLite connection.
pub struct SqliteLogsStore {
    conn: SqliteConnection,
}

impl SqliteLogsStore {
    /// Open (creating if needed) the logs database at `database_url`.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::StorageUnavailable`] if it cannot be opened.
    pub fn open(database_url: &str) -> Result<Self> {
        Ok(Self {
            conn: connection::establish(STORE, database_url)?,
        })
    }
}

impl Store for SqliteLogsStore {
    fn name(&self) -> &'static str {
        STORE
    }

    fn ensure_schema(&mut self) -> Result<()> {
        connection::run_migrations(STORE, &mut self.conn, LOGS_MIGRATIONS)
    }

    fn table_names(&mut self) -> Result<Vec<String>> {
        connection::table_names(&mut self.conn)
    }
}

impl LogsStore for SqliteLogsStore {
    fn insert_actions(&mut self, new_actions: &[NewAction]) -> Result<usize> {
        let rows: Vec<NewActionRow<'_>> = new_actions.iter().map(NewActionRow::from).collect();
        connection::insert_chunked(&mut self.conn, &rows, |conn, chunk| {
            diesel::insert_into(actions::table).values(chunk).execute(conn)
        })
    }

    fn actions_by(&mut self, login: &str) -> Result<Vec<Action>> {
        let rows: Vec<ActionRow> = actions::table
            .filter(actions::login.eq(login))
            .order((actions::created_at.asc(), actions::id.asc()))
            .select(ActionRow::as_select())
            .load(&mut self.conn)?;
        Ok(rows.into_iter().map(Action::from).collect())
    }
}
