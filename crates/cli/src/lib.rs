//! Library surface of the CLI: session loading and edit-script
//! application, shared between the binary and its integration tests.

pub mod exit_codes;
pub mod script;

use std::time::Duration;

use rusqlite::Connection;

use gridbase_engine::GridSession;
use gridbase_io::{IoError, SqliteProvider};

/// Load every row of `table` into a fresh session.
pub fn load_session(
    conn: &Connection,
    table: &str,
    validation_delay: Duration,
) -> Result<GridSession, IoError> {
    let provider = SqliteProvider::open(conn, table)?;
    let total = provider.page(0, 0)?.total_rows;
    let snapshot = provider.snapshot(0, total.max(1))?;

    let mut session = GridSession::with_validation_delay(validation_delay);
    session.set_table(snapshot);
    Ok(session)
}
