//! `gridbase-io` — snapshot I/O for the grid engine.
//!
//! JSON snapshot files, a SQLite-backed paginated row provider, and CSV
//! export of the visible grid. The engine stays driver-free; everything
//! that touches a file or a database lives here.

pub mod csv;
pub mod error;
pub mod json;
pub mod sqlite;

pub use error::IoError;
pub use sqlite::{apply_statements, snapshot, table_columns, SqliteProvider};
