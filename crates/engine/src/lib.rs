//! `gridbase-engine` — data grid engine for database table editing.
//!
//! Pure engine crate: owns the in-memory diff between a loaded result-set
//! window and the user's edits, and turns that diff into parameterized SQL.
//! No UI or database dependencies; hosts drive it through method calls and
//! registered callbacks.

pub mod column;
pub mod debounce;
pub mod error;
pub mod events;
pub mod grid;
pub mod scroll;
pub mod sql;
pub mod table;
pub mod tracker;
pub mod validate;
pub mod value;

pub use column::{ColumnDef, ColumnType};
pub use error::GridError;
pub use grid::{
    BulkOperation, BulkOutcome, BulkPreviewEntry, BulkSource, BulkUpdate, CopyKind, CopyPayload,
    GridSession, PasteOptions, PasteOutcome, RowPage, RowProvider,
};
pub use sql::SqlStatement;
pub use table::{CellKey, Row, TableSnapshot};
pub use tracker::{ChangeRecord, ChangeStatistics, ChangeSummary, ChangeTracker};
pub use validate::{CellValidator, ValidationOutcome};
pub use value::Value;
