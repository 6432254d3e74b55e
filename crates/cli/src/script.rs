//! TOML edit scripts for headless grid editing.
//!
//! A script is a list of operations applied to a loaded session in order:
//!
//! ```toml
//! [[op]]
//! kind = "set"
//! row = 0
//! column = "name"
//! value = "B"
//!
//! [[op]]
//! kind = "bulk-set"
//! column = "age"
//! rows = [0, 1, 2]
//! value = 40
//!
//! [[op]]
//! kind = "delete-row"
//! row = 2
//!
//! [[op]]
//! kind = "add-row"
//! values = { name = "D", age = 20 }
//! ```

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use gridbase_engine::{BulkOperation, BulkUpdate, GridError, GridSession, Row, Value};

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ScriptOp {
    Set {
        row: usize,
        column: String,
        value: toml::Value,
    },
    BulkSet {
        column: String,
        rows: Vec<usize>,
        value: toml::Value,
    },
    DeleteRow {
        row: usize,
    },
    AddRow {
        #[serde(default)]
        values: BTreeMap<String, toml::Value>,
    },
}

#[derive(Debug, Deserialize, Default)]
pub struct EditScript {
    #[serde(default)]
    pub op: Vec<ScriptOp>,
}

impl EditScript {
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn is_empty(&self) -> bool {
        self.op.is_empty()
    }
}

/// Map a TOML scalar into a cell value. Datetimes that carry an offset
/// become typed timestamps; tables and arrays degrade to their text form.
fn cell_value(value: &toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::from(s.as_str()),
        toml::Value::Integer(n) => Value::Int(*n),
        toml::Value::Float(f) => Value::from(*f),
        toml::Value::Boolean(b) => Value::Bool(*b),
        toml::Value::Datetime(dt) => {
            let text = dt.to_string();
            match DateTime::parse_from_rfc3339(&text) {
                Ok(ts) => Value::Timestamp(ts.with_timezone(&Utc)),
                Err(_) => Value::Text(text),
            }
        }
        other => Value::Text(other.to_string()),
    }
}

/// Apply every operation in order. Cell sets go through the full edit
/// lifecycle so they hit the same validation as interactive edits.
pub fn apply(session: &mut GridSession, script: &EditScript) -> Result<(), GridError> {
    for op in &script.op {
        match op {
            ScriptOp::Set { row, column, value } => {
                session.begin_edit(*row, column)?;
                session.update_cell_value(*row, column, cell_value(value), Instant::now())?;
                if let Err(err) = session.commit_edit(*row, column) {
                    // Leave the session clean before reporting.
                    session.cancel_edit(*row, column)?;
                    return Err(err);
                }
            }
            ScriptOp::BulkSet {
                column,
                rows,
                value,
            } => {
                session.run_bulk(BulkOperation::Update(BulkUpdate::fixed(
                    column.clone(),
                    rows.clone(),
                    cell_value(value),
                )))?;
            }
            ScriptOp::DeleteRow { row } => {
                session.delete_row(*row)?;
            }
            ScriptOp::AddRow { values } => {
                let row: Row = values
                    .iter()
                    .map(|(k, v)| (k.clone(), cell_value(v)))
                    .collect();
                session.add_row_with(row)?;
            }
        }
    }
    Ok(())
}
