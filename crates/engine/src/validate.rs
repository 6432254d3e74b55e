//! Cell validation against column metadata.
//!
//! Checks nullability, type compatibility, and text length. Coercions the
//! drivers accept losslessly are allowed: an integer where a real is
//! declared, and text that parses as the declared scalar type. Fractional
//! values never pass an integer column.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::column::{ColumnDef, ColumnType};
use crate::value::Value;

/// Result of validating a candidate value for a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationOutcome {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            errors: vec![message.into()],
        }
    }

    pub fn merge(mut self, other: ValidationOutcome) -> Self {
        self.is_valid = self.is_valid && other.is_valid;
        self.errors.extend(other.errors);
        self
    }
}

/// Stateless validator for candidate cell values.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellValidator;

impl CellValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate `value` against `column`. Never fails with an error type;
    /// the outcome carries pass/fail plus messages.
    pub fn validate(&self, value: &Value, column: &ColumnDef) -> ValidationOutcome {
        if value.is_null() {
            if column.nullable {
                return ValidationOutcome::ok();
            }
            return ValidationOutcome::fail(format!("column '{}' is not nullable", column.id));
        }

        let mut outcome = self.check_type(value, column);
        if let Some(len_check) = self.check_length(value, column) {
            outcome = outcome.merge(len_check);
        }
        outcome
    }

    fn check_type(&self, value: &Value, column: &ColumnDef) -> ValidationOutcome {
        let mismatch = || {
            ValidationOutcome::fail(format!(
                "column '{}' expects {} but got {}",
                column.id,
                column.declared_type,
                value.type_name()
            ))
        };

        match column.column_type() {
            ColumnType::Integer => match value {
                Value::Int(_) => ValidationOutcome::ok(),
                Value::Float(f) if f.fract() == 0.0 => ValidationOutcome::ok(),
                Value::Float(_) => ValidationOutcome::fail(format!(
                    "column '{}' expects a whole number",
                    column.id
                )),
                Value::Text(s) if s.trim().parse::<i64>().is_ok() => ValidationOutcome::ok(),
                _ => mismatch(),
            },
            ColumnType::Real => match value {
                Value::Int(_) | Value::Float(_) => ValidationOutcome::ok(),
                Value::Text(s) if s.trim().parse::<f64>().is_ok() => ValidationOutcome::ok(),
                _ => mismatch(),
            },
            ColumnType::Boolean => match value {
                Value::Bool(_) => ValidationOutcome::ok(),
                Value::Int(0) | Value::Int(1) => ValidationOutcome::ok(),
                Value::Text(s)
                    if matches!(
                        s.trim().to_ascii_lowercase().as_str(),
                        "true" | "false" | "0" | "1"
                    ) =>
                {
                    ValidationOutcome::ok()
                }
                _ => mismatch(),
            },
            ColumnType::Timestamp => match value {
                Value::Timestamp(_) => ValidationOutcome::ok(),
                Value::Text(s) if DateTime::parse_from_rfc3339(s.trim()).is_ok() => {
                    ValidationOutcome::ok()
                }
                _ => mismatch(),
            },
            // Any scalar renders as text; blobs and unclassified types
            // accept whatever the driver handed us.
            ColumnType::Text | ColumnType::Other => ValidationOutcome::ok(),
        }
    }

    fn check_length(&self, value: &Value, column: &ColumnDef) -> Option<ValidationOutcome> {
        let max = column.max_length?;
        let Value::Text(s) = value else { return None };
        if s.chars().count() > max {
            return Some(ValidationOutcome::fail(format!(
                "column '{}' allows at most {} characters (got {})",
                column.id,
                max,
                s.chars().count()
            )));
        }
        None
    }
}
