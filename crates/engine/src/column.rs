use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Coarse type class parsed from a column's declared SQL type.
///
/// Declared types vary by driver ("INTEGER", "int(11)", "VARCHAR(255)",
/// "timestamptz"); validation only needs the class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Integer,
    Real,
    Boolean,
    Text,
    Timestamp,
    /// Anything we cannot classify - validation accepts any value.
    Other,
}

impl ColumnType {
    /// Classify a declared SQL type string.
    pub fn parse(declared: &str) -> Self {
        let lower = declared.to_ascii_lowercase();
        if lower.contains("int") {
            ColumnType::Integer
        } else if lower.contains("bool") {
            ColumnType::Boolean
        } else if lower.contains("real")
            || lower.contains("floa")
            || lower.contains("doub")
            || lower.contains("dec")
            || lower.contains("numeric")
        {
            ColumnType::Real
        } else if lower.contains("date") || lower.contains("time") {
            ColumnType::Timestamp
        } else if lower.contains("char") || lower.contains("text") || lower.contains("clob") {
            ColumnType::Text
        } else {
            ColumnType::Other
        }
    }
}

/// Column metadata for one table snapshot. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Identifier used as the row-map key and in generated SQL.
    pub id: String,
    /// Display name for UI surfaces. Defaults to the id.
    pub name: String,
    /// Declared type string as reported by the driver.
    pub declared_type: String,
    pub nullable: bool,
    pub primary_key: bool,
    pub auto_increment: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl ColumnDef {
    pub fn new(id: impl Into<String>, declared_type: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            declared_type: declared_type.into(),
            nullable: true,
            primary_key: false,
            auto_increment: false,
            default_value: None,
            max_length: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn with_max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    /// Type class used for validation.
    pub fn column_type(&self) -> ColumnType {
        ColumnType::parse(&self.declared_type)
    }

    /// Primary-key and auto-increment columns are permanently non-editable.
    pub fn is_editable(&self) -> bool {
        !self.primary_key && !self.auto_increment
    }

    /// Why the column cannot be edited, for error messages.
    pub fn non_editable_reason(&self) -> Option<&'static str> {
        if self.primary_key {
            Some("primary key")
        } else if self.auto_increment {
            Some("auto increment")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_type_parse() {
        assert_eq!(ColumnType::parse("INTEGER"), ColumnType::Integer);
        assert_eq!(ColumnType::parse("int(11)"), ColumnType::Integer);
        assert_eq!(ColumnType::parse("BIGINT"), ColumnType::Integer);
        assert_eq!(ColumnType::parse("REAL"), ColumnType::Real);
        assert_eq!(ColumnType::parse("double precision"), ColumnType::Real);
        assert_eq!(ColumnType::parse("NUMERIC(10,2)"), ColumnType::Real);
        assert_eq!(ColumnType::parse("BOOLEAN"), ColumnType::Boolean);
        assert_eq!(ColumnType::parse("VARCHAR(255)"), ColumnType::Text);
        assert_eq!(ColumnType::parse("text"), ColumnType::Text);
        assert_eq!(ColumnType::parse("TIMESTAMP"), ColumnType::Timestamp);
        assert_eq!(ColumnType::parse("datetime"), ColumnType::Timestamp);
        assert_eq!(ColumnType::parse("BLOB"), ColumnType::Other);
    }

    #[test]
    fn test_editable_flags() {
        let plain = ColumnDef::new("name", "TEXT");
        assert!(plain.is_editable());
        assert_eq!(plain.non_editable_reason(), None);

        let pk = ColumnDef::new("id", "INTEGER").primary_key();
        assert!(!pk.is_editable());
        assert_eq!(pk.non_editable_reason(), Some("primary key"));
        assert!(!pk.nullable);

        let serial = ColumnDef::new("seq", "INTEGER").auto_increment();
        assert!(!serial.is_editable());
        assert_eq!(serial.non_editable_reason(), Some("auto increment"));
    }

    #[test]
    fn test_builder_defaults() {
        let col = ColumnDef::new("email", "VARCHAR(320)")
            .with_name("E-mail")
            .not_null()
            .with_max_length(320);
        assert_eq!(col.id, "email");
        assert_eq!(col.name, "E-mail");
        assert!(!col.nullable);
        assert_eq!(col.max_length, Some(320));
        assert_eq!(col.column_type(), ColumnType::Text);
    }
}
