//! Parameterized SQL statement generation.
//!
//! Statements carry `?` placeholders plus a bound-values array; executors
//! bind the params through their driver. The only place values are ever
//! spliced into SQL text is [`SqlStatement::preview`], which renders a
//! human-readable approximation for display and must never be executed.

use serde::Serialize;

use crate::value::Value;

/// One generated statement: SQL text with `?` placeholders and the values
/// to bind, in placeholder order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SqlStatement {
    pub sql: String,
    pub params: Vec<Value>,
}

impl SqlStatement {
    /// Render with params spliced in as SQL literals. Display only.
    pub fn preview(&self) -> String {
        let mut out = String::with_capacity(self.sql.len() + 16 * self.params.len());
        let mut params = self.params.iter();
        for ch in self.sql.chars() {
            if ch == '?' {
                match params.next() {
                    Some(value) => out.push_str(&literal(value)),
                    None => out.push(ch),
                }
            } else {
                out.push(ch);
            }
        }
        out
    }
}

impl std::fmt::Display for SqlStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.preview())
    }
}

/// Double-quote an identifier, doubling embedded quotes.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Render a value as a SQL literal for previews: strings single-quoted
/// with `'` doubled, booleans as TRUE/FALSE, null as NULL.
pub fn literal(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::Int(n) => n.to_string(),
        Value::Float(f) => f.into_inner().to_string(),
        Value::Text(s) => format!("'{}'", s.replace('\'', "''")),
        Value::Timestamp(_) => format!("'{}'", value),
    }
}

/// `UPDATE t SET a = ?, b = ? WHERE key = ?`
pub fn update(
    table: &str,
    sets: &[(String, Value)],
    key_column: &str,
    key_value: Value,
) -> SqlStatement {
    let assignments: Vec<String> = sets
        .iter()
        .map(|(column, _)| format!("{} = ?", quote_ident(column)))
        .collect();
    let sql = format!(
        "UPDATE {} SET {} WHERE {} = ?",
        quote_ident(table),
        assignments.join(", "),
        quote_ident(key_column)
    );
    let mut params: Vec<Value> = sets.iter().map(|(_, v)| v.clone()).collect();
    params.push(key_value);
    SqlStatement { sql, params }
}

/// `DELETE FROM t WHERE key = ?`
pub fn delete(table: &str, key_column: &str, key_value: Value) -> SqlStatement {
    SqlStatement {
        sql: format!(
            "DELETE FROM {} WHERE {} = ?",
            quote_ident(table),
            quote_ident(key_column)
        ),
        params: vec![key_value],
    }
}

/// `INSERT INTO t (a, b) VALUES (?, ?)`
pub fn insert(table: &str, columns: &[&str], values: Vec<Value>) -> SqlStatement {
    debug_assert_eq!(columns.len(), values.len());
    let column_list: Vec<String> = columns.iter().map(|c| quote_ident(c)).collect();
    let placeholders: Vec<&str> = columns.iter().map(|_| "?").collect();
    SqlStatement {
        sql: format!(
            "INSERT INTO {} ({}) VALUES ({})",
            quote_ident(table),
            column_list.join(", "),
            placeholders.join(", ")
        ),
        params: values,
    }
}
