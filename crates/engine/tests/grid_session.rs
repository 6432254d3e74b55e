//! End-to-end editing scenarios against a small `users` table.

use std::time::{Duration, Instant};

use gridbase_engine::table::row_from;
use gridbase_engine::{
    BulkOperation, BulkUpdate, CellKey, ColumnDef, CopyKind, CopyPayload, GridSession,
    PasteOptions, TableSnapshot, Value,
};

fn users_table() -> TableSnapshot {
    TableSnapshot::new(
        "users",
        vec![
            ColumnDef::new("id", "INTEGER").primary_key().auto_increment(),
            ColumnDef::new("name", "TEXT"),
            ColumnDef::new("email", "TEXT"),
            ColumnDef::new("age", "INTEGER"),
        ],
    )
    .with_rows(vec![
        row_from(&[
            ("id", Value::Int(1)),
            ("name", Value::from("A")),
            ("email", Value::from("a@x.com")),
            ("age", Value::Int(30)),
        ]),
        row_from(&[
            ("id", Value::Int(2)),
            ("name", Value::from("B")),
            ("email", Value::from("b@x.com")),
            ("age", Value::Int(35)),
        ]),
        row_from(&[
            ("id", Value::Int(3)),
            ("name", Value::from("C")),
            ("email", Value::from("c@x.com")),
            ("age", Value::Int(50)),
        ]),
    ])
}

fn session() -> GridSession {
    let mut s = GridSession::with_validation_delay(Duration::from_millis(250));
    s.set_table(users_table());
    s
}

#[test]
fn edit_name_and_commit() {
    let mut s = session();
    s.begin_edit(0, "name").unwrap();
    s.update_cell_value(0, "name", Value::from("B"), Instant::now())
        .unwrap();
    s.commit_edit(0, "name").unwrap();

    assert_eq!(s.cell_value(0, "name"), Some(&Value::from("B")));
    assert_eq!(s.statistics().modified_cells, 1);
}

#[test]
fn primary_key_and_auto_increment_never_editable() {
    let mut s = session();
    let err = s.begin_edit(0, "id").unwrap_err();
    assert!(err.to_string().contains("not editable"));

    // Still true on an empty table of the same shape.
    let mut empty = GridSession::new();
    empty.set_table(TableSnapshot::new(
        "users",
        vec![
            ColumnDef::new("id", "INTEGER").primary_key().auto_increment(),
            ColumnDef::new("name", "TEXT"),
        ],
    ));
    assert!(empty.begin_edit(0, "id").is_err());
}

#[test]
fn soft_delete_keeps_row_until_commit() {
    let mut s = session();
    s.delete_row(0).unwrap();

    let deleted = s.tracker().deleted_rows();
    assert_eq!(deleted.len(), 1);
    assert_eq!(deleted[0].key, Value::Int(1));

    // Physically present, filtered from the visible set.
    assert_eq!(s.row_count(), 3);
    let visible: Vec<usize> = s.visible_rows().map(|(i, _)| i).collect();
    assert_eq!(visible, vec![1, 2]);

    s.commit_changes().unwrap();
    assert_eq!(s.row_count(), 2);
}

#[test]
fn bulk_update_age_across_three_rows() {
    let mut s = session();
    let outcome = s
        .run_bulk(BulkOperation::Update(BulkUpdate::fixed(
            "age",
            vec![0, 1, 2],
            Value::Int(40),
        )))
        .unwrap();

    assert_eq!(outcome.affected_rows, 3);
    for row in 0..3 {
        assert_eq!(s.cell_value(row, "age"), Some(&Value::Int(40)));
    }
}

#[test]
fn paste_past_end_without_expansion_writes_nothing() {
    let mut s = session();
    let payload = CopyPayload {
        kind: CopyKind::Range,
        data: vec![
            vec![Value::from("p@x.com"), Value::Int(1)],
            vec![Value::from("q@x.com"), Value::Int(2)],
        ],
    };
    let outcome = s
        .paste_cells(
            &payload,
            &CellKey::new(5, "email"),
            &PasteOptions {
                auto_expand_rows: false,
                skip_validation_errors: false,
            },
        )
        .unwrap();

    assert_eq!(outcome.affected_cells, 0);
    assert_eq!(s.row_count(), 3);
    assert!(!s.has_changes());
}

#[test]
fn statements_cover_the_whole_diff() {
    let mut s = session();

    // Edit two cells of row 0, delete row 1, append a row.
    for (column, value) in [("name", Value::from("Z")), ("age", Value::Int(31))] {
        s.begin_edit(0, column).unwrap();
        s.update_cell_value(0, column, value, Instant::now()).unwrap();
        s.commit_edit(0, column).unwrap();
    }
    s.delete_row(1).unwrap();
    s.add_row_with(row_from(&[
        ("name", Value::from("D")),
        ("email", Value::from("d@x.com")),
        ("age", Value::Int(20)),
    ]))
    .unwrap();

    let statements = s.commit_changes().unwrap();
    assert_eq!(statements.len(), 3);

    assert_eq!(
        statements[0].sql,
        "UPDATE \"users\" SET \"age\" = ?, \"name\" = ? WHERE \"id\" = ?"
    );
    assert_eq!(
        statements[0].params,
        vec![Value::Int(31), Value::from("Z"), Value::Int(1)]
    );

    assert_eq!(statements[1].sql, "DELETE FROM \"users\" WHERE \"id\" = ?");
    assert_eq!(statements[1].params, vec![Value::Int(2)]);

    assert!(statements[2].sql.starts_with("INSERT INTO \"users\""));
    // The auto-increment id is never in the column list.
    assert!(!statements[2].sql.contains("\"id\""));

    // Placeholders and params always line up.
    for stmt in &statements {
        assert_eq!(stmt.sql.matches('?').count(), stmt.params.len());
    }
}

#[test]
fn no_delete_statements_without_primary_key() {
    let mut s = GridSession::new();
    s.set_table(
        TableSnapshot::new("log", vec![ColumnDef::new("line", "TEXT")]).with_rows(vec![
            row_from(&[("line", Value::from("first"))]),
            row_from(&[("line", Value::from("second"))]),
        ]),
    );
    s.delete_row(0).unwrap();

    let statements = s.commit_changes().unwrap();
    assert!(statements.is_empty());
    // The tombstone is still honored locally.
    assert_eq!(s.row_count(), 1);
}

#[test]
fn committing_invalid_value_never_mutates() {
    let mut s = session();
    s.begin_edit(0, "age").unwrap();
    s.update_cell_value(0, "age", Value::from("n/a"), Instant::now())
        .unwrap();

    let before = s.cell_value(0, "age").cloned();
    assert!(s.commit_edit(0, "age").is_err());
    assert_eq!(s.cell_value(0, "age").cloned(), before);
}

#[test]
fn rollback_after_mixed_changes_yields_clean_grid() {
    let mut s = session();
    s.begin_edit(2, "email").unwrap();
    s.update_cell_value(2, "email", Value::from("new@x.com"), Instant::now())
        .unwrap();
    s.commit_edit(2, "email").unwrap();
    s.delete_row(0).unwrap();
    s.add_row().unwrap();
    assert!(s.has_changes());

    s.rollback_changes();

    assert!(!s.has_changes());
    assert_eq!(s.row_count(), 3);
    assert_eq!(s.cell_value(2, "email"), Some(&Value::from("c@x.com")));
    let record = s.change_record();
    assert_eq!(record.total_changes, 0);
}

#[test]
fn summary_reflects_pending_work() {
    let mut s = session();
    assert!(!s.summary().can_commit);

    s.begin_edit(0, "name").unwrap();
    s.update_cell_value(0, "name", Value::from("B"), Instant::now())
        .unwrap();
    s.commit_edit(0, "name").unwrap();
    s.delete_row(2).unwrap();

    let summary = s.summary();
    assert!(summary.can_commit);
    assert!(summary.description.contains("2 change(s)"));
    assert_eq!(summary.details.len(), 2);
    assert_eq!(summary.warnings.len(), 1);
}
