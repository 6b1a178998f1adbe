//! Integration tests for table files and database directories

use shelfdb::{
    AutoConfirm, DbError, DropOutcome, EngineConfig, Outcome, Projection, Session, Value,
};
use std::fs;
use tempfile::TempDir;

fn session(root: &std::path::Path, answer: bool) -> Session {
    Session::with_confirm(EngineConfig::new(root), Box::new(AutoConfirm::new(answer))).unwrap()
}

#[test]
fn test_data_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        let mut db = session(temp_dir.path(), true);
        db.create_database("shop").unwrap();
        db.use_database("shop").unwrap();
        db.create_table("items", &["sku text PRIMARY", "price float", "qty int"])
            .unwrap();
        db.insert("items", vec!["b-2".into(), Value::Float(2.5), Value::Integer(4)])
            .unwrap();
        db.insert("items", vec!["a-1".into(), Value::Float(10.0), Value::Integer(1)])
            .unwrap();
    }

    let mut db = session(temp_dir.path(), true);
    assert!(matches!(db.list_tables(), Err(DbError::NoActiveDatabase)));
    db.use_database("shop").unwrap();
    assert_eq!(db.list_tables().unwrap(), vec!["items"]);

    let all = db.select("items", &Projection::All, None).unwrap();
    assert_eq!(all.columns, vec!["sku", "price", "qty"]);
    assert_eq!(
        all.rows,
        vec![
            vec![Value::Text("b-2".into()), Value::Float(2.5), Value::Integer(4)],
            vec![Value::Text("a-1".into()), Value::Float(10.0), Value::Integer(1)],
        ]
    );
}

#[test]
fn test_table_file_format() {
    let temp_dir = TempDir::new().unwrap();
    let mut db = session(temp_dir.path(), true);
    db.create_database("shop").unwrap();
    db.use_database("shop").unwrap();
    db.create_table("users", &["id int PRIMARY", "name text"])
        .unwrap();
    db.insert("users", vec![Value::Integer(1), "Alice".into()])
        .unwrap();

    let path = temp_dir.path().join("shop").join("users.json");
    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(
        doc,
        serde_json::json!({
            "columns": [
                { "name": "id", "type": "int", "primary": true },
                { "name": "name", "type": "text", "primary": false }
            ],
            "rows": [[1, "Alice"]],
            "primary_key": "id"
        })
    );
}

#[test]
fn test_reads_hand_written_table() {
    let temp_dir = TempDir::new().unwrap();
    let db_dir = temp_dir.path().join("legacy");
    fs::create_dir(&db_dir).unwrap();
    fs::write(
        db_dir.join("people.json"),
        r#"{"columns": [{"name": "id", "type": "int", "primary": true},
                        {"name": "name", "type": "text", "primary": false}],
            "rows": [["1", "Ann"], ["2", "Ben"]],
            "primary_key": "id"}"#,
    )
    .unwrap();

    let mut db = session(temp_dir.path(), true);
    db.use_database("legacy").unwrap();

    // ids stored as strings still match numerically
    let result = db
        .select(
            "people",
            &Projection::Columns(vec!["name".into()]),
            Some(&shelfdb::Filter::new("id", "2")),
        )
        .unwrap();
    assert_eq!(result.rows, vec![vec![Value::Text("Ben".into())]]);

    // and collide with numeric keys on insert
    let err = db
        .insert("people", vec![Value::Integer(1), "Dup".into()])
        .unwrap_err();
    assert!(matches!(err, DbError::DuplicateKey { .. }));
}

#[test]
fn test_corrupt_table_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let db_dir = temp_dir.path().join("broken");
    fs::create_dir(&db_dir).unwrap();
    fs::write(
        db_dir.join("t.json"),
        r#"{"columns": [{"name": "id", "type": "int", "primary": false}],
            "rows": [], "primary_key": "id"}"#,
    )
    .unwrap();

    let mut db = session(temp_dir.path(), true);
    db.use_database("broken").unwrap();
    assert!(matches!(
        db.select("t", &Projection::All, None),
        Err(DbError::CorruptTable { .. })
    ));
}

#[test]
fn test_create_database_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let mut db = session(temp_dir.path(), true);

    assert_eq!(db.create_database("shop").unwrap(), Outcome::Created);
    db.use_database("shop").unwrap();
    db.create_table("t", &["id int primary"]).unwrap();

    assert_eq!(db.create_database("shop").unwrap(), Outcome::AlreadyExists);
    assert_eq!(db.list_tables().unwrap(), vec!["t"]);
}

#[test]
fn test_use_missing_database() {
    let temp_dir = TempDir::new().unwrap();
    let mut db = session(temp_dir.path(), true);
    assert!(matches!(
        db.use_database("ghost"),
        Err(DbError::DatabaseNotFound(_))
    ));
    assert_eq!(db.active_database(), None);
}

#[test]
fn test_drop_database_removes_everything() {
    let temp_dir = TempDir::new().unwrap();
    let mut db = session(temp_dir.path(), true);
    db.create_database("shop").unwrap();
    db.create_database("other").unwrap();
    db.use_database("shop").unwrap();
    db.create_table("t", &["id int primary"]).unwrap();

    // dropping a database that is not active keeps the pointer
    assert_eq!(db.drop_database("other").unwrap(), DropOutcome::Dropped);
    assert_eq!(db.active_database(), Some("shop"));

    assert_eq!(db.drop_database("shop").unwrap(), DropOutcome::Dropped);
    assert!(!temp_dir.path().join("shop").exists());
    assert_eq!(db.active_database(), None);

    assert!(matches!(
        db.drop_database("shop"),
        Err(DbError::DatabaseNotFound(_))
    ));
}

#[test]
fn test_declined_drop_keeps_files() {
    let temp_dir = TempDir::new().unwrap();
    let mut db = session(temp_dir.path(), false);
    db.create_database("shop").unwrap();

    assert_eq!(db.drop_database("shop").unwrap(), DropOutcome::Aborted);
    assert!(temp_dir.path().join("shop").is_dir());
}

#[test]
fn test_custom_extension() {
    let temp_dir = TempDir::new().unwrap();
    let mut db = Session::with_confirm(
        EngineConfig::new(temp_dir.path()).extension("tbl").pretty(false),
        Box::new(AutoConfirm::new(true)),
    )
    .unwrap();
    db.create_database("shop").unwrap();
    db.use_database("shop").unwrap();
    db.create_table("t", &["id int primary"]).unwrap();

    assert!(temp_dir.path().join("shop").join("t.tbl").is_file());
    assert_eq!(db.list_tables().unwrap(), vec!["t"]);
}
