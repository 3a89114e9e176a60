// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::question::NewQuestion;
use chrono::NaiveDate;
use tempfile::TempDir;

fn ts() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 5)
        .unwrap()
        .and_hms_opt(9, 3, 7)
        .unwrap()
}

#[test]
fn timestamp_storage_round_trip_keeps_subseconds() {
    let value = ts()
        .checked_add_signed(chrono::TimeDelta::microseconds(123_456))
        .unwrap();
    let stored = timestamp_to_db(&value);
    assert_eq!(stored, "2024-01-05T09:03:07.123456");
    assert_eq!(parse_timestamp(&stored, "create_date").unwrap(), value);
}

#[test]
fn timestamp_without_fraction_is_stored_plain() {
    assert_eq!(timestamp_to_db(&ts()), "2024-01-05T09:03:07");
}

#[test]
fn parse_timestamp_rejects_garbage() {
    let err = parse_timestamp("yesterday", "create_date").unwrap_err();
    assert!(err.to_string().contains("create_date"));
}

#[test]
fn migrations_are_idempotent() {
    let db = Database::open_in_memory().unwrap();
    run_migrations(&db.conn).unwrap();
    run_migrations(&db.conn).unwrap();
    assert_eq!(db.count_questions().unwrap(), 0);
}

#[test]
fn open_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("board.db");

    let db = Database::open(&path).unwrap();
    db.create_question(&NewQuestion::new("s", "c", ts())).unwrap();
    drop(db);

    assert!(path.exists());
    let reopened = Database::open(&path).unwrap();
    assert_eq!(reopened.count_questions().unwrap(), 1);
}

#[test]
fn transaction_commits_on_success() {
    let db = Database::open_in_memory().unwrap();
    let id = db
        .transaction(|db| {
            let q = db.create_question(&NewQuestion::new("s", "c", ts()))?;
            Ok(q.id)
        })
        .unwrap();
    assert!(db.question_exists(id).unwrap());
}

#[test]
fn transaction_rolls_back_on_error() {
    let db = Database::open_in_memory().unwrap();
    let result: Result<()> = db.transaction(|db| {
        db.create_question(&NewQuestion::new("s", "c", ts()))?;
        db.create_question(&NewQuestion::new("", "c", ts()))?;
        Ok(())
    });

    assert!(matches!(result, Err(Error::FieldEmpty { field: "subject" })));
    assert_eq!(db.count_questions().unwrap(), 0);
}

#[test]
fn foreign_keys_are_enforced() {
    let db = Database::open_in_memory().unwrap();
    let result = db.conn.execute(
        "INSERT INTO answer (content, create_date, question_id) VALUES ('a', '2024-01-05T09:03:07', 99)",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn transaction_holds_write_lock_from_the_start() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.db");
    let a = Database::open(&path).unwrap();
    let b = Database::open(&path).unwrap();
    b.conn
        .busy_timeout(std::time::Duration::from_millis(50))
        .unwrap();
    let parent = a.create_question(&NewQuestion::new("s", "c", ts())).unwrap();

    let answer = a
        .transaction(|db| {
            let question = db.get_question(parent.id)?;
            // A second writer cannot slip in between our read and our write.
            let other = b.create_question(&NewQuestion::new("other", "c", ts()));
            assert!(matches!(other, Err(Error::Database(_))));
            db.create_answer(&crate::answer::NewAnswer::new("reply", &question, ts()))
        })
        .unwrap();

    assert_eq!(answer.question_id, parent.id);
    b.create_question(&NewQuestion::new("later", "c", ts()))
        .unwrap();
    assert_eq!(a.count_questions().unwrap(), 2);
}
