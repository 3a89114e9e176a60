// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::error::Error;
use tempfile::TempDir;

#[test]
fn test_init_creates_work_dir_and_database() {
    let temp = TempDir::new().unwrap();
    run_impl(temp.path(), None).unwrap();

    let work_dir = temp.path().join(".sbb");
    assert!(work_dir.join("config.toml").exists());
    assert!(work_dir.join("board.db").exists());
    assert!(work_dir.join(".gitignore").exists());
}

#[test]
fn test_init_with_custom_database() {
    let temp = TempDir::new().unwrap();
    run_impl(temp.path(), Some("data/qa.db".to_string())).unwrap();

    assert!(temp.path().join("data/qa.db").exists());
    assert!(!temp.path().join(".sbb/board.db").exists());

    let config = Config::load(&temp.path().join(".sbb")).unwrap();
    assert_eq!(config.database.as_deref(), Some("data/qa.db"));
}

#[test]
fn test_init_twice_fails() {
    let temp = TempDir::new().unwrap();
    run_impl(temp.path(), None).unwrap();

    let result = run_impl(temp.path(), None);
    assert!(matches!(result, Err(Error::AlreadyInitialized(_))));
}
