// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The `sbb` binary with logging and overrides cleared from the environment.
pub fn sbb() -> Command {
    let mut cmd = cargo_bin_cmd!("sbb");
    cmd.env_remove("SBB_LOG")
        .env_remove("RUST_LOG")
        .env_remove("SBB_DATABASE");
    cmd
}

/// Helper to create an initialized temp directory
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    sbb()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Helper to post a question and return its ID
pub fn ask(temp: &TempDir, subject: &str, content: &str) -> i64 {
    let output = sbb()
        .args(["ask", subject, content, "-o", "id"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "ask failed: {:?}", output);

    String::from_utf8_lossy(&output.stdout).trim().parse().unwrap()
}

/// Helper to answer a question and return the answer ID
pub fn answer(temp: &TempDir, question_id: i64, content: &str) -> i64 {
    let output = sbb()
        .args(["answer", &question_id.to_string(), content, "-o", "id"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "answer failed: {:?}", output);

    String::from_utf8_lossy(&output.stdout).trim().parse().unwrap()
}

/// Stdout of a successful command run in `temp`.
pub fn stdout_of(temp: &TempDir, args: &[&str]) -> String {
    let output = sbb()
        .args(args)
        .current_dir(temp.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).unwrap()
}
