// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    config_only = { None, None, "warn" },
    rust_log = { None, Some("info"), "info" },
    empty_rust_log = { None, Some(""), "warn" },
    sbb_log_wins = { Some("sbbrs=debug"), Some("info"), "sbbrs=debug" },
)]
fn test_resolve_filter(sbb_log: Option<&str>, rust_log: Option<&str>, expected: &str) {
    let resolved = resolve_filter(
        sbb_log.map(String::from),
        rust_log.map(String::from),
        "warn",
    );
    assert_eq!(resolved, expected);
}

#[test]
fn test_init_twice_does_not_panic() {
    init("warn");
    init("debug");
}
