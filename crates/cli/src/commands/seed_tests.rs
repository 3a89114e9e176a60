// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::commands::testing::{fixed_time, TestContext};
use yare::parameterized;

#[parameterized(
    first = { 1, "테스트 데이터입니다:[001]" },
    tenth = { 10, "테스트 데이터입니다:[010]" },
    last = { 300, "테스트 데이터입니다:[300]" },
    wide = { 1000, "테스트 데이터입니다:[1000]" },
)]
fn test_seed_subject(index: u32, expected: &str) {
    assert_eq!(seed_subject(index), expected);
}

#[test]
fn test_seed_creates_requested_rows() {
    let ctx = TestContext::new();
    assert_eq!(run_impl(&ctx.db, 300, fixed_time()).unwrap(), 300);
    assert_eq!(ctx.question_count(), 300);

    let all = ctx.db.find_all_questions().unwrap();
    assert_eq!(all[0].subject, "테스트 데이터입니다:[001]");
    assert_eq!(all[299].subject, "테스트 데이터입니다:[300]");
    assert!(all.iter().all(|q| q.content == "내용무"));
}

#[test]
fn test_seed_zero_is_noop() {
    let ctx = TestContext::new();
    assert_eq!(run_impl(&ctx.db, 0, fixed_time()).unwrap(), 0);
    assert_eq!(ctx.question_count(), 0);
}
