// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    field_empty = { Error::FieldEmpty { field: "subject" }, "subject cannot be empty" },
    question_not_found = { Error::QuestionNotFound(42), "42" },
    answer_not_found = { Error::AnswerNotFound(7), "answer not found" },
    question_missing = { Error::QuestionMissing(3), "existing question" },
    has_answers = { Error::QuestionHasAnswers { id: 1, answers: 2 }, "2 answer(s)" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn error_categories_are_disjoint() {
    let validation = Error::FieldEmpty { field: "content" };
    assert!(validation.is_validation());
    assert!(!validation.is_not_found());
    assert!(!validation.is_integrity());

    let not_found = Error::QuestionNotFound(1);
    assert!(not_found.is_not_found());
    assert!(!not_found.is_integrity());

    let integrity = Error::QuestionHasAnswers { id: 1, answers: 1 };
    assert!(integrity.is_integrity());
    assert!(!integrity.is_validation());
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn error_from_rusqlite() {
    let err: Error = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(matches!(err, Error::Database(_)));
}
