// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use chrono::NaiveDate;
use chrono::NaiveDateTime;

fn ts(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 5)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

fn question_view() -> QuestionView {
    QuestionView::new(
        1,
        "sbb가 무엇인가요?",
        "sbb에 대해서 알고 싶습니다.",
        Some(&ts(9, 3, 7)),
    )
}

fn answer_view(id: i64, content: &str) -> AnswerView {
    AnswerView {
        id,
        question_id: 1,
        content: content.to_string(),
        create_date: Some("2024.01.05 10:00:00".to_string()),
    }
}

#[test]
fn test_format_question_line() {
    let line = format_question_line(&question_view());
    assert_eq!(line, "- [1] sbb가 무엇인가요? (2024.01.05 09:03:07)");
}

#[test]
fn test_format_question_line_without_date() {
    let view = QuestionView::new(2, "subject", "content", None);
    assert_eq!(format_question_line(&view), "- [2] subject (-)");
}

#[test]
fn test_format_answer() {
    let lines = format_answer(&answer_view(3, "네 자동으로 생성됩니다."));
    assert_eq!(lines, vec!["  [3] 2024.01.05 10:00:00", "    네 자동으로 생성됩니다."]);
}

#[test]
fn test_format_question_details_without_answers() {
    let text = format_question_details(&question_view(), &[]);
    assert!(text.starts_with("[1] sbb가 무엇인가요?\n"));
    assert!(text.contains("Created: 2024.01.05 09:03:07"));
    assert!(text.contains("    sbb에 대해서 알고 싶습니다."));
    assert!(!text.contains("Answers"));
}

#[test]
fn test_format_question_details_with_answers() {
    let answers = vec![answer_view(3, "first"), answer_view(4, "second")];
    let text = format_question_details(&question_view(), &answers);
    assert!(text.contains("Answers (2):"));
    let first = text.find("first").unwrap();
    let second = text.find("second").unwrap();
    assert!(first < second);
}

#[test]
fn test_wrap_text_short_line_unchanged() {
    assert_eq!(wrap_text("short text", 20), "short text");
}

#[test]
fn test_wrap_text_preserves_newlines() {
    let content = "line one\nline two that is long enough to wrap otherwise";
    assert_eq!(wrap_text(content, 10), content);
}

#[test]
fn test_wrap_text_wraps_at_word_boundary() {
    let wrapped = wrap_text("aaa bbb ccc ddd", 7);
    assert_eq!(wrapped, "aaa bbb\nccc ddd");
}

#[test]
fn test_wrap_text_counts_characters() {
    // 8 Hangul characters are 24 bytes but only 8 columns of characters.
    let content = "가나다라 마바사아";
    assert_eq!(wrap_text(content, 9), content);
}
