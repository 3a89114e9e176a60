// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Presentation projections of stored records.
//!
//! Views carry the creation time as preformatted text in the board's
//! display pattern (`yyyy.MM.dd HH:mm:ss`). They are built on demand and
//! never written back to the database.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::answer::Answer;
use crate::question::Question;

/// strftime pattern for displayed creation times.
pub const CREATE_DATE_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

/// Render a timestamp as `yyyy.MM.dd HH:mm:ss`.
///
/// Sub-second precision is dropped, not rounded.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(CREATE_DATE_FORMAT).to_string()
}

/// Render an optional timestamp; an absent timestamp stays absent.
pub fn format_create_date(timestamp: Option<&NaiveDateTime>) -> Option<String> {
    timestamp.map(format_timestamp)
}

/// Read-only, display-formatted projection of a [`Question`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub id: i64,
    pub subject: String,
    pub content: String,
    pub create_date: Option<String>,
}

impl QuestionView {
    pub fn new(
        id: i64,
        subject: impl Into<String>,
        content: impl Into<String>,
        create_date: Option<&NaiveDateTime>,
    ) -> Self {
        QuestionView {
            id,
            subject: subject.into(),
            content: content.into(),
            create_date: format_create_date(create_date),
        }
    }
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        QuestionView::new(
            question.id,
            question.subject.as_str(),
            question.content.as_str(),
            Some(&question.create_date),
        )
    }
}

/// Display-formatted projection of an [`Answer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerView {
    pub id: i64,
    pub question_id: i64,
    pub content: String,
    pub create_date: Option<String>,
}

impl From<&Answer> for AnswerView {
    fn from(answer: &Answer) -> Self {
        AnswerView {
            id: answer.id,
            question_id: answer.question_id,
            content: answer.content.clone(),
            create_date: format_create_date(Some(&answer.create_date)),
        }
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
