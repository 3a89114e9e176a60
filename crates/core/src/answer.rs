// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Answer records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::db::Database;
use crate::error::{Error, Result};
use crate::question::{require, Question};

/// A persisted answer, bound to exactly one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Store-assigned identifier.
    pub id: i64,
    pub content: String,
    pub create_date: NaiveDateTime,
    /// Parent question. Fixed at creation.
    pub question_id: i64,
}

impl Answer {
    /// Resolve the parent question.
    ///
    /// Fails with [`Error::QuestionMissing`] if the question was removed
    /// out from under the answer (only possible with foreign keys disabled).
    pub fn question(&self, db: &Database) -> Result<Question> {
        db.find_question(self.question_id)?
            .ok_or(Error::QuestionMissing(self.question_id))
    }
}

/// The fields of an answer that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnswer {
    pub content: String,
    pub create_date: NaiveDateTime,
    pub question_id: i64,
}

impl NewAnswer {
    pub fn new(content: impl Into<String>, question: &Question, create_date: NaiveDateTime) -> Self {
        NewAnswer {
            content: content.into(),
            create_date,
            question_id: question.id,
        }
    }

    /// Build an answer stamped with the current local time, truncated to seconds.
    pub fn now(content: impl Into<String>, question: &Question) -> Self {
        Self::new(content, question, crate::now())
    }

    pub(crate) fn validate(&self) -> Result<()> {
        require("content", &self.content)
    }
}

#[cfg(test)]
#[path = "answer_tests.rs"]
mod tests;
