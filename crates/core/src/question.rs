// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Question records.
//!
//! A [`Question`] is a posted topic with a subject, content and creation
//! time. Its answers are not stored inline; [`Question::answers`] queries
//! them from the database each time it is called.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::answer::Answer;
use crate::db::Database;
use crate::error::{Error, Result};

/// A persisted question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Store-assigned identifier. Never changes after creation.
    pub id: i64,
    pub subject: String,
    pub content: String,
    /// Caller-supplied creation time (local, no offset).
    pub create_date: NaiveDateTime,
}

impl Question {
    /// Load this question's answers, oldest first.
    pub fn answers(&self, db: &Database) -> Result<Vec<Answer>> {
        db.find_answers_by_question(self.id)
    }

    /// Replace the subject, keeping id and creation time.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Replace the content, keeping id and creation time.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        require("subject", &self.subject)?;
        require("content", &self.content)
    }
}

/// The fields of a question that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub subject: String,
    pub content: String,
    pub create_date: NaiveDateTime,
}

impl NewQuestion {
    pub fn new(
        subject: impl Into<String>,
        content: impl Into<String>,
        create_date: NaiveDateTime,
    ) -> Self {
        NewQuestion {
            subject: subject.into(),
            content: content.into(),
            create_date,
        }
    }

    /// Build a question stamped with the current local time, truncated to seconds.
    pub fn now(subject: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(subject, content, crate::now())
    }

    pub(crate) fn validate(&self) -> Result<()> {
        require("subject", &self.subject)?;
        require("content", &self.content)
    }
}

/// Reject empty or whitespace-only required text.
pub(crate) fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::FieldEmpty { field });
    }
    Ok(())
}

#[cfg(test)]
#[path = "question_tests.rs"]
mod tests;
