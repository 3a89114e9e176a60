// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for sbb-core operations.

use thiserror::Error;

/// All possible errors that can occur in sbb-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("question not found: {0}")]
    QuestionNotFound(i64),

    #[error("answer not found: {0}")]
    AnswerNotFound(i64),

    #[error("question {0} does not exist\n  hint: an answer must reference an existing question")]
    QuestionMissing(i64),

    #[error("question {id} still has {answers} answer(s)\n  hint: answers are not deleted with their question")]
    QuestionHasAnswers { id: i64, answers: u64 },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

impl Error {
    /// Returns true for errors caused by a missing or empty required field.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::FieldEmpty { .. })
    }

    /// Returns true when the targeted record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::QuestionNotFound(_) | Error::AnswerNotFound(_))
    }

    /// Returns true when the operation would break the question/answer link.
    pub fn is_integrity(&self) -> bool {
        matches!(
            self,
            Error::QuestionMissing(_) | Error::QuestionHasAnswers { .. }
        )
    }
}

/// A specialized Result type for sbb-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
