// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the sbbrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'sbb init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("question not found: {0}")]
    QuestionNotFound(i64),

    #[error("answer not found: {0}")]
    AnswerNotFound(i64),

    #[error("no question matches subject '{0}'")]
    NoMatch(String),

    #[error("question {0} does not exist\n  hint: an answer must reference an existing question")]
    QuestionMissing(i64),

    #[error("question {id} still has {answers} answer(s)\n  hint: answers are not deleted with their question")]
    QuestionHasAnswers { id: i64, answers: u64 },

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("unknown attribute '{attr}'\n  hint: valid attributes are: subject, content")]
    UnknownAttribute { attr: String },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("corrupted data in database: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for sbbrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<sbb_core::Error> for Error {
    fn from(e: sbb_core::Error) -> Self {
        match e {
            sbb_core::Error::FieldEmpty { field } => Error::FieldEmpty { field },
            sbb_core::Error::QuestionNotFound(id) => Error::QuestionNotFound(id),
            sbb_core::Error::AnswerNotFound(id) => Error::AnswerNotFound(id),
            sbb_core::Error::QuestionMissing(id) => Error::QuestionMissing(id),
            sbb_core::Error::QuestionHasAnswers { id, answers } => {
                Error::QuestionHasAnswers { id, answers }
            }
            sbb_core::Error::Database(e) => Error::Database(e),
            sbb_core::Error::Io(e) => Error::Io(e),
            sbb_core::Error::CorruptedData(s) => Error::CorruptedData(s),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
