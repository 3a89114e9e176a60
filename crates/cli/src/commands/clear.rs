// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use sbb_core::Database;

use super::open_db;
use crate::error::Result;

/// Rows removed by a clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cleared {
    pub answers: u64,
    pub questions: u64,
}

pub fn run() -> Result<()> {
    let db = open_db()?;
    let cleared = run_impl(&db)?;
    println!(
        "Deleted {} questions and {} answers",
        cleared.questions, cleared.answers
    );
    Ok(())
}

/// Internal implementation that accepts db for testing.
///
/// Answers go first; questions cannot be removed while answers reference them.
pub(crate) fn run_impl(db: &Database) -> Result<Cleared> {
    let cleared = db.transaction(|db| {
        let answers = db.delete_all_answers()?;
        let questions = db.delete_all_questions()?;
        Ok(Cleared { answers, questions })
    })?;
    tracing::info!(
        answers = cleared.answers,
        questions = cleared.questions,
        "cleared board"
    );
    Ok(cleared)
}

#[cfg(test)]
#[path = "clear_tests.rs"]
mod tests;
