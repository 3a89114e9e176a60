// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use sbb_core::{Database, Question};

use crate::cli::OutputFormat;
use crate::error::Result;

use super::{open_db, print_questions};

pub fn run(like: Option<String>, limit: Option<usize>, output: OutputFormat) -> Result<()> {
    let db = open_db()?;
    let questions = run_impl(&db, like.as_deref(), limit)?;
    print_questions(&questions, output)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(
    db: &Database,
    like: Option<&str>,
    limit: Option<usize>,
) -> Result<Vec<Question>> {
    let mut questions = match like {
        Some(pattern) => db.find_questions_by_subject_like(pattern)?,
        None => db.find_all_questions()?,
    };

    if let Some(n) = limit {
        questions.truncate(n);
    }

    Ok(questions)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
