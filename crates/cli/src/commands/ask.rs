// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use sbb_core::{Database, NewQuestion, Question};

use crate::cli::OutputFormat;
use crate::error::Result;

use super::{open_db, print_question};

pub fn run(subject: String, content: String, output: OutputFormat) -> Result<()> {
    let db = open_db()?;
    let question = run_impl(&db, NewQuestion::now(subject, content))?;
    print_question(&question, output)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &Database, new: NewQuestion) -> Result<Question> {
    let question = db.create_question(&new)?;
    Ok(question)
}

#[cfg(test)]
#[path = "ask_tests.rs"]
mod tests;
