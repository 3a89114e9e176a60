// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use sbb_core::{Database, Question};

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

use super::{open_db, print_question};

pub fn run(subject: &str, content: Option<&str>, output: OutputFormat) -> Result<()> {
    let db = open_db()?;
    let question = run_impl(&db, subject, content)?;
    print_question(&question, output)
}

/// Internal implementation that accepts db for testing.
///
/// Exact match; with duplicates the lowest ID wins.
pub(crate) fn run_impl(db: &Database, subject: &str, content: Option<&str>) -> Result<Question> {
    let found = match content {
        Some(content) => db.find_question_by_subject_and_content(subject, content)?,
        None => db.find_question_by_subject(subject)?,
    };
    found.ok_or_else(|| Error::NoMatch(subject.to_string()))
}

#[cfg(test)]
#[path = "find_tests.rs"]
mod tests;
