// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod answer;
pub mod ask;
pub mod clear;
pub mod count;
pub mod delete;
pub mod edit;
pub mod find;
pub mod init;
pub mod list;
pub mod seed;
pub mod show;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use sbb_core::{Database, Question, QuestionView};

use crate::cli::OutputFormat;
use crate::config::resolve_db_path;
use crate::display::format_question_line;
use crate::env;
use crate::error::Result;

/// Helper to open the database from the current context.
pub fn open_db() -> Result<Database> {
    let db_path = resolve_db_path(env::database_path(), &std::env::current_dir()?)?;
    tracing::debug!(path = %db_path.display(), "opening database");
    Ok(Database::open(&db_path)?)
}

/// Print questions in the requested format, one per line.
pub(crate) fn print_questions(questions: &[Question], format: OutputFormat) -> Result<()> {
    for question in questions {
        print_question(question, format)?;
    }
    Ok(())
}

/// Print a single question as a list line, a JSON object or a bare ID.
pub(crate) fn print_question(question: &Question, format: OutputFormat) -> Result<()> {
    let view = QuestionView::from(question);
    match format {
        OutputFormat::Text => println!("{}", format_question_line(&view)),
        OutputFormat::Json => println!("{}", serde_json::to_string(&view)?),
        OutputFormat::Id => println!("{}", view.id),
    }
    Ok(())
}
