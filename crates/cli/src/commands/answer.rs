// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::NaiveDateTime;
use sbb_core::{Answer, AnswerView, Database, NewAnswer};

use super::open_db;
use crate::cli::OutputFormat;
use crate::display::format_answer;
use crate::error::Result;

pub fn run(question_id: i64, content: &str, output: OutputFormat) -> Result<()> {
    let db = open_db()?;
    let answer = run_impl(&db, question_id, content, sbb_core::now())?;
    let view = AnswerView::from(&answer);

    match output {
        OutputFormat::Text => {
            println!("Answered question [{}]", view.question_id);
            for line in format_answer(&view) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&view)?),
        OutputFormat::Id => println!("{}", view.id),
    }
    Ok(())
}

/// Internal implementation that accepts db for testing.
///
/// The parent lookup and the insert share one transaction.
pub(crate) fn run_impl(
    db: &Database,
    question_id: i64,
    content: &str,
    create_date: NaiveDateTime,
) -> Result<Answer> {
    let answer = db.transaction(|db| {
        let question = db
            .find_question(question_id)?
            .ok_or(sbb_core::Error::QuestionMissing(question_id))?;
        db.create_answer(&NewAnswer::new(content, &question, create_date))
    })?;
    Ok(answer)
}

#[cfg(test)]
#[path = "answer_tests.rs"]
mod tests;
