// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;

use sbb_core::{AnswerView, Database, QuestionView};

use crate::cli::OutputFormat;
use crate::display::format_question_details;
use crate::error::Result;

use super::open_db;

#[derive(Debug, Serialize)]
pub(crate) struct QuestionDetails {
    #[serde(flatten)]
    pub question: QuestionView,
    pub answers: Vec<AnswerView>,
}

pub fn run(ids: &[i64], output: OutputFormat) -> Result<()> {
    let db = open_db()?;
    let details = run_impl(&db, ids)?;

    match output {
        OutputFormat::Text => {
            for (i, d) in details.iter().enumerate() {
                if i > 0 {
                    println!("---");
                }
                print!("{}", format_question_details(&d.question, &d.answers));
            }
        }
        OutputFormat::Json => {
            for d in &details {
                // One object per line
                println!("{}", serde_json::to_string(d)?);
            }
        }
        OutputFormat::Id => {
            for d in &details {
                println!("{}", d.question.id);
            }
        }
    }
    Ok(())
}

/// Internal implementation that accepts db for testing.
///
/// Fails on the first missing ID so nothing is printed for a bad request.
pub(crate) fn run_impl(db: &Database, ids: &[i64]) -> Result<Vec<QuestionDetails>> {
    ids.iter().map(|&id| build_details(db, id)).collect()
}

fn build_details(db: &Database, id: i64) -> Result<QuestionDetails> {
    let question = db.get_question(id)?;
    let answers = question.answers(db)?;
    Ok(QuestionDetails {
        question: QuestionView::from(&question),
        answers: answers.iter().map(AnswerView::from).collect(),
    })
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
