// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand};

pub use args::{LimitArgs, OutputArgs, OutputFormat};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

#[derive(Parser)]
#[command(name = "sbb")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A small question and answer board backed by SQLite")]
#[command(styles = help::styles())]
pub struct Cli {
    /// Run as if sbb was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize a board in the current directory
    #[command(after_help = colors::examples("\
Examples:
  sbb init                          Create .sbb/ with the default database
  sbb init --database data/qa.db    Keep the database somewhere else"))]
    Init {
        /// Database location (relative to the project root or absolute)
        #[arg(long, value_name = "path")]
        database: Option<String>,
    },

    /// Post a new question
    #[command(after_help = colors::examples("\
Examples:
  sbb ask \"sbb가 무엇인가요?\" \"sbb에 대해서 알고 싶습니다.\"
  sbb ask \"Subject\" \"Content\" -o id    Print only the new ID"))]
    Ask {
        /// Question subject
        #[arg(value_parser = non_empty_string)]
        subject: String,

        /// Question content
        #[arg(value_parser = non_empty_string)]
        content: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List questions, oldest first
    #[command(after_help = colors::examples("\
Examples:
  sbb list                  List every question
  sbb list --like 'sbb%'    Subjects starting with sbb (case-sensitive)
  sbb list -n 10 -o json    First ten questions as JSON lines"))]
    List {
        /// Filter subjects with a LIKE pattern (% = any run, _ = one char)
        #[arg(long, value_name = "pattern")]
        like: Option<String>,

        #[command(flatten)]
        limits: LimitArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show question(s) with their answers
    #[command(arg_required_else_help = true)]
    Show {
        /// Question ID(s)
        #[arg(required = true)]
        ids: Vec<i64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Find a question by exact subject (and optionally content)
    Find {
        /// Exact subject
        subject: String,

        /// Exact content
        #[arg(long)]
        content: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Edit a question's subject or content
    #[command(after_help = colors::examples("\
Examples:
  sbb edit 1 subject \"제목 수정\"    Update the subject
  sbb edit 1 content \"New body\"     Update the content"))]
    Edit {
        /// Question ID
        id: i64,

        /// Attribute to edit (subject, content)
        attr: String,

        /// New value
        #[arg(value_parser = non_empty_string)]
        value: String,
    },

    /// Delete a question that has no answers
    Delete {
        /// Question ID
        id: i64,
    },

    /// Answer a question
    Answer {
        /// ID of the question being answered
        question_id: i64,

        /// Answer content
        #[arg(value_parser = non_empty_string)]
        content: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the number of questions
    Count,

    /// Fill the board with numbered test questions
    Seed {
        /// Number of questions to create
        #[arg(long, short = 'n', default_value_t = 300)]
        count: u32,
    },

    /// Delete all answers and questions
    Clear,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
