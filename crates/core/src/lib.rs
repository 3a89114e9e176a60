// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sbb-core: Storage for the sbb question board
//!
//! This crate provides the question and answer records, their SQLite-backed
//! store, and the display projections used by the sbb CLI.

pub mod answer;
pub mod answers;
pub mod db;
pub mod error;
pub mod pattern;
pub mod question;
pub mod questions;
pub mod view;

pub use answer::{Answer, NewAnswer};
pub use db::Database;
pub use error::{Error, Result};
pub use question::{NewQuestion, Question};
pub use view::{format_create_date, format_timestamp, AnswerView, QuestionView};

use chrono::{Local, NaiveDateTime, Timelike};

/// Current local time truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}
