// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sbbrs - command-line front end for the sbb question board.
//!
//! This crate wires the [`sbb_core`] store to the `sbb` binary: project
//! discovery and configuration under `.sbb/`, logging setup, and one
//! module per subcommand.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - argument parsing
//! - [`Config`] - Project configuration (database location, log level)
//! - [`Error`] - Error types for all operations
//!
//! # Opening a board
//!
//! ```rust,ignore
//! use sbbrs::{find_work_dir, get_db_path, Config};
//! use sbb_core::Database;
//!
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let db = Database::open(&get_db_path(&work_dir, &config))?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod help;

pub mod config;
pub mod env;
pub mod error;
pub mod logging;

pub use cli::{Cli, Command, LimitArgs, OutputArgs, OutputFormat};
pub use config::{find_work_dir, get_db_path, init_work_dir, Config};
pub use error::{Error, Result};

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { database } => commands::init::run(database),
        Command::Ask {
            subject,
            content,
            output,
        } => commands::ask::run(subject, content, output.output),
        Command::List {
            like,
            limits,
            output,
        } => commands::list::run(like, limits.limit, output.output),
        Command::Show { ids, output } => commands::show::run(&ids, output.output),
        Command::Find {
            subject,
            content,
            output,
        } => commands::find::run(&subject, content.as_deref(), output.output),
        Command::Edit { id, attr, value } => commands::edit::run(id, &attr, &value),
        Command::Delete { id } => commands::delete::run(id),
        Command::Answer {
            question_id,
            content,
            output,
        } => commands::answer::run(question_id, &content, output.output),
        Command::Count => commands::count::run(),
        Command::Seed { count } => commands::seed::run(count),
        Command::Clear => commands::clear::run(),
    }
}

/// Log level for the current project, or the default outside one.
pub fn configured_log_level() -> String {
    find_work_dir()
        .and_then(|work_dir| Config::load(&work_dir))
        .map(|config| config.log_level().to_string())
        .unwrap_or_else(|_| config::DEFAULT_LOG_LEVEL.to_string())
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
