// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.sbb/config.toml` and includes:
//! - `database`: Optional path to the SQLite file (default `.sbb/board.db`)
//! - `log_level`: Optional default log filter (default `warn`)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".sbb";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "board.db";
const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Log filter used when neither the environment nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Project configuration stored in `.sbb/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path of the database file (relative to project root or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    /// Default tracing filter, e.g. `info` or `sbbrs=debug`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Config {
    /// Creates a config with an optional database location.
    pub fn new(database: Option<String>) -> Self {
        Config {
            database,
            log_level: None,
        }
    }

    /// Loads configuration from the given `.sbb/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given `.sbb/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// The configured log filter, or [`DEFAULT_LOG_LEVEL`].
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

/// Find the .sbb directory by walking up from the current directory
pub fn find_work_dir() -> Result<PathBuf> {
    find_work_dir_from(&std::env::current_dir()?)
}

/// Find the .sbb directory by walking up from `start`
pub fn find_work_dir_from(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Get the database path from config
pub fn get_db_path(work_dir: &Path, config: &Config) -> PathBuf {
    match &config.database {
        Some(database) => {
            let database_path = Path::new(database);
            if database_path.is_absolute() {
                database_path.to_path_buf()
            } else {
                // Relative to work_dir's parent (the project root)
                work_dir.parent().unwrap_or(work_dir).join(database)
            }
        }
        None => work_dir.join(DB_FILE_NAME),
    }
}

/// Locate the database file.
///
/// An explicit override (`SBB_DATABASE`) wins and needs no `.sbb/`
/// directory; otherwise the project is discovered from `start` and its
/// config decides.
pub fn resolve_db_path(db_override: Option<PathBuf>, start: &Path) -> Result<PathBuf> {
    if let Some(path) = db_override {
        return Ok(path);
    }
    let work_dir = find_work_dir_from(start)?;
    let config = Config::load(&work_dir)?;
    Ok(get_db_path(&work_dir, &config))
}

/// Initialize a new .sbb directory at the given path
pub fn init_work_dir(path: &Path, database: Option<String>) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.join(CONFIG_FILE_NAME).exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;

    let config = Config::new(database);
    config.save(&work_dir)?;

    Ok(work_dir)
}

/// Write a .gitignore file to the work directory.
///
/// The database and its WAL files stay out of version control.
pub fn write_gitignore(work_dir: &Path) -> Result<()> {
    let gitignore_path = work_dir.join(GITIGNORE_FILE_NAME);
    let content = "# Database\nboard.db\nboard.db-wal\nboard.db-shm\n";
    fs::write(&gitignore_path, content)?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
