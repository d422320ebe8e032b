//! Runtime configuration resolution.
//!
//! # Responsibility
//! - Turn parsed flags plus `TASKLIST_HOME` into concrete paths and levels.
//!
//! # Invariants
//! - `log_dir` is always absolute.
//! - `--memory` wins over any database path.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::args::Cli;

const APP_NAME: &str = "tasklist";
const DB_FILE_NAME: &str = "tasklist.db";
const HOME_ENV: &str = "TASKLIST_HOME";

/// Where the list lives for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageTarget {
    File(PathBuf),
    Memory,
}

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageTarget,
    pub log_dir: PathBuf,
    pub log_level: String,
    pub color: bool,
}

impl Config {
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let home = std::env::var_os(HOME_ENV).map(PathBuf::from);
        Self::resolve_with_home(cli, home.as_deref())
    }

    fn resolve_with_home(cli: &Cli, home: Option<&Path>) -> Result<Self> {
        let data_dir = match home {
            Some(path) => path.to_path_buf(),
            None => default_data_dir()?,
        };

        let storage = if cli.memory {
            StorageTarget::Memory
        } else {
            StorageTarget::File(cli.db.clone().unwrap_or_else(|| data_dir.join(DB_FILE_NAME)))
        };

        let log_dir = cli.log_dir.clone().unwrap_or_else(|| data_dir.join("logs"));
        let log_dir = if log_dir.is_absolute() {
            log_dir
        } else {
            std::env::current_dir()
                .context("Could not determine current directory")?
                .join(log_dir)
        };

        Ok(Self {
            storage,
            log_dir,
            log_level: cli
                .log_level
                .clone()
                .unwrap_or_else(|| tasklist_core::default_log_level().to_string()),
            color: !cli.no_color,
        })
    }
}

fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .context("Could not determine data directory")
}
