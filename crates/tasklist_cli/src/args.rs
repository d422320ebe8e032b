//! Command-line surface.
//!
//! # Responsibility
//! - Declare global storage/logging flags and the one-shot subcommands.
//! - Fall back to the interactive view when no subcommand is given.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tasklist_core::TaskId;

#[derive(Parser, Debug)]
#[command(name = "tasklist")]
#[command(about = "A single persisted to-do list")]
#[command(version)]
pub struct Cli {
    /// SQLite file holding the list (defaults to the user data directory)
    #[arg(long, global = true, conflicts_with = "memory")]
    pub db: Option<PathBuf>,

    /// Keep the list in memory only; nothing is written to disk
    #[arg(long, global = true)]
    pub memory: bool,

    /// Directory for log files
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Disable ANSI styling
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a task
    Add {
        /// Task title; surrounding whitespace is dropped
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Flip a task between open and completed
    Toggle { id: TaskId },
    /// Delete a task
    Delete { id: TaskId },
    /// Print the list
    List,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn add_joins_words_and_accepts_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["tasklist", "add", "buy", "milk", "--memory"]);
        assert!(cli.memory);
        match cli.command {
            Some(Command::Add { title }) => assert_eq!(title.join(" "), "buy milk"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn db_and_memory_conflict() {
        let err = Cli::try_parse_from(["tasklist", "--db", "x.db", "--memory"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
