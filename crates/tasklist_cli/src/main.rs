//! `tasklist` entry point.
//!
//! # Responsibility
//! - Resolve configuration, start logging and open the key-value store.
//! - Dispatch one-shot subcommands or run the interactive view.

mod args;
mod config;
mod repl;
mod view;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io::{self, Write};
use tasklist_core::db::open_db;
use tasklist_core::{
    Clock, KeyValueStore, LoadOutcome, MemoryKeyValueStore, SqliteKeyValueStore, TaskController,
};

use args::{Cli, Command};
use config::{Config, StorageTarget};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(&cli)?;

    let log_dir = config.log_dir.to_string_lossy();
    if let Err(err) = tasklist_core::init_logging(&config.log_level, &log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        tasklist_core::core_version()
    );

    match &config.storage {
        StorageTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create data directory {}", parent.display())
                })?;
            }
            let conn = open_db(path)
                .with_context(|| format!("Failed to open task database {}", path.display()))?;
            let (controller, outcome) = TaskController::new(SqliteKeyValueStore::new(&conn));
            dispatch(controller, outcome, cli.command, &config)
        }
        StorageTarget::Memory => {
            let (controller, outcome) = TaskController::new(MemoryKeyValueStore::new());
            dispatch(controller, outcome, cli.command, &config)
        }
    }
}

fn dispatch<S: KeyValueStore, C: Clock>(
    mut controller: TaskController<S, C>,
    outcome: LoadOutcome,
    command: Option<Command>,
    config: &Config,
) -> Result<()> {
    if let LoadOutcome::Recovered(err) = &outcome {
        eprintln!("warning: saved list was unreadable and has been reset ({err})");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        None => {
            let stdin = io::stdin();
            repl::run(&mut controller, stdin.lock(), &mut out, config.color)?;
        }
        Some(Command::Add { title }) => {
            let title = title.join(" ");
            match controller.add_task(&title) {
                Some(id) => writeln!(out, "added {id}")?,
                None => writeln!(out, "nothing to add")?,
            }
        }
        Some(Command::Toggle { id }) => {
            if !controller.toggle_task(id) {
                writeln!(out, "no task with id {id}")?;
            }
        }
        Some(Command::Delete { id }) => {
            if !controller.delete_task(id) {
                writeln!(out, "no task with id {id}")?;
            }
        }
        Some(Command::List) => {
            for task in controller.tasks() {
                writeln!(out, "{}", view::render_row_with_id(task, config.color))?;
            }
        }
    }

    if !controller.persistence_healthy() {
        eprintln!("warning: changes could not be saved");
    }
    out.flush()?;
    Ok(())
}
