//! Interactive loop: read a line, apply it, re-render.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tasklist_core::{Clock, KeyValueStore, TaskController};

use crate::view::{render_list, render_prompt};

const HELP: &str = "\
Type a title and press Enter to add it. An empty line submits the draft.
  /draft <text>   set the draft without adding
  /add            add the current draft
  /toggle <n>     flip task n between open and done
  /delete <n>     delete task n
  /help           show this help
  /quit           exit
";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Enter pressed in the input field. `None` keeps the existing draft.
    Enter(Option<String>),
    AddButton,
    SetDraft(String),
    Toggle(usize),
    Delete(usize),
    Help,
    Quit,
    Invalid(String),
}

pub fn parse_line(line: &str) -> Action {
    let line = line.trim_end_matches(['\n', '\r']);
    let Some(command) = line.strip_prefix('/') else {
        if line.trim().is_empty() {
            return Action::Enter(None);
        }
        return Action::Enter(Some(line.to_string()));
    };

    let (name, rest) = command
        .split_once(char::is_whitespace)
        .unwrap_or((command, ""));
    match name {
        "add" | "a" => Action::AddButton,
        "draft" => Action::SetDraft(rest.to_string()),
        "toggle" | "t" => parse_position(rest).map_or_else(
            || Action::Invalid(format!("usage: /toggle <n>, got `{line}`")),
            Action::Toggle,
        ),
        "delete" | "d" => parse_position(rest).map_or_else(
            || Action::Invalid(format!("usage: /delete <n>, got `{line}`")),
            Action::Delete,
        ),
        "help" | "h" | "?" => Action::Help,
        "quit" | "q" | "exit" => Action::Quit,
        other => Action::Invalid(format!("unknown command `/{other}`; try /help")),
    }
}

fn parse_position(text: &str) -> Option<usize> {
    text.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

/// Runs until `/quit` or end of input.
pub fn run<S, C, R, W>(
    controller: &mut TaskController<S, C>,
    input: R,
    output: &mut W,
    color: bool,
) -> Result<()>
where
    S: KeyValueStore,
    C: Clock,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    write!(output, "{}", render_list(controller.tasks(), color))?;

    loop {
        write!(output, "{}", render_prompt(controller.draft()))?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line.context("Failed to read input")?;

        let changed = match parse_line(&line) {
            Action::Enter(text) => {
                if let Some(text) = text {
                    controller.set_draft(text);
                }
                controller.submit_draft().is_some()
            }
            Action::AddButton => controller.submit_draft().is_some(),
            Action::SetDraft(text) => {
                controller.set_draft(text);
                false
            }
            Action::Toggle(n) => apply_at(controller, output, n, TaskController::toggle_task)?,
            Action::Delete(n) => apply_at(controller, output, n, TaskController::delete_task)?,
            Action::Help => {
                write!(output, "{HELP}")?;
                false
            }
            Action::Quit => break,
            Action::Invalid(message) => {
                writeln!(output, "{message}")?;
                false
            }
        };

        if changed {
            if !controller.persistence_healthy() {
                writeln!(output, "warning: changes could not be saved")?;
            }
            write!(output, "{}", render_list(controller.tasks(), color))?;
        }
    }

    Ok(())
}

fn apply_at<S, C, W>(
    controller: &mut TaskController<S, C>,
    output: &mut W,
    position: usize,
    op: fn(&mut TaskController<S, C>, tasklist_core::TaskId) -> bool,
) -> Result<bool>
where
    S: KeyValueStore,
    C: Clock,
    W: Write,
{
    match controller.id_at(position - 1) {
        Some(id) => Ok(op(controller, id)),
        None => {
            writeln!(output, "no task at position {position}")?;
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_line, run, Action};
    use std::cell::Cell;
    use tasklist_core::{Clock, MemoryKeyValueStore, TaskController};

    struct TickClock(Cell<i64>);

    impl Clock for TickClock {
        fn now_ms(&self) -> i64 {
            let now = self.0.get();
            self.0.set(now + 1);
            now
        }
    }

    fn session(script: &str) -> (Vec<(String, bool)>, String) {
        let store = MemoryKeyValueStore::new();
        let (mut controller, _) =
            TaskController::with_clock(&store, TickClock(Cell::new(1_000)));
        let mut output = Vec::new();
        run(&mut controller, script.as_bytes(), &mut output, false).unwrap();
        let tasks = controller
            .tasks()
            .iter()
            .map(|task| (task.title.clone(), task.completed))
            .collect();
        (tasks, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parse_line_maps_commands() {
        assert_eq!(parse_line("Buy milk\n"), Action::Enter(Some("Buy milk".into())));
        assert_eq!(parse_line("   "), Action::Enter(None));
        assert_eq!(parse_line("/add"), Action::AddButton);
        assert_eq!(parse_line("/draft  two words"), Action::SetDraft(" two words".into()));
        assert_eq!(parse_line("/toggle 2"), Action::Toggle(2));
        assert_eq!(parse_line("/d 1"), Action::Delete(1));
        assert_eq!(parse_line("/q"), Action::Quit);
        assert!(matches!(parse_line("/toggle 0"), Action::Invalid(_)));
        assert!(matches!(parse_line("/toggle x"), Action::Invalid(_)));
        assert!(matches!(parse_line("/frobnicate"), Action::Invalid(_)));
    }

    #[test]
    fn enter_and_add_button_share_one_path() {
        let (tasks, _) = session("  Buy milk \n/draft Walk dog\n/add\n/draft  \n/add\n\n/quit\n");
        assert_eq!(
            tasks,
            [("Buy milk".to_string(), false), ("Walk dog".to_string(), false)]
        );
    }

    #[test]
    fn toggle_and_delete_by_position() {
        let (tasks, output) = session("one\ntwo\nthree\n/toggle 2\n/delete 1\n/delete 9\n");
        assert_eq!(
            tasks,
            [("two".to_string(), true), ("three".to_string(), false)]
        );
        assert!(output.contains("no task at position 9"));
        assert!(output.contains("  1. [x] ~~two~~"));
    }

    #[test]
    fn eof_ends_session_after_initial_render() {
        let (tasks, output) = session("");
        assert!(tasks.is_empty());
        assert!(output.starts_with("Task List\n  (no tasks)\n"));
    }
}
