//! Text rendering of the task list.
//!
//! Output is derived from the list value alone, so the loop simply
//! re-renders after every mutation.

use tasklist_core::{Task, TaskList};

const STRIKE_ON: &str = "\x1b[9m";
const DIM_ON: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Renders the header, one row per task and the remaining-count footer.
pub fn render_list(tasks: &TaskList, color: bool) -> String {
    let mut out = String::from("Task List\n");
    if tasks.is_empty() {
        out.push_str("  (no tasks)\n");
        return out;
    }

    for (position, task) in tasks.iter().enumerate() {
        out.push_str(&render_row(position + 1, task, color));
        out.push('\n');
    }
    out.push_str(&format!(
        "{} of {} remaining\n",
        tasks.remaining(),
        tasks.len()
    ));
    out
}

/// One row: position, checkbox, title (struck through when completed).
pub fn render_row(position: usize, task: &Task, color: bool) -> String {
    format!("{position:>3}. {}", render_cells(task, color))
}

/// Row keyed by id instead of position, for one-shot commands.
pub fn render_row_with_id(task: &Task, color: bool) -> String {
    format!("{} {}", task.id, render_cells(task, color))
}

fn render_cells(task: &Task, color: bool) -> String {
    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    match (task.completed, color) {
        (true, true) => format!("{checkbox} {STRIKE_ON}{DIM_ON}{}{RESET}", task.title),
        (true, false) => format!("{checkbox} ~~{}~~", task.title),
        (false, _) => format!("{checkbox} {}", task.title),
    }
}

/// Prompt line showing the current draft.
pub fn render_prompt(draft: &str) -> String {
    if draft.is_empty() {
        "add> ".to_string()
    } else {
        format!("add [{draft}]> ")
    }
}
