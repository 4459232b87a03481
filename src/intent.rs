// User intents: the only way state changes

use crate::filter::Filter;
use crate::models::TaskId;
use crate::store::TaskListStore;
use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};

/// One user action forwarded from the presentation layer to the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    SetDraft { text: String },
    AddTask,
    ToggleTask { id: TaskId },
    DeleteTask { id: TaskId },
    ClearCompleted,
    SetFilter { filter: Filter },
}

impl Intent {
    /// Apply this intent to the store
    pub fn apply(self, store: &mut TaskListStore) {
        match self {
            Intent::SetDraft { text } => store.set_draft(text),
            Intent::AddTask => {
                store.add_task();
            }
            Intent::ToggleTask { id } => {
                store.toggle_task(id);
            }
            Intent::DeleteTask { id } => {
                store.delete_task(id);
            }
            Intent::ClearCompleted => {
                store.clear_completed();
            }
            Intent::SetFilter { filter } => store.set_filter(filter),
        }
    }

    /// Parse one line of the interactive command language
    ///
    /// `add <text>` expands to a draft followed by a submit, so a single
    /// line can yield more than one intent. A blank line yields none.
    pub fn parse_command(line: &str) -> Result<Vec<Intent>> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        let (command, rest) = match trimmed.split_once(' ') {
            Some((command, rest)) => (command, rest),
            None => (trimmed, ""),
        };

        let intents = match command.to_ascii_lowercase().as_str() {
            "" => vec![],
            // Bare `add` submits the current draft instead of blanking it
            "add" if rest.trim().is_empty() => vec![Intent::AddTask],
            "add" => vec![Intent::SetDraft { text: rest.to_string() }, Intent::AddTask],
            "draft" => vec![Intent::SetDraft { text: rest.to_string() }],
            "submit" => vec![Intent::AddTask],
            "toggle" => vec![Intent::ToggleTask { id: parse_id(rest)? }],
            "delete" | "rm" => vec![Intent::DeleteTask { id: parse_id(rest)? }],
            "clear" => vec![Intent::ClearCompleted],
            "filter" => vec![Intent::SetFilter { filter: rest.parse()? }],
            "all" | "active" | "completed" => vec![Intent::SetFilter {
                filter: command.parse()?,
            }],
            other => return Err(eyre!("Unknown command: {}", other)),
        };

        Ok(intents)
    }
}

fn parse_id(raw: &str) -> Result<TaskId> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(eyre!("Missing task id"));
    }

    let value: u64 = raw
        .parse()
        .with_context(|| format!("Invalid task id: {}", raw))?;
    if value == 0 {
        return Err(eyre!("Invalid task id: 0 (ids start at 1)"));
    }

    Ok(TaskId::new(value))
}
