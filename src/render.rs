// Terminal presentation of the task list
//
// Reads derived views only; never mutates the store.

use crate::filter::Filter;
use crate::models::Task;
use crate::store::TaskListStore;
use colored::Colorize;
use eyre::{Context, Result};

const TITLE: &str = "Task List";

/// How the view is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub color: bool,
}

/// Footer text for the number of active tasks
pub fn items_left(count: usize) -> String {
    let noun = if count == 1 { "item" } else { "items" };
    format!("{} {} left", count, noun)
}

/// Render the store in the requested format
pub fn render_as(store: &TaskListStore, format: OutputFormat, opts: &RenderOptions) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render(store, opts)),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&store.snapshot()).context("Failed to serialize view as JSON")?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Yaml => serde_yaml::to_string(&store.snapshot()).context("Failed to serialize view as YAML"),
    }
}

/// Render the human-readable view
pub fn render(store: &TaskListStore, opts: &RenderOptions) -> String {
    let mut lines = Vec::new();

    lines.push(if opts.color {
        TITLE.bold().to_string()
    } else {
        TITLE.to_string()
    });
    lines.push(filter_bar(store.filter(), opts));

    if !store.draft().is_empty() {
        lines.push(format!("> {}", store.draft()));
    }

    lines.extend(store.visible_tasks().into_iter().map(|task| task_line(task, opts)));

    if let Some(empty) = store.empty_state() {
        let message = if opts.color {
            empty.message().dimmed().to_string()
        } else {
            empty.message().to_string()
        };
        lines.push(format!("  {}", message));
    }

    if !store.is_empty() {
        let mut footer = items_left(store.active_count());
        if store.has_completed() {
            footer.push_str(" | Clear completed");
        }
        lines.push(footer);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn filter_bar(active: Filter, opts: &RenderOptions) -> String {
    Filter::ALL
        .iter()
        .map(|filter| {
            let label = filter.label();
            match (*filter == active, opts.color) {
                (true, true) => format!("[{}]", label).blue().bold().to_string(),
                (true, false) => format!("[{}]", label),
                (false, _) => format!(" {} ", label),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn task_line(task: &Task, opts: &RenderOptions) -> String {
    let check = if task.is_completed() { "[x]" } else { "[ ]" };
    if !opts.color {
        return format!("  {} {:>3}  {}", check, task.id(), task.text());
    }

    if task.is_completed() {
        format!(
            "  {} {:>3}  {}",
            check.green(),
            task.id(),
            task.text().dimmed().strikethrough()
        )
    } else {
        format!("  {} {:>3}  {}", check, task.id(), task.text())
    }
}
