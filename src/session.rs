// Interactive session: read commands, apply intents, re-render

use crate::intent::Intent;
use crate::render::{OutputFormat, RenderOptions, render_as};
use crate::store::TaskListStore;
use eyre::{Context, Result};
use std::io::{BufRead, ErrorKind, Write};
use tracing::{debug, info, warn};

pub const HELP: &str = "\
Commands:
  add <text>         add a task
  draft <text>       set the draft without adding it
  submit             add the current draft
  toggle <id>        mark a task done or not done
  delete <id>        remove a task (alias: rm)
  clear              remove all completed tasks
  filter <name>      show all, active or completed tasks
  all|active|completed
  help               show this help
  quit               leave (alias: exit)
";

/// Drive a store from a line-oriented command stream until EOF or `quit`
///
/// Bad commands are reported on `output` and the session continues.
pub fn run_session<R, W>(store: &mut TaskListStore, input: R, output: &mut W, format: OutputFormat, opts: &RenderOptions) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    info!("Session started");
    write!(output, "{}", render_as(store, format, opts)?)?;

    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                warn!(error = ?e, "Unreadable command, skipping");
                writeln!(output, "Error: {}", e)?;
                continue;
            }
            Err(e) => return Err(e).context("Failed to read command"),
        };

        match line.trim() {
            "quit" | "exit" => break,
            "help" => {
                write!(output, "{}", HELP)?;
                continue;
            }
            _ => {}
        }

        match Intent::parse_command(&line) {
            Ok(intents) if intents.is_empty() => continue,
            Ok(intents) => {
                for intent in intents {
                    debug!(?intent, "Applying intent");
                    intent.apply(store);
                }
                write!(output, "{}", render_as(store, format, opts)?)?;
            }
            Err(e) => {
                writeln!(output, "Error: {}", e)?;
            }
        }
    }

    output.flush()?;
    info!(tasks = store.len(), "Session ended");
    Ok(())
}

/// Apply a list of intents in order
pub fn replay(store: &mut TaskListStore, intents: Vec<Intent>) {
    let count = intents.len();
    for intent in intents {
        intent.apply(store);
    }
    info!(count, tasks = store.len(), "Replayed intents");
}
