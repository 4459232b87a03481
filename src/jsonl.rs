// JSONL intent scripts

use crate::intent::Intent;
use eyre::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// Read every intent from a JSONL script file
///
/// Blank lines are skipped. Lines that cannot be read or parsed are logged
/// and skipped rather than aborting the whole script.
pub fn read_intents(path: &Path) -> Result<Vec<Intent>> {
    let file = File::open(path).with_context(|| format!("Failed to open intent script: {}", path.display()))?;
    let intents = parse_intents(BufReader::new(file), path);
    debug!(file = ?path, count = intents.len(), "Read intent script");
    Ok(intents)
}

/// Parse intents from any line-oriented reader; `source` is only used in logs
pub fn parse_intents<R: BufRead>(reader: R, source: &Path) -> Vec<Intent> {
    let mut intents = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!(
                    file = ?source,
                    line = line_num + 1,
                    error = ?e,
                    "Failed to read line, skipping"
                );
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Intent>(&line) {
            Ok(intent) => intents.push(intent),
            Err(e) => {
                warn!(
                    file = ?source,
                    line = line_num + 1,
                    error = ?e,
                    "Failed to parse intent, skipping"
                );
            }
        }
    }

    intents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Filter;
    use crate::models::TaskId;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_parse_intents_skips_blank_and_bad_lines() {
        let input = concat!(
            "{\"intent\":\"set_draft\",\"text\":\"a\"}\n",
            "\n",
            "not json\n",
            "{\"intent\":\"add_task\"}\n",
            "{\"intent\":\"explode\"}\n",
            "   \n",
            "{\"intent\":\"set_filter\",\"filter\":\"active\"}\n",
        );

        let intents = parse_intents(Cursor::new(input), Path::new("inline"));
        assert_eq!(
            intents,
            vec![
                Intent::SetDraft { text: "a".to_string() },
                Intent::AddTask,
                Intent::SetFilter { filter: Filter::Active },
            ]
        );
    }

    #[test]
    fn test_read_intents_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session.jsonl");
        fs::write(
            &path,
            "{\"intent\":\"set_draft\",\"text\":\"Buy milk\"}\n{\"intent\":\"add_task\"}\n{\"intent\":\"toggle_task\",\"id\":1}\n",
        )
        .unwrap();

        let intents = read_intents(&path).unwrap();
        assert_eq!(intents.len(), 3);
        assert_eq!(intents[2], Intent::ToggleTask { id: TaskId::new(1) });
    }

    #[test]
    fn test_read_intents_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = read_intents(&temp.path().join("nope.jsonl"));
        assert!(result.is_err());
    }

    #[test]
    fn test_read_intents_empty_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.jsonl");
        fs::write(&path, "").unwrap();

        assert!(read_intents(&path).unwrap().is_empty());
    }
}
