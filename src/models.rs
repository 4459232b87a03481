// Data models for the task list

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a task, unique within one store for its whole lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Monotonic id source; never hands out the same id twice
#[derive(Debug, Clone)]
pub(crate) struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub(crate) fn new() -> Self {
        Self { next: 1 }
    }

    pub(crate) fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// A single to-do item
///
/// Only the store creates tasks, so `text` is always trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub(crate) id: TaskId,
    pub(crate) text: String,
    pub(crate) completed: bool,
}

impl Task {
    pub(crate) fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_sequence_is_monotonic() {
        let mut seq = IdSequence::new();
        let a = seq.next_id();
        let b = seq.next_id();
        let c = seq.next_id();

        assert_eq!(a.value(), 1);
        assert!(a < b && b < c);
    }

    #[test]
    fn test_task_id_serialization() {
        let json = serde_json::to_string(&TaskId::new(7)).unwrap();
        assert_eq!(json, "7");

        let id: TaskId = serde_json::from_str("42").unwrap();
        assert_eq!(id, TaskId::new(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_task_serialization() {
        let task = Task::new(TaskId::new(3), "Buy milk");
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"id":3,"text":"Buy milk","completed":false}"#);
    }

    #[test]
    fn test_new_task_is_active() {
        let task = Task::new(TaskId::new(1), "Walk dog");
        assert!(!task.is_completed());
        assert_eq!(task.text(), "Walk dog");
    }
}
