// In-memory task list store

use crate::filter::Filter;
use crate::models::{IdSequence, Task, TaskId};
use serde::Serialize;
use tracing::debug;

/// Why the visible list is empty, if it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyState {
    /// No tasks exist and every task is shown
    NoTasks,
    /// Showing active tasks but none are left
    NoActive,
    /// Showing completed tasks but none are done
    NoCompleted,
    /// Fallback when the filter hides everything else
    NoMatch,
}

impl EmptyState {
    pub fn message(self) -> &'static str {
        match self {
            EmptyState::NoTasks => "No tasks yet. Add one above!",
            EmptyState::NoActive => "No active tasks!",
            EmptyState::NoCompleted => "No completed tasks!",
            EmptyState::NoMatch => "No tasks match the current filter.",
        }
    }
}

impl std::fmt::Display for EmptyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Everything a presentation layer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub draft: String,
    pub filter: Filter,
    pub visible_tasks: Vec<Task>,
    pub active_count: usize,
    pub has_completed: bool,
    pub empty_state: Option<EmptyState>,
}

/// Authoritative task list state: tasks, draft and filter
///
/// Mutations never fail. An empty draft or an unknown id turns the
/// operation into a no-op.
#[derive(Debug, Clone, Default)]
pub struct TaskListStore {
    tasks: Vec<Task>,
    draft: String,
    filter: Filter,
    ids: IdSequence,
}

impl TaskListStore {
    /// Create an empty store with the `All` filter
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Replace the draft verbatim
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        debug!(draft_len = self.draft.len(), "set_draft");
    }

    /// Turn the draft into a new task
    ///
    /// Returns the id of the created task, or `None` when the trimmed draft
    /// is empty. In that case the draft is left as it was.
    pub fn add_task(&mut self) -> Option<TaskId> {
        let text = self.draft.trim();
        if text.is_empty() {
            debug!("add_task: draft is blank, ignoring");
            return None;
        }

        let id = self.ids.next_id();
        self.tasks.push(Task::new(id, text));
        self.draft.clear();

        debug!(%id, count = self.tasks.len(), "add_task: created");
        Some(id)
    }

    /// Flip completion on the task with this id
    pub fn toggle_task(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                debug!(%id, completed = task.completed, "toggle_task");
                true
            }
            None => {
                debug!(%id, "toggle_task: unknown id");
                false
            }
        }
    }

    /// Remove the task with this id, keeping the order of the rest
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        debug!(%id, removed, "delete_task");
        removed
    }

    /// Remove every completed task, returning how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        debug!(removed, "clear_completed");
        removed
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        debug!(%filter, "set_filter");
    }

    // ========================================================================
    // State accessors
    // ========================================================================

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// All tasks in insertion order, regardless of filter
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    // ========================================================================
    // Derived views
    // ========================================================================

    /// Tasks passing the current filter, in insertion order
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| self.filter.matches(t)).collect()
    }

    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.len() - self.active_count()
    }

    pub fn has_completed(&self) -> bool {
        self.tasks.iter().any(|t| t.completed)
    }

    /// Classify an empty visible list; `None` when something is visible
    pub fn empty_state(&self) -> Option<EmptyState> {
        match self.filter {
            Filter::All if self.tasks.is_empty() => return Some(EmptyState::NoTasks),
            Filter::Active if self.active_count() == 0 => return Some(EmptyState::NoActive),
            Filter::Completed if self.completed_count() == 0 => return Some(EmptyState::NoCompleted),
            _ => {}
        }

        if self.visible_tasks().is_empty() {
            Some(EmptyState::NoMatch)
        } else {
            None
        }
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            draft: self.draft.clone(),
            filter: self.filter,
            visible_tasks: self.visible_tasks().into_iter().cloned().collect(),
            active_count: self.active_count(),
            has_completed: self.has_completed(),
            empty_state: self.empty_state(),
        }
    }
}
