// TaskList - In-memory task list state with a terminal front end

pub mod filter;
pub mod intent;
pub mod jsonl;
pub mod models;
pub mod render;
pub mod session;
pub mod store;

// Re-export main types for convenience
pub use filter::Filter;
pub use intent::Intent;
pub use models::{Task, TaskId};
pub use render::{OutputFormat, RenderOptions};
pub use store::{EmptyState, TaskListStore, ViewSnapshot};
