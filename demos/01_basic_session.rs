//! Demo 01: Basic Session
//!
//! This demo walks through adding, toggling, filtering and clearing tasks
//! and prints the rendered view after each step.
//!
//! Run with: cargo run --example 01_basic_session

use eyre::Result;
use tasklist::render::render;
use tasklist::{Filter, RenderOptions, TaskListStore};

fn main() -> Result<()> {
    let opts = RenderOptions { color: true };
    let mut store = TaskListStore::new();

    println!("TaskList Basic Session Demo");
    println!("===========================\n");

    println!("1. Empty store:");
    println!("{}", render(&store, &opts));

    println!("2. Adding three tasks...");
    let mut ids = Vec::new();
    for text in ["Buy milk", "Walk dog", "Write report"] {
        store.set_draft(text);
        if let Some(id) = store.add_task() {
            println!("   Added task {}: {}", id, text);
            ids.push(id);
        }
    }
    println!("{}", render(&store, &opts));

    println!("3. A blank draft is ignored:");
    store.set_draft("   ");
    let added = store.add_task();
    println!("   add_task returned {:?}, draft is {:?}\n", added, store.draft());
    store.set_draft("");

    println!("4. Completing \"Buy milk\"...");
    store.toggle_task(ids[0]);
    println!("{}", render(&store, &opts));

    println!("5. Showing only active tasks:");
    store.set_filter(Filter::Active);
    println!("{}", render(&store, &opts));

    println!("6. Clearing completed tasks...");
    let removed = store.clear_completed();
    println!("   Removed {} task(s)", removed);
    store.set_filter(Filter::All);
    println!("{}", render(&store, &opts));

    println!("7. Snapshot as JSON:");
    println!("{}", serde_json::to_string_pretty(&store.snapshot())?);

    Ok(())
}
