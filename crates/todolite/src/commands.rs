//! Command handlers: load the store, apply one mutation, save, render.

use anyhow::{Context, Result};
use std::fmt::Write as _;

use todolite_core::{Filter, TaskId, TaskStore};
use todolite_store_file::FileStore;

use crate::Command;

/// Dispatch a parsed command against the file-backed store.
///
/// # Errors
/// Returns an error when the store cannot be loaded or saved, when `add` is
/// given empty text, or when `toggle` targets an unknown id.
pub fn run(command: Command, files: &FileStore) -> Result<()> {
    match command {
        Command::Add { text } => handle_add(files, &text),
        Command::Ls { filter } => handle_ls(files, filter),
        Command::Toggle { id } => handle_toggle(files, id),
        Command::Rm { id } => handle_rm(files, id),
    }
}

fn handle_add(files: &FileStore, text: &str) -> Result<()> {
    let mut store = files.load().context("failed to load tasks")?;
    let task = store.create(text)?;
    files.save(&store).context("failed to save tasks")?;
    println!("Added task {}: {}", task.id, task.text);
    Ok(())
}

fn handle_ls(files: &FileStore, filter: Filter) -> Result<()> {
    let store = files.load().context("failed to load tasks")?;
    print!("{}", render_list(&store, filter));
    Ok(())
}

fn handle_toggle(files: &FileStore, id: TaskId) -> Result<()> {
    let mut store = files.load().context("failed to load tasks")?;
    let task = store.toggle(id)?;
    files.save(&store).context("failed to save tasks")?;
    let marker = if task.completed { "done" } else { "active" };
    println!("Task {} is now {marker}", task.id);
    Ok(())
}

fn handle_rm(files: &FileStore, id: TaskId) -> Result<()> {
    let mut store = files.load().context("failed to load tasks")?;
    store.remove(id);
    files.save(&store).context("failed to save tasks")?;
    println!("Removed task {id}");
    Ok(())
}

/// Render the filtered view plus the statistics line over the full store.
fn render_list(store: &TaskStore, filter: Filter) -> String {
    let mut out = String::new();

    let mut any = false;
    for task in store.list(filter) {
        any = true;
        let mark = if task.completed { "x" } else { " " };
        let _ = writeln!(out, "[{mark}] {:>4}  {}", task.id, task.text);
    }
    if !any {
        let _ = writeln!(out, "No tasks yet. Add one with `todolite add`.");
    }

    let stats = store.stats();
    let _ = writeln!(
        out,
        "{} total, {} active, {} done",
        stats.total, stats.active, stats.completed
    );
    out
}
