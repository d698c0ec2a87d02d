//! CLI entry point for todolite.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use todolite_core::{Filter, TaskId};
use todolite_store_file::FileStore;

mod commands;

/// To-do list on the command line, persisted as a JSON file.
#[derive(Parser, Debug)]
#[command(
    name = "todolite",
    version,
    about = "todolite: a single-user to-do list persisted to gsdTasks.json"
)]
struct Cli {
    /// Directory holding the storage file (defaults to current).
    #[arg(long)]
    dir: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new task.
    Add {
        /// Task description; must be non-empty after trimming.
        text: String,
    },

    /// List tasks with their completion markers and the statistics line.
    Ls {
        /// Which view to render.
        #[arg(long, default_value = "all")]
        filter: Filter,
    },

    /// Flip a task's completion flag.
    Toggle {
        /// Id of the task to toggle.
        id: TaskId,
    },

    /// Remove a task. Removing an unknown id silently succeeds.
    Rm {
        /// Id of the task to remove.
        id: TaskId,
    },
}

fn main() -> Result<()> {
    install_tracing();

    let Cli { dir, cmd } = Cli::parse();
    let dir = dir.unwrap_or_else(|| ".".to_owned());
    let files = FileStore::open(dir);
    commands::run(cmd, &files)
}

fn install_tracing() {
    // RUST_LOG overrides; default is INFO.
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}
