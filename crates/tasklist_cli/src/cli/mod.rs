use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tasklist_core::model::TaskFilter;

#[derive(Parser, Debug)]
#[command(name = "todo", author, version, about = "Keep a to-do list in a JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Task list file (overrides TODO_FILENAME)
    #[arg(long, value_name = "PATH", global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Add a new task, reading it from stdin when no words are given
    ///
    /// Example: todo add Buy milk
    /// Example: echo "Walk dog" | todo add
    #[command(visible_alias = "a")]
    Add {
        #[arg(value_name = "WORDS")]
        words: Vec<String>,
    },
    /// List tasks
    ///
    /// Example: todo list
    /// Example: todo list -v --pending
    #[command(visible_aliases = ["l", "ls"])]
    List {
        /// Show when each task was created or completed
        #[arg(short, long)]
        verbose: bool,
        /// Only tasks that are not done
        #[arg(long, conflicts_with = "done")]
        pending: bool,
        /// Only completed tasks
        #[arg(long)]
        done: bool,
    },
    /// Mark a task as done
    ///
    /// Example: todo done 1
    #[command(visible_aliases = ["d", "complete"])]
    Done {
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// Mark a completed task as not done again
    ///
    /// Example: todo undo 1
    #[command(visible_alias = "u")]
    Undo {
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// Delete a task; later tasks move up one position
    ///
    /// Example: todo delete 1
    #[command(visible_alias = "rm")]
    Delete {
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// Remove all tasks
    ///
    /// Example: todo clear
    Clear,
}

pub fn list_filter(pending: bool, done: bool) -> TaskFilter {
    match (pending, done) {
        (true, _) => TaskFilter::Pending,
        (_, true) => TaskFilter::Done,
        _ => TaskFilter::All,
    }
}
