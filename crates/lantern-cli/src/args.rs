use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CategoryCommands, ReminderCommands, SubtaskCommands, TaskCommands};

/// Main command-line interface for the Lantern to-do list
///
/// Lantern keeps a personal task list with subtasks, categories, and
/// reminders in a local SQLite database. Running `lt` without a subcommand
/// prints the open list grouped by due date.
#[derive(Parser)]
#[command(version, about, name = "lt")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/lantern/lantern.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Lantern CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Manage subtasks within a task
    #[command(alias = "st")]
    Subtask {
        #[command(subcommand)]
        command: SubtaskCommands,
    },
    /// Manage categories
    #[command(alias = "c")]
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },
    /// Manage reminders
    #[command(alias = "r")]
    Reminder {
        #[command(subcommand)]
        command: ReminderCommands,
    },
    /// Show aggregate statistics over the task list
    Stats,
}
