//! Lantern CLI application
//!
//! Command-line interface for the Lantern personal to-do list.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use lantern_core::StoreBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, no_color, command } = Args::parse();

    let store = StoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize task store")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Lantern started");

    let cli = Cli::new(store, renderer);
    match command {
        Some(Task { command }) => cli.handle_task_command(command).await,
        Some(Subtask { command }) => cli.handle_subtask_command(command).await,
        Some(Category { command }) => cli.handle_category_command(command).await,
        Some(Reminder { command }) => cli.handle_reminder_command(command).await,
        Some(Stats) => cli.show_stats(),
        None => cli.list_grouped(),
    }
}
