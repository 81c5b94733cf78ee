//! # taskboard
//!
//! Line-oriented shell over the task and category stores. Reads commands from
//! stdin, prints results to stdout, logs to stderr.

#![deny(unsafe_code)]

mod command;
mod shell;
mod wiring;

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use taskboard_settings::{load_settings_from_path, settings_path};
use taskboard_view::ViewController;

use crate::shell::{Flow, Shell};

/// Taskboard shell.
#[derive(Parser, Debug)]
#[command(name = "taskboard", about = "Manage a task list from the terminal")]
struct Cli {
    /// Settings file (defaults to `~/.taskboard/settings.json`).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Directory holding `tasks.json` / `categories.json` to seed from.
    #[arg(long)]
    seed_dir: Option<PathBuf>,

    /// Skip the simulated store latency.
    #[arg(long)]
    no_latency: bool,

    /// Log level or filter directive (overrides settings).
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let path = cli.settings.unwrap_or_else(settings_path);
    let mut settings = load_settings_from_path(&path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))?;
    if let Some(level) = cli.log_level {
        settings.logging.level = level;
    }
    if cli.no_latency {
        settings.store.simulate_latency = false;
    }
    if let Some(dir) = cli.seed_dir {
        settings.seed.dir = Some(dir.display().to_string());
    }

    taskboard_core::logging::init_subscriber(&settings.logging.level);
    info!(settings = %path.display(), "starting taskboard");

    let (tasks, categories) = wiring::build_stores(&settings)?;
    let mut controller = ViewController::new(Arc::new(tasks), Arc::new(categories));
    if let Some(notice) = controller.load().await {
        warn!(error = ?controller.load_error(), "initial load failed");
        println!("{notice}");
    }

    let mut shell = Shell::new(controller);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = std::io::stdout();

    println!("taskboard: type `help` for commands");
    loop {
        print!("> ");
        stdout.flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match command::parse(&line) {
            Ok(None) => {}
            Ok(Some(command)) => {
                if shell.execute(command, &mut stdout).await? == Flow::Quit {
                    break;
                }
            }
            Err(err) => println!("{err}"),
        }
    }
    info!(tasks = shell.controller().tasks().len(), "exiting");
    Ok(())
}
