//! Taskpad - file-backed task list manager
//!
//! Thin CLI over the library: parses one command per invocation,
//! dispatches to the matching operation, and prints the outcome.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use taskpad::{ops, TaskStore};

#[derive(Parser)]
#[command(name = "taskpad")]
#[command(version = "0.1.0")]
#[command(about = "File-backed task list manager", long_about = None)]
struct Cli {
    /// Task list file
    #[arg(short, long, global = true, default_value = "tasks.json")]
    file: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a task to the list
    Add {
        /// Task description
        description: Option<String>,
    },

    /// List all tasks
    List,

    /// Remove the task at a 1-based position
    Remove {
        /// Position of the task to remove
        index: Option<String>,
    },

    #[command(external_subcommand)]
    Other(Vec<String>),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "taskpad=debug,info"
    } else {
        "taskpad=info,warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let store = TaskStore::new(&cli.file);

    match cli.command {
        Some(Commands::Add { description }) => {
            let description = description.unwrap_or_default();
            let task = ops::add(&store, &description)?;
            println!("{} {}", "Task Added".green().bold(), task.task);
        }

        Some(Commands::List) => {
            for (position, task) in ops::list(&store).iter().enumerate() {
                println!("{}", ops::format_entry(position + 1, task));
            }
        }

        Some(Commands::Remove { index }) => {
            // A missing or non-numeric argument parses to 0, which the
            // bounds check rejects like any other out-of-range index.
            let parsed = index
                .as_deref()
                .and_then(|raw| raw.trim().parse::<i64>().ok())
                .unwrap_or(0);

            match ops::remove(&store, parsed) {
                Ok(task) => println!("{} {}", "Task Removed".green().bold(), task.task),
                Err(e) if e.is_user_error() => {
                    println!("{} {}", "Warning:".yellow().bold(), e);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Some(Commands::Other(_)) | None => println!("command not found !"),
    }

    Ok(())
}
