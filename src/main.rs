mod cmd;
mod data;
mod select;
mod ui;
mod wizard;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "teamflow", about = "leave management")]
struct Cli {
    /// Path to the data directory containing config and data files (default: ./config)
    #[arg(long, default_value = "./config")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the built-in sample data files into the data directory
    Init,
    /// List the configured leave types and their balances
    Types,
    /// List team members and their availability
    Team,
    /// List requests awaiting approval
    Pending,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Resolve data_dir to an absolute path so file I/O works regardless of
    // future directory changes within the process.
    let data_dir = if cli.data_dir.is_absolute() {
        cli.data_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.data_dir)
    };
    data::persistence::set_data_dir(data_dir);

    // No auto-init: a missing data directory loads as the built-in sample
    // data, and `init` exists to materialize it for editing.
    match cli.command {
        None => cmd::root::run(),
        Some(Commands::Init) => cmd::init::run(),
        Some(Commands::Types) => cmd::types::run(),
        Some(Commands::Team) => cmd::team::run(),
        Some(Commands::Pending) => cmd::pending::run(),
    }
}
