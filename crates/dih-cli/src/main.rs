mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dih")]
#[command(version, about = "DIH CLI - inspect the import console route table", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "dih.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the declared routes in match order
    Routes,

    /// Resolve one or more locations against the route table
    Resolve {
        /// Locations to resolve, e.g. /import/report42?mode=full
        #[arg(required = true)]
        locations: Vec<String>,

        /// Follow redirects until a view is reached
        #[arg(short, long)]
        follow: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Routes => {
            commands::routes::execute(&cli.config)?;
        }
        Commands::Resolve { locations, follow } => {
            commands::resolve::execute(&cli.config, &locations, follow)?;
        }
    }

    Ok(())
}
