//! Flightdeck CLI - airline administration in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{console, demo, flights, policy, status};

/// Flightdeck - airline administration in your terminal
#[derive(Parser)]
#[command(name = "fd", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive console (default)
    Console,

    /// Show flight, passenger, and booking counts
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List scheduled flights
    Flights {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage demo mode
    Demo {
        #[command(subcommand)]
        command: Option<demo::DemoCommands>,
    },

    /// Show or set the booking policy
    Policy {
        /// New policy (append-new-entry or reject-duplicate)
        value: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Console) {
        Commands::Console => console::run(),
        Commands::Status { json } => status::run(json),
        Commands::Flights { json } => flights::run(json),
        Commands::Demo { command } => demo::run(command),
        Commands::Policy { value } => policy::run(value),
    }
}
