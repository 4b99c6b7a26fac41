//! Demo command - manage demo mode

use anyhow::Result;
use clap::Subcommand;
use flightdeck_core::services::DemoService;

use super::get_flightdeck_dir;
use crate::output;

#[derive(Subcommand)]
pub enum DemoCommands {
    /// Enable demo mode (seeds sample data on the next session)
    On,
    /// Disable demo mode
    Off,
    /// Show whether demo mode is enabled
    Status,
}

pub fn run(command: Option<DemoCommands>) -> Result<()> {
    let flightdeck_dir = get_flightdeck_dir();
    std::fs::create_dir_all(&flightdeck_dir)?;
    let service = DemoService::new(&flightdeck_dir);

    match command.unwrap_or(DemoCommands::Status) {
        DemoCommands::On => {
            service.enable()?;
            output::success("Demo mode enabled. Sample data loads on the next session.");
        }
        DemoCommands::Off => {
            service.disable()?;
            output::success("Demo mode disabled.");
        }
        DemoCommands::Status => {
            if service.is_enabled()? {
                println!("Demo mode is on");
            } else {
                println!("Demo mode is off");
            }
        }
    }

    Ok(())
}
