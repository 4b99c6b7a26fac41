//! CLI command implementations

pub mod console;
pub mod demo;
pub mod flights;
pub mod policy;
pub mod status;

use std::path::PathBuf;

use anyhow::{Context, Result};
use flightdeck_core::AirlineContext;

/// Get the flightdeck directory from environment or default
pub fn get_flightdeck_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("FLIGHTDECK_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".flightdeck")
    }
}

/// Get or create the airline context
pub fn get_context() -> Result<AirlineContext> {
    let flightdeck_dir = get_flightdeck_dir();

    std::fs::create_dir_all(&flightdeck_dir)
        .with_context(|| format!("Failed to create flightdeck directory: {:?}", flightdeck_dir))?;

    AirlineContext::new(&flightdeck_dir).context("Failed to initialize airline context")
}
