//! Policy command - show or set the booking policy

use anyhow::Result;
use flightdeck_core::config::{BookingPolicy, Config};

use super::get_flightdeck_dir;
use crate::output;

pub fn run(value: Option<String>) -> Result<()> {
    let flightdeck_dir = get_flightdeck_dir();
    std::fs::create_dir_all(&flightdeck_dir)?;
    let mut config = Config::load(&flightdeck_dir)?;

    match value {
        None => {
            println!("Booking policy: {}", config.booking_policy);
        }
        Some(raw) => {
            let policy: BookingPolicy = raw.parse().map_err(anyhow::Error::msg)?;
            config.set_booking_policy(policy);
            config.save(&flightdeck_dir)?;
            output::success(&format!("Booking policy set to {}", policy));
        }
    }

    Ok(())
}
