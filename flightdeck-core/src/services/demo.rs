//! Demo service - manage demo mode
//!
//! Demo mode seeds a fresh context with sample flights, passengers, and
//! bookings for trying the console without typing everything in first.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::result::Result;
use crate::services::accounts::NewPassenger;
use crate::services::scheduler::NewFlight;
use crate::AirlineContext;

/// Demo service for managing demo mode
pub struct DemoService {
    flightdeck_dir: PathBuf,
}

impl DemoService {
    pub fn new(flightdeck_dir: &Path) -> Self {
        Self {
            flightdeck_dir: flightdeck_dir.to_path_buf(),
        }
    }

    /// Check if demo mode is currently enabled
    pub fn is_enabled(&self) -> Result<bool> {
        let config = Config::load(&self.flightdeck_dir)?;
        Ok(config.demo_mode)
    }

    /// Enable demo mode in the settings file
    pub fn enable(&self) -> Result<()> {
        let mut config = Config::load(&self.flightdeck_dir).unwrap_or_default();
        config.enable_demo_mode();
        config.save(&self.flightdeck_dir)
    }

    /// Disable demo mode in the settings file
    pub fn disable(&self) -> Result<()> {
        let mut config = Config::load(&self.flightdeck_dir).unwrap_or_default();
        config.disable_demo_mode();
        config.save(&self.flightdeck_dir)
    }
}

/// Populate a fresh context with the demo dataset
///
/// Bookings go through the reservation service so every seat and manifest
/// invariant holds in the seeded state.
pub(crate) fn seed(ctx: &AirlineContext) -> Result<()> {
    for flight in demo_flights() {
        ctx.scheduler_service.schedule_flight(flight)?;
    }
    for passenger in demo_passengers() {
        ctx.account_service.register_passenger(passenger)?;
    }

    ctx.reservation_service.book_flight("FD101", "P-1001", 2)?;
    ctx.reservation_service.book_flight("FD101", "P-1002", 1)?;
    ctx.reservation_service.book_flight("FD205", "P-1002", 3)?;
    ctx.reservation_service.book_flight("FD318", "P-1003", 2)?;

    Ok(())
}

fn demo_flights() -> Vec<NewFlight> {
    vec![
        NewFlight {
            number: "FD101".to_string(),
            from_city: "San Francisco".to_string(),
            to_city: "New York".to_string(),
            gate: "A12".to_string(),
            distance_km: 4135.0,
            flight_time: "5h 45m".to_string(),
            departure_time: None,
            seats: 180,
        },
        NewFlight {
            number: "FD205".to_string(),
            from_city: "New York".to_string(),
            to_city: "London".to_string(),
            gate: "B4".to_string(),
            distance_km: 5570.0,
            flight_time: "6h 55m".to_string(),
            departure_time: None,
            seats: 220,
        },
        NewFlight {
            number: "FD318".to_string(),
            from_city: "London".to_string(),
            to_city: "Dubai".to_string(),
            gate: "C9".to_string(),
            distance_km: 5500.0,
            flight_time: "6h 40m".to_string(),
            departure_time: None,
            seats: 250,
        },
        NewFlight {
            number: "FD442".to_string(),
            from_city: "Dubai".to_string(),
            to_city: "Singapore".to_string(),
            gate: "D2".to_string(),
            distance_km: 5840.0,
            flight_time: "7h 10m".to_string(),
            departure_time: None,
            seats: 240,
        },
        NewFlight {
            number: "FD509".to_string(),
            from_city: "Singapore".to_string(),
            to_city: "Sydney".to_string(),
            gate: "E7".to_string(),
            distance_km: 6300.0,
            flight_time: "7h 45m".to_string(),
            departure_time: None,
            seats: 200,
        },
    ]
}

fn demo_passengers() -> Vec<NewPassenger> {
    vec![
        NewPassenger {
            user_id: "P-1001".to_string(),
            email: "ada@example.com".to_string(),
            password: "demo".to_string(),
            name: "Ada Lovelace".to_string(),
            phone: "+44 20 7946 0001".to_string(),
            address: "12 St James Sq, London".to_string(),
            age: 36,
            passport: Some("GB1815001".to_string()),
        },
        NewPassenger {
            user_id: "P-1002".to_string(),
            email: "grace@example.com".to_string(),
            password: "demo".to_string(),
            name: "Grace Hopper".to_string(),
            phone: "+1 212 555 0102".to_string(),
            address: "90 Church St, New York".to_string(),
            age: 45,
            passport: Some("US1906002".to_string()),
        },
        NewPassenger {
            user_id: "P-1003".to_string(),
            email: "linus@example.com".to_string(),
            password: "demo".to_string(),
            name: "Linus Benedict".to_string(),
            phone: "+358 9 555 0103".to_string(),
            address: "Mannerheimintie 1, Helsinki".to_string(),
            age: 28,
            passport: None,
        },
        NewPassenger {
            user_id: "P-1004".to_string(),
            email: "margaret@example.com".to_string(),
            password: "demo".to_string(),
            name: "Margaret Hamilton".to_string(),
            phone: "+1 617 555 0104".to_string(),
            address: "17 Broadway, Cambridge".to_string(),
            age: 33,
            passport: Some("US1936004".to_string()),
        },
    ]
}
