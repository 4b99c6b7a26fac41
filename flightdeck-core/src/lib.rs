//! Flightdeck Core - Business logic for airline administration
//!
//! This crate implements the core domain logic:
//!
//! - **domain**: Core business entities (Flight, Passenger, User, etc.)
//! - **registry**: The authoritative in-memory collections (flights, passengers)
//! - **services**: Business logic orchestration (scheduling, reservations, reporting)
//! - **config**: Settings file handling (booking policy, demo mode)
//!
//! All domain state is in-memory and lives for the process duration; only
//! the settings file is persisted.

pub mod config;
pub mod domain;
pub mod registry;
pub mod services;

use std::path::Path;
use std::sync::{Arc, Mutex};

use config::Config;
use domain::{Admin, User, UserId};
use registry::{AirlineState, SharedState};
use services::*;

// Re-export commonly used types at crate root
pub use config::BookingPolicy;
pub use domain::result::{Error, Result};
pub use domain::{Booking, Flight, FlightNumber, Passenger};

/// Default admin account, present from context creation so the console is
/// usable before anything is registered
const DEFAULT_ADMIN_ID: &str = "AD-1";
const DEFAULT_ADMIN_EMAIL: &str = "admin@flightdeck.local";
const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// Main context for Flightdeck operations
///
/// This is the primary entry point for all business logic. It holds the
/// configuration, the shared airline state, and all services.
pub struct AirlineContext {
    pub config: Config,
    pub scheduler_service: SchedulerService,
    pub reservation_service: ReservationService,
    pub account_service: AccountService,
    pub manifest_service: ManifestService,
}

impl AirlineContext {
    /// Create a context from the settings in the given directory
    pub fn new(flightdeck_dir: &Path) -> Result<Self> {
        let config = Config::load(flightdeck_dir)?;
        Self::with_config(config)
    }

    /// Create a context from an explicit configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let state: SharedState = Arc::new(Mutex::new(AirlineState::new()));

        {
            let mut st = state
                .lock()
                .map_err(|_| Error::other("airline state lock poisoned"))?;
            st.admins.push(default_admin()?);
        }

        let scheduler_service = SchedulerService::new(Arc::clone(&state));
        let reservation_service =
            ReservationService::new(Arc::clone(&state), config.booking_policy);
        let account_service = AccountService::new(Arc::clone(&state));
        let manifest_service = ManifestService::new(Arc::clone(&state));

        let ctx = Self {
            config,
            scheduler_service,
            reservation_service,
            account_service,
            manifest_service,
        };

        if ctx.config.demo_mode {
            seed_demo_data(&ctx)?;
        }

        Ok(ctx)
    }
}

fn default_admin() -> Result<Admin> {
    let password = std::env::var("FLIGHTDECK_ADMIN_PASSWORD")
        .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());
    let user = User::new(
        UserId::new(DEFAULT_ADMIN_ID)?,
        DEFAULT_ADMIN_EMAIL,
        password,
    )?;
    Ok(Admin::new(user))
}
