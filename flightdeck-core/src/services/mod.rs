//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic over the shared airline state. Each
//! service focuses on a specific use case or feature area.

mod accounts;
mod demo;
mod manifest;
mod reservation;
mod scheduler;

use std::sync::MutexGuard;

use crate::domain::result::{Error, Result};
use crate::registry::{AirlineState, SharedState};

pub use accounts::{AccountService, Identity, NewPassenger, PassengerSummary};
pub use demo::DemoService;
pub(crate) use demo::seed as seed_demo_data;
pub use manifest::{
    FlightManifest, Itinerary, ItineraryRow, ManifestRow, ManifestService, StatusSummary,
};
pub use reservation::{BookingReceipt, CancellationReceipt, ReservationService};
pub use scheduler::{FlightSummary, NewFlight, RemovedFlight, SchedulerService};

/// Acquire the shared state lock, mapping poisoning to a typed error
pub(crate) fn lock(state: &SharedState) -> Result<MutexGuard<'_, AirlineState>> {
    state
        .lock()
        .map_err(|_| Error::other("airline state lock poisoned"))
}
