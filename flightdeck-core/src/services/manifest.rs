//! Manifest service - read-only reporting over flights and passengers
//!
//! Everything here returns owned snapshot DTOs. Display code never sees the
//! internal containers, so it cannot corrupt the booking invariants.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::UserId;
use crate::registry::SharedState;
use crate::services::accounts::PassengerSummary;
use crate::services::lock;
use crate::services::scheduler::FlightSummary;

/// Manifest service for reporting
pub struct ManifestService {
    state: SharedState,
}

impl ManifestService {
    pub(crate) fn new(state: SharedState) -> Self {
        Self { state }
    }

    /// Overall status summary
    pub fn status(&self) -> Result<StatusSummary> {
        let state = lock(&self.state)?;

        let total_bookings: usize = state.passengers.iter().map(|p| p.bookings().len()).sum();
        let seats_booked: u32 = state
            .passengers
            .iter()
            .flat_map(|p| p.bookings().iter())
            .map(|b| b.seats)
            .sum();

        Ok(StatusSummary {
            total_flights: state.flights.len(),
            total_passengers: state.passengers.len(),
            total_bookings,
            seats_booked,
        })
    }

    /// Registered passengers for one flight, with per-passenger seat totals
    pub fn flight_manifest(&self, number: &str) -> Result<FlightManifest> {
        if number.trim().is_empty() {
            return Err(Error::invalid_input("flight number cannot be empty"));
        }
        let state = lock(&self.state)?;
        let flight = state
            .flights
            .find(number)
            .ok_or_else(|| Error::not_found(format!("flight {} is not scheduled", number.trim())))?;

        let passengers = flight
            .passengers()
            .iter()
            .map(|id| match state.passengers.find(id) {
                Some(p) => ManifestRow {
                    user_id: id.to_string(),
                    name: p.name.clone(),
                    email: p.user.email.clone(),
                    age: p.age,
                    phone: p.phone.clone(),
                    address: p.address.clone(),
                    seats_booked: p.seats_booked_on(flight.number()),
                },
                // Manifest entry without a directory record; show the ID
                None => ManifestRow {
                    user_id: id.to_string(),
                    name: String::new(),
                    email: String::new(),
                    age: 0,
                    phone: String::new(),
                    address: String::new(),
                    seats_booked: 0,
                },
            })
            .collect();

        Ok(FlightManifest {
            flight: FlightSummary::from(flight),
            passengers,
        })
    }

    /// All booking entries of one passenger, in booking order
    ///
    /// Route fields are empty when the booked flight is no longer in the
    /// registry (flight removal does not cascade into bookings).
    pub fn passenger_itinerary(&self, user_id: &str) -> Result<Itinerary> {
        let id = UserId::new(user_id)?;
        let state = lock(&self.state)?;
        let passenger = state
            .passengers
            .find(&id)
            .ok_or_else(|| Error::not_found(format!("passenger {} is not registered", id)))?;

        let entries = passenger
            .bookings()
            .iter()
            .map(|booking| {
                let flight = state.flights.find(booking.flight.as_str());
                ItineraryRow {
                    booking_id: booking.id,
                    flight: booking.flight.to_string(),
                    from_city: flight.map(|f| f.from_city.clone()),
                    to_city: flight.map(|f| f.to_city.clone()),
                    gate: flight.map(|f| f.gate.clone()),
                    departure_time: flight.and_then(|f| f.departure_time),
                    seats: booking.seats,
                    booked_at: booking.booked_at,
                }
            })
            .collect();

        Ok(Itinerary {
            passenger: PassengerSummary::from(passenger),
            entries,
        })
    }

    /// Flight summaries for tabular display
    pub fn list_flights(&self) -> Result<Vec<FlightSummary>> {
        let state = lock(&self.state)?;
        Ok(state.flights.iter().map(FlightSummary::from).collect())
    }

    /// Passenger summaries for tabular display
    pub fn list_passengers(&self) -> Result<Vec<PassengerSummary>> {
        let state = lock(&self.state)?;
        Ok(state.passengers.iter().map(PassengerSummary::from).collect())
    }
}

/// Overall status counts
#[derive(Debug, Serialize)]
pub struct StatusSummary {
    pub total_flights: usize,
    pub total_passengers: usize,
    pub total_bookings: usize,
    pub seats_booked: u32,
}

/// A flight plus its registered passengers
#[derive(Debug, Serialize)]
pub struct FlightManifest {
    pub flight: FlightSummary,
    pub passengers: Vec<ManifestRow>,
}

/// One registered passenger on a flight manifest
#[derive(Debug, Serialize)]
pub struct ManifestRow {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub phone: String,
    pub address: String,
    /// Seats this passenger holds on this flight, summed across entries
    pub seats_booked: u32,
}

/// A passenger plus their booking entries
#[derive(Debug, Serialize)]
pub struct Itinerary {
    pub passenger: PassengerSummary,
    pub entries: Vec<ItineraryRow>,
}

/// One booking entry on an itinerary
#[derive(Debug, Serialize)]
pub struct ItineraryRow {
    pub booking_id: Uuid,
    pub flight: String,
    pub from_city: Option<String>,
    pub to_city: Option<String>,
    pub gate: Option<String>,
    pub departure_time: Option<NaiveDateTime>,
    pub seats: u32,
    pub booked_at: DateTime<Utc>,
}
