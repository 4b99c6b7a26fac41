//! Scheduler service - flight registry operations

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::{Flight, FlightNumber};
use crate::registry::SharedState;
use crate::services::lock;

/// Scheduler service for managing the flight registry
pub struct SchedulerService {
    state: SharedState,
}

impl SchedulerService {
    pub(crate) fn new(state: SharedState) -> Self {
        Self { state }
    }

    /// Schedule a new flight
    pub fn schedule_flight(&self, new: NewFlight) -> Result<FlightSummary> {
        let number = FlightNumber::new(&new.number)?;

        let mut flight = Flight::new(
            number,
            new.from_city,
            new.to_city,
            new.gate,
            new.distance_km,
            new.flight_time,
            new.seats,
        );
        flight.departure_time = new.departure_time;
        flight.validate().map_err(Error::invalid_input)?;

        let mut state = lock(&self.state)?;
        let summary = FlightSummary::from(&flight);
        state.flights.schedule(flight)?;
        Ok(summary)
    }

    /// Remove a flight from the registry
    ///
    /// Passenger bookings referencing the flight are not touched; the
    /// returned record reports how many passengers were still on the
    /// manifest so the caller can warn.
    pub fn remove_flight(&self, number: &str) -> Result<RemovedFlight> {
        let mut state = lock(&self.state)?;
        let flight = state.flights.remove(number)?;
        Ok(RemovedFlight {
            number: flight.number().to_string(),
            passengers_registered: flight.passengers().len(),
        })
    }

    /// Find a flight by its number
    pub fn find_flight(&self, number: &str) -> Result<FlightSummary> {
        if number.trim().is_empty() {
            return Err(Error::invalid_input("flight number cannot be empty"));
        }
        let state = lock(&self.state)?;
        state
            .flights
            .find(number)
            .map(FlightSummary::from)
            .ok_or_else(|| Error::not_found(format!("flight {} is not scheduled", number.trim())))
    }

    /// All scheduled flights, in scheduling order
    pub fn list_flights(&self) -> Result<Vec<FlightSummary>> {
        let state = lock(&self.state)?;
        Ok(state.flights.iter().map(FlightSummary::from).collect())
    }
}

/// Input for scheduling a flight
#[derive(Debug, Clone)]
pub struct NewFlight {
    pub number: String,
    pub from_city: String,
    pub to_city: String,
    pub gate: String,
    pub distance_km: f64,
    pub flight_time: String,
    pub departure_time: Option<NaiveDateTime>,
    pub seats: u32,
}

/// Read-only snapshot of a flight for display
#[derive(Debug, Clone, Serialize)]
pub struct FlightSummary {
    pub number: String,
    pub from_city: String,
    pub to_city: String,
    pub gate: String,
    pub distance_km: f64,
    pub distance_miles: f64,
    pub flight_time: String,
    pub departure_time: Option<NaiveDateTime>,
    pub seats_available: u32,
    pub passengers_registered: usize,
}

impl From<&Flight> for FlightSummary {
    fn from(flight: &Flight) -> Self {
        Self {
            number: flight.number().to_string(),
            from_city: flight.from_city.clone(),
            to_city: flight.to_city.clone(),
            gate: flight.gate.clone(),
            distance_km: flight.distance_km,
            distance_miles: flight.distance_miles,
            flight_time: flight.flight_time.clone(),
            departure_time: flight.departure_time,
            seats_available: flight.seats_available(),
            passengers_registered: flight.passengers().len(),
        }
    }
}

/// Result of removing a flight
#[derive(Debug, Serialize)]
pub struct RemovedFlight {
    pub number: String,
    /// Passengers still on the manifest at removal time
    pub passengers_registered: usize,
}
