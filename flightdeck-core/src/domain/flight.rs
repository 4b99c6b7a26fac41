//! Flight domain model

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::distance;
use crate::domain::result::{Error, Result};
use crate::domain::user::UserId;

/// Case-insensitive unique identifier for a flight
///
/// The original spelling is preserved for display; equality and hashing
/// fold ASCII case, so "ab123" and "AB123" name the same flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FlightNumber(String);

impl FlightNumber {
    /// Create a flight number, rejecting blank input
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_input("flight number cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a raw string
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl PartialEq for FlightNumber {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for FlightNumber {}

impl Hash for FlightNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_ascii_lowercase().hash(state);
    }
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for FlightNumber {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<FlightNumber> for String {
    fn from(number: FlightNumber) -> Self {
        number.0
    }
}

/// A flight in the airline system
///
/// The available-seat count and the passenger manifest are private: seat
/// inventory is mutated only by the reservation workflow (`pub(crate)`
/// methods), and the manifest is read through an ordered slice. `Flight`
/// stores the current seat count but never re-validates it against
/// bookings; that contract belongs to the reservation component.
#[derive(Debug, Clone)]
pub struct Flight {
    number: FlightNumber,
    pub from_city: String,
    pub to_city: String,
    pub gate: String,
    pub distance_km: f64,
    pub distance_miles: f64,
    /// Estimated flight time, free-form (e.g. "5h 45m")
    pub flight_time: String,
    pub departure_time: Option<NaiveDateTime>,
    pub created_at: DateTime<Utc>,
    seats_available: u32,
    manifest: Vec<UserId>,
}

impl Flight {
    /// Create a flight with required fields; miles are derived from km
    pub fn new(
        number: FlightNumber,
        from_city: impl Into<String>,
        to_city: impl Into<String>,
        gate: impl Into<String>,
        distance_km: f64,
        flight_time: impl Into<String>,
        seats: u32,
    ) -> Self {
        Self {
            number,
            from_city: from_city.into(),
            to_city: to_city.into(),
            gate: gate.into(),
            distance_km,
            distance_miles: distance::km_to_miles(distance_km),
            flight_time: flight_time.into(),
            departure_time: None,
            created_at: Utc::now(),
            seats_available: seats,
            manifest: Vec::new(),
        }
    }

    /// Validate flight data beyond what construction enforces
    pub fn validate(&self) -> std::result::Result<(), &'static str> {
        if self.from_city.trim().is_empty() {
            return Err("departure city cannot be empty");
        }
        if self.to_city.trim().is_empty() {
            return Err("destination city cannot be empty");
        }
        Ok(())
    }

    pub fn number(&self) -> &FlightNumber {
        &self.number
    }

    pub fn seats_available(&self) -> u32 {
        self.seats_available
    }

    /// Ordered, read-only view of the passenger manifest
    pub fn passengers(&self) -> &[UserId] {
        &self.manifest
    }

    /// Add a passenger to the manifest
    ///
    /// Returns true only when the passenger was not already present. Has no
    /// effect on the seat count; seats are claimed once per booking, not per
    /// manifest entry.
    pub fn register_passenger(&mut self, id: &UserId) -> bool {
        if self.is_passenger_registered(id) {
            return false;
        }
        self.manifest.push(id.clone());
        true
    }

    /// Remove one occurrence of a passenger from the manifest
    pub fn remove_passenger(&mut self, id: &UserId) -> bool {
        match self.manifest.iter().position(|p| p == id) {
            Some(index) => {
                self.manifest.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_passenger_registered(&self, id: &UserId) -> bool {
        self.manifest.iter().any(|p| p == id)
    }

    /// Take seats out of inventory; false (and no change) when not enough remain
    pub(crate) fn claim_seats(&mut self, seats: u32) -> bool {
        if self.seats_available < seats {
            return false;
        }
        self.seats_available -= seats;
        true
    }

    /// Return cancelled seats to inventory
    pub(crate) fn release_seats(&mut self, seats: u32) {
        self.seats_available = self.seats_available.saturating_add(seats);
    }
}

impl PartialEq for Flight {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Flight {}
