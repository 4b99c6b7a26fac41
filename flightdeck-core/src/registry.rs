//! In-memory registries - the authoritative owners of domain state
//!
//! The registries own their collections exclusively; other components call
//! registry operations or receive read-only views, never a shared mutable
//! container.

use std::sync::{Arc, Mutex};

use crate::domain::result::{Error, Result};
use crate::domain::{Admin, Flight, Passenger, UserId};

/// The authoritative collection of scheduled flights, keyed by flight number
///
/// Lookup is a linear scan with case-insensitive matching; the collection is
/// small and ordered by scheduling time.
#[derive(Debug, Default)]
pub struct FlightRegistry {
    flights: Vec<Flight>,
}

impl FlightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a flight; rejects a duplicate flight number
    pub fn schedule(&mut self, flight: Flight) -> Result<()> {
        if self.find(flight.number().as_str()).is_some() {
            return Err(Error::duplicate(format!(
                "flight {} is already scheduled",
                flight.number()
            )));
        }
        self.flights.push(flight);
        Ok(())
    }

    /// Remove the flight with the given number, returning it
    pub fn remove(&mut self, number: &str) -> Result<Flight> {
        if number.trim().is_empty() {
            return Err(Error::invalid_input("flight number cannot be empty"));
        }
        match self.flights.iter().position(|f| f.number().matches(number)) {
            Some(index) => Ok(self.flights.remove(index)),
            None => Err(Error::not_found(format!(
                "flight {} is not scheduled",
                number.trim()
            ))),
        }
    }

    pub fn find(&self, number: &str) -> Option<&Flight> {
        self.flights.iter().find(|f| f.number().matches(number))
    }

    pub(crate) fn find_mut(&mut self, number: &str) -> Option<&mut Flight> {
        self.flights.iter_mut().find(|f| f.number().matches(number))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Flight> {
        self.flights.iter()
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

/// The authoritative collection of registered passengers, keyed by user ID
///
/// Email and passport number are secondary unique indexes, enforced at
/// registration.
#[derive(Debug, Default)]
pub struct PassengerDirectory {
    passengers: Vec<Passenger>,
}

impl PassengerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a passenger; user ID, email, and passport must all be unique
    pub fn register(&mut self, passenger: Passenger) -> Result<()> {
        if self.find(passenger.id()).is_some() {
            return Err(Error::duplicate(format!(
                "user ID {} is already registered",
                passenger.id()
            )));
        }
        if self.find_by_email(&passenger.user.email).is_some() {
            return Err(Error::duplicate(format!(
                "email {} is already registered",
                passenger.user.email
            )));
        }
        if let Some(passport) = &passenger.passport {
            if self.find_by_passport(passport).is_some() {
                return Err(Error::duplicate(format!(
                    "passport number {} is already registered",
                    passport
                )));
            }
        }
        self.passengers.push(passenger);
        Ok(())
    }

    pub fn find(&self, id: &UserId) -> Option<&Passenger> {
        self.passengers.iter().find(|p| p.id() == id)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&Passenger> {
        self.passengers.iter().find(|p| p.user.email == email)
    }

    pub fn find_by_passport(&self, passport: &str) -> Option<&Passenger> {
        self.passengers
            .iter()
            .find(|p| p.passport.as_deref() == Some(passport))
    }

    pub(crate) fn find_mut(&mut self, id: &UserId) -> Option<&mut Passenger> {
        self.passengers.iter_mut().find(|p| p.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Passenger> {
        self.passengers.iter()
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }
}

/// All mutable airline state behind a single lock
///
/// One mutex over flights and passengers together; a reservation operation
/// runs its whole validate-then-mutate sequence as one critical section.
#[derive(Debug, Default)]
pub struct AirlineState {
    pub flights: FlightRegistry,
    pub passengers: PassengerDirectory,
    pub admins: Vec<Admin>,
}

impl AirlineState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub(crate) type SharedState = Arc<Mutex<AirlineState>>;
