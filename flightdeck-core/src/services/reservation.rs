//! Reservation service - the booking/cancellation state machine
//!
//! Every booking or cancellation coordinates three locations: the flight's
//! seat count, the passenger's booking list, and the flight's passenger
//! manifest. All preconditions are checked before the first mutation, and
//! the whole sequence runs inside one lock acquisition, so a caller never
//! observes partial state.

use serde::Serialize;
use uuid::Uuid;

use crate::config::BookingPolicy;
use crate::domain::result::{Error, Result};
use crate::domain::{Booking, FlightNumber, UserId};
use crate::registry::SharedState;
use crate::services::lock;

/// Reservation service for booking and cancelling tickets
pub struct ReservationService {
    state: SharedState,
    policy: BookingPolicy,
}

impl ReservationService {
    pub(crate) fn new(state: SharedState, policy: BookingPolicy) -> Self {
        Self { state, policy }
    }

    pub fn policy(&self) -> BookingPolicy {
        self.policy
    }

    /// Book tickets on a flight for a passenger
    pub fn book_flight(
        &self,
        flight_number: &str,
        user_id: &str,
        seats: u32,
    ) -> Result<BookingReceipt> {
        if seats == 0 {
            return Err(Error::invalid_input(
                "number of tickets must be greater than zero",
            ));
        }
        let number = FlightNumber::new(flight_number)?;
        let user_id = UserId::new(user_id)?;

        let mut state = lock(&self.state)?;
        let state = &mut *state;

        let flight = state
            .flights
            .find_mut(number.as_str())
            .ok_or_else(|| Error::not_found(format!("flight {} is not scheduled", number)))?;
        let passenger = state
            .passengers
            .find_mut(&user_id)
            .ok_or_else(|| Error::not_found(format!("passenger {} is not registered", user_id)))?;

        if self.policy == BookingPolicy::RejectDuplicate && passenger.has_booking(&number) {
            return Err(Error::duplicate(format!(
                "passenger {} already holds a booking on flight {}",
                user_id, number
            )));
        }

        // claim_seats is both the capacity check and the first mutation;
        // nothing earlier writes
        let available = flight.seats_available();
        if !flight.claim_seats(seats) {
            return Err(Error::CapacityExceeded {
                flight: number.to_string(),
                requested: seats,
                available,
            });
        }

        let booking_id = passenger.add_booking(Booking::new(number.clone(), seats));
        flight.register_passenger(&user_id);

        Ok(BookingReceipt {
            booking_id,
            flight: number.to_string(),
            passenger: user_id.to_string(),
            seats,
            seats_remaining: flight.seats_available(),
        })
    }

    /// Cancel tickets previously booked on a flight
    ///
    /// Cancellation targets the passenger's first booking entry for the
    /// flight, in booking order. When the entry empties it is removed, and
    /// the passenger leaves the manifest unless another entry for the same
    /// flight remains.
    pub fn cancel_flight(
        &self,
        flight_number: &str,
        user_id: &str,
        seats: u32,
    ) -> Result<CancellationReceipt> {
        if seats == 0 {
            return Err(Error::invalid_input(
                "number of tickets must be greater than zero",
            ));
        }
        let number = FlightNumber::new(flight_number)?;
        let user_id = UserId::new(user_id)?;

        let mut state = lock(&self.state)?;
        let state = &mut *state;

        let flight = state
            .flights
            .find_mut(number.as_str())
            .ok_or_else(|| Error::not_found(format!("flight {} is not scheduled", number)))?;
        let passenger = state
            .passengers
            .find_mut(&user_id)
            .ok_or_else(|| Error::not_found(format!("passenger {} is not registered", user_id)))?;

        let index = passenger.booking_index(&number).ok_or_else(|| {
            Error::not_found(format!(
                "flight {} not found in bookings of passenger {}",
                number, user_id
            ))
        })?;

        let booked = passenger.bookings()[index].seats;
        if booked < seats {
            return Err(Error::invalid_input(format!(
                "cannot cancel {} tickets on flight {}: only {} booked",
                seats, number, booked
            )));
        }

        flight.release_seats(seats);
        let seats_still_booked = passenger.reduce_booking(index, seats);

        let mut removed_from_manifest = false;
        if seats_still_booked == 0 && !passenger.has_booking(&number) {
            removed_from_manifest = flight.remove_passenger(&user_id);
        }

        Ok(CancellationReceipt {
            flight: number.to_string(),
            passenger: user_id.to_string(),
            seats_cancelled: seats,
            seats_still_booked,
            removed_from_manifest,
            seats_available: flight.seats_available(),
        })
    }
}

/// Result of a successful booking
#[derive(Debug, Serialize)]
pub struct BookingReceipt {
    pub booking_id: Uuid,
    pub flight: String,
    pub passenger: String,
    pub seats: u32,
    /// Seats left on the flight after this booking
    pub seats_remaining: u32,
}

/// Result of a successful cancellation
#[derive(Debug, Serialize)]
pub struct CancellationReceipt {
    pub flight: String,
    pub passenger: String,
    pub seats_cancelled: u32,
    /// Seats remaining on the targeted booking entry (0 means it was removed)
    pub seats_still_booked: u32,
    pub removed_from_manifest: bool,
    /// Seats available on the flight after this cancellation
    pub seats_available: u32,
}
