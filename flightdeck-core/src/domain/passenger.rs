//! Passenger domain model

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::flight::FlightNumber;
use crate::domain::user::{User, UserId};

/// One reservation transaction: a ticket count held against a flight
///
/// Under the append booking policy a passenger can hold several entries for
/// the same flight, one per booking call, in booking order.
#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub id: Uuid,
    pub flight: FlightNumber,
    pub seats: u32,
    pub booked_at: DateTime<Utc>,
}

impl Booking {
    pub(crate) fn new(flight: FlightNumber, seats: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            flight,
            seats,
            booked_at: Utc::now(),
        }
    }
}

/// A passenger user: identity fields plus the ordered booking list
///
/// The booking list is a single ordered association list from flight to
/// ticket count; an entry's flight and count cannot fall out of step.
/// Entries keep booking order, and lookup by flight returns the first
/// match.
#[derive(Debug, Clone)]
pub struct Passenger {
    pub user: User,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub age: u32,
    /// Optional passport number; enforced unique by the directory
    pub passport: Option<String>,
    pub created_at: DateTime<Utc>,
    bookings: Vec<Booking>,
}

impl Passenger {
    /// Create a passenger with required fields
    pub fn new(
        user: User,
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        age: u32,
        passport: Option<String>,
    ) -> Self {
        // Blank passports are treated as absent
        let passport = passport
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        Self {
            user,
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
            age,
            passport,
            created_at: Utc::now(),
            bookings: Vec::new(),
        }
    }

    /// Validate passenger data beyond what construction enforces
    pub fn validate(&self) -> std::result::Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("passenger name cannot be empty");
        }
        Ok(())
    }

    pub fn id(&self) -> &UserId {
        &self.user.id
    }

    /// Ordered, read-only view of the booking list
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// First booking entry for the given flight, in booking order
    pub fn booking_for(&self, flight: &FlightNumber) -> Option<&Booking> {
        self.bookings.iter().find(|b| &b.flight == flight)
    }

    pub fn has_booking(&self, flight: &FlightNumber) -> bool {
        self.booking_for(flight).is_some()
    }

    /// Total seats this passenger holds on the given flight, across entries
    pub fn seats_booked_on(&self, flight: &FlightNumber) -> u32 {
        self.bookings
            .iter()
            .filter(|b| &b.flight == flight)
            .map(|b| b.seats)
            .sum()
    }

    pub(crate) fn booking_index(&self, flight: &FlightNumber) -> Option<usize> {
        self.bookings.iter().position(|b| &b.flight == flight)
    }

    pub(crate) fn add_booking(&mut self, booking: Booking) -> Uuid {
        let id = booking.id;
        self.bookings.push(booking);
        id
    }

    /// Decrement the entry at `index`, removing it when it reaches zero
    ///
    /// Returns the seats remaining on that entry. The caller must have
    /// checked that the entry holds at least `seats`.
    pub(crate) fn reduce_booking(&mut self, index: usize, seats: u32) -> u32 {
        let remaining = self.bookings[index].seats.saturating_sub(seats);
        if remaining == 0 {
            self.bookings.remove(index);
        } else {
            self.bookings[index].seats = remaining;
        }
        remaining
    }
}

impl PartialEq for Passenger {
    fn eq(&self, other: &Self) -> bool {
        self.user.id == other.user.id
    }
}

impl Eq for Passenger {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::result::Result;

    fn test_passenger() -> Result<Passenger> {
        let user = User::new(UserId::new("P-1001")?, "ada@example.com", "pw")?;
        Ok(Passenger::new(
            user,
            "Ada Lovelace",
            "+44 20 7946 0001",
            "12 St James Sq, London",
            36,
            Some("GB1815001".to_string()),
        ))
    }

    #[test]
    fn test_blank_passport_treated_as_absent() {
        let user = User::new(UserId::new("P-2").unwrap(), "b@example.com", "pw").unwrap();
        let p = Passenger::new(user, "B", "", "", 30, Some("   ".to_string()));
        assert!(p.passport.is_none());
    }

    #[test]
    fn test_booking_lookup_is_first_match() {
        let mut p = test_passenger().unwrap();
        let fd101 = FlightNumber::new("FD101").unwrap();

        p.add_booking(Booking::new(fd101.clone(), 3));
        p.add_booking(Booking::new(fd101.clone(), 2));

        assert_eq!(p.bookings().len(), 2);
        assert_eq!(p.booking_for(&fd101).unwrap().seats, 3);
        assert_eq!(p.seats_booked_on(&fd101), 5);
    }

    #[test]
    fn test_reduce_booking_removes_at_zero() {
        let mut p = test_passenger().unwrap();
        let fd101 = FlightNumber::new("FD101").unwrap();
        p.add_booking(Booking::new(fd101.clone(), 5));

        let index = p.booking_index(&fd101).unwrap();
        assert_eq!(p.reduce_booking(index, 2), 3);
        assert_eq!(p.bookings().len(), 1);

        let index = p.booking_index(&fd101).unwrap();
        assert_eq!(p.reduce_booking(index, 3), 0);
        assert!(p.bookings().is_empty());
        assert!(!p.has_booking(&fd101));
    }

    #[test]
    fn test_equality_by_user_id() {
        let a = test_passenger().unwrap();
        let mut b = test_passenger().unwrap();
        b.name = "Someone Else".to_string();
        assert_eq!(a, b);
    }
}
