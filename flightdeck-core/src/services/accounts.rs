//! Account service - passenger registration and authentication

use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::{Passenger, User, UserId};
use crate::registry::SharedState;
use crate::services::lock;

/// Account service for user management
pub struct AccountService {
    state: SharedState,
}

impl AccountService {
    pub(crate) fn new(state: SharedState) -> Self {
        Self { state }
    }

    /// Register a new passenger
    pub fn register_passenger(&self, new: NewPassenger) -> Result<PassengerSummary> {
        let id = UserId::new(&new.user_id)?;
        let user = User::new(id, new.email, new.password)?;
        let passenger = Passenger::new(
            user,
            new.name,
            new.phone,
            new.address,
            new.age,
            new.passport,
        );
        passenger.validate().map_err(Error::invalid_input)?;

        let mut state = lock(&self.state)?;
        let summary = PassengerSummary::from(&passenger);
        state.passengers.register(passenger)?;
        Ok(summary)
    }

    /// Find a passenger by user ID
    pub fn find_passenger(&self, user_id: &str) -> Result<PassengerSummary> {
        let id = UserId::new(user_id)?;
        let state = lock(&self.state)?;
        state
            .passengers
            .find(&id)
            .map(PassengerSummary::from)
            .ok_or_else(|| Error::not_found(format!("passenger {} is not registered", id)))
    }

    /// All registered passengers, in registration order
    pub fn list_passengers(&self) -> Result<Vec<PassengerSummary>> {
        let state = lock(&self.state)?;
        Ok(state.passengers.iter().map(PassengerSummary::from).collect())
    }

    /// Update a passenger's contact details
    pub fn update_contact(
        &self,
        user_id: &str,
        phone: Option<String>,
        address: Option<String>,
    ) -> Result<PassengerSummary> {
        let id = UserId::new(user_id)?;
        let mut state = lock(&self.state)?;
        let passenger = state
            .passengers
            .find_mut(&id)
            .ok_or_else(|| Error::not_found(format!("passenger {} is not registered", id)))?;

        if let Some(phone) = phone {
            passenger.phone = phone;
        }
        if let Some(address) = address {
            passenger.address = address;
        }
        Ok(PassengerSummary::from(&*passenger))
    }

    /// Check credentials against admins, then passengers
    ///
    /// Exact-match comparison; None means no account matched.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Option<Identity>> {
        let state = lock(&self.state)?;

        for admin in &state.admins {
            if admin.user.authenticate(email, password) {
                return Ok(Some(Identity::Admin(admin.user.id.clone())));
            }
        }
        for passenger in state.passengers.iter() {
            if passenger.user.authenticate(email, password) {
                return Ok(Some(Identity::Passenger(passenger.id().clone())));
            }
        }
        Ok(None)
    }
}

/// Outcome of a successful authentication
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Admin(UserId),
    Passenger(UserId),
}

/// Input for registering a passenger
#[derive(Debug, Clone)]
pub struct NewPassenger {
    pub user_id: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub age: u32,
    pub passport: Option<String>,
}

/// Read-only snapshot of a passenger for display
#[derive(Debug, Clone, Serialize)]
pub struct PassengerSummary {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub age: u32,
    pub passport: Option<String>,
    /// Number of booking entries held
    pub bookings: usize,
    /// Total seats held across all bookings
    pub seats_booked: u32,
}

impl From<&Passenger> for PassengerSummary {
    fn from(passenger: &Passenger) -> Self {
        Self {
            user_id: passenger.id().to_string(),
            name: passenger.name.clone(),
            email: passenger.user.email.clone(),
            phone: passenger.phone.clone(),
            address: passenger.address.clone(),
            age: passenger.age,
            passport: passenger.passport.clone(),
            bookings: passenger.bookings().len(),
            seats_booked: passenger.bookings().iter().map(|b| b.seats).sum(),
        }
    }
}
