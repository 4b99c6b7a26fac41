//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

pub mod distance;
mod flight;
mod passenger;
pub mod result;
mod user;

pub use flight::{Flight, FlightNumber};
pub use passenger::{Booking, Passenger};
pub use user::{Admin, User, UserId};
