//! Integration tests for flightdeck-core services
//!
//! These tests drive the booking/cancellation workflow through the public
//! services and check the data-integrity properties the system promises:
//! seat conservation, no partial state on failure, and flight/passenger
//! mutual consistency.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use flightdeck_core::config::{BookingPolicy, Config};
use flightdeck_core::services::{Identity, NewFlight, NewPassenger};
use flightdeck_core::{AirlineContext, Error};

// ============================================================================
// Test Helpers
// ============================================================================

/// Create a context with the given booking policy and no demo data
fn create_test_context(policy: BookingPolicy) -> AirlineContext {
    let mut config = Config::default();
    config.set_booking_policy(policy);
    AirlineContext::with_config(config).expect("Failed to create context")
}

/// Schedule a flight with the given number and seat count
fn schedule_flight(ctx: &AirlineContext, number: &str, seats: u32) {
    ctx.scheduler_service
        .schedule_flight(NewFlight {
            number: number.to_string(),
            from_city: "Berlin".to_string(),
            to_city: "Lisbon".to_string(),
            gate: "B3".to_string(),
            distance_km: 2310.0,
            flight_time: "3h 20m".to_string(),
            departure_time: None,
            seats,
        })
        .expect("Failed to schedule flight");
}

/// Register a passenger with the given user ID
fn register_passenger(ctx: &AirlineContext, user_id: &str) {
    ctx.account_service
        .register_passenger(NewPassenger {
            user_id: user_id.to_string(),
            email: format!("{}@example.com", user_id.to_lowercase()),
            password: "pw".to_string(),
            name: format!("Passenger {}", user_id),
            phone: "+49 30 555 0100".to_string(),
            address: "Unter den Linden 1, Berlin".to_string(),
            age: 30,
            passport: None,
        })
        .expect("Failed to register passenger");
}

/// Assert seats_available + seats booked across the manifest equals capacity
fn assert_seat_conservation(ctx: &AirlineContext, number: &str, capacity: u32) {
    let manifest = ctx
        .manifest_service
        .flight_manifest(number)
        .expect("Failed to read manifest");
    let booked: u32 = manifest.passengers.iter().map(|p| p.seats_booked).sum();
    assert_eq!(
        manifest.flight.seats_available + booked,
        capacity,
        "seat conservation violated for flight {}",
        number
    );
}

// ============================================================================
// Booking
// ============================================================================

#[test]
fn test_booking_updates_all_three_locations() {
    let ctx = create_test_context(BookingPolicy::AppendNewEntry);
    schedule_flight(&ctx, "FD101", 10);
    register_passenger(&ctx, "P-1");

    let receipt = ctx
        .reservation_service
        .book_flight("FD101", "P-1", 3)
        .unwrap();
    assert_eq!(receipt.seats, 3);
    assert_eq!(receipt.seats_remaining, 7);

    let manifest = ctx.manifest_service.flight_manifest("FD101").unwrap();
    assert_eq!(manifest.flight.seats_available, 7);
    assert_eq!(manifest.passengers.len(), 1);
    assert_eq!(manifest.passengers[0].user_id, "P-1");
    assert_eq!(manifest.passengers[0].seats_booked, 3);

    let itinerary = ctx.manifest_service.passenger_itinerary("P-1").unwrap();
    assert_eq!(itinerary.entries.len(), 1);
    assert_eq!(itinerary.entries[0].flight, "FD101");
    assert_eq!(itinerary.entries[0].seats, 3);

    assert_seat_conservation(&ctx, "FD101", 10);
}

#[test]
fn test_booking_is_case_insensitive_on_flight_number() {
    let ctx = create_test_context(BookingPolicy::AppendNewEntry);
    schedule_flight(&ctx, "FD101", 10);
    register_passenger(&ctx, "P-1");

    ctx.reservation_service
        .book_flight("fd101", "P-1", 2)
        .unwrap();

    let manifest = ctx.manifest_service.flight_manifest("FD101").unwrap();
    assert_eq!(manifest.flight.seats_available, 8);
}

#[test]
fn test_overbooking_fails_and_changes_nothing() {
    let ctx = create_test_context(BookingPolicy::AppendNewEntry);
    schedule_flight(&ctx, "FD101", 5);
    register_passenger(&ctx, "P-1");

    let err = ctx
        .reservation_service
        .book_flight("FD101", "P-1", 6)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::CapacityExceeded {
            requested: 6,
            available: 5,
            ..
        }
    ));

    let manifest = ctx.manifest_service.flight_manifest("FD101").unwrap();
    assert_eq!(manifest.flight.seats_available, 5);
    assert!(manifest.passengers.is_empty());

    let itinerary = ctx.manifest_service.passenger_itinerary("P-1").unwrap();
    assert!(itinerary.entries.is_empty());
}

#[test]
fn test_booking_preconditions() {
    let ctx = create_test_context(BookingPolicy::AppendNewEntry);
    schedule_flight(&ctx, "FD101", 10);
    register_passenger(&ctx, "P-1");

    // Zero tickets
    assert!(matches!(
        ctx.reservation_service
            .book_flight("FD101", "P-1", 0)
            .unwrap_err(),
        Error::InvalidInput(_)
    ));

    // Blank flight number
    assert!(matches!(
        ctx.reservation_service
            .book_flight("  ", "P-1", 1)
            .unwrap_err(),
        Error::InvalidInput(_)
    ));

    // Unknown flight
    assert!(matches!(
        ctx.reservation_service
            .book_flight("XY99", "P-1", 1)
            .unwrap_err(),
        Error::NotFound(_)
    ));

    // Unknown passenger
    assert!(matches!(
        ctx.reservation_service
            .book_flight("FD101", "P-404", 1)
            .unwrap_err(),
        Error::NotFound(_)
    ));

    // Nothing was mutated along the way
    assert_eq!(
        ctx.manifest_service
            .flight_manifest("FD101")
            .unwrap()
            .flight
            .seats_available,
        10
    );
}

// ============================================================================
// Cancellation
// ============================================================================

#[test]
fn test_book_then_cancel_round_trip() {
    let ctx = create_test_context(BookingPolicy::AppendNewEntry);
    schedule_flight(&ctx, "FD101", 10);
    register_passenger(&ctx, "P-1");

    ctx.reservation_service
        .book_flight("FD101", "P-1", 4)
        .unwrap();
    let receipt = ctx
        .reservation_service
        .cancel_flight("FD101", "P-1", 4)
        .unwrap();

    assert_eq!(receipt.seats_still_booked, 0);
    assert!(receipt.removed_from_manifest);
    assert_eq!(receipt.seats_available, 10);

    let manifest = ctx.manifest_service.flight_manifest("FD101").unwrap();
    assert_eq!(manifest.flight.seats_available, 10);
    assert!(manifest.passengers.is_empty());

    let itinerary = ctx.manifest_service.passenger_itinerary("P-1").unwrap();
    assert!(itinerary.entries.is_empty());
}

#[test]
fn test_partial_cancellation_keeps_entry() {
    let ctx = create_test_context(BookingPolicy::AppendNewEntry);
    schedule_flight(&ctx, "FD101", 10);
    register_passenger(&ctx, "P-1");

    ctx.reservation_service
        .book_flight("FD101", "P-1", 5)
        .unwrap();
    let receipt = ctx
        .reservation_service
        .cancel_flight("FD101", "P-1", 2)
        .unwrap();

    assert_eq!(receipt.seats_still_booked, 3);
    assert!(!receipt.removed_from_manifest);

    let manifest = ctx.manifest_service.flight_manifest("FD101").unwrap();
    assert_eq!(manifest.flight.seats_available, 7);
    assert_eq!(manifest.passengers.len(), 1);
    assert_eq!(manifest.passengers[0].seats_booked, 3);

    let itinerary = ctx.manifest_service.passenger_itinerary("P-1").unwrap();
    assert_eq!(itinerary.entries.len(), 1);
    assert_eq!(itinerary.entries[0].seats, 3);

    assert_seat_conservation(&ctx, "FD101", 10);
}

#[test]
fn test_cancel_never_booked_fails_and_changes_nothing() {
    let ctx = create_test_context(BookingPolicy::AppendNewEntry);
    schedule_flight(&ctx, "FD101", 10);
    register_passenger(&ctx, "P-1");

    let err = ctx
        .reservation_service
        .cancel_flight("FD101", "P-1", 1)
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    assert_eq!(
        ctx.manifest_service
            .flight_manifest("FD101")
            .unwrap()
            .flight
            .seats_available,
        10
    );
}

#[test]
fn test_cancel_more_than_booked_fails_and_changes_nothing() {
    let ctx = create_test_context(BookingPolicy::AppendNewEntry);
    schedule_flight(&ctx, "FD101", 10);
    register_passenger(&ctx, "P-1");

    ctx.reservation_service
        .book_flight("FD101", "P-1", 2)
        .unwrap();
    let err = ctx
        .reservation_service
        .cancel_flight("FD101", "P-1", 3)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));

    let manifest = ctx.manifest_service.flight_manifest("FD101").unwrap();
    assert_eq!(manifest.flight.seats_available, 8);
    assert_eq!(manifest.passengers[0].seats_booked, 2);
    assert_seat_conservation(&ctx, "FD101", 10);
}

// ============================================================================
// Booking policies
// ============================================================================

#[test]
fn test_append_policy_keeps_distinct_entries() {
    let ctx = create_test_context(BookingPolicy::AppendNewEntry);
    schedule_flight(&ctx, "FD101", 10);
    register_passenger(&ctx, "P-1");

    ctx.reservation_service
        .book_flight("FD101", "P-1", 3)
        .unwrap();
    ctx.reservation_service
        .book_flight("FD101", "P-1", 2)
        .unwrap();

    let itinerary = ctx.manifest_service.passenger_itinerary("P-1").unwrap();
    assert_eq!(itinerary.entries.len(), 2);
    assert_eq!(itinerary.entries[0].seats, 3);
    assert_eq!(itinerary.entries[1].seats, 2);

    let manifest = ctx.manifest_service.flight_manifest("FD101").unwrap();
    assert_eq!(manifest.flight.seats_available, 5);
    // One manifest row even with two entries
    assert_eq!(manifest.passengers.len(), 1);
    assert_eq!(manifest.passengers[0].seats_booked, 5);

    assert_seat_conservation(&ctx, "FD101", 10);
}

#[test]
fn test_append_policy_cancellation_targets_first_entry() {
    let ctx = create_test_context(BookingPolicy::AppendNewEntry);
    schedule_flight(&ctx, "FD101", 10);
    register_passenger(&ctx, "P-1");

    ctx.reservation_service
        .book_flight("FD101", "P-1", 3)
        .unwrap();
    ctx.reservation_service
        .book_flight("FD101", "P-1", 2)
        .unwrap();

    // Cancels the whole first entry; the second remains, so the passenger
    // stays on the manifest
    let receipt = ctx
        .reservation_service
        .cancel_flight("FD101", "P-1", 3)
        .unwrap();
    assert_eq!(receipt.seats_still_booked, 0);
    assert!(!receipt.removed_from_manifest);

    let itinerary = ctx.manifest_service.passenger_itinerary("P-1").unwrap();
    assert_eq!(itinerary.entries.len(), 1);
    assert_eq!(itinerary.entries[0].seats, 2);

    let manifest = ctx.manifest_service.flight_manifest("FD101").unwrap();
    assert_eq!(manifest.passengers.len(), 1);
    assert_seat_conservation(&ctx, "FD101", 10);

    // Cancelling 4 now exceeds the remaining first entry (2) and fails,
    // even though entries once summed to more
    assert!(matches!(
        ctx.reservation_service
            .cancel_flight("FD101", "P-1", 4)
            .unwrap_err(),
        Error::InvalidInput(_)
    ));

    // Emptying the last entry finally clears the manifest
    let receipt = ctx
        .reservation_service
        .cancel_flight("FD101", "P-1", 2)
        .unwrap();
    assert!(receipt.removed_from_manifest);
    assert_eq!(receipt.seats_available, 10);
}

#[test]
fn test_reject_policy_refuses_second_booking() {
    let ctx = create_test_context(BookingPolicy::RejectDuplicate);
    schedule_flight(&ctx, "FD101", 10);
    register_passenger(&ctx, "P-1");

    ctx.reservation_service
        .book_flight("FD101", "P-1", 3)
        .unwrap();
    let err = ctx
        .reservation_service
        .book_flight("FD101", "P-1", 2)
        .unwrap_err();
    assert!(matches!(err, Error::Duplicate(_)));

    let manifest = ctx.manifest_service.flight_manifest("FD101").unwrap();
    assert_eq!(manifest.flight.seats_available, 7);
    let itinerary = ctx.manifest_service.passenger_itinerary("P-1").unwrap();
    assert_eq!(itinerary.entries.len(), 1);
}

// ============================================================================
// Flight registry
// ============================================================================

#[test]
fn test_remove_flight_is_case_insensitive() {
    let ctx = create_test_context(BookingPolicy::AppendNewEntry);
    schedule_flight(&ctx, "ab123", 50);

    let removed = ctx.scheduler_service.remove_flight("AB123").unwrap();
    assert_eq!(removed.number, "ab123");

    assert!(matches!(
        ctx.scheduler_service.find_flight("ab123").unwrap_err(),
        Error::NotFound(_)
    ));
}

#[test]
fn test_schedule_rejects_duplicate_number() {
    let ctx = create_test_context(BookingPolicy::AppendNewEntry);
    schedule_flight(&ctx, "FD101", 10);

    let err = ctx
        .scheduler_service
        .schedule_flight(NewFlight {
            number: "fd101".to_string(),
            from_city: "Oslo".to_string(),
            to_city: "Bergen".to_string(),
            gate: "A1".to_string(),
            distance_km: 305.0,
            flight_time: "0h 50m".to_string(),
            departure_time: None,
            seats: 80,
        })
        .unwrap_err();
    assert!(matches!(err, Error::Duplicate(_)));
    assert_eq!(ctx.scheduler_service.list_flights().unwrap().len(), 1);
}

#[test]
fn test_remove_flight_reports_registered_passengers() {
    let ctx = create_test_context(BookingPolicy::AppendNewEntry);
    schedule_flight(&ctx, "FD101", 10);
    register_passenger(&ctx, "P-1");
    ctx.reservation_service
        .book_flight("FD101", "P-1", 1)
        .unwrap();

    let removed = ctx.scheduler_service.remove_flight("FD101").unwrap();
    assert_eq!(removed.passengers_registered, 1);

    // The booking entry survives; the itinerary degrades gracefully
    let itinerary = ctx.manifest_service.passenger_itinerary("P-1").unwrap();
    assert_eq!(itinerary.entries.len(), 1);
    assert!(itinerary.entries[0].from_city.is_none());
}

// ============================================================================
// Accounts and authentication
// ============================================================================

#[test]
fn test_registration_uniqueness() {
    let ctx = create_test_context(BookingPolicy::AppendNewEntry);
    ctx.account_service
        .register_passenger(NewPassenger {
            user_id: "P-1".to_string(),
            email: "ada@example.com".to_string(),
            password: "pw".to_string(),
            name: "Ada".to_string(),
            phone: String::new(),
            address: String::new(),
            age: 36,
            passport: Some("GB1".to_string()),
        })
        .unwrap();

    let dup_passport = ctx
        .account_service
        .register_passenger(NewPassenger {
            user_id: "P-2".to_string(),
            email: "grace@example.com".to_string(),
            password: "pw".to_string(),
            name: "Grace".to_string(),
            phone: String::new(),
            address: String::new(),
            age: 45,
            passport: Some("GB1".to_string()),
        })
        .unwrap_err();
    assert!(matches!(dup_passport, Error::Duplicate(_)));
    assert_eq!(ctx.account_service.list_passengers().unwrap().len(), 1);
}

#[test]
fn test_authentication_identities() {
    let ctx = create_test_context(BookingPolicy::AppendNewEntry);
    register_passenger(&ctx, "P-1");

    match ctx
        .account_service
        .authenticate("p-1@example.com", "pw")
        .unwrap()
    {
        Some(Identity::Passenger(id)) => assert_eq!(id.as_str(), "P-1"),
        other => panic!("expected passenger identity, got {:?}", other),
    }

    assert!(ctx
        .account_service
        .authenticate("p-1@example.com", "wrong")
        .unwrap()
        .is_none());
    assert!(ctx
        .account_service
        .authenticate("nobody@example.com", "pw")
        .unwrap()
        .is_none());
}

#[test]
fn test_update_contact() {
    let ctx = create_test_context(BookingPolicy::AppendNewEntry);
    register_passenger(&ctx, "P-1");

    let updated = ctx
        .account_service
        .update_contact("P-1", Some("+49 30 555 0199".to_string()), None)
        .unwrap();
    assert_eq!(updated.phone, "+49 30 555 0199");
    assert_eq!(updated.address, "Unter den Linden 1, Berlin");
}

// ============================================================================
// Status
// ============================================================================

#[test]
fn test_status_counts() {
    let ctx = create_test_context(BookingPolicy::AppendNewEntry);
    schedule_flight(&ctx, "FD101", 10);
    schedule_flight(&ctx, "FD205", 20);
    register_passenger(&ctx, "P-1");
    register_passenger(&ctx, "P-2");

    ctx.reservation_service
        .book_flight("FD101", "P-1", 2)
        .unwrap();
    ctx.reservation_service
        .book_flight("FD205", "P-2", 3)
        .unwrap();

    let status = ctx.manifest_service.status().unwrap();
    assert_eq!(status.total_flights, 2);
    assert_eq!(status.total_passengers, 2);
    assert_eq!(status.total_bookings, 2);
    assert_eq!(status.seats_booked, 5);
}
