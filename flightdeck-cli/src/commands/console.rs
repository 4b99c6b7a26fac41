//! Interactive console - menu-driven admin and passenger sessions
//!
//! Domain state lives only for the session, so the console keeps one
//! context alive and routes every action through the core services. It
//! enforces nothing itself.

use anyhow::Result;
use chrono::NaiveDateTime;
use colored::Colorize;
use dialoguer::{Confirm, Input, Password, Select};
use flightdeck_core::domain::distance;
use flightdeck_core::services::{Identity, NewFlight, NewPassenger};
use flightdeck_core::AirlineContext;

use super::{flights, get_context, status};
use crate::output;

pub fn run() -> Result<()> {
    let ctx = get_context()?;

    println!("{}", "Flightdeck console".bold());
    if ctx.config.demo_mode {
        output::info("Demo mode is on - sample data loaded. Try ada@example.com / demo.");
    }

    loop {
        println!();
        let choice = Select::new()
            .with_prompt("Main menu")
            .items(&["Log in", "Register as a passenger", "Status", "Exit"])
            .default(0)
            .interact()?;

        match choice {
            0 => log_in(&ctx)?,
            1 => register_passenger(&ctx)?,
            2 => status::print_status(&ctx, false)?,
            _ => break,
        }
    }

    output::info("Session ended. Domain state is not persisted.");
    Ok(())
}

fn log_in(ctx: &AirlineContext) -> Result<()> {
    let email: String = Input::new().with_prompt("Email").interact_text()?;
    let password = Password::new().with_prompt("Password").interact()?;

    match ctx.account_service.authenticate(&email, &password)? {
        Some(Identity::Admin(id)) => {
            output::success(&format!("Logged in as admin {}", id));
            admin_menu(ctx)
        }
        Some(Identity::Passenger(id)) => {
            output::success(&format!("Logged in as passenger {}", id));
            passenger_menu(ctx, id.as_str())
        }
        None => {
            output::error("Invalid email or password.");
            Ok(())
        }
    }
}

// ============================================================================
// Admin session
// ============================================================================

fn admin_menu(ctx: &AirlineContext) -> Result<()> {
    loop {
        println!();
        let choice = Select::new()
            .with_prompt("Admin menu")
            .items(&[
                "Schedule a flight",
                "Remove a flight",
                "List flights",
                "Find a flight",
                "Register a passenger",
                "List passengers",
                "Book tickets",
                "Cancel tickets",
                "Flight manifest",
                "Passenger itinerary",
                "Status",
                "Log out",
            ])
            .default(0)
            .interact()?;

        match choice {
            0 => schedule_flight(ctx)?,
            1 => remove_flight(ctx)?,
            2 => flights::render_flights(&ctx.manifest_service.list_flights()?),
            3 => find_flight(ctx)?,
            4 => register_passenger(ctx)?,
            5 => list_passengers(ctx)?,
            6 => {
                let user_id: String = Input::new().with_prompt("Passenger ID").interact_text()?;
                book_tickets(ctx, &user_id)?;
            }
            7 => {
                let user_id: String = Input::new().with_prompt("Passenger ID").interact_text()?;
                cancel_tickets(ctx, &user_id)?;
            }
            8 => flight_manifest(ctx)?,
            9 => {
                let user_id: String = Input::new().with_prompt("Passenger ID").interact_text()?;
                passenger_itinerary(ctx, &user_id)?;
            }
            10 => status::print_status(ctx, false)?,
            _ => return Ok(()),
        }
    }
}

fn schedule_flight(ctx: &AirlineContext) -> Result<()> {
    let number: String = Input::new().with_prompt("Flight number").interact_text()?;
    let from_city: String = Input::new().with_prompt("From city").interact_text()?;
    let to_city: String = Input::new().with_prompt("To city").interact_text()?;
    let gate: String = Input::new()
        .with_prompt("Gate")
        .allow_empty(true)
        .interact_text()?;
    let distance_km = prompt_distance()?;
    let flight_time: String = Input::new()
        .with_prompt("Flight time (e.g. 5h 45m)")
        .allow_empty(true)
        .interact_text()?;
    let departure_time = prompt_departure()?;
    let seats: u32 = Input::new().with_prompt("Seat capacity").interact_text()?;

    match ctx.scheduler_service.schedule_flight(NewFlight {
        number,
        from_city,
        to_city,
        gate,
        distance_km,
        flight_time,
        departure_time,
        seats,
    }) {
        Ok(flight) => output::success(&format!(
            "Flight scheduled: {} ({} -> {}, {} seats)",
            flight.number, flight.from_city, flight.to_city, flight.seats_available
        )),
        Err(e) => output::error(&e.to_string()),
    }
    Ok(())
}

fn prompt_distance() -> Result<f64> {
    let choice = Select::new()
        .with_prompt("Distance")
        .items(&["Enter distance in km", "Compute from coordinates"])
        .default(0)
        .interact()?;

    if choice == 0 {
        return Ok(Input::new().with_prompt("Distance (km)").interact_text()?);
    }

    let lat1: f64 = Input::new().with_prompt("Origin latitude").interact_text()?;
    let lon1: f64 = Input::new().with_prompt("Origin longitude").interact_text()?;
    let lat2: f64 = Input::new()
        .with_prompt("Destination latitude")
        .interact_text()?;
    let lon2: f64 = Input::new()
        .with_prompt("Destination longitude")
        .interact_text()?;
    let km = distance::haversine_km(lat1, lon1, lat2, lon2);
    output::info(&format!("Approximate distance: {:.0} km", km));
    Ok(km)
}

fn prompt_departure() -> Result<Option<NaiveDateTime>> {
    let raw: String = Input::new()
        .with_prompt("Departure time (YYYY-MM-DD HH:MM, empty to skip)")
        .allow_empty(true)
        .interact_text()?;
    if raw.trim().is_empty() {
        return Ok(None);
    }
    match NaiveDateTime::parse_from_str(raw.trim(), "%Y-%m-%d %H:%M") {
        Ok(t) => Ok(Some(t)),
        Err(_) => {
            output::warning("Unrecognized departure time, leaving unset.");
            Ok(None)
        }
    }
}

fn remove_flight(ctx: &AirlineContext) -> Result<()> {
    let number: String = Input::new().with_prompt("Flight number").interact_text()?;

    // Warn when the flight still has passengers before removing it
    if let Ok(manifest) = ctx.manifest_service.flight_manifest(&number) {
        if !manifest.passengers.is_empty() {
            let proceed = Confirm::new()
                .with_prompt(format!(
                    "{} passenger(s) are registered on {}. Remove anyway?",
                    manifest.passengers.len(),
                    manifest.flight.number
                ))
                .default(false)
                .interact()?;
            if !proceed {
                return Ok(());
            }
        }
    }

    match ctx.scheduler_service.remove_flight(&number) {
        Ok(removed) => output::success(&format!("Flight removed: {}", removed.number)),
        Err(e) => output::error(&e.to_string()),
    }
    Ok(())
}

fn find_flight(ctx: &AirlineContext) -> Result<()> {
    let number: String = Input::new().with_prompt("Flight number").interact_text()?;
    match ctx.scheduler_service.find_flight(&number) {
        Ok(flight) => flights::render_flights(std::slice::from_ref(&flight)),
        Err(e) => output::error(&e.to_string()),
    }
    Ok(())
}

fn list_passengers(ctx: &AirlineContext) -> Result<()> {
    let passengers = ctx.manifest_service.list_passengers()?;
    if passengers.is_empty() {
        output::warning("No passengers registered.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec![
        "UserID", "Name", "Email", "Age", "Phone", "Address", "Passport", "Seats",
    ]);
    for p in &passengers {
        table.add_row(vec![
            p.user_id.clone(),
            p.name.clone(),
            p.email.clone(),
            p.age.to_string(),
            p.phone.clone(),
            p.address.clone(),
            output::optional(p.passport.as_deref()),
            p.seats_booked.to_string(),
        ]);
    }
    println!("{}", table);
    Ok(())
}

fn flight_manifest(ctx: &AirlineContext) -> Result<()> {
    let number: String = Input::new().with_prompt("Flight number").interact_text()?;
    let manifest = match ctx.manifest_service.flight_manifest(&number) {
        Ok(m) => m,
        Err(e) => {
            output::error(&e.to_string());
            return Ok(());
        }
    };

    if manifest.passengers.is_empty() {
        output::warning(&format!(
            "No passengers registered for flight {}",
            manifest.flight.number
        ));
        return Ok(());
    }

    println!(
        "Registered passengers for flight {} ({} -> {}):",
        manifest.flight.number, manifest.flight.from_city, manifest.flight.to_city
    );
    let mut table = output::create_table();
    table.set_header(vec![
        "UserID",
        "Name",
        "Email",
        "Age",
        "Phone",
        "Address",
        "Tickets Booked",
    ]);
    for row in &manifest.passengers {
        table.add_row(vec![
            row.user_id.clone(),
            row.name.clone(),
            row.email.clone(),
            row.age.to_string(),
            row.phone.clone(),
            row.address.clone(),
            row.seats_booked.to_string(),
        ]);
    }
    println!("{}", table);
    Ok(())
}

// ============================================================================
// Passenger session
// ============================================================================

fn passenger_menu(ctx: &AirlineContext, user_id: &str) -> Result<()> {
    loop {
        println!();
        let choice = Select::new()
            .with_prompt("Passenger menu")
            .items(&[
                "My itinerary",
                "List flights",
                "Book tickets",
                "Cancel tickets",
                "Update contact details",
                "Log out",
            ])
            .default(0)
            .interact()?;

        match choice {
            0 => passenger_itinerary(ctx, user_id)?,
            1 => flights::render_flights(&ctx.manifest_service.list_flights()?),
            2 => book_tickets(ctx, user_id)?,
            3 => cancel_tickets(ctx, user_id)?,
            4 => update_contact(ctx, user_id)?,
            _ => return Ok(()),
        }
    }
}

fn passenger_itinerary(ctx: &AirlineContext, user_id: &str) -> Result<()> {
    let itinerary = match ctx.manifest_service.passenger_itinerary(user_id) {
        Ok(i) => i,
        Err(e) => {
            output::error(&e.to_string());
            return Ok(());
        }
    };

    if itinerary.entries.is_empty() {
        output::warning(&format!(
            "No flights registered for passenger {}",
            itinerary.passenger.name
        ));
        return Ok(());
    }

    println!("Flights registered by {}:", itinerary.passenger.name);
    let mut table = output::create_table();
    table.set_header(vec!["Flight", "From", "To", "Gate", "Departure", "Tickets"]);
    for entry in &itinerary.entries {
        table.add_row(vec![
            entry.flight.clone(),
            output::optional(entry.from_city.as_deref()),
            output::optional(entry.to_city.as_deref()),
            output::optional(entry.gate.as_deref()),
            output::departure(entry.departure_time),
            entry.seats.to_string(),
        ]);
    }
    println!("{}", table);
    Ok(())
}

// ============================================================================
// Shared actions
// ============================================================================

fn register_passenger(ctx: &AirlineContext) -> Result<()> {
    let user_id: String = Input::new().with_prompt("User ID").interact_text()?;
    let email: String = Input::new().with_prompt("Email").interact_text()?;
    let password = Password::new().with_prompt("Password").interact()?;
    let name: String = Input::new().with_prompt("Full name").interact_text()?;
    let phone: String = Input::new()
        .with_prompt("Phone")
        .allow_empty(true)
        .interact_text()?;
    let address: String = Input::new()
        .with_prompt("Address")
        .allow_empty(true)
        .interact_text()?;
    let age: u32 = Input::new().with_prompt("Age").interact_text()?;
    let passport: String = Input::new()
        .with_prompt("Passport number (empty to skip)")
        .allow_empty(true)
        .interact_text()?;

    match ctx.account_service.register_passenger(NewPassenger {
        user_id,
        email,
        password,
        name,
        phone,
        address,
        age,
        passport: if passport.trim().is_empty() {
            None
        } else {
            Some(passport)
        },
    }) {
        Ok(p) => output::success(&format!("Passenger registered: {} ({})", p.name, p.user_id)),
        Err(e) => output::error(&e.to_string()),
    }
    Ok(())
}

fn book_tickets(ctx: &AirlineContext, user_id: &str) -> Result<()> {
    let number: String = Input::new().with_prompt("Flight number").interact_text()?;
    let seats: u32 = Input::new().with_prompt("Number of tickets").interact_text()?;

    match ctx.reservation_service.book_flight(&number, user_id, seats) {
        Ok(receipt) => output::success(&format!(
            "Booked {} ticket(s) on flight {} for {} ({} seats left)",
            receipt.seats, receipt.flight, receipt.passenger, receipt.seats_remaining
        )),
        Err(e) => output::error(&e.to_string()),
    }
    Ok(())
}

fn cancel_tickets(ctx: &AirlineContext, user_id: &str) -> Result<()> {
    let number: String = Input::new().with_prompt("Flight number").interact_text()?;
    let seats: u32 = Input::new().with_prompt("Number of tickets").interact_text()?;

    match ctx.reservation_service.cancel_flight(&number, user_id, seats) {
        Ok(receipt) => {
            if receipt.seats_still_booked > 0 {
                output::success(&format!(
                    "Cancelled {} ticket(s) on flight {}; {} still booked",
                    receipt.seats_cancelled, receipt.flight, receipt.seats_still_booked
                ));
            } else {
                output::success(&format!(
                    "Cancelled {} ticket(s) on flight {}; booking entry removed",
                    receipt.seats_cancelled, receipt.flight
                ));
            }
        }
        Err(e) => output::error(&e.to_string()),
    }
    Ok(())
}

fn update_contact(ctx: &AirlineContext, user_id: &str) -> Result<()> {
    let phone: String = Input::new()
        .with_prompt("Phone (empty to keep)")
        .allow_empty(true)
        .interact_text()?;
    let address: String = Input::new()
        .with_prompt("Address (empty to keep)")
        .allow_empty(true)
        .interact_text()?;

    let phone = if phone.trim().is_empty() { None } else { Some(phone) };
    let address = if address.trim().is_empty() { None } else { Some(address) };

    match ctx.account_service.update_contact(user_id, phone, address) {
        Ok(p) => output::success(&format!("Contact details updated for {}", p.user_id)),
        Err(e) => output::error(&e.to_string()),
    }
    Ok(())
}
