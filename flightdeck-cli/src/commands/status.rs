//! Status command - flight, passenger, and booking counts

use anyhow::Result;
use colored::Colorize;
use flightdeck_core::AirlineContext;

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    print_status(&ctx, json)
}

pub fn print_status(ctx: &AirlineContext, json: bool) -> Result<()> {
    let status = ctx.manifest_service.status()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{}", "Airline Status".bold());
    println!();

    let mut table = output::create_table();
    table.add_row(vec!["Flights", &status.total_flights.to_string()]);
    table.add_row(vec!["Passengers", &status.total_passengers.to_string()]);
    table.add_row(vec!["Booking entries", &status.total_bookings.to_string()]);
    table.add_row(vec!["Seats booked", &status.seats_booked.to_string()]);
    println!("{}", table);
    println!();

    println!("Booking policy: {}", ctx.config.booking_policy);
    if ctx.config.demo_mode {
        output::info("Demo mode is on");
    }

    Ok(())
}
