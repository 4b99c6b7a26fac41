//! Flights command - list scheduled flights

use anyhow::Result;
use flightdeck_core::services::FlightSummary;

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let flights = ctx.manifest_service.list_flights()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&flights)?);
        return Ok(());
    }

    render_flights(&flights);
    Ok(())
}

pub fn render_flights(flights: &[FlightSummary]) {
    if flights.is_empty() {
        output::warning("No flights scheduled.");
        return;
    }

    let mut table = output::create_table();
    table.set_header(vec![
        "Number",
        "From",
        "To",
        "Gate",
        "Distance (km)",
        "Flight Time",
        "Departure",
        "Seats Left",
        "Passengers",
    ]);
    for flight in flights {
        table.add_row(vec![
            flight.number.clone(),
            flight.from_city.clone(),
            flight.to_city.clone(),
            flight.gate.clone(),
            format!("{:.0}", flight.distance_km),
            flight.flight_time.clone(),
            output::departure(flight.departure_time),
            flight.seats_available.to_string(),
            flight.passengers_registered.to_string(),
        ]);
    }
    println!("{}", table);
}
