// Walkthrough of the booking registry against a single showing.

use anyhow::Result;
use movie_booking::BookingRegistry;

fn main() -> Result<()> {
    let registry = BookingRegistry::new(5)?;
    let event_id = "Inception";

    registry.reserve(event_id, 1)?;
    println!("Seat 1 reserved for '{event_id}'.");
    registry.reserve(event_id, 2)?;
    println!("Seat 2 reserved for '{event_id}'.");

    println!("{}", registry.is_booked(event_id, 1)); // true
    println!("{}", registry.is_booked(event_id, 3)); // false

    registry.release(event_id, 1)?;
    println!("Booking for seat 1 of '{event_id}' cancelled.");
    println!("{}", registry.is_booked(event_id, 1)); // false

    if let Err(e) = registry.reserve(event_id, 0) {
        println!("Error: {e}");
    }

    if let Err(e) = registry.release(event_id, 10) {
        println!("Error: {e}");
    }

    Ok(())
}
