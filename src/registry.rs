// Booking registry: per-event seat reservation state for movie showings.
// This is the single owner of all reservation state; callers only ever see
// results and copies, never a reference into a reservation set.

use std::collections::HashSet;

use dashmap::DashMap;
use parking_lot::RwLock;
use thiserror::Error;

// Error kinds for registry operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("capacity must be greater than zero, got {0}")]
    InvalidConfiguration(u32),

    #[error("invalid seat number: {seat}. valid range: 1..={capacity}")]
    InvalidSeat { seat: u32, capacity: u32 },

    #[error("seat {seat} for event '{event_id}' is already booked")]
    SeatAlreadyBooked { event_id: String, seat: u32 },

    #[error("all seats for event '{event_id}' are taken")]
    NoAvailableSeat { event_id: String },

    #[error("no active bookings for event '{event_id}'")]
    EventNotFound { event_id: String },

    #[error("seat {seat} for event '{event_id}' was not booked")]
    SeatNotBooked { event_id: String, seat: u32 },
}

// Running counters for registry activity
#[derive(Debug, Default, Clone)]
pub struct RegistryStats {
    pub reserved_count: usize,
    pub released_count: usize,
    pub rejected_count: usize,
}

/// In-memory seat registry with a fixed per-event capacity.
///
/// Reservation sets are created lazily on the first booking for an event and
/// stay mapped for the registry's lifetime, even once empty. All operations
/// take `&self`; per-event mutation happens under the shard lock of the
/// backing map, so the registry can be shared across threads behind an `Arc`.
pub struct BookingRegistry {
    capacity: u32,
    bookings: DashMap<String, HashSet<u32>>,
    stats: RwLock<RegistryStats>,
}

impl BookingRegistry {
    /// Creates a registry where every event has seats `1..=capacity`.
    pub fn new(capacity: u32) -> Result<Self, BookingError> {
        if capacity == 0 {
            return Err(BookingError::InvalidConfiguration(capacity));
        }

        Ok(Self {
            capacity,
            bookings: DashMap::new(),
            stats: RwLock::new(RegistryStats::default()),
        })
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Books `seat` for `event_id`.
    ///
    /// Checks run in a fixed order: seat range, then double booking, then
    /// capacity exhaustion. A rejected call leaves the registry untouched,
    /// and a repeat of a successful call fails with `SeatAlreadyBooked`.
    pub fn reserve(&self, event_id: &str, seat: u32) -> Result<(), BookingError> {
        // Range check comes before any lookup so a bad seat number never
        // creates state for a new event.
        if seat < 1 || seat > self.capacity {
            self.stats.write().rejected_count += 1;
            return Err(BookingError::InvalidSeat {
                seat,
                capacity: self.capacity,
            });
        }

        let result = {
            // The entry guard pins the shard for this event, so the
            // membership check, capacity check and insert are one critical
            // section. Concurrent reserves cannot race past the checks.
            let mut seats = self.bookings.entry(event_id.to_string()).or_default();

            if seats.contains(&seat) {
                Err(BookingError::SeatAlreadyBooked {
                    event_id: event_id.to_string(),
                    seat,
                })
            } else if seats.len() == self.capacity as usize {
                // Direct size comparison, not a scan over seat numbers.
                Err(BookingError::NoAvailableSeat {
                    event_id: event_id.to_string(),
                })
            } else {
                seats.insert(seat);
                Ok(())
            }
        };

        match &result {
            Ok(()) => {
                self.stats.write().reserved_count += 1;
                tracing::info!(event_id, seat, "seat reserved");
            }
            Err(_) => self.stats.write().rejected_count += 1,
        }

        result
    }

    /// Cancels the booking of `seat` for `event_id`.
    ///
    /// Distinguishes an event with no booking history (`EventNotFound`) from
    /// an event whose set simply does not hold the seat (`SeatNotBooked`).
    /// There is deliberately no range check here: an out-of-range seat is
    /// just absent from the set and surfaces as `SeatNotBooked`.
    pub fn release(&self, event_id: &str, seat: u32) -> Result<(), BookingError> {
        let result = match self.bookings.get_mut(event_id) {
            None => Err(BookingError::EventNotFound {
                event_id: event_id.to_string(),
            }),
            Some(mut seats) => {
                if seats.remove(&seat) {
                    // The set stays mapped even when it just became empty.
                    Ok(())
                } else {
                    Err(BookingError::SeatNotBooked {
                        event_id: event_id.to_string(),
                        seat,
                    })
                }
            }
        };

        match &result {
            Ok(()) => {
                self.stats.write().released_count += 1;
                tracing::info!(event_id, seat, "booking cancelled");
            }
            Err(_) => self.stats.write().rejected_count += 1,
        }

        result
    }

    /// Returns whether `seat` is currently booked for `event_id`.
    /// Never-touched events read as fully free.
    pub fn is_booked(&self, event_id: &str, seat: u32) -> bool {
        self.bookings
            .get(event_id)
            .map_or(false, |seats| seats.contains(&seat))
    }

    pub fn stats(&self) -> RegistryStats {
        self.stats.read().clone()
    }
}
