//! Rental bookings.

mod models;

pub use models::{Booking, BookingStatus, RentalDuration};

use crate::store::EntityStore;
use log::debug;

/// The booking collection; the selected pointer tracks the active booking.
pub type BookingStore = EntityStore<Booking>;

impl EntityStore<Booking> {
    /// Rewrite the status of the booking with `id`.
    ///
    /// Returns `false` and leaves the collection untouched when no booking
    /// carries that id.
    pub fn set_status(&mut self, id: &str, status: BookingStatus) -> bool {
        match self.get_mut(id) {
            Some(booking) => {
                debug!("booking {id}: status -> {status}");
                booking.status = status;
                true
            }
            None => false,
        }
    }
}
