//! Aggregate client state.

use crate::booking::BookingStore;
use crate::session::SessionStore;
use crate::vehicle::VehicleStore;

/// The full client-side state: one session store plus the two entity
/// collections.
///
/// An explicit, injectable container: created once by the embedding
/// application and passed by reference to whichever layer needs it. UI
/// events dispatch transitions on the individual stores; rendering reads
/// back through their accessors. There are no ambient singletons.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientState {
    pub session: SessionStore,
    pub vehicles: VehicleStore,
    pub bookings: BookingStore,
}

impl ClientState {
    /// Create empty state: anonymous session, empty collections.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_fully_empty() {
        let state = ClientState::new();
        assert!(!state.session.is_authenticated());
        assert!(state.vehicles.is_empty());
        assert!(state.bookings.is_empty());
    }
}
