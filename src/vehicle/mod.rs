//! Vehicle listings.

mod models;

pub use models::Vehicle;

use crate::store::EntityStore;

/// The vehicle collection: marketplace listings plus selection and loading
/// state. Owner dashboards hold a second instance for the user's own
/// listings.
pub type VehicleStore = EntityStore<Vehicle>;

impl EntityStore<Vehicle> {
    /// Case-insensitive search over model and pickup location.
    ///
    /// Computed on read rather than stored; only available vehicles are
    /// returned. An empty query matches every available vehicle.
    pub fn search(&self, query: &str) -> Vec<&Vehicle> {
        let needle = query.trim().to_lowercase();
        self.items()
            .iter()
            .filter(|vehicle| vehicle.is_available)
            .filter(|vehicle| {
                needle.is_empty()
                    || vehicle.model.to_lowercase().contains(&needle)
                    || vehicle.pickup_location.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
