//! Vehicle listing model.

use crate::store::Entity;
use serde::{Deserialize, Serialize};

/// A listed vehicle, as served by the marketplace.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub model: String,
    pub number_plate: String,
    /// Photo URLs in display order.
    pub images: Vec<String>,
    pub years_old: u32,
    pub mileage: f64,
    /// Reference to the uploaded registration papers image.
    pub papers_image: String,
    pub price_per_hour: f64,
    pub pickup_location: String,
    /// Weak reference to the owning user; never resolved client-side.
    pub owner_id: String,
    pub is_available: bool,
    pub rating: f64,
    pub reviews: u32,
}

impl Entity for Vehicle {
    fn id(&self) -> &str {
        &self.id
    }
}
