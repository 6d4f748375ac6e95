//! Booking model.

use crate::store::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a booking is in its lifecycle.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Active,
    Completed,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// The rental slots the marketplace offers. Serialized as the plain hour
/// count (3, 6, 12, 24) to match the wire format.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum RentalDuration {
    ThreeHours,
    SixHours,
    TwelveHours,
    TwentyFourHours,
}

impl RentalDuration {
    /// The slot length in hours.
    pub fn hours(self) -> u8 {
        match self {
            Self::ThreeHours => 3,
            Self::SixHours => 6,
            Self::TwelveHours => 12,
            Self::TwentyFourHours => 24,
        }
    }
}

impl From<RentalDuration> for u8 {
    fn from(duration: RentalDuration) -> Self {
        duration.hours()
    }
}

impl TryFrom<u8> for RentalDuration {
    type Error = String;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            3 => Ok(Self::ThreeHours),
            6 => Ok(Self::SixHours),
            12 => Ok(Self::TwelveHours),
            24 => Ok(Self::TwentyFourHours),
            other => Err(format!("invalid rental duration: {other} hours")),
        }
    }
}

/// A rental booking.
///
/// `vehicle_id` and `student_id` are weak references (id lookups into the
/// vehicle and user collections); no cross-entity validation happens
/// client-side.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub vehicle_id: String,
    pub student_id: String,
    pub duration: RentalDuration,
    pub total_price: f64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
    pub pickup_location: String,
    pub has_location_discount: bool,
}

impl Entity for Booking {
    fn id(&self) -> &str {
        &self.id
    }
}
