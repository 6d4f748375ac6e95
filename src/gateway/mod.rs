//! Remote gateway boundary.
//!
//! The backend is an external collaborator reached only through the four
//! documented endpoints. [`AuthGateway`] is the seam: flows are written
//! against the trait, [`HttpGateway`] is the production implementation, and
//! tests substitute an in-memory fake.

mod client;
mod errors;
pub mod messages;

pub use client::{AuthGateway, HttpGateway};
pub use errors::{GatewayError, GatewayResult};
