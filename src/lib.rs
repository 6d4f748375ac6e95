//! # RideShare Client Core
//!
//! The client-side core of a peer-to-peer vehicle rental marketplace
//! connecting student renters with vehicle owners: the session lifecycle,
//! the vehicle and booking entity stores, the two-phase registration flow,
//! and the remote gateway boundary. Rendering, routing, and the server
//! itself are external collaborators that dispatch transitions into these
//! stores and read state snapshots back out.
//!
//! ## Architecture
//!
//! State is mutated on one logical thread by synchronous, atomic
//! transitions; gateway calls are plain async request/response with no
//! retry or cancellation, suspending only the calling flow.
//!
//! - [`session`]: identity, token, and the `Anonymous → Authenticating →
//!   Authenticated` lifecycle, plus the durable `{user, token}` record and
//!   password management
//! - [`store`]: the generic id-keyed entity collection
//! - [`vehicle`] / [`booking`]: domain records and their collections
//! - [`registration`]: the credentials → OTP flow and the document upload
//!   gate
//! - [`gateway`]: the HTTP boundary to the backend
//! - [`config`]: environment-driven configuration
//! - [`state`]: the injectable aggregate container
//!
//! ## Example
//!
//! ```
//! use rideshare::session::SessionStore;
//!
//! let mut session = SessionStore::new();
//! session.begin_login().unwrap();
//! session.fail_login();
//! assert!(!session.is_authenticated());
//! ```

pub mod booking;
pub mod config;
pub mod gateway;
pub mod registration;
pub mod session;
pub mod state;
pub mod store;
pub mod vehicle;

pub use booking::{Booking, BookingStatus, BookingStore, RentalDuration};
pub use config::ClientConfig;
pub use gateway::{AuthGateway, GatewayError, HttpGateway};
pub use registration::{
    required_documents, DocumentChecklist, DocumentKind, RegistrationFlow, RegistrationForm,
};
pub use session::{AuthPhase, SessionFile, SessionStore, User, UserType};
pub use state::ClientState;
pub use store::{Entity, EntityStore};
