//! Session lifecycle: identity, token, and authentication state.
//!
//! The session store is the sole owner of the current [`User`]; it is
//! replaced wholesale on login/registration and cleared on logout. The
//! durable `{user, token}` record lives in [`persist`]; password management
//! against the gateway lives in [`passwords`].

mod errors;
mod models;
pub mod passwords;
pub mod persist;
mod store;

pub use errors::{SessionError, SessionResult};
pub use models::{ProfileUpdate, User, UserDocuments, UserType};
pub use passwords::PasswordError;
pub use persist::{SessionFile, StorageError, StoredSession};
pub use store::{AuthPhase, SessionStore};
