//! Session lifecycle store.

use super::{
    errors::{SessionError, SessionResult},
    models::{ProfileUpdate, User},
};
use log::{debug, info};
use std::fmt;

/// Where the session is in its lifecycle.
///
/// `Anonymous` is the initial phase. `begin_login` moves to `Authenticating`;
/// from there the session either completes into `Authenticated` or falls back
/// to `Anonymous`. Registration commits straight from `Anonymous`; the
/// two-phase flow holds its own transient state, so no loading phase is
/// modeled for it.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum AuthPhase {
    #[default]
    Anonymous,
    Authenticating,
    Authenticated,
}

impl fmt::Display for AuthPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => write!(f, "anonymous"),
            Self::Authenticating => write!(f, "authenticating"),
            Self::Authenticated => write!(f, "authenticated"),
        }
    }
}

/// Holds the current user identity, bearer token, and loading flag.
///
/// All transitions are synchronous and atomic; the store is mutated on one
/// logical thread only, so ordering between transitions is program order.
/// `is_authenticated` is derived from the data itself (user and token both
/// present), which upholds the session invariant by construction.
///
/// Persistence across restarts is not this store's concern; see
/// [`super::persist`] for the durable record.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SessionStore {
    phase: AuthPhase,
    user: Option<User>,
    token: Option<String>,
    loading: bool,
}

impl SessionStore {
    /// Create an empty, anonymous session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a login attempt.
    ///
    /// Allowed from `Anonymous` or `Authenticated` (re-authentication keeps
    /// the previous identity visible until the attempt resolves).
    ///
    /// # Errors
    ///
    /// * `SessionError::InvalidTransition` - a login attempt is already in
    ///   flight
    pub fn begin_login(&mut self) -> SessionResult<()> {
        match self.phase {
            AuthPhase::Anonymous | AuthPhase::Authenticated => {
                debug!("session: {} -> authenticating", self.phase);
                self.phase = AuthPhase::Authenticating;
                self.loading = true;
                Ok(())
            }
            AuthPhase::Authenticating => Err(SessionError::InvalidTransition {
                from: self.phase,
                event: "begin login",
            }),
        }
    }

    /// Commit a successful login.
    ///
    /// # Errors
    ///
    /// * `SessionError::InvalidTransition` - no login attempt is in flight
    pub fn complete_login(&mut self, user: User, token: String) -> SessionResult<()> {
        if self.phase != AuthPhase::Authenticating {
            return Err(SessionError::InvalidTransition {
                from: self.phase,
                event: "complete login",
            });
        }
        info!("session: login committed for user {}", user.id);
        self.phase = AuthPhase::Authenticated;
        self.user = Some(user);
        self.token = Some(token);
        self.loading = false;
        Ok(())
    }

    /// Abort the current login attempt and fully reset to anonymous.
    ///
    /// Accepted from any phase; never leaves a partially authenticated state.
    pub fn fail_login(&mut self) {
        debug!("session: login failed, resetting to anonymous");
        *self = Self::default();
    }

    /// Commit a successful registration.
    ///
    /// Same effect as [`complete_login`](Self::complete_login), but reachable
    /// directly from `Anonymous`: the registration flow holds its own
    /// transient state, so no loading phase is involved.
    ///
    /// # Errors
    ///
    /// * `SessionError::InvalidTransition` - a session is already active or
    ///   a login attempt is in flight
    pub fn complete_registration(&mut self, user: User, token: String) -> SessionResult<()> {
        if self.phase != AuthPhase::Anonymous {
            return Err(SessionError::InvalidTransition {
                from: self.phase,
                event: "complete registration",
            });
        }
        info!("session: registration committed for user {}", user.id);
        self.phase = AuthPhase::Authenticated;
        self.user = Some(user);
        self.token = Some(token);
        self.loading = false;
        Ok(())
    }

    /// Drop the session and return to anonymous.
    ///
    /// Accepted from any phase and always succeeds locally; no server call
    /// is involved.
    pub fn logout(&mut self) {
        debug!("session: logout");
        *self = Self::default();
    }

    /// Merge a partial update into the current user.
    ///
    /// # Errors
    ///
    /// * `SessionError::NoActiveSession` - no user is signed in
    pub fn update_profile(&mut self, update: ProfileUpdate) -> SessionResult<()> {
        let user = self.user.as_mut().ok_or(SessionError::NoActiveSession)?;
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(phone) = update.phone {
            user.phone = phone;
        }
        if let Some(has_password) = update.has_password {
            user.has_password = has_password;
        }
        if let Some(documents) = update.documents {
            user.documents = Some(documents);
        }
        Ok(())
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> AuthPhase {
        self.phase
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The bearer token for gateway calls, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether an identity and token are both present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// Whether a login attempt is in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }
}
