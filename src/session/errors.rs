//! Session error types.

use super::store::AuthPhase;
use thiserror::Error;

/// Errors raised by session store transitions.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SessionError {
    /// A profile mutation was attempted while anonymous.
    #[error("no active session")]
    NoActiveSession,

    /// A transition was requested that the lifecycle does not allow from the
    /// current phase.
    #[error("can't {event} while {from}")]
    InvalidTransition {
        from: AuthPhase,
        event: &'static str,
    },
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
