//! Registration error types.

use crate::gateway::GatewayError;
use crate::session::SessionError;
use thiserror::Error;

/// Client-side, field-level form errors.
///
/// Resolved entirely within the form layer: a form that fails validation
/// never produces a gateway call and never touches the session store.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ValidationError {
    #[error("name is required")]
    EmptyName,

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("password too weak: {0}")]
    WeakPassword(String),
}

/// Errors raised by the registration flow.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The gateway rejected the step; the step (and the draft, when one
    /// exists) is left intact for retry.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Committing the verified identity was refused by the session store.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// OTP verification was attempted with no credentials submitted.
    #[error("no verification in progress")]
    NotInOtpStep,
}

/// Result type for registration flow operations.
pub type RegistrationResult<T> = Result<T, RegistrationError>;
