//! Gateway error types.

use thiserror::Error;

/// Errors that can occur talking to the remote gateway.
///
/// Either kind aborts the current flow step and leaves prior state
/// untouched; the display text is what gets surfaced to the user for
/// correction and retry. There is no automatic retry.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The server rejected the call. Carries the server's message verbatim,
    /// or the calling endpoint's fallback text when the response had none.
    #[error("{0}")]
    Rejected(String),

    /// The request never completed (connection, DNS, malformed body).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type for gateway calls.
pub type GatewayResult<T> = Result<T, GatewayError>;
