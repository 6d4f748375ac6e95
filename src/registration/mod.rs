//! Two-phase registration and the document upload gate.
//!
//! Signup runs credentials → OTP verification → document collection. The
//! [`RegistrationFlow`] controller holds the transient draft between the
//! first two phases and commits into the session store only once the server
//! verifies the OTP; [`documents`] gates the third.

pub mod documents;
mod errors;
mod flow;
mod models;

pub use documents::{required_documents, DocumentChecklist, DocumentKind};
pub use errors::{RegistrationError, RegistrationResult, ValidationError};
pub use flow::{RegistrationFlow, RegistrationStep};
pub use models::{ContactDetails, DocumentHandoff, RegistrationDraft, RegistrationForm};
