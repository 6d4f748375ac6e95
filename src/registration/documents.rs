//! Document upload gate.
//!
//! The required document set is a function of the user type; submission is
//! enabled only when every required document has a non-empty file reference
//! attached. The gate is a pure predicate; the actual upload transport is
//! an external collaborator.

use crate::session::UserType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The verification documents the marketplace knows about.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentKind {
    Aadhar,
    License,
    CollegeId,
    RollNumber,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Aadhar,
        DocumentKind::License,
        DocumentKind::CollegeId,
        DocumentKind::RollNumber,
    ];
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aadhar => write!(f, "aadhar"),
            Self::License => write!(f, "license"),
            Self::CollegeId => write!(f, "collegeId"),
            Self::RollNumber => write!(f, "rollNumber"),
        }
    }
}

/// The documents a user of the given type must attach before submission.
pub fn required_documents(user_type: UserType) -> &'static [DocumentKind] {
    match user_type {
        UserType::Student => &[
            DocumentKind::Aadhar,
            DocumentKind::License,
            DocumentKind::CollegeId,
        ],
        UserType::Renter => &[DocumentKind::Aadhar, DocumentKind::License],
    }
}

/// Accumulates attached file references during the document step.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DocumentChecklist {
    attached: HashMap<DocumentKind, String>,
}

impl DocumentChecklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach (or replace) the file reference for `kind`.
    pub fn attach(&mut self, kind: DocumentKind, reference: impl Into<String>) {
        self.attached.insert(kind, reference.into());
    }

    /// Remove the reference for `kind`, returning it if one was attached.
    pub fn detach(&mut self, kind: DocumentKind) -> Option<String> {
        self.attached.remove(&kind)
    }

    /// The reference attached for `kind`, if any.
    pub fn attached(&self, kind: DocumentKind) -> Option<&str> {
        self.attached.get(&kind).map(String::as_str)
    }

    /// How many of the required documents carry a usable reference.
    pub fn uploaded_count(&self, user_type: UserType) -> usize {
        required_documents(user_type)
            .iter()
            .filter(|kind| self.has_usable(**kind))
            .count()
    }

    /// The submission predicate: every required document for `user_type`
    /// has a non-empty reference attached.
    pub fn is_complete(&self, user_type: UserType) -> bool {
        required_documents(user_type)
            .iter()
            .all(|kind| self.has_usable(*kind))
    }

    fn has_usable(&self, kind: DocumentKind) -> bool {
        self.attached
            .get(&kind)
            .is_some_and(|reference| !reference.is_empty())
    }
}
