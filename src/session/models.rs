//! Session identity models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the marketplace an account is on.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Rents vehicles.
    Student,
    /// Lists vehicles for rent.
    Renter,
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => write!(f, "student"),
            Self::Renter => write!(f, "renter"),
        }
    }
}

/// Opaque references to a user's uploaded verification documents.
///
/// Each field holds a server-issued reference string, not file contents.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocuments {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aadhar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll_number: Option<String>,
}

impl UserDocuments {
    /// Whether every document reference is present and non-empty.
    pub fn is_complete(&self) -> bool {
        [&self.aadhar, &self.license, &self.college_id, &self.roll_number]
            .into_iter()
            .all(|reference| reference.as_deref().is_some_and(|value| !value.is_empty()))
    }
}

/// The current user's identity record.
///
/// Owned exclusively by the session store: replaced wholesale on
/// login/registration, cleared on logout.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub user_type: UserType,
    /// False for accounts created through a social/OTP-only path; the server
    /// may omit the field entirely.
    #[serde(default)]
    pub has_password: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<UserDocuments>,
}

impl User {
    /// Whether the profile is complete.
    ///
    /// Derived on read: true iff all four document references are present
    /// and non-empty. Never stored separately.
    pub fn profile_completed(&self) -> bool {
        self.documents.as_ref().is_some_and(UserDocuments::is_complete)
    }
}

/// A partial profile update; `Some` fields are merged into the current user.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_password: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<UserDocuments>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn documents(
        aadhar: Option<&str>,
        license: Option<&str>,
        college_id: Option<&str>,
        roll_number: Option<&str>,
    ) -> UserDocuments {
        UserDocuments {
            aadhar: aadhar.map(str::to_owned),
            license: license.map(str::to_owned),
            college_id: college_id.map(str::to_owned),
            roll_number: roll_number.map(str::to_owned),
        }
    }

    fn user_with(docs: Option<UserDocuments>) -> User {
        User {
            id: "u1".to_owned(),
            name: "Asha".to_owned(),
            email: "asha@example.com".to_owned(),
            phone: "9876543210".to_owned(),
            user_type: UserType::Student,
            has_password: true,
            documents: docs,
        }
    }

    #[test]
    fn test_profile_completed_requires_all_four_documents() {
        let complete = documents(Some("d1"), Some("d2"), Some("d3"), Some("d4"));
        assert!(user_with(Some(complete)).profile_completed());

        let missing_roll = documents(Some("d1"), Some("d2"), Some("d3"), None);
        assert!(!user_with(Some(missing_roll)).profile_completed());
    }

    #[test]
    fn test_profile_completed_rejects_empty_references() {
        let empty_license = documents(Some("d1"), Some(""), Some("d3"), Some("d4"));
        assert!(!user_with(Some(empty_license)).profile_completed());
    }

    #[test]
    fn test_profile_completed_without_documents() {
        assert!(!user_with(None).profile_completed());
    }

    #[test]
    fn test_user_wire_format_is_camel_case() {
        let user = user_with(None);
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["userType"], "student");
        assert_eq!(json["hasPassword"], true);
        assert!(json.get("documents").is_none());
    }

    #[test]
    fn test_user_deserializes_with_server_extras() {
        // Servers may send fields the client derives locally; they are ignored.
        let raw = r#"{
            "id": "u1",
            "name": "Asha",
            "email": "asha@example.com",
            "phone": "9876543210",
            "userType": "renter",
            "profileCompleted": true
        }"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.user_type, UserType::Renter);
        assert!(!user.has_password);
        assert!(!user.profile_completed());
    }
}
