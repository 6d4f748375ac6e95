//! Wire payloads for the remote gateway.
//!
//! Field names match the server's JSON exactly (camelCase). These types are
//! the documented request/response shapes; nothing else crosses the boundary.

use crate::session::{User, UserType};
use serde::{Deserialize, Serialize};

/// Request body for OTP issuance.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpRequest {
    pub email: String,
}

/// Response to OTP issuance: an opaque token correlating this request to the
/// later verification call. Not the OTP itself.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpChallenge {
    pub hash: String,
}

/// Request body for registration finalization (OTP verification).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub otp: String,
    pub hash: String,
    pub phone: String,
    pub user_type: UserType,
}

/// Successful authentication payload: the committed identity plus bearer
/// token.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    pub user: User,
    pub token: String,
}

/// Request body for setting an initial password (bearer-authenticated).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPasswordRequest {
    pub new_password: String,
}

/// Request body for changing an existing password (bearer-authenticated).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_wire_names() {
        let request = RegisterRequest {
            name: "Asha".to_owned(),
            email: "a@b.com".to_owned(),
            password: "hunter22".to_owned(),
            otp: "000000".to_owned(),
            hash: "H1".to_owned(),
            phone: "9876543210".to_owned(),
            user_type: UserType::Student,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["userType"], "student");
        assert_eq!(json["otp"], "000000");
        assert_eq!(json["hash"], "H1");
    }

    #[test]
    fn test_password_request_wire_names() {
        let json = serde_json::to_value(ChangePasswordRequest {
            current_password: "old".to_owned(),
            new_password: "new".to_owned(),
        })
        .unwrap();
        assert_eq!(json["currentPassword"], "old");
        assert_eq!(json["newPassword"], "new");

        let json = serde_json::to_value(SetPasswordRequest {
            new_password: "new".to_owned(),
        })
        .unwrap();
        assert_eq!(json["newPassword"], "new");
    }

    #[test]
    fn test_auth_payload_parses_server_response() {
        let raw = r#"{
            "user": {
                "id": "u1",
                "name": "Asha",
                "email": "a@b.com",
                "phone": "9876543210",
                "userType": "student",
                "hasPassword": true
            },
            "token": "T1"
        }"#;
        let payload: AuthPayload = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.user.id, "u1");
        assert_eq!(payload.token, "T1");
    }
}
