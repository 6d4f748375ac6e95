//! Password management for the active session.
//!
//! Both calls go through the gateway with the session's bearer token; the
//! session store itself is only touched to keep `has_password` current after
//! a successful set.

use super::{models::ProfileUpdate, store::SessionStore};
use crate::gateway::{AuthGateway, GatewayError};
use thiserror::Error;

/// Minimum accepted password length, shared with the registration form.
pub(crate) const MIN_PASSWORD_LEN: usize = 8;

/// Errors raised by password management.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// No session token to authenticate the call with.
    #[error("no active session")]
    NoActiveSession,

    /// The new password fails the client-side strength check. Never sent to
    /// the server.
    #[error("password too weak: {0}")]
    WeakPassword(String),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

fn check_strength(new_password: &str) -> Result<(), PasswordError> {
    if new_password.len() < MIN_PASSWORD_LEN {
        return Err(PasswordError::WeakPassword(format!(
            "must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// Set an initial password for the signed-in user.
///
/// On success the current user's `has_password` flag is updated in place.
///
/// # Errors
///
/// * `PasswordError::NoActiveSession` - nobody is signed in
/// * `PasswordError::WeakPassword` - the password fails the strength check
/// * `PasswordError::Gateway` - the server rejected the call; prior state is
///   untouched
pub async fn set_password<G>(
    gateway: &G,
    session: &mut SessionStore,
    new_password: &str,
) -> Result<(), PasswordError>
where
    G: AuthGateway + Sync,
{
    check_strength(new_password)?;
    let token = session
        .token()
        .ok_or(PasswordError::NoActiveSession)?
        .to_owned();
    gateway.set_password(&token, new_password).await?;
    session
        .update_profile(ProfileUpdate {
            has_password: Some(true),
            ..ProfileUpdate::default()
        })
        .map_err(|_| PasswordError::NoActiveSession)
}

/// Change the signed-in user's password.
///
/// The current password is verified server-side only.
///
/// # Errors
///
/// Same conditions as [`set_password`].
pub async fn change_password<G>(
    gateway: &G,
    session: &SessionStore,
    current_password: &str,
    new_password: &str,
) -> Result<(), PasswordError>
where
    G: AuthGateway + Sync,
{
    check_strength(new_password)?;
    let token = session.token().ok_or(PasswordError::NoActiveSession)?;
    gateway
        .change_password(token, current_password, new_password)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::messages::{AuthPayload, OtpChallenge, RegisterRequest};
    use crate::gateway::GatewayResult;
    use crate::session::models::{User, UserType};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Accepts every password call and counts them; registration paths are
    /// never reached from here.
    #[derive(Default)]
    struct PasswordGateway {
        calls: AtomicUsize,
        reject_with: Option<String>,
    }

    #[async_trait]
    impl AuthGateway for PasswordGateway {
        async fn request_otp(&self, _email: &str) -> GatewayResult<OtpChallenge> {
            unreachable!("not a password call")
        }

        async fn register(&self, _request: &RegisterRequest) -> GatewayResult<AuthPayload> {
            unreachable!("not a password call")
        }

        async fn set_password(&self, _token: &str, _new_password: &str) -> GatewayResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reject_with {
                Some(message) => Err(GatewayError::Rejected(message.clone())),
                None => Ok(()),
            }
        }

        async fn change_password(
            &self,
            _token: &str,
            _current_password: &str,
            _new_password: &str,
        ) -> GatewayResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reject_with {
                Some(message) => Err(GatewayError::Rejected(message.clone())),
                None => Ok(()),
            }
        }
    }

    fn signed_in_session() -> SessionStore {
        let mut session = SessionStore::new();
        session
            .complete_registration(
                User {
                    id: "u1".to_owned(),
                    name: "Asha".to_owned(),
                    email: "asha@example.com".to_owned(),
                    phone: "9876543210".to_owned(),
                    user_type: UserType::Student,
                    has_password: false,
                    documents: None,
                },
                "T1".to_owned(),
            )
            .unwrap();
        session
    }

    #[tokio::test]
    async fn test_set_password_marks_has_password() {
        let gateway = PasswordGateway::default();
        let mut session = signed_in_session();
        set_password(&gateway, &mut session, "longenough").await.unwrap();
        assert!(session.user().unwrap().has_password);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_set_password_requires_session() {
        let gateway = PasswordGateway::default();
        let mut session = SessionStore::new();
        let result = set_password(&gateway, &mut session, "longenough").await;
        assert!(matches!(result, Err(PasswordError::NoActiveSession)));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_weak_password_never_reaches_gateway() {
        let gateway = PasswordGateway::default();
        let mut session = signed_in_session();
        let result = set_password(&gateway, &mut session, "short").await;
        assert!(matches!(result, Err(PasswordError::WeakPassword(_))));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
        assert!(!session.user().unwrap().has_password);
    }

    #[tokio::test]
    async fn test_rejected_change_surfaces_server_message() {
        let gateway = PasswordGateway {
            reject_with: Some("Current password is incorrect".to_owned()),
            ..PasswordGateway::default()
        };
        let session = signed_in_session();
        let result = change_password(&gateway, &session, "oldpassword", "newpassword").await;
        match result {
            Err(PasswordError::Gateway(error)) => {
                assert_eq!(error.to_string(), "Current password is incorrect");
            }
            other => panic!("expected gateway rejection, got {other:?}"),
        }
    }
}
