//! HTTP gateway client.

use super::{
    errors::{GatewayError, GatewayResult},
    messages::{
        AuthPayload, ChangePasswordRequest, OtpChallenge, OtpRequest, RegisterRequest,
        SetPasswordRequest,
    },
};
use crate::config::ClientConfig;
use async_trait::async_trait;
use log::warn;
use serde::Deserialize;

// Fallback texts shown when a rejection carries no message body.
const OTP_FALLBACK: &str = "Registration failed";
const REGISTER_FALLBACK: &str = "OTP verification failed";
const SET_PASSWORD_FALLBACK: &str = "Failed to set password";
const CHANGE_PASSWORD_FALLBACK: &str = "Failed to change password";

/// The remote gateway boundary.
///
/// Every call is a single asynchronous request/response: no retry, no
/// backoff, no cancellation, no timeout, and no de-duplication of in-flight
/// calls. A call either resolves or rejects, suspending only the calling
/// flow.
#[async_trait]
pub trait AuthGateway {
    /// Ask the server to send an OTP to `email`. Resolves to the opaque
    /// verification hash tied to that OTP.
    async fn request_otp(&self, email: &str) -> GatewayResult<OtpChallenge>;

    /// Finalize registration by verifying the OTP. The server is the sole
    /// authority on OTP correctness.
    async fn register(&self, request: &RegisterRequest) -> GatewayResult<AuthPayload>;

    /// Set an initial password for the bearer of `token`.
    async fn set_password(&self, token: &str, new_password: &str) -> GatewayResult<()>;

    /// Change the password for the bearer of `token`.
    async fn change_password(
        &self,
        token: &str,
        current_password: &str,
        new_password: &str,
    ) -> GatewayResult<()>;
}

/// Rejection body shape; servers send `{"message": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// `reqwest`-backed gateway implementation.
pub struct HttpGateway {
    base_url: String,
    client: reqwest::Client,
}

impl HttpGateway {
    /// Create a gateway rooted at `base_url` (e.g. `http://localhost:5000/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Create a gateway from client configuration.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-success response into the message the user should see:
    /// the server's own message when present, `fallback` otherwise.
    async fn reject(response: reqwest::Response, fallback: &str) -> GatewayError {
        let status = response.status();
        let message = match response.json::<ErrorBody>().await {
            Ok(ErrorBody {
                message: Some(message),
            }) => message,
            _ => fallback.to_owned(),
        };
        warn!("gateway: call rejected ({status}): {message}");
        GatewayError::Rejected(message)
    }
}

#[async_trait]
impl AuthGateway for HttpGateway {
    async fn request_otp(&self, email: &str) -> GatewayResult<OtpChallenge> {
        let response = self
            .client
            .post(self.endpoint("/user/send-otp"))
            .json(&OtpRequest {
                email: email.to_owned(),
            })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::reject(response, OTP_FALLBACK).await);
        }
        Ok(response.json().await?)
    }

    async fn register(&self, request: &RegisterRequest) -> GatewayResult<AuthPayload> {
        let response = self
            .client
            .post(self.endpoint("/user/register"))
            .json(request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::reject(response, REGISTER_FALLBACK).await);
        }
        Ok(response.json().await?)
    }

    async fn set_password(&self, token: &str, new_password: &str) -> GatewayResult<()> {
        let response = self
            .client
            .post(self.endpoint("/user/set-password"))
            .bearer_auth(token)
            .json(&SetPasswordRequest {
                new_password: new_password.to_owned(),
            })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::reject(response, SET_PASSWORD_FALLBACK).await);
        }
        Ok(())
    }

    async fn change_password(
        &self,
        token: &str,
        current_password: &str,
        new_password: &str,
    ) -> GatewayResult<()> {
        let response = self
            .client
            .post(self.endpoint("/user/change-password"))
            .bearer_auth(token)
            .json(&ChangePasswordRequest {
                current_password: current_password.to_owned(),
                new_password: new_password.to_owned(),
            })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::reject(response, CHANGE_PASSWORD_FALLBACK).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let gateway = HttpGateway::new("http://localhost:5000/api/");
        assert_eq!(
            gateway.endpoint("/user/send-otp"),
            "http://localhost:5000/api/user/send-otp"
        );
    }
}
