//! Two-phase registration flow controller.

use super::{
    errors::{RegistrationError, RegistrationResult},
    models::{ContactDetails, DocumentHandoff, RegistrationDraft, RegistrationForm},
};
use crate::gateway::messages::AuthPayload;
use crate::gateway::AuthGateway;
use crate::session::{persist::SessionFile, SessionStore};
use log::{info, warn};

/// Which step of the signup the flow is on. There are only two here; the
/// document step that follows belongs to the upload gate.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RegistrationStep {
    #[default]
    Credentials,
    Otp,
}

/// Orchestrates the two-phase signup: credentials → OTP verification.
///
/// The controller owns the transient [`RegistrationDraft`] between the two
/// phases. Nothing touches the session store until verification succeeds;
/// on success the identity is committed, the durable session record is
/// written, and control transfers to the document step via the returned
/// handoff. A rejected step leaves all prior state untouched so the user
/// can correct and retry.
pub struct RegistrationFlow<G> {
    gateway: G,
    draft: Option<RegistrationDraft>,
}

impl<G: AuthGateway + Sync> RegistrationFlow<G> {
    /// Create a flow at the credentials step.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            draft: None,
        }
    }

    /// The current step, derived from draft presence.
    pub fn step(&self) -> RegistrationStep {
        if self.draft.is_some() {
            RegistrationStep::Otp
        } else {
            RegistrationStep::Credentials
        }
    }

    /// The retained draft while on the OTP step.
    pub fn draft(&self) -> Option<&RegistrationDraft> {
        self.draft.as_ref()
    }

    /// Phase one: validate the form and ask the server to send an OTP.
    ///
    /// On success the full form plus the server's verification hash are
    /// retained as the draft and the flow moves to the OTP step. On failure
    /// the flow stays at the credentials step with no draft.
    ///
    /// # Errors
    ///
    /// * `RegistrationError::Invalid` - the form fails client-side checks;
    ///   nothing is sent
    /// * `RegistrationError::Gateway` - the server rejected the email or the
    ///   request never completed
    pub async fn submit_credentials(&mut self, form: RegistrationForm) -> RegistrationResult<()> {
        form.validate()?;
        let challenge = self.gateway.request_otp(&form.email).await?;
        info!("registration: otp issued for {}", form.email);
        self.draft = Some(RegistrationDraft::new(form, challenge.hash));
        Ok(())
    }

    /// Phase two: verify the OTP and commit the resulting identity.
    ///
    /// The OTP is passed through as typed; the server is the sole authority
    /// on its correctness. On success the session store commits, the durable
    /// `{user, token}` record is written, the draft is discarded, and the
    /// handoff context for the document step is returned. On rejection the
    /// draft is retained so the user can retry without re-entering the form.
    ///
    /// # Errors
    ///
    /// * `RegistrationError::NotInOtpStep` - no credentials were submitted
    /// * `RegistrationError::Gateway` - verification rejected; session store
    ///   and draft are untouched
    /// * `RegistrationError::Session` - the session store refused the commit
    ///   (e.g. already authenticated); the draft is retained
    pub async fn verify_otp(
        &mut self,
        session: &mut SessionStore,
        session_file: &SessionFile,
        otp: &str,
    ) -> RegistrationResult<DocumentHandoff> {
        let draft = self.draft.as_ref().ok_or(RegistrationError::NotInOtpStep)?;
        let request = draft.register_request(otp);
        let AuthPayload { user, token } = self.gateway.register(&request).await?;

        session.complete_registration(user.clone(), token.clone())?;
        if let Err(error) = session_file.save(&user, &token) {
            // The session is committed either way; restore just won't
            // survive a restart.
            warn!("registration: session record not written: {error}");
        }
        info!("registration: verified and committed user {}", user.id);

        let form = draft.form();
        let handoff = DocumentHandoff {
            user_type: form.user_type,
            user_data: ContactDetails {
                name: form.name.clone(),
                email: form.email.clone(),
                phone: form.phone.clone(),
            },
        };
        self.draft = None;
        Ok(handoff)
    }

    /// Abandon the signup: discard the draft and return to the credentials
    /// step.
    pub fn abandon(&mut self) {
        self.draft = None;
    }
}
