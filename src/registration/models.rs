//! Registration form, draft, and handoff models.

use super::errors::ValidationError;
use crate::gateway::messages::RegisterRequest;
use crate::session::passwords::MIN_PASSWORD_LEN;
use crate::session::UserType;

/// The credentials form as submitted by the user.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub user_type: UserType,
}

impl RegistrationForm {
    /// Field-level validation, applied before anything leaves the client.
    ///
    /// # Errors
    ///
    /// * `ValidationError::EmptyName` - name is blank
    /// * `ValidationError::InvalidEmail` - email is not addressable
    /// * `ValidationError::InvalidPhone` - fewer than ten digits
    /// * `ValidationError::WeakPassword` - shorter than the minimum length
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !looks_like_email(&self.email) {
            return Err(ValidationError::InvalidEmail(self.email.clone()));
        }
        if !looks_like_phone(&self.phone) {
            return Err(ValidationError::InvalidPhone(self.phone.clone()));
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(ValidationError::WeakPassword(format!(
                "must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        Ok(())
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
}

fn looks_like_phone(phone: &str) -> bool {
    let digits: Vec<char> = phone
        .trim_start_matches('+')
        .chars()
        .filter(|&c| !matches!(c, ' ' | '-'))
        .collect();
    digits.len() >= 10 && digits.iter().all(char::is_ascii_digit)
}

/// The transient state held between credential submission and OTP
/// verification: the full form plus the server's verification hash.
///
/// Never persisted and never merged into the session store; discarded on
/// successful verification or explicit abandonment, retained across failed
/// verification attempts so the user can retry without re-entering the form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistrationDraft {
    form: RegistrationForm,
    otp_hash: String,
}

impl RegistrationDraft {
    pub(crate) fn new(form: RegistrationForm, otp_hash: String) -> Self {
        Self { form, otp_hash }
    }

    /// The retained form (for display on the OTP screen).
    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    /// The server-issued hash correlating this draft to its OTP.
    pub fn otp_hash(&self) -> &str {
        &self.otp_hash
    }

    /// Assemble the verification payload. The OTP is passed through
    /// free-text; the server is the sole authority on its correctness.
    pub(crate) fn register_request(&self, otp: &str) -> RegisterRequest {
        RegisterRequest {
            name: self.form.name.clone(),
            email: self.form.email.clone(),
            password: self.form.password.clone(),
            otp: otp.to_owned(),
            hash: self.otp_hash.clone(),
            phone: self.form.phone.clone(),
            user_type: self.form.user_type,
        }
    }
}

/// Contact fields carried over to the document step.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Handoff context produced by successful verification, consumed by the
/// document upload step.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DocumentHandoff {
    pub user_type: UserType,
    pub user_data: ContactDetails,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RegistrationForm {
        RegistrationForm {
            name: "Asha".to_owned(),
            email: "asha@example.com".to_owned(),
            phone: "98765 43210".to_owned(),
            password: "hunter2222".to_owned(),
            user_type: UserType::Student,
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(form().validate().is_ok());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut bad = form();
        bad.name = "   ".to_owned();
        assert_eq!(bad.validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_unaddressable_emails_are_rejected() {
        for email in ["plainaddress", "@nolocal.com", "user@", "user@nodot", "user@.com"] {
            let mut bad = form();
            bad.email = email.to_owned();
            assert!(
                matches!(bad.validate(), Err(ValidationError::InvalidEmail(_))),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn test_phone_allows_spacing_and_country_code() {
        let mut ok = form();
        ok.phone = "+91 98765-43210".to_owned();
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_short_phone_is_rejected() {
        let mut bad = form();
        bad.phone = "12345".to_owned();
        assert!(matches!(bad.validate(), Err(ValidationError::InvalidPhone(_))));
    }

    #[test]
    fn test_short_password_is_rejected() {
        let mut bad = form();
        bad.password = "short".to_owned();
        assert!(matches!(bad.validate(), Err(ValidationError::WeakPassword(_))));
    }

    #[test]
    fn test_register_request_carries_draft_and_otp() {
        let draft = RegistrationDraft::new(form(), "H1".to_owned());
        let request = draft.register_request("000000");
        assert_eq!(request.hash, "H1");
        assert_eq!(request.otp, "000000");
        assert_eq!(request.email, "asha@example.com");
        assert_eq!(request.user_type, UserType::Student);
    }
}
