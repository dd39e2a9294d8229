use crate::flows::{login_form::is_missing, validation_error::ValidationError};

/// Signup form submission.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_terms: bool,
}

impl RegistrationForm {
    /// Checks run in order and the first failure wins: every field present,
    /// confirmation matches, terms accepted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            &self.full_name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ];
        if fields.iter().any(|field| is_missing(field)) {
            return Err(ValidationError::MissingFields);
        }

        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        if !self.agree_terms {
            return Err(ValidationError::TermsNotAccepted);
        }

        Ok(())
    }
}
