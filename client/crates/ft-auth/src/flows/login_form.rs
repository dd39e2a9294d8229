use crate::flows::validation_error::ValidationError;

/// Login form submission.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>, remember_me: bool) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            remember_me,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if is_missing(&self.email) || is_missing(&self.password) {
            return Err(ValidationError::MissingFields);
        }
        Ok(())
    }
}

/// Only an empty value is missing; whitespace is accepted as typed.
pub(crate) fn is_missing(value: &str) -> bool {
    value.is_empty()
}
