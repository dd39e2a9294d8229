use crate::messages::{AGREE_TO_TERMS, FILL_ALL_FIELDS, PASSWORDS_DO_NOT_MATCH};

use thiserror::Error;

/// Local, pre-network form validation failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", FILL_ALL_FIELDS)]
    MissingFields,

    #[error("{}", PASSWORDS_DO_NOT_MATCH)]
    PasswordMismatch,

    #[error("{}", AGREE_TO_TERMS)]
    TermsNotAccepted,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingFields => FILL_ALL_FIELDS,
            Self::PasswordMismatch => PASSWORDS_DO_NOT_MATCH,
            Self::TermsNotAccepted => AGREE_TO_TERMS,
        }
    }
}
