use crate::flows::validation_error::ValidationError;
use crate::messages::{
    ALREADY_REGISTERED_LOCAL, LOGIN_FAILED, REGISTRATION_FAILED, STORAGE_UNAVAILABLE,
};
use crate::remote::error::RemoteError;
use crate::store::error::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Terminal failure of an auth flow.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Validation failed: {source} {location}")]
    Validation {
        #[source]
        source: ValidationError,
        location: ErrorLocation,
    },

    /// Remote login failed and no local account matched.
    #[error("Local fallback exhausted after remote failure: {cause} {location}")]
    LocalFallbackExhausted {
        cause: RemoteError,
        location: ErrorLocation,
    },

    /// The service refused a registration for a reason other than an outage.
    #[error("Registration rejected: {source} {location}")]
    RegistrationRejected {
        #[source]
        source: RemoteError,
        location: ErrorLocation,
    },

    #[error("Email already registered locally: {email} {location}")]
    AlreadyRegistered {
        email: String,
        location: ErrorLocation,
    },

    #[error("Session storage error: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Text surfaced to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { source, .. } => source.message().to_string(),
            Self::LocalFallbackExhausted { cause, .. } => cause
                .server_message()
                .unwrap_or(LOGIN_FAILED)
                .to_string(),
            Self::RegistrationRejected { source, .. } => source
                .server_message()
                .unwrap_or(REGISTRATION_FAILED)
                .to_string(),
            Self::AlreadyRegistered { .. } => ALREADY_REGISTERED_LOCAL.to_string(),
            Self::Store { .. } => STORAGE_UNAVAILABLE.to_string(),
        }
    }

    /// Creates Validation error at caller location.
    #[track_caller]
    pub fn validation(source: ValidationError) -> Self {
        Self::Validation {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates LocalFallbackExhausted error at caller location.
    #[track_caller]
    pub fn local_fallback_exhausted(cause: RemoteError) -> Self {
        Self::LocalFallbackExhausted {
            cause,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates RegistrationRejected error at caller location.
    #[track_caller]
    pub fn registration_rejected(source: RemoteError) -> Self {
        Self::RegistrationRejected {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates AlreadyRegistered error at caller location.
    #[track_caller]
    pub fn already_registered(email: impl Into<String>) -> Self {
        Self::AlreadyRegistered {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for AuthError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ValidationError> for AuthError {
    #[track_caller]
    fn from(source: ValidationError) -> Self {
        Self::validation(source)
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
