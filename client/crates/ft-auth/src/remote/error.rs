use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure of a call to the remote auth service.
///
/// The transport layer decides the variant, so callers never inspect
/// message text to tell an outage from a rejection.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// No usable response: connection refused, DNS failure, timeout, or a
    /// gateway reporting the service behind it as down.
    #[error("Service unreachable: {message} {location}")]
    Unreachable {
        message: String,
        location: ErrorLocation,
    },

    /// The service answered with a non-success status.
    #[error("Service rejected request (status {status}): {} {location}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        message: Option<String>,
        location: ErrorLocation,
    },

    /// Success status but a body that does not match the contract.
    #[error("Invalid response from service: {message} {location}")]
    InvalidResponse {
        message: String,
        location: ErrorLocation,
    },
}

impl RemoteError {
    /// Network-level problem, as opposed to the service saying no.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }

    /// Message supplied by the service, when it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Creates Unreachable error at caller location.
    #[track_caller]
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Unreachable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Rejected error at caller location.
    #[track_caller]
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        Self::Rejected {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates InvalidResponse error at caller location.
    #[track_caller]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, RemoteError>;
