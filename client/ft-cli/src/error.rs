use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ft_config::ConfigError),

    #[error("{0}")]
    Auth(#[from] ft_auth::AuthError),

    #[error("Store error: {0}")]
    Store(#[from] ft_auth::StoreError),

    #[error("Remote client error: {0}")]
    Remote(#[from] ft_auth::RemoteError),

    #[error("Failed to start runtime: {source} {location}")]
    Runtime {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    /// Creates Runtime error at caller location.
    #[track_caller]
    pub fn runtime(source: std::io::Error) -> Self {
        Self::Runtime {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Logger error at caller location.
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
