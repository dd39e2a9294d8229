use std::fmt;

/// Outcome of a session resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    /// A token the service just accepted.
    AuthenticatedRemote,
    /// Local flags only, no verified token.
    AuthenticatedLocal,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Unauthenticated)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "unauthenticated"),
            Self::AuthenticatedRemote => write!(f, "authenticated (remote)"),
            Self::AuthenticatedLocal => write!(f, "authenticated (local)"),
        }
    }
}
