use crate::messages::ONLINE_BANNER;
use crate::remote::reachability::Reachability;

use std::fmt;

/// Display-only online/offline signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityStatus {
    /// No probe has completed yet.
    #[default]
    Unknown,
    Online,
    Offline,
}

impl ConnectivityStatus {
    /// Banner text to show, if any. Offline shows nothing.
    pub fn banner_text(&self) -> Option<&'static str> {
        match self {
            Self::Online => Some(ONLINE_BANNER),
            Self::Unknown | Self::Offline => None,
        }
    }
}

impl From<Reachability> for ConnectivityStatus {
    fn from(reachability: Reachability) -> Self {
        match reachability {
            Reachability::Reachable => Self::Online,
            Reachability::Unreachable => Self::Offline,
        }
    }
}

impl fmt::Display for ConnectivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Online => write!(f, "online"),
            Self::Offline => write!(f, "offline"),
        }
    }
}
