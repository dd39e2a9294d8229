use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Which remote registration failures may fall back to a local account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Only transport failures and gateway outages.
    #[default]
    NetworkOnly,
    /// Also any rejection whose message mentions "Invalid". Masks real
    /// validation errors from the server, kept for compatibility only.
    LegacyHeuristic,
}

impl FromStr for FallbackPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "network_only" | "network-only" => Ok(Self::NetworkOnly),
            "legacy_heuristic" | "legacy-heuristic" => Ok(Self::LegacyHeuristic),
            other => Err(format!("unknown fallback policy '{other}'")),
        }
    }
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NetworkOnly => write!(f, "network_only"),
            Self::LegacyHeuristic => write!(f, "legacy_heuristic"),
        }
    }
}
