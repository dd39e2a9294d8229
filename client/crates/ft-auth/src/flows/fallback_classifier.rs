use crate::remote::error::RemoteError;

use ft_config::FallbackPolicy;

const LEGACY_MARKER: &str = "Invalid";

/// Whether a failed remote registration may be completed locally.
pub fn allows_local_registration(error: &RemoteError, policy: FallbackPolicy) -> bool {
    if error.is_network() {
        return true;
    }

    match policy {
        FallbackPolicy::NetworkOnly => false,
        FallbackPolicy::LegacyHeuristic => error
            .server_message()
            .is_some_and(|message| message.contains(LEGACY_MARKER)),
    }
}
