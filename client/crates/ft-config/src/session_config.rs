use crate::{ConfigError, ConfigErrorResult, FallbackPolicy};

use std::time::Duration;

use serde::Deserialize;

pub const MAX_REGISTER_REDIRECT_DELAY_MS: u64 = 60_000;
pub const DEFAULT_REGISTER_REDIRECT_DELAY_MS: u64 = 1_500;

/// Login/registration flow settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Delay between the registration success notice and the jump to login
    pub register_redirect_delay_ms: u64,
    pub fallback_policy: FallbackPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            register_redirect_delay_ms: DEFAULT_REGISTER_REDIRECT_DELAY_MS,
            fallback_policy: FallbackPolicy::default(),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.register_redirect_delay_ms > MAX_REGISTER_REDIRECT_DELAY_MS {
            return Err(ConfigError::session(format!(
                "session.register_redirect_delay_ms must be <= {}, got {}",
                MAX_REGISTER_REDIRECT_DELAY_MS, self.register_redirect_delay_ms
            )));
        }

        Ok(())
    }

    pub fn register_redirect_delay(&self) -> Duration {
        Duration::from_millis(self.register_redirect_delay_ms)
    }
}
