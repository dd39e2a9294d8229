use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

pub const MIN_ERROR_DISMISS_MS: u64 = 100;
pub const MAX_ERROR_DISMISS_MS: u64 = 60_000;
pub const DEFAULT_ERROR_DISMISS_MS: u64 = 3_000;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long an inline error message stays visible
    pub error_dismiss_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            error_dismiss_ms: DEFAULT_ERROR_DISMISS_MS,
        }
    }
}

impl UiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.error_dismiss_ms < MIN_ERROR_DISMISS_MS
            || self.error_dismiss_ms > MAX_ERROR_DISMISS_MS
        {
            return Err(ConfigError::config(format!(
                "ui.error_dismiss_ms must be {}-{}, got {}",
                MIN_ERROR_DISMISS_MS, MAX_ERROR_DISMISS_MS, self.error_dismiss_ms
            )));
        }

        Ok(())
    }

    pub fn error_dismiss(&self) -> Duration {
        Duration::from_millis(self.error_dismiss_ms)
    }
}
