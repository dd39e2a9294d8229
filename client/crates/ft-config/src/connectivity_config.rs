use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

pub const MIN_PROBE_INTERVAL_SECS: u64 = 1;
pub const MAX_PROBE_INTERVAL_SECS: u64 = 3600;
pub const DEFAULT_PROBE_INTERVAL_SECS: u64 = 10;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConnectivityConfig {
    /// Seconds between reachability probes
    pub probe_interval_secs: u64,
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            probe_interval_secs: DEFAULT_PROBE_INTERVAL_SECS,
        }
    }
}

impl ConnectivityConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.probe_interval_secs < MIN_PROBE_INTERVAL_SECS
            || self.probe_interval_secs > MAX_PROBE_INTERVAL_SECS
        {
            return Err(ConfigError::config(format!(
                "connectivity.probe_interval_secs must be {}-{}, got {}",
                MIN_PROBE_INTERVAL_SECS, MAX_PROBE_INTERVAL_SECS, self.probe_interval_secs
            )));
        }

        Ok(())
    }

    pub fn probe_interval(&self) -> Duration {
        Duration::from_secs(self.probe_interval_secs)
    }
}
