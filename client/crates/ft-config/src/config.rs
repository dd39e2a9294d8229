use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    ConnectivityConfig, LoggingConfig, SessionConfig, StorageConfig, UiConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub session: SessionConfig,
    pub connectivity: ConnectivityConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for FT_CONFIG_DIR env var, else use ./.fintrack/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply FT_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: FT_CONFIG_DIR > ./.fintrack/ > ~/.fintrack/ (when cwd is gone)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        match std::env::current_dir() {
            Ok(cwd) => Ok(cwd.join(CONFIG_DIR_NAME)),
            Err(_) => dirs::home_dir()
                .map(|home| home.join(CONFIG_DIR_NAME))
                .ok_or(ConfigError::NoHomeDir),
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.storage.validate()?;
        self.session.validate()?;
        self.connectivity.validate()?;
        self.ui.validate()?;
        Ok(())
    }

    /// Absolute path of the persisted session document.
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.storage.file))
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout {}s)",
            self.api.base_url, self.api.timeout_secs
        );
        info!("  storage: {}", self.storage.file);
        info!(
            "  session: redirect_delay={}ms, fallback={}",
            self.session.register_redirect_delay_ms, self.session.fallback_policy
        );
        info!(
            "  connectivity: probe every {}s",
            self.connectivity.probe_interval_secs
        );
        info!("  ui: error_dismiss={}ms", self.ui.error_dismiss_ms);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("FT_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_parse("FT_API_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Storage
        Self::apply_env_string("FT_STORAGE_FILE", &mut self.storage.file);

        // Session
        Self::apply_env_parse(
            "FT_REGISTER_REDIRECT_DELAY_MS",
            &mut self.session.register_redirect_delay_ms,
        );
        Self::apply_env_parse("FT_FALLBACK_POLICY", &mut self.session.fallback_policy);

        // Connectivity
        Self::apply_env_parse(
            "FT_PROBE_INTERVAL_SECS",
            &mut self.connectivity.probe_interval_secs,
        );

        // Ui
        Self::apply_env_parse("FT_ERROR_DISMISS_MS", &mut self.ui.error_dismiss_ms);

        // Logging
        Self::apply_env_parse("FT_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FT_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FT_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
