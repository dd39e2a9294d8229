mod api_config;
mod config;
mod connectivity_config;
mod error;
mod fallback_policy;
mod log_level;
mod logging_config;
mod session_config;
mod storage_config;
mod ui_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use connectivity_config::ConnectivityConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use fallback_policy::FallbackPolicy;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;
pub use storage_config::StorageConfig;
pub use ui_config::UiConfig;

const CONFIG_DIR_ENV: &str = "FT_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".fintrack";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
const DEFAULT_STORAGE_FILE: &str = "session.json";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
