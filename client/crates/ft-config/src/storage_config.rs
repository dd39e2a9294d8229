use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_FILE};

use std::path::Path;

use serde::Deserialize;

/// Where the persisted session document lives, relative to the config dir
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file: String::from(DEFAULT_STORAGE_FILE),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.file.trim().is_empty() {
            return Err(ConfigError::storage("storage.file cannot be empty"));
        }

        let path = Path::new(&self.file);
        if path.is_absolute() || self.file.contains("..") {
            return Err(ConfigError::storage(
                "storage.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
