//! Object storage configuration for property images

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::env_or;

/// Object storage (Cloudinary-compatible upload API) configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Upload endpoint, e.g. `https://api.cloudinary.com/v1_1/<cloud>/image/upload`.
    /// When unset the server keeps images in memory.
    pub upload_url: Option<String>,

    /// Unsigned upload preset sent with every upload
    pub upload_preset: Option<String>,

    /// Folder images are stored under
    pub folder: String,

    /// Upload timeout in seconds
    pub timeout_secs: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_url: None,
            upload_preset: None,
            folder: String::from("properties"),
            timeout_secs: 30,
        }
    }
}

impl StorageConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            upload_url: std::env::var("STORAGE_UPLOAD_URL").ok(),
            upload_preset: std::env::var("STORAGE_UPLOAD_PRESET").ok(),
            folder: std::env::var("STORAGE_FOLDER").unwrap_or(defaults.folder),
            timeout_secs: env_or("STORAGE_UPLOAD_TIMEOUT_SECS", defaults.timeout_secs),
        }
    }

    /// Upload timeout, never shorter than one second
    pub fn upload_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_timeout_is_floored() {
        let mut config = StorageConfig::default();
        assert_eq!(config.upload_timeout(), Duration::from_secs(30));

        config.timeout_secs = 0;
        assert_eq!(config.upload_timeout(), Duration::from_secs(1));
    }
}
