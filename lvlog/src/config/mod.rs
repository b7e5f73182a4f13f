use crate::error::LogError;
use crate::level::Severity;
use ::config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Logger settings: threshold and optional destination file.
///
/// ```toml
/// level = "notice"
/// file = "logs/app.log"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub level: Severity,
    /// Console when absent.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl LogConfig {
    /// Load from a config file; the format follows the file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LogError> {
        let path = path.as_ref();
        let settings = Config::builder()
            .add_source(File::from(path))
            .build()
            .map_err(|e| LogError::Config {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        settings.try_deserialize().map_err(|e| LogError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
