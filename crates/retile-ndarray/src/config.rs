use alloc::format;
use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

/// Number of output elements from which the resize kernel runs in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 32 * 1024;

/// Smallest number of output elements written by a single parallel task.
pub const DEFAULT_MIN_BLOCK_LEN: usize = 4096;

/// Configuration IO error.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Invalid format.
    #[error("Config error => Invalid format: {0}")]
    InvalidFormat(String),

    /// File not found.
    #[error("Config error => File not found: {0}")]
    FileNotFound(String),
}

/// Configuration of the [resize](crate::resize) operation.
///
/// The configuration only tunes how the work is scheduled; the output never depends on it.
#[derive(new, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeConfig {
    /// Outputs with fewer elements are filled on the calling thread.
    #[new(value = "DEFAULT_PARALLEL_THRESHOLD")]
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,

    /// Lower bound of the number of elements written by one parallel task.
    #[new(value = "DEFAULT_MIN_BLOCK_LEN")]
    #[serde(default = "default_min_block_len")]
    pub min_block_len: usize,
}

fn default_parallel_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

fn default_min_block_len() -> usize {
    DEFAULT_MIN_BLOCK_LEN
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ResizeConfig {
    /// Sets the number of output elements from which the kernel runs in parallel.
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Sets the lower bound of the number of elements written by one parallel task.
    pub fn with_min_block_len(mut self, min_block_len: usize) -> Self {
        self.min_block_len = min_block_len;
        self
    }

    /// Serializes the configuration to pretty printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|err| ConfigError::InvalidFormat(err.to_string()))
    }

    /// Loads the configuration from a binary buffer holding JSON.
    pub fn load_binary(data: &[u8]) -> Result<Self, ConfigError> {
        let content = core::str::from_utf8(data).map_err(|_| {
            ConfigError::InvalidFormat("Could not parse data as utf-8.".to_string())
        })?;

        serde_json::from_str(content).map_err(|err| ConfigError::InvalidFormat(format!("{err}")))
    }

    /// Saves the configuration to a file.
    #[cfg(feature = "std")]
    pub fn save<P: AsRef<std::path::Path>>(&self, file: P) -> std::io::Result<()> {
        let json = self
            .to_json()
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
        std::fs::write(file, json)
    }

    /// Loads the configuration from a file.
    #[cfg(feature = "std")]
    pub fn load<P: AsRef<std::path::Path>>(file: P) -> Result<Self, ConfigError> {
        let content = std::fs::read(file.as_ref())
            .map_err(|_| ConfigError::FileNotFound(file.as_ref().to_string_lossy().to_string()))?;
        Self::load_binary(&content)
    }
}
