//! Error types for Greeter.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GreeterError>;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("Failed to allocate hostname buffer of {capacity} bytes")]
    BufferAllocation { capacity: usize },

    #[error("Hostname query failed: {0}")]
    HostnameQuery(std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GreeterError {
    pub fn code(&self) -> i32 {
        match self {
            GreeterError::BufferAllocation { .. } => -32010,
            GreeterError::HostnameQuery(_) => -32011,
            GreeterError::Config(_) => -32020,
            GreeterError::Io(_) => -32006,
            GreeterError::Toml(_) => -32021,
            GreeterError::Json(_) => -32700,
        }
    }

    /// True for failures of a host facility (allocation, system call)
    /// rather than of user input.
    pub fn is_os_failure(&self) -> bool {
        matches!(
            self,
            GreeterError::BufferAllocation { .. } | GreeterError::HostnameQuery(_)
        )
    }

    /// True for failures caused by the configuration file.
    pub fn is_config_failure(&self) -> bool {
        matches!(self, GreeterError::Config(_) | GreeterError::Toml(_))
    }
}
