//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Writing a rendered line to the output failed
    #[error("IO error while writing log line: {0}")]
    Io(#[from] std::io::Error),

    /// Unrecognized severity name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Unrecognized path display mode
    #[error("Invalid path mode: '{0}'")]
    InvalidPathMode(String),

    /// Another logger already owns the `log` facade
    #[error("Failed to install log bridge: {0}")]
    BridgeInstall(String),
}

impl LoggerError {
    pub fn invalid_level(name: impl Into<String>) -> Self {
        LoggerError::InvalidLevel(name.into())
    }

    pub fn invalid_path_mode(name: impl Into<String>) -> Self {
        LoggerError::InvalidPathMode(name.into())
    }

    pub fn bridge_install(message: impl Into<String>) -> Self {
        LoggerError::BridgeInstall(message.into())
    }
}
