use std::io::Error as IoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SystemEntry {
    #[error("Online now")]
    Online,
    #[error("Initializing")]
    Initializing,
    #[error("Initialization completed")]
    InitializeComplete,
    #[error("Termination in process")]
    Terminating,
    #[error("Termination completed")]
    TerminateComplete,
    #[error("Invalid configuration")]
    InvalidConfig,
    #[error("Configuration not found")]
    ConfigNotFound,
    #[error("Configuration updated")]
    ConfigUpdated,
    #[error("Web service ready")]
    WebReady,
    #[error("Failed to bind port: {0}")]
    BindPortError(IoError),
    #[error("Web service panic: {0}")]
    WebPanic(IoError),
    #[error("Font loaded from {0}")]
    FontLoaded(String),
    #[error("Font unavailable, labels will not be drawn")]
    FontUnavailable,
}

impl From<SystemEntry> for String {
    #[inline(always)]
    fn from(value: SystemEntry) -> Self {
        value.to_string()
    }
}
