use thiserror::Error;

use super::{ClientError, ConfigError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("HTTP error: {0}")]
    Client(#[from] ClientError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    #[must_use]
    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    #[must_use]
    pub fn client<E>(error: E) -> Self
    where
        E: Into<ClientError>,
    {
        error.into().into()
    }

    /// Whether the error was caused by how the tool was invoked rather than by
    /// the device. Usage errors abort before any request is sent.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        match self {
            Self::Clap { .. } | Self::Config(_) => true,
            Self::Client(err) => err.is_setup(),
            Self::Io { .. } => false,
        }
    }
}
