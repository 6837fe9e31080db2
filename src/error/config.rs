use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config patch '{path}': {source}")]
    ReadPatch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse JSON config patch '{path}': {source}")]
    ParseFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to parse inline config patch: {source}")]
    ParseInline {
        #[source]
        source: serde_json::Error,
    },
    #[error("Config patch must be a JSON object, got {found}.")]
    NotAnObject { found: &'static str },
}
