use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    #[error("timed out")]
    Timeout,
    #[error("connection failed")]
    Connect,
    #[error("request failed")]
    Other,
}

impl TransportKind {
    #[must_use]
    pub fn classify(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connect
        } else {
            Self::Other
        }
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Unsupported base URL scheme '{scheme}'. Use http or https.")]
    UnsupportedScheme { scheme: String },
    #[error("API key is not a valid header value.")]
    InvalidToken {
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },
    #[error("Failed to build HTTP client: {source}")]
    BuildClient {
        #[source]
        source: reqwest::Error,
    },
    #[error("{kind} ({url}): {source}")]
    Transport {
        kind: TransportKind,
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP {status} for url ({url})")]
    Status { status: StatusCode, url: String },
}

impl ClientError {
    pub(crate) fn transport(url: &str, source: reqwest::Error) -> Self {
        Self::Transport {
            kind: TransportKind::classify(&source),
            url: url.to_owned(),
            source,
        }
    }

    /// Errors raised while building the client, before any request is made.
    #[must_use]
    pub const fn is_setup(&self) -> bool {
        matches!(
            self,
            Self::InvalidBaseUrl { .. }
                | Self::UnsupportedScheme { .. }
                | Self::InvalidToken { .. }
                | Self::BuildClient { .. }
        )
    }
}
