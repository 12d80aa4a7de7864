//! HTTP adapter error types.

use terrarium_domain::error::ClientError;

/// Errors specific to the HTTP adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The configured base URL cannot be used.
    #[error("invalid controller URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The reqwest client could not be built.
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    /// Connect, timeout or protocol failure before a response arrived.
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be read.
    #[error("failed to read response body")]
    Body(#[source] reqwest::Error),

    /// The response body is not the expected JSON.
    #[error("failed to decode response (HTTP {status})")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

impl HttpError {
    /// Convert into a [`ClientError`] for propagation across port boundaries.
    pub fn into_domain(self) -> ClientError {
        match self {
            Self::Decode { source, .. } => ClientError::Decode(source),
            other => ClientError::Transport(Box::new(other)),
        }
    }
}

impl From<HttpError> for ClientError {
    fn from(err: HttpError) -> Self {
        err.into_domain()
    }
}
