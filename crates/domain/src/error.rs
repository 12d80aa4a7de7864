//! Common error types used across the workspace.
//!
//! Adapters define their own typed errors and convert into [`ClientError`]
//! at the port boundary (see `terrarium-adapter-http-reqwest`).

/// Failure talking to the terrarium controller.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a readable response (connect, timeout, IO).
    #[error("controller request failed")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The response body was not the JSON shape we expected.
    #[error("malformed controller response")]
    Decode(#[from] serde_json::Error),

    /// A successful reply carried no `data` payload.
    #[error("controller reply has no data")]
    MissingData,

    /// The controller answered with a non-success status.
    #[error("controller rejected request ({status}): {message}")]
    Rejected { status: String, message: String },
}

impl ClientError {
    /// Whether this failure happened before any response could be read.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
