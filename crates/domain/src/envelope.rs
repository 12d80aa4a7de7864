//! Reply envelope — the `{status, data, message, meta}` wrapper the
//! controller puts around most of its answers.
//!
//! Classification depends on the body only: a reply is successful when
//! `status == "success"`, whatever the HTTP status code was.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Status string marking a successful reply.
pub const SUCCESS: &str = "success";

/// Raw reply as received from the controller.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Envelope {
    pub status: Option<String>,
    pub data: Option<serde_json::Value>,
    pub message: Option<String>,
    pub meta: Option<serde_json::Value>,
}

/// Classified reply: either the decoded payload or the failure status.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    Success(T),
    Failure {
        status: String,
        message: Option<String>,
    },
}

impl Envelope {
    /// Whether the controller reported success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(SUCCESS)
    }

    /// Classify the reply and decode `data` when it is successful.
    ///
    /// `data` is only looked at on success, so a failure reply may carry
    /// anything (or nothing) there.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingData`] when a successful reply has no
    /// `data`, or [`ClientError::Decode`] when `data` has the wrong shape.
    pub fn into_reply<T: DeserializeOwned>(self) -> Result<Reply<T>, ClientError> {
        if !self.is_success() {
            return Ok(Reply::Failure {
                status: self.status.unwrap_or_default(),
                message: self.message,
            });
        }
        let data = self.data.ok_or(ClientError::MissingData)?;
        Ok(Reply::Success(serde_json::from_value(data)?))
    }

    /// Like [`into_reply`](Self::into_reply) but turns a failure status into
    /// [`ClientError::Rejected`].
    ///
    /// # Errors
    ///
    /// Same as [`into_reply`](Self::into_reply), plus `Rejected` on failure.
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T, ClientError> {
        match self.into_reply()? {
            Reply::Success(value) => Ok(value),
            Reply::Failure { status, message } => Err(ClientError::Rejected {
                status,
                message: message.unwrap_or_default(),
            }),
        }
    }

    /// Message of a successful command reply that carries no `data`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] when the controller reported a
    /// failure.
    pub fn into_message(self) -> Result<String, ClientError> {
        if self.is_success() {
            return Ok(self.message.unwrap_or_default());
        }
        Err(ClientError::Rejected {
            status: self.status.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
        })
    }
}
