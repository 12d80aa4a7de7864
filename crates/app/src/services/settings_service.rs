//! Settings service — read, patch and reset the controller configuration.

use terrarium_domain::error::ClientError;
use terrarium_domain::settings::{Settings, SettingsPatch};

use crate::ports::SettingsApi;

/// Application service for the controller settings.
pub struct SettingsService<A> {
    api: A,
}

impl<A: SettingsApi> SettingsService<A> {
    /// Create a new service backed by the given controller.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Read the current settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] when the controller refuses, or a
    /// transport/decode error.
    pub async fn settings(&self) -> Result<Settings, ClientError> {
        self.api.fetch_settings().await
    }

    /// Send `patch` and return the settings the controller now holds.
    ///
    /// An empty patch is not sent; the current settings are returned as is.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] when the controller refuses the
    /// update, or a transport/decode error.
    pub async fn update(&self, patch: &SettingsPatch) -> Result<Settings, ClientError> {
        if patch.is_empty() {
            tracing::debug!("empty settings patch, nothing to send");
        } else {
            let message = self.api.update_settings(patch).await?;
            tracing::info!(%message, "settings updated");
        }
        self.api.fetch_settings().await
    }

    /// Restore the controller defaults and return its message.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] when the controller refuses, or a
    /// transport/decode error.
    pub async fn reset(&self) -> Result<String, ClientError> {
        let message = self.api.reset_settings().await?;
        tracing::info!(%message, "settings reset to defaults");
        Ok(message)
    }
}
