//! Settings port — read, patch and reset the controller configuration.

use std::future::Future;

use terrarium_domain::error::ClientError;
use terrarium_domain::settings::{Settings, SettingsPatch};

/// Access to the controller's persisted settings.
///
/// Command replies (`update`, `reset`) resolve to the controller's message;
/// a failure status in the body is a [`ClientError::Rejected`].
pub trait SettingsApi: Send + Sync {
    /// `GET /api/v1/settings`.
    fn fetch_settings(&self) -> impl Future<Output = Result<Settings, ClientError>> + Send;

    /// `PUT /api/v1/settings` with only the keys set in `patch`.
    fn update_settings(
        &self,
        patch: &SettingsPatch,
    ) -> impl Future<Output = Result<String, ClientError>> + Send;

    /// `POST /api/v1/settings/reset` — restores the controller defaults.
    fn reset_settings(&self) -> impl Future<Output = Result<String, ClientError>> + Send;
}

impl<T: SettingsApi> SettingsApi for std::sync::Arc<T> {
    fn fetch_settings(&self) -> impl Future<Output = Result<Settings, ClientError>> + Send {
        (**self).fetch_settings()
    }

    fn update_settings(
        &self,
        patch: &SettingsPatch,
    ) -> impl Future<Output = Result<String, ClientError>> + Send {
        (**self).update_settings(patch)
    }

    fn reset_settings(&self) -> impl Future<Output = Result<String, ClientError>> + Send {
        (**self).reset_settings()
    }
}
