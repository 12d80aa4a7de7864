//! Controller settings from `/api/v1/settings`.
//!
//! [`Settings`] is the full document the controller returns. [`SettingsPatch`]
//! is what an update sends: the controller only touches the keys present in
//! the body, so every field of the patch is optional and omitted when unset.

use serde::{Deserialize, Serialize};

/// Daily light window, `HH:MM` local time on the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightSchedule {
    pub start_time: String,
    pub end_time: String,
    pub enabled: bool,
}

/// Climate set points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Targets {
    pub temperature: f64,
    pub humidity: f64,
}

/// Irrigation pump timing, both in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PumpSettings {
    pub duration_seconds: i64,
    pub min_interval: i64,
}

/// Full controller configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub light_schedule: LightSchedule,
    pub targets: Targets,
    pub pump_settings: PumpSettings,
    /// Seconds between two control cycles.
    pub cycle_pause: i64,
    pub use_mock_data: bool,
}

/// Partial update of [`LightSchedule`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LightSchedulePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Partial update of [`Targets`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TargetsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
}

/// Partial update of [`PumpSettings`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PumpSettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_interval: Option<i64>,
}

/// Body of `PUT /api/v1/settings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_schedule: Option<LightSchedulePatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<TargetsPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pump_settings: Option<PumpSettingsPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_pause: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_mock_data: Option<bool>,
}

impl SettingsPatch {
    /// `true` when sending the patch would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let light = self
            .light_schedule
            .as_ref()
            .is_none_or(|p| *p == LightSchedulePatch::default());
        let targets = self
            .targets
            .is_none_or(|p| p == TargetsPatch::default());
        let pump = self
            .pump_settings
            .is_none_or(|p| p == PumpSettingsPatch::default());
        light && targets && pump && self.cycle_pause.is_none() && self.use_mock_data.is_none()
    }
}
