//! Controller health report from `GET /api/v1/health`.
//!
//! Unlike the other endpoints this one is not wrapped in an envelope: its
//! top-level `status` is the health verdict itself.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// Overall health verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Degraded,
    Critical,
    #[serde(other)]
    Unknown,
}

impl HealthStatus {
    /// `true` only for [`Healthy`](Self::Healthy).
    #[must_use]
    pub fn is_healthy(self) -> bool {
        matches!(self, Self::Healthy)
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healthy => f.write_str("healthy"),
            Self::Warning => f.write_str("warning"),
            Self::Degraded => f.write_str("degraded"),
            Self::Critical => f.write_str("critical"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// Health report as sent by the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    /// Per-component state, e.g. `dht22_sensor = "ok"`.
    #[serde(default)]
    pub components: BTreeMap<String, String>,
    pub uptime_seconds: i64,
    pub cycle_count: i64,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
}
