//! Sensor self-test and mock-mode replies.

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// One forced sample from `GET /api/v1/sensor/test`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub temperature: f64,
    pub humidity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
}

/// Reply of `POST /api/v1/mock`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockToggle {
    /// Human readable outcome, shown to the user as is.
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Result of a sensor self-test, as shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum SensorTestOutcome {
    Passed(SensorReading),
    Failed {
        status: String,
        message: Option<String>,
    },
}

impl SensorTestOutcome {
    #[must_use]
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed(_))
    }
}

impl std::fmt::Display for SensorTestOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passed(reading) => write!(
                f,
                "Temperature: {}\u{b0}C\nHumidity: {}%",
                reading.temperature, reading.humidity
            ),
            Self::Failed { message, .. } => write!(
                f,
                "Sensor error: {}",
                message.as_deref().unwrap_or("unknown error")
            ),
        }
    }
}
