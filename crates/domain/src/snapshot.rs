//! State snapshot — the controller's view of sensors, relays and the control loop.
//!
//! Received fresh on every poll and never merged with a previous snapshot.

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// Full controller state as returned by `GET /api/v1/state`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub sensors: Sensors,
    pub relays: Relays,
    pub system: SystemInfo,
    /// When the controller produced the snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
}

/// Latest climate sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensors {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// Last sensor read failed.
    pub sensor_error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_read: Option<Timestamp>,
}

/// Relay outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relays {
    pub light: bool,
    pub heater: bool,
    pub pump: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_pump_run: Option<Timestamp>,
}

/// Control loop bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating mode (`auto`, `error`, `critical`, …), displayed verbatim.
    pub mode: String,
    pub cycle_count: i64,
    pub uptime: Uptime,
}

/// Uptime as sent by the controller: usually seconds, sometimes preformatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Uptime {
    Seconds(serde_json::Number),
    Text(String),
}

impl std::fmt::Display for Uptime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Seconds(value) => value.fmt(f),
            Self::Text(value) => f.write_str(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn controller_payload() -> serde_json::Value {
        json!({
            "timestamp": "2024-05-01T10:00:00+03:00",
            "sensors": {
                "temperature": 21.47,
                "humidity": 55.3,
                "last_read": "2024-05-01T09:59:58+03:00",
                "sensor_error": false
            },
            "relays": {
                "light": true,
                "heater": false,
                "pump": true,
                "last_pump_run": "0001-01-01T00:00:00Z"
            },
            "system": {"cycle_count": 12, "uptime": 3600, "mode": "auto"}
        })
    }

    #[test]
    fn should_decode_full_controller_payload() {
        let snapshot: StateSnapshot = serde_json::from_value(controller_payload()).unwrap();
        assert!((snapshot.sensors.temperature - 21.47).abs() < f64::EPSILON);
        assert!(snapshot.relays.light);
        assert!(!snapshot.relays.heater);
        assert_eq!(snapshot.system.mode, "auto");
        assert_eq!(snapshot.system.cycle_count, 12);
        assert!(snapshot.timestamp.is_some());
        assert!(crate::time::is_unset(
            snapshot.relays.last_pump_run.as_ref().unwrap()
        ));
    }

    #[test]
    fn should_decode_without_optional_timestamps() {
        let snapshot: StateSnapshot = serde_json::from_value(json!({
            "sensors": {"temperature": 20.0, "humidity": 50.0, "sensor_error": true},
            "relays": {"light": false, "heater": true, "pump": false},
            "system": {"mode": "error", "cycle_count": 0, "uptime": "1h"}
        }))
        .unwrap();
        assert!(snapshot.timestamp.is_none());
        assert!(snapshot.sensors.last_read.is_none());
        assert_eq!(snapshot.system.uptime, Uptime::Text("1h".to_string()));
    }

    #[test]
    fn should_fail_when_a_required_field_is_missing() {
        let mut payload = controller_payload();
        payload["relays"].as_object_mut().unwrap().remove("pump");
        assert!(serde_json::from_value::<StateSnapshot>(payload).is_err());
    }

    #[test]
    fn should_display_numeric_uptime_verbatim() {
        let uptime: Uptime = serde_json::from_value(json!(3600)).unwrap();
        assert_eq!(uptime.to_string(), "3600");
    }

    #[test]
    fn should_display_text_uptime_verbatim() {
        let uptime: Uptime = serde_json::from_value(json!("2d 3h")).unwrap();
        assert_eq!(uptime.to_string(), "2d 3h");
    }
}
