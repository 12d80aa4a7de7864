//! Dashboard view — the nine display fields derived from one snapshot.
//!
//! Fields are addressed through the typed [`Field`] handle instead of a
//! string lookup, and [`DashboardView::from_snapshot`] is a pure function,
//! so rendering the same snapshot twice always yields the same cells.

use serde::Deserialize;

use crate::snapshot::StateSnapshot;

/// A render target on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Temperature,
    Humidity,
    LightStatus,
    HeaterStatus,
    PumpStatus,
    SystemMode,
    CycleCount,
    Uptime,
    SensorStatus,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Self; 9] = [
        Self::Temperature,
        Self::Humidity,
        Self::LightStatus,
        Self::HeaterStatus,
        Self::PumpStatus,
        Self::SystemMode,
        Self::CycleCount,
        Self::Uptime,
        Self::SensorStatus,
    ];

    /// Stable identifier of the target (matches the dashboard markup ids).
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Temperature => "temp",
            Self::Humidity => "humidity",
            Self::LightStatus => "light-status",
            Self::HeaterStatus => "heater-status",
            Self::PumpStatus => "pump-status",
            Self::SystemMode => "system-mode",
            Self::CycleCount => "cycle-count",
            Self::Uptime => "uptime",
            Self::SensorStatus => "sensor-status",
        }
    }

    /// Caption shown next to the value.
    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Humidity => "Humidity",
            Self::LightStatus => "Light",
            Self::HeaterStatus => "Heater",
            Self::PumpStatus => "Pump",
            Self::SystemMode => "Mode",
            Self::CycleCount => "Cycles",
            Self::Uptime => "Uptime",
            Self::SensorStatus => "Sensor",
        }
    }
}

/// Style classification attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Plain,
    On,
    Off,
    Error,
}

impl Style {
    /// CSS-like class name (`""` for [`Plain`](Self::Plain)).
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Plain => "",
            Self::On => "status-on",
            Self::Off => "status-off",
            Self::Error => "error",
        }
    }

    fn relay(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

/// Texts used for relay and sensor indicators.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub on: String,
    pub off: String,
    pub sensor_ok: String,
    pub sensor_error: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            on: "On".to_string(),
            off: "Off".to_string(),
            sensor_ok: "Sensor OK".to_string(),
            sensor_error: "Sensor error!".to_string(),
        }
    }
}

/// Text plus style for a styled field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub text: String,
    pub style: Style,
}

/// One field write: text always, style only for styled fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell<'a> {
    pub field: Field,
    pub text: &'a str,
    pub style: Option<Style>,
}

impl<'a> Cell<'a> {
    fn plain(field: Field, text: &'a str) -> Self {
        Self {
            field,
            text,
            style: None,
        }
    }

    fn styled(field: Field, indicator: &'a Indicator) -> Self {
        Self {
            field,
            text: &indicator.text,
            style: Some(indicator.style),
        }
    }
}

/// Format `value` with one decimal, rounding exact ties away from zero.
///
/// `{:.1}` rounds the exact binary value and breaks ties to even, so
/// `21.25` would print `21.2`; dashboards show `21.3`. A value is an exact
/// tie at one decimal only when `4 * value` is an odd integer.
#[allow(clippy::float_cmp)]
fn one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    let is_tie = quarters.fract() == 0.0 && quarters.rem_euclid(2.0) == 1.0;
    if !is_tie {
        return format!("{value:.1}");
    }
    // 10 * value is exact here and ends in .5
    let tenths = (value.abs() * 10.0).ceil();
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{:.1}", tenths / 10.0)
}

/// Everything the dashboard shows for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub temperature: String,
    pub humidity: String,
    pub light: Indicator,
    pub heater: Indicator,
    pub pump: Indicator,
    pub mode: String,
    pub cycle_count: String,
    pub uptime: String,
    pub sensor: Indicator,
}

impl DashboardView {
    /// Derive the view from a snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: &StateSnapshot, labels: &Labels) -> Self {
        let relay = |on: bool| Indicator {
            text: if on {
                labels.on.clone()
            } else {
                labels.off.clone()
            },
            style: Style::relay(on),
        };
        let sensor = if snapshot.sensors.sensor_error {
            Indicator {
                text: labels.sensor_error.clone(),
                style: Style::Error,
            }
        } else {
            Indicator {
                text: labels.sensor_ok.clone(),
                style: Style::Plain,
            }
        };

        Self {
            temperature: one_decimal(snapshot.sensors.temperature),
            humidity: one_decimal(snapshot.sensors.humidity),
            light: relay(snapshot.relays.light),
            heater: relay(snapshot.relays.heater),
            pump: relay(snapshot.relays.pump),
            mode: snapshot.system.mode.clone(),
            cycle_count: snapshot.system.cycle_count.to_string(),
            uptime: snapshot.system.uptime.to_string(),
            sensor,
        }
    }

    /// The nine field writes, in [`Field::ALL`] order.
    #[must_use]
    pub fn cells(&self) -> [Cell<'_>; 9] {
        [
            Cell::plain(Field::Temperature, &self.temperature),
            Cell::plain(Field::Humidity, &self.humidity),
            Cell::styled(Field::LightStatus, &self.light),
            Cell::styled(Field::HeaterStatus, &self.heater),
            Cell::styled(Field::PumpStatus, &self.pump),
            Cell::plain(Field::SystemMode, &self.mode),
            Cell::plain(Field::CycleCount, &self.cycle_count),
            Cell::plain(Field::Uptime, &self.uptime),
            Cell::styled(Field::SensorStatus, &self.sensor),
        ]
    }
}
