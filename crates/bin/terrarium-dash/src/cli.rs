//! Command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use terrarium_domain::history::DEFAULT_LIMIT;
use terrarium_domain::settings::{
    LightSchedulePatch, PumpSettingsPatch, SettingsPatch, TargetsPatch,
};

/// Terminal dashboard for a terrarium controller.
#[derive(Debug, Parser)]
#[command(name = "terrarium-dash", version, about)]
pub struct Cli {
    /// Config file (defaults to `terrarium.toml` in the working directory).
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Controller base URL, overrides config and `TERRARIUM_URL`.
    #[arg(short, long, global = true, value_name = "URL")]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Poll the controller and redraw the panel (default).
    ///
    /// Keys on stdin: r = refresh now, m = toggle mock mode,
    /// t = test sensor, q = quit.
    Watch {
        /// Seconds between refreshes, overrides `[poll] period_secs`.
        #[arg(short, long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
        period: Option<u64>,
    },
    /// Fetch the state once and print the panel.
    State,
    /// Toggle the controller's mock sensor mode.
    ToggleMock,
    /// Force a sensor sample and print the reading.
    TestSensor,
    /// Print the controller health report.
    Health,
    /// Print recent climate samples.
    History {
        /// Number of records to request.
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
    },
    /// Show or change the controller settings.
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum SettingsAction {
    /// Print the current settings (default).
    Show,
    /// Change some settings; keys not given are left as they are.
    Set(SettingsArgs),
    /// Restore the controller defaults.
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq, Args)]
#[group(required = true, multiple = true)]
pub struct SettingsArgs {
    /// Light on time, `HH:MM`.
    #[arg(long, value_name = "HH:MM")]
    pub light_start: Option<String>,
    /// Light off time, `HH:MM`.
    #[arg(long, value_name = "HH:MM")]
    pub light_end: Option<String>,
    /// Follow the light schedule.
    #[arg(long, value_name = "BOOL")]
    pub light_schedule: Option<bool>,
    /// Target temperature in °C.
    #[arg(long, value_name = "CELSIUS")]
    pub target_temperature: Option<f64>,
    /// Target relative humidity in %.
    #[arg(long, value_name = "PERCENT")]
    pub target_humidity: Option<f64>,
    /// Pump run time per cycle.
    #[arg(long, value_name = "SECS")]
    pub pump_duration: Option<i64>,
    /// Minimum time between two pump runs.
    #[arg(long, value_name = "SECS")]
    pub pump_interval: Option<i64>,
    /// Pause between control cycles.
    #[arg(long, value_name = "SECS")]
    pub cycle_pause: Option<i64>,
    /// Use simulated sensor data.
    #[arg(long, value_name = "BOOL")]
    pub mock: Option<bool>,
}

impl SettingsArgs {
    /// The patch to send; sections without a flag are left out.
    #[must_use]
    pub fn into_patch(self) -> SettingsPatch {
        let light = LightSchedulePatch {
            start_time: self.light_start,
            end_time: self.light_end,
            enabled: self.light_schedule,
        };
        let targets = TargetsPatch {
            temperature: self.target_temperature,
            humidity: self.target_humidity,
        };
        let pump = PumpSettingsPatch {
            duration_seconds: self.pump_duration,
            min_interval: self.pump_interval,
        };
        SettingsPatch {
            light_schedule: (light != LightSchedulePatch::default()).then_some(light),
            targets: (targets != TargetsPatch::default()).then_some(targets),
            pump_settings: (pump != PumpSettingsPatch::default()).then_some(pump),
            cycle_pause: self.cycle_pause,
            use_mock_data: self.mock,
        }
    }
}

impl Cli {
    /// The subcommand to run, `watch` when none was given.
    #[must_use]
    pub fn subcommand(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Watch { period: None })
    }
}
