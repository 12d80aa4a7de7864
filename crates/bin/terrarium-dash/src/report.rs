//! Plain-text rendering of the diagnostics and settings commands.

use std::fmt;

use terrarium_domain::health::HealthReport;
use terrarium_domain::history::{HistoryPage, HistoryRecord};
use terrarium_domain::settings::Settings;
use terrarium_domain::time;

/// Health report as aligned `key value` lines.
pub struct HealthSummary<'a>(pub &'a HealthReport);

impl fmt::Display for HealthSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "status    {}", report.status)?;
        writeln!(f, "version   {}", report.version)?;
        writeln!(f, "uptime    {}s", report.uptime_seconds)?;
        writeln!(f, "cycles    {}", report.cycle_count)?;
        writeln!(f, "checked   {}", time::describe(report.timestamp.as_ref()))?;
        if report.components.is_empty() {
            return Ok(());
        }
        f.write_str("components\n")?;
        let width = report.components.keys().map(String::len).max().unwrap_or(0);
        for (name, state) in &report.components {
            writeln!(f, "  {name:<width$}  {state}")?;
        }
        Ok(())
    }
}

fn on_off(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}

struct HistoryRow<'a>(&'a HistoryRecord);

impl fmt::Display for HistoryRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;
        write!(
            f,
            "{:<25} {:>6.1} {:>6.1} {:<5} {:<6} {:<4} {}",
            record.timestamp.to_rfc3339(),
            record.temperature,
            record.humidity,
            on_off(record.light_on),
            on_off(record.heater_on),
            on_off(record.pump_on),
            if record.sensor_error { "error" } else { "ok" },
        )
    }
}

/// History page as a table with a `count of total` footer.
pub struct HistoryTable<'a>(pub &'a HistoryPage);

impl fmt::Display for HistoryTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.0;
        if page.records.is_empty() {
            return f.write_str("no records\n");
        }
        writeln!(
            f,
            "{:<25} {:>6} {:>6} {:<5} {:<6} {:<4} sensor",
            "timestamp", "temp", "hum", "light", "heater", "pump"
        )?;
        for record in &page.records {
            writeln!(f, "{}", HistoryRow(record))?;
        }
        if let Some(meta) = page.meta {
            writeln!(f, "{} of {} records", meta.count, meta.total)?;
        }
        Ok(())
    }
}

/// Controller settings, one setting per line.
pub struct SettingsSummary<'a>(pub &'a Settings);

impl fmt::Display for SettingsSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let settings = self.0;
        let light = &settings.light_schedule;
        writeln!(
            f,
            "light        {}-{} ({})",
            light.start_time,
            light.end_time,
            if light.enabled { "scheduled" } else { "manual" }
        )?;
        writeln!(f, "temperature  {:.1} °C", settings.targets.temperature)?;
        writeln!(f, "humidity     {:.1} %", settings.targets.humidity)?;
        writeln!(
            f,
            "pump         {}s every {}s at most",
            settings.pump_settings.duration_seconds, settings.pump_settings.min_interval
        )?;
        writeln!(f, "cycle pause  {}s", settings.cycle_pause)?;
        writeln!(f, "mock data    {}", on_off(settings.use_mock_data))
    }
}
