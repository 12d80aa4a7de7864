//! # terrarium-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ControllerApi` — reads and commands against the terrarium controller
//!   - `DisplaySurface` — the typed render targets of the dashboard
//!   - `Notifier` — user-facing messages with a point of disclosure
//!   - `SettingsApi` — read, patch and reset the controller settings
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DashboardPoller` — refresh, toggle mock mode, sensor self-test
//!   - `DiagnosticsService` — health and history reads
//!   - `SettingsService` — show, update and reset settings
//! - Provide the **poll loop** that drives `refresh` on a fixed period
//!
//! ## Dependency rule
//! Depends on `terrarium-domain` only (plus `tokio` for timers and channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod poll_loop;
pub mod ports;
pub mod services;
