//! # terrarium-adapter-console
//!
//! Terminal implementations of the display and notifier ports.
//!
//! ## Layout
//! - [`panel`] — the in-memory state of the nine dashboard fields
//! - [`surface`] — [`ConsoleSurface`], redraws the panel on every presented view
//! - [`notifier`] — [`ConsoleNotifier`], prints one message per line
//!
//! Both types are generic over [`std::io::Write`] so tests can capture the
//! output in a `Vec<u8>`.
//!
//! ## Dependency rule
//! Same as other adapters: depends on `terrarium-app` and `terrarium-domain`.

pub mod notifier;
pub mod panel;
pub mod surface;

pub use notifier::ConsoleNotifier;
pub use panel::{Panel, PanelCell};
pub use surface::ConsoleSurface;
