//! # terrarium-domain
//!
//! Pure domain model for the terrarium dashboard client.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define the controller **wire types** (state snapshot, sensor test reading,
//!   mock toggle reply, health report, history page, settings)
//! - Define the **reply envelope** (`{status, data, message, meta}`) and its
//!   success/failure classification
//! - Define the **dashboard view**: the nine display fields, their style
//!   classes and the labels used to fill them
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod envelope;
pub mod health;
pub mod history;
pub mod sensor;
pub mod settings;
pub mod snapshot;
pub mod view;
