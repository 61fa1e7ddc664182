//! Device quirks for USB Audio Class host drivers
//!
//! Some USB audio peripherals expose descriptors a generic UAC host driver
//! cannot parse, or only work in one particular configuration. This crate
//! holds a small compiled-in table of per-device overrides and the lookups a
//! driver runs while building its model of a newly attached device:
//!
//! - [`find_quirk`]: match by VID/PID, optionally filtered by [`QuirkKind`]
//! - [`find_endpoint_quirk`]: match a specific interface / alt-setting index
//! - [`apply_endpoint_quirk`]: stamp an endpoint override onto an
//!   [`InterfaceAltSetting`] owned by the driver
//!
//! ## Supported devices
//! - Apple USB-C to 3.5 mm Headphone Jack Adapter (`05AC:110A`)

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod apply;
pub mod error;
pub mod ids;
pub mod matcher;
pub mod registry;
pub mod types;

pub use apply::*;
pub use error::*;
pub use ids::*;
pub use matcher::*;
pub use registry::known_quirks;
pub use types::*;

/// `tracing` target used for every record emitted by this crate.
pub const LOG_TARGET: &str = "uac-quirks";
