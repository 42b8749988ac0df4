//! Multitouch contact tracking for HID touch panels.
//!
//! Turns a stream of per-field values from a touch panel into slot-based
//! multitouch events plus a legacy single-pointer stream, hiding how each panel
//! family numbers and packetizes its contacts.
//!
//! ```
//! use hid_multitouch::{ClassId, FieldRole, TouchDevice, TouchEvent};
//!
//! let mut dev = TouchDevice::new(ClassId::Dual1.class());
//! let mut out = Vec::new();
//! for (role, value) in [
//!     (FieldRole::TipSwitch, 1),
//!     (FieldRole::ContactId, 0),
//!     (FieldRole::X, 10),
//!     (FieldRole::Y, 20),
//!     (FieldRole::ContactCount, 1),
//! ] {
//!     dev.handle_field(role, value, &mut out);
//! }
//! assert_eq!(out.last(), Some(&TouchEvent::CommitFrame));
//! ```

pub mod accumulator;
pub mod backends;
pub mod class;
pub mod config;
pub mod device;
pub mod emitter;
pub mod error;
pub mod evdev;
pub mod event;
pub mod eventbus;
pub mod filtered_listener;
pub mod ids;
pub mod logger;
pub mod manager;
pub mod metadata;
pub mod slots;
pub mod snapshot;
pub mod strategy;
pub mod usage;

pub use class::*;
pub use config::{DeviceEntry, DeviceTable};
pub use device::*;
pub use error::{Error, Result};
pub use event::*;
pub use eventbus::*;
pub use manager::*;
pub use metadata::DeviceMeta;
pub use snapshot::{SlotSnapshot, Snapshot};
pub use strategy::SlotStrategy;
