//! Point-in-time view of tracked contacts.
//!
//! [`Snapshot`] is an **owned**, read-only view of every attached device's slots,
//! produced by [`DeviceManager::snapshot`](crate::manager::DeviceManager::snapshot).
//!
//! # Semantics
//! - Keys are device ids (see [`DeviceMeta::device_id`](crate::metadata::DeviceMeta::device_id)).
//! - A slot is `active` when it was surfaced as active in the last emitted frame.
//!   Contacts committed after that frame are not visible until the next one.
//! - Positions of inactive slots are the last values the slot held.
//!
//! # Example
//! ```no_run
//! use hid_multitouch::Snapshot;
//!
//! fn print_touches(snap: &Snapshot) {
//!     for (dev, slots) in snap.iter() {
//!         for s in slots.iter().filter(|s| s.active) {
//!             println!("{dev}: slot {} id={:?} at ({}, {})", s.slot, s.tracking_id, s.x, s.y);
//!         }
//!     }
//! }
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::slots::Slot;

/// Surfaced state of a single slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SlotSnapshot {
    pub slot: u8,
    pub active: bool,
    /// `None` while the slot is inactive.
    pub tracking_id: Option<u16>,
    pub x: u16,
    pub y: u16,
    pub pressure: u16,
}

impl SlotSnapshot {
    pub fn from_slot(index: u8, slot: &Slot) -> Self {
        Self {
            slot: index,
            active: slot.prev_valid,
            tracking_id: slot.prev_valid.then_some(slot.tracking_id),
            x: slot.x,
            y: slot.y,
            pressure: slot.pressure,
        }
    }
}

/// Owned snapshot of all devices (`device_id → slots`).
#[derive(Clone, Debug, Default, Serialize)]
pub struct Snapshot(pub HashMap<String, Vec<SlotSnapshot>>);

impl Snapshot {
    /// Slots of a specific device.
    #[inline]
    pub fn get(&self, device_id: &str) -> Option<&[SlotSnapshot]> {
        self.0.get(device_id).map(Vec::as_slice)
    }

    /// Iterate `(device_id, slots)` pairs.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<SlotSnapshot>)> {
        self.0.iter()
    }

    /// Number of active contacts across all devices.
    pub fn active_contacts(&self) -> usize {
        self.0.values().flatten().filter(|s| s.active).count()
    }

    /// Serialize as JSON, e.g. for diagnostics dumps.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Consume the snapshot and return the inner map.
    #[inline]
    pub fn into_inner(self) -> HashMap<String, Vec<SlotSnapshot>> {
        self.0
    }
}
