//! Input fields and output events.
//!
//! The engine consumes one `(FieldRole, value)` pair at a time and produces
//! [`TouchEvent`]s in frames. A frame is a run of slot updates followed by the
//! legacy single-pointer state and a [`TouchEvent::CommitFrame`].
//!
//! ## Value conventions
//! - Positions and pressure are raw device units. No scaling is applied.
//! - Tracking ids are 16-bit and wrap around; `SetTrackingId(None)` closes a slot.
//! - Slot indices are always below the device class's `max_contacts`.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Semantic role of one field value, as resolved by the report parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldRole {
    InRange,
    Confidence,
    /// Tip switch; doubles as the contact's validity flag.
    TipSwitch,
    ContactId,
    TipPressure,
    X,
    Y,
    /// Number of contacts carried by the current frame.
    ContactCount,
    ContactMax,
    /// Any other usage, carried as its full 32-bit HID usage.
    Other(u32),
}

/// What the caller should do with a field after handing it to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldOutcome {
    /// Consumed; nothing left to do.
    Handled,
    /// Not consumed; apply the generic interpretation.
    NotHandled,
    /// Carries nothing meaningful; apply no interpretation at all.
    Suppressed,
}

/// One output event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchEvent {
    /// Subsequent slot events refer to this slot.
    SelectSlot(u8),
    /// Tracking id of the selected slot; `None` releases the slot.
    SetTrackingId(Option<u16>),
    SetPositionX(u16),
    SetPositionY(u16),
    /// Only emitted by pressure-capable devices.
    SetPressure(u16),
    /// Legacy single-touch emulation: any contact down.
    SetLegacyButton(bool),
    SetLegacyX(u16),
    SetLegacyY(u16),
    /// End of frame.
    CommitFrame,
}

impl TouchEvent {
    /// Belongs to the legacy single-pointer stream.
    pub fn is_legacy(&self) -> bool {
        matches!(
            self,
            TouchEvent::SetLegacyButton(_) | TouchEvent::SetLegacyX(_) | TouchEvent::SetLegacyY(_)
        )
    }

    /// Belongs to the per-slot stream.
    pub fn is_slot(&self) -> bool {
        matches!(
            self,
            TouchEvent::SelectSlot(_)
                | TouchEvent::SetTrackingId(_)
                | TouchEvent::SetPositionX(_)
                | TouchEvent::SetPositionY(_)
                | TouchEvent::SetPressure(_)
        )
    }
}

/// Event captured by the [`DeviceManager`](crate::manager::DeviceManager), tagged
/// with its source device.
#[derive(Clone, Debug)]
pub struct DeviceEvent {
    /// Id of the device that produced the event, see
    /// [`DeviceMeta::device_id`](crate::metadata::DeviceMeta::device_id).
    pub device_id: String,
    /// Capture time (monotonic).
    pub at: Instant,
    pub kind: TouchEvent,
}

/// Absolute axes a touch device can declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisCode {
    X,
    Y,
    MtPositionX,
    MtPositionY,
    MtTrackingId,
    MtPressure,
}

/// Describes an axis declared during usage mapping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisDesc {
    pub code: AxisCode,
    /// Logical min taken from the report descriptor.
    pub logical_min: i32,
    /// Logical max taken from the report descriptor.
    pub logical_max: i32,
}
