//! Linux evdev encoding of [`TouchEvent`]s.
//!
//! Produces the `(type, code, value)` triples a uinput or evdev consumer expects
//! for the multitouch type B protocol plus the single-touch emulation axes.

use crate::event::{AxisCode, TouchEvent};

pub const EV_SYN: u16 = 0x00;
pub const EV_KEY: u16 = 0x01;
pub const EV_ABS: u16 = 0x03;

pub const SYN_REPORT: u16 = 0;

pub const BTN_TOUCH: u16 = 0x14a;

pub const ABS_X: u16 = 0x00;
pub const ABS_Y: u16 = 0x01;
pub const ABS_MT_SLOT: u16 = 0x2f;
pub const ABS_MT_POSITION_X: u16 = 0x35;
pub const ABS_MT_POSITION_Y: u16 = 0x36;
pub const ABS_MT_TRACKING_ID: u16 = 0x39;
pub const ABS_MT_PRESSURE: u16 = 0x3a;

/// One evdev event without its timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawEvent {
    pub type_: u16,
    pub code: u16,
    pub value: i32,
}

impl RawEvent {
    #[inline]
    const fn abs(code: u16, value: i32) -> Self {
        Self {
            type_: EV_ABS,
            code,
            value,
        }
    }
}

impl AxisCode {
    /// evdev `ABS_*` code.
    pub fn abs_code(self) -> u16 {
        match self {
            AxisCode::X => ABS_X,
            AxisCode::Y => ABS_Y,
            AxisCode::MtPositionX => ABS_MT_POSITION_X,
            AxisCode::MtPositionY => ABS_MT_POSITION_Y,
            AxisCode::MtTrackingId => ABS_MT_TRACKING_ID,
            AxisCode::MtPressure => ABS_MT_PRESSURE,
        }
    }
}

impl TouchEvent {
    pub fn to_raw(&self) -> RawEvent {
        match *self {
            TouchEvent::SelectSlot(slot) => RawEvent::abs(ABS_MT_SLOT, slot as i32),
            TouchEvent::SetTrackingId(id) => {
                RawEvent::abs(ABS_MT_TRACKING_ID, id.map_or(-1, i32::from))
            }
            TouchEvent::SetPositionX(v) => RawEvent::abs(ABS_MT_POSITION_X, v as i32),
            TouchEvent::SetPositionY(v) => RawEvent::abs(ABS_MT_POSITION_Y, v as i32),
            TouchEvent::SetPressure(v) => RawEvent::abs(ABS_MT_PRESSURE, v as i32),
            TouchEvent::SetLegacyButton(down) => RawEvent {
                type_: EV_KEY,
                code: BTN_TOUCH,
                value: down as i32,
            },
            TouchEvent::SetLegacyX(v) => RawEvent::abs(ABS_X, v as i32),
            TouchEvent::SetLegacyY(v) => RawEvent::abs(ABS_Y, v as i32),
            TouchEvent::CommitFrame => RawEvent {
                type_: EV_SYN,
                code: SYN_REPORT,
                value: 0,
            },
        }
    }
}
