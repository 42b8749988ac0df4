//! HID usages consumed by the multitouch engine.
//!
//! Usages are full 32-bit values: usage page in the high half, usage id in the
//! low half (`0x000d_0042` is Digitizer / Tip Switch).

use crate::event::{AxisCode, FieldRole};

pub const USAGE_PAGE_MASK: u32 = 0xffff_0000;

pub const UP_GENERIC_DESKTOP: u32 = 0x0001_0000;
pub const UP_DIGITIZER: u32 = 0x000d_0000;
/// Vendor-defined page; carries nothing input-oriented on supported panels.
pub const UP_VENDOR: u32 = 0xff00_0000;

pub const GD_X: u32 = 0x0001_0030;
pub const GD_Y: u32 = 0x0001_0031;

pub const DG_TIP_PRESSURE: u32 = 0x000d_0030;
pub const DG_IN_RANGE: u32 = 0x000d_0032;
pub const DG_TIP_SWITCH: u32 = 0x000d_0042;
pub const DG_CONFIDENCE: u32 = 0x000d_0047;
pub const DG_CONTACT_ID: u32 = 0x000d_0051;
pub const DG_CONTACT_COUNT: u32 = 0x000d_0054;
pub const DG_CONTACT_MAX: u32 = 0x000d_0055;

/// Range declared for the tracking-id axis.
pub const MAX_TRACKING_ID: i32 = u16::MAX as i32;

#[inline]
pub fn usage_page(usage: u32) -> u32 {
    usage & USAGE_PAGE_MASK
}

impl FieldRole {
    /// Resolve a full HID usage to the role the engine gives it.
    pub fn from_usage(usage: u32) -> FieldRole {
        match usage {
            GD_X => FieldRole::X,
            GD_Y => FieldRole::Y,
            DG_TIP_PRESSURE => FieldRole::TipPressure,
            DG_IN_RANGE => FieldRole::InRange,
            DG_TIP_SWITCH => FieldRole::TipSwitch,
            DG_CONFIDENCE => FieldRole::Confidence,
            DG_CONTACT_ID => FieldRole::ContactId,
            DG_CONTACT_COUNT => FieldRole::ContactCount,
            DG_CONTACT_MAX => FieldRole::ContactMax,
            other => FieldRole::Other(other),
        }
    }

    /// The HID usage this role was resolved from.
    pub fn usage(&self) -> u32 {
        match *self {
            FieldRole::X => GD_X,
            FieldRole::Y => GD_Y,
            FieldRole::TipPressure => DG_TIP_PRESSURE,
            FieldRole::InRange => DG_IN_RANGE,
            FieldRole::TipSwitch => DG_TIP_SWITCH,
            FieldRole::Confidence => DG_CONFIDENCE,
            FieldRole::ContactId => DG_CONTACT_ID,
            FieldRole::ContactCount => DG_CONTACT_COUNT,
            FieldRole::ContactMax => DG_CONTACT_MAX,
            FieldRole::Other(usage) => usage,
        }
    }
}

/// One report-descriptor field, as seen during usage mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldInfo {
    pub usage: u32,
    pub logical_min: i32,
    pub logical_max: i32,
}

impl FieldInfo {
    pub fn new(usage: u32, logical_min: i32, logical_max: i32) -> Self {
        Self {
            usage,
            logical_min,
            logical_max,
        }
    }
}

/// Target of a mapped usage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MappedTo {
    Axis(AxisCode),
    /// Touch button (`BTN_TOUCH`).
    TouchButton,
}

/// Decision taken for one usage during descriptor mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UsageMapping {
    /// The engine maps the usage itself.
    Map(MappedTo),
    /// The usage must not be mapped at all.
    Ignore,
    /// Let the host apply its generic mapping.
    Default,
}
