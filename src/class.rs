//! Device behavior classes.
//!
//! Every supported panel family maps to one [`ClassId`]. A class fixes the
//! slot-assignment rule, how many slots the panel can track at once, and
//! whether the panel has to be switched into its extended reporting mode
//! through a feature report before it sends multitouch data.
//!
//! The registry is a process-wide constant; devices borrow their class from it
//! for their whole lifetime.

use serde::{Deserialize, Serialize};

use crate::strategy::SlotStrategy;

/// Value written into the input-mode feature report to select multitouch reporting.
pub const INPUT_MODE_MULTITOUCH: u8 = 0x02;

/// Identifies one entry of the class registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassId {
    /// Two contacts, slot taken from the device's contact id (PixCir-based panels).
    Dual1,
    /// Two contacts, slot taken from the contact's position in the report (Cando).
    Dual2,
    /// Cypress TrueTouch.
    Cypress,
    /// MosArt panels (contact ids start at 1).
    Mosart,
}

/// Immutable description of one device family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceClass {
    pub id: ClassId,
    pub strategy: SlotStrategy,
    pub max_contacts: u8,
    /// Report id of the input-mode feature report, if the panel needs one.
    pub input_mode: Option<u8>,
}

static CLASSES: [DeviceClass; 4] = [
    DeviceClass {
        id: ClassId::Dual1,
        strategy: SlotStrategy::ByRawId,
        max_contacts: 2,
        input_mode: None,
    },
    DeviceClass {
        id: ClassId::Dual2,
        strategy: SlotStrategy::BySequence,
        max_contacts: 2,
        input_mode: None,
    },
    DeviceClass {
        id: ClassId::Cypress,
        strategy: SlotStrategy::Cypress,
        max_contacts: 10,
        input_mode: Some(3),
    },
    DeviceClass {
        id: ClassId::Mosart,
        strategy: SlotStrategy::Mosart,
        max_contacts: 2,
        input_mode: Some(7),
    },
];

impl ClassId {
    /// All registered classes, in registry order.
    pub const ALL: [ClassId; 4] = [
        ClassId::Dual1,
        ClassId::Dual2,
        ClassId::Cypress,
        ClassId::Mosart,
    ];

    /// Resolve this id to its registry entry.
    #[inline]
    pub fn class(self) -> &'static DeviceClass {
        DeviceClass::lookup(self)
    }
}

impl DeviceClass {
    /// Registry lookup.
    pub fn lookup(id: ClassId) -> &'static DeviceClass {
        let idx = match id {
            ClassId::Dual1 => 0,
            ClassId::Dual2 => 1,
            ClassId::Cypress => 2,
            ClassId::Mosart => 3,
        };
        &CLASSES[idx]
    }

    /// The full registry.
    pub fn all() -> &'static [DeviceClass] {
        &CLASSES
    }

    /// Feature report that switches the panel into multitouch mode, if the class has one.
    ///
    /// Layout is `[report_id, mode]`.
    pub fn input_mode_report(&self) -> Option<[u8; 2]> {
        self.input_mode
            .map(|report_id| [report_id, INPUT_MODE_MULTITOUCH])
    }
}
