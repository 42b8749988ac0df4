//! Per-device multitouch state and field dispatch.
//!
//! [`TouchDevice`] owns everything the engine keeps for one attached panel: the
//! slot table, the contact being read, per-frame counters and the tracking-id
//! sequence. It is driven one field at a time through
//! [`TouchDevice::handle_field`].
//!
//! ## Field order contract
//! Within a contact, `Y` must be the last field: it completes the contact.
//! Within a report, `ContactCount` must come after every contact: it may close
//! the frame. The engine relies on this order and does not check it.

use enumflags2::{bitflags, BitFlags};
use tracing::trace;

use crate::accumulator::ContactAccumulator;
use crate::class::DeviceClass;
use crate::emitter::emit_frame;
use crate::event::{AxisCode, AxisDesc, FieldOutcome, FieldRole, TouchEvent};
use crate::slots::SlotStore;
use crate::snapshot::SlotSnapshot;
use crate::usage::{
    usage_page, FieldInfo, MappedTo, UsageMapping, DG_CONFIDENCE, DG_CONTACT_COUNT,
    DG_CONTACT_ID, DG_CONTACT_MAX, DG_IN_RANGE, DG_TIP_PRESSURE, DG_TIP_SWITCH, GD_X, GD_Y,
    MAX_TRACKING_ID, UP_DIGITIZER, UP_GENERIC_DESKTOP, UP_VENDOR,
};

/// Contact data only some panels report.
#[bitflags]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionalFeature {
    Pressure = 0b01,
    Size = 0b10,
}

/// Multitouch state of one attached panel.
#[derive(Clone, Debug)]
pub struct TouchDevice {
    class: &'static DeviceClass,
    slots: SlotStore,
    accumulator: ContactAccumulator,
    /// Contacts completed in the current frame.
    contact_index: u8,
    /// Index of the last contact the device announced for the current frame.
    expected_last_contact_index: u8,
    next_tracking_id: u16,
    features: BitFlags<OptionalFeature>,
    axes: Vec<AxisDesc>,
    declared_slots: Option<u8>,
}

impl TouchDevice {
    pub fn new(class: &'static DeviceClass) -> Self {
        Self {
            class,
            slots: SlotStore::new(class.max_contacts),
            accumulator: ContactAccumulator::default(),
            contact_index: 0,
            expected_last_contact_index: 0,
            next_tracking_id: 0,
            features: BitFlags::empty(),
            axes: Vec::new(),
            declared_slots: None,
        }
    }

    #[inline]
    pub fn class(&self) -> &'static DeviceClass {
        self.class
    }

    #[inline]
    pub fn features(&self) -> BitFlags<OptionalFeature> {
        self.features
    }

    #[inline]
    pub fn reports_pressure(&self) -> bool {
        self.features.contains(OptionalFeature::Pressure)
    }

    /// Axes declared so far by [`map_usage`](Self::map_usage).
    pub fn axes(&self) -> &[AxisDesc] {
        &self.axes
    }

    /// Number of multitouch slots declared once a contact-id usage was mapped.
    pub fn declared_slots(&self) -> Option<u8> {
        self.declared_slots
    }

    #[inline]
    pub fn contact_index(&self) -> u8 {
        self.contact_index
    }

    #[inline]
    pub fn slots(&self) -> &SlotStore {
        &self.slots
    }

    /// Tracking id the next newly active contact will receive.
    #[inline]
    pub fn next_tracking_id(&self) -> u16 {
        self.next_tracking_id
    }

    /// Current per-slot view.
    pub fn snapshot(&self) -> Vec<SlotSnapshot> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| SlotSnapshot::from_slot(i as u8, slot))
            .collect()
    }

    /// Decide how a descriptor field is mapped and record the axes it declares.
    ///
    /// Called once per field while the report descriptor is walked, before any
    /// value is delivered.
    pub fn map_usage(&mut self, field: &FieldInfo) -> UsageMapping {
        match usage_page(field.usage) {
            UP_GENERIC_DESKTOP => match field.usage {
                GD_X => {
                    self.declare_axis(AxisCode::MtPositionX, field.logical_min, field.logical_max);
                    self.declare_axis(AxisCode::X, field.logical_min, field.logical_max);
                    UsageMapping::Map(MappedTo::Axis(AxisCode::MtPositionX))
                }
                GD_Y => {
                    self.declare_axis(AxisCode::MtPositionY, field.logical_min, field.logical_max);
                    self.declare_axis(AxisCode::Y, field.logical_min, field.logical_max);
                    UsageMapping::Map(MappedTo::Axis(AxisCode::MtPositionY))
                }
                _ => UsageMapping::Default,
            },
            UP_DIGITIZER => match field.usage {
                DG_IN_RANGE | DG_CONFIDENCE | DG_CONTACT_COUNT | DG_CONTACT_MAX => {
                    UsageMapping::Ignore
                }
                DG_TIP_SWITCH => UsageMapping::Map(MappedTo::TouchButton),
                DG_CONTACT_ID => {
                    self.declare_axis(AxisCode::MtTrackingId, 0, MAX_TRACKING_ID);
                    if self.declared_slots.is_none() {
                        self.declared_slots = Some(self.class.max_contacts);
                    }
                    UsageMapping::Map(MappedTo::Axis(AxisCode::MtTrackingId))
                }
                DG_TIP_PRESSURE => {
                    self.declare_axis(AxisCode::MtPressure, field.logical_min, field.logical_max);
                    self.features |= OptionalFeature::Pressure;
                    UsageMapping::Map(MappedTo::Axis(AxisCode::MtPressure))
                }
                _ => UsageMapping::Default,
            },
            UP_VENDOR => UsageMapping::Ignore,
            _ => UsageMapping::Default,
        }
    }

    fn declare_axis(&mut self, code: AxisCode, logical_min: i32, logical_max: i32) {
        let desc = AxisDesc {
            code,
            logical_min,
            logical_max,
        };
        match self.axes.iter_mut().find(|a| a.code == code) {
            Some(existing) => *existing = desc,
            None => self.axes.push(desc),
        }
    }

    /// Feed one field value.
    ///
    /// Events of a completed frame are appended to `out`; nothing is appended
    /// otherwise.
    pub fn handle_field(
        &mut self,
        role: FieldRole,
        value: u32,
        out: &mut Vec<TouchEvent>,
    ) -> FieldOutcome {
        #[cfg(feature = "debug-log")]
        trace!(?role, value, contact_index = self.contact_index, "field");

        match role {
            FieldRole::InRange | FieldRole::Confidence | FieldRole::ContactMax => {
                FieldOutcome::Suppressed
            }
            FieldRole::TipSwitch => {
                self.accumulator.set_valid(value);
                FieldOutcome::Handled
            }
            FieldRole::ContactId => {
                self.accumulator.set_contact_id(value);
                FieldOutcome::Handled
            }
            FieldRole::TipPressure => {
                self.accumulator.set_pressure(value);
                self.features |= OptionalFeature::Pressure;
                FieldOutcome::Handled
            }
            FieldRole::X => {
                self.accumulator.set_x(value);
                FieldOutcome::Handled
            }
            FieldRole::Y => {
                self.accumulator.set_y(value);
                self.complete_contact();
                FieldOutcome::Handled
            }
            FieldRole::ContactCount => {
                if value != 0 {
                    self.expected_last_contact_index =
                        u8::try_from(value - 1).unwrap_or(u8::MAX);
                }
                if self.contact_index > self.expected_last_contact_index {
                    self.emit(out);
                }
                FieldOutcome::Suppressed
            }
            FieldRole::Other(_) => FieldOutcome::NotHandled,
        }
    }

    /// Feed a whole report, in order. Returns how many fields the caller still
    /// has to interpret itself.
    pub fn handle_report(
        &mut self,
        fields: &[(FieldRole, u32)],
        out: &mut Vec<TouchEvent>,
    ) -> usize {
        fields
            .iter()
            .filter(|(role, value)| {
                self.handle_field(*role, *value, out) == FieldOutcome::NotHandled
            })
            .count()
    }

    fn complete_contact(&mut self) {
        let contact = self.accumulator;
        if contact.valid {
            let committed = self
                .class
                .strategy
                .compute_slot(&contact, self.contact_index)
                .filter(|&slot| slot < self.class.max_contacts as usize)
                .map(|slot| self.slots.commit(slot, contact.x, contact.y, contact.pressure))
                .unwrap_or(false);
            if !committed {
                trace!(
                    contact_id = contact.contact_id,
                    contact_index = self.contact_index,
                    "contact not assignable to a slot, dropped"
                );
            }
        }
        self.contact_index = self.contact_index.saturating_add(1);
    }

    fn emit(&mut self, out: &mut Vec<TouchEvent>) {
        let before = out.len();
        let pressure = self.reports_pressure();
        emit_frame(&mut self.slots, &mut self.next_tracking_id, pressure, out);
        trace!(
            contacts = self.contact_index,
            events = out.len() - before,
            "frame emitted"
        );
        self.contact_index = 0;
    }

    #[cfg(test)]
    pub(crate) fn set_next_tracking_id(&mut self, id: u16) {
        self.next_tracking_id = id;
    }
}
