//! Slot store.
//!
//! One [`Slot`] per contact the device class can track. A slot is written when a
//! valid contact is completed (`valid` set) and consumed by the frame emitter,
//! which clears `valid` and keeps `prev_valid`/`tracking_id` as the state it
//! last surfaced.

use serde::Serialize;

/// Last committed state of one tracked contact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub x: u16,
    pub y: u16,
    pub pressure: u16,
    /// Written since the last emitted frame.
    pub valid: bool,
    /// Surfaced as active in the last emitted frame.
    pub prev_valid: bool,
    pub tracking_id: u16,
}

/// Fixed-capacity slot table, allocated once per device.
#[derive(Clone, Debug)]
pub struct SlotStore {
    slots: Box<[Slot]>,
}

impl SlotStore {
    pub fn new(capacity: u8) -> Self {
        Self {
            slots: vec![Slot::default(); capacity as usize].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.slots.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Slot> {
        self.slots.iter_mut()
    }

    /// Store a completed contact into slot `index`.
    ///
    /// Returns `false` and leaves the table untouched if `index` is out of range.
    /// `prev_valid` and `tracking_id` are never touched here.
    pub fn commit(&mut self, index: usize, x: u16, y: u16, pressure: u16) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                slot.x = x;
                slot.y = y;
                slot.pressure = pressure;
                slot.valid = true;
                true
            }
            None => false,
        }
    }
}
