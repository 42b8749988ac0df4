//! Slot assignment.
//!
//! Panels number their contacts in different ways. A [`SlotStrategy`] turns the
//! identifier a device attached to a completed contact into the index of the
//! slot that should hold it.

use crate::accumulator::ContactAccumulator;

/// Rule mapping a completed contact to a slot index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotStrategy {
    /// The device reports stable per-finger ids already in `0..max_contacts`.
    ByRawId,
    /// The slot is the contact's 0-based position within the current frame.
    BySequence,
    /// Like `ByRawId`, except that contact id `0` past the first contact of a
    /// frame is the device's end-of-contacts marker.
    Cypress,
    /// Contact ids start at 1.
    Mosart,
}

impl SlotStrategy {
    /// Compute the slot for `contact`, which was the `contact_index`-th contact of the frame.
    ///
    /// Returns `None` when the contact cannot be assigned. The result is not
    /// range-checked against the class's slot count; the slot store does that.
    pub fn compute_slot(self, contact: &ContactAccumulator, contact_index: u8) -> Option<usize> {
        match self {
            SlotStrategy::ByRawId => Some(contact.contact_id as usize),
            SlotStrategy::BySequence => Some(contact_index as usize),
            SlotStrategy::Cypress => {
                if contact.contact_id != 0 || contact_index == 0 {
                    Some(contact.contact_id as usize)
                } else {
                    None
                }
            }
            SlotStrategy::Mosart => (contact.contact_id as usize).checked_sub(1),
        }
    }
}
