//! Frame emission.
//!
//! At the end of a frame every slot is compared against what was surfaced in
//! the previous frame:
//! - written and previously inactive: gets a fresh tracking id, then updates
//! - written and previously active: updates under its existing tracking id
//! - not written but previously active: closed
//! - not written and inactive: silent
//!
//! The oldest active contact (smallest tracking id under 16-bit wraparound)
//! drives the legacy single-pointer stream.

use crate::event::TouchEvent;
use crate::slots::SlotStore;

/// Bit that is set in `a - b` (mod 2^16) when `b` is circularly ahead of `a`.
const TRACKING_ID_SIGN: u16 = 0x8000;

/// Whether tracking id `a` was assigned before `b`, tolerating wraparound.
#[inline]
pub fn tracking_id_precedes(a: u16, b: u16) -> bool {
    a.wrapping_sub(b) & TRACKING_ID_SIGN != 0
}

struct Oldest {
    tracking_id: u16,
    x: u16,
    y: u16,
}

/// Take the next tracking id not held by a slot that is still surfaced.
///
/// At most `slots.len()` ids can be held, so the search ends quickly.
fn fresh_tracking_id(slots: &SlotStore, next_tracking_id: &mut u16) -> u16 {
    let mut id = *next_tracking_id;
    while slots.iter().any(|s| s.prev_valid && s.tracking_id == id) {
        id = id.wrapping_add(1);
    }
    *next_tracking_id = id.wrapping_add(1);
    id
}

/// Diff `slots` against the previous frame and append the resulting events to `out`.
///
/// `next_tracking_id` is the id handed to the next newly active slot; it advances
/// by one (wrapping) per assignment, skipping ids still held by active slots.
pub fn emit_frame(
    slots: &mut SlotStore,
    next_tracking_id: &mut u16,
    report_pressure: bool,
    out: &mut Vec<TouchEvent>,
) {
    let mut oldest: Option<Oldest> = None;

    for i in 0..slots.len() {
        let index = i as u8;
        let fresh = match slots.get(i) {
            Some(slot) if slot.valid && !slot.prev_valid => {
                Some(fresh_tracking_id(slots, next_tracking_id))
            }
            _ => None,
        };
        let Some(slot) = slots.get_mut(i) else {
            continue;
        };

        if !slot.valid {
            if slot.prev_valid {
                out.push(TouchEvent::SelectSlot(index));
                out.push(TouchEvent::SetTrackingId(None));
                slot.prev_valid = false;
            }
            continue;
        }

        if let Some(id) = fresh {
            slot.tracking_id = id;
        }

        out.push(TouchEvent::SelectSlot(index));
        out.push(TouchEvent::SetTrackingId(Some(slot.tracking_id)));
        out.push(TouchEvent::SetPositionX(slot.x));
        out.push(TouchEvent::SetPositionY(slot.y));
        if report_pressure {
            out.push(TouchEvent::SetPressure(slot.pressure));
        }
        slot.prev_valid = true;
        slot.valid = false;

        let replace = match &oldest {
            None => true,
            Some(current) => tracking_id_precedes(slot.tracking_id, current.tracking_id),
        };
        if replace {
            oldest = Some(Oldest {
                tracking_id: slot.tracking_id,
                x: slot.x,
                y: slot.y,
            });
        }
    }

    match oldest {
        Some(o) => {
            out.push(TouchEvent::SetLegacyButton(true));
            out.push(TouchEvent::SetLegacyX(o.x));
            out.push(TouchEvent::SetLegacyY(o.y));
        }
        None => out.push(TouchEvent::SetLegacyButton(false)),
    }

    out.push(TouchEvent::CommitFrame);
}
