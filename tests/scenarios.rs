//! End-to-end frame scenarios driven through the public field API.

use hid_multitouch::backends::virtual_input::{frame, report, Contact};
use hid_multitouch::{ClassId, FieldOutcome, FieldRole, TouchDevice, TouchEvent};
use TouchEvent::*;

fn run(dev: &mut TouchDevice, fields: &[(FieldRole, u32)]) -> Vec<TouchEvent> {
    let mut out = Vec::new();
    let unhandled = dev.handle_report(fields, &mut out);
    assert_eq!(unhandled, 0);
    out
}

#[test]
fn two_finger_frame_by_raw_id() {
    let mut dev = TouchDevice::new(ClassId::Dual1.class());
    let out = run(
        &mut dev,
        &frame(&[Contact::down(0, 10, 20), Contact::down(1, 30, 40)]),
    );
    assert_eq!(
        out,
        vec![
            SelectSlot(0),
            SetTrackingId(Some(0)),
            SetPositionX(10),
            SetPositionY(20),
            SelectSlot(1),
            SetTrackingId(Some(1)),
            SetPositionX(30),
            SetPositionY(40),
            SetLegacyButton(true),
            SetLegacyX(10),
            SetLegacyY(20),
            CommitFrame,
        ]
    );
}

#[test]
fn lifted_finger_closes_its_slot() {
    let mut dev = TouchDevice::new(ClassId::Dual1.class());
    run(&mut dev, &frame(&[Contact::down(0, 10, 20)]));

    let out = run(&mut dev, &frame(&[Contact::up(0)]));
    assert_eq!(
        out,
        vec![SelectSlot(0), SetTrackingId(None), SetLegacyButton(false), CommitFrame]
    );
}

#[test]
fn empty_frames_are_idempotent() {
    let mut dev = TouchDevice::new(ClassId::Dual2.class());
    run(&mut dev, &frame(&[Contact::down(0, 1, 1), Contact::down(1, 2, 2)]));

    let first = run(&mut dev, &frame(&[Contact::up(0), Contact::up(1)]));
    assert_eq!(
        first,
        vec![
            SelectSlot(0),
            SetTrackingId(None),
            SelectSlot(1),
            SetTrackingId(None),
            SetLegacyButton(false),
            CommitFrame,
        ]
    );

    let second = run(&mut dev, &frame(&[Contact::up(0), Contact::up(1)]));
    assert_eq!(second, vec![SetLegacyButton(false), CommitFrame]);
}

#[test]
fn continuing_touch_keeps_tracking_id() {
    let mut dev = TouchDevice::new(ClassId::Dual1.class());
    run(&mut dev, &frame(&[Contact::down(1, 5, 5)]));
    let out = run(&mut dev, &frame(&[Contact::down(1, 6, 7)]));
    assert_eq!(
        &out[..4],
        &[SelectSlot(1), SetTrackingId(Some(0)), SetPositionX(6), SetPositionY(7)]
    );
    assert_eq!(dev.next_tracking_id(), 1);
}

#[test]
fn new_touch_in_reused_slot_gets_new_id() {
    let mut dev = TouchDevice::new(ClassId::Dual1.class());
    run(&mut dev, &frame(&[Contact::down(0, 5, 5)]));
    run(&mut dev, &frame(&[Contact::up(0)]));
    let out = run(&mut dev, &frame(&[Contact::down(0, 5, 5)]));
    assert_eq!(out[1], SetTrackingId(Some(1)));
}

#[test]
fn legacy_pointer_follows_oldest_contact() {
    let mut dev = TouchDevice::new(ClassId::Dual1.class());
    // Finger on slot 1 first.
    run(&mut dev, &frame(&[Contact::down(1, 100, 100)]));
    // Second finger lands on slot 0; slot 1 is still the oldest.
    let out = run(
        &mut dev,
        &frame(&[Contact::down(0, 1, 1), Contact::down(1, 101, 101)]),
    );
    assert_eq!(
        &out[out.len() - 4..],
        &[SetLegacyButton(true), SetLegacyX(101), SetLegacyY(101), CommitFrame]
    );
    // Oldest lifts; the legacy pointer moves to the remaining finger.
    let out = run(&mut dev, &frame(&[Contact::down(0, 2, 2), Contact::up(1)]));
    assert_eq!(
        &out[out.len() - 4..],
        &[SetLegacyButton(true), SetLegacyX(2), SetLegacyY(2), CommitFrame]
    );
}

#[test]
fn cypress_zero_id_after_first_contact_is_ignored() {
    let mut dev = TouchDevice::new(ClassId::Cypress.class());
    let out = run(
        &mut dev,
        &frame(&[Contact::down(0, 10, 10), Contact::down(0, 99, 99)]),
    );
    assert_eq!(
        out,
        vec![
            SelectSlot(0),
            SetTrackingId(Some(0)),
            SetPositionX(10),
            SetPositionY(10),
            SetLegacyButton(true),
            SetLegacyX(10),
            SetLegacyY(10),
            CommitFrame,
        ]
    );
}

#[test]
fn cypress_nonzero_ids_map_directly() {
    let mut dev = TouchDevice::new(ClassId::Cypress.class());
    let out = run(
        &mut dev,
        &frame(&[Contact::down(3, 1, 1), Contact::down(9, 2, 2)]),
    );
    assert!(out.contains(&SelectSlot(3)));
    assert!(out.contains(&SelectSlot(9)));
}

#[test]
fn mosart_ids_are_one_based() {
    let mut dev = TouchDevice::new(ClassId::Mosart.class());
    let out = run(
        &mut dev,
        &frame(&[Contact::down(1, 1, 1), Contact::down(2, 2, 2), Contact::down(0, 3, 3)]),
    );
    let slots: Vec<u8> = out
        .iter()
        .filter_map(|e| match e {
            SelectSlot(i) => Some(*i),
            _ => None,
        })
        .collect();
    assert_eq!(slots, vec![0, 1]);
}

#[test]
fn by_sequence_uses_report_position() {
    let mut dev = TouchDevice::new(ClassId::Dual2.class());
    let out = run(
        &mut dev,
        &frame(&[Contact::down(40, 1, 1), Contact::down(17, 2, 2)]),
    );
    assert_eq!(&out[..2], &[SelectSlot(0), SetTrackingId(Some(0))]);
    assert_eq!(&out[4..6], &[SelectSlot(1), SetTrackingId(Some(1))]);
}

#[test]
fn frame_split_across_reports() {
    let mut dev = TouchDevice::new(ClassId::Dual2.class());
    let first = run(&mut dev, &report(&[Contact::down(0, 1, 1)], 2));
    assert!(first.is_empty());
    let second = run(&mut dev, &report(&[Contact::down(1, 2, 2)], 0));
    assert_eq!(second.last(), Some(&CommitFrame));
    assert!(second.contains(&SelectSlot(0)));
    assert!(second.contains(&SelectSlot(1)));
}

#[test]
fn pressure_is_reported_once_seen() {
    let mut dev = TouchDevice::new(ClassId::Dual1.class());
    let out = run(&mut dev, &frame(&[Contact::down(0, 1, 2).with_pressure(77)]));
    assert_eq!(
        &out[..5],
        &[SelectSlot(0), SetTrackingId(Some(0)), SetPositionX(1), SetPositionY(2), SetPressure(77)]
    );
}

#[test]
fn unknown_fields_fall_back_to_caller() {
    let mut dev = TouchDevice::new(ClassId::Dual1.class());
    let mut out = Vec::new();
    assert_eq!(
        dev.handle_field(FieldRole::from_usage(0x0009_0001), 1, &mut out),
        FieldOutcome::NotHandled
    );
    let mut fields = frame(&[Contact::down(0, 1, 1)]);
    fields.insert(0, (FieldRole::Other(0x000d_0048), 3));
    assert_eq!(dev.handle_report(&fields, &mut out), 1);
    assert_eq!(out.last(), Some(&CommitFrame));
}

#[test]
fn field_order_contract_y_completes_contact() {
    // Fields after Y belong to the next contact; a panel sending Y before X
    // commits the stale X.
    let mut dev = TouchDevice::new(ClassId::Dual1.class());
    let mut out = Vec::new();
    for (role, value) in [
        (FieldRole::TipSwitch, 1),
        (FieldRole::ContactId, 0),
        (FieldRole::X, 11),
        (FieldRole::Y, 22),
        (FieldRole::X, 999),
        (FieldRole::ContactCount, 1),
    ] {
        dev.handle_field(role, value, &mut out);
    }
    assert_eq!(&out[2..4], &[SetPositionX(11), SetPositionY(22)]);
}

#[test]
fn held_contact_keeps_unique_id_across_wraparound() {
    let mut dev = TouchDevice::new(ClassId::Dual1.class());
    run(&mut dev, &frame(&[Contact::down(0, 1, 1), Contact::down(1, 2, 2)]));

    // Slot 0 stays down while slot 1 taps through the whole id space.
    for _ in 0..u16::MAX {
        run(&mut dev, &frame(&[Contact::down(0, 1, 1), Contact::up(1)]));
        run(&mut dev, &frame(&[Contact::down(0, 1, 1), Contact::down(1, 2, 2)]));
    }

    let snapshot = dev.snapshot();
    assert_eq!(snapshot[0].tracking_id, Some(0));
    // Id 0 is still held by slot 0, so slot 1 moves past it.
    assert_eq!(snapshot[1].tracking_id, Some(1));
    assert_eq!(dev.next_tracking_id(), 2);
}
