use hid_multitouch::backends::virtual_input::{frame, Contact, VirtualPanel};
use hid_multitouch::logger::Logger;
use hid_multitouch::{ClassId, DeviceManager, EventFilter, TouchEventBus};

fn main() -> hid_multitouch::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // A virtual Cypress panel; the manager writes its input-mode report on attach.
    let mut panel = VirtualPanel::new("virtual:demo");
    let mut manager = DeviceManager::default();
    let id = manager.attach_with_class(panel.meta().clone(), ClassId::Cypress, &mut panel)?;
    println!("(Virtual) feature writes: {:?}", panel.feature_writes());

    let mut bus = TouchEventBus::new();
    bus.add_listener(Logger::new(), EventFilter::All, None);

    // Two fingers land, one moves, then both lift.
    let frames = [
        frame(&[Contact::down(0, 100, 200), Contact::down(3, 400, 300)]),
        frame(&[Contact::down(0, 110, 210), Contact::up(3)]),
        frame(&[Contact::up(0)]),
    ];
    for fields in &frames {
        let events = manager.handle_report(&id, fields)?;
        bus.emit_all(&events);
    }

    for slot in manager.snapshot().get(&id).unwrap_or_default() {
        println!("(Virtual) slot {} active={}", slot.slot, slot.active);
    }
    Ok(())
}
