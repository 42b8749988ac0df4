use std::collections::HashMap;

use crate::event::DeviceEvent;

/// Trait for reacting to touch events from any device.
pub trait TouchListener: Send {
    fn on_event(&mut self, event: &DeviceEvent);
}

/// Determines which kinds of events a listener wants to receive.
#[derive(Debug, Clone, Copy)]
pub enum EventFilter {
    All,
    /// Per-slot events only.
    SlotsOnly,
    /// Legacy single-pointer events only.
    LegacyOnly,
    Custom(fn(&DeviceEvent) -> bool),
}

impl EventFilter {
    fn accepts(&self, event: &DeviceEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::SlotsOnly => event.kind.is_slot(),
            EventFilter::LegacyOnly => event.kind.is_legacy(),
            EventFilter::Custom(f) => f(event),
        }
    }
}

/// Metadata-wrapped listener with filters and control flags.
struct ListenerEntry {
    listener: Box<dyn TouchListener>,
    enabled: bool,
    filter: EventFilter,
    tag: Option<String>, // only events from this device id
}

#[derive(Default)]
pub struct TouchEventBus {
    next_id: u64,
    listeners: HashMap<u64, ListenerEntry>,
}

impl TouchEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener with optional filtering and device tag.
    pub fn add_listener(
        &mut self,
        listener: impl TouchListener + 'static,
        filter: EventFilter,
        tag: Option<String>,
    ) -> u64 {
        let id = self.next_id;
        self.listeners.insert(
            id,
            ListenerEntry {
                listener: Box::new(listener),
                enabled: true,
                filter,
                tag,
            },
        );
        self.next_id += 1;
        id
    }

    /// Enables a previously registered listener.
    pub fn enable(&mut self, id: u64) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = true;
        }
    }

    /// Disables (mutes) a listener without removing it.
    pub fn disable(&mut self, id: u64) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = false;
        }
    }

    /// Unregisters a listener entirely.
    pub fn remove_listener(&mut self, id: u64) -> bool {
        self.listeners.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Emits one event to all active and matching listeners.
    fn emit(&mut self, event: &DeviceEvent) {
        for entry in self.listeners.values_mut() {
            if !entry.enabled {
                continue;
            }

            if let Some(ref wanted_id) = entry.tag {
                if event.device_id != *wanted_id {
                    continue;
                }
            }

            if entry.filter.accepts(event) {
                entry.listener.on_event(event);
            }
        }
    }

    /// Emits a batch of events to matching listeners, in order.
    pub fn emit_all(&mut self, events: &[DeviceEvent]) {
        for event in events {
            self.emit(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::TouchEvent;
    use std::sync::{Arc, Mutex};
    use std::time::Instant;

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<TouchEvent>>>);

    impl TouchListener for Recorder {
        fn on_event(&mut self, event: &DeviceEvent) {
            self.0.lock().unwrap().push(event.kind);
        }
    }

    fn ev(device: &str, kind: TouchEvent) -> DeviceEvent {
        DeviceEvent {
            device_id: device.to_string(),
            at: Instant::now(),
            kind,
        }
    }

    fn batch() -> Vec<DeviceEvent> {
        vec![
            ev("a", TouchEvent::SelectSlot(0)),
            ev("a", TouchEvent::SetTrackingId(Some(0))),
            ev("a", TouchEvent::SetLegacyButton(true)),
            ev("b", TouchEvent::SetLegacyButton(false)),
            ev("a", TouchEvent::CommitFrame),
        ]
    }

    #[test]
    fn filters_by_kind_and_tag() {
        let mut bus = TouchEventBus::new();
        let all = Recorder::default();
        let slots = Recorder::default();
        let legacy_b = Recorder::default();
        bus.add_listener(all.clone(), EventFilter::All, None);
        bus.add_listener(slots.clone(), EventFilter::SlotsOnly, None);
        bus.add_listener(legacy_b.clone(), EventFilter::LegacyOnly, Some("b".into()));

        bus.emit_all(&batch());

        assert_eq!(all.0.lock().unwrap().len(), 5);
        assert_eq!(
            *slots.0.lock().unwrap(),
            vec![TouchEvent::SelectSlot(0), TouchEvent::SetTrackingId(Some(0))]
        );
        assert_eq!(*legacy_b.0.lock().unwrap(), vec![TouchEvent::SetLegacyButton(false)]);
    }

    #[test]
    fn disabled_and_removed_listeners_are_silent() {
        let mut bus = TouchEventBus::new();
        let rec = Recorder::default();
        let id = bus.add_listener(rec.clone(), EventFilter::All, None);

        bus.disable(id);
        bus.emit_all(&batch());
        assert!(rec.0.lock().unwrap().is_empty());

        bus.enable(id);
        bus.emit_all(&batch()[..1]);
        assert_eq!(rec.0.lock().unwrap().len(), 1);

        assert!(bus.remove_listener(id));
        assert!(bus.is_empty());
        bus.emit_all(&batch());
        assert_eq!(rec.0.lock().unwrap().len(), 1);
    }

    #[test]
    fn custom_filter() {
        fn commits(e: &DeviceEvent) -> bool {
            e.kind == TouchEvent::CommitFrame
        }
        let mut bus = TouchEventBus::new();
        let rec = Recorder::default();
        bus.add_listener(rec.clone(), EventFilter::Custom(commits), None);
        bus.emit_all(&batch());
        assert_eq!(*rec.0.lock().unwrap(), vec![TouchEvent::CommitFrame]);
    }
}
