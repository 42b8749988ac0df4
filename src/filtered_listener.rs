use crate::event::DeviceEvent;
use crate::eventbus::TouchListener;

/// Wraps a listener and filters events based on a user-supplied predicate.
pub struct FilteredListener {
    predicate: Box<dyn Fn(&DeviceEvent) -> bool + Send + Sync>,
    inner: Box<dyn TouchListener>,
}

impl FilteredListener {
    pub fn new(
        predicate: impl Fn(&DeviceEvent) -> bool + Send + Sync + 'static,
        inner: Box<dyn TouchListener>,
    ) -> Self {
        Self {
            predicate: Box::new(predicate),
            inner,
        }
    }
}

impl TouchListener for FilteredListener {
    fn on_event(&mut self, event: &DeviceEvent) {
        if (self.predicate)(event) {
            self.inner.on_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::TouchEvent;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Instant;

    struct Counter(Arc<AtomicUsize>);

    impl TouchListener for Counter {
        fn on_event(&mut self, _event: &DeviceEvent) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn forwards_matching_events_only() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut listener = FilteredListener::new(
            |e| matches!(e.kind, TouchEvent::SetTrackingId(None)),
            Box::new(Counter(count.clone())),
        );
        for kind in [
            TouchEvent::SetTrackingId(Some(1)),
            TouchEvent::SetTrackingId(None),
            TouchEvent::CommitFrame,
        ] {
            listener.on_event(&DeviceEvent {
                device_id: "x".into(),
                at: Instant::now(),
                kind,
            });
        }
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
