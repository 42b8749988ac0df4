use tracing::debug;

use crate::event::DeviceEvent;
use crate::eventbus::TouchListener;

/// A simple listener that logs every touch event at debug level.
#[derive(Default)]
pub struct Logger;

impl Logger {
    pub fn new() -> Self {
        Logger
    }
}

impl TouchListener for Logger {
    fn on_event(&mut self, event: &DeviceEvent) {
        debug!(device = %event.device_id, kind = ?event.kind, "touch");
    }
}
