//! Device I/O backends.
//!
//! The engine never talks to hardware. Backends provide the one thing attach
//! needs from a device: writing the feature report that switches some panels
//! into multitouch mode.
//!
//! # Feature flags
//! - **`hid`**: enables the `hidapi` backend (discovery + feature writes).
//!
//! [`virtual_input::VirtualPanel`] is always available for scripted input.

use tracing::{debug, warn};

use crate::class::DeviceClass;
use crate::error::Result;

#[cfg(feature = "hid")]
#[cfg_attr(docsrs, doc(cfg(feature = "hid")))]
pub mod hid;
pub mod virtual_input;

/// Sink for HID feature reports.
pub trait FeatureWriter {
    /// Send one feature report. The first byte is the report id.
    fn write_feature(&mut self, report: &[u8]) -> Result<()>;
}

/// Writer for devices whose class needs no feature write.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFeatures;

impl FeatureWriter for NoFeatures {
    fn write_feature(&mut self, _report: &[u8]) -> Result<()> {
        Ok(())
    }
}

/// Switch the panel into multitouch reporting if its class requires it.
///
/// Returns `Ok(false)` when the class has no input-mode report.
pub fn enable_input_mode(class: &DeviceClass, writer: &mut dyn FeatureWriter) -> Result<bool> {
    let Some(report) = class.input_mode_report() else {
        return Ok(false);
    };
    match writer.write_feature(&report) {
        Ok(()) => {
            debug!(class = ?class.id, report_id = report[0], "input mode set");
            Ok(true)
        }
        Err(e) => {
            warn!(class = ?class.id, report_id = report[0], error = %e, "failed to set input mode");
            Err(e)
        }
    }
}
