//! `hidapi` backend.
//!
//! Discovery walks `HidApi::device_list()`, keeps entries whose vendor/product
//! pair has a class in the [`DeviceTable`], and opens them so the attach
//! sequence can write the input-mode feature report.
//!
//! Report reading and descriptor parsing are left to the host; this backend
//! only covers what attaching a panel needs.

use hidapi::{DeviceInfo, HidApi, HidDevice};
use tracing::{debug, warn};

use crate::backends::FeatureWriter;
use crate::class::ClassId;
use crate::config::DeviceTable;
use crate::error::{Error, Result};
use crate::metadata::DeviceMeta;

/// Feature-report writer over an open HID handle.
pub struct HidFeatureWriter {
    raw: HidDevice,
}

impl HidFeatureWriter {
    pub fn new(raw: HidDevice) -> Self {
        Self { raw }
    }

    pub fn open(info: &DeviceInfo, api: &HidApi) -> Result<Self> {
        Ok(Self::new(info.open_device(api)?))
    }

    pub fn into_inner(self) -> HidDevice {
        self.raw
    }
}

impl FeatureWriter for HidFeatureWriter {
    fn write_feature(&mut self, report: &[u8]) -> Result<()> {
        self.raw
            .send_feature_report(report)
            .map_err(|e| Error::FeatureWrite(e.to_string()))
    }
}

/// A matched, opened panel ready to attach.
pub struct DiscoveredPanel {
    pub meta: DeviceMeta,
    pub class: ClassId,
    pub writer: HidFeatureWriter,
}

/// Metadata for a `hidapi` device entry.
pub fn meta_from_info(info: &DeviceInfo) -> DeviceMeta {
    DeviceMeta {
        bus: Some("hid".to_string()),
        vid: Some(info.vendor_id()),
        pid: Some(info.product_id()),
        product_string: info.product_string().map(str::to_string),
        serial_number: info.serial_number().map(str::to_string),
        interface_number: Some(info.interface_number()),
        usage_page: Some(info.usage_page()),
        usage: Some(info.usage()),
        path: Some(info.path().to_string_lossy().into_owned()),
    }
}

/// Open every listed device that `table` assigns a class to.
pub fn probe_devices(api: &HidApi, table: &DeviceTable) -> Vec<DiscoveredPanel> {
    let mut found = Vec::new();
    for info in api.device_list() {
        let Some(class) = table.lookup(info.vendor_id(), info.product_id()) else {
            continue;
        };
        let meta = meta_from_info(info);
        match HidFeatureWriter::open(info, api) {
            Ok(writer) => {
                debug!(device = %meta, ?class, "matched multitouch panel");
                found.push(DiscoveredPanel {
                    meta,
                    class,
                    writer,
                });
            }
            Err(e) => warn!(device = %meta, error = %e, "failed to open panel"),
        }
    }
    found
}
