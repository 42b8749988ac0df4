//! Device metadata snapshot.
//!
//! [`DeviceMeta`] is a lightweight, cloneable description of an attached panel,
//! used to pick its class and to key it in the [`DeviceManager`](crate::manager::DeviceManager).
//! Backends populate what they know; unknown fields remain `None`.
//!
//! # Conventions
//! - `bus` is a short, human-readable bus hint like `"usb"` or `"virtual"`.
//! - `path` is an OS/topology path (opaque string) useful for diagnostics.
//!
//! ## Identity
//! `vid`/`pid` select the device class. Two identical panels share both, so
//! [`DeviceMeta::device_id`] prefers the path (then the serial number) to tell
//! them apart.

use serde::{Deserialize, Serialize};

/// Snapshot of metadata describing a single device.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceMeta {
    /// High-level bus classification (e.g., `"usb"`, `"virtual"`).
    pub bus: Option<String>,

    /// USB Vendor ID (VID), if known.
    pub vid: Option<u16>,

    /// USB Product ID (PID), if known.
    pub pid: Option<u16>,

    /// Human-readable product name from the driver/firmware.
    pub product_string: Option<String>,

    /// Device serial number supplied by firmware/OS, if present.
    pub serial_number: Option<String>,

    /// HID interface index (platform-reported).
    ///
    /// Some stacks use `-1` to mean “not applicable”.
    pub interface_number: Option<i32>,

    /// HID Usage Page (`0x0d` for Digitizer), if known.
    pub usage_page: Option<u16>,

    /// HID Usage within the page (`0x04` Touch Screen), if known.
    pub usage: Option<u16>,

    /// OS/topological path to the device.
    pub path: Option<String>,
}

impl DeviceMeta {
    /// Metadata carrying only a vendor/product pair.
    pub fn usb(vid: u16, pid: u16) -> Self {
        Self {
            bus: Some("usb".to_string()),
            vid: Some(vid),
            pid: Some(pid),
            ..Self::default()
        }
    }

    /// Stable key for this device: path, else `vid:pid:serial`, else `vid:pid`.
    pub fn device_id(&self) -> String {
        if let Some(path) = &self.path {
            return path.clone();
        }
        let base = format!("{:04x}:{:04x}", self.vid.unwrap_or(0), self.pid.unwrap_or(0));
        match &self.serial_number {
            Some(serial) if !serial.is_empty() => format!("{base}:{serial}"),
            _ => base,
        }
    }
}

impl std::fmt::Display for DeviceMeta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.product_string {
            Some(name) => write!(f, "{} ({})", name, self.device_id()),
            None => f.write_str(&self.device_id()),
        }
    }
}
