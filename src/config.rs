//! Device table: which class drives which panel.
//!
//! The table ships with the panels the engine was built for (see [`ids`](crate::ids))
//! and can be extended from a TOML or JSON file:
//!
//! ```toml
//! [[devices]]
//! vendor_id = 0x1234
//! product_id = 0x0001
//! class = "dual2"
//! name = "Bench panel"
//! ```
//!
//! Later entries win when the same vendor/product pair appears twice.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::class::ClassId;
use crate::error::{Error, Result};
use crate::ids::*;

/// One vendor/product → class assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceEntry {
    pub vendor_id: u16,
    pub product_id: u16,
    pub class: ClassId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DeviceEntry {
    pub fn new(vendor_id: u16, product_id: u16, class: ClassId, name: &str) -> Self {
        Self {
            vendor_id,
            product_id,
            class,
            name: Some(name.to_string()),
        }
    }
}

/// Serializable vendor/product → class table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceTable {
    #[serde(default)]
    pub devices: Vec<DeviceEntry>,
}

impl DeviceTable {
    /// Panels with a known class.
    pub fn builtin() -> Self {
        Self {
            devices: vec![
                // PixCir-based panels
                DeviceEntry::new(
                    VENDOR_HANVON,
                    PRODUCT_HANVON_MULTITOUCH,
                    ClassId::Dual1,
                    "Hanvon multitouch",
                ),
                DeviceEntry::new(
                    VENDOR_CANDO,
                    PRODUCT_CANDO_PIXCIR_MULTI_TOUCH,
                    ClassId::Dual1,
                    "Cando PixCir",
                ),
                // Cando panels
                DeviceEntry::new(
                    VENDOR_CANDO,
                    PRODUCT_CANDO_MULTI_TOUCH,
                    ClassId::Dual2,
                    "Cando multitouch",
                ),
                DeviceEntry::new(
                    VENDOR_CANDO,
                    PRODUCT_CANDO_MULTI_TOUCH_11_6,
                    ClassId::Dual2,
                    "Cando multitouch 11.6\"",
                ),
                DeviceEntry::new(
                    VENDOR_CYPRESS,
                    PRODUCT_CYPRESS_TRUETOUCH,
                    ClassId::Cypress,
                    "Cypress TrueTouch",
                ),
                // MosArt panels
                DeviceEntry::new(VENDOR_ASUS, PRODUCT_ASUS_T91MT, ClassId::Mosart, "Asus T91MT"),
                DeviceEntry::new(
                    VENDOR_ASUS,
                    PRODUCT_ASUSTEK_MULTITOUCH_YFO,
                    ClassId::Mosart,
                    "AsusTek multitouch YFO",
                ),
            ],
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a table from disk. `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let table = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        debug!(path = %path.display(), entries = table.devices.len(), "loaded device table");
        Ok(table)
    }

    /// Built-in table extended by the file at `path`.
    pub fn builtin_with(path: impl AsRef<Path>) -> Result<Self> {
        let mut table = Self::builtin();
        table.merge(Self::load(path)?);
        Ok(table)
    }

    /// Append `other`; its entries override existing ones for the same vendor/product.
    pub fn merge(&mut self, other: DeviceTable) {
        for entry in other.devices {
            self.devices
                .retain(|e| !(e.vendor_id == entry.vendor_id && e.product_id == entry.product_id));
            self.devices.push(entry);
        }
    }

    pub fn entry(&self, vendor_id: u16, product_id: u16) -> Option<&DeviceEntry> {
        self.devices
            .iter()
            .rev()
            .find(|e| e.vendor_id == vendor_id && e.product_id == product_id)
    }

    pub fn lookup(&self, vendor_id: u16, product_id: u16) -> Option<ClassId> {
        self.entry(vendor_id, product_id).map(|e| e.class)
    }

    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}
