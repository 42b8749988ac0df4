//! Attach/detach lifecycle for many panels.
//!
//! [`DeviceManager`] owns one [`TouchDevice`] per attached panel. Panels are
//! independent: fields delivered for one never touch another's state. Callers
//! route each field to the right panel by device id and receive the resulting
//! events tagged with that id.

use std::time::Instant;

use tracing::{debug, info};

use crate::backends::{enable_input_mode, FeatureWriter};
use crate::class::ClassId;
use crate::config::DeviceTable;
use crate::device::TouchDevice;
use crate::error::{Error, Result};
use crate::event::{DeviceEvent, FieldOutcome, FieldRole, TouchEvent};
use crate::metadata::DeviceMeta;
use crate::snapshot::Snapshot;
use crate::usage::{FieldInfo, UsageMapping};

struct ManagedDevice {
    id: String,
    meta: DeviceMeta,
    touch: TouchDevice,
}

pub struct DeviceManager {
    table: DeviceTable,
    devices: Vec<ManagedDevice>,
    scratch: Vec<TouchEvent>,
}

impl Default for DeviceManager {
    fn default() -> Self {
        Self::new(DeviceTable::builtin())
    }
}

impl DeviceManager {
    pub fn new(table: DeviceTable) -> Self {
        Self {
            table,
            devices: Vec::new(),
            scratch: Vec::new(),
        }
    }

    /// Open and attach every panel `table` knows about.
    #[cfg(feature = "hid")]
    pub fn discover(api: &hidapi::HidApi, table: DeviceTable) -> Self {
        let panels = crate::backends::hid::probe_devices(api, &table);
        let mut manager = Self::new(table);
        for mut panel in panels {
            if let Err(e) = manager.attach_with_class(panel.meta, panel.class, &mut panel.writer) {
                tracing::warn!(error = %e, "skipping panel");
            }
        }
        info!("Discovered {} multitouch panel(s)", manager.len());
        manager
    }

    pub fn table(&self) -> &DeviceTable {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Attach a panel, picking its class from the device table.
    pub fn attach(&mut self, meta: DeviceMeta, writer: &mut dyn FeatureWriter) -> Result<String> {
        let (vendor_id, product_id) = (meta.vid.unwrap_or(0), meta.pid.unwrap_or(0));
        let class = self
            .table
            .lookup(vendor_id, product_id)
            .ok_or(Error::UnknownDevice {
                vendor_id,
                product_id,
            })?;
        self.attach_with_class(meta, class, writer)
    }

    /// Attach a panel with an explicit class.
    ///
    /// A failed input-mode write is logged and does not abort the attach; the
    /// panel keeps reporting in whatever mode it is in.
    pub fn attach_with_class(
        &mut self,
        meta: DeviceMeta,
        class: ClassId,
        writer: &mut dyn FeatureWriter,
    ) -> Result<String> {
        let id = meta.device_id();
        if self.position(&id).is_some() {
            return Err(Error::AlreadyAttached(id));
        }

        let class = class.class();
        if let Err(e) = enable_input_mode(class, writer) {
            debug!(device = %meta, error = %e, "continuing without input mode");
        }

        info!(device = %meta, class = ?class.id, slots = class.max_contacts, "attached");
        self.devices.push(ManagedDevice {
            id: id.clone(),
            meta,
            touch: TouchDevice::new(class),
        });
        Ok(id)
    }

    /// Detach a panel and hand back its final state.
    pub fn detach(&mut self, id: &str) -> Result<TouchDevice> {
        let idx = self
            .position(id)
            .ok_or_else(|| Error::NotAttached(id.to_string()))?;
        let dev = self.devices.remove(idx);
        info!(device = %dev.meta, "detached");
        Ok(dev.touch)
    }

    pub fn device(&self, id: &str) -> Option<&TouchDevice> {
        self.devices.iter().find(|d| d.id == id).map(|d| &d.touch)
    }

    pub fn meta(&self, id: &str) -> Option<&DeviceMeta> {
        self.devices.iter().find(|d| d.id == id).map(|d| &d.meta)
    }

    /// Iterate `(device_id, device)` pairs in attach order.
    pub fn devices(&self) -> impl Iterator<Item = (&str, &TouchDevice)> {
        self.devices.iter().map(|d| (d.id.as_str(), &d.touch))
    }

    /// Forward a descriptor field to the panel's usage mapping.
    pub fn map_usage(&mut self, id: &str, field: &FieldInfo) -> Result<UsageMapping> {
        Ok(self.get_mut(id)?.touch.map_usage(field))
    }

    /// Deliver one field value to a panel; emitted events are appended to `out`.
    pub fn handle_field(
        &mut self,
        id: &str,
        role: FieldRole,
        value: u32,
        out: &mut Vec<DeviceEvent>,
    ) -> Result<FieldOutcome> {
        let mut scratch = std::mem::take(&mut self.scratch);
        scratch.clear();
        let dev = self.get_mut(id)?;
        let outcome = dev.touch.handle_field(role, value, &mut scratch);
        if !scratch.is_empty() {
            let at = Instant::now();
            out.extend(scratch.drain(..).map(|kind| DeviceEvent {
                device_id: dev.id.clone(),
                at,
                kind,
            }));
        }
        self.scratch = scratch;
        Ok(outcome)
    }

    /// Deliver a whole report to a panel.
    pub fn handle_report(
        &mut self,
        id: &str,
        fields: &[(FieldRole, u32)],
    ) -> Result<Vec<DeviceEvent>> {
        let mut out = Vec::new();
        for &(role, value) in fields {
            self.handle_field(id, role, value, &mut out)?;
        }
        Ok(out)
    }

    /// Surfaced slot state of every attached panel.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot(
            self.devices
                .iter()
                .map(|d| (d.id.clone(), d.touch.snapshot()))
                .collect(),
        )
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.devices.iter().position(|d| d.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut ManagedDevice> {
        self.devices
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| Error::NotAttached(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::virtual_input::{frame, Contact, VirtualPanel};
    use crate::backends::NoFeatures;
    use crate::ids::{PRODUCT_CYPRESS_TRUETOUCH, VENDOR_CYPRESS};

    #[test]
    fn attach_by_table_writes_input_mode() {
        let mut mgr = DeviceManager::default();
        let mut panel =
            VirtualPanel::with_ids("virtual:cypress", VENDOR_CYPRESS, PRODUCT_CYPRESS_TRUETOUCH);
        let id = mgr.attach(panel.meta().clone(), &mut panel).unwrap();
        assert_eq!(id, "virtual:cypress");
        assert_eq!(panel.feature_writes(), &[vec![3u8, 2]]);
        assert_eq!(mgr.device(&id).unwrap().class().id, ClassId::Cypress);
        assert_eq!(mgr.device(&id).unwrap().slots().len(), 10);
    }

    #[test]
    fn unknown_and_duplicate_devices_are_rejected() {
        let mut mgr = DeviceManager::default();
        let mut panel = VirtualPanel::with_ids("virtual:x", 0xdead, 0xbeef);
        assert!(matches!(
            mgr.attach(panel.meta().clone(), &mut panel),
            Err(Error::UnknownDevice { vendor_id: 0xdead, product_id: 0xbeef })
        ));

        mgr.attach_with_class(panel.meta().clone(), ClassId::Dual1, &mut NoFeatures).unwrap();
        assert!(matches!(
            mgr.attach_with_class(panel.meta().clone(), ClassId::Dual1, &mut NoFeatures),
            Err(Error::AlreadyAttached(_))
        ));
        assert_eq!(mgr.len(), 1);
    }

    #[test]
    fn failed_input_mode_still_attaches() {
        let mut mgr = DeviceManager::default();
        let mut panel = VirtualPanel::new("virtual:mosart");
        panel.fail_feature_writes(true);
        let id = mgr
            .attach_with_class(panel.meta().clone(), ClassId::Mosart, &mut panel)
            .unwrap();
        assert!(mgr.device(&id).is_some());
    }

    #[test]
    fn devices_do_not_share_state() {
        let mut mgr = DeviceManager::default();
        let (pa, pb) = (VirtualPanel::new("a"), VirtualPanel::new("b"));
        let a = mgr
            .attach_with_class(pa.meta().clone(), ClassId::Dual1, &mut NoFeatures)
            .unwrap();
        let b = mgr
            .attach_with_class(pb.meta().clone(), ClassId::Dual1, &mut NoFeatures)
            .unwrap();

        let events = mgr.handle_report(&a, &frame(&[Contact::down(0, 10, 20)])).unwrap();
        assert!(events.iter().all(|e| e.device_id == a));
        assert_eq!(events.last().map(|e| e.kind), Some(TouchEvent::CommitFrame));

        let events = mgr.handle_report(&b, &frame(&[Contact::down(1, 1, 2)])).unwrap();
        // b has its own tracking-id sequence.
        assert!(events.iter().any(|e| e.kind == TouchEvent::SetTrackingId(Some(0))));

        let snap = mgr.snapshot();
        assert_eq!(snap.active_contacts(), 2);
        assert!(snap.get(&a).unwrap()[0].active);
        assert!(snap.get(&b).unwrap()[1].active);
    }

    #[test]
    fn routing_to_missing_device_fails() {
        let mut mgr = DeviceManager::default();
        let mut out = Vec::new();
        assert!(matches!(
            mgr.handle_field("nope", FieldRole::X, 1, &mut out),
            Err(Error::NotAttached(_))
        ));
        assert!(matches!(mgr.detach("nope"), Err(Error::NotAttached(_))));
    }

    #[test]
    fn detach_returns_device() {
        let mut mgr = DeviceManager::default();
        let id = mgr
            .attach_with_class(DeviceMeta::usb(1, 2), ClassId::Dual2, &mut NoFeatures)
            .unwrap();
        mgr.handle_report(&id, &frame(&[Contact::down(0, 3, 4)])).unwrap();
        let dev = mgr.detach(&id).unwrap();
        assert_eq!(dev.next_tracking_id(), 1);
        assert!(mgr.is_empty());
    }
}
