//! Scripted panel.
//!
//! [`VirtualPanel`] stands in for real hardware: it records feature writes and
//! builds field sequences in the order a well-behaved panel sends them.

use crate::backends::FeatureWriter;
use crate::error::{Error, Result};
use crate::event::FieldRole;
use crate::metadata::DeviceMeta;

/// One finger as the panel would report it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Contact {
    pub tip: bool,
    pub contact_id: u16,
    pub x: u16,
    pub y: u16,
    /// Sent only when `Some`.
    pub pressure: Option<u16>,
}

impl Contact {
    /// A touching contact without pressure.
    pub fn down(contact_id: u16, x: u16, y: u16) -> Self {
        Self {
            tip: true,
            contact_id,
            x,
            y,
            pressure: None,
        }
    }

    /// A contact reported with its tip switch released.
    pub fn up(contact_id: u16) -> Self {
        Self {
            contact_id,
            ..Self::default()
        }
    }

    pub fn with_pressure(mut self, pressure: u16) -> Self {
        self.pressure = Some(pressure);
        self
    }

    /// Fields of this contact, ending with `Y`.
    pub fn fields(&self) -> Vec<(FieldRole, u32)> {
        let mut out = vec![
            (FieldRole::InRange, self.tip as u32),
            (FieldRole::TipSwitch, self.tip as u32),
            (FieldRole::Confidence, 1),
            (FieldRole::ContactId, self.contact_id as u32),
        ];
        if let Some(p) = self.pressure {
            out.push((FieldRole::TipPressure, p as u32));
        }
        out.push((FieldRole::X, self.x as u32));
        out.push((FieldRole::Y, self.y as u32));
        out
    }
}

/// Build a report carrying `contacts` followed by a contact count.
///
/// `contact_count` is normally `contacts.len()`; panels that split a frame over
/// several reports send the total in the first report and `0` afterwards.
pub fn report(contacts: &[Contact], contact_count: u32) -> Vec<(FieldRole, u32)> {
    let mut out: Vec<(FieldRole, u32)> = contacts.iter().flat_map(Contact::fields).collect();
    out.push((FieldRole::ContactCount, contact_count));
    out
}

/// Build a complete single-report frame.
pub fn frame(contacts: &[Contact]) -> Vec<(FieldRole, u32)> {
    report(contacts, contacts.len() as u32)
}

/// In-memory panel that records feature writes.
#[derive(Debug, Default)]
pub struct VirtualPanel {
    meta: DeviceMeta,
    writes: Vec<Vec<u8>>,
    fail_writes: bool,
}

impl VirtualPanel {
    pub fn new(path: &str) -> Self {
        Self {
            meta: DeviceMeta {
                bus: Some("virtual".to_string()),
                path: Some(path.to_string()),
                ..DeviceMeta::default()
            },
            ..Self::default()
        }
    }

    /// A virtual panel impersonating a USB vendor/product pair.
    pub fn with_ids(path: &str, vid: u16, pid: u16) -> Self {
        let mut panel = Self::new(path);
        panel.meta.vid = Some(vid);
        panel.meta.pid = Some(pid);
        panel
    }

    pub fn meta(&self) -> &DeviceMeta {
        &self.meta
    }

    /// Feature reports written so far.
    pub fn feature_writes(&self) -> &[Vec<u8>] {
        &self.writes
    }

    /// Make subsequent feature writes fail.
    pub fn fail_feature_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl FeatureWriter for VirtualPanel {
    fn write_feature(&mut self, report: &[u8]) -> Result<()> {
        if self.fail_writes {
            return Err(Error::FeatureWrite(format!(
                "{}: simulated failure",
                self.meta.device_id()
            )));
        }
        self.writes.push(report.to_vec());
        Ok(())
    }
}
