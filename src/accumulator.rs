//! Per-contact field accumulation.

/// Field values collected for the contact currently being read.
///
/// Values are overwritten as fields arrive; nothing is cleared between
/// contacts. Devices are expected to send every field of a contact again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactAccumulator {
    /// Tip switch: the contact is touching the surface.
    pub valid: bool,
    /// Device-assigned contact identifier.
    pub contact_id: u16,
    pub x: u16,
    pub y: u16,
    pub pressure: u16,
}

impl ContactAccumulator {
    #[inline]
    pub fn set_valid(&mut self, value: u32) {
        self.valid = value != 0;
    }

    #[inline]
    pub fn set_contact_id(&mut self, value: u32) {
        self.contact_id = value as u16;
    }

    #[inline]
    pub fn set_pressure(&mut self, value: u32) {
        self.pressure = value as u16;
    }

    #[inline]
    pub fn set_x(&mut self, value: u32) {
        self.x = value as u16;
    }

    #[inline]
    pub fn set_y(&mut self, value: u32) {
        self.y = value as u16;
    }
}
