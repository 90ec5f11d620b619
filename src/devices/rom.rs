//! Read-only image storage.

use super::Device;

/// Read-only memory device.
///
/// Writes are silently ignored, matching typical ROM hardware behavior.
///
/// # Examples
///
/// ```rust
/// use nmos6502::{RomDevice, Device};
///
/// let mut rom = RomDevice::new(vec![0xEA, 0xEA, 0xEA]);
///
/// assert_eq!(rom.read(0), 0xEA);
///
/// rom.write(0, 0xFF);
/// assert_eq!(rom.read(0), 0xEA);
/// ```
pub struct RomDevice {
    data: Vec<u8>,
}

impl RomDevice {
    /// Create a new ROM device holding `data`.
    ///
    /// To place a ROM with the vectors at the top of memory, make the image
    /// end at 0xFFFF. A 16KB image mapped at 0xC000 keeps its reset vector at
    /// offset 0x3FFC.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl Device for RomDevice {
    fn read(&mut self, offset: u16) -> u8 {
        self.peek(offset)
    }

    fn peek(&self, offset: u16) -> u8 {
        self.data.get(offset as usize).copied().unwrap_or(0xFF)
    }

    fn write(&mut self, _offset: u16, _value: u8) {}

    fn size(&self) -> u16 {
        self.data.len() as u16
    }
}
