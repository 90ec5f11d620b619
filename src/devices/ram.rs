//! Zero-filled read/write storage.

use super::Device;

/// RAM answering at offsets `0..size`.
///
/// # Examples
///
/// ```rust
/// use nmos6502::{RamDevice, Device};
///
/// let mut ram = RamDevice::new(0x0400);
///
/// ram.write(0x42, 0xAA);
/// assert_eq!(ram.read(0x42), 0xAA);
/// ```
pub struct RamDevice {
    data: Vec<u8>,
}

impl RamDevice {
    /// Create a new RAM device with the specified size. All bytes start at zero.
    pub fn new(size: u16) -> Self {
        Self {
            data: vec![0; size as usize],
        }
    }

    /// Copy `bytes` into RAM starting at `offset`.
    ///
    /// Bytes that would land past the end of the device are dropped.
    ///
    /// ```rust
    /// use nmos6502::{RamDevice, Device};
    ///
    /// let mut ram = RamDevice::new(4);
    /// ram.load_bytes(2, &[0x01, 0x02, 0x03]);
    ///
    /// assert_eq!(ram.read(2), 0x01);
    /// assert_eq!(ram.read(3), 0x02);
    /// ```
    pub fn load_bytes(&mut self, offset: u16, bytes: &[u8]) {
        if let Some(window) = self.data.get_mut(offset as usize..) {
            for (slot, &byte) in window.iter_mut().zip(bytes) {
                *slot = byte;
            }
        }
    }
}

impl Device for RamDevice {
    fn read(&mut self, offset: u16) -> u8 {
        self.peek(offset)
    }

    fn peek(&self, offset: u16) -> u8 {
        self.data.get(offset as usize).copied().unwrap_or(0)
    }

    fn write(&mut self, offset: u16, value: u8) {
        if let Some(slot) = self.data.get_mut(offset as usize) {
            *slot = value;
        }
    }

    fn size(&self) -> u16 {
        self.data.len() as u16
    }
}
