//! Memory-mapped device support for hosting the 6502 core.
//!
//! The core only knows the [`MemoryBus`] trait. This module provides one
//! ready-made bus built from address-ranged devices, enough to run a ROM with
//! a character console the way a small single-board computer would.
//!
//! - [`Device`]: one piece of hardware answering at offsets `0..size`
//! - [`MappedMemory`]: the bus, dispatching each address to whichever device
//!   owns it
//! - [`RamDevice`], [`RomDevice`], [`ConsoleDevice`]: the stock devices
//! - [`board::single_board`]: the console machine in one call
//!
//! # Example
//!
//! ```rust
//! use nmos6502::{CPU, MappedMemory, RamDevice};
//!
//! let mut memory = MappedMemory::new();
//! memory.add_device(0x0000, Box::new(RamDevice::new(0x8000))).unwrap();
//!
//! // 8KB of NOPs whose reset vector points back at 0xE000
//! let mut image = vec![0xEA; 0x2000];
//! image[0x1FFD] = 0xE0;
//! memory.load_rom(0xE000, &image).unwrap();
//!
//! let cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0xE0EA);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::debug;

use crate::MemoryBus;

pub mod board;
pub mod console;
pub mod ram;
pub mod rom;

pub use console::ConsoleDevice;
pub use ram::RamDevice;
pub use rom::RomDevice;

/// A memory-mapped piece of hardware.
///
/// Offsets are relative to wherever the device is mapped, so the same device
/// can sit at any base. Reads and writes never fail or panic; out-of-range
/// offsets are the device's own business. `read` takes `&mut self` because
/// some registers (a keyboard latch, say) change when read; `peek` is the
/// side-effect-free view used by debuggers and memory viewers.
///
/// # Examples
///
/// ```rust
/// use nmos6502::Device;
///
/// /// One-byte latch that counts how often it has been read.
/// struct Latch {
///     value: u8,
///     reads: u32,
/// }
///
/// impl Device for Latch {
///     fn read(&mut self, _offset: u16) -> u8 {
///         self.reads += 1;
///         self.value
///     }
///
///     fn peek(&self, _offset: u16) -> u8 {
///         self.value
///     }
///
///     fn write(&mut self, _offset: u16, value: u8) {
///         self.value = value;
///     }
///
///     fn size(&self) -> u16 {
///         1
///     }
/// }
/// ```
pub trait Device {
    fn read(&mut self, offset: u16) -> u8;

    /// What `read` would return, without disturbing the device.
    fn peek(&self, offset: u16) -> u8;

    fn write(&mut self, offset: u16, value: u8);

    /// Number of addresses the device answers to.
    fn size(&self) -> u16;
}

/// A device shared with the host.
///
/// Mapping an `Rc<RefCell<D>>` lets the host keep its own handle, e.g. to
/// push keys into a console while the CPU owns the bus.
impl<D: Device> Device for Rc<RefCell<D>> {
    fn read(&mut self, offset: u16) -> u8 {
        self.borrow_mut().read(offset)
    }

    fn peek(&self, offset: u16) -> u8 {
        self.borrow().peek(offset)
    }

    fn write(&mut self, offset: u16, value: u8) {
        self.borrow_mut().write(offset, value);
    }

    fn size(&self) -> u16 {
        self.borrow().size()
    }
}

/// A device and the address it answers from.
struct DeviceMapping {
    base_addr: u16,
    device: Box<dyn Device>,
}

impl DeviceMapping {
    /// One past the last mapped address, widened so a device ending at
    /// 0xFFFF does not wrap.
    fn end(&self) -> u32 {
        self.base_addr as u32 + self.device.size() as u32
    }

    fn contains(&self, addr: u16) -> bool {
        addr >= self.base_addr && (addr as u32) < self.end()
    }
}

/// Why a device or ROM image could not be mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// Address range overlaps with an existing device.
    Overlap {
        new_base: u16,
        new_size: u16,
        /// Where the device already occupying the range is mapped
        existing_base: u16,
        existing_size: u16,
    },

    /// A ROM image with no bytes.
    EmptyImage,

    /// A ROM image that runs past 0xFFFF when placed at `base`.
    ImageTooLarge {
        base: u16,
        len: usize,
    },
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DeviceError::Overlap {
                new_base,
                new_size,
                existing_base,
                existing_size,
            } => {
                write!(
                    f,
                    "0x{:04X}-0x{:04X} overlaps the device already mapped at 0x{:04X}-0x{:04X}",
                    new_base,
                    new_base.saturating_add(*new_size).saturating_sub(1),
                    existing_base,
                    existing_base.saturating_add(*existing_size).saturating_sub(1)
                )
            }
            DeviceError::EmptyImage => write!(f, "ROM image is empty"),
            DeviceError::ImageTooLarge { base, len } => write!(
                f,
                "ROM image of {} bytes does not fit at 0x{:04X}",
                len, base
            ),
        }
    }
}

impl std::error::Error for DeviceError {}

/// A [`MemoryBus`] assembled from devices.
///
/// Each access goes to the device whose range contains the address. Holes in
/// the map read as 0xFF and swallow writes.
///
/// ```rust
/// use nmos6502::{MappedMemory, MemoryBus, RamDevice};
///
/// let mut memory = MappedMemory::new();
/// memory.add_device(0x0200, Box::new(RamDevice::new(0x0100))).unwrap();
///
/// memory.write(0x0210, 0x42);
/// assert_eq!(memory.read(0x0210), 0x42);
/// assert_eq!(memory.read(0x0300), 0xFF);
/// ```
pub struct MappedMemory {
    devices: Vec<DeviceMapping>,
    unmapped_value: u8,
}

impl MappedMemory {
    /// An empty map: every address reads 0xFF.
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
            unmapped_value: 0xFF,
        }
    }

    /// Map `device` at `base_addr`, covering `base_addr..base_addr + size`.
    ///
    /// ```rust
    /// use nmos6502::{DeviceError, MappedMemory, RamDevice};
    ///
    /// let mut memory = MappedMemory::new();
    /// memory.add_device(0x0000, Box::new(RamDevice::new(0x4000))).unwrap();
    ///
    /// let clash = memory.add_device(0x3F00, Box::new(RamDevice::new(0x0200)));
    /// assert!(matches!(clash, Err(DeviceError::Overlap { existing_base: 0x0000, .. })));
    /// ```
    pub fn add_device(
        &mut self,
        base_addr: u16,
        device: Box<dyn Device>,
    ) -> Result<(), DeviceError> {
        let new_size = device.size();
        let new_end = base_addr as u32 + new_size as u32;

        // Half-open ranges [base, end) overlap when each starts before the other ends
        if let Some(existing) = self
            .devices
            .iter()
            .find(|m| (base_addr as u32) < m.end() && new_end > m.base_addr as u32)
        {
            return Err(DeviceError::Overlap {
                new_base: base_addr,
                new_size,
                existing_base: existing.base_addr,
                existing_size: existing.device.size(),
            });
        }

        debug!(
            "mapped device at {:04X}-{:04X}",
            base_addr,
            new_end.saturating_sub(1)
        );
        self.devices.push(DeviceMapping { base_addr, device });
        Ok(())
    }

    /// Map a ROM image at `base`.
    ///
    /// ```rust
    /// use nmos6502::{DeviceError, MappedMemory, MemoryBus};
    ///
    /// let mut memory = MappedMemory::new();
    /// memory.load_rom(0xC000, &[0xA9, 0x01]).unwrap();
    /// assert_eq!(memory.read(0xC000), 0xA9);
    ///
    /// assert_eq!(memory.load_rom(0xD000, &[]), Err(DeviceError::EmptyImage));
    /// assert!(memory.load_rom(0xFFFF, &[1, 2]).is_err());
    /// ```
    pub fn load_rom(&mut self, base: u16, image: &[u8]) -> Result<(), DeviceError> {
        if image.is_empty() {
            return Err(DeviceError::EmptyImage);
        }
        // Device sizes are u16, so a full 64KB image is rejected too
        if image.len() > u16::MAX as usize || base as usize + image.len() > 0x1_0000 {
            return Err(DeviceError::ImageTooLarge {
                base,
                len: image.len(),
            });
        }

        self.add_device(base, Box::new(RomDevice::new(image.to_vec())))
    }

    /// Inspect `addr` without triggering read side effects.
    ///
    /// ```rust
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    /// use nmos6502::{ConsoleDevice, MappedMemory};
    ///
    /// let console = Rc::new(RefCell::new(ConsoleDevice::new()));
    /// let mut memory = MappedMemory::new();
    /// memory
    ///     .add_device(ConsoleDevice::DEFAULT_BASE, Box::new(Rc::clone(&console)))
    ///     .unwrap();
    ///
    /// console.borrow_mut().send_key(b'k');
    /// assert_eq!(memory.peek(0xF004), b'K');
    /// assert_eq!(console.borrow().pending_key(), b'K');
    /// ```
    pub fn peek(&self, addr: u16) -> u8 {
        self.devices
            .iter()
            .find(|m| m.contains(addr))
            .map_or(self.unmapped_value, |m| m.device.peek(addr - m.base_addr))
    }

    /// The 256 bytes of `page`, read with [`peek`](Self::peek).
    pub fn peek_page(&self, page: u8) -> Vec<u8> {
        let start = (page as u16) << 8;
        (0..=0xFF).map(|i| self.peek(start | i)).collect()
    }

    fn find_device(&mut self, addr: u16) -> Option<(&mut dyn Device, u16)> {
        self.devices
            .iter_mut()
            .find(|m| m.contains(addr))
            .map(|m| (m.device.as_mut() as &mut dyn Device, addr - m.base_addr))
    }
}

impl Default for MappedMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for MappedMemory {
    fn read(&mut self, addr: u16) -> u8 {
        let unmapped = self.unmapped_value;
        match self.find_device(addr) {
            Some((device, offset)) => device.read(offset),
            None => unmapped,
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        if let Some((device, offset)) = self.find_device(addr) {
            device.write(offset, value);
        }
    }
}
