//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from the
//! machine it is plugged into. The core never owns memory semantics: RAM,
//! ROM, mirroring and memory-mapped registers are all the bus's concern.
//!
//! Every access the CPU makes goes through the bus, stack traffic and vector
//! fetches included, with the full 16-bit address and no masking. There are
//! no bus errors. Reads take `&mut self` because some registers change state
//! when read.

/// The CPU's only view of the machine.
///
/// # Examples
///
/// ```
/// use nmos6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// A bus with a write-only output register, in the style of a simple
/// single-board computer:
///
/// ```
/// use nmos6502::MemoryBus;
///
/// struct SerialBus {
///     ram: [u8; 0x8000],
///     sent: Vec<u8>,
/// }
///
/// impl MemoryBus for SerialBus {
///     fn read(&mut self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             0xFF
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         match addr {
///             0x0000..=0x7FFF => self.ram[addr as usize] = value,
///             0xF001 => self.sent.push(value),
///             _ => {}
///         }
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Must not panic. What an unmapped address returns is up to the bus.
    fn read(&mut self, addr: u16) -> u8;

    /// Must not panic. Writes to ROM or holes may be dropped.
    fn write(&mut self, addr: u16, value: u8);
}

impl<B: MemoryBus + ?Sized> MemoryBus for &mut B {
    fn read(&mut self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value)
    }
}

/// 64KB of plain RAM, zero-filled. Enough for tests and for hosts without a
/// memory map.
///
/// # Examples
///
/// ```
/// use nmos6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
/// memory.write(0x8000, 0xEA); // NOP
///
/// let mut cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.step(), 2);
/// ```
pub struct FlatMemory {
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `start`, wrapping past 0xFFFF.
    ///
    /// ```
    /// use nmos6502::{FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0x8000, &[0xA9, 0x42]);
    /// assert_eq!(mem.read(0x8001), 0x42);
    /// ```
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        for (i, &byte) in bytes.iter().enumerate() {
            let addr = start.wrapping_add(i as u16);
            self.data[addr as usize] = byte;
        }
    }

    /// Points the reset vector (0xFFFC/0xFFFD) at `addr`.
    pub fn set_reset_vector(&mut self, addr: u16) {
        self.data[0xFFFC] = addr as u8;
        self.data[0xFFFD] = (addr >> 8) as u8;
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&mut self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
