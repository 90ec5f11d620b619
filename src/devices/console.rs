//! Character console device.
//!
//! A minimal terminal for monitor and BASIC ROMs that poll for keys and
//! write characters to a fixed address.
//!
//! ## Register Map (offsets from device base address)
//!
//! | Offset | Register | Access | Description |
//! |--------|----------|--------|-------------|
//! | 0      | Output   | W      | Byte written is sent to the output sink |
//! | 3      | Input    | R      | Pending key, 0 when none; reading clears it |
//!
//! Mapped at [`ConsoleDevice::DEFAULT_BASE`] (0xF001) the output register
//! sits at 0xF001 and the input register at 0xF004. Every other access lands
//! in four bytes of plain RAM behind the window, so the console only claims
//! writes to offset 0 and reads of offset 3.

use super::Device;

/// Two-register character console.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use nmos6502::{ConsoleDevice, MappedMemory, MemoryBus};
///
/// let printed = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&printed);
///
/// let mut console = ConsoleDevice::new();
/// console.set_output_callback(move |byte| sink.borrow_mut().push(byte));
///
/// let console = Rc::new(RefCell::new(console));
/// let mut memory = MappedMemory::new();
/// memory
///     .add_device(ConsoleDevice::DEFAULT_BASE, Box::new(Rc::clone(&console)))
///     .unwrap();
///
/// memory.write(0xF001, b'O');
/// memory.write(0xF001, b'K');
/// assert_eq!(&*printed.borrow(), b"OK");
///
/// console.borrow_mut().send_key(b'y');
/// assert_eq!(memory.read(0xF004), b'Y');
/// assert_eq!(memory.read(0xF004), 0);
/// ```
#[derive(Default)]
pub struct ConsoleDevice {
    input: u8,
    backing: [u8; 4],
    on_output: Option<Box<dyn FnMut(u8)>>,
}

impl ConsoleDevice {
    /// Conventional base address for the console.
    pub const DEFAULT_BASE: u16 = 0xF001;

    /// Offset of the output register.
    pub const OUTPUT: u16 = 0;

    /// Offset of the input register.
    pub const INPUT: u16 = 3;

    /// Create a console with no pending key and no output sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the function that receives every byte written to the output register.
    pub fn set_output_callback<F>(&mut self, callback: F)
    where
        F: FnMut(u8) + 'static,
    {
        self.on_output = Some(Box::new(callback));
    }

    /// Latch a key for the CPU to read.
    ///
    /// ASCII lowercase letters are upper-cased. A key that has not been read
    /// yet is replaced.
    pub fn send_key(&mut self, key: u8) {
        self.input = key.to_ascii_uppercase();
    }

    /// The key waiting in the input register, 0 when none.
    pub fn pending_key(&self) -> u8 {
        self.input
    }

    /// Fill the RAM behind the window, e.g. with the image bytes a board
    /// copies over it.
    pub fn load_backing(&mut self, bytes: &[u8]) {
        for (slot, &byte) in self.backing.iter_mut().zip(bytes) {
            *slot = byte;
        }
    }
}

impl Device for ConsoleDevice {
    fn read(&mut self, offset: u16) -> u8 {
        match offset {
            Self::INPUT => std::mem::take(&mut self.input),
            _ => self.peek(offset),
        }
    }

    fn peek(&self, offset: u16) -> u8 {
        match offset {
            Self::INPUT => self.input,
            _ => self.backing.get(offset as usize).copied().unwrap_or(0),
        }
    }

    fn write(&mut self, offset: u16, value: u8) {
        if offset == Self::OUTPUT {
            if let Some(callback) = self.on_output.as_mut() {
                callback(value);
            }
        } else if let Some(slot) = self.backing.get_mut(offset as usize) {
            *slot = value;
        }
    }

    fn size(&self) -> u16 {
        Self::INPUT + 1
    }
}
