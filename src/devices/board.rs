//! Ready-made single-board layout.
//!
//! RAM fills the whole address space. The console sits over 0xF001-0xF004 but
//! only claims writes to 0xF001 and reads of 0xF004; the rest of the window
//! behaves as RAM. A program image (typically a BASIC or monitor ROM with its
//! vectors at the top of memory) is copied into that RAM, so the image
//! stays writable the way it is on a board that loads ROM into RAM at boot.
//!
//! ```text
//! 0x0000 ┌──────────────┐
//!        │ RAM          │  image copied in at `base`
//! 0xF001 ├──────────────┤
//!        │ Console      │  0xF001 output, 0xF004 input
//! 0xF005 ├──────────────┤
//!        │ RAM          │  vectors live here
//! 0xFFFF └──────────────┘
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{ConsoleDevice, Device, DeviceError, MappedMemory, RamDevice};

/// Builds the board around `console` with `image` copied in at `base`.
///
/// Image bytes that fall inside the console window go to the RAM behind it.
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use nmos6502::devices::board::single_board;
/// use nmos6502::{ConsoleDevice, CPU};
///
/// let console = Rc::new(RefCell::new(ConsoleDevice::new()));
///
/// // Reset vector -> 0xC000
/// let mut image = vec![0xEA; 0x4000];
/// image[0x3FFC] = 0x00;
/// image[0x3FFD] = 0xC0;
///
/// let memory = single_board(Rc::clone(&console), 0xC000, &image).unwrap();
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0xC000);
/// ```
pub fn single_board(
    console: Rc<RefCell<ConsoleDevice>>,
    base: u16,
    image: &[u8],
) -> Result<MappedMemory, DeviceError> {
    if image.is_empty() {
        return Err(DeviceError::EmptyImage);
    }
    if base as usize + image.len() > 0x1_0000 {
        return Err(DeviceError::ImageTooLarge {
            base,
            len: image.len(),
        });
    }

    let window_start = ConsoleDevice::DEFAULT_BASE;
    let window_end = window_start + console.borrow().size();

    // Stage the full address space once, then split it around the console
    let mut staged = vec![0u8; 0x1_0000];
    staged[base as usize..base as usize + image.len()].copy_from_slice(image);

    let mut low = RamDevice::new(window_start);
    low.load_bytes(0, &staged[..window_start as usize]);

    let mut high = RamDevice::new((0x1_0000 - window_end as u32) as u16);
    high.load_bytes(0, &staged[window_end as usize..]);

    console
        .borrow_mut()
        .load_backing(&staged[window_start as usize..window_end as usize]);

    let mut memory = MappedMemory::new();
    memory.add_device(0x0000, Box::new(low))?;
    memory.add_device(window_start, Box::new(console))?;
    memory.add_device(window_end, Box::new(high))?;
    Ok(memory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryBus;

    fn board_with(image: &[u8], base: u16) -> (MappedMemory, Rc<RefCell<ConsoleDevice>>) {
        let console = Rc::new(RefCell::new(ConsoleDevice::new()));
        let memory = single_board(Rc::clone(&console), base, image).unwrap();
        (memory, console)
    }

    #[test]
    fn test_image_visible_and_writable() {
        let (mut memory, _) = board_with(&[0xA9, 0x01], 0xC000);

        assert_eq!(memory.read(0xC000), 0xA9);
        memory.write(0xC000, 0x00);
        assert_eq!(memory.read(0xC000), 0x00);
    }

    #[test]
    fn test_vectors_above_console_window() {
        let mut image = vec![0u8; 0x4000];
        image[0x3FFE] = 0x34;
        image[0x3FFF] = 0x12;
        let (mut memory, _) = board_with(&image, 0xC000);

        assert_eq!(memory.read(0xFFFE), 0x34);
        assert_eq!(memory.read(0xFFFF), 0x12);
    }

    #[test]
    fn test_console_window_routes_to_console() {
        let (mut memory, console) = board_with(&[0xFF; 0x4000], 0xC000);
        console.borrow_mut().send_key(b'x');

        assert_eq!(memory.read(0xF004), b'X');
        assert_eq!(memory.read(0xF004), 0);
        // Image bytes under the window stay readable
        assert_eq!(memory.read(0xF001), 0xFF);
        assert_eq!(memory.read(0xF002), 0xFF);
        assert_eq!(memory.read(0xF005), 0xFF);
    }

    #[test]
    fn test_console_window_only_claims_two_accesses() {
        let (mut memory, console) = board_with(&[0x00], 0x0000);

        memory.write(0xF002, 0x42);
        memory.write(0xF003, 0x43);
        assert_eq!(memory.read(0xF002), 0x42);
        assert_eq!(memory.read(0xF003), 0x43);

        // A write to the input address is stored but reads still see the key
        memory.write(0xF004, 0x44);
        console.borrow_mut().send_key(b'k');
        assert_eq!(memory.read(0xF004), b'K');
    }

    #[test]
    fn test_rejects_bad_images() {
        let console = Rc::new(RefCell::new(ConsoleDevice::new()));
        assert_eq!(
            single_board(Rc::clone(&console), 0x0000, &[]).err(),
            Some(DeviceError::EmptyImage)
        );
        assert!(single_board(console, 0xFFFF, &[1, 2]).is_err());
    }
}
