//! # Processor Status Register
//!
//! The 6502 keeps its flags in a single packed byte (NV-BDIZC). Bit 5 has no
//! storage and always reads as 1. Bit 4 (break) is not a real flag either:
//! it only exists in copies of the register pushed to the stack, where PHP,
//! BRK and interrupt entry force it set, and PLP/RTI discard it on the way
//! back in.

use bitflags::bitflags;

bitflags! {
    /// Packed processor status register.
    ///
    /// ```
    /// use nmos6502::Status;
    ///
    /// let p = Status::from_bits_retain(0x24);
    /// assert!(p.contains(Status::INTERRUPT_DISABLE));
    /// assert_eq!(p.pushed(), 0x34);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        /// Bit 7: result had bit 7 set.
        const NEGATIVE = 0b1000_0000;
        /// Bit 6: signed overflow.
        const OVERFLOW = 0b0100_0000;
        /// Bit 5: unused, always reads as 1.
        const UNUSED = 0b0010_0000;
        /// Bit 4: break marker, only meaningful on the stack.
        const BREAK = 0b0001_0000;
        /// Bit 3: decimal mode.
        const DECIMAL = 0b0000_1000;
        /// Bit 2: IRQ disable.
        const INTERRUPT_DISABLE = 0b0000_0100;
        /// Bit 1: result was zero.
        const ZERO = 0b0000_0010;
        /// Bit 0: carry / not-borrow.
        const CARRY = 0b0000_0001;
    }
}

impl Status {
    /// Status after reset: interrupts disabled, bit 5 set (0x24).
    pub const POWER_ON: Status = Status::UNUSED.union(Status::INTERRUPT_DISABLE);

    /// The byte PHP, BRK, IRQ and NMI write to the stack.
    pub fn pushed(self) -> u8 {
        (self | Status::BREAK | Status::UNUSED).bits()
    }

    /// Rebuilds the register from a byte pulled by PLP or RTI.
    ///
    /// The break marker is dropped and bit 5 is forced on.
    pub fn pulled(value: u8) -> Status {
        Status::from_bits_retain((value & !Status::BREAK.bits()) | Status::UNUSED.bits())
    }

    /// Updates Z and N from a result byte.
    pub fn set_zn(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::POWER_ON
    }
}
