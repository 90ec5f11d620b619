//! # Interrupt Sequencing
//!
//! Reset, IRQ and NMI entry. BRK shares the same push sequence and lives
//! with the other control-flow instructions.
//!
//! ## Interrupt Service Sequence
//!
//! When an IRQ or NMI is triggered the CPU:
//!
//! 1. Pushes PC (high byte, then low byte) to stack
//! 2. Pushes the status register with the break marker forced set
//! 3. Sets the I flag
//! 4. Loads PC from the vector (0xFFFE for IRQ, 0xFFFA for NMI)
//!
//! **Total: 7 cycles**
//!
//! The core never consults the I flag itself. Deciding when an IRQ may be
//! presented (and that an NMI never waits) belongs to the host, which calls
//! the trigger between steps.

use log::debug;

use crate::{MemoryBus, Status, CPU};

/// NMI vector address.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Reset vector address.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector address.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Cycles consumed by the IRQ and NMI entry sequences.
pub const INTERRUPT_CYCLES: u32 = 7;

impl<M: MemoryBus> CPU<M> {
    /// Puts the processor in its reset state.
    ///
    /// Status becomes 0x24, A/X/Y are cleared, SP is 0xFD and PC is loaded
    /// from the reset vector. Memory and the cycle counter are untouched.
    ///
    /// ```
    /// use nmos6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.set_reset_vector(0x0400);
    /// let mut cpu = CPU::new(mem);
    ///
    /// cpu.set_a(0x55);
    /// cpu.set_sp(0x10);
    /// cpu.memory_mut().set_reset_vector(0x0600);
    /// cpu.reset();
    ///
    /// assert_eq!(cpu.a(), 0);
    /// assert_eq!(cpu.sp(), 0xFD);
    /// assert_eq!(cpu.pc(), 0x0600);
    /// ```
    pub fn reset(&mut self) {
        self.status = Status::POWER_ON;
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0xFD;
        self.pc = self.read_word(RESET_VECTOR);
        debug!("reset, pc = {:04X}", self.pc);
    }

    /// Services a non-maskable interrupt. Returns the cycles consumed (7).
    pub fn trigger_nmi(&mut self) -> u32 {
        debug!("nmi at {:04X}", self.pc);
        self.enter_interrupt(NMI_VECTOR);
        self.cycles += INTERRUPT_CYCLES as u64;
        INTERRUPT_CYCLES
    }

    /// Services a maskable interrupt request. Returns the cycles consumed (7).
    ///
    /// The I flag is not checked here; callers that model the IRQ line
    /// should only trigger when [`CPU::flag_i`] is clear.
    ///
    /// ```
    /// use nmos6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.set_reset_vector(0x8000);
    /// mem.write(0xFFFE, 0x00);
    /// mem.write(0xFFFF, 0x90);
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.set_flag_i(false);
    /// if !cpu.flag_i() {
    ///     assert_eq!(cpu.trigger_irq(), 7);
    /// }
    /// assert_eq!(cpu.pc(), 0x9000);
    /// assert!(cpu.flag_i());
    /// ```
    pub fn trigger_irq(&mut self) -> u32 {
        debug!("irq at {:04X}", self.pc);
        self.enter_interrupt(IRQ_VECTOR);
        self.cycles += INTERRUPT_CYCLES as u64;
        INTERRUPT_CYCLES
    }

    /// Push PC and status, mask IRQs, jump through `vector`.
    pub(crate) fn enter_interrupt(&mut self, vector: u16) {
        self.push_word(self.pc);
        self.push(self.status.pushed());
        self.status.insert(Status::INTERRUPT_DISABLE);
        self.pc = self.read_word(vector);
    }
}
