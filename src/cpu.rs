//! # CPU State and Execution
//!
//! [`CPU`] holds everything the processor itself remembers: A, X, Y, PC, the
//! stack pointer (an offset into page one), the packed [`Status`] register,
//! a running cycle count, and the decode scratch of the last instruction
//! (opcode, addressing mode, effective address).
//!
//! ## Execution Model
//!
//! - `step()`: Execute one instruction, return the cycles it took
//! - `run_for_cycles()`: Execute until a cycle budget is exhausted
//! - `trigger_irq()` / `trigger_nmi()`: Enter an interrupt handler (see `interrupts`)
//!
//! Every one of the 256 opcodes has a dispatch entry, so stepping never fails.

use log::trace;

use crate::addressing::AddressingMode;
use crate::{instructions, MemoryBus, Status, OPCODE_TABLE};

/// Base address of the hardware stack page.
pub(crate) const STACK_PAGE: u16 = 0x0100;

/// One NMOS 6502, owning the bus it runs against.
///
/// # Examples
///
/// ```
/// use nmos6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
/// memory.load(0x8000, &[0xA9, 0x42]); // LDA #$42
///
/// let mut cpu = CPU::new(memory);
/// assert_eq!(cpu.status(), 0x24);
///
/// let cycles = cpu.step();
/// assert_eq!(cycles, 2);
/// assert_eq!(cpu.a(), 0x42);
/// assert_eq!(cpu.pc(), 0x8002);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Address of the next opcode
    pub(crate) pc: u16,

    /// Offset of the next free stack slot in page one
    pub(crate) sp: u8,

    /// Processor status flags
    pub(crate) status: Status,

    /// Addressing mode of the instruction in progress
    pub(crate) mode: AddressingMode,

    /// Resolved operand address of the instruction in progress
    pub(crate) effective_addr: u16,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Most recently fetched opcode
    pub(crate) last_opcode: u8,

    /// Memory bus implementation
    pub(crate) memory: M,
}

/// Read-only copy of every architectural and diagnostic register.
///
/// With the `serde` feature enabled snapshots can be serialized, which is
/// handy for recording traces and diffing them against reference runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpuSnapshot {
    /// Accumulator
    pub a: u8,
    /// X index register
    pub x: u8,
    /// Y index register
    pub y: u8,
    /// Program counter
    pub pc: u16,
    /// Stack pointer (offset into page 1)
    pub sp: u8,
    /// Packed status byte, bit 5 always set.
    pub status: u8,
    /// Addressing mode of the last executed instruction
    pub mode: AddressingMode,
    /// Effective address of the last executed instruction
    pub effective_addr: u16,
    /// Total cycles elapsed
    pub cycles: u64,
    /// Most recently fetched opcode
    pub last_opcode: u8,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU attached to `memory` and resets it.
    ///
    /// The processor comes up in the reset state (see [`CPU::reset`]): PC is
    /// loaded from the reset vector at 0xFFFC/0xFFFD, SP is 0xFD, status is
    /// 0x24 and A, X, Y are zero. The cycle counter starts at 0.
    ///
    /// ```
    /// use nmos6502::{CPU, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.set_reset_vector(0xC000);
    ///
    /// let cpu = CPU::new(mem);
    /// assert_eq!(cpu.pc(), 0xC000);
    /// assert_eq!(cpu.sp(), 0xFD);
    /// assert_eq!(cpu.cycles(), 0);
    /// ```
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0,
            status: Status::POWER_ON,
            mode: AddressingMode::Implied,
            effective_addr: 0,
            cycles: 0,
            last_opcode: 0,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Executes one instruction and returns the cycles it consumed.
    ///
    /// 1. Fetch the opcode at PC into the last-opcode register
    /// 2. Look up its dispatch entry
    /// 3. Resolve the operand (advances PC, may charge a page-cross cycle)
    /// 4. Run the handler (taken branches charge their own penalty)
    /// 5. Add the base cycle cost
    ///
    /// The return value includes the base cost and every penalty.
    ///
    /// ```
    /// use nmos6502::{CPU, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.set_reset_vector(0x8000);
    /// mem.load(0x8000, &[0xBD, 0xFF, 0x12]); // LDA $12FF,X
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.set_x(1);
    /// assert_eq!(cpu.step(), 5); // 4 + 1 for the page cross
    /// ```
    pub fn step(&mut self) -> u32 {
        let start = self.cycles;

        let opcode = self.memory.read(self.pc);
        self.last_opcode = opcode;
        let entry = &OPCODE_TABLE[opcode as usize];

        trace!(
            "{:04X}  {:02X} {}  A={:02X} X={:02X} Y={:02X} P={:02X} SP={:02X} CYC={}",
            self.pc,
            opcode,
            entry.mnemonic,
            self.a,
            self.x,
            self.y,
            self.status(),
            self.sp,
            self.cycles
        );

        self.resolve(entry.addressing_mode, entry.page_bonus());
        instructions::execute(self, entry.instruction);
        self.cycles += entry.base_cycles as u64;

        (self.cycles - start) as u32
    }

    /// Runs the CPU until at least `cycle_budget` cycles have elapsed.
    ///
    /// Returns the cycles actually consumed, which may exceed the budget by
    /// up to one instruction. Interrupt timing stays with the caller.
    ///
    /// ```
    /// use nmos6502::{CPU, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.set_reset_vector(0x8000);
    /// mem.load(0x8000, &[0xEA; 16]); // NOP sled
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.run_for_cycles(10), 10);
    /// assert_eq!(cpu.pc(), 0x8005);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> u64 {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles.saturating_add(cycle_budget);

        while self.cycles < target_cycles {
            self.step();
        }

        self.cycles - start_cycles
    }

    // ========== Bus and stack helpers ==========

    /// Reads a little-endian word; the high byte address wraps at 0xFFFF.
    pub(crate) fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.memory.read(addr) as u16;
        let hi = self.memory.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_PAGE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_PAGE | self.sp as u16)
    }

    /// Pushes high byte first so the word sits little-endian in memory.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }

    pub(crate) fn set_zn(&mut self, value: u8) {
        self.status.set_zn(value);
    }

    // ========== Getters ==========

    pub fn a(&self) -> u8 {
        self.a
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Stack pointer; the top of stack lives at `0x0100 | sp`.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC).
    ///
    /// Bit 5 always reads as 1.
    pub fn status(&self) -> u8 {
        (self.status | Status::UNUSED).bits()
    }

    /// Returns the status register as flags.
    pub fn flags(&self) -> Status {
        self.status | Status::UNUSED
    }

    /// Returns the total number of CPU cycles executed since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the opcode fetched by the most recent `step()`.
    pub fn last_opcode(&self) -> u8 {
        self.last_opcode
    }

    /// Returns the addressing mode of the most recent instruction.
    pub fn addressing_mode(&self) -> AddressingMode {
        self.mode
    }

    /// Returns the effective address resolved for the most recent instruction.
    ///
    /// Meaningless (0) for implied and accumulator instructions.
    pub fn effective_address(&self) -> u16 {
        self.effective_addr
    }

    /// Captures every register in one value.
    pub fn snapshot(&self) -> CpuSnapshot {
        CpuSnapshot {
            a: self.a,
            x: self.x,
            y: self.y,
            pc: self.pc,
            sp: self.sp,
            status: self.status(),
            mode: self.mode,
            effective_addr: self.effective_addr,
            cycles: self.cycles,
            last_opcode: self.last_opcode,
        }
    }

    // ========== Flags ==========

    pub fn flag_n(&self) -> bool {
        self.status.contains(Status::NEGATIVE)
    }

    pub fn flag_v(&self) -> bool {
        self.status.contains(Status::OVERFLOW)
    }

    /// Decimal mode. Stored and pushed, but ADC and SBC ignore it.
    pub fn flag_d(&self) -> bool {
        self.status.contains(Status::DECIMAL)
    }

    pub fn flag_i(&self) -> bool {
        self.status.contains(Status::INTERRUPT_DISABLE)
    }

    pub fn flag_z(&self) -> bool {
        self.status.contains(Status::ZERO)
    }

    pub fn flag_c(&self) -> bool {
        self.status.contains(Status::CARRY)
    }

    // ========== Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Loads the status register from a packed byte.
    ///
    /// Follows the PLP convention: bit 5 forced on, break marker dropped.
    pub fn set_status(&mut self, value: u8) {
        self.status = Status::pulled(value);
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.status.set(Status::NEGATIVE, value);
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.status.set(Status::OVERFLOW, value);
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.status.set(Status::DECIMAL, value);
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.status.set(Status::INTERRUPT_DISABLE, value);
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.status.set(Status::ZERO, value);
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.status.set(Status::CARRY, value);
    }

    // ========== Memory access ==========

    /// Shared access to the attached bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable access to the attached bus, for loading programs and poking
    /// registers between steps.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Detaches and returns the bus.
    pub fn into_memory(self) -> M {
        self.memory
    }
}
