//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor
//! and the resolvers that turn the bytes following an opcode into an
//! effective address.
//!
//! Every resolver does the same three things: compute the effective address,
//! advance PC past the opcode and its operand bytes, and (for the indexed
//! modes that can cross a page) charge the opcode's page-cross bonus.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10. The effective address is the operand byte itself.
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $FF,X with X=2 reads 0x0001, never 0x0101.
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// The offset is relative to the address of the next instruction.
    Relative,

    /// Full 16-bit address.
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Reproduces the NMOS page-wrap bug: JMP ($30FF) takes its low byte
    /// from 0x30FF and its high byte from 0x3000.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X). Both pointer bytes are read from zero page.
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y. May incur +1 cycle penalty on a page cross.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// Returns true when `a` and `b` lie on different 256-byte pages.
#[inline]
pub(crate) fn page_crossed(a: u16, b: u16) -> bool {
    (a ^ b) & 0xFF00 != 0
}

/// The location an instruction reads from and writes back to.
///
/// Read-modify-write handlers (shifts, rotates and their illegal composites)
/// work on either the accumulator or a memory byte depending on the
/// addressing mode. `Operand` is chosen once per instruction so the handlers
/// themselves never branch on the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    Accumulator,
    Memory(u16),
}

impl Operand {
    pub(crate) fn read<M: MemoryBus>(self, cpu: &mut CPU<M>) -> u8 {
        match self {
            Operand::Accumulator => cpu.a,
            Operand::Memory(addr) => cpu.memory.read(addr),
        }
    }

    pub(crate) fn write<M: MemoryBus>(self, cpu: &mut CPU<M>, value: u8) {
        match self {
            Operand::Accumulator => cpu.a = value,
            Operand::Memory(addr) => cpu.memory.write(addr, value),
        }
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Resolves the operand of the instruction whose opcode sits at PC.
    ///
    /// Sets the current mode and effective address, moves PC to the next
    /// instruction and adds `page_bonus` cycles when an indexed access
    /// crosses a page.
    pub(crate) fn resolve(&mut self, mode: AddressingMode, page_bonus: u8) {
        self.mode = mode;
        let operand = self.pc.wrapping_add(1);

        self.effective_addr = match mode {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate => operand,
            AddressingMode::ZeroPage => self.memory.read(operand) as u16,
            AddressingMode::ZeroPageX => self.memory.read(operand).wrapping_add(self.x) as u16,
            AddressingMode::ZeroPageY => self.memory.read(operand).wrapping_add(self.y) as u16,
            AddressingMode::Relative => {
                let offset = self.memory.read(operand) as i8;
                operand.wrapping_add(1).wrapping_add_signed(offset as i16)
            }
            AddressingMode::Absolute => self.read_word(operand),
            AddressingMode::AbsoluteX => {
                let base = self.read_word(operand);
                self.indexed(base, self.x, page_bonus)
            }
            AddressingMode::AbsoluteY => {
                let base = self.read_word(operand);
                self.indexed(base, self.y, page_bonus)
            }
            AddressingMode::Indirect => {
                let pointer = self.read_word(operand);
                self.read_word_page_wrapped(pointer)
            }
            AddressingMode::IndirectX => {
                let zp = self.memory.read(operand).wrapping_add(self.x);
                self.read_word_zero_page(zp)
            }
            AddressingMode::IndirectY => {
                let zp = self.memory.read(operand);
                let base = self.read_word_zero_page(zp);
                self.indexed(base, self.y, page_bonus)
            }
        };

        self.pc = operand.wrapping_add(mode.operand_bytes() as u16);
    }

    /// The operand the current instruction should read-modify-write.
    pub(crate) fn operand(&self) -> Operand {
        if self.mode == AddressingMode::Accumulator {
            Operand::Accumulator
        } else {
            Operand::Memory(self.effective_addr)
        }
    }

    /// Reads the byte at the effective address.
    pub(crate) fn fetch_operand(&mut self) -> u8 {
        self.memory.read(self.effective_addr)
    }

    fn indexed(&mut self, base: u16, index: u8, page_bonus: u8) -> u16 {
        let addr = base.wrapping_add(index as u16);
        if page_crossed(base, addr) {
            self.cycles += page_bonus as u64;
        }
        addr
    }

    /// Reads a 16-bit little-endian pointer from zero page; the high byte
    /// wraps from 0xFF back to 0x00.
    fn read_word_zero_page(&mut self, zp: u8) -> u16 {
        let lo = self.memory.read(zp as u16) as u16;
        let hi = self.memory.read(zp.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    /// Reads a 16-bit pointer without carrying into the high byte of the
    /// pointer address (the JMP indirect bug).
    fn read_word_page_wrapped(&mut self, pointer: u16) -> u16 {
        let lo = self.memory.read(pointer) as u16;
        let hi_addr = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
        let hi = self.memory.read(hi_addr) as u16;
        (hi << 8) | lo
    }
}
