//! # Opcode Dispatch Table
//!
//! This module contains the complete 256-entry dispatch table that serves as
//! the single source of truth for 6502 instruction decoding and timing.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 undocumented opcodes** - Stable illegal composites (SLO, RLA, SRE,
//!   RRA, DCP, ISC, LAX, SAX), multi-byte NOPs, placeholders for the unstable
//!   ones, and the KIL/JAM family
//!
//! Each entry binds an instruction handler, an addressing mode (which selects
//! the resolver), a base cycle cost and whether a page cross adds a cycle.
//! The table is a `const` and is never mutated.

use crate::addressing::AddressingMode;

/// Instruction handler selected by a dispatch entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    // Official
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,

    // Stable illegal composites
    Slo,
    Rla,
    Sre,
    Rra,
    Sax,
    Lax,
    Dcp,
    Isc,

    // Unstable illegal opcodes, executed as placeholders
    Anc,
    Alr,
    Arr,
    Xaa,
    Axs,
    Ahx,
    Tas,
    Shy,
    Shx,
    Las,

    /// JAM: locks up real hardware. Executed here as a one-byte no-op.
    Kil,
}

impl Instruction {
    /// Three-letter assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        use Instruction::*;
        match self {
            Adc => "ADC",
            And => "AND",
            Asl => "ASL",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bit => "BIT",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Brk => "BRK",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Eor => "EOR",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Jmp => "JMP",
            Jsr => "JSR",
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Lsr => "LSR",
            Nop => "NOP",
            Ora => "ORA",
            Pha => "PHA",
            Php => "PHP",
            Pla => "PLA",
            Plp => "PLP",
            Rol => "ROL",
            Ror => "ROR",
            Rti => "RTI",
            Rts => "RTS",
            Sbc => "SBC",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Tax => "TAX",
            Tay => "TAY",
            Tsx => "TSX",
            Txa => "TXA",
            Txs => "TXS",
            Tya => "TYA",
            Slo => "SLO",
            Rla => "RLA",
            Sre => "SRE",
            Rra => "RRA",
            Sax => "SAX",
            Lax => "LAX",
            Dcp => "DCP",
            Isc => "ISC",
            Anc => "ANC",
            Alr => "ALR",
            Arr => "ARR",
            Xaa => "XAA",
            Axs => "AXS",
            Ahx => "AHX",
            Tas => "TAS",
            Shy => "SHY",
            Shx => "SHX",
            Las => "LAS",
            Kil => "KIL",
        }
    }
}

/// Dispatch entry for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use nmos6502::{AddressingMode, Instruction, OPCODE_TABLE};
///
/// // LDA absolute,X (opcode 0xBD)
/// let entry = &OPCODE_TABLE[0xBD];
/// assert_eq!(entry.instruction, Instruction::Lda);
/// assert_eq!(entry.mnemonic, "LDA");
/// assert_eq!(entry.addressing_mode, AddressingMode::AbsoluteX);
/// assert_eq!(entry.base_cycles, 4);
/// assert_eq!(entry.size_bytes, 3);
/// assert!(entry.page_cross_cycle);
/// assert!(!entry.illegal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Handler that executes the instruction.
    pub instruction: Instruction,

    /// Instruction mnemonic (e.g., "LDA", "SLO", "KIL").
    pub mnemonic: &'static str,

    /// Addressing mode; selects the operand resolver.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost before page-cross and branch penalties.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,

    /// Whether crossing a page during indexing adds one cycle.
    ///
    /// Set on branches as well, whose penalty is applied by the branch
    /// handler rather than the resolver.
    pub page_cross_cycle: bool,

    /// True for opcodes outside the documented instruction set.
    pub illegal: bool,
}

impl OpcodeMetadata {
    /// Extra cycles the resolver charges on a page cross.
    pub const fn page_bonus(&self) -> u8 {
        self.page_cross_cycle as u8
    }
}

const fn entry(
    instruction: Instruction,
    addressing_mode: AddressingMode,
    base_cycles: u8,
    page_cross_cycle: bool,
    illegal: bool,
) -> OpcodeMetadata {
    OpcodeMetadata {
        instruction,
        mnemonic: instruction.mnemonic(),
        addressing_mode,
        base_cycles,
        size_bytes: 1 + addressing_mode.operand_bytes(),
        page_cross_cycle,
        illegal,
    }
}

const fn op(i: Instruction, m: AddressingMode, cycles: u8, page: bool) -> OpcodeMetadata {
    entry(i, m, cycles, page, false)
}

const fn ill(i: Instruction, m: AddressingMode, cycles: u8, page: bool) -> OpcodeMetadata {
    entry(i, m, cycles, page, true)
}

use AddressingMode::*;
use Instruction::*;

/// Complete 256-entry dispatch table indexed by opcode byte value.
///
/// ```
/// use nmos6502::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, "BRK");
/// assert_eq!(brk.base_cycles, 7);
///
/// let jam = &OPCODE_TABLE[0x02];
/// assert_eq!(jam.mnemonic, "KIL");
/// assert!(jam.illegal);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00
    op(Brk, Implied, 7, false),
    op(Ora, IndirectX, 6, false),
    ill(Kil, Implied, 2, false),
    ill(Slo, IndirectX, 8, false),
    ill(Nop, ZeroPage, 3, false),
    op(Ora, ZeroPage, 3, false),
    op(Asl, ZeroPage, 5, false),
    ill(Slo, ZeroPage, 5, false),
    op(Php, Implied, 3, false),
    op(Ora, Immediate, 2, false),
    op(Asl, Accumulator, 2, false),
    ill(Anc, Immediate, 2, false),
    ill(Nop, Absolute, 4, false),
    op(Ora, Absolute, 4, false),
    op(Asl, Absolute, 6, false),
    ill(Slo, Absolute, 6, false),
    // 0x10
    op(Bpl, Relative, 2, true),
    op(Ora, IndirectY, 5, true),
    ill(Kil, Implied, 2, false),
    ill(Slo, IndirectY, 8, false),
    ill(Nop, ZeroPageX, 4, false),
    op(Ora, ZeroPageX, 4, false),
    op(Asl, ZeroPageX, 6, false),
    ill(Slo, ZeroPageX, 6, false),
    op(Clc, Implied, 2, false),
    op(Ora, AbsoluteY, 4, true),
    ill(Nop, Implied, 2, false),
    ill(Slo, AbsoluteY, 7, false),
    ill(Nop, AbsoluteX, 4, true),
    op(Ora, AbsoluteX, 4, true),
    op(Asl, AbsoluteX, 7, false),
    ill(Slo, AbsoluteX, 7, false),
    // 0x20
    op(Jsr, Absolute, 6, false),
    op(And, IndirectX, 6, false),
    ill(Kil, Implied, 2, false),
    ill(Rla, IndirectX, 8, false),
    op(Bit, ZeroPage, 3, false),
    op(And, ZeroPage, 3, false),
    op(Rol, ZeroPage, 5, false),
    ill(Rla, ZeroPage, 5, false),
    op(Plp, Implied, 4, false),
    op(And, Immediate, 2, false),
    op(Rol, Accumulator, 2, false),
    ill(Anc, Immediate, 2, false),
    op(Bit, Absolute, 4, false),
    op(And, Absolute, 4, false),
    op(Rol, Absolute, 6, false),
    ill(Rla, Absolute, 6, false),
    // 0x30
    op(Bmi, Relative, 2, true),
    op(And, IndirectY, 5, true),
    ill(Kil, Implied, 2, false),
    ill(Rla, IndirectY, 8, false),
    ill(Nop, ZeroPageX, 4, false),
    op(And, ZeroPageX, 4, false),
    op(Rol, ZeroPageX, 6, false),
    ill(Rla, ZeroPageX, 6, false),
    op(Sec, Implied, 2, false),
    op(And, AbsoluteY, 4, true),
    ill(Nop, Implied, 2, false),
    ill(Rla, AbsoluteY, 7, false),
    ill(Nop, AbsoluteX, 4, true),
    op(And, AbsoluteX, 4, true),
    op(Rol, AbsoluteX, 7, false),
    ill(Rla, AbsoluteX, 7, false),
    // 0x40
    op(Rti, Implied, 6, false),
    op(Eor, IndirectX, 6, false),
    ill(Kil, Implied, 2, false),
    ill(Sre, IndirectX, 8, false),
    ill(Nop, ZeroPage, 3, false),
    op(Eor, ZeroPage, 3, false),
    op(Lsr, ZeroPage, 5, false),
    ill(Sre, ZeroPage, 5, false),
    op(Pha, Implied, 3, false),
    op(Eor, Immediate, 2, false),
    op(Lsr, Accumulator, 2, false),
    ill(Alr, Immediate, 2, false),
    op(Jmp, Absolute, 3, false),
    op(Eor, Absolute, 4, false),
    op(Lsr, Absolute, 6, false),
    ill(Sre, Absolute, 6, false),
    // 0x50
    op(Bvc, Relative, 2, true),
    op(Eor, IndirectY, 5, true),
    ill(Kil, Implied, 2, false),
    ill(Sre, IndirectY, 8, false),
    ill(Nop, ZeroPageX, 4, false),
    op(Eor, ZeroPageX, 4, false),
    op(Lsr, ZeroPageX, 6, false),
    ill(Sre, ZeroPageX, 6, false),
    op(Cli, Implied, 2, false),
    op(Eor, AbsoluteY, 4, true),
    ill(Nop, Implied, 2, false),
    ill(Sre, AbsoluteY, 7, false),
    ill(Nop, AbsoluteX, 4, true),
    op(Eor, AbsoluteX, 4, true),
    op(Lsr, AbsoluteX, 7, false),
    ill(Sre, AbsoluteX, 7, false),
    // 0x60
    op(Rts, Implied, 6, false),
    op(Adc, IndirectX, 6, false),
    ill(Kil, Implied, 2, false),
    ill(Rra, IndirectX, 8, false),
    ill(Nop, ZeroPage, 3, false),
    op(Adc, ZeroPage, 3, false),
    op(Ror, ZeroPage, 5, false),
    ill(Rra, ZeroPage, 5, false),
    op(Pla, Implied, 4, false),
    op(Adc, Immediate, 2, false),
    op(Ror, Accumulator, 2, false),
    ill(Arr, Immediate, 2, false),
    op(Jmp, Indirect, 5, false),
    op(Adc, Absolute, 4, false),
    op(Ror, Absolute, 6, false),
    ill(Rra, Absolute, 6, false),
    // 0x70
    op(Bvs, Relative, 2, true),
    op(Adc, IndirectY, 5, true),
    ill(Kil, Implied, 2, false),
    ill(Rra, IndirectY, 8, false),
    ill(Nop, ZeroPageX, 4, false),
    op(Adc, ZeroPageX, 4, false),
    op(Ror, ZeroPageX, 6, false),
    ill(Rra, ZeroPageX, 6, false),
    op(Sei, Implied, 2, false),
    op(Adc, AbsoluteY, 4, true),
    ill(Nop, Implied, 2, false),
    ill(Rra, AbsoluteY, 7, false),
    ill(Nop, AbsoluteX, 4, true),
    op(Adc, AbsoluteX, 4, true),
    op(Ror, AbsoluteX, 7, false),
    ill(Rra, AbsoluteX, 7, false),
    // 0x80
    ill(Nop, Immediate, 2, false),
    op(Sta, IndirectX, 6, false),
    ill(Nop, Immediate, 2, false),
    ill(Sax, IndirectX, 6, false),
    op(Sty, ZeroPage, 3, false),
    op(Sta, ZeroPage, 3, false),
    op(Stx, ZeroPage, 3, false),
    ill(Sax, ZeroPage, 3, false),
    op(Dey, Implied, 2, false),
    ill(Nop, Immediate, 2, false),
    op(Txa, Implied, 2, false),
    ill(Xaa, Immediate, 2, false),
    op(Sty, Absolute, 4, false),
    op(Sta, Absolute, 4, false),
    op(Stx, Absolute, 4, false),
    ill(Sax, Absolute, 4, false),
    // 0x90
    op(Bcc, Relative, 2, true),
    op(Sta, IndirectY, 6, false),
    ill(Kil, Implied, 2, false),
    ill(Ahx, IndirectY, 6, false),
    op(Sty, ZeroPageX, 4, false),
    op(Sta, ZeroPageX, 4, false),
    op(Stx, ZeroPageY, 4, false),
    ill(Sax, ZeroPageY, 4, false),
    op(Tya, Implied, 2, false),
    op(Sta, AbsoluteY, 5, false),
    op(Txs, Implied, 2, false),
    ill(Tas, AbsoluteY, 5, false),
    ill(Shy, AbsoluteX, 5, false),
    op(Sta, AbsoluteX, 5, false),
    ill(Shx, AbsoluteY, 5, false),
    ill(Ahx, AbsoluteY, 5, false),
    // 0xA0
    op(Ldy, Immediate, 2, false),
    op(Lda, IndirectX, 6, false),
    op(Ldx, Immediate, 2, false),
    ill(Lax, IndirectX, 6, false),
    op(Ldy, ZeroPage, 3, false),
    op(Lda, ZeroPage, 3, false),
    op(Ldx, ZeroPage, 3, false),
    ill(Lax, ZeroPage, 3, false),
    op(Tay, Implied, 2, false),
    op(Lda, Immediate, 2, false),
    op(Tax, Implied, 2, false),
    ill(Lax, Immediate, 2, false),
    op(Ldy, Absolute, 4, false),
    op(Lda, Absolute, 4, false),
    op(Ldx, Absolute, 4, false),
    ill(Lax, Absolute, 4, false),
    // 0xB0
    op(Bcs, Relative, 2, true),
    op(Lda, IndirectY, 5, true),
    ill(Kil, Implied, 2, false),
    ill(Lax, IndirectY, 5, true),
    op(Ldy, ZeroPageX, 4, false),
    op(Lda, ZeroPageX, 4, false),
    op(Ldx, ZeroPageY, 4, false),
    ill(Lax, ZeroPageY, 4, false),
    op(Clv, Implied, 2, false),
    op(Lda, AbsoluteY, 4, true),
    op(Tsx, Implied, 2, false),
    ill(Las, AbsoluteY, 4, true),
    op(Ldy, AbsoluteX, 4, true),
    op(Lda, AbsoluteX, 4, true),
    op(Ldx, AbsoluteY, 4, true),
    ill(Lax, AbsoluteY, 4, true),
    // 0xC0
    op(Cpy, Immediate, 2, false),
    op(Cmp, IndirectX, 6, false),
    ill(Nop, Immediate, 2, false),
    ill(Dcp, IndirectX, 8, false),
    op(Cpy, ZeroPage, 3, false),
    op(Cmp, ZeroPage, 3, false),
    op(Dec, ZeroPage, 5, false),
    ill(Dcp, ZeroPage, 5, false),
    op(Iny, Implied, 2, false),
    op(Cmp, Immediate, 2, false),
    op(Dex, Implied, 2, false),
    ill(Axs, Immediate, 2, false),
    op(Cpy, Absolute, 4, false),
    op(Cmp, Absolute, 4, false),
    op(Dec, Absolute, 6, false),
    ill(Dcp, Absolute, 6, false),
    // 0xD0
    op(Bne, Relative, 2, true),
    op(Cmp, IndirectY, 5, true),
    ill(Kil, Implied, 2, false),
    ill(Dcp, IndirectY, 8, false),
    ill(Nop, ZeroPageX, 4, false),
    op(Cmp, ZeroPageX, 4, false),
    op(Dec, ZeroPageX, 6, false),
    ill(Dcp, ZeroPageX, 6, false),
    op(Cld, Implied, 2, false),
    op(Cmp, AbsoluteY, 4, true),
    ill(Nop, Implied, 2, false),
    ill(Dcp, AbsoluteY, 7, false),
    ill(Nop, AbsoluteX, 4, true),
    op(Cmp, AbsoluteX, 4, true),
    op(Dec, AbsoluteX, 7, false),
    ill(Dcp, AbsoluteX, 7, false),
    // 0xE0
    op(Cpx, Immediate, 2, false),
    op(Sbc, IndirectX, 6, false),
    ill(Nop, Immediate, 2, false),
    ill(Isc, IndirectX, 8, false),
    op(Cpx, ZeroPage, 3, false),
    op(Sbc, ZeroPage, 3, false),
    op(Inc, ZeroPage, 5, false),
    ill(Isc, ZeroPage, 5, false),
    op(Inx, Implied, 2, false),
    op(Sbc, Immediate, 2, false),
    op(Nop, Implied, 2, false),
    // Approximation: the real 0xEB is an undocumented SBC alias whose
    // internal side effects are not reproduced; it executes as SBC #imm.
    ill(Sbc, Immediate, 2, false),
    op(Cpx, Absolute, 4, false),
    op(Sbc, Absolute, 4, false),
    op(Inc, Absolute, 6, false),
    ill(Isc, Absolute, 6, false),
    // 0xF0
    op(Beq, Relative, 2, true),
    op(Sbc, IndirectY, 5, true),
    ill(Kil, Implied, 2, false),
    ill(Isc, IndirectY, 8, false),
    ill(Nop, ZeroPageX, 4, false),
    op(Sbc, ZeroPageX, 4, false),
    op(Inc, ZeroPageX, 6, false),
    ill(Isc, ZeroPageX, 6, false),
    op(Sed, Implied, 2, false),
    op(Sbc, AbsoluteY, 4, true),
    ill(Nop, Implied, 2, false),
    ill(Isc, AbsoluteY, 7, false),
    ill(Nop, AbsoluteX, 4, true),
    op(Sbc, AbsoluteX, 4, true),
    op(Inc, AbsoluteX, 7, false),
    ill(Isc, AbsoluteX, 7, false),
];
