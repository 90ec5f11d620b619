//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is a standalone function taking the CPU after its operand has been
//! resolved: the effective address and addressing mode are already set and PC already
//! points at the next instruction. Base cycle costs are charged by the step driver.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP, KIL)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)
//! - **illegal**: Undocumented opcodes (SLO, RLA, SRE, RRA, DCP, ISC, LAX, SAX and placeholders)

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod illegal;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;

use crate::{Instruction, MemoryBus, CPU};

/// Runs the handler bound to `instruction`.
pub(crate) fn execute<M: MemoryBus>(cpu: &mut CPU<M>, instruction: Instruction) {
    use Instruction::*;

    match instruction {
        Adc => alu::execute_adc(cpu),
        Sbc => alu::execute_sbc(cpu),
        And => alu::execute_and(cpu),
        Ora => alu::execute_ora(cpu),
        Eor => alu::execute_eor(cpu),
        Bit => alu::execute_bit(cpu),
        Cmp => alu::execute_cmp(cpu),
        Cpx => alu::execute_cpx(cpu),
        Cpy => alu::execute_cpy(cpu),

        Asl => shifts::execute_asl(cpu),
        Lsr => shifts::execute_lsr(cpu),
        Rol => shifts::execute_rol(cpu),
        Ror => shifts::execute_ror(cpu),

        Lda => load_store::execute_lda(cpu),
        Ldx => load_store::execute_ldx(cpu),
        Ldy => load_store::execute_ldy(cpu),
        Sta => load_store::execute_sta(cpu),
        Stx => load_store::execute_stx(cpu),
        Sty => load_store::execute_sty(cpu),

        Tax => transfer::execute_tax(cpu),
        Tay => transfer::execute_tay(cpu),
        Txa => transfer::execute_txa(cpu),
        Tya => transfer::execute_tya(cpu),
        Tsx => transfer::execute_tsx(cpu),
        Txs => transfer::execute_txs(cpu),

        Inc => inc_dec::execute_inc(cpu),
        Dec => inc_dec::execute_dec(cpu),
        Inx => inc_dec::execute_inx(cpu),
        Iny => inc_dec::execute_iny(cpu),
        Dex => inc_dec::execute_dex(cpu),
        Dey => inc_dec::execute_dey(cpu),

        Bpl => branches::execute_bpl(cpu),
        Bmi => branches::execute_bmi(cpu),
        Bvc => branches::execute_bvc(cpu),
        Bvs => branches::execute_bvs(cpu),
        Bcc => branches::execute_bcc(cpu),
        Bcs => branches::execute_bcs(cpu),
        Bne => branches::execute_bne(cpu),
        Beq => branches::execute_beq(cpu),

        Jmp => control::execute_jmp(cpu),
        Jsr => control::execute_jsr(cpu),
        Rts => control::execute_rts(cpu),
        Rti => control::execute_rti(cpu),
        Brk => control::execute_brk(cpu),
        Nop => control::execute_nop(cpu),
        Kil => control::execute_kil(cpu),

        Pha => stack::execute_pha(cpu),
        Php => stack::execute_php(cpu),
        Pla => stack::execute_pla(cpu),
        Plp => stack::execute_plp(cpu),

        Clc => flags::execute_clc(cpu),
        Sec => flags::execute_sec(cpu),
        Cli => flags::execute_cli(cpu),
        Sei => flags::execute_sei(cpu),
        Clv => flags::execute_clv(cpu),
        Cld => flags::execute_cld(cpu),
        Sed => flags::execute_sed(cpu),

        Slo => illegal::execute_slo(cpu),
        Rla => illegal::execute_rla(cpu),
        Sre => illegal::execute_sre(cpu),
        Rra => illegal::execute_rra(cpu),
        Dcp => illegal::execute_dcp(cpu),
        Isc => illegal::execute_isc(cpu),
        Lax => illegal::execute_lax(cpu),
        Sax => illegal::execute_sax(cpu),
        Anc | Alr | Arr | Xaa | Axs | Ahx | Tas | Shy | Shx | Las => illegal::execute_unstable(cpu),
    }
}
