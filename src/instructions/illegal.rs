//! # Undocumented Instructions
//!
//! The NMOS 6502 decodes every byte. The stable undocumented opcodes combine
//! a read-modify-write with an accumulator operation:
//!
//! | Op  | Combines    |
//! |-----|-------------|
//! | SLO | ASL + ORA   |
//! | RLA | ROL + AND   |
//! | SRE | LSR + EOR   |
//! | RRA | ROR + ADC   |
//! | DCP | DEC + CMP   |
//! | ISC | INC + SBC   |
//! | LAX | LDA + LDX   |
//! | SAX | store A & X |
//!
//! The unstable group (ANC, ALR, ARR, XAA, AXS, AHX, TAS, SHY, SHX, LAS) is
//! decoded and its operand resolved, but it changes nothing.

use super::alu::{add_with_carry, compare, subtract_with_borrow};
use super::inc_dec::{decrement_memory, increment_memory};
use super::shifts::{rotate_left, rotate_right, shift_left, shift_right};
use crate::{MemoryBus, CPU};

/// Executes SLO: shift memory left, then OR it into A.
pub(crate) fn execute_slo<M: MemoryBus>(cpu: &mut CPU<M>) {
    let shifted = shift_left(cpu);
    cpu.a |= shifted;
    cpu.set_zn(cpu.a);
}

/// Executes RLA: rotate memory left, then AND it into A.
pub(crate) fn execute_rla<M: MemoryBus>(cpu: &mut CPU<M>) {
    let rotated = rotate_left(cpu);
    cpu.a &= rotated;
    cpu.set_zn(cpu.a);
}

/// Executes SRE: shift memory right, then EOR it into A.
pub(crate) fn execute_sre<M: MemoryBus>(cpu: &mut CPU<M>) {
    let shifted = shift_right(cpu);
    cpu.a ^= shifted;
    cpu.set_zn(cpu.a);
}

/// Executes RRA: rotate memory right, then add it to A.
///
/// The add uses the carry produced by the rotate.
pub(crate) fn execute_rra<M: MemoryBus>(cpu: &mut CPU<M>) {
    let rotated = rotate_right(cpu);
    add_with_carry(cpu, rotated);
}

/// Executes DCP: decrement memory, then compare A with it.
pub(crate) fn execute_dcp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let decremented = decrement_memory(cpu);
    let a = cpu.a;
    compare(cpu, a, decremented);
}

/// Executes ISC: increment memory, then subtract it from A.
pub(crate) fn execute_isc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let incremented = increment_memory(cpu);
    subtract_with_borrow(cpu, incremented);
}

/// Executes LAX: load A and X with the same byte.
pub(crate) fn execute_lax<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch_operand();
    cpu.a = value;
    cpu.x = value;
    cpu.set_zn(value);
}

/// Executes SAX: store A & X. Flags are unaffected.
pub(crate) fn execute_sax<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.memory.write(cpu.effective_addr, cpu.a & cpu.x);
}

/// Placeholder for the unstable undocumented opcodes.
pub(crate) fn execute_unstable<M: MemoryBus>(_cpu: &mut CPU<M>) {}
