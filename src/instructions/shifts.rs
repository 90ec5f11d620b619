//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator or a memory byte depending on the addressing
//! mode. The `shift_*` helpers return the written result so the illegal
//! read-modify-write composites can chain onto them.

use crate::{MemoryBus, Status, CPU};

/// Shifts the current operand left, bit 7 into carry. Returns the result.
pub(crate) fn shift_left<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    let operand = cpu.operand();
    let value = operand.read(cpu);
    let result = value << 1;

    cpu.status.set(Status::CARRY, value & 0x80 != 0);
    operand.write(cpu, result);
    result
}

/// Shifts the current operand right, bit 0 into carry. Returns the result.
pub(crate) fn shift_right<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    let operand = cpu.operand();
    let value = operand.read(cpu);
    let result = value >> 1;

    cpu.status.set(Status::CARRY, value & 0x01 != 0);
    operand.write(cpu, result);
    result
}

/// Rotates the current operand left: old carry into bit 0, bit 7 into carry.
pub(crate) fn rotate_left<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    let operand = cpu.operand();
    let value = operand.read(cpu);
    let result = (value << 1) | cpu.flag_c() as u8;

    cpu.status.set(Status::CARRY, value & 0x80 != 0);
    operand.write(cpu, result);
    result
}

/// Rotates the current operand right: old carry into bit 7, bit 0 into carry.
pub(crate) fn rotate_right<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    let operand = cpu.operand();
    let value = operand.read(cpu);
    let result = (value >> 1) | ((cpu.flag_c() as u8) << 7);

    cpu.status.set(Status::CARRY, value & 0x01 != 0);
    operand.write(cpu, result);
    result
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 0 is set to 0 and bit 7 is placed in the carry flag.
/// Updates C, Z, and N flags.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>) {
    let result = shift_left(cpu);
    cpu.set_zn(result);
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 is set to 0 and bit 0 is placed in the carry flag, so N is always
/// cleared.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>) {
    let result = shift_right(cpu);
    cpu.set_zn(result);
}

/// Executes the ROL (Rotate Left) instruction.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>) {
    let result = rotate_left(cpu);
    cpu.set_zn(result);
}

/// Executes the ROR (Rotate Right) instruction.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>) {
    let result = rotate_right(cpu);
    cpu.set_zn(result);
}
