//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC / SBC: binary add and subtract with carry
//! - AND / ORA / EOR: bitwise combine into the accumulator
//! - BIT: test memory bits against the accumulator
//! - CMP / CPX / CPY: compare a register with memory
//!
//! The decimal flag is stored but does not change ADC/SBC; arithmetic is
//! always binary.

use crate::{MemoryBus, Status, CPU};

/// Adds `value` and the carry flag to the accumulator.
///
/// Shared by ADC, SBC (with the operand inverted) and the RRA/ISC
/// composites.
pub(crate) fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let sum = a as u16 + value as u16 + cpu.flag_c() as u16;
    let result = sum as u8;

    cpu.status.set(Status::CARRY, sum > 0xFF);
    // Operands agree in sign but the result does not
    cpu.status
        .set(Status::OVERFLOW, !(a ^ value) & (a ^ result) & 0x80 != 0);

    cpu.a = result;
    cpu.set_zn(result);
}

/// Subtracts `value` and the borrow (inverted carry) from the accumulator.
pub(crate) fn subtract_with_borrow<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    add_with_carry(cpu, value ^ 0xFF);
}

/// Sets N/Z from `register - value` and C when `register >= value`.
pub(crate) fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    cpu.set_zn(register.wrapping_sub(value));
    cpu.status.set(Status::CARRY, register >= value);
}

/// Executes the ADC (Add with Carry) instruction.
///
/// Flags affected: C (unsigned overflow), V (signed overflow), Z, N.
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch_operand();
    add_with_carry(cpu, value);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Equivalent to ADC of the one's complement of the operand. Carry is set
/// when no borrow occurred.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch_operand();
    subtract_with_borrow(cpu, value);
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch_operand();
    cpu.a &= value;
    cpu.set_zn(cpu.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch_operand();
    cpu.a |= value;
    cpu.set_zn(cpu.a);
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch_operand();
    cpu.a ^= value;
    cpu.set_zn(cpu.a);
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z reflects `A & M`; N and V are copied from bits 7 and 6 of memory.
/// The accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch_operand();

    cpu.status.set(Status::ZERO, cpu.a & value == 0);
    cpu.status.set(Status::NEGATIVE, value & 0x80 != 0);
    cpu.status.set(Status::OVERFLOW, value & 0x40 != 0);
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch_operand();
    let register = cpu.a;
    compare(cpu, register, value);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch_operand();
    let register = cpu.x;
    compare(cpu, register, value);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.fetch_operand();
    let register = cpu.y;
    compare(cpu, register, value);
}
