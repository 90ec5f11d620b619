//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BPL / BMI: Branch on Negative flag clear / set
//! - BVC / BVS: Branch on Overflow flag clear / set
//! - BCC / BCS: Branch on Carry flag clear / set
//! - BNE / BEQ: Branch on Zero flag clear / set
//!
//! All branch instructions use relative addressing with a signed 8-bit offset.
//! The resolver has already computed the target and moved PC past the
//! instruction, so a branch only decides whether to take it.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page
//!
//! No flags are affected.

use crate::addressing::page_crossed;
use crate::{MemoryBus, Status, CPU};

/// Jumps to the resolved target when `condition` holds, charging the
/// taken and page-cross penalties.
fn branch<M: MemoryBus>(cpu: &mut CPU<M>, condition: bool) {
    if !condition {
        return;
    }

    let target = cpu.effective_addr;

    // Add 1 cycle for branch taken
    cpu.cycles += 1;

    // And 1 more when the target is on a different page than the next instruction
    if page_crossed(cpu.pc, target) {
        cpu.cycles += 1;
    }

    cpu.pc = target;
}

/// Executes the BPL (Branch if Positive) instruction.
pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut CPU<M>) {
    let condition = !cpu.status.contains(Status::NEGATIVE);
    branch(cpu, condition);
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut CPU<M>) {
    let condition = cpu.status.contains(Status::NEGATIVE);
    branch(cpu, condition);
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let condition = !cpu.status.contains(Status::OVERFLOW);
    branch(cpu, condition);
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut CPU<M>) {
    let condition = cpu.status.contains(Status::OVERFLOW);
    branch(cpu, condition);
}

/// Executes the BCC (Branch if Carry Clear) instruction.
pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let condition = !cpu.status.contains(Status::CARRY);
    branch(cpu, condition);
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut CPU<M>) {
    let condition = cpu.status.contains(Status::CARRY);
    branch(cpu, condition);
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut CPU<M>) {
    let condition = !cpu.status.contains(Status::ZERO);
    branch(cpu, condition);
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut CPU<M>) {
    let condition = cpu.status.contains(Status::ZERO);
    branch(cpu, condition);
}
