//! # Flag Instructions
//!
//! Single-flag set and clear operations: CLC/SEC, CLI/SEI, CLD/SED and CLV.
//! There is no SEV on the 6502.

use crate::{MemoryBus, Status, CPU};

/// Executes the CLC (Clear Carry Flag) instruction.
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.remove(Status::CARRY);
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.insert(Status::CARRY);
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.remove(Status::INTERRUPT_DISABLE);
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.insert(Status::INTERRUPT_DISABLE);
}

/// Executes the CLV (Clear Overflow Flag) instruction.
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.remove(Status::OVERFLOW);
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.remove(Status::DECIMAL);
}

/// Executes the SED (Set Decimal Mode) instruction.
///
/// The flag is recorded but arithmetic stays binary.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.insert(Status::DECIMAL);
}
