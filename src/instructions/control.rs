//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump (absolute, or indirect with the page-wrap quirk)
//! - JSR / RTS: Subroutine call and return
//! - BRK / RTI: Software interrupt and return from interrupt
//! - NOP: No operation (all official and undocumented encodings)
//! - KIL: Processor jam, treated as a two-cycle no-op
//!
//! ## Return addresses
//!
//! JSR pushes the address of its own last byte, so RTS adds one to the
//! pulled value. BRK pushes the address following the opcode byte and RTI
//! resumes there without adjustment.

use log::debug;

use crate::{MemoryBus, Status, CPU, IRQ_VECTOR};

/// Executes the JMP (Jump) instruction.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.pc = cpu.effective_addr;
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// PC already points past the operand; the pushed value is one less.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>) {
    let return_addr = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_addr);
    cpu.pc = cpu.effective_addr;
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.pc = cpu.pull_word().wrapping_add(1);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls status (same rule as PLP) and then PC.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.pull();
    cpu.status = Status::pulled(value);
    cpu.pc = cpu.pull_word();
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// Pushes PC and status with the break marker set, sets I and jumps through
/// the IRQ vector at 0xFFFE/0xFFFF.
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    debug!("brk at {:04X}", cpu.pc.wrapping_sub(1));
    cpu.enter_interrupt(IRQ_VECTOR);
}

/// Executes the NOP (No Operation) instruction.
///
/// Operand bytes of the multi-byte undocumented NOPs were already skipped
/// by the resolver.
pub(crate) fn execute_nop<M: MemoryBus>(_cpu: &mut CPU<M>) {}

/// Executes the KIL (Jam) instruction.
///
/// Real hardware locks up; here execution continues at the next byte.
pub(crate) fn execute_kil<M: MemoryBus>(cpu: &mut CPU<M>) {
    debug!(
        "kil opcode {:02X} at {:04X}, continuing",
        cpu.last_opcode,
        cpu.pc.wrapping_sub(1)
    );
}
