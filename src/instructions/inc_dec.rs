//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC / DEC: Adjust a memory byte by one
//! - INX / INY / DEX / DEY: Adjust an index register by one
//!
//! All wrap at 8 bits and set Z and N from the result.

use crate::{MemoryBus, CPU};

/// Increments the byte at the effective address and returns the new value.
pub(crate) fn increment_memory<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    let result = cpu.fetch_operand().wrapping_add(1);
    cpu.memory.write(cpu.effective_addr, result);
    result
}

/// Decrements the byte at the effective address and returns the new value.
pub(crate) fn decrement_memory<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    let result = cpu.fetch_operand().wrapping_sub(1);
    cpu.memory.write(cpu.effective_addr, result);
    result
}

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let result = increment_memory(cpu);
    cpu.set_zn(result);
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>) {
    let result = decrement_memory(cpu);
    cpu.set_zn(result);
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_zn(cpu.x);
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_zn(cpu.y);
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_zn(cpu.x);
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_zn(cpu.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup_cpu() -> CPU<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.set_reset_vector(0x8000);
        CPU::new(mem)
    }

    #[test]
    fn test_inc_wraps_to_zero() {
        let mut cpu = setup_cpu();
        cpu.effective_addr = 0x0050;
        cpu.memory.write(0x0050, 0xFF);
        execute_inc(&mut cpu);

        assert_eq!(cpu.memory.read(0x0050), 0x00);
        assert!(cpu.flag_z());
    }

    #[test]
    fn test_dey_wraps_to_ff() {
        let mut cpu = setup_cpu();
        cpu.y = 0x00;
        execute_dey(&mut cpu);

        assert_eq!(cpu.y, 0xFF);
        assert!(cpu.flag_n());
        assert!(!cpu.flag_z());
    }
}
