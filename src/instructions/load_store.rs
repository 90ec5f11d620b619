//! # Load and Store Instructions
//!
//! This module implements memory load and store operations:
//! - LDA / LDX / LDY: Load a register from memory, setting Z and N
//! - STA / STX / STY: Store a register to memory, no flags affected
//!
//! Indexed loads may carry a page-cross cycle; that is charged by the
//! resolver, never by stores.

use crate::{MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.fetch_operand();
    cpu.set_zn(cpu.a);
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.fetch_operand();
    cpu.set_zn(cpu.x);
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.fetch_operand();
    cpu.set_zn(cpu.y);
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.memory.write(cpu.effective_addr, cpu.a);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.memory.write(cpu.effective_addr, cpu.x);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.memory.write(cpu.effective_addr, cpu.y);
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
    fn test_lda_sets_zero_and_negative() {
        let mut cpu = setup_cpu();
        cpu.effective_addr = 0x0010;

        cpu.memory.write(0x0010, 0x00);
        execute_lda(&mut cpu);
        assert!(cpu.flag_z());
        assert!(!cpu.flag_n());

        cpu.memory.write(0x0010, 0x80);
        execute_lda(&mut cpu);
        assert_eq!(cpu.a, 0x80);
        assert!(!cpu.flag_z());
        assert!(cpu.flag_n());
    }

    #[test]
    fn test_store_leaves_flags_alone() {
        let mut cpu = setup_cpu();
        cpu.effective_addr = 0x0200;
        cpu.y = 0x00;
        let before = cpu.status();
        execute_sty(&mut cpu);

        assert_eq!(cpu.memory.read(0x0200), 0x00);
        assert_eq!(cpu.status(), before);
    }
}
