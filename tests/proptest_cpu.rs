//! Property-based tests for the step driver.
//!
//! Any opcode, from any register state, must leave the CPU in a state the
//! hardware could reach: bit 5 set, cycles within the table's bounds and PC
//! past the operand bytes unless the instruction transfers control.

use nmos6502::{FlatMemory, Instruction, MemoryBus, OPCODE_TABLE, CPU};
use proptest::prelude::*;

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn transfers_control(instruction: Instruction) -> bool {
    matches!(
        instruction,
        Instruction::Jmp
            | Instruction::Jsr
            | Instruction::Rts
            | Instruction::Rti
            | Instruction::Brk
            | Instruction::Bcc
            | Instruction::Bcs
            | Instruction::Beq
            | Instruction::Bne
            | Instruction::Bmi
            | Instruction::Bpl
            | Instruction::Bvc
            | Instruction::Bvs
    )
}

/// Register file and zero page to start a step from.
#[derive(Debug, Clone)]
struct StartState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
    zero_page: Vec<u8>,
}

impl StartState {
    fn build(&self) -> CPU<FlatMemory> {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x0000, &self.zero_page);
        cpu.set_a(self.a);
        cpu.set_x(self.x);
        cpu.set_y(self.y);
        cpu.set_sp(self.sp);
        cpu.set_status(self.status);
        cpu
    }
}

prop_compose! {
    fn start_state()(
        a in any::<u8>(),
        x in any::<u8>(),
        y in any::<u8>(),
        sp in any::<u8>(),
        status in any::<u8>(),
        zero_page in prop::collection::vec(any::<u8>(), 256),
    ) -> StartState {
        StartState { a, x, y, sp, status, zero_page }
    }
}

proptest! {
    /// Property: every opcode stays within its cycle bounds and keeps bit 5 set
    #[test]
    fn prop_step_invariants(
        state in start_state(),
        opcode in any::<u8>(),
        lo in any::<u8>(),
        hi in any::<u8>(),
    ) {
        let mut cpu = state.build();
        cpu.memory_mut().load(0x8000, &[opcode, lo, hi]);
        let entry = &OPCODE_TABLE[opcode as usize];
        let before = cpu.cycles();

        let cycles = cpu.step();

        prop_assert!(cycles >= entry.base_cycles as u32);
        prop_assert!(cycles <= entry.base_cycles as u32 + 2);
        prop_assert_eq!(cpu.cycles(), before + cycles as u64);
        prop_assert_eq!(cpu.last_opcode(), opcode);
        prop_assert!(cpu.status() & 0x20 != 0);
        prop_assert!(cpu.status() & 0x10 == 0);

        if !transfers_control(entry.instruction) {
            prop_assert_eq!(cpu.pc(), 0x8000 + entry.size_bytes as u16);
        }
    }

    /// Property: untaken branches cost two cycles and fall through
    #[test]
    fn prop_branch_not_taken(index in 0usize..8, offset in any::<u8>()) {
        // Opcode with the flag state that makes it fall through
        let cases = [
            (0x10u8, 0x80u8), // BPL with N
            (0x30, 0x00),     // BMI without N
            (0x50, 0x40),     // BVC with V
            (0x70, 0x00),     // BVS without V
            (0x90, 0x01),     // BCC with C
            (0xB0, 0x00),     // BCS without C
            (0xD0, 0x02),     // BNE with Z
            (0xF0, 0x00),     // BEQ without Z
        ];
        let (opcode, status) = cases[index];

        let mut cpu = setup_cpu();
        cpu.set_status(status);
        cpu.memory_mut().load(0x8000, &[opcode, offset]);

        prop_assert_eq!(cpu.step(), 2);
        prop_assert_eq!(cpu.pc(), 0x8002);
    }

    /// Property: a taken branch lands at next PC plus the signed offset
    #[test]
    fn prop_branch_taken_target(offset in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_flag_z(true);
        // BEQ offset
        cpu.memory_mut().load(0x8000, &[0xF0, offset]);

        let cycles = cpu.step();

        let target = 0x8002u16.wrapping_add(offset as i8 as u16);
        let crossed = (target & 0xFF00) != 0x8000;
        prop_assert_eq!(cpu.pc(), target);
        prop_assert_eq!(cycles, 3 + crossed as u32);
    }

    /// Property: run_for_cycles stops at the first instruction boundary past the budget
    #[test]
    fn prop_run_for_cycles_meets_budget(budget in 1u64..500) {
        let mut cpu = setup_cpu();
        // LDX #$FF; DEX; BNE -3; JMP $8000
        cpu.memory_mut().load(0x8000, &[0xA2, 0xFF, 0xCA, 0xD0, 0xFD, 0x4C, 0x00, 0x80]);

        let elapsed = cpu.run_for_cycles(budget);

        prop_assert!(elapsed >= budget);
        // Nothing in the loop takes more than three cycles
        prop_assert!(elapsed < budget + 3);
        prop_assert_eq!(cpu.cycles(), elapsed);
    }
}
