//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file and memory image, then runs a handful of
//! instructions and interrupts. Every opcode decodes, so any panic is a bug;
//! the asserts pin invariants that must hold after every step.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nmos6502::{FlatMemory, MemoryBus, CPU, OPCODE_TABLE};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Packed status byte, loaded with the PLP rule
    status: u8,
    /// Where execution starts
    pc: u16,
}

/// One host action between steps
#[derive(Debug, Arbitrary)]
enum FuzzAction {
    Step,
    Irq,
    Nmi,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    /// Bytes written at PC (instruction stream)
    program: [u8; 16],
    /// Zero page contents, pointers for the indirect modes
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    actions: Vec<FuzzAction>,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &input.zero_page);
    memory.load(0x0100, &input.stack_page);
    memory.load(input.cpu_state.pc, &input.program);

    let mut cpu = CPU::new(memory);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);
    cpu.set_pc(input.cpu_state.pc);

    for action in input.actions.iter().take(64) {
        let before = cpu.cycles();
        let spent = match action {
            FuzzAction::Step => {
                let pc = cpu.pc();
                let opcode = cpu.memory_mut().read(pc);
                let spent = cpu.step();
                let entry = &OPCODE_TABLE[opcode as usize];

                // Base cost plus at most two penalty cycles
                assert!(spent >= entry.base_cycles as u32);
                assert!(spent <= entry.base_cycles as u32 + 2);
                assert_eq!(cpu.last_opcode(), opcode);
                spent
            }
            FuzzAction::Irq => cpu.trigger_irq(),
            FuzzAction::Nmi => cpu.trigger_nmi(),
        };

        assert_eq!(cpu.cycles(), before + spent as u64);
        assert_eq!(cpu.status() & 0x20, 0x20);
    }
});
