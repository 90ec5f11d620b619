//! Tests for IRQ and NMI entry driven by the host between steps.

use nmos6502::{FlatMemory, MemoryBus, CPU, INTERRUPT_CYCLES};

/// CPU with reset at 0x8000, NMI handler at 0xA000, IRQ handler at 0xB000.
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.write(0xFFFA, 0x00);
    memory.write(0xFFFB, 0xA0);
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0xB0);
    CPU::new(memory)
}

#[test]
fn test_irq_entry() {
    let mut cpu = setup_cpu();
    cpu.set_pc(0x1234);
    cpu.set_status(0x01); // C only, I clear

    assert_eq!(cpu.trigger_irq(), INTERRUPT_CYCLES);
    assert_eq!(cpu.cycles(), 7);
    assert_eq!(cpu.pc(), 0xB000);
    assert!(cpu.flag_i());
    assert_eq!(cpu.sp(), 0xFA);
    assert_eq!(cpu.memory_mut().read(0x01FD), 0x12);
    assert_eq!(cpu.memory_mut().read(0x01FC), 0x34);
    assert_eq!(cpu.memory_mut().read(0x01FB), 0x31);
}

#[test]
fn test_nmi_entry() {
    let mut cpu = setup_cpu();
    cpu.set_pc(0x4321);

    assert_eq!(cpu.trigger_nmi(), 7);
    assert_eq!(cpu.pc(), 0xA000);
    assert_eq!(cpu.memory_mut().read(0x01FD), 0x43);
    assert_eq!(cpu.memory_mut().read(0x01FC), 0x21);
}

#[test]
fn test_irq_handler_returns_with_rti() {
    let mut cpu = setup_cpu();
    // Main: INX forever
    cpu.memory_mut().load(0x8000, &[0xE8, 0x4C, 0x00, 0x80]);
    // Handler: INY; RTI
    cpu.memory_mut().load(0xB000, &[0xC8, 0x40]);
    cpu.set_flag_i(false);

    cpu.step();
    let resume = cpu.pc();
    cpu.trigger_irq();
    cpu.step(); // INY
    cpu.step(); // RTI

    assert_eq!(cpu.pc(), resume);
    assert_eq!(cpu.y(), 1);
    assert!(!cpu.flag_i());
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_host_gates_irq_on_interrupt_disable() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xEA; 8]);
    let mut serviced = 0;

    // Level-triggered line held low, masked by I after reset
    for _ in 0..4 {
        cpu.step();
        if !cpu.flag_i() {
            cpu.trigger_irq();
            serviced += 1;
        }
    }

    assert_eq!(serviced, 0);
    assert_eq!(cpu.pc(), 0x8004);
}

#[test]
fn test_nmi_during_irq_handler() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0xB000, &[0xEA]);
    cpu.memory_mut().load(0xA000, &[0x40]); // RTI
    cpu.set_flag_i(false);

    cpu.trigger_irq();
    assert!(cpu.flag_i());
    cpu.trigger_nmi();
    assert_eq!(cpu.pc(), 0xA000);
    assert_eq!(cpu.sp(), 0xF7);

    cpu.step();
    assert_eq!(cpu.pc(), 0xB000);
    assert_eq!(cpu.cycles(), 7 + 7 + 6);
}

#[test]
fn test_reset_after_interrupt() {
    let mut cpu = setup_cpu();
    cpu.trigger_nmi();
    cpu.reset();

    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.status(), 0x24);
    assert_eq!(cpu.cycles(), 7);
}
