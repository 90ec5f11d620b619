//! Tests for the undocumented opcodes.
//!
//! Each stable composite is checked against running its two documented
//! halves back to back on an identical machine.

use nmos6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

/// Machine with A, C and the byte at 0x0040 staged, running `program`.
fn staged(program: &[u8], a: u8, carry: bool, operand: u8) -> CPU<FlatMemory> {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, program);
    cpu.memory_mut().write(0x0040, operand);
    cpu.set_a(a);
    cpu.set_flag_c(carry);
    cpu
}

/// Runs a one-instruction composite and its two-instruction equivalent and
/// compares A, flags and the memory byte.
fn assert_composite(illegal: u8, first: u8, second: u8) {
    for &(a, carry, operand) in &[
        (0x00u8, false, 0x00u8),
        (0x42, true, 0x81),
        (0x80, false, 0x7F),
        (0xFF, true, 0xFF),
        (0x10, false, 0x01),
    ] {
        let mut combined = staged(&[illegal, 0x40], a, carry, operand);
        combined.step();

        let mut split = staged(&[first, 0x40, second, 0x40], a, carry, operand);
        split.step();
        split.step();

        assert_eq!(
            combined.a(),
            split.a(),
            "0x{:02X} A={:02X} M={:02X}",
            illegal,
            a,
            operand
        );
        assert_eq!(
            combined.status(),
            split.status(),
            "0x{:02X} A={:02X} M={:02X}",
            illegal,
            a,
            operand
        );
        assert_eq!(
            combined.memory_mut().read(0x0040),
            split.memory_mut().read(0x0040)
        );
    }
}

#[test]
fn test_slo_matches_asl_ora() {
    assert_composite(0x07, 0x06, 0x05);
}

#[test]
fn test_rla_matches_rol_and() {
    assert_composite(0x27, 0x26, 0x25);
}

#[test]
fn test_sre_matches_lsr_eor() {
    assert_composite(0x47, 0x46, 0x45);
}

#[test]
fn test_rra_matches_ror_adc() {
    assert_composite(0x67, 0x66, 0x65);
}

#[test]
fn test_dcp_matches_dec_cmp() {
    assert_composite(0xC7, 0xC6, 0xC5);
}

#[test]
fn test_isc_matches_inc_sbc() {
    assert_composite(0xE7, 0xE6, 0xE5);
}

#[test]
fn test_composite_cycle_costs() {
    for (program, cycles) in [
        (vec![0x03u8, 0x40], 8u32), // SLO (zp,X)
        (vec![0x07, 0x40], 5),      // SLO zp
        (vec![0x1B, 0x00, 0x20], 7), // SLO abs,Y
        (vec![0xD3, 0x40], 8),      // DCP (zp),Y
        (vec![0xFF, 0x00, 0x20], 7), // ISC abs,X
    ] {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &program);
        cpu.set_x(0xFF);
        cpu.set_y(0xFF);

        // Read-modify-write composites never take the page-cross cycle
        assert_eq!(cpu.step(), cycles, "opcode 0x{:02X}", program[0]);
    }
}

#[test]
fn test_lax_loads_a_and_x() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA7, 0x40]); // LAX $40
    cpu.memory_mut().write(0x0040, 0x80);

    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.a(), 0x80);
    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n());
}

#[test]
fn test_lax_immediate() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xAB, 0x00]);
    cpu.set_a(0x11);
    cpu.set_x(0x22);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_lax_indirect_y_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xB3, 0x40]);
    cpu.memory_mut().load(0x0040, &[0xFF, 0x20]);
    cpu.memory_mut().write(0x2100, 0x07);
    cpu.set_y(0x01);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.x(), 0x07);
}

#[test]
fn test_sax_stores_a_and_x() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x97, 0xFF]); // SAX $FF,Y
    cpu.set_a(0xF3);
    cpu.set_x(0x3F);
    cpu.set_y(0x02);
    let before = cpu.status();

    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.memory_mut().read(0x0001), 0x33);
    assert_eq!(cpu.status(), before);
}

#[test]
fn test_unstable_opcodes_only_advance() {
    for (opcode, size, cycles) in [
        (0x0Bu8, 2u16, 2u32), // ANC #
        (0x4B, 2, 2),         // ALR #
        (0x6B, 2, 2),         // ARR #
        (0x8B, 2, 2),         // XAA #
        (0xCB, 2, 2),         // AXS #
        (0x93, 2, 6),         // AHX (zp),Y
        (0x9B, 3, 5),         // TAS abs,Y
        (0x9C, 3, 5),         // SHY abs,X
        (0x9E, 3, 5),         // SHX abs,Y
        (0x9F, 3, 5),         // AHX abs,Y
    ] {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[opcode, 0x10, 0x20]);
        cpu.set_a(0x5A);
        cpu.set_x(0x01);
        cpu.set_y(0x01);
        let before = cpu.snapshot();

        assert_eq!(cpu.step(), cycles, "opcode 0x{:02X}", opcode);
        assert_eq!(cpu.pc(), 0x8000 + size, "opcode 0x{:02X}", opcode);
        assert_eq!(cpu.a(), before.a);
        assert_eq!(cpu.x(), before.x);
        assert_eq!(cpu.sp(), before.sp);
        assert_eq!(cpu.status(), before.status);
        assert_eq!(cpu.memory_mut().read(0x2011), 0x00);
    }
}

#[test]
fn test_las_pays_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xBB, 0xFF, 0x20]);
    cpu.set_y(0x01);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.pc(), 0x8003);
}
