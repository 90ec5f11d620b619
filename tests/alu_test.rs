//! Tests for arithmetic and logic instructions executed through `step()`.
//!
//! Tests cover:
//! - ADC/SBC flag behavior, binary mode only
//! - AND/ORA/EOR across addressing modes
//! - BIT flag copying
//! - CMP/CPX/CPY carry, zero and negative results
//! - Page-crossing penalties on indexed reads

use nmos6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn load(cpu: &mut CPU<FlatMemory>, program: &[u8]) {
    cpu.memory_mut().load(0x8000, program);
}

// ========== ADC ==========

#[test]
fn test_adc_immediate_basic() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x69, 0x05]); // ADC #$05
    cpu.set_a(0x10);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.a(), 0x15);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_carry_in_and_out() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x69, 0x01]);
    cpu.set_a(0xFE);
    cpu.set_flag_c(true);
    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_v());
}

#[test]
fn test_adc_negative_overflow() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x69, 0x80]);
    cpu.set_a(0x80);
    cpu.step();

    // -128 + -128
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_v());
    assert!(cpu.flag_c());
}

#[test]
fn test_adc_ignores_decimal_flag() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xF8, 0x69, 0x01]); // SED; ADC #$01
    cpu.set_a(0x09);
    cpu.step();
    cpu.step();

    assert!(cpu.flag_d());
    assert_eq!(cpu.a(), 0x0A);
}

#[test]
fn test_adc_absolute_y_page_cross() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x79, 0xFF, 0x20]); // ADC $20FF,Y
    cpu.memory_mut().write(0x2100, 0x03);
    cpu.set_y(1);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.a(), 0x03);
}

// ========== SBC ==========

#[test]
fn test_sbc_no_borrow() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xE9, 0x10]); // SBC #$10
    cpu.set_a(0x50);
    cpu.set_flag_c(true);
    cpu.step();

    assert_eq!(cpu.a(), 0x40);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_v());
}

#[test]
fn test_sbc_with_borrow_in() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xE9, 0x10]);
    cpu.set_a(0x50);
    cpu.set_flag_c(false);
    cpu.step();

    assert_eq!(cpu.a(), 0x3F);
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_borrow_out() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xE9, 0x01]);
    cpu.set_a(0x00);
    cpu.set_flag_c(true);
    cpu.step();

    assert_eq!(cpu.a(), 0xFF);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_sbc_signed_overflow() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xE9, 0x01]);
    cpu.set_a(0x80);
    cpu.set_flag_c(true);
    cpu.step();

    // -128 - 1
    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.flag_v());
}

#[test]
fn test_sbc_undocumented_0xeb() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xEB, 0x02]);
    cpu.set_a(0x05);
    cpu.set_flag_c(true);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.a(), 0x03);
    assert_eq!(cpu.pc(), 0x8002);
}

// ========== Logic ==========

#[test]
fn test_and_zero_page() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x25, 0x10]); // AND $10
    cpu.memory_mut().write(0x0010, 0x0F);
    cpu.set_a(0xF0);

    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_ora_indirect_x() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x01, 0x20]); // ORA ($20,X)
    cpu.set_x(0x04);
    cpu.memory_mut().write(0x0024, 0x00);
    cpu.memory_mut().write(0x0025, 0x30);
    cpu.memory_mut().write(0x3000, 0x81);
    cpu.set_a(0x02);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.a(), 0x83);
    assert!(cpu.flag_n());
}

#[test]
fn test_eor_indirect_y_page_cross() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x51, 0x40]); // EOR ($40),Y
    cpu.set_y(0x01);
    cpu.memory_mut().write(0x0040, 0xFF);
    cpu.memory_mut().write(0x0041, 0x30);
    cpu.memory_mut().write(0x3100, 0xFF);
    cpu.set_a(0xFF);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

// ========== BIT ==========

#[test]
fn test_bit_copies_memory_bits() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x2C, 0x00, 0x30]); // BIT $3000
    cpu.memory_mut().write(0x3000, 0xC0);
    cpu.set_a(0x01);

    assert_eq!(cpu.step(), 4);
    assert!(cpu.flag_z());
    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert_eq!(cpu.a(), 0x01);
}

#[test]
fn test_bit_clears_n_v_and_z() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0x24, 0x10]); // BIT $10
    cpu.memory_mut().write(0x0010, 0x01);
    cpu.set_a(0x01);
    cpu.set_flag_n(true);
    cpu.set_flag_v(true);
    cpu.step();

    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_v());
}

// ========== Compare ==========

#[test]
fn test_cmp_greater_equal_less() {
    for (a, m, c, z, n) in [
        (0x50u8, 0x30u8, true, false, false),
        (0x30, 0x30, true, true, false),
        (0x30, 0x50, false, false, true),
    ] {
        let mut cpu = setup_cpu();
        load(&mut cpu, &[0xC9, m]); // CMP #m
        cpu.set_a(a);
        cpu.step();

        assert_eq!(cpu.flag_c(), c, "A={:02X} M={:02X}", a, m);
        assert_eq!(cpu.flag_z(), z, "A={:02X} M={:02X}", a, m);
        assert_eq!(cpu.flag_n(), n, "A={:02X} M={:02X}", a, m);
        assert_eq!(cpu.a(), a);
    }
}

#[test]
fn test_cpx_and_cpy() {
    let mut cpu = setup_cpu();
    load(&mut cpu, &[0xE0, 0x10, 0xC0, 0x20]); // CPX #$10; CPY #$20
    cpu.set_x(0x10);
    cpu.set_y(0x1F);

    cpu.step();
    assert!(cpu.flag_z() && cpu.flag_c());

    cpu.step();
    assert!(!cpu.flag_z() && !cpu.flag_c() && cpu.flag_n());
}
