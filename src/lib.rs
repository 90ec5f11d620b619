//! # NMOS 6502 CPU Core
//!
//! A cycle-counted MOS 6502 interpreter with every one of the 256 opcodes
//! decoded, including the undocumented ones.
//!
//! The core is a plain value, [`CPU<M>`], that owns whatever implements
//! [`MemoryBus`]. Hosts drive it with [`CPU::step`], inject interrupts with
//! [`CPU::trigger_irq`] / [`CPU::trigger_nmi`] between steps, and read the
//! running cycle count to pace video, audio or timers.
//!
//! ## Quick Start
//!
//! ```rust
//! use nmos6502::{CPU, FlatMemory, MemoryBus};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // Set reset vector to point to program start at 0x8000
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x80); // High byte
//!
//! // LDX #$05; DEX; BNE -3
//! memory.load(0x8000, &[0xA2, 0x05, 0xCA, 0xD0, 0xFD]);
//!
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//! assert_eq!(cpu.sp(), 0xFD);
//! assert!(cpu.flag_i());
//!
//! while cpu.pc() != 0x8005 {
//!     cpu.step();
//! }
//! assert_eq!(cpu.x(), 0);
//! // 2 + 5 * DEX + 4 taken BNEs + 1 falling through
//! assert_eq!(cpu.cycles(), 2 + 5 * 2 + 4 * 3 + 2);
//! ```
//!
//! ## Behavior notes
//!
//! - Arithmetic is always binary; the D flag is stored but ignored.
//! - The unstable undocumented opcodes (ANC, ALR, ARR, XAA, AXS, AHX, TAS,
//!   SHY, SHX, LAS) consume their operand bytes and cycles but change nothing.
//! - KIL/JAM opcodes do not halt; they behave as two-cycle, one-byte NOPs.
//! - BRK pushes the address of the byte after the opcode.
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the step driver
//! - `addressing` - Addressing modes and operand resolution
//! - `opcodes` - The 256-entry dispatch table
//! - `interrupts` - Reset, IRQ and NMI sequencing
//! - `status` - The packed processor status register
//! - `memory` - MemoryBus trait and a flat 64KB implementation
//! - `devices` - Address-mapped RAM, ROM and console for hosting ROMs
//! - `wasm` - JavaScript bindings (feature `wasm`)
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger.
//! Every executed instruction is traced at `trace` level under the
//! `nmos6502::cpu` target; reset, interrupts and KIL at `debug`.

pub mod addressing;
pub mod cpu;
pub mod devices;
pub mod interrupts;
pub mod memory;
pub mod opcodes;
pub mod status;
pub mod wasm;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{CpuSnapshot, CPU};
pub use devices::{ConsoleDevice, Device, DeviceError, MappedMemory, RamDevice, RomDevice};
pub use interrupts::{INTERRUPT_CYCLES, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Instruction, OpcodeMetadata, OPCODE_TABLE};
pub use status::Status;
