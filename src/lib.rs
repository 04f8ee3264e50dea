//! # 6502 CPU Emulator Core
//!
//! An emulator for the NMOS MOS Technology 6502 microprocessor, focused on
//! bit-exact architectural state: registers, status flags (including the
//! decimal-mode quirks of ADC/SBC), the page-wrapping behavior of every
//! addressing mode, and the stable set of undocumented opcodes.
//!
//! ## Quick Start
//!
//! ```rust
//! use mos6502::{Bus, Cpu, MemoryBus, Ram};
//!
//! // Build a bus: 32KB of RAM at 0x0000 and a page for the vectors.
//! let mut bus = Bus::new();
//! bus.attach(0x0000, Box::new(Ram::new(0x8000))).unwrap();
//! bus.attach(0xFF00, Box::new(Ram::new(0x100))).unwrap();
//!
//! // Reset vector points at the program start.
//! bus.write(0xFFFC, 0x00).unwrap();
//! bus.write(0xFFFD, 0x10).unwrap();
//!
//! // LDA #$42, then a BRK sentinel.
//! bus.load(0x1000, &[0xA9, 0x42, 0x00]).unwrap();
//!
//! let mut cpu = Cpu::new(bus);
//! cpu.reset().unwrap();
//! assert_eq!(cpu.pc(), 0x1000);
//!
//! let outcome = cpu.step().unwrap();
//! assert_eq!(outcome.opcode, 0xA9);
//! assert_eq!(cpu.a(), 0x42);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: the CPU is generic over the [`MemoryBus`] trait; the
//!   device-based [`Bus`] and the test-friendly [`FlatMemory`] both implement it
//! - **Table-driven decode**: a 256-entry [`OPCODE_TABLE`] maps each opcode byte
//!   to a mnemonic and an addressing mode; no bit-field pattern matching
//! - **Live flags**: status flags are stored as individual booleans and only
//!   packed into a byte at stack boundaries, which keeps the B-bit push
//!   protocol explicit
//! - **Faithful quirks**: JMP-indirect page wrap, zero-page index wrap,
//!   decimal-mode ADC/SBC with binary-intermediate flag semantics
//!
//! ## Modules
//!
//! - `cpu` - CPU state, interrupts, and the fetch-decode-execute loop
//! - `bus` - device attachments, mirrors, and the program loader
//! - `memory` - the `MemoryBus` trait and a flat 64KB implementation
//! - `devices` - the `Device` trait plus RAM, ROM, and a printer peripheral
//! - `addressing` - addressing modes and the operand resolver
//! - `opcodes` - the opcode metadata table

pub mod addressing;
pub mod bus;
pub mod cpu;
pub mod devices;
pub mod memory;
pub mod opcodes;

// Internal instruction implementations (not part of the public API)
mod instructions;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use bus::{Bus, BusError, DeviceId, RomWritePolicy};
pub use cpu::{Cpu, RunState, StepOutcome, UnstablePolicy};
pub use cpu::{IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use devices::{Device, Printer, Ram, Rom};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Mnemonic, OpcodeEntry, OPCODE_TABLE};

/// Errors surfaced by a single execution step.
///
/// A step fails before any further CPU state is committed; writes already
/// performed by the failing instruction stay visible (they are committed in
/// instruction order), so a partial failure is observable but never
/// corrupting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    /// A bus access inside the instruction faulted.
    #[error(transparent)]
    Bus(#[from] BusError),

    /// The opcode has unstable hardware behavior and is not emulated.
    ///
    /// Covers ANE, LXA, SHA, SHX, SHY, TAS and the JAM opcodes. The policy can
    /// be relaxed to treat these as NOPs, see [`UnstablePolicy`].
    #[error("opcode 0x{0:02X} has unstable hardware behavior and is not emulated")]
    UnstableOpcode(u8),

    /// `step()` was called while the CPU is halted.
    #[error("step() called while the CPU is halted")]
    Halted,
}
