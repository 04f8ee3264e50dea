//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary CPU state over flat memory and executes a handful of
//! instructions. Steps may fail (unstable opcodes), but nothing may panic,
//! and the CPU must stay internally consistent.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mos6502::{Cpu, FlatMemory, MemoryBus, UnstablePolicy};

/// Arbitrary CPU initial state for fuzzing.
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
    nop_unstable: bool,
}

/// Memory regions the fuzzer controls.
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Instruction stream at the entry point.
    program: [u8; 16],
    /// Page zero, which most addressing modes route through.
    zero_page: [u8; 256],
    /// Stack page contents.
    stack_page: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut mem = FlatMemory::new();

    mem.write(0xFFFC, 0x00).unwrap();
    mem.write(0xFFFD, 0x80).unwrap();
    mem.write(0xFFFE, 0x00).unwrap();
    mem.write(0xFFFF, 0x90).unwrap();
    mem.write(0xFFFA, 0x00).unwrap();
    mem.write(0xFFFB, 0xA0).unwrap();

    mem.load_bytes(0x8000, &input.memory.program);
    mem.load_bytes(0x0000, &input.memory.zero_page);
    mem.load_bytes(0x0100, &input.memory.stack_page);

    let mut cpu = Cpu::new(mem);
    cpu.reset().unwrap();

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);
    if input.cpu_state.nop_unstable {
        cpu.set_unstable_policy(UnstablePolicy::Nop);
    }

    // Errors are expected for unstable opcodes; panics are the bug.
    for _ in 0..8 {
        if cpu.step().is_err() {
            break;
        }
    }

    // The packed status byte always reads bit 5 as 1 and bit 4 as 0.
    assert_eq!(cpu.status() & 0b0011_0000, 0b0010_0000);
});
