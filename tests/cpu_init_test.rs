//! Tests for CPU construction, reset, and the run-state machine.

use mos6502::{Bus, Cpu, FlatMemory, MemoryBus, Ram, Rom, RunState, StepError};

/// A bus with RAM below and a vector ROM on top, the smallest bootable
/// system layout.
fn bootable_bus(entry: u16) -> Bus {
    let mut bus = Bus::new();
    bus.attach(0x0000, Box::new(Ram::new(0x2000))).unwrap();

    let mut vectors = vec![0x00; 0x100];
    vectors[0xFC] = entry as u8;
    vectors[0xFD] = (entry >> 8) as u8;
    bus.attach(0xFF00, Box::new(Rom::new(vectors))).unwrap();
    bus
}

#[test]
fn test_reset_loads_pc_from_vector() {
    let mut cpu = Cpu::new(bootable_bus(0x1000));
    cpu.reset().unwrap();

    assert_eq!(cpu.pc(), 0x1000);
    assert_eq!(cpu.sp(), 0xFD);
    assert!(cpu.flag_i());
    assert!(!cpu.flag_d());
    assert_eq!(cpu.state(), RunState::Running);
}

#[test]
fn test_reset_with_unmapped_vector_faults() {
    let mut bus = Bus::new();
    bus.attach(0x0000, Box::new(Ram::new(0x2000))).unwrap();

    let mut cpu = Cpu::new(bus);
    assert!(cpu.reset().is_err());
}

#[test]
fn test_explicit_entry_point_without_reset() {
    let mut mem = FlatMemory::new();
    mem.load_bytes(0x4000, &[0xE8]); // INX

    let mut cpu = Cpu::new(mem);
    cpu.set_pc(0x4000);
    cpu.step().unwrap();

    assert_eq!(cpu.x(), 1);
    assert_eq!(cpu.pc(), 0x4001);
}

#[test]
fn test_reset_clears_decimal_and_pending_interrupts() {
    let mut cpu = Cpu::new(bootable_bus(0x1000));
    cpu.reset().unwrap();

    cpu.set_flag_d(true);
    cpu.nmi();
    cpu.reset().unwrap();

    assert!(!cpu.flag_d());

    // The armed NMI must not fire after reset: the next step should execute
    // the instruction at the entry point (a BRK-free NOP here).
    cpu.bus_mut().write(0x1000, 0xEA).unwrap();
    let outcome = cpu.step().unwrap();
    assert_eq!(outcome.pc_before, 0x1000);
}

#[test]
fn test_halt_resume_cycle() {
    let mut cpu = Cpu::new(bootable_bus(0x1000));
    cpu.reset().unwrap();
    cpu.bus_mut().write(0x1000, 0xEA).unwrap();

    cpu.halt();
    assert_eq!(cpu.state(), RunState::Halted);
    assert_eq!(cpu.step(), Err(StepError::Halted));

    cpu.resume();
    assert!(cpu.step().is_ok());
}

#[test]
fn test_step_outcome_reports_pc_range() {
    let mut cpu = Cpu::new(bootable_bus(0x1000));
    cpu.reset().unwrap();
    cpu.bus_mut().load(0x1000, &[0xA9, 0x42]).unwrap(); // LDA #$42

    let outcome = cpu.step().unwrap();
    assert_eq!(outcome.opcode, 0xA9);
    assert_eq!(outcome.pc_before, 0x1000);
    assert_eq!(outcome.pc_after, 0x1002);
}
