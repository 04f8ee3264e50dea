//! Tests for ASL, LSR, ROL and ROR on the accumulator and on memory.

use mos6502::{Cpu, FlatMemory, MemoryBus};

fn setup_cpu() -> Cpu<FlatMemory> {
    let mut mem = FlatMemory::new();
    mem.write(0xFFFC, 0x00).unwrap();
    mem.write(0xFFFD, 0x80).unwrap();
    let mut cpu = Cpu::new(mem);
    cpu.reset().unwrap();
    cpu
}

#[test]
fn test_asl_accumulator() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load_bytes(0x8000, &[0x0A]);
    cpu.set_a(0x81);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag_c()); // bit 7 shifted out
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_asl_memory() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load_bytes(0x8000, &[0x06, 0x10]);
    cpu.bus_mut().write(0x0010, 0x40).unwrap();

    cpu.step().unwrap();

    assert_eq!(cpu.bus().read(0x0010).unwrap(), 0x80);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_lsr_clears_negative() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load_bytes(0x8000, &[0x4A]);
    cpu.set_a(0x01);
    cpu.set_flag_n(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c()); // bit 0 shifted out
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n()); // LSR can never produce bit 7
}

#[test]
fn test_rol_through_carry() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load_bytes(0x8000, &[0x2A]);
    cpu.set_a(0x80);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x01); // old carry in at bit 0
    assert!(cpu.flag_c()); // old bit 7 out
}

#[test]
fn test_ror_through_carry() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load_bytes(0x8000, &[0x6A]);
    cpu.set_a(0x01);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x80); // old carry in at bit 7
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_ror_memory_absolute_x() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load_bytes(0x8000, &[0x7E, 0x00, 0x20]);
    cpu.set_x(0x05);
    cpu.bus_mut().write(0x2005, 0x02).unwrap();
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.bus().read(0x2005).unwrap(), 0x01);
    assert!(!cpu.flag_c());
}

#[test]
fn test_rol_rotate_chain_restores_value() {
    // Nine ROLs through the carry bring a 8-bit value plus carry full
    // circle.
    let mut cpu = setup_cpu();
    cpu.bus_mut().load_bytes(0x8000, &[0x2A; 9]);
    cpu.set_a(0xB7);
    cpu.set_flag_c(false);

    for _ in 0..9 {
        cpu.step().unwrap();
    }

    assert_eq!(cpu.a(), 0xB7);
    assert!(!cpu.flag_c());
}
