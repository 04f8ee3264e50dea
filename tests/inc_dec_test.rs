//! Tests for INC, DEC and the register increment/decrement instructions.

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
fn test_inc_memory() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load_bytes(0x8000, &[0xE6, 0x10]);
    cpu.bus_mut().write(0x0010, 0x7F).unwrap();

    cpu.step().unwrap();

    assert_eq!(cpu.bus().read(0x0010).unwrap(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_inc_wraps_to_zero() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load_bytes(0x8000, &[0xEE, 0x00, 0x20]);
    cpu.bus_mut().write(0x2000, 0xFF).unwrap();

    cpu.step().unwrap();

    assert_eq!(cpu.bus().read(0x2000).unwrap(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_dec_memory() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load_bytes(0x8000, &[0xC6, 0x10]);
    cpu.bus_mut().write(0x0010, 0x01).unwrap();

    cpu.step().unwrap();

    assert_eq!(cpu.bus().read(0x0010).unwrap(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_dec_wraps_below_zero() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load_bytes(0x8000, &[0xD6, 0x10]);
    cpu.set_x(0x02);
    cpu.bus_mut().write(0x0012, 0x00).unwrap();

    cpu.step().unwrap();

    assert_eq!(cpu.bus().read(0x0012).unwrap(), 0xFF);
    assert!(cpu.flag_n());
}

#[test]
fn test_inx_iny_wrap() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load_bytes(0x8000, &[0xE8, 0xC8]);
    cpu.set_x(0xFF);
    cpu.set_y(0x7F);

    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());

    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flag_n());
}

#[test]
fn test_dex_dey() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load_bytes(0x8000, &[0xCA, 0x88]);
    cpu.set_x(0x01);
    cpu.set_y(0x00);

    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());

    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0xFF);
    assert!(cpu.flag_n());
}
