//! Tests for PHA/PLA/PHP/PLP and the B-bit push protocol, including the
//! "pushed status" scenario: after LDA #$CF; PHA; PLP; PHP the byte on the
//! stack reads $FF because PHP forces bits 4 and 5 on the way out.

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
fn test_pha_pla_round_trip() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load_bytes(0x8000, &[0x48, 0xA9, 0x00, 0x68]);
    cpu.set_a(0x42);

    cpu.step().unwrap(); // PHA
    assert_eq!(cpu.sp(), 0xFC);
    assert_eq!(cpu.bus().read(0x01FD).unwrap(), 0x42);

    cpu.step().unwrap(); // LDA #$00 clobbers A
    cpu.step().unwrap(); // PLA restores it

    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_pla_sets_nz() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load_bytes(0x8000, &[0x68]);
    cpu.bus_mut().write(0x01FE, 0x80).unwrap();
    cpu.set_sp(0xFD);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_php_forces_break_and_bit5() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load_bytes(0x8000, &[0x08]);
    // All live flags clear except I (set on reset).
    cpu.set_flag_i(false);

    cpu.step().unwrap();

    let pushed = cpu.bus().read(0x01FD).unwrap();
    assert_eq!(pushed, 0b0011_0000); // only bits 4 and 5
}

#[test]
fn test_plp_ignores_break_and_bit5() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load_bytes(0x8000, &[0x28]);
    cpu.bus_mut().write(0x01FE, 0b0011_0000).unwrap();
    cpu.set_sp(0xFD);

    cpu.step().unwrap();

    // Bits 4 and 5 were discarded; every live flag is clear.
    assert_eq!(cpu.status(), 0b0010_0000);
}

#[test]
fn test_pushed_status_scenario() {
    // LDA #$CF; PHA; PLP; PHP
    let mut cpu = setup_cpu();
    cpu.bus_mut().load_bytes(0x8000, &[0xA9, 0xCF, 0x48, 0x28, 0x08]);

    cpu.step().unwrap(); // LDA #$CF
    cpu.step().unwrap(); // PHA: $CF lands at $01FD
    cpu.step().unwrap(); // PLP: flags loaded from $CF, bits 4/5 discarded
    cpu.step().unwrap(); // PHP: pushed byte forces bits 4/5 back on

    assert_eq!(cpu.bus().read(0x01FD).unwrap(), 0xFF);

    // The live flags reflect $CF without a break bit; the packed form
    // still reads bit 5 as 1.
    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert!(cpu.flag_d());
    assert!(cpu.flag_i());
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert_eq!(cpu.status(), 0xEF);
}

#[test]
fn test_php_plp_round_trip_preserves_flags() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load_bytes(0x8000, &[0x08, 0x28]);
    cpu.set_flag_n(true);
    cpu.set_flag_z(true);
    cpu.set_flag_c(true);
    cpu.set_flag_d(true);
    let before = cpu.status();

    cpu.step().unwrap(); // PHP
    cpu.step().unwrap(); // PLP

    assert_eq!(cpu.status(), before);
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_stack_wraps_within_stack_page() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load_bytes(0x8000, &[0x48, 0x48]);
    cpu.set_sp(0x00);
    cpu.set_a(0x99);

    cpu.step().unwrap();
    assert_eq!(cpu.bus().read(0x0100).unwrap(), 0x99);
    assert_eq!(cpu.sp(), 0xFF);

    cpu.step().unwrap();
    assert_eq!(cpu.bus().read(0x01FF).unwrap(), 0x99);
    assert_eq!(cpu.sp(), 0xFE);
}

#[test]
fn test_flag_instructions() {
    let mut cpu = setup_cpu();
    // SEC CLC SED CLD SEI CLI CLV
    cpu.bus_mut()
        .load_bytes(0x8000, &[0x38, 0x18, 0xF8, 0xD8, 0x78, 0x58, 0xB8]);
    cpu.set_flag_v(true);

    cpu.step().unwrap();
    assert!(cpu.flag_c());
    cpu.step().unwrap();
    assert!(!cpu.flag_c());
    cpu.step().unwrap();
    assert!(cpu.flag_d());
    cpu.step().unwrap();
    assert!(!cpu.flag_d());
    cpu.step().unwrap();
    assert!(cpu.flag_i());
    cpu.step().unwrap();
    assert!(!cpu.flag_i());
    cpu.step().unwrap();
    assert!(!cpu.flag_v());
}
