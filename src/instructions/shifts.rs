//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL, ROR. Each operates on the accumulator or on memory
//! (read-modify-write) depending on the resolved operand. The shifted-out
//! bit lands in C; rotates shift the old carry in at the other end.

use crate::addressing::Operand;
use crate::memory::MemoryBus;
use crate::{Cpu, StepError};

/// ASL - arithmetic shift left. C takes bit 7.
pub(crate) fn asl<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> Result<(), StepError> {
    let value = cpu.read_operand(operand)?;
    let result = asl_value(cpu, value);
    cpu.write_operand(operand, result)?;
    cpu.set_nz(result);
    Ok(())
}

/// LSR - logical shift right. C takes bit 0; N is always cleared.
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> Result<(), StepError> {
    let value = cpu.read_operand(operand)?;
    let result = lsr_value(cpu, value);
    cpu.write_operand(operand, result)?;
    cpu.set_nz(result);
    Ok(())
}

/// ROL - rotate left through carry.
pub(crate) fn rol<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> Result<(), StepError> {
    let value = cpu.read_operand(operand)?;
    let result = rol_value(cpu, value);
    cpu.write_operand(operand, result)?;
    cpu.set_nz(result);
    Ok(())
}

/// ROR - rotate right through carry.
pub(crate) fn ror<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> Result<(), StepError> {
    let value = cpu.read_operand(operand)?;
    let result = ror_value(cpu, value);
    cpu.write_operand(operand, result)?;
    cpu.set_nz(result);
    Ok(())
}

// The bare shift cores set only C; callers (including the SLO/RLA/SRE/RRA
// compositions, whose N/Z come from the subsequent logic op) decide which
// result drives N and Z.

pub(crate) fn asl_value<M: MemoryBus>(cpu: &mut Cpu<M>, value: u8) -> u8 {
    cpu.flag_c = value & 0x80 != 0;
    value << 1
}

pub(crate) fn lsr_value<M: MemoryBus>(cpu: &mut Cpu<M>, value: u8) -> u8 {
    cpu.flag_c = value & 0x01 != 0;
    value >> 1
}

pub(crate) fn rol_value<M: MemoryBus>(cpu: &mut Cpu<M>, value: u8) -> u8 {
    let carry_in = cpu.flag_c as u8;
    cpu.flag_c = value & 0x80 != 0;
    (value << 1) | carry_in
}

pub(crate) fn ror_value<M: MemoryBus>(cpu: &mut Cpu<M>, value: u8) -> u8 {
    let carry_in = cpu.flag_c as u8;
    cpu.flag_c = value & 0x01 != 0;
    (carry_in << 7) | (value >> 1)
}
