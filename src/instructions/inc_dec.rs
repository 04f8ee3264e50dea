//! # Increment and Decrement Instructions
//!
//! INC and DEC are read-modify-write on memory; INX, INY, DEX, DEY work on
//! the index registers. All wrap modulo 256 and set N/Z from the result.

use crate::addressing::Operand;
use crate::memory::MemoryBus;
use crate::{Cpu, StepError};

/// INC - increment a memory location.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> Result<(), StepError> {
    let value = cpu.read_operand(operand)?.wrapping_add(1);
    cpu.write_operand(operand, value)?;
    cpu.set_nz(value);
    Ok(())
}

/// DEC - decrement a memory location.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> Result<(), StepError> {
    let value = cpu.read_operand(operand)?.wrapping_sub(1);
    cpu.write_operand(operand, value)?;
    cpu.set_nz(value);
    Ok(())
}

/// INX - increment X.
pub(crate) fn inx<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_nz(cpu.x);
}

/// INY - increment Y.
pub(crate) fn iny<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_nz(cpu.y);
}

/// DEX - decrement X.
pub(crate) fn dex<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_nz(cpu.x);
}

/// DEY - decrement Y.
pub(crate) fn dey<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_nz(cpu.y);
}
