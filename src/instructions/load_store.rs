//! # Load and Store Instructions
//!
//! LDA, LDX, LDY set N and Z from the loaded value. STA, STX, STY write a
//! register to memory and leave every flag alone.

use crate::addressing::Operand;
use crate::memory::MemoryBus;
use crate::{Cpu, StepError};

/// LDA - load the accumulator.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> Result<(), StepError> {
    let value = cpu.read_operand(operand)?;
    cpu.a = value;
    cpu.set_nz(value);
    Ok(())
}

/// LDX - load the X register.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> Result<(), StepError> {
    let value = cpu.read_operand(operand)?;
    cpu.x = value;
    cpu.set_nz(value);
    Ok(())
}

/// LDY - load the Y register.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> Result<(), StepError> {
    let value = cpu.read_operand(operand)?;
    cpu.y = value;
    cpu.set_nz(value);
    Ok(())
}

/// STA - store the accumulator.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> Result<(), StepError> {
    cpu.write_operand(operand, cpu.a)
}

/// STX - store the X register.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> Result<(), StepError> {
    cpu.write_operand(operand, cpu.x)
}

/// STY - store the Y register.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> Result<(), StepError> {
    cpu.write_operand(operand, cpu.y)
}
