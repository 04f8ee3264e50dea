//! # Stack Instructions
//!
//! PHA, PLA, PHP, PLP. The stack lives in the fixed page 0x0100-0x01FF and
//! grows downward; a push writes at `0x0100 | SP` then decrements SP, a pull
//! increments SP first.
//!
//! PHP pushes the status byte with bit 5 and the B bit forced to 1; PLP
//! discards those two bits on the way back in. The break bit never lives in
//! CPU state.

use crate::memory::MemoryBus;
use crate::{Cpu, StepError};

/// PHA - push the accumulator.
pub(crate) fn pha<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), StepError> {
    cpu.push(cpu.a)
}

/// PLA - pull into the accumulator, setting N and Z.
pub(crate) fn pla<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), StepError> {
    let value = cpu.pull()?;
    cpu.a = value;
    cpu.set_nz(value);
    Ok(())
}

/// PHP - push the status byte with B and bit 5 set.
pub(crate) fn php<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), StepError> {
    let status = cpu.status_for_break_push();
    cpu.push(status)
}

/// PLP - pull the status byte, ignoring B and bit 5.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), StepError> {
    let byte = cpu.pull()?;
    cpu.set_status(byte);
    Ok(())
}
