//! # Control Flow Instructions
//!
//! JMP, JSR, RTS, RTI and BRK.
//!
//! JSR pushes the address of its *last operand byte*, not of the next
//! instruction; RTS compensates by adding one to the pulled address. RTI
//! pulls a full PC and performs no such fixup. BRK behaves as a software
//! IRQ: it pushes the address two bytes past the BRK opcode, pushes the
//! status with the B bit set, sets I and vectors through `$FFFE/F`.

use crate::cpu::IRQ_VECTOR;
use crate::memory::MemoryBus;
use crate::{Cpu, Operand, StepError};

/// JMP - set PC to the resolved target.
///
/// The indirect form's page-wrap quirk is handled during address
/// resolution, so absolute and indirect jumps look identical here.
pub(crate) fn jmp<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    if let Operand::Memory(target) = operand {
        cpu.pc = target;
    }
}

/// JSR - push the return address, then jump.
pub(crate) fn jsr<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> Result<(), StepError> {
    if let Operand::Memory(target) = operand {
        // PC sits after the operand; the 6502 pushes the address of the
        // operand's last byte and RTS adds the missing one.
        let return_addr = cpu.pc.wrapping_sub(1);
        cpu.push((return_addr >> 8) as u8)?;
        cpu.push(return_addr as u8)?;
        cpu.pc = target;
    }
    Ok(())
}

/// RTS - pull the return address and resume one byte past it.
pub(crate) fn rts<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), StepError> {
    let lo = cpu.pull()? as u16;
    let hi = cpu.pull()? as u16;
    cpu.pc = ((hi << 8) | lo).wrapping_add(1);
    Ok(())
}

/// RTI - pull status (B and bit 5 discarded), then pull the full PC.
pub(crate) fn rti<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), StepError> {
    let status = cpu.pull()?;
    cpu.set_status(status);
    let lo = cpu.pull()? as u16;
    let hi = cpu.pull()? as u16;
    cpu.pc = (hi << 8) | lo;
    Ok(())
}

/// BRK - software interrupt.
pub(crate) fn brk<M: MemoryBus>(cpu: &mut Cpu<M>) -> Result<(), StepError> {
    // PC is one past the BRK opcode; hardware pushes one byte further,
    // skipping the padding byte that follows BRK.
    let return_addr = cpu.pc.wrapping_add(1);
    cpu.push((return_addr >> 8) as u8)?;
    cpu.push(return_addr as u8)?;
    let status = cpu.status_for_break_push();
    cpu.push(status)?;
    cpu.flag_i = true;
    cpu.pc = cpu.bus.read_u16(IRQ_VECTOR)?;
    Ok(())
}
