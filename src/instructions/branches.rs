//! # Branch Instructions
//!
//! The eight conditional branches. The addressing layer has already turned
//! the signed relative offset into an absolute target, so a taken branch is
//! just a PC assignment; a branch not taken is a no-op beyond the operand
//! byte the resolver consumed.

use crate::addressing::Operand;
use crate::memory::MemoryBus;
use crate::Cpu;

fn branch_if<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand, taken: bool) {
    if let Operand::Memory(target) = operand {
        if taken {
            cpu.pc = target;
        }
    }
}

/// BCC - branch if carry clear.
pub(crate) fn bcc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let taken = !cpu.flag_c;
    branch_if(cpu, operand, taken);
}

/// BCS - branch if carry set.
pub(crate) fn bcs<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let taken = cpu.flag_c;
    branch_if(cpu, operand, taken);
}

/// BEQ - branch if zero set.
pub(crate) fn beq<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let taken = cpu.flag_z;
    branch_if(cpu, operand, taken);
}

/// BNE - branch if zero clear.
pub(crate) fn bne<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let taken = !cpu.flag_z;
    branch_if(cpu, operand, taken);
}

/// BMI - branch if negative set.
pub(crate) fn bmi<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let taken = cpu.flag_n;
    branch_if(cpu, operand, taken);
}

/// BPL - branch if negative clear.
pub(crate) fn bpl<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let taken = !cpu.flag_n;
    branch_if(cpu, operand, taken);
}

/// BVS - branch if overflow set.
pub(crate) fn bvs<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let taken = cpu.flag_v;
    branch_if(cpu, operand, taken);
}

/// BVC - branch if overflow clear.
pub(crate) fn bvc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let taken = !cpu.flag_v;
    branch_if(cpu, operand, taken);
}
