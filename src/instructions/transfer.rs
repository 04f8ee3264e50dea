//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA, TSX set N and Z from the destination. TXS is the odd
//! one out: it writes the stack pointer and touches no flags.

use crate::memory::MemoryBus;
use crate::Cpu;

/// TAX - transfer A to X.
pub(crate) fn tax<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.a;
    cpu.set_nz(cpu.x);
}

/// TAY - transfer A to Y.
pub(crate) fn tay<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.y = cpu.a;
    cpu.set_nz(cpu.y);
}

/// TXA - transfer X to A.
pub(crate) fn txa<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.a = cpu.x;
    cpu.set_nz(cpu.a);
}

/// TYA - transfer Y to A.
pub(crate) fn tya<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.a = cpu.y;
    cpu.set_nz(cpu.a);
}

/// TSX - transfer SP to X.
pub(crate) fn tsx<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.sp;
    cpu.set_nz(cpu.x);
}

/// TXS - transfer X to SP. Flags unchanged.
pub(crate) fn txs<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.sp = cpu.x;
}
