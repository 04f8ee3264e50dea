//! # Status Flag Instructions
//!
//! CLC, SEC, CLI, SEI, CLD, SED, CLV set or clear one named flag directly.
//! There is no SEV on the 6502; overflow is only set by arithmetic (or the
//! SO pin, which is out of scope).

use crate::memory::MemoryBus;
use crate::Cpu;

/// CLC - clear carry.
pub(crate) fn clc<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.flag_c = false;
}

/// SEC - set carry.
pub(crate) fn sec<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.flag_c = true;
}

/// CLI - clear interrupt disable.
pub(crate) fn cli<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.flag_i = false;
}

/// SEI - set interrupt disable.
pub(crate) fn sei<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.flag_i = true;
}

/// CLD - clear decimal mode.
pub(crate) fn cld<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.flag_d = false;
}

/// SED - set decimal mode.
pub(crate) fn sed<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.flag_d = true;
}

/// CLV - clear overflow.
pub(crate) fn clv<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.flag_v = false;
}
