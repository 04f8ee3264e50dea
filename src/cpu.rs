//! # CPU State and Execution
//!
//! The [`Cpu`] struct holds the 6502 register file and status flags and
//! drives the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! - **Registers**: accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next instruction
//! - **Stack pointer** (SP): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, D, I, Z, C stored as individual bools
//!
//! There is deliberately no stored B flag. On the 6502 the break bit exists
//! only in status bytes pushed to the stack: set for PHP and BRK, clear for
//! IRQ and NMI, and discarded again on PLP/RTI. Keeping it out of the live
//! state makes that protocol impossible to get wrong here.
//!
//! ## Execution Model
//!
//! [`Cpu::step`] executes exactly one instruction to completion and returns
//! a [`StepOutcome`]. [`Cpu::run`] and [`Cpu::run_until`] are thin loops over
//! `step`. Interrupt lines are sampled once at the top of each step, NMI
//! before IRQ, never mid-instruction.

use log::{debug, trace};

use crate::addressing::{self, Operand};
use crate::bus::BusError;
use crate::instructions;
use crate::memory::MemoryBus;
use crate::opcodes::{Mnemonic, OPCODE_TABLE};
use crate::StepError;

/// Reset vector address (`$FFFC/$FFFD`, little-endian).
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ/BRK vector address (`$FFFE/$FFFF`).
pub const IRQ_VECTOR: u16 = 0xFFFE;
/// NMI vector address (`$FFFA/$FFFB`).
pub const NMI_VECTOR: u16 = 0xFFFA;

const STACK_PAGE: u16 = 0x0100;

/// Whether the CPU is executing or stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// `step()` executes instructions.
    Running,
    /// `step()` fails with [`StepError::Halted`] until [`Cpu::resume`].
    Halted,
}

/// How [`Cpu::step`] treats the unstable undocumented opcodes
/// (ANE, LXA, SHA, SHX, SHY, TAS, JAM).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnstablePolicy {
    /// Fail the step with [`StepError::UnstableOpcode`]. The default.
    #[default]
    Fault,
    /// Treat the opcode as a NOP of the same length.
    Nop,
}

/// Result of one successfully executed instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// The opcode byte that was executed.
    pub opcode: u8,
    /// PC before the instruction (the address of the opcode).
    pub pc_before: u16,
    /// PC after the instruction completed.
    pub pc_after: u16,
}

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the [`MemoryBus`] trait, so the
/// same core runs against the device-based [`Bus`](crate::Bus) or the flat
/// test memory.
///
/// # Examples
///
/// ```
/// use mos6502::{Cpu, FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0xFFFC, 0x00).unwrap();
/// mem.write(0xFFFD, 0x80).unwrap();
///
/// let mut cpu = Cpu::new(mem);
/// cpu.reset().unwrap();
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert!(cpu.flag_i());
/// ```
pub struct Cpu<M: MemoryBus> {
    /// Accumulator.
    pub(crate) a: u8,
    /// X index register.
    pub(crate) x: u8,
    /// Y index register.
    pub(crate) y: u8,
    /// Program counter.
    pub(crate) pc: u16,
    /// Stack pointer; the full stack address is `0x0100 | sp`.
    pub(crate) sp: u8,

    /// Negative flag.
    pub(crate) flag_n: bool,
    /// Overflow flag.
    pub(crate) flag_v: bool,
    /// Decimal mode flag.
    pub(crate) flag_d: bool,
    /// Interrupt disable flag.
    pub(crate) flag_i: bool,
    /// Zero flag.
    pub(crate) flag_z: bool,
    /// Carry flag.
    pub(crate) flag_c: bool,

    state: RunState,
    /// Edge-triggered NMI latch; armed by [`Cpu::nmi`], consumed by one step.
    nmi_pending: bool,
    /// Level-sensitive IRQ line; held by [`Cpu::irq`], dropped by
    /// [`Cpu::clear_irq`].
    irq_line: bool,
    unstable_policy: UnstablePolicy,

    /// Memory bus implementation.
    pub(crate) bus: M,
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates a CPU owning `bus`.
    ///
    /// Registers are zeroed, SP is `0xFD` and the interrupt disable flag is
    /// set, but PC is left at `0x0000`: call [`reset`](Cpu::reset) to load it
    /// from the reset vector, or [`set_pc`](Cpu::set_pc) to start at an
    /// explicit entry point.
    pub fn new(bus: M) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0xFD,
            flag_n: false,
            flag_v: false,
            flag_d: false,
            flag_i: true,
            flag_z: false,
            flag_c: false,
            state: RunState::Running,
            nmi_pending: false,
            irq_line: false,
            unstable_policy: UnstablePolicy::default(),
            bus,
        }
    }

    /// Resets the CPU.
    ///
    /// Loads PC from the reset vector at `$FFFC/$FFFD`, sets SP to `0xFD`,
    /// sets the interrupt disable flag and clears decimal mode. Memory is
    /// not touched and A/X/Y keep their values, as on real hardware.
    pub fn reset(&mut self) -> Result<(), BusError> {
        self.sp = 0xFD;
        self.flag_i = true;
        self.flag_d = false;
        self.nmi_pending = false;
        self.irq_line = false;
        self.state = RunState::Running;
        self.pc = self.bus.read_u16(RESET_VECTOR)?;
        debug!("reset: pc=0x{:04X}", self.pc);
        Ok(())
    }

    /// Executes one instruction and returns what happened.
    ///
    /// Order of business:
    ///
    /// 1. Fail with [`StepError::Halted`] if the CPU is halted
    /// 2. Sample the interrupt lines (NMI first, then IRQ unless masked) and
    ///    service at most one
    /// 3. Fetch the opcode at PC and decode it through the opcode table
    /// 4. Resolve the addressing mode, consuming operand bytes
    /// 5. Execute the instruction semantics
    ///
    /// Bus faults abort the step; whatever writes the instruction had already
    /// performed remain visible.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::{Cpu, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load_bytes(0x8000, &[0xE8]); // INX
    /// mem.write(0xFFFC, 0x00).unwrap();
    /// mem.write(0xFFFD, 0x80).unwrap();
    ///
    /// let mut cpu = Cpu::new(mem);
    /// cpu.reset().unwrap();
    ///
    /// let outcome = cpu.step().unwrap();
    /// assert_eq!(outcome.pc_before, 0x8000);
    /// assert_eq!(outcome.pc_after, 0x8001);
    /// assert_eq!(cpu.x(), 1);
    /// ```
    pub fn step(&mut self) -> Result<StepOutcome, StepError> {
        if self.state == RunState::Halted {
            return Err(StepError::Halted);
        }

        // Interrupts are sampled between instructions only. The NMI latch is
        // one-shot; the IRQ line stays asserted until the caller drops it.
        if self.nmi_pending {
            self.nmi_pending = false;
            debug!("interrupt: NMI");
            self.service_interrupt(NMI_VECTOR)?;
        } else if self.irq_line && !self.flag_i {
            debug!("interrupt: IRQ");
            self.service_interrupt(IRQ_VECTOR)?;
        }

        let pc_before = self.pc;
        let opcode = self.fetch_byte()?;
        let entry = &OPCODE_TABLE[opcode as usize];

        if entry.mnemonic.is_unstable() {
            // Consume the operand bytes anyway so PC stays instruction
            // aligned whether the host faults or continues.
            self.pc = self.pc.wrapping_add(entry.mode.operand_len());
            return match self.unstable_policy {
                UnstablePolicy::Fault => Err(StepError::UnstableOpcode(opcode)),
                UnstablePolicy::Nop => Ok(StepOutcome {
                    opcode,
                    pc_before,
                    pc_after: self.pc,
                }),
            };
        }

        let operand = addressing::resolve(self, entry.mode)?;
        trace!(
            "step: pc=0x{:04X} opcode=0x{:02X} {:?} {:?}",
            pc_before,
            opcode,
            entry.mnemonic,
            operand
        );

        match entry.mnemonic {
            Mnemonic::Adc => instructions::alu::adc(self, operand)?,
            Mnemonic::And => instructions::alu::and(self, operand)?,
            Mnemonic::Asl => instructions::shifts::asl(self, operand)?,
            Mnemonic::Bcc => instructions::branches::bcc(self, operand),
            Mnemonic::Bcs => instructions::branches::bcs(self, operand),
            Mnemonic::Beq => instructions::branches::beq(self, operand),
            Mnemonic::Bit => instructions::alu::bit(self, operand)?,
            Mnemonic::Bmi => instructions::branches::bmi(self, operand),
            Mnemonic::Bne => instructions::branches::bne(self, operand),
            Mnemonic::Bpl => instructions::branches::bpl(self, operand),
            Mnemonic::Brk => instructions::control::brk(self)?,
            Mnemonic::Bvc => instructions::branches::bvc(self, operand),
            Mnemonic::Bvs => instructions::branches::bvs(self, operand),
            Mnemonic::Clc => instructions::flags::clc(self),
            Mnemonic::Cld => instructions::flags::cld(self),
            Mnemonic::Cli => instructions::flags::cli(self),
            Mnemonic::Clv => instructions::flags::clv(self),
            Mnemonic::Cmp => instructions::alu::cmp(self, operand)?,
            Mnemonic::Cpx => instructions::alu::cpx(self, operand)?,
            Mnemonic::Cpy => instructions::alu::cpy(self, operand)?,
            Mnemonic::Dec => instructions::inc_dec::dec(self, operand)?,
            Mnemonic::Dex => instructions::inc_dec::dex(self),
            Mnemonic::Dey => instructions::inc_dec::dey(self),
            Mnemonic::Eor => instructions::alu::eor(self, operand)?,
            Mnemonic::Inc => instructions::inc_dec::inc(self, operand)?,
            Mnemonic::Inx => instructions::inc_dec::inx(self),
            Mnemonic::Iny => instructions::inc_dec::iny(self),
            Mnemonic::Jmp => instructions::control::jmp(self, operand),
            Mnemonic::Jsr => instructions::control::jsr(self, operand)?,
            Mnemonic::Lda => instructions::load_store::lda(self, operand)?,
            Mnemonic::Ldx => instructions::load_store::ldx(self, operand)?,
            Mnemonic::Ldy => instructions::load_store::ldy(self, operand)?,
            Mnemonic::Lsr => instructions::shifts::lsr(self, operand)?,
            Mnemonic::Nop => {}
            Mnemonic::Ora => instructions::alu::ora(self, operand)?,
            Mnemonic::Pha => instructions::stack::pha(self)?,
            Mnemonic::Php => instructions::stack::php(self)?,
            Mnemonic::Pla => instructions::stack::pla(self)?,
            Mnemonic::Plp => instructions::stack::plp(self)?,
            Mnemonic::Rol => instructions::shifts::rol(self, operand)?,
            Mnemonic::Ror => instructions::shifts::ror(self, operand)?,
            Mnemonic::Rti => instructions::control::rti(self)?,
            Mnemonic::Rts => instructions::control::rts(self)?,
            Mnemonic::Sbc => instructions::alu::sbc(self, operand)?,
            Mnemonic::Sec => instructions::flags::sec(self),
            Mnemonic::Sed => instructions::flags::sed(self),
            Mnemonic::Sei => instructions::flags::sei(self),
            Mnemonic::Sta => instructions::load_store::sta(self, operand)?,
            Mnemonic::Stx => instructions::load_store::stx(self, operand)?,
            Mnemonic::Sty => instructions::load_store::sty(self, operand)?,
            Mnemonic::Tax => instructions::transfer::tax(self),
            Mnemonic::Tay => instructions::transfer::tay(self),
            Mnemonic::Tsx => instructions::transfer::tsx(self),
            Mnemonic::Txa => instructions::transfer::txa(self),
            Mnemonic::Txs => instructions::transfer::txs(self),
            Mnemonic::Tya => instructions::transfer::tya(self),
            Mnemonic::Lax => instructions::illegal::lax(self, operand)?,
            Mnemonic::Sax => instructions::illegal::sax(self, operand)?,
            Mnemonic::Dcp => instructions::illegal::dcp(self, operand)?,
            Mnemonic::Isb => instructions::illegal::isb(self, operand)?,
            Mnemonic::Slo => instructions::illegal::slo(self, operand)?,
            Mnemonic::Rla => instructions::illegal::rla(self, operand)?,
            Mnemonic::Sre => instructions::illegal::sre(self, operand)?,
            Mnemonic::Rra => instructions::illegal::rra(self, operand)?,
            Mnemonic::Anc => instructions::illegal::anc(self, operand)?,
            Mnemonic::Arr => instructions::illegal::arr(self, operand)?,
            Mnemonic::Asr => instructions::illegal::asr(self, operand)?,
            Mnemonic::Sbx => instructions::illegal::sbx(self, operand)?,
            Mnemonic::Las => instructions::illegal::las(self, operand)?,
            Mnemonic::Ane
            | Mnemonic::Lxa
            | Mnemonic::Sha
            | Mnemonic::Shx
            | Mnemonic::Shy
            | Mnemonic::Tas
            | Mnemonic::Jam => {
                unreachable!("unstable opcodes are rejected before dispatch")
            }
        }

        Ok(StepOutcome {
            opcode,
            pc_before,
            pc_after: self.pc,
        })
    }

    /// Executes `count` instructions, stopping early on the first fault.
    pub fn run(&mut self, count: u64) -> Result<(), StepError> {
        for _ in 0..count {
            self.step()?;
        }
        Ok(())
    }

    /// Steps until `condition` holds for an outcome, or a fault surfaces.
    ///
    /// The condition sees the CPU state *after* the instruction together
    /// with its [`StepOutcome`], and the outcome that satisfied it is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::{Cpu, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// // INX; INX; INX; BRK
    /// mem.load_bytes(0x8000, &[0xE8, 0xE8, 0xE8, 0x00]);
    /// mem.write(0xFFFC, 0x00).unwrap();
    /// mem.write(0xFFFD, 0x80).unwrap();
    ///
    /// let mut cpu = Cpu::new(mem);
    /// cpu.reset().unwrap();
    ///
    /// // Run until the next instruction would be the BRK sentinel.
    /// cpu.run_until(|cpu, _| cpu.bus().read(cpu.pc()) == Ok(0x00))
    ///     .unwrap();
    /// assert_eq!(cpu.x(), 3);
    /// ```
    pub fn run_until<F>(&mut self, mut condition: F) -> Result<StepOutcome, StepError>
    where
        F: FnMut(&Self, &StepOutcome) -> bool,
    {
        loop {
            let outcome = self.step()?;
            if condition(self, &outcome) {
                return Ok(outcome);
            }
        }
    }

    /// Stops the CPU; subsequent `step()` calls fail with
    /// [`StepError::Halted`].
    pub fn halt(&mut self) {
        self.state = RunState::Halted;
    }

    /// Resumes a halted CPU.
    pub fn resume(&mut self) {
        self.state = RunState::Running;
    }

    /// Current run state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Raises the NMI line.
    ///
    /// Edge-triggered: each call arms one pending NMI, which the next
    /// `step()` services before executing an instruction.
    pub fn nmi(&mut self) {
        self.nmi_pending = true;
    }

    /// Asserts the IRQ line.
    ///
    /// Level-sensitive: the line stays asserted (sampled at every step,
    /// masked by the I flag) until [`clear_irq`](Cpu::clear_irq).
    pub fn irq(&mut self) {
        self.irq_line = true;
    }

    /// Deasserts the IRQ line.
    pub fn clear_irq(&mut self) {
        self.irq_line = false;
    }

    /// Selects how unstable opcodes are handled.
    pub fn set_unstable_policy(&mut self, policy: UnstablePolicy) {
        self.unstable_policy = policy;
    }

    // ========== Register and Flag Accessors ==========

    /// Accumulator value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Stack pointer value. The full stack address is `0x0100 | sp`.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// The status register packed as a byte, in the layout used for
    /// IRQ/NMI pushes: bit 5 reads as 1, the B bit (4) as 0.
    ///
    /// Bit layout (`NV-BDIZC`): N=7, V=6, unused=5, B=4, D=3, I=2, Z=1, C=0.
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b0010_0000;
        if self.flag_n {
            status |= 0b1000_0000;
        }
        if self.flag_v {
            status |= 0b0100_0000;
        }
        if self.flag_d {
            status |= 0b0000_1000;
        }
        if self.flag_i {
            status |= 0b0000_0100;
        }
        if self.flag_z {
            status |= 0b0000_0010;
        }
        if self.flag_c {
            status |= 0b0000_0001;
        }
        status
    }

    /// Loads the live flags from a packed status byte.
    ///
    /// This is the pull protocol: bits 4 (B) and 5 are discarded, matching
    /// PLP and RTI.
    pub fn set_status(&mut self, byte: u8) {
        self.flag_n = byte & 0b1000_0000 != 0;
        self.flag_v = byte & 0b0100_0000 != 0;
        self.flag_d = byte & 0b0000_1000 != 0;
        self.flag_i = byte & 0b0000_0100 != 0;
        self.flag_z = byte & 0b0000_0010 != 0;
        self.flag_c = byte & 0b0000_0001 != 0;
    }

    /// Negative flag.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Overflow flag.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Decimal mode flag.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Interrupt disable flag.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Zero flag.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Carry flag.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Register and Flag Setters ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter, e.g. to a configured entry point.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    /// Sets the zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    /// Sets the interrupt disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    /// Sets the decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    /// Sets the overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Sets the negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    /// Borrows the bus, for inspection.
    pub fn bus(&self) -> &M {
        &self.bus
    }

    /// Mutably borrows the bus, for attaching devices and writing memory.
    pub fn bus_mut(&mut self) -> &mut M {
        &mut self.bus
    }

    /// Consumes the CPU and returns the bus.
    pub fn into_bus(self) -> M {
        self.bus
    }

    // ========== Internal Helpers ==========

    /// Reads the byte at PC and advances PC.
    pub(crate) fn fetch_byte(&mut self) -> Result<u8, StepError> {
        let byte = self.bus.read(self.pc)?;
        self.pc = self.pc.wrapping_add(1);
        Ok(byte)
    }

    /// Reads a little-endian word at PC and advances PC by two.
    pub(crate) fn fetch_u16(&mut self) -> Result<u16, StepError> {
        let lo = self.fetch_byte()? as u16;
        let hi = self.fetch_byte()? as u16;
        Ok((hi << 8) | lo)
    }

    /// Pushes a byte: write to `0x0100 | sp`, then decrement SP.
    pub(crate) fn push(&mut self, value: u8) -> Result<(), StepError> {
        self.bus.write(STACK_PAGE | self.sp as u16, value)?;
        self.sp = self.sp.wrapping_sub(1);
        Ok(())
    }

    /// Pulls a byte: increment SP, then read from `0x0100 | sp`.
    pub(crate) fn pull(&mut self) -> Result<u8, StepError> {
        self.sp = self.sp.wrapping_add(1);
        Ok(self.bus.read(STACK_PAGE | self.sp as u16)?)
    }

    /// The status byte as pushed by PHP and BRK: bit 5 and the B bit set.
    pub(crate) fn status_for_break_push(&self) -> u8 {
        self.status() | 0b0001_0000
    }

    /// Reads the value an operand designates.
    pub(crate) fn read_operand(&self, operand: Operand) -> Result<u8, StepError> {
        match operand {
            Operand::Accumulator => Ok(self.a),
            Operand::Immediate(value) => Ok(value),
            Operand::Memory(addr) => Ok(self.bus.read(addr)?),
            Operand::Implied => unreachable!("implied operand carries no value"),
        }
    }

    /// Writes a value back through an operand (accumulator or memory).
    pub(crate) fn write_operand(&mut self, operand: Operand, value: u8) -> Result<(), StepError> {
        match operand {
            Operand::Accumulator => {
                self.a = value;
                Ok(())
            }
            Operand::Memory(addr) => {
                self.bus.write(addr, value)?;
                Ok(())
            }
            Operand::Implied | Operand::Immediate(_) => {
                unreachable!("operand is not a writable location")
            }
        }
    }

    /// Sets N and Z from a result byte.
    pub(crate) fn set_nz(&mut self, value: u8) {
        self.flag_n = value & 0x80 != 0;
        self.flag_z = value == 0;
    }

    /// Pushes PC and status (B clear), sets I, and jumps through `vector`.
    fn service_interrupt(&mut self, vector: u16) -> Result<(), StepError> {
        let pc = self.pc;
        self.push((pc >> 8) as u8)?;
        self.push(pc as u8)?;
        let status = self.status();
        self.push(status)?;
        self.flag_i = true;
        self.pc = self.bus.read_u16(vector)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn cpu_with_reset_vector(target: u16) -> Cpu<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFC, target as u8).unwrap();
        mem.write(0xFFFD, (target >> 8) as u8).unwrap();
        let mut cpu = Cpu::new(mem);
        cpu.reset().unwrap();
        cpu
    }

    #[test]
    fn test_reset_state() {
        let cpu = cpu_with_reset_vector(0x8000);

        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.state(), RunState::Running);

        assert!(cpu.flag_i());
        assert!(!cpu.flag_n());
        assert!(!cpu.flag_v());
        assert!(!cpu.flag_d());
        assert!(!cpu.flag_z());
        assert!(!cpu.flag_c());
    }

    #[test]
    fn test_reset_does_not_clear_registers() {
        let mut cpu = cpu_with_reset_vector(0x8000);
        cpu.set_a(0x11);
        cpu.set_x(0x22);
        cpu.bus_mut().write(0x0042, 0x99).unwrap();

        cpu.reset().unwrap();

        assert_eq!(cpu.a(), 0x11);
        assert_eq!(cpu.x(), 0x22);
        assert_eq!(cpu.bus().read(0x0042).unwrap(), 0x99);
    }

    #[test]
    fn test_status_packing() {
        let mut cpu = cpu_with_reset_vector(0x8000);

        // Bit 5 is always 1, B (bit 4) never appears in the live byte.
        assert_eq!(cpu.status(), 0b0010_0100);

        cpu.set_flag_n(true);
        cpu.set_flag_c(true);
        assert_eq!(cpu.status(), 0b1010_0101);

        // Pull protocol discards bits 4 and 5.
        cpu.set_status(0xFF);
        assert_eq!(cpu.status(), 0b1110_1111);
        cpu.set_status(0x30);
        assert_eq!(cpu.status(), 0b0010_0000);
    }

    #[test]
    fn test_push_pull_round_trip() {
        let mut cpu = cpu_with_reset_vector(0x8000);

        let sp = cpu.sp();
        cpu.push(0xAB).unwrap();
        assert_eq!(cpu.sp(), sp.wrapping_sub(1));
        assert_eq!(cpu.bus().read(0x0100 | sp as u16).unwrap(), 0xAB);

        assert_eq!(cpu.pull().unwrap(), 0xAB);
        assert_eq!(cpu.sp(), sp);
    }

    #[test]
    fn test_stack_pointer_wraps() {
        let mut cpu = cpu_with_reset_vector(0x8000);
        cpu.set_sp(0x00);

        cpu.push(0x42).unwrap();
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.bus().read(0x0100).unwrap(), 0x42);

        assert_eq!(cpu.pull().unwrap(), 0x42);
        assert_eq!(cpu.sp(), 0x00);
    }

    #[test]
    fn test_halted_cpu_refuses_to_step() {
        let mut cpu = cpu_with_reset_vector(0x8000);
        cpu.bus_mut().write(0x8000, 0xEA).unwrap();

        cpu.halt();
        assert_eq!(cpu.step(), Err(StepError::Halted));
        assert_eq!(cpu.state(), RunState::Halted);

        cpu.resume();
        assert!(cpu.step().is_ok());
    }

    #[test]
    fn test_unstable_opcode_faults_and_aligns_pc() {
        let mut cpu = cpu_with_reset_vector(0x8000);
        // SHY $1234,X is unstable and two operand bytes long.
        cpu.bus_mut().load_bytes(0x8000, &[0x9C, 0x34, 0x12]);

        assert_eq!(cpu.step(), Err(StepError::UnstableOpcode(0x9C)));
        assert_eq!(cpu.pc(), 0x8003);
    }

    #[test]
    fn test_unstable_opcode_as_nop_under_policy() {
        let mut cpu = cpu_with_reset_vector(0x8000);
        cpu.bus_mut().load_bytes(0x8000, &[0x8B, 0x42]); // ANE #$42
        cpu.set_unstable_policy(UnstablePolicy::Nop);
        cpu.set_a(0x7F);

        let outcome = cpu.step().unwrap();
        assert_eq!(outcome.opcode, 0x8B);
        assert_eq!(outcome.pc_after, 0x8002);
        assert_eq!(cpu.a(), 0x7F);
    }

    #[test]
    fn test_run_counts_instructions() {
        let mut cpu = cpu_with_reset_vector(0x8000);
        cpu.bus_mut().load_bytes(0x8000, &[0xEA; 8]);

        cpu.run(5).unwrap();
        assert_eq!(cpu.pc(), 0x8005);
    }
}
