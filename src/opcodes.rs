//! # Opcode Metadata Table
//!
//! The complete 256-entry opcode table, the single source of truth for
//! instruction decode. Each entry pairs a [`Mnemonic`] with an
//! [`AddressingMode`]; the CPU decodes by indexing this array with the opcode
//! byte, nothing else.
//!
//! The table covers:
//!
//! - **151 documented instructions** - the official NMOS 6502 set
//! - **Stable undocumented opcodes** - LAX, SAX, DCP, ISB, SLO, RLA, SRE,
//!   RRA, ANC, ARR, ASR, SBX, LAS, the undocumented NOP variants, and the
//!   `$EB` encoding of SBC
//! - **Unstable opcodes** - ANE, LXA, SHA, SHX, SHY, TAS and the JAM group,
//!   present so decoding never falls off the table, but refused at execution
//!   time

use crate::addressing::AddressingMode;

/// Instruction mnemonic, one variant per distinct semantic.
///
/// A closed enum rather than a string so dispatch is a direct `match` with
/// exhaustiveness checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    // Documented instructions
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx,
    Iny, Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp,
    Rol, Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay,
    Tsx, Txa, Txs, Tya,
    // Stable undocumented instructions
    Lax, Sax, Dcp, Isb, Slo, Rla, Sre, Rra, Anc, Arr, Asr, Sbx, Las,
    // Unstable undocumented instructions; decoded but refused at execution
    Ane, Lxa, Sha, Shx, Shy, Tas, Jam,
}

impl Mnemonic {
    /// True for opcodes whose hardware behavior depends on analog effects
    /// and is not reproducible, plus the JAM group.
    pub fn is_unstable(self) -> bool {
        matches!(
            self,
            Mnemonic::Ane
                | Mnemonic::Lxa
                | Mnemonic::Sha
                | Mnemonic::Shx
                | Mnemonic::Shy
                | Mnemonic::Tas
                | Mnemonic::Jam
        )
    }

    /// True for any opcode outside the documented instruction set.
    pub fn is_illegal(self) -> bool {
        self.is_unstable()
            || matches!(
                self,
                Mnemonic::Lax
                    | Mnemonic::Sax
                    | Mnemonic::Dcp
                    | Mnemonic::Isb
                    | Mnemonic::Slo
                    | Mnemonic::Rla
                    | Mnemonic::Sre
                    | Mnemonic::Rra
                    | Mnemonic::Anc
                    | Mnemonic::Arr
                    | Mnemonic::Asr
                    | Mnemonic::Sbx
                    | Mnemonic::Las
            )
    }
}

/// Decode metadata for a single opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    /// The instruction semantic.
    pub mnemonic: Mnemonic,
    /// How the operand bytes are interpreted.
    pub mode: AddressingMode,
}

const fn op(mnemonic: Mnemonic, mode: AddressingMode) -> OpcodeEntry {
    OpcodeEntry { mnemonic, mode }
}

use AddressingMode::{
    Absolute, AbsoluteX, AbsoluteY, Accumulator, Immediate, Implied, Indirect, IndirectX,
    IndirectY, Relative, ZeroPage, ZeroPageX, ZeroPageY,
};
use Mnemonic::*;

/// The 256-entry opcode table, indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use mos6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// ```
pub const OPCODE_TABLE: [OpcodeEntry; 256] = [
    op(Brk, Implied),     // 0x00
    op(Ora, IndirectX),   // 0x01
    op(Jam, Implied),     // 0x02
    op(Slo, IndirectX),   // 0x03
    op(Nop, ZeroPage),    // 0x04
    op(Ora, ZeroPage),    // 0x05
    op(Asl, ZeroPage),    // 0x06
    op(Slo, ZeroPage),    // 0x07
    op(Php, Implied),     // 0x08
    op(Ora, Immediate),   // 0x09
    op(Asl, Accumulator), // 0x0A
    op(Anc, Immediate),   // 0x0B
    op(Nop, Absolute),    // 0x0C
    op(Ora, Absolute),    // 0x0D
    op(Asl, Absolute),    // 0x0E
    op(Slo, Absolute),    // 0x0F
    op(Bpl, Relative),    // 0x10
    op(Ora, IndirectY),   // 0x11
    op(Jam, Implied),     // 0x12
    op(Slo, IndirectY),   // 0x13
    op(Nop, ZeroPageX),   // 0x14
    op(Ora, ZeroPageX),   // 0x15
    op(Asl, ZeroPageX),   // 0x16
    op(Slo, ZeroPageX),   // 0x17
    op(Clc, Implied),     // 0x18
    op(Ora, AbsoluteY),   // 0x19
    op(Nop, Implied),     // 0x1A
    op(Slo, AbsoluteY),   // 0x1B
    op(Nop, AbsoluteX),   // 0x1C
    op(Ora, AbsoluteX),   // 0x1D
    op(Asl, AbsoluteX),   // 0x1E
    op(Slo, AbsoluteX),   // 0x1F
    op(Jsr, Absolute),    // 0x20
    op(And, IndirectX),   // 0x21
    op(Jam, Implied),     // 0x22
    op(Rla, IndirectX),   // 0x23
    op(Bit, ZeroPage),    // 0x24
    op(And, ZeroPage),    // 0x25
    op(Rol, ZeroPage),    // 0x26
    op(Rla, ZeroPage),    // 0x27
    op(Plp, Implied),     // 0x28
    op(And, Immediate),   // 0x29
    op(Rol, Accumulator), // 0x2A
    op(Anc, Immediate),   // 0x2B
    op(Bit, Absolute),    // 0x2C
    op(And, Absolute),    // 0x2D
    op(Rol, Absolute),    // 0x2E
    op(Rla, Absolute),    // 0x2F
    op(Bmi, Relative),    // 0x30
    op(And, IndirectY),   // 0x31
    op(Jam, Implied),     // 0x32
    op(Rla, IndirectY),   // 0x33
    op(Nop, ZeroPageX),   // 0x34
    op(And, ZeroPageX),   // 0x35
    op(Rol, ZeroPageX),   // 0x36
    op(Rla, ZeroPageX),   // 0x37
    op(Sec, Implied),     // 0x38
    op(And, AbsoluteY),   // 0x39
    op(Nop, Implied),     // 0x3A
    op(Rla, AbsoluteY),   // 0x3B
    op(Nop, AbsoluteX),   // 0x3C
    op(And, AbsoluteX),   // 0x3D
    op(Rol, AbsoluteX),   // 0x3E
    op(Rla, AbsoluteX),   // 0x3F
    op(Rti, Implied),     // 0x40
    op(Eor, IndirectX),   // 0x41
    op(Jam, Implied),     // 0x42
    op(Sre, IndirectX),   // 0x43
    op(Nop, ZeroPage),    // 0x44
    op(Eor, ZeroPage),    // 0x45
    op(Lsr, ZeroPage),    // 0x46
    op(Sre, ZeroPage),    // 0x47
    op(Pha, Implied),     // 0x48
    op(Eor, Immediate),   // 0x49
    op(Lsr, Accumulator), // 0x4A
    op(Asr, Immediate),   // 0x4B
    op(Jmp, Absolute),    // 0x4C
    op(Eor, Absolute),    // 0x4D
    op(Lsr, Absolute),    // 0x4E
    op(Sre, Absolute),    // 0x4F
    op(Bvc, Relative),    // 0x50
    op(Eor, IndirectY),   // 0x51
    op(Jam, Implied),     // 0x52
    op(Sre, IndirectY),   // 0x53
    op(Nop, ZeroPageX),   // 0x54
    op(Eor, ZeroPageX),   // 0x55
    op(Lsr, ZeroPageX),   // 0x56
    op(Sre, ZeroPageX),   // 0x57
    op(Cli, Implied),     // 0x58
    op(Eor, AbsoluteY),   // 0x59
    op(Nop, Implied),     // 0x5A
    op(Sre, AbsoluteY),   // 0x5B
    op(Nop, AbsoluteX),   // 0x5C
    op(Eor, AbsoluteX),   // 0x5D
    op(Lsr, AbsoluteX),   // 0x5E
    op(Sre, AbsoluteX),   // 0x5F
    op(Rts, Implied),     // 0x60
    op(Adc, IndirectX),   // 0x61
    op(Jam, Implied),     // 0x62
    op(Rra, IndirectX),   // 0x63
    op(Nop, ZeroPage),    // 0x64
    op(Adc, ZeroPage),    // 0x65
    op(Ror, ZeroPage),    // 0x66
    op(Rra, ZeroPage),    // 0x67
    op(Pla, Implied),     // 0x68
    op(Adc, Immediate),   // 0x69
    op(Ror, Accumulator), // 0x6A
    op(Arr, Immediate),   // 0x6B
    op(Jmp, Indirect),    // 0x6C
    op(Adc, Absolute),    // 0x6D
    op(Ror, Absolute),    // 0x6E
    op(Rra, Absolute),    // 0x6F
    op(Bvs, Relative),    // 0x70
    op(Adc, IndirectY),   // 0x71
    op(Jam, Implied),     // 0x72
    op(Rra, IndirectY),   // 0x73
    op(Nop, ZeroPageX),   // 0x74
    op(Adc, ZeroPageX),   // 0x75
    op(Ror, ZeroPageX),   // 0x76
    op(Rra, ZeroPageX),   // 0x77
    op(Sei, Implied),     // 0x78
    op(Adc, AbsoluteY),   // 0x79
    op(Nop, Implied),     // 0x7A
    op(Rra, AbsoluteY),   // 0x7B
    op(Nop, AbsoluteX),   // 0x7C
    op(Adc, AbsoluteX),   // 0x7D
    op(Ror, AbsoluteX),   // 0x7E
    op(Rra, AbsoluteX),   // 0x7F
    op(Nop, Immediate),   // 0x80
    op(Sta, IndirectX),   // 0x81
    op(Nop, Immediate),   // 0x82
    op(Sax, IndirectX),   // 0x83
    op(Sty, ZeroPage),    // 0x84
    op(Sta, ZeroPage),    // 0x85
    op(Stx, ZeroPage),    // 0x86
    op(Sax, ZeroPage),    // 0x87
    op(Dey, Implied),     // 0x88
    op(Nop, Immediate),   // 0x89
    op(Txa, Implied),     // 0x8A
    op(Ane, Immediate),   // 0x8B
    op(Sty, Absolute),    // 0x8C
    op(Sta, Absolute),    // 0x8D
    op(Stx, Absolute),    // 0x8E
    op(Sax, Absolute),    // 0x8F
    op(Bcc, Relative),    // 0x90
    op(Sta, IndirectY),   // 0x91
    op(Jam, Implied),     // 0x92
    op(Sha, IndirectY),   // 0x93
    op(Sty, ZeroPageX),   // 0x94
    op(Sta, ZeroPageX),   // 0x95
    op(Stx, ZeroPageY),   // 0x96
    op(Sax, ZeroPageY),   // 0x97
    op(Tya, Implied),     // 0x98
    op(Sta, AbsoluteY),   // 0x99
    op(Txs, Implied),     // 0x9A
    op(Tas, AbsoluteY),   // 0x9B
    op(Shy, AbsoluteX),   // 0x9C
    op(Sta, AbsoluteX),   // 0x9D
    op(Shx, AbsoluteY),   // 0x9E
    op(Sha, AbsoluteY),   // 0x9F
    op(Ldy, Immediate),   // 0xA0
    op(Lda, IndirectX),   // 0xA1
    op(Ldx, Immediate),   // 0xA2
    op(Lax, IndirectX),   // 0xA3
    op(Ldy, ZeroPage),    // 0xA4
    op(Lda, ZeroPage),    // 0xA5
    op(Ldx, ZeroPage),    // 0xA6
    op(Lax, ZeroPage),    // 0xA7
    op(Tay, Implied),     // 0xA8
    op(Lda, Immediate),   // 0xA9
    op(Tax, Implied),     // 0xAA
    op(Lxa, Immediate),   // 0xAB
    op(Ldy, Absolute),    // 0xAC
    op(Lda, Absolute),    // 0xAD
    op(Ldx, Absolute),    // 0xAE
    op(Lax, Absolute),    // 0xAF
    op(Bcs, Relative),    // 0xB0
    op(Lda, IndirectY),   // 0xB1
    op(Jam, Implied),     // 0xB2
    op(Lax, IndirectY),   // 0xB3
    op(Ldy, ZeroPageX),   // 0xB4
    op(Lda, ZeroPageX),   // 0xB5
    op(Ldx, ZeroPageY),   // 0xB6
    op(Lax, ZeroPageY),   // 0xB7
    op(Clv, Implied),     // 0xB8
    op(Lda, AbsoluteY),   // 0xB9
    op(Tsx, Implied),     // 0xBA
    op(Las, AbsoluteY),   // 0xBB
    op(Ldy, AbsoluteX),   // 0xBC
    op(Lda, AbsoluteX),   // 0xBD
    op(Ldx, AbsoluteY),   // 0xBE
    op(Lax, AbsoluteY),   // 0xBF
    op(Cpy, Immediate),   // 0xC0
    op(Cmp, IndirectX),   // 0xC1
    op(Nop, Immediate),   // 0xC2
    op(Dcp, IndirectX),   // 0xC3
    op(Cpy, ZeroPage),    // 0xC4
    op(Cmp, ZeroPage),    // 0xC5
    op(Dec, ZeroPage),    // 0xC6
    op(Dcp, ZeroPage),    // 0xC7
    op(Iny, Implied),     // 0xC8
    op(Cmp, Immediate),   // 0xC9
    op(Dex, Implied),     // 0xCA
    op(Sbx, Immediate),   // 0xCB
    op(Cpy, Absolute),    // 0xCC
    op(Cmp, Absolute),    // 0xCD
    op(Dec, Absolute),    // 0xCE
    op(Dcp, Absolute),    // 0xCF
    op(Bne, Relative),    // 0xD0
    op(Cmp, IndirectY),   // 0xD1
    op(Jam, Implied),     // 0xD2
    op(Dcp, IndirectY),   // 0xD3
    op(Nop, ZeroPageX),   // 0xD4
    op(Cmp, ZeroPageX),   // 0xD5
    op(Dec, ZeroPageX),   // 0xD6
    op(Dcp, ZeroPageX),   // 0xD7
    op(Cld, Implied),     // 0xD8
    op(Cmp, AbsoluteY),   // 0xD9
    op(Nop, Implied),     // 0xDA
    op(Dcp, AbsoluteY),   // 0xDB
    op(Nop, AbsoluteX),   // 0xDC
    op(Cmp, AbsoluteX),   // 0xDD
    op(Dec, AbsoluteX),   // 0xDE
    op(Dcp, AbsoluteX),   // 0xDF
    op(Cpx, Immediate),   // 0xE0
    op(Sbc, IndirectX),   // 0xE1
    op(Nop, Immediate),   // 0xE2
    op(Isb, IndirectX),   // 0xE3
    op(Cpx, ZeroPage),    // 0xE4
    op(Sbc, ZeroPage),    // 0xE5
    op(Inc, ZeroPage),    // 0xE6
    op(Isb, ZeroPage),    // 0xE7
    op(Inx, Implied),     // 0xE8
    op(Sbc, Immediate),   // 0xE9
    op(Nop, Implied),     // 0xEA
    op(Sbc, Immediate),   // 0xEB (undocumented duplicate encoding)
    op(Cpx, Absolute),    // 0xEC
    op(Sbc, Absolute),    // 0xED
    op(Inc, Absolute),    // 0xEE
    op(Isb, Absolute),    // 0xEF
    op(Beq, Relative),    // 0xF0
    op(Sbc, IndirectY),   // 0xF1
    op(Jam, Implied),     // 0xF2
    op(Isb, IndirectY),   // 0xF3
    op(Nop, ZeroPageX),   // 0xF4
    op(Sbc, ZeroPageX),   // 0xF5
    op(Inc, ZeroPageX),   // 0xF6
    op(Isb, ZeroPageX),   // 0xF7
    op(Sed, Implied),     // 0xF8
    op(Sbc, AbsoluteY),   // 0xF9
    op(Nop, Implied),     // 0xFA
    op(Isb, AbsoluteY),   // 0xFB
    op(Nop, AbsoluteX),   // 0xFC
    op(Sbc, AbsoluteX),   // 0xFD
    op(Inc, AbsoluteX),   // 0xFE
    op(Isb, AbsoluteX),   // 0xFF
];
