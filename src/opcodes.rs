use crate::addressing::Mode;
use crate::cpu::Cpu;
use crate::error::Error;
use crate::instructions::jump_ops;
use crate::instructions::logical_ops;
use crate::instructions::move_ops;

/// The 56 distinct mnemonic behaviors of the documented 6502 instruction set. Several
/// mnemonics are reachable through more than one addressing mode (e.g. `Lda` through 8
/// different modes), but the behavior named here is the same function in every case.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl,
    Brk, Bvc, Bvs, Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy,
    Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp, Jsr, Lda,
    Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol,
    Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty,
    Tax, Tay, Tsx, Txa, Txs, Tya,
}

/// The function signature every opcode executor shares: resolve/consume whatever operand
/// bytes its addressing mode implies, perform the operation, and update registers/flags.
/// `mnemonic` is threaded through purely so `UnsupportedMode` errors can name the
/// instruction that triggered them; most executors never look at it.
pub type ExecFn = fn(&mut Cpu, Mode, Mnemonic) -> Result<(), Error>;

/// One row of the opcode table: the byte that selects it, which behavior it names, how
/// many bytes (including the opcode byte itself) the instruction occupies, which
/// addressing mode supplies its operand, and the function that carries it out.
#[derive(Clone, Copy)]
pub struct OpcodeDescriptor {
    pub mnemonic: Mnemonic,
    pub opcode: u8,
    pub size: u8,
    pub mode: Mode,
    pub exec: ExecFn,
}

use Mnemonic::*;
use Mode::*;

macro_rules! op {
    ($opcode:expr, $mnemonic:ident, $mode:ident, $size:expr, $exec:expr) => {
        Some(OpcodeDescriptor {
            mnemonic: $mnemonic,
            opcode: $opcode,
            size: $size,
            mode: $mode,
            exec: $exec,
        })
    };
}

/// The full 256-entry opcode space. Slots with no documented behavior are `None`; the
/// 105 `None` slots correspond to the illegal/undocumented opcodes this core does not
/// model, matching the 151 documented opcodes across 56 mnemonics.
#[rustfmt::skip]
pub static OPCODE_TABLE: [Option<OpcodeDescriptor>; 256] = [
    /* 0x00 */ op!(0x00, Brk, Implied, 1, jump_ops::brk),
    /* 0x01 */ op!(0x01, Ora, IndirectX, 2, logical_ops::ora),
    /* 0x02 */ None,
    /* 0x03 */ None,
    /* 0x04 */ None,
    /* 0x05 */ op!(0x05, Ora, ZeroPage, 2, logical_ops::ora),
    /* 0x06 */ op!(0x06, Asl, ZeroPage, 2, logical_ops::asl),
    /* 0x07 */ None,
    /* 0x08 */ op!(0x08, Php, Implied, 1, move_ops::php),
    /* 0x09 */ op!(0x09, Ora, Immediate, 2, logical_ops::ora),
    /* 0x0A */ op!(0x0A, Asl, Accumulator, 1, logical_ops::asl),
    /* 0x0B */ None,
    /* 0x0C */ None,
    /* 0x0D */ op!(0x0D, Ora, Absolute, 3, logical_ops::ora),
    /* 0x0E */ op!(0x0E, Asl, Absolute, 3, logical_ops::asl),
    /* 0x0F */ None,
    /* 0x10 */ op!(0x10, Bpl, Relative, 2, jump_ops::bpl),
    /* 0x11 */ op!(0x11, Ora, IndirectY, 2, logical_ops::ora),
    /* 0x12 */ None,
    /* 0x13 */ None,
    /* 0x14 */ None,
    /* 0x15 */ op!(0x15, Ora, ZeroPageX, 2, logical_ops::ora),
    /* 0x16 */ op!(0x16, Asl, ZeroPageX, 2, logical_ops::asl),
    /* 0x17 */ None,
    /* 0x18 */ op!(0x18, Clc, Implied, 1, jump_ops::clc),
    /* 0x19 */ op!(0x19, Ora, AbsoluteY, 3, logical_ops::ora),
    /* 0x1A */ None,
    /* 0x1B */ None,
    /* 0x1C */ None,
    /* 0x1D */ op!(0x1D, Ora, AbsoluteX, 3, logical_ops::ora),
    /* 0x1E */ op!(0x1E, Asl, AbsoluteX, 3, logical_ops::asl),
    /* 0x1F */ None,
    /* 0x20 */ op!(0x20, Jsr, Absolute, 3, jump_ops::jsr),
    /* 0x21 */ op!(0x21, And, IndirectX, 2, logical_ops::and),
    /* 0x22 */ None,
    /* 0x23 */ None,
    /* 0x24 */ op!(0x24, Bit, ZeroPage, 2, jump_ops::bit),
    /* 0x25 */ op!(0x25, And, ZeroPage, 2, logical_ops::and),
    /* 0x26 */ op!(0x26, Rol, ZeroPage, 2, logical_ops::rol),
    /* 0x27 */ None,
    /* 0x28 */ op!(0x28, Plp, Implied, 1, move_ops::plp),
    /* 0x29 */ op!(0x29, And, Immediate, 2, logical_ops::and),
    /* 0x2A */ op!(0x2A, Rol, Accumulator, 1, logical_ops::rol),
    /* 0x2B */ None,
    /* 0x2C */ op!(0x2C, Bit, Absolute, 3, jump_ops::bit),
    /* 0x2D */ op!(0x2D, And, Absolute, 3, logical_ops::and),
    /* 0x2E */ op!(0x2E, Rol, Absolute, 3, logical_ops::rol),
    /* 0x2F */ None,
    /* 0x30 */ op!(0x30, Bmi, Relative, 2, jump_ops::bmi),
    /* 0x31 */ op!(0x31, And, IndirectY, 2, logical_ops::and),
    /* 0x32 */ None,
    /* 0x33 */ None,
    /* 0x34 */ None,
    /* 0x35 */ op!(0x35, And, ZeroPageX, 2, logical_ops::and),
    /* 0x36 */ op!(0x36, Rol, ZeroPageX, 2, logical_ops::rol),
    /* 0x37 */ None,
    /* 0x38 */ op!(0x38, Sec, Implied, 1, jump_ops::sec),
    /* 0x39 */ op!(0x39, And, AbsoluteY, 3, logical_ops::and),
    /* 0x3A */ None,
    /* 0x3B */ None,
    /* 0x3C */ None,
    /* 0x3D */ op!(0x3D, And, AbsoluteX, 3, logical_ops::and),
    /* 0x3E */ op!(0x3E, Rol, AbsoluteX, 3, logical_ops::rol),
    /* 0x3F */ None,
    /* 0x40 */ op!(0x40, Rti, Implied, 1, jump_ops::rti),
    /* 0x41 */ op!(0x41, Eor, IndirectX, 2, logical_ops::eor),
    /* 0x42 */ None,
    /* 0x43 */ None,
    /* 0x44 */ None,
    /* 0x45 */ op!(0x45, Eor, ZeroPage, 2, logical_ops::eor),
    /* 0x46 */ op!(0x46, Lsr, ZeroPage, 2, logical_ops::lsr),
    /* 0x47 */ None,
    /* 0x48 */ op!(0x48, Pha, Implied, 1, move_ops::pha),
    /* 0x49 */ op!(0x49, Eor, Immediate, 2, logical_ops::eor),
    /* 0x4A */ op!(0x4A, Lsr, Accumulator, 1, logical_ops::lsr),
    /* 0x4B */ None,
    /* 0x4C */ op!(0x4C, Jmp, Absolute, 3, jump_ops::jmp),
    /* 0x4D */ op!(0x4D, Eor, Absolute, 3, logical_ops::eor),
    /* 0x4E */ op!(0x4E, Lsr, Absolute, 3, logical_ops::lsr),
    /* 0x4F */ None,
    /* 0x50 */ op!(0x50, Bvc, Relative, 2, jump_ops::bvc),
    /* 0x51 */ op!(0x51, Eor, IndirectY, 2, logical_ops::eor),
    /* 0x52 */ None,
    /* 0x53 */ None,
    /* 0x54 */ None,
    /* 0x55 */ op!(0x55, Eor, ZeroPageX, 2, logical_ops::eor),
    /* 0x56 */ op!(0x56, Lsr, ZeroPageX, 2, logical_ops::lsr),
    /* 0x57 */ None,
    /* 0x58 */ op!(0x58, Cli, Implied, 1, jump_ops::cli),
    /* 0x59 */ op!(0x59, Eor, AbsoluteY, 3, logical_ops::eor),
    /* 0x5A */ None,
    /* 0x5B */ None,
    /* 0x5C */ None,
    /* 0x5D */ op!(0x5D, Eor, AbsoluteX, 3, logical_ops::eor),
    /* 0x5E */ op!(0x5E, Lsr, AbsoluteX, 3, logical_ops::lsr),
    /* 0x5F */ None,
    /* 0x60 */ op!(0x60, Rts, Implied, 1, jump_ops::rts),
    /* 0x61 */ op!(0x61, Adc, IndirectX, 2, logical_ops::adc),
    /* 0x62 */ None,
    /* 0x63 */ None,
    /* 0x64 */ None,
    /* 0x65 */ op!(0x65, Adc, ZeroPage, 2, logical_ops::adc),
    /* 0x66 */ op!(0x66, Ror, ZeroPage, 2, logical_ops::ror),
    /* 0x67 */ None,
    /* 0x68 */ op!(0x68, Pla, Implied, 1, move_ops::pla),
    /* 0x69 */ op!(0x69, Adc, Immediate, 2, logical_ops::adc),
    /* 0x6A */ op!(0x6A, Ror, Accumulator, 1, logical_ops::ror),
    /* 0x6B */ None,
    /* 0x6C */ op!(0x6C, Jmp, Indirect, 3, jump_ops::jmp),
    /* 0x6D */ op!(0x6D, Adc, Absolute, 3, logical_ops::adc),
    /* 0x6E */ op!(0x6E, Ror, Absolute, 3, logical_ops::ror),
    /* 0x6F */ None,
    /* 0x70 */ op!(0x70, Bvs, Relative, 2, jump_ops::bvs),
    /* 0x71 */ op!(0x71, Adc, IndirectY, 2, logical_ops::adc),
    /* 0x72 */ None,
    /* 0x73 */ None,
    /* 0x74 */ None,
    /* 0x75 */ op!(0x75, Adc, ZeroPageX, 2, logical_ops::adc),
    /* 0x76 */ op!(0x76, Ror, ZeroPageX, 2, logical_ops::ror),
    /* 0x77 */ None,
    /* 0x78 */ op!(0x78, Sei, Implied, 1, jump_ops::sei),
    /* 0x79 */ op!(0x79, Adc, AbsoluteY, 3, logical_ops::adc),
    /* 0x7A */ None,
    /* 0x7B */ None,
    /* 0x7C */ None,
    /* 0x7D */ op!(0x7D, Adc, AbsoluteX, 3, logical_ops::adc),
    /* 0x7E */ op!(0x7E, Ror, AbsoluteX, 3, logical_ops::ror),
    /* 0x7F */ None,
    /* 0x80 */ None,
    /* 0x81 */ op!(0x81, Sta, IndirectX, 2, move_ops::sta),
    /* 0x82 */ None,
    /* 0x83 */ None,
    /* 0x84 */ op!(0x84, Sty, ZeroPage, 2, move_ops::sty),
    /* 0x85 */ op!(0x85, Sta, ZeroPage, 2, move_ops::sta),
    /* 0x86 */ op!(0x86, Stx, ZeroPage, 2, move_ops::stx),
    /* 0x87 */ None,
    /* 0x88 */ op!(0x88, Dey, Implied, 1, logical_ops::dey),
    /* 0x89 */ None,
    /* 0x8A */ op!(0x8A, Txa, Implied, 1, move_ops::txa),
    /* 0x8B */ None,
    /* 0x8C */ op!(0x8C, Sty, Absolute, 3, move_ops::sty),
    /* 0x8D */ op!(0x8D, Sta, Absolute, 3, move_ops::sta),
    /* 0x8E */ op!(0x8E, Stx, Absolute, 3, move_ops::stx),
    /* 0x8F */ None,
    /* 0x90 */ op!(0x90, Bcc, Relative, 2, jump_ops::bcc),
    /* 0x91 */ op!(0x91, Sta, IndirectY, 2, move_ops::sta),
    /* 0x92 */ None,
    /* 0x93 */ None,
    /* 0x94 */ op!(0x94, Sty, ZeroPageX, 2, move_ops::sty),
    /* 0x95 */ op!(0x95, Sta, ZeroPageX, 2, move_ops::sta),
    /* 0x96 */ op!(0x96, Stx, ZeroPageY, 2, move_ops::stx),
    /* 0x97 */ None,
    /* 0x98 */ op!(0x98, Tya, Implied, 1, move_ops::tya),
    /* 0x99 */ op!(0x99, Sta, AbsoluteY, 3, move_ops::sta),
    /* 0x9A */ op!(0x9A, Txs, Implied, 1, move_ops::txs),
    /* 0x9B */ None,
    /* 0x9C */ None,
    /* 0x9D */ op!(0x9D, Sta, AbsoluteX, 3, move_ops::sta),
    /* 0x9E */ None,
    /* 0x9F */ None,
    /* 0xA0 */ op!(0xA0, Ldy, Immediate, 2, move_ops::ldy),
    /* 0xA1 */ op!(0xA1, Lda, IndirectX, 2, move_ops::lda),
    /* 0xA2 */ op!(0xA2, Ldx, Immediate, 2, move_ops::ldx),
    /* 0xA3 */ None,
    /* 0xA4 */ op!(0xA4, Ldy, ZeroPage, 2, move_ops::ldy),
    /* 0xA5 */ op!(0xA5, Lda, ZeroPage, 2, move_ops::lda),
    /* 0xA6 */ op!(0xA6, Ldx, ZeroPage, 2, move_ops::ldx),
    /* 0xA7 */ None,
    /* 0xA8 */ op!(0xA8, Tay, Implied, 1, move_ops::tay),
    /* 0xA9 */ op!(0xA9, Lda, Immediate, 2, move_ops::lda),
    /* 0xAA */ op!(0xAA, Tax, Implied, 1, move_ops::tax),
    /* 0xAB */ None,
    /* 0xAC */ op!(0xAC, Ldy, Absolute, 3, move_ops::ldy),
    /* 0xAD */ op!(0xAD, Lda, Absolute, 3, move_ops::lda),
    /* 0xAE */ op!(0xAE, Ldx, Absolute, 3, move_ops::ldx),
    /* 0xAF */ None,
    /* 0xB0 */ op!(0xB0, Bcs, Relative, 2, jump_ops::bcs),
    /* 0xB1 */ op!(0xB1, Lda, IndirectY, 2, move_ops::lda),
    /* 0xB2 */ None,
    /* 0xB3 */ None,
    /* 0xB4 */ op!(0xB4, Ldy, ZeroPageX, 2, move_ops::ldy),
    /* 0xB5 */ op!(0xB5, Lda, ZeroPageX, 2, move_ops::lda),
    /* 0xB6 */ op!(0xB6, Ldx, ZeroPageY, 2, move_ops::ldx),
    /* 0xB7 */ None,
    /* 0xB8 */ op!(0xB8, Clv, Implied, 1, jump_ops::clv),
    /* 0xB9 */ op!(0xB9, Lda, AbsoluteY, 3, move_ops::lda),
    /* 0xBA */ op!(0xBA, Tsx, Implied, 1, move_ops::tsx),
    /* 0xBB */ None,
    /* 0xBC */ op!(0xBC, Ldy, AbsoluteX, 3, move_ops::ldy),
    /* 0xBD */ op!(0xBD, Lda, AbsoluteX, 3, move_ops::lda),
    /* 0xBE */ op!(0xBE, Ldx, AbsoluteY, 3, move_ops::ldx),
    /* 0xBF */ None,
    /* 0xC0 */ op!(0xC0, Cpy, Immediate, 2, logical_ops::cpy),
    /* 0xC1 */ op!(0xC1, Cmp, IndirectX, 2, logical_ops::cmp),
    /* 0xC2 */ None,
    /* 0xC3 */ None,
    /* 0xC4 */ op!(0xC4, Cpy, ZeroPage, 2, logical_ops::cpy),
    /* 0xC5 */ op!(0xC5, Cmp, ZeroPage, 2, logical_ops::cmp),
    /* 0xC6 */ op!(0xC6, Dec, ZeroPage, 2, logical_ops::dec),
    /* 0xC7 */ None,
    /* 0xC8 */ op!(0xC8, Iny, Implied, 1, logical_ops::iny),
    /* 0xC9 */ op!(0xC9, Cmp, Immediate, 2, logical_ops::cmp),
    /* 0xCA */ op!(0xCA, Dex, Implied, 1, logical_ops::dex),
    /* 0xCB */ None,
    /* 0xCC */ op!(0xCC, Cpy, Absolute, 3, logical_ops::cpy),
    /* 0xCD */ op!(0xCD, Cmp, Absolute, 3, logical_ops::cmp),
    /* 0xCE */ op!(0xCE, Dec, Absolute, 3, logical_ops::dec),
    /* 0xCF */ None,
    /* 0xD0 */ op!(0xD0, Bne, Relative, 2, jump_ops::bne),
    /* 0xD1 */ op!(0xD1, Cmp, IndirectY, 2, logical_ops::cmp),
    /* 0xD2 */ None,
    /* 0xD3 */ None,
    /* 0xD4 */ None,
    /* 0xD5 */ op!(0xD5, Cmp, ZeroPageX, 2, logical_ops::cmp),
    /* 0xD6 */ op!(0xD6, Dec, ZeroPageX, 2, logical_ops::dec),
    /* 0xD7 */ None,
    /* 0xD8 */ op!(0xD8, Cld, Implied, 1, jump_ops::cld),
    /* 0xD9 */ op!(0xD9, Cmp, AbsoluteY, 3, logical_ops::cmp),
    /* 0xDA */ None,
    /* 0xDB */ None,
    /* 0xDC */ None,
    /* 0xDD */ op!(0xDD, Cmp, AbsoluteX, 3, logical_ops::cmp),
    /* 0xDE */ op!(0xDE, Dec, AbsoluteX, 3, logical_ops::dec),
    /* 0xDF */ None,
    /* 0xE0 */ op!(0xE0, Cpx, Immediate, 2, logical_ops::cpx),
    /* 0xE1 */ op!(0xE1, Sbc, IndirectX, 2, logical_ops::sbc),
    /* 0xE2 */ None,
    /* 0xE3 */ None,
    /* 0xE4 */ op!(0xE4, Cpx, ZeroPage, 2, logical_ops::cpx),
    /* 0xE5 */ op!(0xE5, Sbc, ZeroPage, 2, logical_ops::sbc),
    /* 0xE6 */ op!(0xE6, Inc, ZeroPage, 2, logical_ops::inc),
    /* 0xE7 */ None,
    /* 0xE8 */ op!(0xE8, Inx, Implied, 1, logical_ops::inx),
    /* 0xE9 */ op!(0xE9, Sbc, Immediate, 2, logical_ops::sbc),
    /* 0xEA */ op!(0xEA, Nop, Implied, 1, jump_ops::nop),
    /* 0xEB */ None,
    /* 0xEC */ op!(0xEC, Cpx, Absolute, 3, logical_ops::cpx),
    /* 0xED */ op!(0xED, Sbc, Absolute, 3, logical_ops::sbc),
    /* 0xEE */ op!(0xEE, Inc, Absolute, 3, logical_ops::inc),
    /* 0xEF */ None,
    /* 0xF0 */ op!(0xF0, Beq, Relative, 2, jump_ops::beq),
    /* 0xF1 */ op!(0xF1, Sbc, IndirectY, 2, logical_ops::sbc),
    /* 0xF2 */ None,
    /* 0xF3 */ None,
    /* 0xF4 */ None,
    /* 0xF5 */ op!(0xF5, Sbc, ZeroPageX, 2, logical_ops::sbc),
    /* 0xF6 */ op!(0xF6, Inc, ZeroPageX, 2, logical_ops::inc),
    /* 0xF7 */ None,
    /* 0xF8 */ op!(0xF8, Sed, Implied, 1, jump_ops::sed),
    /* 0xF9 */ op!(0xF9, Sbc, AbsoluteY, 3, logical_ops::sbc),
    /* 0xFA */ None,
    /* 0xFB */ None,
    /* 0xFC */ None,
    /* 0xFD */ op!(0xFD, Sbc, AbsoluteX, 3, logical_ops::sbc),
    /* 0xFE */ op!(0xFE, Inc, AbsoluteX, 3, logical_ops::inc),
    /* 0xFF */ None,
];

/// Looks up the descriptor for a fetched opcode byte. `None` means the byte names one of
/// the 105 illegal/undocumented opcodes this core does not implement.
pub fn decode(opcode: u8) -> Option<&'static OpcodeDescriptor> {
    OPCODE_TABLE[opcode as usize].as_ref()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_documented_opcode_count_is_151() {
        let count = OPCODE_TABLE.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(count, 151);
    }

    #[test]
    fn test_decode_known_and_unknown() {
        assert!(decode(0xEA).is_some());
        assert_eq!(decode(0xEA).unwrap().mnemonic, Nop);
        assert!(decode(0x02).is_none());
    }
}
