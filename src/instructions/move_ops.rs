use crate::addressing::Mode;
use crate::cpu::Cpu;
use crate::error::Error;
use crate::flags::{self, StatusFlag};
use crate::opcodes::Mnemonic;

/// LDA - Load Accumulator. Flags: Z, N.
pub fn lda(cpu: &mut Cpu, mode: Mode, mnemonic: Mnemonic) -> Result<(), Error> {
    let (_, value) = cpu.get_operand(mode, mnemonic)?;
    cpu.a = value;
    cpu.update_zero_and_negative(cpu.a);
    Ok(())
}

/// LDX - Load X Register. Flags: Z, N.
pub fn ldx(cpu: &mut Cpu, mode: Mode, mnemonic: Mnemonic) -> Result<(), Error> {
    let (_, value) = cpu.get_operand(mode, mnemonic)?;
    cpu.x = value;
    cpu.update_zero_and_negative(cpu.x);
    Ok(())
}

/// LDY - Load Y Register. Flags: Z, N.
pub fn ldy(cpu: &mut Cpu, mode: Mode, mnemonic: Mnemonic) -> Result<(), Error> {
    let (_, value) = cpu.get_operand(mode, mnemonic)?;
    cpu.y = value;
    cpu.update_zero_and_negative(cpu.y);
    Ok(())
}

/// STA - Store Accumulator. Flags: none.
pub fn sta(cpu: &mut Cpu, mode: Mode, mnemonic: Mnemonic) -> Result<(), Error> {
    let addr = cpu.get_operand_address(mode, mnemonic)?;
    cpu.write_u8(addr, cpu.a);
    Ok(())
}

/// STX - Store X Register. Flags: none.
pub fn stx(cpu: &mut Cpu, mode: Mode, mnemonic: Mnemonic) -> Result<(), Error> {
    let addr = cpu.get_operand_address(mode, mnemonic)?;
    cpu.write_u8(addr, cpu.x);
    Ok(())
}

/// STY - Store Y Register. Flags: none.
pub fn sty(cpu: &mut Cpu, mode: Mode, mnemonic: Mnemonic) -> Result<(), Error> {
    let addr = cpu.get_operand_address(mode, mnemonic)?;
    cpu.write_u8(addr, cpu.y);
    Ok(())
}

/// TAX - Transfer Accumulator to X. Flags: Z, N.
pub fn tax(cpu: &mut Cpu, _mode: Mode, _mnemonic: Mnemonic) -> Result<(), Error> {
    cpu.x = cpu.a;
    cpu.update_zero_and_negative(cpu.x);
    Ok(())
}

/// TXA - Transfer X to Accumulator. Flags: Z, N.
pub fn txa(cpu: &mut Cpu, _mode: Mode, _mnemonic: Mnemonic) -> Result<(), Error> {
    cpu.a = cpu.x;
    cpu.update_zero_and_negative(cpu.a);
    Ok(())
}

/// TAY - Transfer Accumulator to Y. Flags: Z, N.
pub fn tay(cpu: &mut Cpu, _mode: Mode, _mnemonic: Mnemonic) -> Result<(), Error> {
    cpu.y = cpu.a;
    cpu.update_zero_and_negative(cpu.y);
    Ok(())
}

/// TYA - Transfer Y to Accumulator. Flags: Z, N.
pub fn tya(cpu: &mut Cpu, _mode: Mode, _mnemonic: Mnemonic) -> Result<(), Error> {
    cpu.a = cpu.y;
    cpu.update_zero_and_negative(cpu.a);
    Ok(())
}

/// TSX - Transfer Stack Pointer to X. Flags: Z, N.
pub fn tsx(cpu: &mut Cpu, _mode: Mode, _mnemonic: Mnemonic) -> Result<(), Error> {
    cpu.x = cpu.sp;
    cpu.update_zero_and_negative(cpu.x);
    Ok(())
}

/// TXS - Transfer X to Stack Pointer. Flags: none. Unlike every other transfer, TXS does
/// not touch Z/N.
pub fn txs(cpu: &mut Cpu, _mode: Mode, _mnemonic: Mnemonic) -> Result<(), Error> {
    cpu.sp = cpu.x;
    Ok(())
}

/// PHA - Push Accumulator. Flags: none.
pub fn pha(cpu: &mut Cpu, _mode: Mode, _mnemonic: Mnemonic) -> Result<(), Error> {
    cpu.push_u8(cpu.a);
    Ok(())
}

/// PLA - Pull Accumulator. Flags: Z, N.
pub fn pla(cpu: &mut Cpu, _mode: Mode, _mnemonic: Mnemonic) -> Result<(), Error> {
    cpu.a = cpu.pop_u8();
    cpu.update_zero_and_negative(cpu.a);
    Ok(())
}

/// PHP - Push Processor Status. Flags: none on P itself; the pushed byte always has the
/// Break and Unused bits set, regardless of their live state.
pub fn php(cpu: &mut Cpu, _mode: Mode, _mnemonic: Mnemonic) -> Result<(), Error> {
    let mut pushed = cpu.p;
    flags::set_flag(&mut pushed, StatusFlag::Break, true);
    flags::set_flag(&mut pushed, StatusFlag::Unused, true);
    cpu.push_u8(pushed);
    Ok(())
}

/// PLP - Pull Processor Status. The Unused and Break bits are forced back on regardless
/// of what was on the stack.
pub fn plp(cpu: &mut Cpu, _mode: Mode, _mnemonic: Mnemonic) -> Result<(), Error> {
    let pulled = cpu.pop_u8();
    cpu.p = flags::normalize_pulled_status(pulled);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::memory::Bus;

    fn cpu() -> Cpu {
        Cpu::new(Bus::new_shared())
    }

    #[test]
    fn test_lda_immediate_sets_zero_flag() {
        let mut cpu = cpu();
        cpu.write_u8(0x00, 0x00); // operand byte at PC
        lda(&mut cpu, Mode::Immediate, Mnemonic::Lda).unwrap();
        assert_eq!(cpu.a, 0);
        assert!(cpu.is_flag_set(StatusFlag::Zero));
    }

    #[test]
    fn test_lda_immediate_sets_negative_flag() {
        let mut cpu = cpu();
        cpu.write_u8(0x00, 0x80);
        lda(&mut cpu, Mode::Immediate, Mnemonic::Lda).unwrap();
        assert_eq!(cpu.a, 0x80);
        assert!(cpu.is_flag_set(StatusFlag::Negative));
    }

    #[test]
    fn test_txs_does_not_touch_flags() {
        let mut cpu = cpu();
        let p_before = cpu.p;
        cpu.x = 0x80;
        txs(&mut cpu, Mode::Implied, Mnemonic::Txs).unwrap();
        assert_eq!(cpu.sp, 0x80);
        assert_eq!(cpu.p, p_before);
    }

    #[test]
    fn test_php_forces_break_and_unused_bits() {
        let mut cpu = cpu();
        cpu.p = 0;
        php(&mut cpu, Mode::Implied, Mnemonic::Php).unwrap();
        let pushed = cpu.pop_u8();
        assert_eq!(pushed, 0b0011_0000);
    }

    #[test]
    fn test_plp_normalizes_pulled_status() {
        let mut cpu = cpu();
        cpu.push_u8(0);
        plp(&mut cpu, Mode::Implied, Mnemonic::Plp).unwrap();
        assert_eq!(cpu.p, 0b0011_0000);
    }
}
