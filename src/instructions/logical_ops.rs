use crate::addressing::Mode;
use crate::cpu::Cpu;
use crate::error::Error;
use crate::flags::StatusFlag;
use crate::opcodes::Mnemonic;

/// ORA - Logical Inclusive OR. Flags: Z, N.
pub fn ora(cpu: &mut Cpu, mode: Mode, mnemonic: Mnemonic) -> Result<(), Error> {
    let (_, value) = cpu.get_operand(mode, mnemonic)?;
    cpu.a |= value;
    cpu.update_zero_and_negative(cpu.a);
    Ok(())
}

/// AND - Logical AND. Flags: Z, N.
pub fn and(cpu: &mut Cpu, mode: Mode, mnemonic: Mnemonic) -> Result<(), Error> {
    let (_, value) = cpu.get_operand(mode, mnemonic)?;
    cpu.a &= value;
    cpu.update_zero_and_negative(cpu.a);
    Ok(())
}

/// EOR - Exclusive OR. Flags: Z, N.
pub fn eor(cpu: &mut Cpu, mode: Mode, mnemonic: Mnemonic) -> Result<(), Error> {
    let (_, value) = cpu.get_operand(mode, mnemonic)?;
    cpu.a ^= value;
    cpu.update_zero_and_negative(cpu.a);
    Ok(())
}

/// ADC - Add with Carry. `A = A + value + C`, computed in a 16-bit accumulator so carry
/// out of bit 7 is observable. Overflow is set when the two operands share a sign and the
/// result's sign differs from theirs. Flags: C, Z, V, N.
pub fn adc(cpu: &mut Cpu, mode: Mode, mnemonic: Mnemonic) -> Result<(), Error> {
    let (_, value) = cpu.get_operand(mode, mnemonic)?;
    let a = cpu.a;
    let carry_in = cpu.carry_bit() as u16;
    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    cpu.set_flag(StatusFlag::Carry, sum > 0xFF);
    let overflow = (a ^ result) & (value ^ result) & 0x80 != 0;
    cpu.set_flag(StatusFlag::Overflow, overflow);
    cpu.a = result;
    cpu.update_zero_and_negative(cpu.a);
    Ok(())
}

/// SBC - Subtract with Carry (borrow), implemented as `ADC` against the operand's ones'
/// complement so the carry/overflow algebra is shared with `adc`.
pub fn sbc(cpu: &mut Cpu, mode: Mode, mnemonic: Mnemonic) -> Result<(), Error> {
    let (_, value) = cpu.get_operand(mode, mnemonic)?;
    let a = cpu.a;
    let inverted = !value;
    let carry_in = cpu.carry_bit() as u16;
    let sum = a as u16 + inverted as u16 + carry_in;
    let result = sum as u8;

    cpu.set_flag(StatusFlag::Carry, sum > 0xFF);
    let overflow = (a ^ result) & (inverted ^ result) & 0x80 != 0;
    cpu.set_flag(StatusFlag::Overflow, overflow);
    cpu.a = result;
    cpu.update_zero_and_negative(cpu.a);
    Ok(())
}

fn compare(cpu: &mut Cpu, register: u8, mode: Mode, mnemonic: Mnemonic) -> Result<(), Error> {
    let (_, value) = cpu.get_operand(mode, mnemonic)?;
    let result = register.wrapping_sub(value);
    cpu.set_flag(StatusFlag::Carry, register >= value);
    cpu.update_zero_and_negative(result);
    Ok(())
}

/// CMP - Compare Accumulator. Flags: C, Z, N.
pub fn cmp(cpu: &mut Cpu, mode: Mode, mnemonic: Mnemonic) -> Result<(), Error> {
    compare(cpu, cpu.a, mode, mnemonic)
}

/// CPX - Compare X Register. Flags: C, Z, N.
pub fn cpx(cpu: &mut Cpu, mode: Mode, mnemonic: Mnemonic) -> Result<(), Error> {
    compare(cpu, cpu.x, mode, mnemonic)
}

/// CPY - Compare Y Register. Flags: C, Z, N.
pub fn cpy(cpu: &mut Cpu, mode: Mode, mnemonic: Mnemonic) -> Result<(), Error> {
    compare(cpu, cpu.y, mode, mnemonic)
}

/// DEC - Decrement Memory. Flags: Z, N. Never reachable through Accumulator mode, so the
/// operand always carries a memory address.
pub fn dec(cpu: &mut Cpu, mode: Mode, mnemonic: Mnemonic) -> Result<(), Error> {
    let (addr, value) = cpu.get_operand(mode, mnemonic)?;
    let addr = addr.expect("DEC is never wired to Accumulator mode");
    let result = value.wrapping_sub(1);
    cpu.write_u8(addr, result);
    cpu.update_zero_and_negative(result);
    Ok(())
}

/// DEX - Decrement X Register. Flags: Z, N.
pub fn dex(cpu: &mut Cpu, _mode: Mode, _mnemonic: Mnemonic) -> Result<(), Error> {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zero_and_negative(cpu.x);
    Ok(())
}

/// DEY - Decrement Y Register. Flags: Z, N.
pub fn dey(cpu: &mut Cpu, _mode: Mode, _mnemonic: Mnemonic) -> Result<(), Error> {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zero_and_negative(cpu.y);
    Ok(())
}

/// INC - Increment Memory. Flags: Z, N.
pub fn inc(cpu: &mut Cpu, mode: Mode, mnemonic: Mnemonic) -> Result<(), Error> {
    let (addr, value) = cpu.get_operand(mode, mnemonic)?;
    let addr = addr.expect("INC is never wired to Accumulator mode");
    let result = value.wrapping_add(1);
    cpu.write_u8(addr, result);
    cpu.update_zero_and_negative(result);
    Ok(())
}

/// INX - Increment X Register. Flags: Z, N.
pub fn inx(cpu: &mut Cpu, _mode: Mode, _mnemonic: Mnemonic) -> Result<(), Error> {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zero_and_negative(cpu.x);
    Ok(())
}

/// INY - Increment Y Register. Flags: Z, N.
pub fn iny(cpu: &mut Cpu, _mode: Mode, _mnemonic: Mnemonic) -> Result<(), Error> {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zero_and_negative(cpu.y);
    Ok(())
}

fn write_back(cpu: &mut Cpu, addr: Option<u16>, result: u8) {
    match addr {
        Some(addr) => cpu.write_u8(addr, result),
        None => cpu.a = result,
    }
}

/// ASL - Arithmetic Shift Left. Carry takes the bit shifted out of bit 7. Flags: C, Z, N.
pub fn asl(cpu: &mut Cpu, mode: Mode, mnemonic: Mnemonic) -> Result<(), Error> {
    let (addr, value) = cpu.get_operand(mode, mnemonic)?;
    let result = value << 1;
    cpu.set_flag(StatusFlag::Carry, value & 0x80 != 0);
    write_back(cpu, addr, result);
    cpu.update_zero_and_negative(result);
    Ok(())
}

/// LSR - Logical Shift Right. Carry takes the bit shifted out of bit 0. Flags: C, Z, N.
pub fn lsr(cpu: &mut Cpu, mode: Mode, mnemonic: Mnemonic) -> Result<(), Error> {
    let (addr, value) = cpu.get_operand(mode, mnemonic)?;
    let result = value >> 1;
    cpu.set_flag(StatusFlag::Carry, value & 0x01 != 0);
    write_back(cpu, addr, result);
    cpu.update_zero_and_negative(result);
    Ok(())
}

/// ROL - Rotate Left. The old Carry feeds into bit 0; the new Carry takes the bit shifted
/// out of bit 7. Flags: C, Z, N.
pub fn rol(cpu: &mut Cpu, mode: Mode, mnemonic: Mnemonic) -> Result<(), Error> {
    let (addr, value) = cpu.get_operand(mode, mnemonic)?;
    let result = (value << 1) | cpu.carry_bit();
    cpu.set_flag(StatusFlag::Carry, value & 0x80 != 0);
    write_back(cpu, addr, result);
    cpu.update_zero_and_negative(result);
    Ok(())
}

/// ROR - Rotate Right. The old Carry feeds into bit 7; the new Carry takes the bit
/// shifted out of bit 0. Flags: C, Z, N.
pub fn ror(cpu: &mut Cpu, mode: Mode, mnemonic: Mnemonic) -> Result<(), Error> {
    let (addr, value) = cpu.get_operand(mode, mnemonic)?;
    let result = (value >> 1) | (cpu.carry_bit() << 7);
    cpu.set_flag(StatusFlag::Carry, value & 0x01 != 0);
    write_back(cpu, addr, result);
    cpu.update_zero_and_negative(result);
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
    fn test_adc_sets_carry_and_overflow_on_signed_overflow() {
        let mut cpu = cpu();
        cpu.a = 0x7F;
        cpu.write_u8(0x00, 0x01);
        adc(&mut cpu, Mode::Immediate, Mnemonic::Adc).unwrap();
        assert_eq!(cpu.a, 0x80);
        assert!(cpu.is_flag_set(StatusFlag::Overflow));
        assert!(!cpu.is_flag_set(StatusFlag::Carry));
    }

    #[test]
    fn test_adc_carries_out_of_bit_seven() {
        let mut cpu = cpu();
        cpu.a = 0xFF;
        cpu.write_u8(0x00, 0x01);
        adc(&mut cpu, Mode::Immediate, Mnemonic::Adc).unwrap();
        assert_eq!(cpu.a, 0);
        assert!(cpu.is_flag_set(StatusFlag::Carry));
        assert!(cpu.is_flag_set(StatusFlag::Zero));
    }

    #[test]
    fn test_sbc_with_carry_set_is_a_clean_subtract() {
        let mut cpu = cpu();
        cpu.a = 0x05;
        cpu.set_flag(StatusFlag::Carry, true);
        cpu.write_u8(0x00, 0x03);
        sbc(&mut cpu, Mode::Immediate, Mnemonic::Sbc).unwrap();
        assert_eq!(cpu.a, 0x02);
        assert!(cpu.is_flag_set(StatusFlag::Carry));
    }

    #[test]
    fn test_cmp_sets_carry_when_accumulator_is_greater_or_equal() {
        let mut cpu = cpu();
        cpu.a = 0x10;
        cpu.write_u8(0x00, 0x10);
        cmp(&mut cpu, Mode::Immediate, Mnemonic::Cmp).unwrap();
        assert!(cpu.is_flag_set(StatusFlag::Carry));
        assert!(cpu.is_flag_set(StatusFlag::Zero));
    }

    #[test]
    fn test_dey_updates_y_not_x() {
        let mut cpu = cpu();
        cpu.x = 0x10;
        cpu.y = 0x01;
        dey(&mut cpu, Mode::Implied, Mnemonic::Dey).unwrap();
        assert_eq!(cpu.y, 0x00);
        assert_eq!(cpu.x, 0x10);
        assert!(cpu.is_flag_set(StatusFlag::Zero));
    }

    #[test]
    fn test_asl_accumulator_sets_carry_from_bit_seven() {
        let mut cpu = cpu();
        cpu.a = 0b1000_0001;
        asl(&mut cpu, Mode::Accumulator, Mnemonic::Asl).unwrap();
        assert_eq!(cpu.a, 0b0000_0010);
        assert!(cpu.is_flag_set(StatusFlag::Carry));
    }

    #[test]
    fn test_ror_rotates_carry_into_bit_seven() {
        let mut cpu = cpu();
        cpu.a = 0b0000_0001;
        cpu.set_flag(StatusFlag::Carry, true);
        ror(&mut cpu, Mode::Accumulator, Mnemonic::Ror).unwrap();
        assert_eq!(cpu.a, 0b1000_0000);
        assert!(cpu.is_flag_set(StatusFlag::Carry));
    }
}
