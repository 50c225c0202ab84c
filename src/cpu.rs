use crate::addressing::{self, Mode};
use crate::error::Error;
use crate::flags::{self, StatusFlag};
use crate::memory::{SharedBus, STACK_PAGE};
use crate::opcodes::{self, Mnemonic};
use crate::registers::Registers;

/// The CPU core: a bus plus the six registers, stepped one instruction at a time.
/// `tick_count` and `max_ticks` exist so callers (tests, the clock loop) can bound a run
/// without the core needing to know why it's being stopped.
pub struct Cpu {
    pub bus: SharedBus,
    pub pc: u16,
    pub sp: u8,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub p: u8,
    pub tick_count: u64,
    pub max_ticks: Option<u64>,
}

impl Cpu {
    /// Registers start at their construction defaults; `pc` is left at 0 until
    /// [`Cpu::reset`] or a direct assignment points it at a load address.
    pub fn new(bus: SharedBus) -> Cpu {
        let regs = Registers::new();
        Cpu {
            bus,
            pc: regs.pc,
            sp: regs.sp,
            a: regs.a,
            x: regs.x,
            y: regs.y,
            p: regs.p,
            tick_count: 0,
            max_ticks: None,
        }
    }

    /// Loads `PC` from the reset vector at 0xFFFC, matching real power-on behavior.
    pub fn reset(&mut self) {
        self.pc = self.read_u16(crate::memory::RESET_VECTOR);
    }

    pub fn read_u8(&self, addr: u16) -> u8 {
        self.bus.borrow_mut().read_u8(addr)
    }

    pub fn write_u8(&self, addr: u16, value: u8) {
        self.bus.borrow_mut().write_u8(addr, value)
    }

    pub fn read_u16(&self, addr: u16) -> u16 {
        self.bus.borrow_mut().read_u16(addr)
    }

    pub fn write_u16(&self, addr: u16, value: u16) {
        self.bus.borrow_mut().write_u16(addr, value)
    }

    /// Reads the byte at `PC` without consuming it.
    pub fn peek_u8(&self) -> u8 {
        self.read_u8(self.pc)
    }

    /// Reads the byte at `PC`, advancing `PC` by one.
    pub fn next_u8(&mut self) -> u8 {
        let value = self.read_u8(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads the little-endian word at `PC`, advancing `PC` by two.
    pub fn next_u16(&mut self) -> u16 {
        let value = self.read_u16(self.pc);
        self.pc = self.pc.wrapping_add(2);
        value
    }

    /// Resolves `mode`'s effective address. Fails for `Accumulator`/`Implied`, which have
    /// none.
    pub fn get_operand_address(&mut self, mode: Mode, mnemonic: Mnemonic) -> Result<u16, Error> {
        addressing::effective_address(self, mode, mnemonic)
    }

    /// Resolves an operand for read: `Accumulator` yields `A` directly with no address;
    /// every other mode resolves an address and reads through the bus.
    pub fn get_operand(&mut self, mode: Mode, mnemonic: Mnemonic) -> Result<(Option<u16>, u8), Error> {
        if mode == Mode::Accumulator {
            return Ok((None, self.a));
        }
        let addr = self.get_operand_address(mode, mnemonic)?;
        Ok((Some(addr), self.read_u8(addr)))
    }

    pub fn set_flag(&mut self, flag: StatusFlag, value: bool) {
        flags::set_flag(&mut self.p, flag, value);
    }

    pub fn is_flag_set(&self, flag: StatusFlag) -> bool {
        flags::is_set(self.p, flag)
    }

    pub fn carry_bit(&self) -> u8 {
        flags::carry_bit(self.p)
    }

    pub fn update_zero_and_negative(&mut self, value: u8) {
        flags::update_zero_and_negative(&mut self.p, value);
    }

    /// Pushes one byte onto the stack at page 1, then decrements `SP`.
    pub fn push_u8(&mut self, value: u8) {
        let addr = STACK_PAGE + self.sp as u16;
        self.write_u8(addr, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments `SP`, then pulls one byte from the stack at page 1.
    pub fn pop_u8(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        let addr = STACK_PAGE + self.sp as u16;
        self.read_u8(addr)
    }

    /// Pushes the high byte, then the low byte, matching the order `JSR`/`BRK` need so
    /// `RTS`/`RTI` pull them back out low-then-high.
    pub fn push_u16(&mut self, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.push_u8(high);
        self.push_u8(low);
    }

    pub fn pop_u16(&mut self) -> u16 {
        let low = self.pop_u8();
        let high = self.pop_u8();
        u16::from_le_bytes([low, high])
    }

    /// Fetches the opcode at `PC`, advances past it, then decodes and executes it. The
    /// executor is responsible for consuming whatever operand bytes its addressing mode
    /// implies, so `PC` ends the tick pointing at the next instruction.
    pub fn step(&mut self) -> Result<(), Error> {
        self.tick_count = self.tick_count.wrapping_add(1);
        let opcode = self.next_u8();
        let descriptor = opcodes::decode(opcode).ok_or(Error::UnknownOpcode(opcode))?;
        let exec = descriptor.exec;
        let mode = descriptor.mode;
        let mnemonic = descriptor.mnemonic;
        exec(self, mode, mnemonic)
    }

    /// Steps until `predicate` holds, or `max_ticks` (if set) is reached.
    pub fn run_until<F: Fn(&Cpu) -> bool>(&mut self, predicate: F) -> Result<(), Error> {
        while !predicate(self) {
            self.step()?;
            if let Some(max) = self.max_ticks {
                if self.tick_count >= max {
                    break;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::memory::Bus;

    fn cpu_with_program(program: &[u8]) -> Cpu {
        let bus = Bus::new_shared();
        bus.borrow_mut().load(0x0200, program);
        let mut cpu = Cpu::new(bus);
        cpu.pc = 0x0200;
        cpu
    }

    #[test]
    fn test_step_advances_pc_by_instruction_size() {
        let mut cpu = cpu_with_program(&[0xA9, 0x42]); // LDA #$42
        cpu.step().unwrap();
        assert_eq!(cpu.a, 0x42);
        assert_eq!(cpu.pc, 0x0202);
    }

    #[test]
    fn test_step_unknown_opcode_errors() {
        let mut cpu = cpu_with_program(&[0x02]);
        assert!(matches!(cpu.step(), Err(Error::UnknownOpcode(0x02))));
    }

    #[test]
    fn test_push_pop_u16_round_trip() {
        let mut cpu = cpu_with_program(&[]);
        cpu.push_u16(0xBEEF);
        assert_eq!(cpu.pop_u16(), 0xBEEF);
    }

    #[test]
    fn test_reset_loads_pc_from_vector() {
        let bus = Bus::new_shared();
        bus.borrow_mut().write_u16(crate::memory::RESET_VECTOR, 0x0400);
        let mut cpu = Cpu::new(bus);
        cpu.reset();
        assert_eq!(cpu.pc, 0x0400);
    }
}
