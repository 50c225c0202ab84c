use crate::cpu::Cpu;
use crate::error::Error;
use crate::opcodes::Mnemonic;

/// The 13 addressing modes the 6502 supports. `Accumulator` and `Implied` carry no
/// effective address; every other mode resolves to a 16-bit address the executor reads
/// or writes through the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Accumulator,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Immediate,
    Implied,
    Indirect,
    IndirectX,
    IndirectY,
    Relative,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
}

/// Resolves `mode`'s effective address, consuming whatever operand bytes it implies from
/// the instruction stream at the CPU's current PC. `Accumulator` and `Implied` have no
/// address to resolve and always fail; callers for those modes must not invoke this.
pub fn effective_address(cpu: &mut Cpu, mode: Mode, mnemonic: Mnemonic) -> Result<u16, Error> {
    match mode {
        Mode::Accumulator | Mode::Implied => Err(Error::UnsupportedMode { mode, mnemonic }),

        Mode::Immediate => {
            let addr = cpu.pc;
            cpu.pc = cpu.pc.wrapping_add(1);
            Ok(addr)
        }

        Mode::ZeroPage => Ok(cpu.next_u8() as u16),
        Mode::ZeroPageX => Ok(cpu.next_u8().wrapping_add(cpu.x) as u16),
        Mode::ZeroPageY => Ok(cpu.next_u8().wrapping_add(cpu.y) as u16),

        Mode::Absolute => Ok(cpu.next_u16()),
        Mode::AbsoluteX => Ok(cpu.next_u16().wrapping_add(cpu.x as u16)),
        Mode::AbsoluteY => Ok(cpu.next_u16().wrapping_add(cpu.y as u16)),

        // Operand is a signed displacement relative to the address of the instruction
        // immediately following the branch.
        Mode::Relative => {
            let offset = cpu.next_u8() as i8;
            Ok(cpu.pc.wrapping_add(offset as i16 as u16))
        }

        // Faithfully reproduces the page-boundary bug: when the pointer's low byte is
        // 0xFF, the high byte of the target is read from the start of the same page
        // instead of crossing into the next one.
        Mode::Indirect => {
            let ptr = cpu.next_u16();
            let low = cpu.read_u8(ptr);
            let high_addr = if ptr & 0x00FF == 0x00FF {
                ptr & 0xFF00
            } else {
                ptr.wrapping_add(1)
            };
            let high = cpu.read_u8(high_addr);
            Ok(u16::from_le_bytes([low, high]))
        }

        // Pointer lives at (zp + X), wrapping within the zero page; the pointer itself is
        // not indexed any further.
        Mode::IndirectX => {
            let zp = cpu.next_u8().wrapping_add(cpu.x);
            Ok(read_zero_page_pointer(cpu, zp))
        }

        // Pointer lives at zp, wrapping within the zero page; the resolved 16-bit pointer
        // is then indexed by Y and may cross a page boundary.
        Mode::IndirectY => {
            let zp = cpu.next_u8();
            let base = read_zero_page_pointer(cpu, zp);
            Ok(base.wrapping_add(cpu.y as u16))
        }
    }
}

fn read_zero_page_pointer(cpu: &mut Cpu, zp: u8) -> u16 {
    let low = cpu.read_u8(zp as u16);
    let high = cpu.read_u8(zp.wrapping_add(1) as u16);
    u16::from_le_bytes([low, high])
}
