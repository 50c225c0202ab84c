use apple1_cpu::cpu::Cpu;
use apple1_cpu::flags::StatusFlag;
use apple1_cpu::memory::Bus;

fn cpu_with_program(pc: u16, program: &[u8]) -> Cpu {
    let bus = Bus::new_shared();
    bus.borrow_mut().load(pc, program);
    let mut cpu = Cpu::new(bus);
    cpu.pc = pc;
    cpu
}

#[test]
fn test_load_then_store_round_trip() {
    let mut cpu = cpu_with_program(0x0000, &[0xA9, 0x42, 0x8D, 0x00, 0x20]);
    cpu.step().unwrap(); // LDA #$42
    cpu.step().unwrap(); // STA $2000
    assert_eq!(cpu.a, 0x42);
    assert_eq!(cpu.read_u8(0x2000), 0x42);
    assert!(!cpu.is_flag_set(StatusFlag::Zero));
    assert!(!cpu.is_flag_set(StatusFlag::Negative));
    assert_eq!(cpu.pc, 5);
}

#[test]
fn test_adc_with_carry_and_overflow() {
    let mut cpu = cpu_with_program(0x0000, &[0x69, 0x50]); // ADC #$50
    cpu.a = 0x50;
    cpu.set_flag(StatusFlag::Carry, false);
    cpu.step().unwrap();
    assert_eq!(cpu.a, 0xA0);
    assert!(cpu.is_flag_set(StatusFlag::Negative));
    assert!(cpu.is_flag_set(StatusFlag::Overflow));
    assert!(!cpu.is_flag_set(StatusFlag::Carry));
    assert!(!cpu.is_flag_set(StatusFlag::Zero));
}

#[test]
fn test_branch_taken_backwards() {
    let mut cpu = cpu_with_program(0x0010, &[0xF0, 0xFC]); // BEQ -4
    cpu.set_flag(StatusFlag::Zero, true);
    cpu.step().unwrap();
    assert_eq!(cpu.pc, 0x000E);
}

#[test]
fn test_jsr_rts_pair() {
    let mut cpu = cpu_with_program(0x0600, &[0x20, 0x09, 0x06]); // JSR $0609
    cpu.write_u8(0x0609, 0x60); // RTS
    cpu.sp = 0xFF;

    cpu.step().unwrap(); // JSR
    assert_eq!(cpu.pc, 0x0609);
    assert_eq!(cpu.sp, 0xFD);
    assert_eq!(cpu.read_u8(0x01FF), 0x06);
    assert_eq!(cpu.read_u8(0x01FE), 0x02);

    cpu.step().unwrap(); // RTS
    assert_eq!(cpu.pc, 0x0603);
    assert_eq!(cpu.sp, 0xFF);
}

#[test]
fn test_php_plp_round_trip_forces_unused_and_break() {
    let mut cpu = cpu_with_program(0x0000, &[0x08, 0x28]); // PHP, PLP
    cpu.p = 0b1100_1011;
    cpu.sp = 0xFF;

    cpu.step().unwrap(); // PHP
    cpu.step().unwrap(); // PLP

    assert_eq!(cpu.p, 0b1111_1011);
    assert_eq!(cpu.sp, 0xFF);
}

#[test]
fn test_brk_vectors_through_fffe() {
    let mut cpu = cpu_with_program(0x0300, &[0x00]); // BRK
    cpu.write_u16(0xFFFE, 0x1234);
    cpu.sp = 0xFF;

    cpu.step().unwrap();

    assert_eq!(cpu.pc, 0x1234);
    assert!(cpu.is_flag_set(StatusFlag::InterruptDisable));
    assert_eq!(cpu.sp, 0xFC);
}
