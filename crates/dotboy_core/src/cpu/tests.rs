use super::*;

struct TestBus {
    memory: [u8; 0x10000],
    invalid: bool,
}

impl Default for TestBus {
    fn default() -> Self {
        Self {
            memory: [0; 0x10000],
            invalid: false,
        }
    }
}

impl Bus for TestBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }

    fn mark_invalid(&mut self) {
        self.invalid = true;
    }
}

impl TestBus {
    fn load(&mut self, addr: u16, program: &[u8]) {
        let start = addr as usize;
        self.memory[start..start + program.len()].copy_from_slice(program);
    }
}

/// Run one whole instruction (or interrupt entry) and return the number of
/// ticks it occupied. Stops early if the core goes to sleep.
fn step(cpu: &mut Cpu, bus: &mut TestBus) -> u32 {
    cpu.tick(bus);
    let mut ticks = 1;
    while cpu.pending_cycles() > 0 && !cpu.halted {
        cpu.tick(bus);
        ticks += 1;
    }
    ticks
}

fn setup(program: &[u8]) -> (Cpu, TestBus) {
    let mut bus = TestBus::default();
    bus.load(0x0000, program);
    let mut cpu = Cpu::new();
    cpu.regs.sp = 0xFFFE;
    (cpu, bus)
}

#[test]
fn opcode_fields_split_byte() {
    let op = Opcode(0b11_010_110);
    assert_eq!(op.x(), 3);
    assert_eq!(op.y(), 2);
    assert_eq!(op.z(), 6);
    assert_eq!(op.p(), 1);
    assert_eq!(op.q(), 0);

    let op = Opcode(0x7E);
    assert_eq!((op.x(), op.y(), op.z()), (1, 7, 6));
    assert_eq!((op.p(), op.q()), (3, 1));
}

#[test]
fn nop_occupies_four_ticks() {
    let (mut cpu, mut bus) = setup(&[0x00]);

    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0001);
    assert_eq!(cpu.total_cycles(), 4);
}

#[test]
fn ld_16bit_and_basic_ld_indirect_work() {
    // LD BC,0x1234 ; LD (BC),A ; LD A,(BC)
    let (mut cpu, mut bus) = setup(&[0x01, 0x34, 0x12, 0x02, 0x0A]);
    cpu.regs.a = 0xAB;

    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.bc(), 0x1234);
    assert_eq!(cpu.regs.pc, 0x0003);

    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(bus.memory[0x1234], 0xAB);

    cpu.regs.a = 0x00;
    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.a, 0xAB);
}

#[test]
fn ld_r_r_charges_extra_for_hl_operand() {
    // LD B,C ; LD B,(HL) ; LD (HL),A
    let (mut cpu, mut bus) = setup(&[0x41, 0x46, 0x77]);
    cpu.regs.c = 0x11;
    cpu.regs.set_hl(0xC000);
    cpu.regs.a = 0x99;
    bus.memory[0xC000] = 0x42;

    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.b, 0x11);

    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.b, 0x42);

    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(bus.memory[0xC000], 0x99);
}

#[test]
fn ld_hl_increment_and_decrement_forms() {
    // LD (HL+),A ; LD A,(HL-)
    let (mut cpu, mut bus) = setup(&[0x22, 0x3A]);
    cpu.regs.set_hl(0xC100);
    cpu.regs.a = 0x5A;
    bus.memory[0xC101] = 0x77;

    step(&mut cpu, &mut bus);
    assert_eq!(bus.memory[0xC100], 0x5A);
    assert_eq!(cpu.regs.hl(), 0xC101);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x77);
    assert_eq!(cpu.regs.hl(), 0xC100);
}

#[test]
fn sub_of_equal_values_sets_zero_and_subtract_only() {
    // SUB 0x3C
    let (mut cpu, mut bus) = setup(&[0xD6, 0x3C]);
    cpu.regs.a = 0x3C;

    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.f, Flags::Z | Flags::N);
}

#[test]
fn inc_sets_half_carry_and_preserves_carry() {
    // INC A
    let (mut cpu, mut bus) = setup(&[0x3C]);
    cpu.regs.a = 0x0F;
    cpu.regs.f = Flags::C;

    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.a, 0x10);
    assert!(cpu.get_flag(Flags::H));
    assert!(!cpu.get_flag(Flags::Z));
    assert!(!cpu.get_flag(Flags::N));
    assert!(cpu.get_flag(Flags::C));
}

#[test]
fn inc_dec_on_hl_memory_cost_twelve() {
    // INC (HL) ; DEC (HL) ; DEC (HL)
    let (mut cpu, mut bus) = setup(&[0x34, 0x35, 0x35]);
    cpu.regs.set_hl(0xC000);
    bus.memory[0xC000] = 0xFF;

    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert_eq!(bus.memory[0xC000], 0x00);
    assert!(cpu.get_flag(Flags::Z));
    assert!(cpu.get_flag(Flags::H));

    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert_eq!(bus.memory[0xC000], 0xFF);
    assert!(cpu.get_flag(Flags::N));
    assert!(cpu.get_flag(Flags::H));

    step(&mut cpu, &mut bus);
    assert_eq!(bus.memory[0xC000], 0xFE);
    assert!(!cpu.get_flag(Flags::H));
}

#[test]
fn add_sets_half_carry_and_carry() {
    // ADD A,0x08 ; ADD A,0xF0
    let (mut cpu, mut bus) = setup(&[0xC6, 0x08, 0xC6, 0xF0]);
    cpu.regs.a = 0x08;

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x10);
    assert!(cpu.get_flag(Flags::H));
    assert!(!cpu.get_flag(Flags::C));

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.get_flag(Flags::Z));
    assert!(!cpu.get_flag(Flags::H));
    assert!(cpu.get_flag(Flags::C));
}

#[test]
fn adc_and_sbc_consume_carry() {
    // ADC A,0x00 ; SBC A,0x00
    let (mut cpu, mut bus) = setup(&[0xCE, 0x00, 0xDE, 0x00]);
    cpu.regs.a = 0x0F;
    cpu.regs.f = Flags::C;

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x10);
    assert!(cpu.get_flag(Flags::H));
    assert!(!cpu.get_flag(Flags::C));

    cpu.regs.a = 0x00;
    cpu.regs.f = Flags::C;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0xFF);
    assert!(cpu.get_flag(Flags::N));
    assert!(cpu.get_flag(Flags::H));
    assert!(cpu.get_flag(Flags::C));
}

#[test]
fn cp_sets_flags_without_touching_a() {
    // CP 0x01
    let (mut cpu, mut bus) = setup(&[0xFE, 0x01]);
    cpu.regs.a = 0x10;

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x10);
    assert_eq!(cpu.regs.f, Flags::N | Flags::H);
}

#[test]
fn logical_ops_set_expected_flags() {
    // AND B ; OR 0x00 ; XOR A
    let (mut cpu, mut bus) = setup(&[0xA0, 0xF6, 0x00, 0xAF]);
    cpu.regs.a = 0xF0;
    cpu.regs.b = 0x0F;

    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.f, Flags::Z | Flags::H);

    cpu.regs.a = 0x80;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.f, Flags::empty());

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.f, Flags::Z);
}

#[test]
fn add_hl_uses_bit_eleven_half_carry_and_keeps_zero() {
    // ADD HL,BC
    let (mut cpu, mut bus) = setup(&[0x09]);
    cpu.regs.set_hl(0x0FFF);
    cpu.regs.set_bc(0x0001);
    cpu.regs.f = Flags::Z;

    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.hl(), 0x1000);
    assert!(cpu.get_flag(Flags::H));
    assert!(!cpu.get_flag(Flags::C));
    assert!(cpu.get_flag(Flags::Z));
}

#[test]
fn sp_plus_signed_offset_uses_low_byte_carries() {
    // ADD SP,8 ; LD HL,SP-1
    let (mut cpu, mut bus) = setup(&[0xE8, 0x08, 0xF8, 0xFF]);
    cpu.regs.sp = 0xFFF8;

    assert_eq!(step(&mut cpu, &mut bus), 16);
    assert_eq!(cpu.regs.sp, 0x0000);
    assert_eq!(cpu.regs.f, Flags::H | Flags::C);

    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.hl(), 0xFFFF);
    assert_eq!(cpu.regs.f, Flags::empty());
}

#[test]
fn inc16_and_dec16_wrap_without_flags() {
    // INC BC ; DEC DE
    let (mut cpu, mut bus) = setup(&[0x03, 0x1B]);
    cpu.regs.set_bc(0xFFFF);
    cpu.regs.set_de(0x0000);

    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.bc(), 0x0000);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.de(), 0xFFFF);
    assert_eq!(cpu.regs.f, Flags::empty());
}

#[test]
fn push_and_pop_af_masks_low_flag_bits() {
    // PUSH BC ; POP AF
    let (mut cpu, mut bus) = setup(&[0xC5, 0xF1]);
    cpu.regs.set_bc(0x12FF);

    assert_eq!(step(&mut cpu, &mut bus), 16);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.memory[0xFFFD], 0x12);
    assert_eq!(bus.memory[0xFFFC], 0xFF);

    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.a, 0x12);
    assert_eq!(cpu.regs.f.bits(), 0xF0);
    assert_eq!(cpu.regs.af(), 0x12F0);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn ld_a16_sp_stores_little_endian() {
    // LD (0xC010),SP
    let (mut cpu, mut bus) = setup(&[0x08, 0x10, 0xC0]);
    cpu.regs.sp = 0xBEEF;

    assert_eq!(step(&mut cpu, &mut bus), 20);
    assert_eq!(bus.memory[0xC010], 0xEF);
    assert_eq!(bus.memory[0xC011], 0xBE);
}

#[test]
fn ldh_forms_address_high_page() {
    // LDH (0x80),A ; LDH A,(C)
    let (mut cpu, mut bus) = setup(&[0xE0, 0x80, 0xF2]);
    cpu.regs.a = 0x66;
    cpu.regs.c = 0x81;
    bus.memory[0xFF81] = 0x24;

    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert_eq!(bus.memory[0xFF80], 0x66);

    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.a, 0x24);
}

#[test]
fn call_and_ret_roundtrip() {
    let (mut cpu, mut bus) = setup(&[0xCD, 0x10, 0x00]);
    bus.memory[0x0010] = 0xC9; // RET

    assert_eq!(step(&mut cpu, &mut bus), 24);
    assert_eq!(cpu.regs.pc, 0x0010);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.memory[0xFFFC], 0x03);
    assert_eq!(bus.memory[0xFFFD], 0x00);

    assert_eq!(step(&mut cpu, &mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x0003);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn conditional_branches_charge_taken_and_not_taken_costs() {
    // JR NZ,+2 (not taken) ; JP Z,0x0020 (taken) ; at 0x20: RET C (not taken)
    let (mut cpu, mut bus) = setup(&[0x20, 0x02, 0xCA, 0x20, 0x00]);
    bus.memory[0x0020] = 0xD8;
    cpu.regs.f = Flags::Z;

    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.pc, 0x0002);

    assert_eq!(step(&mut cpu, &mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x0020);

    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.pc, 0x0021);
}

#[test]
fn jr_backward_loops_on_itself() {
    let (mut cpu, mut bus) = setup(&[]);
    bus.load(0x0100, &[0x18, 0xFE]);
    cpu.regs.pc = 0x0100;

    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.pc, 0x0100);
}

#[test]
fn rst_and_reti() {
    let (mut cpu, mut bus) = setup(&[]);
    bus.load(0x0100, &[0xFF]);
    bus.memory[0x0038] = 0xD9; // RETI
    cpu.regs.pc = 0x0100;

    assert_eq!(step(&mut cpu, &mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x0038);

    assert_eq!(step(&mut cpu, &mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x0101);
    assert!(cpu.ime);
}

#[test]
fn cb_swap_bit_and_set() {
    // SWAP B ; BIT 7,(HL) ; SET 0,(HL)
    let (mut cpu, mut bus) = setup(&[0xCB, 0x30, 0xCB, 0x7E, 0xCB, 0xC6]);
    cpu.regs.b = 0xF0;
    cpu.regs.set_hl(0xC000);
    cpu.regs.f = Flags::C;

    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.b, 0x0F);
    assert_eq!(cpu.regs.f, Flags::empty());

    cpu.regs.f = Flags::C;
    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.f, Flags::Z | Flags::H | Flags::C);

    assert_eq!(step(&mut cpu, &mut bus), 16);
    assert_eq!(bus.memory[0xC000], 0x01);
}

#[test]
fn cb_shifts_report_carry_out() {
    // SRA A ; SRL A ; RL A
    let (mut cpu, mut bus) = setup(&[0xCB, 0x2F, 0xCB, 0x3F, 0xCB, 0x17]);
    cpu.regs.a = 0x81;

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0xC0);
    assert!(cpu.get_flag(Flags::C));

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x60);
    assert!(!cpu.get_flag(Flags::C));

    cpu.regs.f = Flags::C;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0xC1);
    assert!(!cpu.get_flag(Flags::C));
}

#[test]
fn rla_rotates_through_carry_and_clears_zero() {
    let (mut cpu, mut bus) = setup(&[0x17]);
    cpu.regs.a = 0x80;

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.f, Flags::C);
}

#[test]
fn daa_cpl_scf_ccf_behaviour() {
    // ADD A,0x38 ; DAA ; CPL ; SCF ; CCF
    let (mut cpu, mut bus) = setup(&[0xC6, 0x38, 0x27, 0x2F, 0x37, 0x3F]);
    cpu.regs.a = 0x45;

    step(&mut cpu, &mut bus);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x83);
    assert!(!cpu.get_flag(Flags::C));

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x7C);
    assert!(cpu.get_flag(Flags::N) && cpu.get_flag(Flags::H));

    step(&mut cpu, &mut bus);
    assert!(cpu.get_flag(Flags::C));
    assert!(!cpu.get_flag(Flags::N) && !cpu.get_flag(Flags::H));

    step(&mut cpu, &mut bus);
    assert!(!cpu.get_flag(Flags::C));
}

#[test]
fn interrupt_priority_and_vectors() {
    assert_eq!(
        (Interrupts::TIMER | Interrupts::JOYPAD).highest_priority(),
        Some(Interrupts::TIMER)
    );
    assert_eq!(Interrupts::empty().highest_priority(), None);

    let vectors: Vec<u16> = [
        Interrupts::VBLANK,
        Interrupts::LCD_STAT,
        Interrupts::TIMER,
        Interrupts::SERIAL,
        Interrupts::JOYPAD,
    ]
    .iter()
    .map(|line| line.vector())
    .collect();
    assert_eq!(vectors, [0x40, 0x48, 0x50, 0x58, 0x60]);
}

#[test]
fn interrupt_dispatch_takes_lowest_pending_line() {
    let (mut cpu, mut bus) = setup(&[]);
    bus.memory[0xFFFF] = 0x11;
    bus.memory[0xFF0F] = 0x11;
    cpu.ime = true;
    cpu.regs.pc = 0x1234;
    cpu.regs.sp = 0xD000;

    assert_eq!(step(&mut cpu, &mut bus), 20);
    assert_eq!(cpu.regs.pc, 0x0040);
    assert_eq!(bus.memory[0xFF0F], 0x10);
    assert!(!cpu.ime);
    assert_eq!(cpu.regs.sp, 0xCFFE);
    assert_eq!(bus.memory[0xCFFF], 0x12);
    assert_eq!(bus.memory[0xCFFE], 0x34);
}

#[test]
fn masked_or_disabled_interrupts_are_not_taken() {
    let (mut cpu, mut bus) = setup(&[0x00, 0x00]);
    bus.memory[0xFF0F] = 0x04;
    bus.memory[0xFFFF] = 0x01;
    cpu.ime = true;

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.pc, 0x0001);

    bus.memory[0xFFFF] = 0x04;
    cpu.ime = false;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.pc, 0x0002);
    assert_eq!(bus.memory[0xFF0F], 0x04);
}

#[test]
fn ei_takes_effect_after_next_instruction() {
    // EI ; NOP ; NOP
    let (mut cpu, mut bus) = setup(&[0xFB, 0x00, 0x00]);
    bus.memory[0xFFFF] = 0x01;
    bus.memory[0xFF0F] = 0x01;

    step(&mut cpu, &mut bus);
    assert!(!cpu.ime);
    assert_eq!(cpu.regs.pc, 0x0001);

    step(&mut cpu, &mut bus);
    assert!(cpu.ime);
    assert_eq!(cpu.regs.pc, 0x0002);

    assert_eq!(step(&mut cpu, &mut bus), 20);
    assert_eq!(cpu.regs.pc, 0x0040);
    assert_eq!(bus.memory[0xFFFC], 0x02);
}

#[test]
fn di_right_after_ei_cancels_enable() {
    // EI ; DI ; NOP
    let (mut cpu, mut bus) = setup(&[0xFB, 0xF3, 0x00]);

    step(&mut cpu, &mut bus);
    step(&mut cpu, &mut bus);
    assert!(!cpu.ime);
    step(&mut cpu, &mut bus);
    assert!(!cpu.ime);
}

#[test]
fn halt_sleeps_until_an_enabled_line_is_raised() {
    // HALT ; NOP
    let (mut cpu, mut bus) = setup(&[0x76, 0x00]);
    bus.memory[0xFFFF] = 0x04;

    step(&mut cpu, &mut bus);
    assert!(cpu.halted);
    for _ in 0..100 {
        cpu.tick(&mut bus);
    }
    assert!(cpu.halted);
    assert_eq!(cpu.regs.pc, 0x0001);

    // IME is clear, so waking resumes execution without a dispatch.
    bus.memory[0xFF0F] = 0x04;
    step(&mut cpu, &mut bus);
    assert!(!cpu.halted);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.pc, 0x0002);
}

#[test]
fn halt_with_ime_set_services_interrupt_on_wake() {
    let (mut cpu, mut bus) = setup(&[0x76]);
    bus.memory[0xFFFF] = 0x01;
    cpu.ime = true;

    step(&mut cpu, &mut bus);
    assert!(cpu.halted);

    bus.memory[0xFF0F] = 0x01;
    step(&mut cpu, &mut bus);
    assert_eq!(step(&mut cpu, &mut bus), 20);
    assert_eq!(cpu.regs.pc, 0x0040);
    assert_eq!(bus.memory[0xFFFC], 0x01);
}

#[test]
fn halt_bug_repeats_next_opcode_byte() {
    // HALT ; INC A ; NOP
    let (mut cpu, mut bus) = setup(&[0x76, 0x3C, 0x00]);
    bus.memory[0xFFFF] = 0x01;
    bus.memory[0xFF0F] = 0x01;

    step(&mut cpu, &mut bus);
    assert!(!cpu.halted);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 1);
    assert_eq!(cpu.regs.pc, 0x0001);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 2);
    assert_eq!(cpu.regs.pc, 0x0002);
}

#[test]
fn stop_consumes_padding_byte() {
    let (mut cpu, mut bus) = setup(&[0x10, 0x00]);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.pc, 0x0002);
    assert!(cpu.is_stopped());

    cpu.resume();
    assert!(!cpu.is_stopped());
}

#[test]
fn undefined_opcode_locks_core_and_flags_bus() {
    let (mut cpu, mut bus) = setup(&[0x00, 0xD3, 0x00]);

    step(&mut cpu, &mut bus);
    step(&mut cpu, &mut bus);
    assert!(bus.invalid);
    assert!(cpu.is_locked());
    assert_eq!(cpu.invalid_opcode(), Some((0xD3, 0x0001)));

    for _ in 0..16 {
        cpu.tick(&mut bus);
    }
    assert_eq!(cpu.regs.pc, 0x0002);
}

#[test]
fn every_opcode_hole_is_undefined() {
    for opcode in [
        0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
    ] {
        let (mut cpu, mut bus) = setup(&[opcode]);
        step(&mut cpu, &mut bus);
        assert!(cpu.is_locked(), "opcode {opcode:02X} should lock the core");
        assert!(bus.invalid);
    }
}

#[test]
fn power_up_zeroes_state_and_enables_boot_overlay() {
    let mut bus = TestBus::default();
    bus.memory[0xFF50] = 0x01;
    let mut cpu = Cpu::new();
    cpu.regs.a = 0x55;
    cpu.ime = true;

    cpu.power_up(&mut bus);
    assert_eq!(cpu.regs, Registers::default());
    assert!(!cpu.ime);
    assert_eq!(bus.memory[0xFF50], 0x00);

    cpu.skip_boot_rom();
    assert_eq!(cpu.regs.af(), 0x01B0);
    assert_eq!(cpu.regs.bc(), 0x0013);
    assert_eq!(cpu.regs.de(), 0x00D8);
    assert_eq!(cpu.regs.hl(), 0x014D);
    assert_eq!(cpu.regs.sp, 0xFFFE);
    assert_eq!(cpu.regs.pc, 0x0100);
}
