use super::{Cpu, Flags};

impl Cpu {
    /// Dispatch the `alu[y]` table against A:
    /// ADD, ADC, SUB, SBC, AND, XOR, OR, CP.
    pub(super) fn alu_op(&mut self, op: u8, value: u8) {
        match op & 0x07 {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false, true),
            3 => self.alu_sub(value, true, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => self.alu_sub(value, false, false),
        }
    }

    /// 8-bit ADD/ADC on A. H is the carry out of bit 3.
    fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = u8::from(use_carry && self.get_flag(Flags::C));

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = u16::from(a) + u16::from(value) + u16::from(carry_in);
        let result = full as u8;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::H, half > 0x0F);
        self.set_flag(Flags::C, full > 0xFF);
    }

    /// 8-bit SUB/SBC/CP on A. H is a borrow into bit 4.
    ///
    /// `store` is false for CP, which only updates flags.
    fn alu_sub(&mut self, value: u8, use_carry: bool, store: bool) {
        let a = self.regs.a;
        let carry_in = i16::from(use_carry && self.get_flag(Flags::C));

        let half = i16::from(a & 0x0F) - i16::from(value & 0x0F) - carry_in;
        let full = i16::from(a) - i16::from(value) - carry_in;
        let result = full as u8;
        if store {
            self.regs.a = result;
        }

        self.clear_flags();
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::N, true);
        self.set_flag(Flags::H, half < 0);
        self.set_flag(Flags::C, full < 0);
    }

    #[inline]
    fn alu_and(&mut self, value: u8) {
        self.regs.a &= value;
        self.regs.f = Flags::H;
        self.set_flag(Flags::Z, self.regs.a == 0);
    }

    #[inline]
    fn alu_or(&mut self, value: u8) {
        self.regs.a |= value;
        self.clear_flags();
        self.set_flag(Flags::Z, self.regs.a == 0);
    }

    #[inline]
    fn alu_xor(&mut self, value: u8) {
        self.regs.a ^= value;
        self.clear_flags();
        self.set_flag(Flags::Z, self.regs.a == 0);
    }

    /// Decimal adjust A after a BCD add or subtract. N is left alone.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let mut adjust: u8 = if self.get_flag(Flags::C) { 0x60 } else { 0x00 };
        if self.get_flag(Flags::H) {
            adjust |= 0x06;
        }

        if self.get_flag(Flags::N) {
            a = a.wrapping_sub(adjust);
        } else {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        }

        self.set_flag(Flags::C, adjust >= 0x60);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::Z, a == 0);
        self.regs.a = a;
    }

    /// INC r / INC (HL): C is preserved.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, (value & 0x0F) == 0x0F);
        result
    }

    /// DEC r / DEC (HL): C is preserved.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::N, true);
        self.set_flag(Flags::H, (value & 0x0F) == 0);
        result
    }

    /// ADD HL,rr: Z preserved, H from bit 11, C from bit 15.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flags::C, u32::from(hl) + u32::from(value) > 0xFFFF);
        self.regs.set_hl(hl.wrapping_add(value));
    }

    /// SP plus a signed immediate (ADD SP,e and LD HL,SP+e).
    ///
    /// Z and N are cleared; H and C come from the unsigned low-byte add.
    #[inline]
    pub(super) fn alu_add_sp_signed(&mut self, imm8: u8) -> u16 {
        let base = self.regs.sp;
        let offset = imm8 as i8 as i16 as u16;
        self.clear_flags();
        self.set_flag(Flags::H, (base & 0x000F) + (offset & 0x000F) > 0x000F);
        self.set_flag(Flags::C, (base & 0x00FF) + (offset & 0x00FF) > 0x00FF);
        base.wrapping_add(offset)
    }

    /// The `rot[y]` table shared by CB-prefixed shifts and the accumulator
    /// rotates: RLC, RRC, RL, RR, SLA, SRA, SWAP, SRL.
    ///
    /// Sets Z from the result and C from the bit shifted out; N and H clear.
    pub(super) fn alu_rotate(&mut self, op: u8, value: u8) -> u8 {
        let carry_in = self.get_flag(Flags::C);
        let (result, carry) = match op & 0x07 {
            0 => (value.rotate_left(1), value & 0x80 != 0),
            1 => (value.rotate_right(1), value & 0x01 != 0),
            2 => ((value << 1) | u8::from(carry_in), value & 0x80 != 0),
            3 => ((value >> 1) | (u8::from(carry_in) << 7), value & 0x01 != 0),
            4 => (value << 1, value & 0x80 != 0),
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            6 => (value.rotate_left(4), false),
            _ => (value >> 1, value & 0x01 != 0),
        };

        self.clear_flags();
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::C, carry);
        result
    }
}
