use crate::cpu::helpers::HL_INDIRECT;
use crate::cpu::regs::RP;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// LD r,r' (x=1). Either side may be (HL); HALT is decoded separately.
    pub(super) fn exec_ld_r_r<B: Bus>(&mut self, bus: &mut B, dst: u8, src: u8) -> u32 {
        let value = self.read_reg8(bus, src);
        self.write_reg8(bus, dst, value);
        if dst == HL_INDIRECT || src == HL_INDIRECT {
            8
        } else {
            4
        }
    }

    /// LD r,d8 / LD (HL),d8.
    pub(super) fn exec_ld_r_d8<B: Bus>(&mut self, bus: &mut B, dst: u8) -> u32 {
        let value = self.fetch8(bus);
        self.write_reg8(bus, dst, value);
        if dst == HL_INDIRECT {
            12
        } else {
            8
        }
    }

    /// LD rp,d16.
    pub(super) fn exec_ld_rp_d16<B: Bus>(&mut self, bus: &mut B, p: u8) -> u32 {
        let value = self.fetch16(bus);
        self.regs.write16(RP[usize::from(p)], value);
        12
    }

    /// LD (BC),A / LD (DE),A / LD (HL+),A / LD (HL-),A and the loads back
    /// into A, selected by `q`.
    pub(super) fn exec_ld_indirect<B: Bus>(&mut self, bus: &mut B, p: u8, q: u8) -> u32 {
        let addr = match p {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            _ => {
                let hl = self.regs.hl();
                let next = if p == 2 {
                    hl.wrapping_add(1)
                } else {
                    hl.wrapping_sub(1)
                };
                self.regs.set_hl(next);
                hl
            }
        };

        if q == 0 {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
        8
    }

    /// LD (a16),SP: stores SP little-endian.
    pub(super) fn exec_ld_a16_sp<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = self.fetch16(bus);
        let [lo, hi] = self.regs.sp.to_le_bytes();
        bus.write8(addr, lo);
        bus.write8(addr.wrapping_add(1), hi);
        20
    }

    pub(super) fn exec_ldh_a8_a<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = 0xFF00 | u16::from(self.fetch8(bus));
        bus.write8(addr, self.regs.a);
        12
    }

    pub(super) fn exec_ldh_a_a8<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = 0xFF00 | u16::from(self.fetch8(bus));
        self.regs.a = bus.read8(addr);
        12
    }

    pub(super) fn exec_ldh_c_a<B: Bus>(&mut self, bus: &mut B) -> u32 {
        bus.write8(0xFF00 | u16::from(self.regs.c), self.regs.a);
        8
    }

    pub(super) fn exec_ldh_a_c<B: Bus>(&mut self, bus: &mut B) -> u32 {
        self.regs.a = bus.read8(0xFF00 | u16::from(self.regs.c));
        8
    }

    pub(super) fn exec_ld_a16_a<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = self.fetch16(bus);
        bus.write8(addr, self.regs.a);
        16
    }

    pub(super) fn exec_ld_a_a16<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = self.fetch16(bus);
        self.regs.a = bus.read8(addr);
        16
    }

    pub(super) fn exec_ld_sp_hl(&mut self) -> u32 {
        self.regs.sp = self.regs.hl();
        8
    }

    pub(super) fn exec_ld_hl_sp_e<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let imm = self.fetch8(bus);
        let value = self.alu_add_sp_signed(imm);
        self.regs.set_hl(value);
        12
    }
}
