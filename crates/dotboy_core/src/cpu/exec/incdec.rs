use crate::cpu::helpers::HL_INDIRECT;
use crate::cpu::regs::RP;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_inc8<B: Bus>(&mut self, bus: &mut B, y: u8) -> u32 {
        let value = self.read_reg8(bus, y);
        let result = self.alu_inc8(value);
        self.write_reg8(bus, y, result);
        if y == HL_INDIRECT {
            12
        } else {
            4
        }
    }

    pub(super) fn exec_dec8<B: Bus>(&mut self, bus: &mut B, y: u8) -> u32 {
        let value = self.read_reg8(bus, y);
        let result = self.alu_dec8(value);
        self.write_reg8(bus, y, result);
        if y == HL_INDIRECT {
            12
        } else {
            4
        }
    }

    /// INC rp. No flags.
    pub(super) fn exec_inc16(&mut self, p: u8) -> u32 {
        let reg = RP[usize::from(p)];
        let value = self.regs.read16(reg).wrapping_add(1);
        self.regs.write16(reg, value);
        8
    }

    /// DEC rp. No flags.
    pub(super) fn exec_dec16(&mut self, p: u8) -> u32 {
        let reg = RP[usize::from(p)];
        let value = self.regs.read16(reg).wrapping_sub(1);
        self.regs.write16(reg, value);
        8
    }
}
