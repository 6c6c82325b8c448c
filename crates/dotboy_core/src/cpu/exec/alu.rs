use crate::cpu::helpers::HL_INDIRECT;
use crate::cpu::regs::RP;
use crate::cpu::{Bus, Cpu, Flags};

impl Cpu {
    /// `alu[y] r[z]` (x=2).
    pub(super) fn exec_alu_r<B: Bus>(&mut self, bus: &mut B, y: u8, z: u8) -> u32 {
        let value = self.read_reg8(bus, z);
        self.alu_op(y, value);
        if z == HL_INDIRECT {
            8
        } else {
            4
        }
    }

    /// `alu[y] d8`.
    pub(super) fn exec_alu_d8<B: Bus>(&mut self, bus: &mut B, y: u8) -> u32 {
        let value = self.fetch8(bus);
        self.alu_op(y, value);
        8
    }

    pub(super) fn exec_add_hl_rp(&mut self, p: u8) -> u32 {
        let value = self.regs.read16(RP[usize::from(p)]);
        self.alu_add16_hl(value);
        8
    }

    pub(super) fn exec_add_sp_e<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let imm = self.fetch8(bus);
        self.regs.sp = self.alu_add_sp_signed(imm);
        16
    }

    /// Block-0 column 7: RLCA, RRCA, RLA, RRA, DAA, CPL, SCF, CCF.
    pub(super) fn exec_accumulator_op(&mut self, y: u8) -> u32 {
        match y {
            0..=3 => {
                // Same as the CB rotates, except Z is always cleared.
                self.regs.a = self.alu_rotate(y, self.regs.a);
                self.set_flag(Flags::Z, false);
            }
            4 => self.alu_daa(),
            5 => {
                self.regs.a = !self.regs.a;
                self.set_flag(Flags::N, true);
                self.set_flag(Flags::H, true);
            }
            6 => {
                self.set_flag(Flags::N, false);
                self.set_flag(Flags::H, false);
                self.set_flag(Flags::C, true);
            }
            _ => {
                let carry = self.get_flag(Flags::C);
                self.set_flag(Flags::N, false);
                self.set_flag(Flags::H, false);
                self.set_flag(Flags::C, !carry);
            }
        }
        4
    }
}
