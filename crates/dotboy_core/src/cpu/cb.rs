use super::helpers::HL_INDIRECT;
use super::{Bus, Cpu, Flags, Opcode};

impl Cpu {
    /// Execute a CB-prefixed instruction (rotates, shifts, bit operations).
    ///
    /// Costs 8 cycles on a register, 16 on (HL), except BIT n,(HL) which
    /// only reads and costs 12.
    pub(super) fn step_cb<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let op = Opcode(self.fetch8(bus));
        let (y, z) = (op.y(), op.z());
        let value = self.read_reg8(bus, z);
        let on_hl = z == HL_INDIRECT;

        match op.x() {
            0 => {
                let result = self.alu_rotate(y, value);
                self.write_reg8(bus, z, result);
            }
            1 => {
                self.set_flag(Flags::Z, value & (1 << y) == 0);
                self.set_flag(Flags::N, false);
                self.set_flag(Flags::H, true);
                return if on_hl { 12 } else { 8 };
            }
            2 => self.write_reg8(bus, z, value & !(1 << y)),
            _ => self.write_reg8(bus, z, value | (1 << y)),
        }

        if on_hl {
            16
        } else {
            8
        }
    }
}
