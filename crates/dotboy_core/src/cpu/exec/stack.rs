use crate::cpu::regs::RP2;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_push<B: Bus>(&mut self, bus: &mut B, p: u8) -> u32 {
        let value = self.regs.read16(RP2[usize::from(p)]);
        self.push_u16(bus, value);
        16
    }

    /// POP rp2. POP AF drops the low nibble of F via `set_af`.
    pub(super) fn exec_pop<B: Bus>(&mut self, bus: &mut B, p: u8) -> u32 {
        let value = self.pop_u16(bus);
        self.regs.write16(RP2[usize::from(p)], value);
        12
    }
}
