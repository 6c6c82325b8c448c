use super::Timer;

/// Unused TAC bits read back as 1.
const TAC_UNUSED_BITS: u8 = 0xF8;

impl Timer {
    pub(in super::super) fn read(&self, addr: u16) -> u8 {
        match addr {
            0xFF04 => self.div,
            0xFF05 => self.tima,
            0xFF06 => self.tma,
            _ => self.tac | TAC_UNUSED_BITS,
        }
    }

    /// Any write to DIV clears it.
    pub(in super::super) fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0xFF04 => self.div = 0,
            0xFF05 => self.tima = value,
            0xFF06 => self.tma = value,
            _ => self.tac = value & 0x07,
        }
    }
}
