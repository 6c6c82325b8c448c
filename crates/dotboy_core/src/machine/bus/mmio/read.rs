use crate::cpu::{IE_ADDR, IF_ADDR};
use crate::machine::OPEN_BUS;

use super::super::GameBoyBus;
use super::BOOT_LATCH;

impl GameBoyBus {
    pub(super) fn read8_mmio_impl(&mut self, addr: u16) -> u8 {
        // VRAM, OAM and the LCD registers apply their own visibility rules.
        if let Some(value) = self.ppu.read(addr) {
            return value;
        }
        if let Some(value) = self.boot_rom_mapped(addr) {
            return value;
        }

        match addr {
            0x0000..=0x7FFF | 0xA000..=0xBFFF => self.cartridge.read(addr),

            // Echo RAM 0xE000..0xFDFF mirrors 0xC000..0xDDFF.
            0xC000..=0xFDFF => self.wram[usize::from(addr & 0x1FFF)],

            0xFF00 => self.joypad.read(),
            0xFF04..=0xFF07 => self.timer.read(addr),

            // Upper three IF bits are unused and read as 1.
            IF_ADDR => self.if_reg.bits() | 0b1110_0000,
            BOOT_LATCH => self.boot_latch,

            0xFF80..=0xFFFE => self.hram[usize::from(addr - 0xFF80)],
            IE_ADDR => self.ie_reg,

            // Unusable 0xFEA0..0xFEFF and every unimplemented I/O port.
            _ => OPEN_BUS,
        }
    }
}
