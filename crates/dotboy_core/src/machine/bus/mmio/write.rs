use crate::cpu::{Interrupts, IE_ADDR, IF_ADDR};
use crate::machine::ppu::DMA_REGISTER;

use super::super::GameBoyBus;
use super::BOOT_LATCH;

impl GameBoyBus {
    pub(super) fn write8_mmio_impl(&mut self, addr: u16, value: u8) {
        if self.ppu.write(addr, value) {
            if addr == DMA_REGISTER {
                self.do_oam_dma(value);
            }
            return;
        }

        match addr {
            // ROM writes latch bank-controller registers.
            0x0000..=0x7FFF | 0xA000..=0xBFFF => self.cartridge.write(addr, value),

            0xC000..=0xFDFF => self.wram[usize::from(addr & 0x1FFF)] = value,

            0xFF00 => self.joypad.write(value),
            0xFF04..=0xFF07 => self.timer.write(addr, value),

            IF_ADDR => self.if_reg = Interrupts::from_bits_truncate(value),
            BOOT_LATCH => {
                if self.boot_latch == 0 && value != 0 {
                    log::debug!("GB bus: boot image unmapped");
                    self.boot_latch = value;
                }
            }

            0xFF80..=0xFFFE => self.hram[usize::from(addr - 0xFF80)] = value,
            IE_ADDR => self.ie_reg = value,

            // Nothing stores the byte; later reads see the open-bus value.
            _ => {}
        }
    }
}
