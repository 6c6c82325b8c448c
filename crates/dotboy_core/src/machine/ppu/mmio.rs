use super::registers::{Lcdc, Mode, Stat};
use super::Ppu;

/// STAT bit 7 is unused and reads back as 1.
const STAT_UNUSED_BIT: u8 = 0x80;

impl Ppu {
    pub(super) fn read_register(&self, addr: u16) -> u8 {
        match addr {
            0xFF40 => self.lcdc.bits(),
            0xFF41 => {
                let mode = if self.display_enabled() {
                    self.mode
                } else {
                    Mode::HBlank
                };
                STAT_UNUSED_BIT | self.stat.bits() | mode.bits()
            }
            0xFF42 => self.scy,
            0xFF43 => self.scx,
            0xFF44 => self.ly,
            0xFF45 => self.lyc,
            0xFF46 => self.dma,
            0xFF47 => self.bgp,
            0xFF48 => self.obp0,
            0xFF49 => self.obp1,
            0xFF4A => self.wy,
            _ => self.wx,
        }
    }

    /// LY is read-only and STAT only takes its interrupt-select bits.
    /// Writing FF46 only latches the source; the bus performs the copy.
    pub(super) fn write_register(&mut self, addr: u16, value: u8) {
        match addr {
            0xFF40 => {
                let lcdc = Lcdc::from_bits_retain(value);
                if lcdc.contains(Lcdc::DISPLAY_ENABLE) != self.display_enabled() {
                    log::debug!(
                        "GB PPU: LCD {} at ly={} dot={}",
                        if lcdc.contains(Lcdc::DISPLAY_ENABLE) { "on" } else { "off" },
                        self.ly,
                        self.line_dot
                    );
                }
                self.lcdc = lcdc;
            }
            0xFF41 => {
                let keep = self.stat.difference(Stat::WRITABLE);
                self.stat = keep | (Stat::from_bits_truncate(value) & Stat::WRITABLE);
            }
            0xFF42 => self.scy = value,
            0xFF43 => self.scx = value,
            0xFF44 => {}
            0xFF45 => self.lyc = value,
            0xFF46 => self.dma = value,
            0xFF47 => self.bgp = value,
            0xFF48 => self.obp0 = value,
            0xFF49 => self.obp1 = value,
            0xFF4A => self.wy = value,
            _ => self.wx = value,
        }
    }
}
