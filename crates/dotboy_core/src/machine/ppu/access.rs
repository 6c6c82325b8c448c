use super::{Mode, Ppu, OAM_SIZE};
use crate::machine::OPEN_BUS;

impl Ppu {
    /// VRAM is locked while the PPU is drawing (mode 3) with the LCD on.
    pub(super) fn vram_accessible(&self) -> bool {
        !self.display_enabled() || self.mode != Mode::Drawing
    }

    /// OAM is only reachable in HBlank and VBlank with the LCD on.
    pub(super) fn oam_accessible(&self) -> bool {
        !self.display_enabled() || matches!(self.mode, Mode::HBlank | Mode::VBlank)
    }

    /// Read an address the PPU owns. `None` means the address belongs to
    /// someone else.
    pub(crate) fn read(&self, addr: u16) -> Option<u8> {
        let value = match addr {
            0x8000..=0x9FFF if self.vram_accessible() => self.vram[usize::from(addr - 0x8000)],
            0xFE00..=0xFE9F if self.oam_accessible() => self.oam[usize::from(addr - 0xFE00)],
            0x8000..=0x9FFF | 0xFE00..=0xFE9F => OPEN_BUS,
            0xFF40..=0xFF4B => self.read_register(addr),
            _ => return None,
        };
        Some(value)
    }

    /// Write an address the PPU owns. Returns `false` when the address
    /// belongs to someone else; blocked writes are dropped but still claimed.
    pub(crate) fn write(&mut self, addr: u16, value: u8) -> bool {
        match addr {
            0x8000..=0x9FFF => {
                if self.vram_accessible() {
                    self.vram[usize::from(addr - 0x8000)] = value;
                }
            }
            0xFE00..=0xFE9F => {
                if self.oam_accessible() {
                    self.oam[usize::from(addr - 0xFE00)] = value;
                }
            }
            0xFF40..=0xFF4B => self.write_register(addr, value),
            _ => return false,
        }
        true
    }

    /// OAM store used by DMA; not subject to the mode lock.
    pub(crate) fn write_oam_dma(&mut self, index: usize, value: u8) {
        if index < OAM_SIZE {
            self.oam[index] = value;
        }
    }
}
