use crate::machine::ppu::OAM_SIZE;

use super::GameBoyBus;

impl GameBoyBus {
    /// OAM DMA: copy 160 bytes from XX00..XX9F to FE00..FE9F.
    ///
    /// The transfer completes immediately. Sources are read through the bus
    /// so cartridge and WRAM mappings apply.
    pub(super) fn do_oam_dma(&mut self, value: u8) {
        let base = u16::from(value) << 8;
        log::debug!("GB bus: OAM DMA from {base:#06X}");
        for i in 0..OAM_SIZE {
            let byte = self.read8_mmio(base.wrapping_add(i as u16));
            self.ppu.write_oam_dma(i, byte);
        }
    }
}
