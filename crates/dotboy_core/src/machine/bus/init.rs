use crate::cpu::Interrupts;

use super::GameBoyBus;

impl GameBoyBus {
    /// I/O state the DMG boot ROM leaves behind at PC=0x0100.
    ///
    /// Used when no boot image is installed. IF has the VBlank request set
    /// and the boot image latch reads back as disabled.
    pub(in crate::machine) fn apply_post_boot_state(&mut self) {
        self.ppu.apply_post_boot_state();
        self.if_reg = Interrupts::VBLANK;
        self.ie_reg = 0;
        self.boot_latch = 0x01;
    }
}
