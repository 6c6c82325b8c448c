use super::{Bus, Cpu, Registers};

/// Boot-ROM-disable latch.
const BOOT_ROM_LATCH: u16 = 0xFF50;

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            stopped: false,
            halt_bug: false,
            ime_enable_pending: false,
            pending_cycles: 0,
            total_cycles: 0,
            locked: None,
        }
    }

    /// Reset the core to its power-on state and map the boot ROM.
    ///
    /// All registers are zeroed and execution starts at 0x0000, where the
    /// boot image (if any) lives until software writes the latch at 0xFF50.
    pub fn power_up<B: Bus>(&mut self, bus: &mut B) {
        *self = Self::new();
        bus.write8(BOOT_ROM_LATCH, 0x00);
    }

    /// Jump straight to the state the DMG boot ROM hands to cartridge code.
    ///
    /// Used when no boot image is installed. Per Pan Docs, IME is clear at
    /// 0x0100; the game is responsible for enabling interrupts.
    pub fn skip_boot_rom(&mut self) {
        self.regs = Registers::dmg_post_boot();
        self.ime = false;
    }
}
