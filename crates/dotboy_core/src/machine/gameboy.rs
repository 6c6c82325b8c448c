use crate::cpu::{Bus, Cpu};
use crate::Error;

use super::bus::joypad::Button;
use super::cartridge::{Cartridge, CartridgeConfig};
use super::GameBoyBus;

/// High-level Game Boy machine.
///
/// Holds the CPU core and the bus (which in turn owns the pixel processor,
/// cartridge, timer and joypad). This is the single owning context every
/// component is stepped through; nothing holds a reference back into it.
pub struct GameBoy {
    pub cpu: Cpu,
    pub(crate) bus: GameBoyBus,
}

impl GameBoy {
    /// Build a powered-on machine around the configured cartridge.
    ///
    /// Without a boot image the CPU and I/O registers start in the state the
    /// DMG boot ROM leaves behind, with PC at 0x0100.
    pub fn new(config: CartridgeConfig) -> Self {
        let CartridgeConfig {
            rom,
            controller,
            rom_banks,
            ram_banks,
            boot_rom,
        } = config;

        log::info!(
            "GB: {:?} cartridge, {} ROM banks, {} RAM banks, boot image {}",
            controller,
            rom_banks,
            ram_banks,
            if boot_rom.is_some() { "installed" } else { "skipped" }
        );

        let cartridge = Cartridge::new(rom, controller, rom_banks, ram_banks);
        let mut bus = GameBoyBus::new(cartridge, boot_rom);
        let mut cpu = Cpu::new();
        cpu.power_up(&mut bus);
        if !bus.has_boot_rom() {
            cpu.skip_boot_rom();
            bus.apply_post_boot_state();
        }

        Self { cpu, bus }
    }

    /// Advance the whole machine by one tick.
    ///
    /// Order is fixed: CPU (unless stopped), then one pixel-processor dot,
    /// then the divider/timer for this tick.
    pub fn tick(&mut self) {
        self.bus.ticks = self.bus.ticks.wrapping_add(1);
        if !self.cpu.is_stopped() {
            self.cpu.tick(&mut self.bus);
        }
        self.bus.tick_peripherals();
    }

    /// Run until exactly one instruction (or interrupt entry) has completed.
    ///
    /// An instruction already in flight is finished first. A core that goes
    /// to sleep (HALT or STOP) counts as done; the rest of its cost is paid
    /// once it wakes.
    pub fn run_instruction(&mut self) -> Result<(), Error> {
        self.check_valid()?;
        self.drain_pending();
        self.tick();
        self.check_valid()?;
        self.drain_pending();
        Ok(())
    }

    /// Run until the pixel processor wraps from line 153 back to line 0.
    pub fn run_frame(&mut self) -> Result<(), Error> {
        self.check_valid()?;
        loop {
            self.tick();
            self.check_valid()?;
            if self.bus.ppu.frame_dot() == 0 {
                return Ok(());
            }
        }
    }

    fn drain_pending(&mut self) {
        while self.cpu.pending_cycles() > 0 && !self.cpu.halted && !self.cpu.is_stopped() {
            self.tick();
        }
    }

    fn check_valid(&self) -> Result<(), Error> {
        if !self.bus.is_invalid() {
            return Ok(());
        }
        let (opcode, address) = self.cpu.invalid_opcode().unwrap_or_default();
        Err(Error::InvalidOpcode { opcode, address })
    }

    /// Press or release a button. A press requests the joypad interrupt and
    /// wakes the CPU from STOP.
    pub fn set_button(&mut self, button: Button, pressed: bool) {
        if self.bus.set_button(button, pressed) {
            log::debug!("GB: {button:?} pressed");
            self.cpu.resume();
        }
    }

    /// 160×144 shade indices (0 = lightest, 3 = darkest), row-major.
    pub fn framebuffer(&self) -> &[u8] {
        self.bus.ppu.framebuffer()
    }

    /// Completed frames since power-on.
    pub fn frame_count(&self) -> u64 {
        self.bus.ppu.frame_count()
    }

    /// Machine ticks since power-on.
    pub fn ticks(&self) -> u64 {
        self.bus.ticks
    }

    pub fn is_invalid(&self) -> bool {
        self.bus.is_invalid()
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Read through the bus exactly as the CPU would.
    pub fn peek(&mut self, addr: u16) -> u8 {
        self.bus.read8(addr)
    }

    /// Write through the bus exactly as the CPU would.
    pub fn poke(&mut self, addr: u16, value: u8) {
        self.bus.write8(addr, value);
    }
}
