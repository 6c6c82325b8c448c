use crate::cpu::Interrupts;

use super::{cartridge::Cartridge, ppu::Ppu, timer::Timer};

mod dma;
mod init;
pub(super) mod joypad;
mod mmio;
mod traits;

use joypad::Joypad;

const WRAM_SIZE: usize = 0x2000;
const HRAM_SIZE: usize = 0x7F;

/// Everything the CPU can reach through the address space.
///
/// The bus owns the pixel processor, cartridge, timer and joypad and routes
/// every access to exactly one of them, or to its own WRAM/HRAM/interrupt
/// registers. Unclaimed addresses read as [`OPEN_BUS`](super::OPEN_BUS).
pub(crate) struct GameBoyBus {
    pub(super) ppu: Ppu,
    cartridge: Cartridge,
    timer: Timer,
    joypad: Joypad,
    wram: [u8; WRAM_SIZE],
    hram: [u8; HRAM_SIZE],
    pub(crate) if_reg: Interrupts,
    pub(crate) ie_reg: u8,
    /// 256-byte boot image overlaid on 0x0000–0x00FF while FF50 is zero.
    boot_rom: Option<Vec<u8>>,
    /// FF50; any nonzero value unmaps the boot image for good.
    boot_latch: u8,
    /// Latched once the CPU hits an undefined opcode.
    invalid: bool,
    /// Machine ticks since power-on; drives the divider and timer.
    pub(super) ticks: u64,
}

impl GameBoyBus {
    pub(super) fn new(cartridge: Cartridge, boot_rom: Option<Vec<u8>>) -> Self {
        Self {
            ppu: Ppu::new(),
            cartridge,
            timer: Timer::new(),
            joypad: Joypad::default(),
            wram: [0; WRAM_SIZE],
            hram: [0; HRAM_SIZE],
            if_reg: Interrupts::empty(),
            ie_reg: 0,
            boot_rom,
            boot_latch: 0,
            invalid: false,
            ticks: 0,
        }
    }

    pub(super) fn has_boot_rom(&self) -> bool {
        self.boot_rom.is_some()
    }

    #[inline]
    pub(super) fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Advance the pixel processor by one dot, then evaluate the timer for
    /// the current tick.
    pub(super) fn tick_peripherals(&mut self) {
        self.ppu.tick(&mut self.if_reg);
        self.timer.tick(self.ticks, &mut self.if_reg);
    }

    /// Update one button; a fresh press requests the joypad interrupt.
    /// Returns `true` on a released-to-pressed edge.
    pub(super) fn set_button(&mut self, button: joypad::Button, pressed: bool) -> bool {
        let edge = self.joypad.set(button, pressed);
        if edge {
            self.if_reg.insert(Interrupts::JOYPAD);
        }
        edge
    }

    #[inline]
    fn boot_rom_mapped(&self, addr: u16) -> Option<u8> {
        if addr >= 0x0100 || self.boot_latch != 0 {
            return None;
        }
        self.boot_rom
            .as_ref()
            .and_then(|image| image.get(usize::from(addr)).copied())
    }
}
