mod direct;
mod mbc1;

use typed_builder::TypedBuilder;

use super::OPEN_BUS;

use direct::DirectMapped;
use mbc1::Mbc1;

pub(super) const ROM_BANK_SIZE: usize = 0x4000;
pub(super) const RAM_BANK_SIZE: usize = 0x2000;

/// Bank-controller variants supported by the cartridge.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ControllerKind {
    /// No controller: 32 KiB ROM mapped straight through.
    #[default]
    Direct,
    /// MBC1-style controller with switchable ROM and RAM banks.
    Mbc1,
}

/// Everything needed to plug a cartridge into the machine.
#[derive(Debug, TypedBuilder)]
pub struct CartridgeConfig {
    pub rom: Vec<u8>,
    #[builder(default)]
    pub controller: ControllerKind,
    /// Number of 16 KiB ROM banks the controller may select.
    #[builder(default = 2)]
    pub rom_banks: u16,
    /// Number of 8 KiB external RAM banks; 0 means no cartridge RAM.
    #[builder(default = 0)]
    pub ram_banks: u16,
    /// Optional 256-byte boot image overlaid on 0x0000–0x00FF at power-up.
    #[builder(default)]
    pub boot_rom: Option<Vec<u8>>,
}

/// Address translation performed by a bank controller.
///
/// Both calls return an offset into the cartridge's ROM (for 0x0000–0x7FFF)
/// or RAM (for 0xA000–0xBFFF) backing store, or `None` when the access does
/// not reach memory. Writes into ROM space are consumed as control-register
/// writes and never return an offset.
pub(super) trait BankController {
    fn mapped_read(&self, addr: u16) -> Option<usize>;
    fn mapped_write(&mut self, addr: u16, value: u8) -> Option<usize>;
}

enum Controller {
    Direct(DirectMapped),
    Mbc1(Mbc1),
}

impl BankController for Controller {
    fn mapped_read(&self, addr: u16) -> Option<usize> {
        match self {
            Controller::Direct(c) => c.mapped_read(addr),
            Controller::Mbc1(c) => c.mapped_read(addr),
        }
    }

    fn mapped_write(&mut self, addr: u16, value: u8) -> Option<usize> {
        match self {
            Controller::Direct(c) => c.mapped_write(addr, value),
            Controller::Mbc1(c) => c.mapped_write(addr, value),
        }
    }
}

/// Cartridge ROM and RAM behind a bank controller.
pub(super) struct Cartridge {
    rom: Vec<u8>,
    ram: Vec<u8>,
    controller: Controller,
}

impl Cartridge {
    pub(super) fn new(rom: Vec<u8>, kind: ControllerKind, rom_banks: u16, ram_banks: u16) -> Self {
        let expected = usize::from(rom_banks) * ROM_BANK_SIZE;
        if rom.len() < expected {
            log::warn!(
                "GB cartridge: ROM is {} bytes but {} banks ({} bytes) were declared",
                rom.len(),
                rom_banks,
                expected
            );
        }

        let controller = match kind {
            ControllerKind::Direct => Controller::Direct(DirectMapped::new(ram_banks)),
            ControllerKind::Mbc1 => Controller::Mbc1(Mbc1::new(rom_banks, ram_banks)),
        };

        Self {
            rom,
            ram: vec![0; usize::from(ram_banks) * RAM_BANK_SIZE],
            controller,
        }
    }

    /// Read from 0x0000–0x7FFF or 0xA000–0xBFFF.
    pub(super) fn read(&self, addr: u16) -> u8 {
        let Some(offset) = self.controller.mapped_read(addr) else {
            return OPEN_BUS;
        };
        let backing = if addr < 0x8000 { &self.rom } else { &self.ram };
        backing.get(offset).copied().unwrap_or(OPEN_BUS)
    }

    /// Write to 0x0000–0x7FFF (controller registers) or 0xA000–0xBFFF.
    pub(super) fn write(&mut self, addr: u16, value: u8) {
        let Some(offset) = self.controller.mapped_write(addr, value) else {
            return;
        };
        if addr >= 0xA000 {
            if let Some(slot) = self.ram.get_mut(offset) {
                *slot = value;
            }
        }
    }
}
