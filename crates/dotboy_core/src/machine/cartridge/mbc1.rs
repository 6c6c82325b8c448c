use super::{BankController, RAM_BANK_SIZE, ROM_BANK_SIZE};

/// MBC1-style bank controller.
///
/// Writes to ROM space program four control registers:
///
/// | range         | register                                  |
/// |---------------|-------------------------------------------|
/// | 0x0000–0x1FFF | RAM enable (low nibble == 0xA)            |
/// | 0x2000–0x3FFF | ROM bank (0x00/0x20/0x40/0x60 bumped +1)  |
/// | 0x4000–0x5FFF | 2-bit upper ROM bits / RAM bank           |
/// | 0x6000–0x7FFF | banking mode                              |
///
/// In mode 0 the 2-bit register is ORed into bits 5-6 of the ROM bank and
/// RAM stays on bank 0; in mode 1 it selects the RAM bank instead. Battery
/// persistence is not modelled.
pub(super) struct Mbc1 {
    rom_banks: u16,
    ram_banks: u16,
    ram_enabled: bool,
    rom_bank_reg: u8,
    upper2: u8,
    ram_banking_mode: bool,
}

impl Mbc1 {
    pub(super) fn new(rom_banks: u16, ram_banks: u16) -> Self {
        Self {
            rom_banks,
            ram_banks,
            ram_enabled: false,
            rom_bank_reg: 1,
            upper2: 0,
            ram_banking_mode: false,
        }
    }

    /// Bank visible at 0x4000–0x7FFF, wrapped to the declared bank count.
    ///
    /// The wrap mirrors the bank pins: on a cartridge with fewer banks than
    /// the register can address, a bank number that is a multiple of the
    /// bank count reads bank 0 here.
    pub(super) fn rom_bank(&self) -> usize {
        let high = if self.ram_banking_mode { 0 } else { self.upper2 << 5 };
        let bank = usize::from(high | self.rom_bank_reg);
        bank % usize::from(self.rom_banks.max(1))
    }

    fn ram_bank(&self) -> usize {
        if self.ram_banking_mode {
            usize::from(self.upper2) % usize::from(self.ram_banks.max(1))
        } else {
            0
        }
    }

    fn ram_offset(&self, addr: u16) -> Option<usize> {
        (self.ram_enabled && self.ram_banks != 0)
            .then(|| self.ram_bank() * RAM_BANK_SIZE + usize::from(addr & 0x1FFF))
    }
}

impl BankController for Mbc1 {
    fn mapped_read(&self, addr: u16) -> Option<usize> {
        match addr {
            0x0000..=0x3FFF => Some(usize::from(addr)),
            0x4000..=0x7FFF => {
                Some(self.rom_bank() * ROM_BANK_SIZE + usize::from(addr & 0x3FFF))
            }
            0xA000..=0xBFFF => self.ram_offset(addr),
            _ => None,
        }
    }

    fn mapped_write(&mut self, addr: u16, value: u8) -> Option<usize> {
        match addr {
            0x0000..=0x1FFF => {
                let enabled = value & 0x0F == 0x0A;
                if enabled != self.ram_enabled {
                    log::debug!(
                        "GB MBC1: external RAM {}",
                        if enabled { "enabled" } else { "disabled" }
                    );
                }
                self.ram_enabled = enabled;
                None
            }
            0x2000..=0x3FFF => {
                self.rom_bank_reg = match value & 0x7F {
                    bank @ (0x00 | 0x20 | 0x40 | 0x60) => bank + 1,
                    bank => bank,
                };
                log::debug!("GB MBC1: ROM bank -> {}", self.rom_bank());
                None
            }
            0x4000..=0x5FFF => {
                self.upper2 = value & 0x03;
                None
            }
            0x6000..=0x7FFF => {
                self.ram_banking_mode = value & 0x01 != 0;
                None
            }
            0xA000..=0xBFFF => self.ram_offset(addr),
            _ => None,
        }
    }
}
