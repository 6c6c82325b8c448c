use super::BankController;

/// Cartridge without a bank controller.
///
/// ROM is mapped 1:1 below 0x8000 and ROM-space writes are ignored.
/// External RAM, when present, is a single bank at 0xA000.
pub(super) struct DirectMapped {
    ram_banks: u16,
}

impl DirectMapped {
    pub(super) fn new(ram_banks: u16) -> Self {
        Self { ram_banks }
    }

    fn has_ram(&self) -> bool {
        self.ram_banks != 0
    }
}

impl BankController for DirectMapped {
    fn mapped_read(&self, addr: u16) -> Option<usize> {
        match addr {
            0x0000..=0x7FFF => Some(usize::from(addr)),
            0xA000..=0xBFFF if self.has_ram() => Some(usize::from(addr - 0xA000)),
            _ => None,
        }
    }

    fn mapped_write(&mut self, addr: u16, _value: u8) -> Option<usize> {
        match addr {
            0xA000..=0xBFFF if self.has_ram() => Some(usize::from(addr - 0xA000)),
            _ => None,
        }
    }
}
