mod bus;
mod cartridge;
mod gameboy;
mod ppu;
mod timer;

pub(crate) use bus::GameBoyBus;
pub use bus::joypad::Button;
pub use cartridge::{CartridgeConfig, ControllerKind};
pub use gameboy::GameBoy;

/// Value read back from any address nobody drives, or that the PPU is
/// currently locking out.
pub(crate) const OPEN_BUS: u8 = 0xFF;
