//! Headless driver for `dotboy_core`.
//!
//! Everything the core leaves to its caller lives here: reading the
//! cartridge header to pick a bank controller and bank counts, rejecting
//! malformed images, and turning shade indices into pixels.
use std::path::Path;

use anyhow::{bail, Context, Result};
use dotboy_core::{CartridgeConfig, ControllerKind, GameBoy, SCREEN_HEIGHT, SCREEN_WIDTH};

const ROM_BANK_SIZE: usize = 0x4000;
const HEADER_END: usize = 0x150;
const CARTRIDGE_TYPE: usize = 0x147;
const ROM_SIZE: usize = 0x148;
const RAM_SIZE: usize = 0x149;

/// DMG shades, lightest first, as 8-bit grey levels.
const SHADES: [u8; 4] = [0xFF, 0xAA, 0x55, 0x00];

/// What the cartridge header says about the hardware on the cartridge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CartridgeHeader {
    pub controller: ControllerKind,
    pub rom_banks: u16,
    pub ram_banks: u16,
}

/// Decode the controller type and bank counts from a ROM image.
///
/// Fails on images too short for a header, unsupported controllers, and
/// images shorter than the ROM size they declare.
pub fn parse_header(rom: &[u8]) -> Result<CartridgeHeader> {
    if rom.len() < HEADER_END {
        bail!("ROM is {} bytes, too short for a cartridge header", rom.len());
    }

    let controller = match rom[CARTRIDGE_TYPE] {
        0x00 | 0x08 | 0x09 => ControllerKind::Direct,
        0x01..=0x03 => ControllerKind::Mbc1,
        other => bail!("unsupported cartridge type 0x{other:02X}"),
    };

    let rom_banks = match rom[ROM_SIZE] {
        code @ 0x00..=0x08 => 2u16 << code,
        other => bail!("unsupported ROM size code 0x{other:02X}"),
    };

    let ram_banks = match rom[RAM_SIZE] {
        0x00 => 0,
        // 0x01 is an unofficial 2 KiB size; one bank covers it.
        0x01 | 0x02 => 1,
        0x03 => 4,
        0x04 => 16,
        0x05 => 8,
        other => bail!("unsupported RAM size code 0x{other:02X}"),
    };

    let declared = usize::from(rom_banks) * ROM_BANK_SIZE;
    if rom.len() < declared {
        bail!(
            "ROM is {} bytes but its header declares {} banks ({} bytes)",
            rom.len(),
            rom_banks,
            declared
        );
    }

    Ok(CartridgeHeader {
        controller,
        rom_banks,
        ram_banks,
    })
}

/// Build a machine from a ROM image and an optional 256-byte boot image.
pub fn load_cartridge(rom: Vec<u8>, boot_rom: Option<Vec<u8>>) -> Result<GameBoy> {
    let header = parse_header(&rom)?;
    if let Some(boot) = &boot_rom {
        if boot.len() != 0x100 {
            bail!("boot image is {} bytes, expected 256", boot.len());
        }
    }
    log::info!(
        "Loaded cartridge: {:?}, {} ROM banks, {} RAM banks",
        header.controller,
        header.rom_banks,
        header.ram_banks
    );

    let config = CartridgeConfig::builder()
        .rom(rom)
        .controller(header.controller)
        .rom_banks(header.rom_banks)
        .ram_banks(header.ram_banks)
        .boot_rom(boot_rom)
        .build();
    Ok(GameBoy::new(config))
}

/// Read a ROM (and optional boot image) from disk and build a machine.
pub fn load_cartridge_file(rom_path: &Path, boot_path: Option<&Path>) -> Result<GameBoy> {
    let rom = std::fs::read(rom_path)
        .with_context(|| format!("failed to read ROM '{}'", rom_path.display()))?;
    let boot = boot_path
        .map(|path| {
            std::fs::read(path)
                .with_context(|| format!("failed to read boot image '{}'", path.display()))
        })
        .transpose()?;
    load_cartridge(rom, boot)
}

/// Run `frames` whole frames, stopping at the first invalid opcode.
pub fn run_frames(gb: &mut GameBoy, frames: u32) -> Result<()> {
    for frame in 0..frames {
        gb.run_frame()
            .with_context(|| format!("emulation stopped during frame {frame}"))?;
    }
    Ok(())
}

/// Expand the framebuffer's shade indices into packed RGB24.
pub fn framebuffer_to_rgb24(framebuffer: &[u8], out: &mut [u8]) {
    debug_assert_eq!(out.len(), SCREEN_WIDTH * SCREEN_HEIGHT * 3);
    for (pixel, &shade) in out.chunks_exact_mut(3).zip(framebuffer) {
        pixel.fill(SHADES[usize::from(shade & 0x03)]);
    }
}
