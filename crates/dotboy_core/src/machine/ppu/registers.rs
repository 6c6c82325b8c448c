use bitflags::bitflags;

bitflags! {
    /// LCDC (FF40).
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub(crate) struct Lcdc: u8 {
        /// DMG: background and window enable. When clear both render color 0.
        const BG_WINDOW_ENABLE = 0b0000_0001;
        const OBJ_ENABLE = 0b0000_0010;
        /// 8×16 sprites when set.
        const OBJ_SIZE = 0b0000_0100;
        /// Background tile map at 0x9C00 when set, else 0x9800.
        const BG_TILE_MAP = 0b0000_1000;
        /// Unsigned tile data at 0x8000 when set, else signed around 0x9000.
        const TILE_DATA = 0b0001_0000;
        const WINDOW_ENABLE = 0b0010_0000;
        /// Window tile map at 0x9C00 when set, else 0x9800.
        const WINDOW_TILE_MAP = 0b0100_0000;
        const DISPLAY_ENABLE = 0b1000_0000;
    }
}

bitflags! {
    /// STAT (FF41) bits that are not the mode field.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub(crate) struct Stat: u8 {
        const COINCIDENCE = 0b0000_0100;
        const HBLANK_INT = 0b0000_1000;
        const VBLANK_INT = 0b0001_0000;
        const OAM_INT = 0b0010_0000;
        const LYC_INT = 0b0100_0000;
    }
}

impl Stat {
    /// Bits software may write.
    pub(crate) const WRITABLE: Stat = Stat::HBLANK_INT
        .union(Stat::VBLANK_INT)
        .union(Stat::OAM_INT)
        .union(Stat::LYC_INT);
}

/// PPU mode as reported in STAT[1:0].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Mode {
    HBlank = 0,
    VBlank = 1,
    OamSearch = 2,
    Drawing = 3,
}

impl Mode {
    #[inline]
    pub(crate) fn bits(self) -> u8 {
        self as u8
    }
}

/// Map a 2-bit color index through a DMG palette register.
#[inline]
pub(super) fn shade(palette: u8, color: u8) -> u8 {
    (palette >> ((color & 0x03) * 2)) & 0x03
}
