//! Dot-driven pixel processor.
//!
//! The PPU owns VRAM, OAM, its I/O registers and the framebuffer. It is
//! advanced one dot per machine tick by the bus and renders through a
//! background/window fetcher feeding two 8-pixel shift-register FIFOs.
mod access;
mod fetcher;
mod fifo;
mod mmio;
mod registers;
mod sprite;
mod timing;

use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

use fetcher::Fetcher;
use fifo::PixelFifo;
use registers::{Lcdc, Stat};
use sprite::LineSprites;

pub(crate) use registers::Mode;

pub(super) const VRAM_SIZE: usize = 0x2000;
pub(super) const OAM_SIZE: usize = 0xA0;
/// OAM DMA source register.
pub(super) const DMA_REGISTER: u16 = 0xFF46;

pub(crate) struct Ppu {
    pub(super) vram: [u8; VRAM_SIZE],
    pub(super) oam: [u8; OAM_SIZE],
    framebuffer: [u8; SCREEN_WIDTH * SCREEN_HEIGHT],

    lcdc: Lcdc,
    stat: Stat,
    mode: Mode,
    scy: u8,
    scx: u8,
    ly: u8,
    lyc: u8,
    wy: u8,
    wx: u8,
    bgp: u8,
    obp0: u8,
    obp1: u8,
    dma: u8,

    /// Dot within the current line, 0..456.
    line_dot: u16,
    /// Dot within the current frame, 0..70224.
    frame_dot: u32,
    frame_count: u64,
    /// Next framebuffer column to be written during mode 3.
    x: u8,
    /// Background pixels still to be dropped for SCX fine scroll.
    discard: u8,
    fetcher: Fetcher,
    bg_fifo: PixelFifo,
    sprite_fifo: PixelFifo,
    line_sprites: LineSprites,
}

impl Ppu {
    pub(crate) fn new() -> Self {
        Self {
            vram: [0; VRAM_SIZE],
            oam: [0; OAM_SIZE],
            framebuffer: [0; SCREEN_WIDTH * SCREEN_HEIGHT],
            lcdc: Lcdc::empty(),
            stat: Stat::empty(),
            mode: Mode::HBlank,
            scy: 0,
            scx: 0,
            ly: 0,
            lyc: 0,
            wy: 0,
            wx: 0,
            bgp: 0,
            obp0: 0,
            obp1: 0,
            dma: 0,
            line_dot: 0,
            frame_dot: 0,
            frame_count: 0,
            x: 0,
            discard: 0,
            fetcher: Fetcher::default(),
            bg_fifo: PixelFifo::default(),
            sprite_fifo: PixelFifo::default(),
            line_sprites: LineSprites::default(),
        }
    }

    /// I/O state the DMG boot ROM leaves behind.
    pub(crate) fn apply_post_boot_state(&mut self) {
        self.lcdc = Lcdc::from_bits_retain(0x91);
        self.bgp = 0xFC;
    }

    /// 160×144 color indices (0–3) after palette lookup, row-major.
    pub(crate) fn framebuffer(&self) -> &[u8] {
        &self.framebuffer
    }

    /// Mode as seen internally; STAT reports mode 0 while the LCD is off.
    pub(crate) fn mode(&self) -> Mode {
        self.mode
    }

    pub(crate) fn ly(&self) -> u8 {
        self.ly
    }

    pub(crate) fn line_dot(&self) -> u16 {
        self.line_dot
    }

    /// Zero exactly at a frame boundary.
    pub(crate) fn frame_dot(&self) -> u32 {
        self.frame_dot
    }

    pub(crate) fn frame_count(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    fn display_enabled(&self) -> bool {
        self.lcdc.contains(Lcdc::DISPLAY_ENABLE)
    }
}
