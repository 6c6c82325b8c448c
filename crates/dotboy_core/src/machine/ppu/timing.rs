use crate::cpu::Interrupts;
use crate::SCREEN_WIDTH;

use super::fetcher::{tile_map_offset, tile_row_offset, PUSH_PHASE};
use super::fifo::FifoPixel;
use super::registers::{shade, Lcdc, Mode, Stat};
use super::sprite::{LineSprites, SpriteAttrs, SpriteEntry};
use super::Ppu;

pub(crate) const DOTS_PER_LINE: u16 = 456;
pub(crate) const LINES_PER_FRAME: u8 = 154;
pub(crate) const VISIBLE_LINES: u8 = 144;
/// Mode 2 covers dots 0..80 of a visible line.
pub(crate) const OAM_SEARCH_DOTS: u16 = 80;

impl Ppu {
    /// Advance by one dot.
    ///
    /// The current dot is evaluated first (mode entry, one pipeline step,
    /// STAT/coincidence update) and the line/frame counters move afterwards.
    pub(crate) fn tick(&mut self, if_reg: &mut Interrupts) {
        let enabled = self.display_enabled();
        self.step_mode(enabled, if_reg);

        // Level-triggered: re-requested on every dot a source holds.
        self.stat.set(Stat::COINCIDENCE, self.ly == self.lyc);
        if enabled && self.stat_sources_active() {
            if_reg.insert(Interrupts::LCD_STAT);
        }

        self.advance_dot();
    }

    fn step_mode(&mut self, enabled: bool, if_reg: &mut Interrupts) {
        if self.ly >= VISIBLE_LINES {
            if self.ly == VISIBLE_LINES && self.line_dot == 0 {
                self.mode = Mode::VBlank;
                if enabled {
                    if_reg.insert(Interrupts::VBLANK);
                    log::debug!("GB PPU: vblank (frame {})", self.frame_count);
                }
            }
            return;
        }

        match self.line_dot {
            0 => self.enter_oam_search(),
            OAM_SEARCH_DOTS => self.enter_drawing(),
            _ => {}
        }
        if self.mode == Mode::Drawing {
            self.draw_dot(enabled);
        }
    }

    fn advance_dot(&mut self) {
        self.line_dot += 1;
        self.frame_dot += 1;
        if self.line_dot < DOTS_PER_LINE {
            return;
        }

        self.line_dot = 0;
        self.fetcher.reset();
        self.ly += 1;
        if self.ly == LINES_PER_FRAME {
            self.ly = 0;
            self.frame_dot = 0;
            self.frame_count += 1;
        }
    }

    fn stat_sources_active(&self) -> bool {
        let stat = self.stat;
        (stat.contains(Stat::LYC_INT) && stat.contains(Stat::COINCIDENCE))
            || match self.mode {
                Mode::HBlank => stat.contains(Stat::HBLANK_INT),
                Mode::VBlank => stat.contains(Stat::VBLANK_INT),
                Mode::OamSearch => stat.contains(Stat::OAM_INT),
                Mode::Drawing => false,
            }
    }

    #[inline]
    fn sprite_height(&self) -> u8 {
        if self.lcdc.contains(Lcdc::OBJ_SIZE) {
            16
        } else {
            8
        }
    }

    fn enter_oam_search(&mut self) {
        self.mode = Mode::OamSearch;
        self.line_sprites = LineSprites::select(&self.oam, self.ly, self.sprite_height());
    }

    fn enter_drawing(&mut self) {
        self.mode = Mode::Drawing;
        self.x = 0;
        self.discard = self.scx & 0x07;
        self.fetcher.reset();
        self.bg_fifo.clear();
        self.sprite_fifo.clear();
    }

    /// One dot of mode 3: window check, fetcher step, then at most one
    /// pixel out of the FIFOs.
    fn draw_dot(&mut self, enabled: bool) {
        if !enabled {
            self.emit(0);
            return;
        }

        self.check_window_trigger();
        self.step_fetcher();

        if self.bg_fifo.is_empty() {
            return;
        }
        if self.discard > 0 {
            self.bg_fifo.pop();
            self.discard -= 1;
            return;
        }

        if self.lcdc.contains(Lcdc::OBJ_ENABLE) {
            self.load_sprites_at(self.x);
        }
        let bg = self.bg_fifo.pop().unwrap_or_default();
        let obj = self.sprite_fifo.pop();
        let color = self.resolve_pixel(bg, obj);
        self.emit(color);
    }

    fn emit(&mut self, color: u8) {
        let index = usize::from(self.ly) * SCREEN_WIDTH + usize::from(self.x);
        self.framebuffer[index] = color;
        self.x += 1;
        if usize::from(self.x) == SCREEN_WIDTH {
            self.mode = Mode::HBlank;
        }
    }

    fn check_window_trigger(&mut self) {
        if self.fetcher.window || !self.lcdc.contains(Lcdc::WINDOW_ENABLE) || self.ly < self.wy {
            return;
        }
        let reached = u16::from(self.x) + 7 == u16::from(self.wx) || (self.x == 0 && self.wx < 7);
        if reached {
            self.bg_fifo.clear();
            self.fetcher.start_window();
            self.discard = 0;
        }
    }

    fn step_fetcher(&mut self) {
        match self.fetcher.phase {
            0 => self.fetch_tile_id(),
            2 => self.fetcher.lo = self.vram[self.tile_data_offset()],
            4 => self.fetcher.hi = self.vram[self.tile_data_offset() + 1],
            PUSH_PHASE => {
                if self.bg_fifo.push_row(self.fetcher.lo, self.fetcher.hi) {
                    self.fetcher.column = self.fetcher.column.wrapping_add(1);
                    self.fetcher.phase = 0;
                }
                return;
            }
            _ => {}
        }
        self.fetcher.phase += 1;
    }

    fn fetch_tile_id(&mut self) {
        let (high_map, line, column) = if self.fetcher.window {
            (
                self.lcdc.contains(Lcdc::WINDOW_TILE_MAP),
                self.ly.wrapping_sub(self.wy),
                self.fetcher.column,
            )
        } else {
            (
                self.lcdc.contains(Lcdc::BG_TILE_MAP),
                self.ly.wrapping_add(self.scy),
                (self.scx / 8).wrapping_add(self.fetcher.column),
            )
        };
        self.fetcher.tile_id = self.vram[tile_map_offset(high_map, line, column)];
        self.fetcher.row = line & 0x07;
    }

    #[inline]
    fn tile_data_offset(&self) -> usize {
        tile_row_offset(
            self.fetcher.tile_id,
            self.fetcher.row,
            self.lcdc.contains(Lcdc::TILE_DATA),
        )
    }

    /// Merge every selected sprite whose left edge is at column `x`.
    ///
    /// Sprites hanging off the left edge are loaded at column 0 with their
    /// off-screen pixels dropped. Selection happened in mode 2, so an entry
    /// that an OAM DMA or an OBJ_SIZE change has since moved off this line
    /// is skipped.
    fn load_sprites_at(&mut self, x: u8) {
        let height = self.sprite_height();
        let sprites = self.line_sprites;
        for index in sprites.iter() {
            let sprite = SpriteEntry::from_oam(&self.oam, index);
            if !sprite.covers_line(self.ly, height) {
                continue;
            }
            let left = sprite.left();
            let skip = if left == i16::from(x) {
                0
            } else if x == 0 && left < 0 {
                (-left) as u8
            } else {
                continue;
            };

            let offset = sprite.row_offset(self.ly, height);
            let (mut lo, mut hi) = (self.vram[offset], self.vram[offset + 1]);
            if sprite.attrs.contains(SpriteAttrs::X_FLIP) {
                lo = lo.reverse_bits();
                hi = hi.reverse_bits();
            }
            self.sprite_fifo.merge_sprite_row(
                lo,
                hi,
                skip,
                sprite.attrs.contains(SpriteAttrs::BEHIND_BG),
                sprite.attrs.contains(SpriteAttrs::OBP1),
            );
        }
    }

    /// Mix a background pixel with the sprite pixel in the same column.
    fn resolve_pixel(&self, bg: FifoPixel, obj: Option<FifoPixel>) -> u8 {
        let bg_color = if self.lcdc.contains(Lcdc::BG_WINDOW_ENABLE) {
            bg.color
        } else {
            0
        };

        match obj {
            Some(obj) if !obj.behind_bg || bg_color == 0 => {
                let palette = if obj.obp1 { self.obp1 } else { self.obp0 };
                shade(palette, obj.color)
            }
            _ => shade(self.bgp, bg_color),
        }
    }
}
