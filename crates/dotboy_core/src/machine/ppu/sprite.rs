use bitflags::bitflags;

use super::OAM_SIZE;

/// Most sprites the hardware will draw on one line.
pub(super) const MAX_SPRITES_PER_LINE: usize = 10;
const OAM_ENTRIES: usize = OAM_SIZE / 4;

bitflags! {
    /// OAM attribute byte (DMG bits only).
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub(super) struct SpriteAttrs: u8 {
        const OBP1 = 0b0001_0000;
        const X_FLIP = 0b0010_0000;
        const Y_FLIP = 0b0100_0000;
        const BEHIND_BG = 0b1000_0000;
    }
}

/// One decoded OAM entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct SpriteEntry {
    pub(super) y: u8,
    pub(super) x: u8,
    pub(super) tile: u8,
    pub(super) attrs: SpriteAttrs,
}

impl SpriteEntry {
    pub(super) fn from_oam(oam: &[u8; OAM_SIZE], index: usize) -> Self {
        let base = index * 4;
        Self {
            y: oam[base],
            x: oam[base + 1],
            tile: oam[base + 2],
            attrs: SpriteAttrs::from_bits_truncate(oam[base + 3]),
        }
    }

    /// Screen line of the sprite's top row.
    #[inline]
    pub(super) fn top(&self) -> i16 {
        i16::from(self.y) - 16
    }

    /// Screen column of the sprite's leftmost pixel.
    #[inline]
    pub(super) fn left(&self) -> i16 {
        i16::from(self.x) - 8
    }

    #[inline]
    pub(super) fn covers_line(&self, ly: u8, height: u8) -> bool {
        let line = i16::from(ly);
        line >= self.top() && line < self.top() + i16::from(height)
    }

    /// VRAM offset of this sprite's low data byte on line `ly`.
    ///
    /// Sprites always use 0x8000 addressing; 8×16 sprites ignore bit 0 of
    /// the tile index. The row is masked to the sprite height, so a line
    /// the sprite does not cover still yields an offset inside its tile.
    pub(super) fn row_offset(&self, ly: u8, height: u8) -> usize {
        let last = height - 1;
        let mut row = (i16::from(ly) - self.top()) as u8 & last;
        if self.attrs.contains(SpriteAttrs::Y_FLIP) {
            row ^= last;
        }
        let tile = if height == 16 { self.tile & 0xFE } else { self.tile };
        usize::from(tile) * 16 + usize::from(row) * 2
    }
}

/// OAM indices selected for the current line, in OAM order.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct LineSprites {
    indices: [u8; MAX_SPRITES_PER_LINE],
    len: u8,
}

impl LineSprites {
    /// Scan all 40 entries and keep the first ten that cover `ly`.
    ///
    /// Later matches are ignored for this line only.
    pub(super) fn select(oam: &[u8; OAM_SIZE], ly: u8, height: u8) -> Self {
        let mut selected = Self::default();
        for index in 0..OAM_ENTRIES {
            if usize::from(selected.len) == MAX_SPRITES_PER_LINE {
                break;
            }
            if SpriteEntry::from_oam(oam, index).covers_line(ly, height) {
                selected.indices[usize::from(selected.len)] = index as u8;
                selected.len += 1;
            }
        }
        selected
    }

    pub(super) fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices[..usize::from(self.len)].iter().map(|&i| usize::from(i))
    }

    #[cfg(test)]
    pub(super) fn len(&self) -> usize {
        usize::from(self.len)
    }
}
