/// One pixel leaving a FIFO.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(super) struct FifoPixel {
    /// 2-bit color index before palette lookup.
    pub(super) color: u8,
    /// Sprite "behind background" attribute.
    pub(super) behind_bg: bool,
    /// Sprite palette select (OBP1 when set).
    pub(super) obp1: bool,
}

/// Eight-slot pixel shift register.
///
/// Each field is a bit-plane with the head of the queue in bit 7, so a pop
/// is a left shift of every plane. `occupied` marks which slots hold a
/// pixel; the sprite FIFO can have holes where no sprite covers a column.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(super) struct PixelFifo {
    lo: u8,
    hi: u8,
    occupied: u8,
    behind_bg: u8,
    obp1: u8,
}

const HEAD: u8 = 0x80;

impl PixelFifo {
    #[inline]
    pub(super) fn clear(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub(super) fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    #[cfg(test)]
    pub(super) fn len(&self) -> u32 {
        self.occupied.count_ones()
    }

    /// Load a full tile row (2bpp planes, leftmost pixel in bit 7).
    ///
    /// Only succeeds when the FIFO is empty; otherwise the fetcher stalls.
    pub(super) fn push_row(&mut self, lo: u8, hi: u8) -> bool {
        if !self.is_empty() {
            return false;
        }
        *self = Self {
            lo,
            hi,
            occupied: 0xFF,
            behind_bg: 0,
            obp1: 0,
        };
        true
    }

    /// Overlay a sprite row, dropping its first `skip` pixels.
    ///
    /// A sprite pixel lands only in an unoccupied slot and only if it is not
    /// transparent, so earlier (higher priority) sprites win overlaps.
    pub(super) fn merge_sprite_row(
        &mut self,
        lo: u8,
        hi: u8,
        skip: u8,
        behind_bg: bool,
        obp1: bool,
    ) {
        for src in skip..8 {
            let src_bit = HEAD >> src;
            if (lo | hi) & src_bit == 0 {
                continue;
            }
            let dst_bit = HEAD >> (src - skip);
            if self.occupied & dst_bit != 0 {
                continue;
            }
            self.occupied |= dst_bit;
            if lo & src_bit != 0 {
                self.lo |= dst_bit;
            }
            if hi & src_bit != 0 {
                self.hi |= dst_bit;
            }
            if behind_bg {
                self.behind_bg |= dst_bit;
            }
            if obp1 {
                self.obp1 |= dst_bit;
            }
        }
    }

    /// Shift the head slot out. Returns `None` when that slot was empty.
    pub(super) fn pop(&mut self) -> Option<FifoPixel> {
        let pixel = (self.occupied & HEAD != 0).then(|| FifoPixel {
            color: ((self.hi & HEAD) >> 6) | ((self.lo & HEAD) >> 7),
            behind_bg: self.behind_bg & HEAD != 0,
            obp1: self.obp1 & HEAD != 0,
        });

        self.lo <<= 1;
        self.hi <<= 1;
        self.occupied <<= 1;
        self.behind_bg <<= 1;
        self.obp1 <<= 1;
        pixel
    }
}
