/// Background/window tile fetcher.
///
/// Runs a 9-step cycle per tile: tile id on step 0, low data byte on step 2,
/// high data byte on step 4, then waits on step 8 until the background FIFO
/// is empty and pushes the row.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct Fetcher {
    pub(super) phase: u8,
    /// Tile column within the current layer, relative to where it started.
    pub(super) column: u8,
    pub(super) tile_id: u8,
    /// Pixel row (0–7) inside the fetched tile.
    pub(super) row: u8,
    pub(super) lo: u8,
    pub(super) hi: u8,
    /// Fetching from the window layer instead of the background.
    pub(super) window: bool,
}

pub(super) const PUSH_PHASE: u8 = 8;

impl Fetcher {
    pub(super) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Restart at the window's first column.
    pub(super) fn start_window(&mut self) {
        *self = Self {
            window: true,
            ..Self::default()
        };
    }
}

/// VRAM offset of the tile map entry for tile (`column`, `line / 8`).
#[inline]
pub(super) fn tile_map_offset(high_map: bool, line: u8, column: u8) -> usize {
    let base = if high_map { 0x1C00 } else { 0x1800 };
    base + usize::from(line / 8) * 32 + usize::from(column & 0x1F)
}

/// VRAM offset of the low data byte for `row` of tile `tile_id`.
///
/// With `unsigned` addressing ids index up from 0x8000; otherwise they are
/// signed offsets from 0x9000.
#[inline]
pub(super) fn tile_row_offset(tile_id: u8, row: u8, unsigned: bool) -> usize {
    let base = if unsigned {
        usize::from(tile_id) * 16
    } else {
        (0x1000 + isize::from(tile_id as i8) * 16) as usize
    };
    base + usize::from(row & 0x07) * 2
}
