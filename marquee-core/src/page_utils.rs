//! Page arithmetic shared by the builder, the state machine and validation.
//!
//! Every function here is pure. Callers are expected to have rejected a zero
//! `tiles_per_page` before reaching for the division helpers.

use serde::{Deserialize, Serialize};

/// Viewport width at or above which `tiles_per_page` tiles are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Breakpoint {
    pub min_width: u32,
    pub tiles_per_page: usize,
}

/// Tiles visible at once for a viewport width.
///
/// Picks the breakpoint with the largest `min_width` not exceeding
/// `viewport_width`, regardless of the order `breakpoints` is given in.
/// Falls back to `fallback` below every breakpoint. Never returns 0.
pub fn tiles_per_page(
    viewport_width: u32,
    breakpoints: &[Breakpoint],
    fallback: usize,
) -> usize {
    breakpoints
        .iter()
        .filter(|bp| viewport_width >= bp.min_width)
        .max_by_key(|bp| bp.min_width)
        .map_or(fallback, |bp| bp.tiles_per_page)
        .max(1)
}

/// Total pages in a map, including the two boundary pages.
pub fn max_pages(tile_count: usize, tiles_per_page: usize) -> usize {
    tile_count.div_ceil(tiles_per_page) + 2
}

/// Slots needed to round `tile_span` up to whole pages.
pub fn total_tiles(tile_span: usize, tiles_per_page: usize) -> usize {
    tile_span.div_ceil(tiles_per_page) * tiles_per_page
}

/// Tiles borrowed from the opposite end to pad the short real page.
pub fn padding_needed(tile_count: usize, tiles_per_page: usize) -> usize {
    (tiles_per_page - tile_count % tiles_per_page) % tiles_per_page
}

/// Position `left_count` tiles before `anchor_index`, wrapping around the
/// collection.
pub fn start_index(
    anchor_index: usize,
    left_count: usize,
    tile_count: usize,
) -> usize {
    if tile_count == 0 {
        return 0;
    }
    let anchor = anchor_index % tile_count;
    let left = left_count % tile_count;
    (anchor + tile_count - left) % tile_count
}

/// `count` consecutive positions starting at `from`, wrapping at
/// `tile_count`.
pub(crate) fn wrapped_slots(
    from: usize,
    count: usize,
    tile_count: usize,
) -> Box<[usize]> {
    (0..count).map(|offset| (from + offset) % tile_count).collect()
}
