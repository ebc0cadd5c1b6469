//! Page map builder
//!
//! Every layout the slider uses is one wraparound walk over the collection.
//! The walk covers `total_tiles(n, t)` slots, so the real pages hold
//! `padding_needed(n, t)` more slots than there are tiles. Those extra
//! slots are borrowed from the opposite end: `borrowed` of them pad the
//! front of the first real page with tail tiles, the rest pad the back of
//! the last real page with head tiles.
//!
//! - `borrowed == 0`: start-aligned, the initial and jump-to-first layout.
//! - `borrowed == padding`: end-aligned, the jump-to-last layout.
//! - anything in between: produced by the anchor-preserving rebuild.
//!
//! Page 0 holds the `t` slots before the walk and the final page the `t`
//! slots after it, so sliding past either edge shows exactly what the next
//! rebuild will put on screen.

use std::sync::Arc;

use marquee_model::TileLike;
use tracing::debug;

use crate::collection::TileCollection;
use crate::error::{Result, SliderError};
use crate::page_map::{PageLayout, PageMap};
use crate::page_utils::{
    max_pages, padding_needed, start_index, total_tiles, wrapped_slots,
};

/// Reject inputs that cannot produce at least two real pages.
pub fn ensure_paginates(tile_count: usize, tiles_per_page: usize) -> Result<()> {
    if tile_count == 0 {
        return Err(SliderError::EmptyCollection);
    }
    if tiles_per_page == 0 {
        return Err(SliderError::ZeroTilesPerPage);
    }
    if tiles_per_page >= tile_count {
        return Err(SliderError::TilesPerPageTooLarge {
            tiles_per_page,
            tile_count,
        });
    }
    Ok(())
}

/// Layout shown on first mount: page 1 starts at the first tile.
pub fn build_initial(
    tile_count: usize,
    tiles_per_page: usize,
) -> Result<PageLayout> {
    ensure_paginates(tile_count, tiles_per_page)?;
    Ok(walk(tile_count, tiles_per_page, 0, |_| 1))
}

/// Jump back to the start. Same map as the initial build, on page 1.
pub fn build_first(
    tile_count: usize,
    tiles_per_page: usize,
) -> Result<PageLayout> {
    build_initial(tile_count, tiles_per_page)
}

/// Jump to the end: the last real page finishes on the last tile and the
/// first real page is padded in front with tail tiles.
pub fn build_last(
    tile_count: usize,
    tiles_per_page: usize,
) -> Result<PageLayout> {
    ensure_paginates(tile_count, tiles_per_page)?;
    let borrowed = padding_needed(tile_count, tiles_per_page);
    Ok(walk(tile_count, tiles_per_page, borrowed, |max_page| max_page - 2))
}

/// Rebuild with a new page size so that the tile at `anchor_index` sits on
/// the returned `current_page`.
///
/// When the padding allows it the anchor becomes the first tile of its
/// page; otherwise the layout stays start-aligned and the anchor lands
/// wherever the chunking puts it.
pub fn layout_around_index(
    tile_count: usize,
    anchor_index: usize,
    tiles_per_page: usize,
) -> Result<PageLayout> {
    ensure_paginates(tile_count, tiles_per_page)?;
    let anchor = anchor_index % tile_count;
    let padding = padding_needed(tile_count, tiles_per_page);
    let aligning = (tiles_per_page - anchor % tiles_per_page) % tiles_per_page;
    let borrowed = if aligning <= padding { aligning } else { 0 };

    let layout = walk(tile_count, tiles_per_page, borrowed, |_| {
        1 + (anchor + borrowed) / tiles_per_page
    });
    debug!(
        anchor,
        tiles_per_page,
        borrowed,
        current_page = layout.current_page,
        "rebuilt page map around anchor"
    );
    Ok(layout)
}

/// Anchor-preserving rebuild by tile identity.
pub fn rebuild_around_anchor<T: TileLike>(
    tiles: &TileCollection<T>,
    anchor: &T::Id,
    tiles_per_page: usize,
) -> Result<PageLayout> {
    let anchor_index =
        tiles
            .position(anchor)
            .ok_or_else(|| SliderError::UnknownTile {
                id: format!("{anchor:?}"),
            })?;
    layout_around_index(tiles.len(), anchor_index, tiles_per_page)
}

fn walk(
    tile_count: usize,
    tiles_per_page: usize,
    borrowed: usize,
    current_page: impl FnOnce(usize) -> usize,
) -> PageLayout {
    let max_page = max_pages(tile_count, tiles_per_page);
    let real_slots = total_tiles(tile_count, tiles_per_page);
    let padding = real_slots - tile_count;
    let start = start_index(0, borrowed, tile_count);

    let mut pages = Vec::with_capacity(max_page);
    pages.push(wrapped_slots(
        start_index(start, tiles_per_page, tile_count),
        tiles_per_page,
        tile_count,
    ));

    let mut cursor = start;
    for _ in 0..real_slots / tiles_per_page {
        pages.push(wrapped_slots(cursor, tiles_per_page, tile_count));
        cursor = (cursor + tiles_per_page) % tile_count;
    }

    pages.push(wrapped_slots(cursor, tiles_per_page, tile_count));

    PageLayout {
        pages: Arc::new(PageMap::from_pages(tiles_per_page, pages)),
        current_page: current_page(max_page),
        first_page_length: tiles_per_page - borrowed,
        last_page_length: tiles_per_page - (padding - borrowed),
    }
}
