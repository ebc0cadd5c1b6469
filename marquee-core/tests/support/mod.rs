//! Shared fixtures for slider integration tests.
#![allow(dead_code)]

use std::collections::HashSet;

use marquee_core::prelude::*;
use marquee_core::{PaginationState, validation};
use tracing_subscriber::EnvFilter;

/// Minimal tile identified by its position in the fixture collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile(pub u32);

impl TileLike for Tile {
    type Id = u32;

    fn tile_id(&self) -> &u32 {
        &self.0
    }
}

/// Install a test-writer subscriber honouring `RUST_LOG`. Safe to call from
/// every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("marquee_core=debug")),
        )
        .with_test_writer()
        .try_init();
}

pub fn tiles(count: u32) -> TileCollection<Tile> {
    TileCollection::new((0..count).map(Tile).collect::<Vec<_>>())
        .expect("fixture collection")
}

pub fn manual_slider(
    count: u32,
    tiles_per_page: usize,
) -> Slider<Tile, ManualScheduler> {
    init_tracing();
    Slider::new(
        tiles(count),
        tiles_per_page,
        ManualScheduler::new(),
        SliderConfig::default(),
    )
    .expect("fixture slider")
}

pub fn ids(items: &[&Tile]) -> Vec<u32> {
    items.iter().map(|tile| tile.0).collect()
}

pub fn current_ids<S: Scheduler>(slider: &Slider<Tile, S>) -> Vec<u32> {
    ids(&slider.current_page_items())
}

pub fn page_ids<S: Scheduler>(slider: &Slider<Tile, S>, page: usize) -> Vec<u32> {
    ids(&slider.page_items(page).expect("page exists"))
}

/// Start an action and run its timer to completion.
pub fn step(
    slider: &mut Slider<Tile, ManualScheduler>,
    action: fn(&mut Slider<Tile, ManualScheduler>) -> TransitionStatus,
) {
    let status = action(slider);
    assert!(matches!(status, TransitionStatus::Scheduled(_)));
    assert_eq!(slider.settle().expect("transition completes"), 1);
}

/// Every tile appears exactly once across the trimmed real pages.
pub fn assert_complete(state: &PaginationState, tile_count: usize) {
    let pages = state.pages();
    let last_real = state.max_page() - 2;
    let tiles_per_page = state.tiles_per_page();
    let mut seen = Vec::with_capacity(tile_count);

    for (index, slots) in pages.real_pages() {
        let trimmed = if index == 1 {
            &slots[tiles_per_page - state.first_page_length()..]
        } else if index == last_real {
            &slots[..state.last_page_length()]
        } else {
            slots
        };
        seen.extend_from_slice(trimmed);
    }

    let unique: HashSet<_> = seen.iter().copied().collect();
    assert_eq!(seen.len(), tile_count, "tiles covered: {seen:?}");
    assert_eq!(unique.len(), tile_count, "duplicate tiles: {seen:?}");

    let layout = marquee_core::PageLayout {
        pages: pages.clone(),
        current_page: state.current_page(),
        first_page_length: state.first_page_length(),
        last_page_length: state.last_page_length(),
    };
    validation::check(&layout, tile_count).expect("valid page map");
}
