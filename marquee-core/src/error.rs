use thiserror::Error;

/// Structural problems found in a rebuilt page map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageMapViolation {
    #[error("expected {expected} pages, found {actual}")]
    PageCount { expected: usize, actual: usize },
    #[error("page {page} holds {actual} tiles, expected {expected}")]
    MalformedPage {
        page: usize,
        expected: usize,
        actual: usize,
    },
    #[error("page {page} references slot {slot} outside a collection of {len}")]
    SlotOutOfRange { page: usize, slot: usize, len: usize },
    #[error(
        "seam on page {page}: slot {found} follows {previous}, expected {expected}"
    )]
    Seam {
        page: usize,
        previous: usize,
        expected: usize,
        found: usize,
    },
    #[error(
        "boundary lengths first={first} last={last} outside 1..={tiles_per_page}"
    )]
    BoundaryLength {
        first: usize,
        last: usize,
        tiles_per_page: usize,
    },
    #[error("real pages cover {actual} tiles, collection has {expected}")]
    Coverage { expected: usize, actual: usize },
    #[error("current page {page} is not a real page (max page {max_page})")]
    CurrentPage { page: usize, max_page: usize },
}

/// Errors raised by the slider engine. None of these are meant for end
/// users; they flag configuration or programming mistakes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SliderError {
    #[error("slider needs at least one tile")]
    EmptyCollection,
    #[error("duplicate tile id in collection: {id}")]
    DuplicateTile { id: String },
    #[error("tiles per page must be at least 1")]
    ZeroTilesPerPage,
    #[error(
        "{tiles_per_page} tiles per page cannot paginate {tile_count} tiles; \
         need more tiles than fit on one page"
    )]
    TilesPerPageTooLarge {
        tiles_per_page: usize,
        tile_count: usize,
    },
    #[error("tile {id} is not part of this slider")]
    UnknownTile { id: String },
    #[error("{label}: page map invariant violated: {violation}")]
    InvariantViolation {
        label: &'static str,
        violation: PageMapViolation,
    },
}

pub type Result<T> = std::result::Result<T, SliderError>;
