//! Invariant checks run on every rebuilt page map before it is installed.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::{PageMapViolation, Result, SliderError};
use crate::page_map::PageLayout;
use crate::page_utils::max_pages;

/// What to do when a rebuilt page map fails validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Log the violation, keep the previous map, return an error.
    #[default]
    Reject,
    /// Abort immediately.
    Panic,
}

/// Verify page counts, page sizes, slot ranges, seamless wraparound and
/// exact coverage of the collection by the real pages.
pub fn check(
    layout: &PageLayout,
    tile_count: usize,
) -> std::result::Result<(), PageMapViolation> {
    let map = &layout.pages;
    let tiles_per_page = map.tiles_per_page();

    let expected_pages = if tiles_per_page == 0 {
        0
    } else {
        max_pages(tile_count, tiles_per_page)
    };
    if map.max_page() != expected_pages {
        return Err(PageMapViolation::PageCount {
            expected: expected_pages,
            actual: map.max_page(),
        });
    }

    let last_real = map.max_page().saturating_sub(2);
    let mut previous: Option<usize> = None;
    for (index, slots) in map.iter() {
        let is_boundary = index == 0 || index > last_real;
        let malformed = if is_boundary {
            slots.is_empty() || slots.len() > tiles_per_page
        } else {
            slots.len() != tiles_per_page
        };
        if malformed {
            return Err(PageMapViolation::MalformedPage {
                page: index,
                expected: tiles_per_page,
                actual: slots.len(),
            });
        }

        for &slot in slots {
            if slot >= tile_count {
                return Err(PageMapViolation::SlotOutOfRange {
                    page: index,
                    slot,
                    len: tile_count,
                });
            }
            if let Some(prev) = previous {
                let expected = (prev + 1) % tile_count;
                if slot != expected {
                    return Err(PageMapViolation::Seam {
                        page: index,
                        previous: prev,
                        expected,
                        found: slot,
                    });
                }
            }
            previous = Some(slot);
        }
    }

    let first = layout.first_page_length;
    let last = layout.last_page_length;
    if !(1..=tiles_per_page).contains(&first)
        || !(1..=tiles_per_page).contains(&last)
    {
        return Err(PageMapViolation::BoundaryLength {
            first,
            last,
            tiles_per_page,
        });
    }

    let covered = (last_real * tiles_per_page)
        .saturating_sub(tiles_per_page - first)
        .saturating_sub(tiles_per_page - last);
    if covered != tile_count {
        return Err(PageMapViolation::Coverage {
            expected: tile_count,
            actual: covered,
        });
    }

    if layout.current_page == 0 || layout.current_page > last_real {
        return Err(PageMapViolation::CurrentPage {
            page: layout.current_page,
            max_page: map.max_page(),
        });
    }

    Ok(())
}

/// Run [`check`] and apply `mode` to a failure. A layout that fails is
/// never handed back to the caller for installation.
pub fn enforce(
    label: &'static str,
    layout: &PageLayout,
    tile_count: usize,
    mode: ValidationMode,
) -> Result<()> {
    let Err(violation) = check(layout, tile_count) else {
        return Ok(());
    };

    match mode {
        ValidationMode::Panic => {
            panic!("{label}: page map invariant violated: {violation}")
        }
        ValidationMode::Reject => {
            error!(
                label,
                %violation,
                tile_count,
                tiles_per_page = layout.tiles_per_page(),
                "rejected corrupt page map"
            );
            Err(SliderError::InvariantViolation { label, violation })
        }
    }
}
