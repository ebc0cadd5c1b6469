//! Translate offsets for the slide animation that precedes a page swap.

use serde::{Deserialize, Serialize};

/// Direction of travel through the pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Towards earlier pages.
    Left,
    /// Towards later pages.
    Right,
}

/// How far the track should move, as a percentage of one page width.
///
/// Ordinary moves travel a full page. Crossing a boundary next to a short
/// page travels only `boundary_length` tiles, the width actually rendered
/// there. Moving right yields a negative offset, moving left a positive one.
pub fn translate_percentage(
    direction: Direction,
    boundary_length: usize,
    crossing_boundary: bool,
    tiles_per_page: usize,
) -> f32 {
    let magnitude = if crossing_boundary
        && tiles_per_page > 0
        && boundary_length < tiles_per_page
    {
        100.0 * boundary_length as f32 / tiles_per_page as f32
    } else {
        100.0
    };

    match direction {
        Direction::Left => magnitude,
        Direction::Right => -magnitude,
    }
}
