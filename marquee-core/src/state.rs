//! Pagination state and its pure transitions
//!
//! `PaginationState` is a value: every transition borrows the current state
//! and returns the next one, so the owner swaps page map and current page in
//! a single assignment and observers never see a half-applied move.

use std::sync::Arc;

use tracing::debug;

use crate::builder;
use crate::error::Result;
use crate::page_map::{PageLayout, PageMap};
use crate::translate::{Direction, translate_percentage};
use crate::validation::{self, ValidationMode};

/// Navigation requests understood by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageAction {
    Next,
    Prev,
    First,
    Last,
}

/// Change applied once the slide animation finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// Move to another page of the current map.
    Advance(usize),
    /// Replace the map with the start-aligned layout, on page 1.
    ResetToStart,
    /// Replace the map with the end-aligned layout, on the last real page.
    ResetToEnd,
}

/// A planned transition waiting for its animation to finish.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingTransition {
    pub action: PageAction,
    /// `None` for explicit jumps, which swap without sliding.
    pub direction: Option<Direction>,
    pub mutation: Mutation,
    pub target_page: usize,
    pub translate_percentage: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Animating(PendingTransition),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginationState {
    pages: Arc<PageMap>,
    current_page: usize,
    first_page_length: usize,
    last_page_length: usize,
    /// The installed map is start-aligned. Exclusive with
    /// `is_last_page_visited`; start wins for evenly divided collections
    /// except right after a jump to the end.
    is_first_page_visited: bool,
    is_last_page_visited: bool,
    has_paginated: bool,
    phase: Phase,
    translate_percentage: f32,
}

impl PaginationState {
    /// State on first mount: start-aligned map, page 1.
    pub fn initial(
        tile_count: usize,
        tiles_per_page: usize,
        mode: ValidationMode,
    ) -> Result<Self> {
        let layout = builder::build_initial(tile_count, tiles_per_page)?;
        validation::enforce("initial build", &layout, tile_count, mode)?;
        Ok(Self::from_layout(layout, false))
    }

    fn from_layout(layout: PageLayout, has_paginated: bool) -> Self {
        let start_aligned = layout.is_start_aligned();
        Self {
            is_first_page_visited: start_aligned,
            is_last_page_visited: layout.is_end_aligned() && !start_aligned,
            pages: layout.pages,
            current_page: layout.current_page,
            first_page_length: layout.first_page_length,
            last_page_length: layout.last_page_length,
            has_paginated,
            phase: Phase::Idle,
            translate_percentage: 0.0,
        }
    }

    /// Decide what `action` does from the current page. Pure; does not
    /// consider whether an animation is already running.
    pub fn plan(&self, action: PageAction) -> PendingTransition {
        let current = self.current_page;
        let max_page = self.max_page();
        let tiles_per_page = self.tiles_per_page();

        let (direction, mutation, boundary_length, crossing) = match action {
            PageAction::Next if current + 3 == max_page => (
                Some(Direction::Right),
                Mutation::ResetToEnd,
                self.last_page_length,
                true,
            ),
            PageAction::Next if current + 2 == max_page => (
                Some(Direction::Right),
                Mutation::ResetToStart,
                self.last_page_length,
                true,
            ),
            PageAction::Next => (
                Some(Direction::Right),
                Mutation::Advance(current + 1),
                tiles_per_page,
                false,
            ),
            PageAction::Prev if current == 2 => (
                Some(Direction::Left),
                Mutation::ResetToStart,
                self.first_page_length,
                true,
            ),
            PageAction::Prev if current == 1 => (
                Some(Direction::Left),
                Mutation::ResetToEnd,
                self.first_page_length,
                true,
            ),
            PageAction::Prev => (
                Some(Direction::Left),
                Mutation::Advance(current - 1),
                tiles_per_page,
                false,
            ),
            PageAction::First => (None, Mutation::ResetToStart, 0, false),
            PageAction::Last => (None, Mutation::ResetToEnd, 0, false),
        };

        let target_page = match mutation {
            Mutation::Advance(page) => page,
            Mutation::ResetToStart => 1,
            Mutation::ResetToEnd => max_page - 2,
        };
        let translate = direction.map_or(0.0, |direction| {
            translate_percentage(
                direction,
                boundary_length,
                crossing,
                tiles_per_page,
            )
        });

        PendingTransition {
            action,
            direction,
            mutation,
            target_page,
            translate_percentage: translate,
        }
    }

    /// Enter the animating phase for `action`. Returns `None` while another
    /// transition is still animating.
    pub fn begin(&self, action: PageAction) -> Option<(Self, PendingTransition)> {
        if self.is_animating() {
            return None;
        }
        let pending = self.plan(action);
        let next = Self {
            phase: Phase::Animating(pending),
            translate_percentage: pending.translate_percentage,
            ..self.clone()
        };
        Some((next, pending))
    }

    /// Apply the pending mutation and return to idle with the offset reset.
    /// Idle states are returned unchanged.
    pub fn complete(&self, tile_count: usize, mode: ValidationMode) -> Result<Self> {
        let Phase::Animating(pending) = self.phase else {
            return Ok(self.clone());
        };
        let tiles_per_page = self.tiles_per_page();

        let mut next = match pending.mutation {
            Mutation::Advance(page) => Self {
                current_page: page,
                phase: Phase::Idle,
                translate_percentage: 0.0,
                ..self.clone()
            },
            Mutation::ResetToStart => {
                let layout = builder::build_first(tile_count, tiles_per_page)?;
                validation::enforce("jump to first", &layout, tile_count, mode)?;
                Self::from_layout(layout, self.has_paginated)
            }
            Mutation::ResetToEnd => {
                let layout = builder::build_last(tile_count, tiles_per_page)?;
                validation::enforce("jump to last", &layout, tile_count, mode)?;
                Self {
                    is_first_page_visited: false,
                    is_last_page_visited: true,
                    ..Self::from_layout(layout, true)
                }
            }
        };
        if pending.action == PageAction::Next {
            next.has_paginated = true;
        }

        debug!(
            action = ?pending.action,
            from = self.current_page,
            to = next.current_page,
            "page transition applied"
        );
        Ok(next)
    }

    /// Drop a pending transition without applying it.
    pub fn cancel_animation(&self) -> Self {
        Self {
            phase: Phase::Idle,
            translate_percentage: 0.0,
            ..self.clone()
        }
    }

    /// Rebuild for a new page size around the tile at `anchor_index`.
    pub fn resized(
        &self,
        anchor_index: usize,
        tiles_per_page: usize,
        tile_count: usize,
        mode: ValidationMode,
    ) -> Result<Self> {
        let layout =
            builder::layout_around_index(tile_count, anchor_index, tiles_per_page)?;
        validation::enforce("resize", &layout, tile_count, mode)?;
        Ok(Self::from_layout(layout, self.has_paginated))
    }

    pub fn pages(&self) -> &Arc<PageMap> {
        &self.pages
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn max_page(&self) -> usize {
        self.pages.max_page()
    }

    pub fn tiles_per_page(&self) -> usize {
        self.pages.tiles_per_page()
    }

    pub fn first_page_length(&self) -> usize {
        self.first_page_length
    }

    pub fn last_page_length(&self) -> usize {
        self.last_page_length
    }

    pub fn is_first_page_visited(&self) -> bool {
        self.is_first_page_visited
    }

    pub fn is_last_page_visited(&self) -> bool {
        self.is_last_page_visited
    }

    pub fn has_paginated(&self) -> bool {
        self.has_paginated
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating(_))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn translate_percentage(&self) -> f32 {
        self.translate_percentage
    }

    /// Collection slots on the current page.
    pub fn current_slots(&self) -> &[usize] {
        self.pages.page(self.current_page).unwrap_or_default()
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page + 2 == self.max_page()
    }

    pub fn is_second_to_last_page(&self) -> bool {
        self.current_page + 3 == self.max_page()
    }
}
