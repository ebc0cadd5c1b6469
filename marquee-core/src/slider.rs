//! Slider controller
//!
//! Owns the tile collection, the current [`PaginationState`] and the single
//! in-flight transition timer. Every state change goes out on a watch
//! channel so an adapter can block input while `is_animating` is set.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use marquee_model::TileLike;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::collection::TileCollection;
use crate::config::SliderConfig;
use crate::error::Result;
use crate::scheduler::{
    ManualScheduler, Scheduler, TransitionToken, next_instance_id,
};
use crate::state::{PageAction, PaginationState};

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStatus {
    /// The slide started; the page swap lands when this token fires.
    Scheduled(TransitionToken),
    /// Another transition is still animating.
    Ignored,
}

/// One tile of the render window around the current page.
#[derive(Debug, PartialEq)]
pub struct RenderedTile<'a, T> {
    pub tile: &'a T,
    pub page: usize,
    /// 1-based position on the visible page; `None` off screen.
    pub display_number: Option<usize>,
}

pub struct Slider<T: TileLike, S: Scheduler> {
    instance: u64,
    tiles: Arc<TileCollection<T>>,
    state: PaginationState,
    in_flight: Option<TransitionToken>,
    sequence: u64,
    scheduler: S,
    config: SliderConfig,
    updates: watch::Sender<PaginationState>,
}

impl<T: TileLike, S: Scheduler> Slider<T, S> {
    /// Mount a slider showing page 1 of the start-aligned layout.
    pub fn new(
        tiles: impl Into<Arc<TileCollection<T>>>,
        tiles_per_page: usize,
        scheduler: S,
        config: SliderConfig,
    ) -> Result<Self> {
        let tiles = tiles.into();
        let state = PaginationState::initial(
            tiles.len(),
            tiles_per_page,
            config.validation_mode(),
        )?;
        let (updates, _) = watch::channel(state.clone());
        let instance = next_instance_id();

        debug!(
            instance,
            tile_count = tiles.len(),
            tiles_per_page,
            max_page = state.max_page(),
            "slider mounted"
        );

        Ok(Self {
            instance,
            tiles,
            state,
            in_flight: None,
            sequence: 0,
            scheduler,
            config,
            updates,
        })
    }

    /// Mount with tiles per page derived from the viewport width.
    pub fn with_viewport(
        tiles: impl Into<Arc<TileCollection<T>>>,
        viewport_width: u32,
        scheduler: S,
        config: SliderConfig,
    ) -> Result<Self> {
        let tiles_per_page = config.tiles_per_page(viewport_width);
        Self::new(tiles, tiles_per_page, scheduler, config)
    }

    pub fn next(&mut self) -> TransitionStatus {
        self.request(PageAction::Next)
    }

    pub fn prev(&mut self) -> TransitionStatus {
        self.request(PageAction::Prev)
    }

    pub fn go_to_first_page(&mut self) -> TransitionStatus {
        self.request(PageAction::First)
    }

    pub fn go_to_last_page(&mut self) -> TransitionStatus {
        self.request(PageAction::Last)
    }

    fn request(&mut self, action: PageAction) -> TransitionStatus {
        let Some((animating, pending)) = self.state.begin(action) else {
            warn!(
                instance = self.instance,
                ?action,
                current_page = self.state.current_page(),
                "page action ignored while a transition is animating"
            );
            return TransitionStatus::Ignored;
        };

        self.sequence += 1;
        let token = TransitionToken::new(self.instance, self.sequence);
        self.scheduler
            .schedule_after(self.config.transition_duration(), token);
        self.in_flight = Some(token);

        debug!(
            instance = self.instance,
            ?action,
            from = self.state.current_page(),
            to = pending.target_page,
            translate = pending.translate_percentage,
            "page transition started"
        );
        self.install(animating);
        TransitionStatus::Scheduled(token)
    }

    /// Deliver a fired timer. Returns `Ok(true)` when it completed the
    /// in-flight transition and `Ok(false)` for stale tokens.
    ///
    /// A rebuild that fails validation leaves the previous map installed,
    /// returns the slider to idle and surfaces the error.
    pub fn on_timer(&mut self, token: TransitionToken) -> Result<bool> {
        if self.in_flight != Some(token) {
            debug!(
                instance = self.instance,
                ?token,
                in_flight = ?self.in_flight,
                "stale transition timer ignored"
            );
            return Ok(false);
        }
        self.in_flight = None;

        match self
            .state
            .complete(self.tiles.len(), self.config.validation_mode())
        {
            Ok(next) => {
                self.install(next);
                Ok(true)
            }
            Err(err) => {
                let idle = self.state.cancel_animation();
                self.install(idle);
                Err(err)
            }
        }
    }

    /// Rebuild for a new page size, keeping the current page's leading tile
    /// on screen. Cancels any running transition. An unchanged page size
    /// returns `Ok(false)` without touching state.
    pub fn on_resize(&mut self, tiles_per_page: usize) -> Result<bool> {
        if tiles_per_page == self.state.tiles_per_page() {
            return Ok(false);
        }
        self.cancel_in_flight();

        let anchor = self.state.current_slots().first().copied().unwrap_or(0);
        let resized = self.state.resized(
            anchor,
            tiles_per_page,
            self.tiles.len(),
            self.config.validation_mode(),
        );
        match resized {
            Ok(next) => {
                debug!(
                    instance = self.instance,
                    anchor,
                    from = self.state.tiles_per_page(),
                    to = tiles_per_page,
                    current_page = next.current_page(),
                    "slider resized"
                );
                self.install(next);
                Ok(true)
            }
            Err(err) => {
                let idle = self.state.cancel_animation();
                self.install(idle);
                Err(err)
            }
        }
    }

    /// [`on_resize`](Self::on_resize) with tiles per page derived from the
    /// configured breakpoints.
    pub fn on_viewport_resize(&mut self, viewport_width: u32) -> Result<bool> {
        self.on_resize(self.config.tiles_per_page(viewport_width))
    }

    /// Cancel the pending timer and settle on the current page.
    pub fn shutdown(&mut self) {
        self.cancel_in_flight();
        if self.state.is_animating() {
            let idle = self.state.cancel_animation();
            self.install(idle);
        }
    }

    fn cancel_in_flight(&mut self) {
        if let Some(token) = self.in_flight.take() {
            self.scheduler.cancel(token);
        }
    }

    fn install(&mut self, state: PaginationState) {
        self.state = state;
        self.updates.send_replace(self.state.clone());
    }

    pub fn current_page_items(&self) -> Vec<&T> {
        self.tiles.resolve(self.state.current_slots())
    }

    /// Tiles on `page`, boundary pages included.
    pub fn page_items(&self, page: usize) -> Option<Vec<&T>> {
        self.state
            .pages()
            .page(page)
            .map(|slots| self.tiles.resolve(slots))
    }

    /// Tiles to draw: the previous page (once the slider has moved), the
    /// current page numbered from 1, and the next page.
    pub fn rendered_tiles(&self) -> Vec<RenderedTile<'_, T>> {
        let current = self.state.current_page();
        let first = if self.state.has_paginated() {
            current - 1
        } else {
            current
        };

        let mut rendered = Vec::with_capacity(3 * self.state.tiles_per_page());
        for page in first..=current + 1 {
            let Some(slots) = self.state.pages().page(page) else {
                continue;
            };
            let tiles = self.tiles.resolve(slots);
            for (position, tile) in tiles.into_iter().enumerate() {
                rendered.push(RenderedTile {
                    tile,
                    page,
                    display_number: (page == current).then_some(position + 1),
                });
            }
        }
        rendered
    }

    pub fn is_first_page(&self) -> bool {
        self.state.is_first_page()
    }

    pub fn is_last_page(&self) -> bool {
        self.state.is_last_page()
    }

    pub fn is_second_to_last_page(&self) -> bool {
        self.state.is_second_to_last_page()
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn tiles(&self) -> &TileCollection<T> {
        &self.tiles
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn instance(&self) -> u64 {
        self.instance
    }

    /// Token of the transition currently waiting on its timer.
    pub fn in_flight(&self) -> Option<TransitionToken> {
        self.in_flight
    }

    /// Receiver that observes every installed state.
    pub fn subscribe(&self) -> watch::Receiver<PaginationState> {
        self.updates.subscribe()
    }
}

impl<T: TileLike> Slider<T, ManualScheduler> {
    /// Advance the virtual clock and deliver every timer that came due.
    /// Returns how many transitions completed.
    pub fn advance(&mut self, by: Duration) -> Result<usize> {
        let mut completed = 0;
        for token in self.scheduler.advance(by) {
            if self.on_timer(token)? {
                completed += 1;
            }
        }
        Ok(completed)
    }

    /// Run the in-flight transition to completion, if any.
    pub fn settle(&mut self) -> Result<usize> {
        self.advance(self.config.transition_duration())
    }
}

impl<T: TileLike, S: Scheduler> Drop for Slider<T, S> {
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}

impl<T: TileLike, S: Scheduler> fmt::Debug for Slider<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("instance", &self.instance)
            .field("tile_count", &self.tiles.len())
            .field("state", &self.state)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Tile(u32);

    impl TileLike for Tile {
        type Id = u32;

        fn tile_id(&self) -> &u32 {
            &self.0
        }
    }

    fn slider(count: u32, tiles_per_page: usize) -> Slider<Tile, ManualScheduler> {
        let tiles = TileCollection::new((0..count).map(Tile).collect::<Vec<_>>())
            .unwrap();
        Slider::new(
            tiles,
            tiles_per_page,
            ManualScheduler::new(),
            SliderConfig::default(),
        )
        .unwrap()
    }

    fn ids(items: &[&Tile]) -> Vec<u32> {
        items.iter().map(|tile| tile.0).collect()
    }

    #[test]
    fn page_swap_waits_for_the_timer() {
        let mut slider = slider(10, 4);
        assert!(matches!(slider.next(), TransitionStatus::Scheduled(_)));
        assert!(slider.is_animating());
        assert_eq!(ids(&slider.current_page_items()), vec![0, 1, 2, 3]);

        assert_eq!(slider.advance(Duration::from_millis(699)).unwrap(), 0);
        assert_eq!(slider.advance(Duration::from_millis(1)).unwrap(), 1);
        assert!(!slider.is_animating());
        assert_eq!(ids(&slider.current_page_items()), vec![4, 5, 6, 7]);
    }

    #[test]
    fn stale_token_is_ignored() {
        let mut slider = slider(10, 4);
        let TransitionStatus::Scheduled(token) = slider.next() else {
            panic!("expected a scheduled transition");
        };
        slider.settle().unwrap();
        assert_eq!(slider.on_timer(token), Ok(false));
        assert_eq!(slider.state().current_page(), 2);
    }

    #[test]
    fn render_window_hides_previous_page_until_first_move() {
        let mut slider = slider(10, 4);
        let rendered = slider.rendered_tiles();
        assert_eq!(rendered.len(), 8);
        assert_eq!(rendered[0].display_number, Some(1));
        assert_eq!(rendered[4].display_number, None);

        slider.next();
        slider.settle().unwrap();
        let rendered = slider.rendered_tiles();
        assert_eq!(rendered.len(), 12);
        assert_eq!(rendered[0].page, 1);
        assert_eq!(rendered[4].tile, &Tile(4));
        assert_eq!(rendered[4].display_number, Some(1));
        assert_eq!(rendered[7].display_number, Some(4));
    }

    #[test]
    fn shutdown_cancels_pending_timer() {
        let mut slider = slider(10, 4);
        slider.prev();
        slider.shutdown();
        assert!(!slider.is_animating());
        assert_eq!(slider.scheduler().pending(), 0);
        assert_eq!(slider.state().current_page(), 1);
    }

    #[test]
    fn unchanged_page_size_is_a_no_op() {
        let mut slider = slider(10, 4);
        assert_eq!(slider.on_resize(4), Ok(false));
        assert_eq!(slider.on_viewport_resize(1100), Ok(false));
        assert_eq!(slider.on_viewport_resize(1300), Ok(true));
        assert_eq!(slider.state().tiles_per_page(), 5);
    }
}
