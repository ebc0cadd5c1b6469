//! # Marquee Core
//!
//! Pagination engine for a horizontally scrolling, endlessly looping media
//! slider. Given an ordered tile collection and a viewport, it decides which
//! tiles sit on which page and how paging next or previous wraps seamlessly
//! from the end of the collection back to the start.
//!
//! ## Architecture
//!
//! - [`builder`]: pure page map construction for the initial, first, last
//!   and anchor-preserving layouts
//! - [`state`]: the pagination state value and its transitions
//! - [`slider`]: the controller that owns state, timers and observers
//! - [`scheduler`]: cancellable timer continuation, virtual or tokio-backed
//! - [`validation`]: invariant checks run before any map is installed
//! - [`config`]: `SliderConfig` loading from TOML, JSON or the environment
//!
//! The engine makes no rendering calls. Hosts read pages and the
//! `is_animating` flag, draw tiles and feed fired timers back in.
//!
//! ## Examples
//!
//! ```
//! use std::time::Duration;
//!
//! use marquee_core::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tiles: Vec<MediaTile> = (0..10)
//!     .map(|n| MediaTile::new(format!("Title {n}"), MediaKind::Movie))
//!     .collect();
//! let mut slider = Slider::new(
//!     TileCollection::new(tiles)?,
//!     4,
//!     ManualScheduler::new(),
//!     SliderConfig::default(),
//! )?;
//!
//! slider.next();
//! assert!(slider.is_animating());
//! slider.advance(Duration::from_millis(700))?;
//! assert_eq!(slider.state().current_page(), 2);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod builder;
pub mod collection;
pub mod config;
pub mod constants;
pub mod error;
pub mod page_map;
pub mod page_utils;
pub mod scheduler;
pub mod slider;
pub mod state;
pub mod translate;
pub mod validation;

pub use collection::TileCollection;
pub use config::{SliderConfig, SliderConfigSource};
pub use error::{PageMapViolation, Result, SliderError};
pub use page_map::{PageLayout, PageMap};
pub use scheduler::{ManualScheduler, Scheduler, TokioScheduler, TransitionToken};
pub use slider::{RenderedTile, Slider, TransitionStatus};
pub use state::{PageAction, PaginationState, Phase};
pub use translate::Direction;
pub use validation::ValidationMode;

/// Everything a host needs to mount and drive a slider.
pub mod prelude {
    pub use crate::collection::TileCollection;
    pub use crate::config::SliderConfig;
    pub use crate::error::SliderError;
    pub use crate::scheduler::{
        ManualScheduler, Scheduler, TokioScheduler, TransitionToken,
    };
    pub use crate::slider::{RenderedTile, Slider, TransitionStatus};
    pub use crate::state::PaginationState;
    pub use marquee_model::{MediaKind, MediaTile, TileId, TileLike};
}
