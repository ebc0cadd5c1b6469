//! Slider constants
//!
//! Compiled defaults for slider behavior. `SliderConfig` fields left unset
//! fall back to these, so tuning here moves every slider at once.

use crate::page_utils::Breakpoint;

/// Page transition timing.
pub mod transition {
    /// Time (ms) the track spends sliding before the page swap is applied.
    pub const DURATION_MS: u64 = 700;
}

/// Viewport breakpoints deciding how many tiles fit on one page.
pub mod layout {
    use super::Breakpoint;

    /// Widest first. Mirrors the tile image `sizes` hints: 16.66vw, 20vw,
    /// 25vw, 33.33vw, then 50vw below 768px.
    pub const BREAKPOINTS: &[Breakpoint] = &[
        Breakpoint {
            min_width: 1536,
            tiles_per_page: 6,
        },
        Breakpoint {
            min_width: 1280,
            tiles_per_page: 5,
        },
        Breakpoint {
            min_width: 1024,
            tiles_per_page: 4,
        },
        Breakpoint {
            min_width: 768,
            tiles_per_page: 3,
        },
    ];

    /// Tiles per page below the narrowest breakpoint.
    pub const FALLBACK_TILES_PER_PAGE: usize = 2;
}

/// Environment variables consulted by `SliderConfig::load_from_env`.
pub mod env {
    pub const CONFIG_PATH: &str = "MARQUEE_SLIDER_CONFIG_PATH";
    pub const CONFIG_JSON: &str = "MARQUEE_SLIDER_CONFIG_JSON";
}
