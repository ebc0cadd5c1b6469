use std::fmt::{self, Display};

use crate::ids::TileId;
use crate::tile_like::TileLike;

const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

/// Kind of media a tile links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MediaKind {
    #[default]
    Movie,
    Series,
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Movie => write!(f, "Movie"),
            MediaKind::Series => write!(f, "TV Series"),
        }
    }
}

/// A movie or series thumbnail shown in a slider row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaTile {
    pub id: TileId,
    pub title: String,
    /// TMDB backdrop path, e.g. `/abc123.jpg`
    pub backdrop_path: Option<String>,
    pub year: Option<u16>,
    pub kind: MediaKind,
    /// Content rating label such as `PG-13`
    pub rating: Option<String>,
}

impl MediaTile {
    pub fn new(title: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            id: TileId::new(),
            title: title.into(),
            backdrop_path: None,
            year: None,
            kind,
            rating: None,
        }
    }

    pub fn with_backdrop(mut self, path: impl Into<String>) -> Self {
        self.backdrop_path = Some(path.into());
        self
    }

    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    /// Full TMDB image URL for the backdrop at the given size segment
    /// (`original`, `w1280`, ...).
    pub fn backdrop_url(&self, size: &str) -> Option<String> {
        self.backdrop_path.as_deref().map(|path| {
            let path = path.trim_start_matches('/');
            format!("{TMDB_IMAGE_BASE}/{size}/{path}")
        })
    }
}

impl TileLike for MediaTile {
    type Id = TileId;

    fn tile_id(&self) -> &TileId {
        &self.id
    }
}
