//! Tile records shared between the slider engine and its rendering layer.
#![allow(missing_docs)]

pub mod ids;
pub mod tile;
pub mod tile_like;

pub use ids::TileId;
pub use tile::{MediaKind, MediaTile};
pub use tile_like::TileLike;
