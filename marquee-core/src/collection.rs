//! Immutable tile collection the slider pages through.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use marquee_model::TileLike;

use crate::error::{Result, SliderError};

/// Ordered, shared, immutable tiles plus an id lookup.
///
/// Fixed for the lifetime of a slider: resizing changes how the collection
/// is chunked, never its content.
#[derive(Debug, Clone)]
pub struct TileCollection<T: TileLike> {
    tiles: Arc<[T]>,
    positions: HashMap<T::Id, usize>,
}

impl<T: TileLike> TileCollection<T> {
    /// Fails on an empty input or on a repeated tile id.
    pub fn new(tiles: impl Into<Arc<[T]>>) -> Result<Self> {
        let tiles: Arc<[T]> = tiles.into();
        if tiles.is_empty() {
            return Err(SliderError::EmptyCollection);
        }

        let mut positions = HashMap::with_capacity(tiles.len());
        for (index, tile) in tiles.iter().enumerate() {
            match positions.entry(tile.tile_id().clone()) {
                Entry::Occupied(entry) => {
                    return Err(SliderError::DuplicateTile {
                        id: format!("{:?}", entry.key()),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(index);
                }
            }
        }

        Ok(Self { tiles, positions })
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a constructed collection; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.tiles.get(index)
    }

    /// Position of a tile by identity.
    pub fn position(&self, id: &T::Id) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.tiles.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.tiles
    }

    /// Resolve page slots into tiles. Slots come from a validated page map,
    /// so out-of-range slots are skipped rather than reported.
    pub fn resolve<'a>(&'a self, slots: &'a [usize]) -> Vec<&'a T> {
        slots.iter().filter_map(|&slot| self.tiles.get(slot)).collect()
    }
}

impl<T: TileLike> TryFrom<Vec<T>> for TileCollection<T> {
    type Error = SliderError;

    fn try_from(tiles: Vec<T>) -> Result<Self> {
        Self::new(tiles)
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

    #[test]
    fn rejects_empty_collection() {
        let err = TileCollection::<Tile>::new(Vec::new()).unwrap_err();
        assert_eq!(err, SliderError::EmptyCollection);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err =
            TileCollection::new(vec![Tile(1), Tile(2), Tile(1)]).unwrap_err();
        assert_eq!(
            err,
            SliderError::DuplicateTile {
                id: "1".to_string()
            }
        );
    }

    #[test]
    fn looks_up_positions_by_identity() {
        let tiles =
            TileCollection::new(vec![Tile(7), Tile(3), Tile(9)]).unwrap();
        assert_eq!(tiles.len(), 3);
        assert_eq!(tiles.position(&3), Some(1));
        assert_eq!(tiles.position(&4), None);
        assert_eq!(tiles.get(2), Some(&Tile(9)));
    }

    #[test]
    fn resolves_slots_in_order() {
        let tiles =
            TileCollection::new(vec![Tile(0), Tile(1), Tile(2)]).unwrap();
        let resolved = tiles.resolve(&[2, 0, 1]);
        assert_eq!(resolved, vec![&Tile(2), &Tile(0), &Tile(1)]);
    }
}
