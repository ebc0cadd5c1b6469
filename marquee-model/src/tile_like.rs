//! Identity contract the slider engine is generic over.

use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

/// Anything the slider can page through. Only identity matters to the
/// engine; display fields stay with the rendering layer.
pub trait TileLike {
    type Id: Eq + Hash + Clone + Debug;

    fn tile_id(&self) -> &Self::Id;
}

impl<T: TileLike + ?Sized> TileLike for Arc<T> {
    type Id = T::Id;

    fn tile_id(&self) -> &Self::Id {
        (**self).tile_id()
    }
}

impl<T: TileLike + ?Sized> TileLike for Rc<T> {
    type Id = T::Id;

    fn tile_id(&self) -> &Self::Id {
        (**self).tile_id()
    }
}

impl<T: TileLike + ?Sized> TileLike for &T {
    type Id = T::Id;

    fn tile_id(&self) -> &Self::Id {
        (**self).tile_id()
    }
}
