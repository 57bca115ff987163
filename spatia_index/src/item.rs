// Copyright 2025 the Spatia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item rectangle storage policy for the grid.

use kurbo::Rect;

/// Objects that can report their own bounds.
pub trait Bounded {
    /// Current axis-aligned bounds.
    fn bounds(&self) -> Rect;
}

impl Bounded for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

/// Selects whether a grid stores each item's rect or asks the object for it.
pub trait ItemTraits<O> {
    /// Keep the insertion rect next to the object.
    const CACHE_RECT: bool;

    /// Bounds of an item. `cached` is `Some` exactly when [`Self::CACHE_RECT`] is set.
    fn item_rect(object: &O, cached: Option<&Rect>) -> Rect;
}

/// Store the insertion rect with every item copy. This is the default.
#[derive(Clone, Copy, Debug, Default)]
pub struct CachedRect;

impl<O> ItemTraits<O> for CachedRect {
    const CACHE_RECT: bool = true;

    fn item_rect(_: &O, cached: Option<&Rect>) -> Rect {
        cached.copied().unwrap_or(Rect::ZERO)
    }
}

/// Store only the object and recompute its rect through [`Bounded`].
///
/// Saves 32 bytes per copy. The object must not move while it is in the grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecomputedRect;

impl<O: Bounded> ItemTraits<O> for RecomputedRect {
    const CACHE_RECT: bool = false;

    fn item_rect(object: &O, _: Option<&Rect>) -> Rect {
        object.bounds()
    }
}
