// Copyright 2025 the Spatia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A common face for the grid and the quadtree.

use core::fmt::Debug;

use kurbo::Rect;

use crate::config::{GridConfig, QuadTreeConfig};
use crate::error::Error;
use crate::grid::DenseSpatialGrid;
use crate::quadtree::QuadTree;
use crate::result::ResultSet;
use crate::types::{FindMode, QueryShape};

/// Spatial structure abstraction, usable as `Box<dyn SpatialIndex<O>>`.
pub trait SpatialIndex<O> {
    /// Drop everything, move to `bounds` and insert `items`.
    ///
    /// Items outside `bounds` are skipped. Returns the number inserted.
    fn rebuild(&mut self, bounds: Rect, items: &[(Rect, O)]) -> Result<usize, Error>;

    /// Insert one item. False if `rect` is outside the bounds.
    fn insert(&mut self, rect: Rect, object: O) -> bool;

    /// Remove what `predicate` selects and return how many stored entries went away.
    fn erase_where(&mut self, predicate: &mut dyn FnMut(&O, &Rect) -> bool) -> usize;

    /// Run a query, writing results into `out`.
    fn query(&self, shape: &QueryShape, mode: FindMode, out: &mut dyn ResultSet<O>);

    /// Remove everything.
    fn clear(&mut self);

    /// Current bounds.
    fn bounds(&self) -> Rect;
}

/// [`SpatialIndex`] over a [`QuadTree`] with fixed limits.
pub struct QuadTreeIndex<O> {
    tree: QuadTree<O>,
}

impl<O: Clone> QuadTreeIndex<O> {
    /// Create an empty index.
    pub fn new(bounds: Rect, config: QuadTreeConfig) -> Result<Self, Error> {
        Ok(Self {
            tree: QuadTree::new(bounds, config)?,
        })
    }

    /// The underlying tree.
    pub fn tree(&self) -> &QuadTree<O> {
        &self.tree
    }
}

impl<O: Clone> SpatialIndex<O> for QuadTreeIndex<O> {
    fn rebuild(&mut self, bounds: Rect, items: &[(Rect, O)]) -> Result<usize, Error> {
        self.tree.reshape(bounds, self.tree.config())?;
        let mut inserted = 0;
        for (rect, object) in items {
            if self.tree.insert(*rect, object.clone()) {
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    fn insert(&mut self, rect: Rect, object: O) -> bool {
        self.tree.insert(rect, object)
    }

    fn erase_where(&mut self, predicate: &mut dyn FnMut(&O, &Rect) -> bool) -> usize {
        self.tree.erase_where(predicate)
    }

    fn query(&self, shape: &QueryShape, mode: FindMode, out: &mut dyn ResultSet<O>) {
        self.tree.find(shape, mode, out);
    }

    fn clear(&mut self) {
        self.tree.clear();
    }

    fn bounds(&self) -> Rect {
        self.tree.bounds()
    }
}

impl<O> Debug for QuadTreeIndex<O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTreeIndex")
            .field("tree", &self.tree)
            .finish()
    }
}

/// [`SpatialIndex`] over a [`DenseSpatialGrid`] with a fixed cell count.
pub struct DenseGridIndex<O> {
    grid: DenseSpatialGrid<O>,
}

impl<O: Clone> DenseGridIndex<O> {
    /// Create an empty index.
    pub fn new(bounds: Rect, config: GridConfig) -> Result<Self, Error> {
        Ok(Self {
            grid: DenseSpatialGrid::new(bounds, config)?,
        })
    }

    /// The underlying grid.
    pub fn grid(&self) -> &DenseSpatialGrid<O> {
        &self.grid
    }
}

impl<O: Clone> SpatialIndex<O> for DenseGridIndex<O> {
    fn rebuild(&mut self, bounds: Rect, items: &[(Rect, O)]) -> Result<usize, Error> {
        let GridConfig { rows, cols } = self.grid.config();
        self.grid.reshape(bounds, rows, cols)?;
        let mut inserted = 0;
        for (rect, object) in items {
            if self.grid.insert(*rect, object.clone()) {
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    fn insert(&mut self, rect: Rect, object: O) -> bool {
        self.grid.insert(rect, object)
    }

    fn erase_where(&mut self, predicate: &mut dyn FnMut(&O, &Rect) -> bool) -> usize {
        self.grid.erase_where(predicate)
    }

    fn query(&self, shape: &QueryShape, mode: FindMode, out: &mut dyn ResultSet<O>) {
        self.grid.find(shape, mode, out);
    }

    fn clear(&mut self) {
        self.grid.clear();
    }

    fn bounds(&self) -> Rect {
        self.grid.bounds()
    }
}

impl<O> Debug for DenseGridIndex<O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DenseGridIndex")
            .field("grid", &self.grid)
            .finish()
    }
}
