// Copyright 2025 the Spatia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction knobs for the grid and the quadtree.

use crate::error::Error;

/// Cell layout of a [`DenseSpatialGrid`](crate::DenseSpatialGrid).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridConfig {
    /// Number of cell rows (along y).
    pub rows: usize,
    /// Number of cell columns (along x).
    pub cols: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { rows: 10, cols: 10 }
    }
}

impl GridConfig {
    /// Check that both dimensions are non-zero.
    pub fn validate(&self) -> Result<(), Error> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::InvalidConfig("grid needs at least one row and column"));
        }
        if self.rows.checked_mul(self.cols).is_none() {
            return Err(Error::InvalidConfig("grid cell count overflows usize"));
        }
        Ok(())
    }
}

/// Subdivision limits of a [`QuadTree`](crate::QuadTree).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QuadTreeConfig {
    /// Items a leaf holds before it splits.
    pub max_items: usize,
    /// Number of levels including the root. Nodes on the last level never split.
    pub max_levels: usize,
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            max_items: 4,
            max_levels: 3,
        }
    }
}

impl QuadTreeConfig {
    /// Deepest supported tree. A 12 level tree already needs millions of nodes.
    pub const MAX_LEVELS: usize = 12;

    /// Check the limits.
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_items == 0 {
            return Err(Error::InvalidConfig("quadtree leaves must hold at least one item"));
        }
        if self.max_levels == 0 {
            return Err(Error::InvalidConfig("quadtree needs at least one level"));
        }
        if self.max_levels > Self::MAX_LEVELS {
            return Err(Error::InvalidConfig("quadtree is limited to 12 levels"));
        }
        Ok(())
    }
}
