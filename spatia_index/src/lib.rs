// Copyright 2025 the Spatia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatia Index: broad-phase spatial lookup over axis-aligned rectangles.
//!
//! Two structures answer the same family of queries:
//!
//! - [`DenseSpatialGrid`]: a flat `rows x cols` array of cells over a fixed rectangle.
//!   Every item is copied, uncropped, into each cell it touches. Cheap to address and
//!   a good fit when items are spread evenly and have similar sizes.
//! - [`QuadTree`]: an adaptive region quadtree. Leaves split into four quadrants once
//!   they overflow and merge back when erasing leaves them small. Items are cropped
//!   into every quadrant they overlap. Nodes come from a [`spatia_pool::MemoryPool`]
//!   owned by the tree.
//!
//! Queries take a [`QueryShape`] (rectangle, point, circle or segment) and a
//! [`FindMode`]: every match, the first match in storage order, or the match whose
//! rect center is closest to the query origin. Results go to any [`ResultSet`];
//! because spanning objects are stored more than once, a set such as
//! [`BTreeSet`](std::collections::BTreeSet) yields each object once.
//!
//! Geometry comes from [`kurbo`].
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeSet;
//!
//! use kurbo::{Point, Rect};
//! use spatia_index::{DenseSpatialGrid, FindMode, GridConfig, QuadTree, QuadTreeConfig};
//!
//! let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
//!
//! let mut grid = DenseSpatialGrid::<&str>::new(bounds, GridConfig::default()).unwrap();
//! assert!(grid.insert(Rect::new(85.0, 85.0, 95.0, 95.0), "crate"));
//! assert!(!grid.insert(Rect::new(95.0, 95.0, 105.0, 105.0), "outside"));
//! // Four cells hold a copy, a set query reports it once.
//! assert_eq!(grid.len(), 4);
//! let mut hits = BTreeSet::new();
//! grid.find_rect(bounds, &mut hits);
//! assert_eq!(hits.len(), 1);
//!
//! let mut tree = QuadTree::new(bounds, QuadTreeConfig::default()).unwrap();
//! for (i, x) in [5.0, 25.0, 55.0, 75.0, 90.0].into_iter().enumerate() {
//!     tree.insert(Rect::new(x, 10.0, x + 4.0, 14.0), i);
//! }
//! // The fifth insert split the root.
//! assert_eq!(tree.node_count(), 5);
//! let mut nearest = Vec::new();
//! tree.find_point_radius(Point::new(60.0, 12.0), 10.0, FindMode::Closest, &mut nearest);
//! assert_eq!(nearest, vec![2]);
//! ```
//!
//! ## Choosing a structure
//!
//! - The grid never rebalances: pick a cell size where most items touch only a few cells.
//! - The quadtree adapts to clustered data, at the cost of pointer chasing through the
//!   pool and cropped fragments.
//! - [`SpatialIndex`] hides the choice behind a trait object.
//!
//! ### Float semantics
//!
//! Coordinates are assumed finite. Point queries are half-open like [`kurbo::Rect::contains`].

mod config;
mod error;
mod geom;
mod grid;
mod index;
mod item;
mod quadtree;
mod result;
mod types;

pub use config::{GridConfig, QuadTreeConfig};
pub use error::Error;
pub use grid::{CellRange, DenseSpatialGrid};
pub use index::{DenseGridIndex, QuadTreeIndex, SpatialIndex};
pub use item::{Bounded, CachedRect, ItemTraits, RecomputedRect};
pub use quadtree::{NodeRef, QuadTree};
pub use result::ResultSet;
pub use types::{FindMode, QueryShape};
