// Copyright 2025 the Spatia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adaptive quadtree with pooled node storage.

mod node;

use core::fmt::Debug;

use kurbo::{Circle, Line, Point, Rect};
use spatia_pool::{Block, MemoryPool, PoolConfig};

use crate::config::QuadTreeConfig;
use crate::error::{Error, check_bounds};
use crate::geom;
use crate::result::ResultSet;
use crate::types::{Collector, FindMode, QueryShape};

use node::{Item, Node};

/// Region quadtree over a fixed rectangle.
///
/// A leaf holds up to [`max_items`](QuadTreeConfig::max_items) items. The next
/// insert splits it into four quadrants and every item is cropped into each
/// quadrant it overlaps, so one object can be stored as several fragments.
/// Leaves on the last of [`max_levels`](QuadTreeConfig::max_levels) never
/// split and take any number of items.
///
/// Erasing collapses a node whose four children are leaves once they hold no
/// more than `max_items` fragments together.
///
/// Nodes live in a [`MemoryPool`] owned by the tree and sized up front for the
/// deepest possible tree (see [`QuadTree::max_nodes`]).
///
/// Queries test fragments, so [`FindMode::All`] into a sequence may repeat an
/// object. [`FindMode::Closest`] measures from the center of the rect the
/// object was inserted with, not from the fragment.
pub struct QuadTree<O> {
    pool: MemoryPool<Node<O>>,
    root: Block,
    config: QuadTreeConfig,
}

impl<O: Clone> QuadTree<O> {
    /// Create an empty tree covering `bounds`.
    pub fn new(bounds: Rect, config: QuadTreeConfig) -> Result<Self, Error> {
        config.validate()?;
        check_bounds(bounds)?;
        let capacity = Self::max_nodes(config.max_levels);
        let mut pool = MemoryPool::new(PoolConfig::fixed(capacity))?;
        let root = pool.allocate(Node::new(bounds))?;
        tracing::debug!(
            ?bounds,
            max_items = config.max_items,
            max_levels = config.max_levels,
            capacity,
            "quadtree created"
        );
        Ok(Self { pool, root, config })
    }

    /// Create an empty tree covering `(0, 0, width, height)`.
    pub fn with_size(width: f64, height: f64, config: QuadTreeConfig) -> Result<Self, Error> {
        Self::new(Rect::new(0.0, 0.0, width, height), config)
    }

    /// Number of nodes in a full tree of `levels` levels: `1 + 4 + 16 + ...`.
    pub const fn max_nodes(levels: usize) -> usize {
        let mut total = 0;
        let mut width = 1;
        let mut level = 0;
        while level < levels {
            total += width;
            width *= 4;
            level += 1;
        }
        total
    }

    /// Drop every item and start over with new bounds and limits.
    ///
    /// On error the tree is left untouched.
    pub fn reshape(&mut self, bounds: Rect, config: QuadTreeConfig) -> Result<(), Error> {
        *self = Self::new(bounds, config)?;
        tracing::debug!(?bounds, "quadtree reshaped");
        Ok(())
    }

    /// Store `object` under `rect`.
    ///
    /// Returns false, storing nothing, if `rect` is not fully inside the bounds.
    pub fn insert(&mut self, rect: Rect, object: O) -> bool {
        let item = Item {
            rect,
            whole: rect,
            object,
        };
        Node::insert(
            &mut self.pool,
            self.root,
            item,
            self.config.max_items,
            self.config.max_levels - 1,
        )
    }

    /// Remove every fragment for which `predicate(object, fragment_rect)` is true.
    ///
    /// Returns the number of removed fragments.
    pub fn erase_where<F: FnMut(&O, &Rect) -> bool>(&mut self, mut predicate: F) -> usize {
        Node::erase(
            &mut self.pool,
            self.root,
            &mut predicate,
            self.config.max_items,
        )
    }

    /// Remove every item and release all nodes but the root.
    pub fn clear(&mut self) {
        Node::clear(&mut self.pool, self.root);
    }

    /// Every object with a fragment overlapping `rect`.
    pub fn find_rect<R: ResultSet<O> + ?Sized>(&self, rect: Rect, out: &mut R) {
        self.find(&QueryShape::Rect(rect), FindMode::All, out);
    }

    /// Objects with a fragment containing `point`.
    pub fn find_point<R: ResultSet<O> + ?Sized>(&self, point: Point, mode: FindMode, out: &mut R) {
        self.find(&QueryShape::Point(point), mode, out);
    }

    /// Objects with a fragment within `radius` of `point`.
    ///
    /// A negative or NaN `radius` finds nothing.
    pub fn find_point_radius<R: ResultSet<O> + ?Sized>(
        &self,
        point: Point,
        radius: f64,
        mode: FindMode,
        out: &mut R,
    ) {
        if radius.is_nan() || radius < 0.0 {
            return;
        }
        self.find(&QueryShape::Circle(Circle::new(point, radius)), mode, out);
    }

    /// Objects with a fragment crossed by the segment from `a` to `b`.
    pub fn find_line<R: ResultSet<O> + ?Sized>(
        &self,
        a: Point,
        b: Point,
        mode: FindMode,
        out: &mut R,
    ) {
        self.find(&QueryShape::Segment(Line::new(a, b)), mode, out);
    }

    /// Run any query shape, descending only into quadrants its bounding box touches.
    pub fn find<R: ResultSet<O> + ?Sized>(&self, shape: &QueryShape, mode: FindMode, out: &mut R) {
        let area = shape.bounding_box();
        let mut collector = Collector::new(shape, mode, out);
        if geom::touches(&self.bounds(), &area) {
            // Breaking early only means the collector is full.
            _ = Node::find(&self.pool, self.root, shape, &area, &mut collector);
        }
        collector.finish();
    }

    /// Read-only view of the root node.
    pub fn root(&self) -> NodeRef<'_, O> {
        NodeRef {
            pool: &self.pool,
            node: Node::get(&self.pool, self.root),
        }
    }

    /// Number of stored fragments.
    pub fn len(&self) -> usize {
        self.root().size()
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of live nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.pool.alloc_count()
    }

    /// Number of nodes the pool can hold.
    pub fn node_capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Bounding rectangle.
    pub fn bounds(&self) -> Rect {
        self.root().rect()
    }

    /// Current limits.
    pub fn config(&self) -> QuadTreeConfig {
        self.config
    }
}

impl<O> Debug for QuadTree<O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("config", &self.config)
            .field("root", &self.root)
            .field("pool", &self.pool)
            .finish_non_exhaustive()
    }
}

/// Borrowed view of one quadtree node.
pub struct NodeRef<'a, O> {
    pool: &'a MemoryPool<Node<O>>,
    node: &'a Node<O>,
}

impl<O> Clone for NodeRef<'_, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O> Copy for NodeRef<'_, O> {}

impl<'a, O: Clone> NodeRef<'a, O> {
    /// Rectangle covered by the node.
    pub fn rect(self) -> Rect {
        self.node.rect
    }

    /// Number of items stored directly in this node.
    pub fn num_items(self) -> usize {
        self.node.items.len()
    }

    /// True if the node stores items directly.
    pub fn has_items(self) -> bool {
        !self.node.items.is_empty()
    }

    /// True if the node is subdivided.
    pub fn has_children(self) -> bool {
        self.node.children.is_some()
    }

    /// Rect of the `i`-th item, cropped to this node.
    pub fn item_rect(self, i: usize) -> Option<Rect> {
        self.node.items.get(i).map(|item| item.rect)
    }

    /// Object of the `i`-th item.
    pub fn item_object(self, i: usize) -> Option<&'a O> {
        self.node.items.get(i).map(|item| &item.object)
    }

    /// Child in `quadrant` (0 top-left, 1 bottom-left, 2 top-right, 3 bottom-right).
    pub fn child(self, quadrant: usize) -> Option<Self> {
        let id = *self.node.children.as_ref()?.get(quadrant)?;
        Some(Self {
            pool: self.pool,
            node: Node::get(self.pool, id),
        })
    }

    /// Number of fragments stored in this node and all its descendants.
    pub fn size(self) -> usize {
        let below: usize = (0..4).filter_map(|q| self.child(q)).map(Self::size).sum();
        self.num_items() + below
    }
}

impl<O> Debug for NodeRef<'_, O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeRef")
            .field("rect", &self.node.rect)
            .field("items", &self.node.items.len())
            .field("children", &self.node.children.is_some())
            .finish_non_exhaustive()
    }
}
