// Copyright 2025 the Spatia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree nodes stored in a block pool.
//!
//! Nodes never hold references to each other. A parent stores the [`Block`]
//! handles of its four children and every operation is an associated function
//! that takes the allocator plus the handle of the node to work on.

use core::ops::ControlFlow;

use kurbo::Rect;
use spatia_pool::{Block, FixedAllocator};

use crate::geom;
use crate::result::ResultSet;
use crate::types::{Collector, QueryShape};

/// A stored fragment: the part of an inserted rect that falls in the node.
pub(crate) struct Item<O> {
    /// Fragment, used for hit tests.
    pub(crate) rect: Rect,
    /// The rect the object was inserted with, used for closest distances.
    pub(crate) whole: Rect,
    pub(crate) object: O,
}

/// Either a leaf holding items or an internal node with exactly four children.
pub(crate) struct Node<O> {
    pub(crate) rect: Rect,
    pub(crate) items: Vec<Item<O>>,
    /// Top-left, bottom-left, top-right, bottom-right.
    pub(crate) children: Option<[Block; 4]>,
}

impl<O: Clone> Node<O> {
    pub(crate) fn new(rect: Rect) -> Self {
        Self {
            rect,
            items: Vec::new(),
            children: None,
        }
    }

    pub(crate) fn get<A: FixedAllocator<Self>>(alloc: &A, id: Block) -> &Self {
        let Some(node) = alloc.get(id) else {
            panic!("quadtree node {id:?} is not live");
        };
        node
    }

    fn get_mut<A: FixedAllocator<Self>>(alloc: &mut A, id: Block) -> &mut Self {
        let Some(node) = alloc.get_mut(id) else {
            panic!("quadtree node {id:?} is not live");
        };
        node
    }

    /// Store `item` (or its fragments) below `id`.
    ///
    /// `level` counts the subdivisions still allowed under this node. Returns
    /// false if `item.rect` is not inside the node.
    pub(crate) fn insert<A: FixedAllocator<Self>>(
        alloc: &mut A,
        id: Block,
        item: Item<O>,
        max_items: usize,
        level: usize,
    ) -> bool {
        let node = Self::get_mut(alloc, id);
        if !geom::contains_rect(&node.rect, &item.rect) {
            tracing::trace!(rect = ?item.rect, bounds = ?node.rect, "quadtree insert rejected");
            return false;
        }
        let existing = node.children;
        if existing.is_none() && (level == 0 || node.items.len() < max_items) {
            node.items.push(item);
            return true;
        }
        let children = match existing {
            Some(children) => children,
            None => Self::split(alloc, id, max_items, level),
        };
        Self::insert_into_children(alloc, children, item, max_items, level - 1);
        true
    }

    fn split<A: FixedAllocator<Self>>(
        alloc: &mut A,
        id: Block,
        max_items: usize,
        level: usize,
    ) -> [Block; 4] {
        let node = Self::get_mut(alloc, id);
        let rect = node.rect;
        let items = core::mem::take(&mut node.items);
        let children = geom::quadrants(&rect).map(|quadrant| {
            match alloc.allocate(Self::new(quadrant)) {
                Ok(block) => block,
                Err(err) => panic!("quadtree node pool exhausted: {err}"),
            }
        });
        Self::get_mut(alloc, id).children = Some(children);
        tracing::trace!(?rect, level, moved = items.len(), "quadtree node split");
        for item in items {
            Self::insert_into_children(alloc, children, item, max_items, level - 1);
        }
        children
    }

    fn insert_into_children<A: FixedAllocator<Self>>(
        alloc: &mut A,
        children: [Block; 4],
        item: Item<O>,
        max_items: usize,
        level: usize,
    ) {
        for child in children {
            let quadrant = Self::get(alloc, child).rect;
            if geom::overlaps(&quadrant, &item.rect) {
                let fragment = Item {
                    rect: quadrant.intersect(item.rect),
                    whole: item.whole,
                    object: item.object.clone(),
                };
                let rect = fragment.rect;
                let stored = Self::insert(alloc, child, fragment, max_items, level);
                assert!(stored, "quadrant {quadrant:?} rejected fragment {rect:?}");
            }
        }
    }

    /// Remove matching items below `id` and collapse children that shrank.
    ///
    /// Returns the number of removed fragments.
    pub(crate) fn erase<A: FixedAllocator<Self>>(
        alloc: &mut A,
        id: Block,
        predicate: &mut dyn FnMut(&O, &Rect) -> bool,
        max_items: usize,
    ) -> usize {
        let node = Self::get_mut(alloc, id);
        let before = node.items.len();
        node.items.retain(|item| !predicate(&item.object, &item.rect));
        let mut removed = before - node.items.len();
        let Some(children) = node.children else {
            return removed;
        };
        for child in children {
            removed += Self::erase(alloc, child, predicate, max_items);
        }
        Self::merge(alloc, id, children, max_items);
        removed
    }

    // Only leaf children are pulled up; a grandchild's items would otherwise be lost.
    fn merge<A: FixedAllocator<Self>>(
        alloc: &mut A,
        id: Block,
        children: [Block; 4],
        max_items: usize,
    ) {
        let mut total = 0;
        for child in children {
            let node = Self::get(alloc, child);
            if node.children.is_some() {
                return;
            }
            total += node.items.len();
        }
        if total > max_items {
            return;
        }
        let mut items = Vec::with_capacity(total);
        for child in children {
            match alloc.free(child) {
                Ok(node) => items.extend(node.items),
                Err(err) => panic!("failed to release quadtree node: {err}"),
            }
        }
        let node = Self::get_mut(alloc, id);
        tracing::trace!(rect = ?node.rect, items = items.len(), "quadtree node merged");
        node.items = items;
        node.children = None;
    }

    /// Drop every item below `id` and release all descendants.
    pub(crate) fn clear<A: FixedAllocator<Self>>(alloc: &mut A, id: Block) {
        let node = Self::get_mut(alloc, id);
        node.items.clear();
        let Some(children) = node.children.take() else {
            return;
        };
        for child in children {
            Self::clear(alloc, child);
            if let Err(err) = alloc.free(child) {
                panic!("failed to release quadtree node: {err}");
            }
        }
    }

    /// Offer every matching fragment below `id` to `collector`.
    ///
    /// Breaks once the collector cannot take more.
    pub(crate) fn find<A, R>(
        alloc: &A,
        id: Block,
        shape: &QueryShape,
        area: &Rect,
        collector: &mut Collector<'_, O, R>,
    ) -> ControlFlow<()>
    where
        A: FixedAllocator<Self>,
        R: ResultSet<O> + ?Sized,
    {
        let node = Self::get(alloc, id);
        for item in &node.items {
            if shape.hits(&item.rect) {
                collector.offer(&item.whole, &item.object);
                if collector.is_done() {
                    return ControlFlow::Break(());
                }
            }
        }
        if let Some(children) = node.children {
            for child in children {
                if geom::touches(&Self::get(alloc, child).rect, area) {
                    Self::find(alloc, child, shape, area, collector)?;
                }
            }
        }
        ControlFlow::Continue(())
    }
}
