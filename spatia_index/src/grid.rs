// Copyright 2025 the Spatia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dense uniform grid over a fixed rectangle.

use core::fmt::Debug;
use core::marker::PhantomData;
use core::ops::ControlFlow;

use kurbo::{Circle, Line, Point, Rect};

use crate::config::GridConfig;
use crate::error::{Error, check_bounds};
use crate::geom;
use crate::item::{CachedRect, ItemTraits};
use crate::result::ResultSet;
use crate::types::{Collector, FindMode, QueryShape};

/// A block of grid cells: `rows x cols` cells starting at `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// First row.
    pub row: usize,
    /// First column.
    pub col: usize,
    /// Number of rows, at least one.
    pub rows: usize,
    /// Number of columns, at least one.
    pub cols: usize,
}

impl CellRange {
    /// Cells in row-major order as `(row, col)`.
    pub fn cells(self) -> impl Iterator<Item = (usize, usize)> {
        (self.row..self.row + self.rows)
            .flat_map(move |r| (self.col..self.col + self.cols).map(move |c| (r, c)))
    }

    /// Number of cells in the range.
    pub fn len(self) -> usize {
        self.rows * self.cols
    }

    /// Always false: a mapped range covers at least one cell.
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

struct GridItem<O> {
    rect: Option<Rect>,
    object: O,
}

/// Uniform spatial hash over a fixed rectangle.
///
/// The bounds are split into `rows x cols` equally sized cells, each holding a
/// list of items. Cells are allocated once, so addressing a cell is a
/// multiply and an add. An item is appended to every cell its rect touches,
/// uncropped; query into a set to see each object once.
///
/// Whether the rect is stored with each copy is chosen by `Tr`, see
/// [`ItemTraits`].
///
/// Cell mapping rounds the top-left corner down and the bottom-right corner up,
/// so a rect that ends exactly on a cell edge does not spill into the next
/// cell, and a degenerate rect still covers one cell.
pub struct DenseSpatialGrid<O, Tr = CachedRect> {
    bounds: Rect,
    config: GridConfig,
    cells: Vec<Vec<GridItem<O>>>,
    _traits: PhantomData<Tr>,
}

impl<O: Clone, Tr: ItemTraits<O>> DenseSpatialGrid<O, Tr> {
    /// Create an empty grid covering `bounds`.
    pub fn new(bounds: Rect, config: GridConfig) -> Result<Self, Error> {
        config.validate()?;
        check_bounds(bounds)?;
        tracing::debug!(?bounds, rows = config.rows, cols = config.cols, "grid created");
        Ok(Self {
            bounds,
            config,
            cells: empty_cells(config),
            _traits: PhantomData,
        })
    }

    /// Create an empty grid covering `(0, 0, width, height)`.
    pub fn with_size(width: f64, height: f64, config: GridConfig) -> Result<Self, Error> {
        Self::new(Rect::new(0.0, 0.0, width, height), config)
    }

    /// Drop every item and re-lay the grid over `bounds` with a new cell count.
    ///
    /// On error the grid is left untouched.
    pub fn reshape(&mut self, bounds: Rect, rows: usize, cols: usize) -> Result<(), Error> {
        let config = GridConfig { rows, cols };
        config.validate()?;
        check_bounds(bounds)?;
        self.bounds = bounds;
        self.config = config;
        self.cells = empty_cells(config);
        tracing::debug!(?bounds, rows, cols, "grid reshaped");
        Ok(())
    }

    /// Store `object` in every cell `rect` touches.
    ///
    /// Returns false, storing nothing, if `rect` is not fully inside the bounds.
    pub fn insert(&mut self, rect: Rect, object: O) -> bool {
        let range = match self.map_rect(rect) {
            Ok(range) => range,
            Err(err) => {
                tracing::trace!(%err, "grid insert rejected");
                return false;
            }
        };
        let cached = Tr::CACHE_RECT.then_some(rect);
        for (row, col) in range.cells() {
            let index = self.index(row, col);
            self.cells[index].push(GridItem {
                rect: cached,
                object: object.clone(),
            });
        }
        true
    }

    /// Cells covered by `rect`, which must lie inside the bounds.
    pub fn map_rect(&self, rect: Rect) -> Result<CellRange, Error> {
        if !geom::contains_rect(&self.bounds, &rect) {
            return Err(Error::OutOfBounds {
                rect,
                bounds: self.bounds,
            });
        }
        let (cw, ch) = self.cell_extent();
        let (rows, cols) = (self.config.rows, self.config.cols);
        let col = to_index(((rect.x0 - self.bounds.x0) / cw).floor(), cols - 1);
        let row = to_index(((rect.y0 - self.bounds.y0) / ch).floor(), rows - 1);
        let col_end = to_index(((rect.x1 - self.bounds.x0) / cw).ceil(), cols).max(col + 1);
        let row_end = to_index(((rect.y1 - self.bounds.y0) / ch).ceil(), rows).max(row + 1);
        Ok(CellRange {
            row,
            col,
            rows: row_end - row,
            cols: col_end - col,
        })
    }

    /// Cell containing `point` as `(row, col)`. Points on the far edges map to the last cell.
    pub fn map_point(&self, point: Point) -> Result<(usize, usize), Error> {
        let b = self.bounds;
        if !(point.x >= b.x0 && point.x <= b.x1 && point.y >= b.y0 && point.y <= b.y1) {
            return Err(Error::PointOutOfBounds { point, bounds: b });
        }
        let (cw, ch) = self.cell_extent();
        let row = to_index(((point.y - b.y0) / ch).floor(), self.config.rows - 1);
        let col = to_index(((point.x - b.x0) / cw).floor(), self.config.cols - 1);
        Ok((row, col))
    }

    /// Every object whose rect overlaps `rect`.
    pub fn find_rect<R: ResultSet<O> + ?Sized>(&self, rect: Rect, out: &mut R) {
        self.find(&QueryShape::Rect(rect), FindMode::All, out);
    }

    /// Objects whose rect contains `point`.
    ///
    /// Only the point's cell is searched, plus its neighbours when the point
    /// lies on a cell boundary.
    pub fn find_point<R: ResultSet<O> + ?Sized>(&self, point: Point, mode: FindMode, out: &mut R) {
        self.find(&QueryShape::Point(point), mode, out);
    }

    /// Objects whose rect reaches within `radius` of `point`.
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

    /// Objects whose rect the segment from `a` to `b` crosses.
    pub fn find_line<R: ResultSet<O> + ?Sized>(
        &self,
        a: Point,
        b: Point,
        mode: FindMode,
        out: &mut R,
    ) {
        self.find(&QueryShape::Segment(Line::new(a, b)), mode, out);
    }

    /// Run any query shape.
    ///
    /// The shape's bounding box is clipped to the grid and only the covered
    /// cells are visited. With [`FindMode::All`] an object spanning several
    /// visited cells is reported once per cell.
    pub fn find<R: ResultSet<O> + ?Sized>(&self, shape: &QueryShape, mode: FindMode, out: &mut R) {
        let mut collector = Collector::new(shape, mode, out);
        self.for_each_cell(shape.bounding_box(), |items| {
            for item in items {
                let rect = Tr::item_rect(&item.object, item.rect.as_ref());
                if shape.hits(&rect) {
                    collector.offer(&rect, &item.object);
                    if collector.is_done() {
                        return ControlFlow::Break(());
                    }
                }
            }
            ControlFlow::Continue(())
        });
        collector.finish();
    }

    /// Remove every item whose rect overlaps `rect`, from all the cells it was stored in.
    ///
    /// Returns the number of removed copies.
    pub fn erase_rect(&mut self, rect: Rect) -> usize {
        self.erase_shape(&QueryShape::Rect(rect))
    }

    /// Remove every item whose rect contains `point`, from all the cells it was stored in.
    ///
    /// Returns the number of removed copies.
    pub fn erase_point(&mut self, point: Point) -> usize {
        self.erase_shape(&QueryShape::Point(point))
    }

    /// Remove every copy for which `predicate(object, rect)` is true.
    ///
    /// Returns the number of removed copies.
    pub fn erase_where<F: FnMut(&O, &Rect) -> bool>(&mut self, mut predicate: F) -> usize {
        self.retain_in(self.bounds, |object, rect| !predicate(object, rect))
    }

    /// Remove every item and keep the layout.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    /// Bounding rectangle.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Number of cell rows.
    pub fn rows(&self) -> usize {
        self.config.rows
    }

    /// Number of cell columns.
    pub fn cols(&self) -> usize {
        self.config.cols
    }

    /// Current cell layout.
    pub fn config(&self) -> GridConfig {
        self.config
    }

    /// Number of items in a cell, zero for cells outside the grid.
    pub fn cell_len(&self, row: usize, col: usize) -> usize {
        self.cell(row, col).map_or(0, Vec::len)
    }

    /// Rect of the `i`-th item in a cell.
    pub fn item_rect(&self, row: usize, col: usize, i: usize) -> Option<Rect> {
        let item = self.cell(row, col)?.get(i)?;
        Some(Tr::item_rect(&item.object, item.rect.as_ref()))
    }

    /// Object of the `i`-th item in a cell.
    pub fn item_object(&self, row: usize, col: usize, i: usize) -> Option<&O> {
        Some(&self.cell(row, col)?.get(i)?.object)
    }

    /// Number of stored copies across all cells.
    pub fn len(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }

    /// True if no cell holds an item.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Vec::is_empty)
    }

    fn erase_shape(&mut self, shape: &QueryShape) -> usize {
        // Every copy carries the rect of its item, so the union of the matched
        // rects covers every cell holding a copy.
        let mut cover: Option<Rect> = None;
        self.for_each_cell(shape.bounding_box(), |items| {
            for item in items {
                let rect = Tr::item_rect(&item.object, item.rect.as_ref());
                if shape.hits(&rect) {
                    cover = Some(cover.map_or(rect, |c| c.union(rect)));
                }
            }
            ControlFlow::Continue(())
        });
        match cover {
            Some(cover) => self.retain_in(cover, |_, rect| !shape.hits(rect)),
            None => 0,
        }
    }

    fn retain_in<F: FnMut(&O, &Rect) -> bool>(&mut self, area: Rect, mut keep: F) -> usize {
        let Some(range) = self.clip_range(area) else {
            return 0;
        };
        let mut removed = 0;
        for (row, col) in range.cells() {
            let index = self.index(row, col);
            self.cells[index].retain(|item| {
                let rect = Tr::item_rect(&item.object, item.rect.as_ref());
                let kept = keep(&item.object, &rect);
                if !kept {
                    removed += 1;
                }
                kept
            });
        }
        removed
    }

    fn for_each_cell<F>(&self, area: Rect, mut visit: F)
    where
        F: FnMut(&[GridItem<O>]) -> ControlFlow<()>,
    {
        let Some(range) = self.clip_range(area) else {
            return;
        };
        for (row, col) in range.cells() {
            if visit(&self.cells[self.index(row, col)]).is_break() {
                return;
            }
        }
    }

    /// Cells whose closed extent meets the part of `area` inside the bounds.
    ///
    /// Unlike [`map_rect`](Self::map_rect) an edge lying exactly on a cell
    /// boundary pulls in the cells on both sides, since queries count edge
    /// contact with zero-area rects as a hit.
    fn clip_range(&self, area: Rect) -> Option<CellRange> {
        if !geom::touches(&self.bounds, &area) {
            return None;
        }
        let area = self.bounds.intersect(area);
        let (cw, ch) = self.cell_extent();
        let (rows, cols) = (self.config.rows, self.config.cols);
        let col = to_index(((area.x0 - self.bounds.x0) / cw).ceil() - 1.0, cols - 1);
        let row = to_index(((area.y0 - self.bounds.y0) / ch).ceil() - 1.0, rows - 1);
        let col_last = to_index(((area.x1 - self.bounds.x0) / cw).floor(), cols - 1).max(col);
        let row_last = to_index(((area.y1 - self.bounds.y0) / ch).floor(), rows - 1).max(row);
        Some(CellRange {
            row,
            col,
            rows: row_last - row + 1,
            cols: col_last - col + 1,
        })
    }
}

impl<O, Tr> DenseSpatialGrid<O, Tr> {
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.config.rows && col < self.config.cols,
            "cell ({row}, {col}) outside the grid"
        );
        row * self.config.cols + col
    }

    fn cell(&self, row: usize, col: usize) -> Option<&Vec<GridItem<O>>> {
        if row >= self.config.rows || col >= self.config.cols {
            return None;
        }
        self.cells.get(self.index(row, col))
    }

    fn cell_extent(&self) -> (f64, f64) {
        (
            self.bounds.width() / self.config.cols as f64,
            self.bounds.height() / self.config.rows as f64,
        )
    }
}

impl<O, Tr> Debug for DenseSpatialGrid<O, Tr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let items: usize = self.cells.iter().map(Vec::len).sum();
        let occupied = self.cells.iter().filter(|c| !c.is_empty()).count();
        f.debug_struct("DenseSpatialGrid")
            .field("bounds", &self.bounds)
            .field("rows", &self.config.rows)
            .field("cols", &self.config.cols)
            .field("items", &items)
            .field("occupied_cells", &occupied)
            .finish_non_exhaustive()
    }
}

fn empty_cells<O>(config: GridConfig) -> Vec<Vec<GridItem<O>>> {
    (0..config.rows * config.cols).map(|_| Vec::new()).collect()
}

#[inline]
fn to_index(v: f64, limit: usize) -> usize {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "callers floor or ceil first and the result is clamped to the grid extent"
    )]
    let i = v.max(0.0) as usize;
    i.min(limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Bounded, RecomputedRect};
    use std::collections::{BTreeSet, HashSet};

    fn grid() -> DenseSpatialGrid<u32> {
        DenseSpatialGrid::new(Rect::new(0.0, 0.0, 100.0, 100.0), GridConfig::default()).unwrap()
    }

    #[test]
    fn insert_then_find() {
        let mut g = grid();
        assert!(g.insert(Rect::new(12.0, 12.0, 18.0, 18.0), 7));
        let mut hits = Vec::new();
        g.find_rect(Rect::new(0.0, 0.0, 50.0, 50.0), &mut hits);
        assert_eq!(hits, vec![7]);
    }

    #[test]
    fn out_of_bounds_insert_is_rejected() {
        let mut g = grid();
        assert!(!g.insert(Rect::new(95.0, 95.0, 105.0, 99.0), 1));
        assert!(!g.insert(Rect::new(-1.0, 0.0, 5.0, 5.0), 2));
        assert!(g.is_empty());
        assert_eq!(g.len(), 0);
    }

    #[test]
    fn rect_ending_on_cell_edges_maps_by_floor_and_ceil() {
        let g = grid();
        let range = g.map_rect(Rect::new(85.0, 85.0, 95.0, 95.0)).unwrap();
        assert_eq!(
            range,
            CellRange {
                row: 8,
                col: 8,
                rows: 2,
                cols: 2
            }
        );
        let cells: Vec<_> = range.cells().collect();
        assert_eq!(cells, vec![(8, 8), (8, 9), (9, 8), (9, 9)]);
        let exact = g.map_rect(Rect::new(80.0, 80.0, 90.0, 90.0)).unwrap();
        assert_eq!(exact.len(), 1);
        let far_edge = g.map_rect(Rect::new(100.0, 100.0, 100.0, 100.0)).unwrap();
        assert_eq!((far_edge.row, far_edge.col, far_edge.len()), (9, 9, 1));
    }

    #[test]
    fn spanning_item_is_copied_per_cell() {
        let mut g = grid();
        assert!(g.insert(Rect::new(85.0, 85.0, 95.0, 95.0), 3));
        assert_eq!(g.len(), 4);
        for (row, col) in [(8, 8), (8, 9), (9, 8), (9, 9)] {
            assert_eq!(g.cell_len(row, col), 1);
            assert_eq!(g.item_object(row, col, 0), Some(&3));
            assert_eq!(
                g.item_rect(row, col, 0),
                Some(Rect::new(85.0, 85.0, 95.0, 95.0))
            );
        }
        let mut set = HashSet::new();
        g.find_rect(Rect::new(0.0, 0.0, 100.0, 100.0), &mut set);
        assert_eq!(set.len(), 1);
        let mut seq = Vec::new();
        g.find_rect(Rect::new(0.0, 0.0, 100.0, 100.0), &mut seq);
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn mapping_rejects_outside_input() {
        let g = grid();
        assert!(matches!(
            g.map_rect(Rect::new(50.0, 50.0, 150.0, 60.0)),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(matches!(
            g.map_point(Point::new(-0.5, 3.0)),
            Err(Error::PointOutOfBounds { .. })
        ));
        assert_eq!(g.map_point(Point::new(100.0, 0.0)), Ok((0, 9)));
        assert_eq!(g.map_point(Point::new(35.0, 72.0)), Ok((7, 3)));
    }

    #[test]
    fn closest_picks_minimum_center_distance() {
        let mut g = grid();
        g.insert(Rect::new(40.0, 40.0, 70.0, 70.0), 1);
        g.insert(Rect::new(45.0, 45.0, 56.0, 56.0), 2);
        g.insert(Rect::new(50.0, 50.0, 60.0, 60.0), 3);
        let mut out = Vec::new();
        g.find_point(Point::new(50.0, 50.0), FindMode::Closest, &mut out);
        assert_eq!(out, vec![2]);
        let mut all = BTreeSet::new();
        g.find_point(Point::new(50.0, 50.0), FindMode::All, &mut all);
        assert_eq!(all.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn first_returns_earliest_insert() {
        let mut g = grid();
        g.insert(Rect::new(10.0, 10.0, 20.0, 20.0), 10);
        g.insert(Rect::new(12.0, 12.0, 14.0, 14.0), 11);
        let mut out = Vec::new();
        g.find_point(Point::new(13.0, 13.0), FindMode::First, &mut out);
        assert_eq!(out, vec![10]);
    }

    #[test]
    fn radius_query_filters_exactly() {
        let mut g = grid();
        g.insert(Rect::new(10.0, 10.0, 20.0, 20.0), 1);
        g.insert(Rect::new(30.0, 10.0, 40.0, 20.0), 2);
        let mut out = BTreeSet::new();
        g.find_point_radius(Point::new(25.0, 15.0), 4.0, FindMode::All, &mut out);
        assert!(out.is_empty());
        g.find_point_radius(Point::new(25.0, 15.0), 5.5, FindMode::All, &mut out);
        assert_eq!(out.into_iter().collect::<Vec<_>>(), vec![1, 2]);
        let mut near = Vec::new();
        g.find_point_radius(Point::new(21.0, 15.0), 20.0, FindMode::Closest, &mut near);
        assert_eq!(near, vec![1]);
    }

    #[test]
    fn line_query_follows_the_segment() {
        let mut g = grid();
        g.insert(Rect::new(10.0, 10.0, 20.0, 20.0), 1);
        g.insert(Rect::new(70.0, 10.0, 80.0, 20.0), 2);
        g.insert(Rect::new(40.0, 80.0, 50.0, 90.0), 3);
        let mut out = BTreeSet::new();
        g.find_line(
            Point::new(0.0, 15.0),
            Point::new(99.0, 15.0),
            FindMode::All,
            &mut out,
        );
        assert_eq!(out.into_iter().collect::<Vec<_>>(), vec![1, 2]);
        let mut first = Vec::new();
        g.find_line(
            Point::new(99.0, 15.0),
            Point::new(0.0, 15.0),
            FindMode::Closest,
            &mut first,
        );
        assert_eq!(first, vec![2]);
    }

    #[test]
    fn contacts_on_cell_edges_are_found() {
        let mut g = grid();
        // Zero-width, stored in column 1 only.
        g.insert(Rect::new(10.0, 20.0, 10.0, 30.0), 1);
        // Ends on the boundary of columns 4 and 5.
        g.insert(Rect::new(40.0, 40.0, 50.0, 50.0), 3);
        let mut out = BTreeSet::new();
        g.find_rect(Rect::new(2.0, 22.0, 10.0, 28.0), &mut out);
        assert_eq!(out.iter().copied().collect::<Vec<_>>(), vec![1]);
        out.clear();
        g.find_line(
            Point::new(50.0, 42.0),
            Point::new(50.0, 48.0),
            FindMode::All,
            &mut out,
        );
        assert_eq!(out.iter().copied().collect::<Vec<_>>(), vec![3]);
        out.clear();
        g.find_rect(Rect::new(50.0, 45.0, 50.0, 45.0), &mut out);
        assert_eq!(out.iter().copied().collect::<Vec<_>>(), vec![3]);
        // The box ends at y = 50, so the zero-height rect at y = 50 still touches it.
        assert_eq!(g.erase_rect(Rect::new(42.0, 50.0, 48.0, 50.0)), 1);
        assert_eq!(g.erase_rect(Rect::new(0.0, 0.0, 10.0, 25.0)), 1);
        assert!(g.is_empty());
    }

    #[test]
    fn negative_radius_finds_nothing() {
        let mut g = grid();
        g.insert(Rect::new(10.0, 10.0, 20.0, 20.0), 1);
        let mut out = Vec::new();
        g.find_point_radius(Point::new(15.0, 15.0), -3.0, FindMode::All, &mut out);
        g.find_point_radius(Point::new(15.0, 15.0), f64::NAN, FindMode::All, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn queries_outside_the_grid_are_clipped() {
        let mut g = grid();
        g.insert(Rect::new(0.0, 0.0, 5.0, 5.0), 1);
        let mut out = Vec::new();
        g.find_rect(Rect::new(-50.0, -50.0, 3.0, 3.0), &mut out);
        assert_eq!(out, vec![1]);
        out.clear();
        g.find_point(Point::new(-5.0, -5.0), FindMode::All, &mut out);
        g.find_rect(Rect::new(200.0, 200.0, 300.0, 300.0), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn erase_removes_every_copy() {
        let mut g = grid();
        g.insert(Rect::new(5.0, 5.0, 35.0, 8.0), 1);
        g.insert(Rect::new(60.0, 60.0, 65.0, 65.0), 2);
        assert_eq!(g.len(), 5);
        // Only touches the first cell of item 1, every copy still goes.
        assert_eq!(g.erase_rect(Rect::new(0.0, 0.0, 8.0, 8.0)), 4);
        assert_eq!(g.len(), 1);
        assert_eq!(g.erase_point(Point::new(1.0, 1.0)), 0);
        assert_eq!(g.erase_point(Point::new(62.0, 62.0)), 1);
        assert!(g.is_empty());
    }

    #[test]
    fn erase_where_uses_the_predicate() {
        let mut g = grid();
        for i in 0..10 {
            let x = f64::from(i) * 10.0;
            g.insert(Rect::new(x, 0.0, x + 5.0, 5.0), i);
        }
        assert_eq!(g.erase_where(|o, _| o % 2 == 0), 5);
        let mut out = BTreeSet::new();
        g.find_rect(g.bounds(), &mut out);
        assert_eq!(out.into_iter().collect::<Vec<_>>(), vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn reshape_discards_contents() {
        let mut g = grid();
        g.insert(Rect::new(1.0, 1.0, 2.0, 2.0), 1);
        g.reshape(Rect::new(-10.0, -10.0, 10.0, 10.0), 4, 2).unwrap();
        assert!(g.is_empty());
        assert_eq!((g.rows(), g.cols()), (4, 2));
        assert!(g.insert(Rect::new(-10.0, -10.0, -9.0, -9.0), 2));
        assert!(g.reshape(Rect::new(0.0, 0.0, 0.0, 5.0), 1, 1).is_err());
        assert!(g.reshape(g.bounds(), 0, 1).is_err());
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn recomputed_rects_come_from_the_object() {
        #[derive(Clone, Debug, PartialEq)]
        struct Sprite {
            id: u8,
            at: Rect,
        }
        impl Bounded for Sprite {
            fn bounds(&self) -> Rect {
                self.at
            }
        }
        let mut g: DenseSpatialGrid<Sprite, RecomputedRect> =
            DenseSpatialGrid::with_size(100.0, 100.0, GridConfig { rows: 5, cols: 5 }).unwrap();
        let s = Sprite {
            id: 4,
            at: Rect::new(30.0, 30.0, 50.0, 50.0),
        };
        assert!(g.insert(s.at, s.clone()));
        assert_eq!(g.item_rect(1, 1, 0), Some(s.at));
        let mut out = Vec::new();
        g.find_point(Point::new(45.0, 45.0), FindMode::First, &mut out);
        assert_eq!(out.iter().map(|s| s.id).collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn clear_keeps_the_layout() {
        let mut g = grid();
        g.insert(Rect::new(1.0, 1.0, 50.0, 50.0), 1);
        g.clear();
        assert!(g.is_empty());
        assert_eq!(g.rows(), 10);
    }
}
