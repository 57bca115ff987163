// Copyright 2025 the Spatia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Query shapes and result policies.

use kurbo::{Circle, Line, Point, Rect, Shape};

use crate::geom;
use crate::result::ResultSet;

/// Which of the matching items a query reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FindMode {
    /// Every match.
    #[default]
    All,
    /// The match whose rect center is nearest the query origin (see [`QueryShape::origin`]).
    Closest,
    /// The first match in storage order.
    First,
}

/// Shape of a spatial query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum QueryShape {
    /// Items whose rect overlaps the rectangle with a positive area.
    Rect(Rect),
    /// Items whose rect contains the point (half-open, like [`Rect::contains`]).
    Point(Point),
    /// Items whose rect reaches into the open disc.
    Circle(Circle),
    /// Items whose rect is crossed or touched by the segment.
    Segment(Line),
}

impl QueryShape {
    /// Axis-aligned bounds of the shape.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Rect(r) => *r,
            Self::Point(p) => Rect::from_points(*p, *p),
            Self::Circle(c) => c.bounding_box(),
            Self::Segment(l) => l.bounding_box(),
        }
    }

    /// Reference point for [`FindMode::Closest`].
    ///
    /// The point itself, the circle center, the segment start or the rectangle center.
    pub fn origin(&self) -> Point {
        match self {
            Self::Rect(r) => r.center(),
            Self::Point(p) => *p,
            Self::Circle(c) => c.center,
            Self::Segment(l) => l.p0,
        }
    }

    /// Whether an item with bounds `rect` matches.
    pub fn hits(&self, rect: &Rect) -> bool {
        match self {
            Self::Rect(r) => geom::overlaps(r, rect),
            Self::Point(p) => rect.contains(*p),
            Self::Circle(c) => geom::circle_hits_rect(c, rect),
            Self::Segment(l) => geom::segment_hits_rect(l, rect),
        }
    }
}

impl From<Rect> for QueryShape {
    fn from(rect: Rect) -> Self {
        Self::Rect(rect)
    }
}

impl From<Point> for QueryShape {
    fn from(point: Point) -> Self {
        Self::Point(point)
    }
}

impl From<Circle> for QueryShape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Line> for QueryShape {
    fn from(line: Line) -> Self {
        Self::Segment(line)
    }
}

/// Applies a [`FindMode`] to a stream of candidate hits.
pub(crate) struct Collector<'a, O, R: ResultSet<O> + ?Sized> {
    mode: FindMode,
    origin: Point,
    out: &'a mut R,
    best: Option<(f64, O)>,
    done: bool,
}

impl<'a, O: Clone, R: ResultSet<O> + ?Sized> Collector<'a, O, R> {
    pub(crate) fn new(shape: &QueryShape, mode: FindMode, out: &'a mut R) -> Self {
        Self {
            mode,
            origin: shape.origin(),
            out,
            best: None,
            done: false,
        }
    }

    /// Offer a matching item.
    pub(crate) fn offer(&mut self, rect: &Rect, object: &O) {
        match self.mode {
            FindMode::All => self.out.store(object.clone()),
            FindMode::First => {
                if !self.done {
                    self.out.store(object.clone());
                    self.done = true;
                }
            }
            FindMode::Closest => {
                let d = geom::center_distance2(rect, self.origin);
                // Strict: ties keep the earlier item.
                if self.best.as_ref().is_none_or(|(best, _)| d < *best) {
                    self.best = Some((d, object.clone()));
                }
            }
        }
    }

    /// True once no further offer can change the result.
    pub(crate) fn is_done(&self) -> bool {
        self.done
    }

    /// Flush the pending closest match, if any.
    pub(crate) fn finish(self) {
        if let Some((_, object)) = self.best {
            self.out.store(object);
        }
    }
}
