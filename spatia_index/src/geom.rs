// Copyright 2025 the Spatia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle predicates Kurbo does not provide.

use kurbo::{Circle, Line, Point, Rect};

/// Whether `inner` lies inside `outer`, edges included.
pub(crate) fn contains_rect(outer: &Rect, inner: &Rect) -> bool {
    inner.x0 >= outer.x0 && inner.y0 >= outer.y0 && inner.x1 <= outer.x1 && inner.y1 <= outer.y1
}

/// Closed overlap test: shared edges and corners count.
pub(crate) fn touches(a: &Rect, b: &Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Overlap with a positive area.
///
/// Degenerate rects (lines and points) have no area to share, so for them the
/// closed test is used instead.
pub(crate) fn overlaps(a: &Rect, b: &Rect) -> bool {
    if a.is_zero_area() || b.is_zero_area() {
        return touches(a, b);
    }
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

/// Split into four equal quadrants.
///
/// Order: top-left, bottom-left, top-right, bottom-right (y grows downwards).
pub(crate) fn quadrants(rect: &Rect) -> [Rect; 4] {
    let Point { x: mx, y: my } = rect.center();
    [
        Rect::new(rect.x0, rect.y0, mx, my),
        Rect::new(rect.x0, my, mx, rect.y1),
        Rect::new(mx, rect.y0, rect.x1, my),
        Rect::new(mx, my, rect.x1, rect.y1),
    ]
}

/// Whether the open disc reaches into the closed rect.
///
/// A disc with a negative or NaN radius reaches nothing.
pub(crate) fn circle_hits_rect(circle: &Circle, rect: &Rect) -> bool {
    if circle.radius.is_nan() || circle.radius <= 0.0 {
        return false;
    }
    let c = circle.center;
    let nearest = Point::new(c.x.max(rect.x0).min(rect.x1), c.y.max(rect.y0).min(rect.y1));
    (nearest - c).hypot2() < circle.radius * circle.radius
}

/// Liang-Barsky clip of a segment against the closed rect.
pub(crate) fn segment_hits_rect(line: &Line, rect: &Rect) -> bool {
    let d = line.p1 - line.p0;
    let edges = [
        (-d.x, line.p0.x - rect.x0),
        (d.x, rect.x1 - line.p0.x),
        (-d.y, line.p0.y - rect.y0),
        (d.y, rect.y1 - line.p0.y),
    ];
    let (mut enter, mut leave) = (0.0_f64, 1.0_f64);
    for (p, q) in edges {
        if p == 0.0 {
            // Parallel to this edge: outside means no hit at all.
            if q < 0.0 {
                return false;
            }
        } else {
            let t = q / p;
            if p < 0.0 {
                enter = enter.max(t);
            } else {
                leave = leave.min(t);
            }
            if enter > leave {
                return false;
            }
        }
    }
    true
}

/// Squared distance from the center of `rect` to `origin`.
pub(crate) fn center_distance2(rect: &Rect, origin: Point) -> f64 {
    (rect.center() - origin).hypot2()
}
