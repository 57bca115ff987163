// Copyright 2025 the Spatia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index errors.

use kurbo::{Point, Rect};
use spatia_pool::PoolError;

/// Errors reported by the grid, the quadtree and their configuration.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// A rectangle was not fully inside the structure's bounds.
    #[error("rect {rect:?} is outside the bounds {bounds:?}")]
    OutOfBounds {
        /// Offending rectangle.
        rect: Rect,
        /// Bounds of the structure.
        bounds: Rect,
    },
    /// A point was outside the structure's bounds.
    #[error("point {point:?} is outside the bounds {bounds:?}")]
    PointOutOfBounds {
        /// Offending point.
        point: Point,
        /// Bounds of the structure.
        bounds: Rect,
    },
    /// The bounding rectangle has no area.
    #[error("bounds {0:?} must have a positive width and height")]
    EmptyBounds(Rect),
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    /// The node pool rejected a request.
    #[error(transparent)]
    Pool(#[from] PoolError),
}

pub(crate) fn check_bounds(bounds: Rect) -> Result<(), Error> {
    // Negated so NaN extents are rejected as well.
    if !(bounds.width() > 0.0 && bounds.height() > 0.0) {
        return Err(Error::EmptyBounds(bounds));
    }
    Ok(())
}
