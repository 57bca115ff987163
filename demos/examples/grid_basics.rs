// Copyright 2025 the Spatia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dense grid basics.
//!
//! Fill a 10 x 10 grid, look at how a spanning rect is copied per cell, then run
//! point, radius and segment queries in each find mode.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p spatia_demos --example grid_basics`

use std::collections::BTreeSet;

use kurbo::{Point, Rect};
use spatia_index::{DenseSpatialGrid, FindMode, GridConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut grid: DenseSpatialGrid<&str> =
        DenseSpatialGrid::with_size(100.0, 100.0, GridConfig::default()).unwrap();

    grid.insert(Rect::new(85.0, 85.0, 95.0, 95.0), "crate");
    grid.insert(Rect::new(10.0, 10.0, 30.0, 20.0), "wall");
    grid.insert(Rect::new(22.0, 12.0, 26.0, 16.0), "coin");
    let rejected = !grid.insert(Rect::new(95.0, 0.0, 110.0, 5.0), "offscreen");
    println!("offscreen rejected: {rejected}");

    let range = grid.map_rect(Rect::new(85.0, 85.0, 95.0, 95.0)).unwrap();
    let cells: Vec<_> = range.cells().collect();
    println!("crate covers {cells:?}, {} stored copies in total", grid.len());

    for mode in [FindMode::All, FindMode::First, FindMode::Closest] {
        let mut out = Vec::new();
        grid.find_point(Point::new(24.0, 14.0), mode, &mut out);
        println!("point (24,14) {mode:?}: {out:?}");
    }

    let mut near = BTreeSet::new();
    grid.find_point_radius(Point::new(50.0, 50.0), 50.0, FindMode::All, &mut near);
    println!("within 50 of the center: {near:?}");

    let mut crossed = BTreeSet::new();
    grid.find_line(
        Point::new(0.0, 0.0),
        Point::new(100.0, 100.0),
        FindMode::All,
        &mut crossed,
    );
    println!("on the diagonal: {crossed:?}");

    let removed = grid.erase_point(Point::new(90.0, 90.0));
    println!("erased {removed} copies of the crate, {} left", grid.len());
    assert!(grid.map_point(Point::new(-1.0, 0.0)).is_err(), "outside points are errors");
}
