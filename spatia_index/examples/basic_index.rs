// Copyright 2025 the Spatia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Spatia Index: fill both structures and run the same queries.

use std::collections::BTreeSet;

use kurbo::{Point, Rect};
use spatia_index::{
    DenseGridIndex, FindMode, GridConfig, QuadTreeConfig, QuadTreeIndex, QueryShape,
    SpatialIndex,
};

fn main() {
    let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
    let items: Vec<(Rect, u32)> = vec![
        (Rect::new(5.0, 5.0, 15.0, 15.0), 1),
        (Rect::new(40.0, 40.0, 60.0, 60.0), 2),
        (Rect::new(45.0, 45.0, 55.0, 55.0), 3),
        (Rect::new(80.0, 10.0, 95.0, 30.0), 4),
        (Rect::new(90.0, 90.0, 120.0, 95.0), 5),
    ];

    let mut indexes: Vec<(&str, Box<dyn SpatialIndex<u32>>)> = vec![
        (
            "quadtree",
            Box::new(QuadTreeIndex::new(bounds, QuadTreeConfig::default()).unwrap()),
        ),
        (
            "grid",
            Box::new(DenseGridIndex::new(bounds, GridConfig::default()).unwrap()),
        ),
    ];

    for (name, index) in &mut indexes {
        let inserted = index.rebuild(bounds, &items).unwrap();
        println!("{name}: inserted {inserted} of {}", items.len());

        let mut all = BTreeSet::new();
        index.query(&QueryShape::Point(Point::new(50.0, 50.0)), FindMode::All, &mut all);
        println!("{name}: at (50,50) {:?}", all);

        let mut closest = Vec::new();
        index.query(
            &QueryShape::Point(Point::new(50.0, 50.0)),
            FindMode::Closest,
            &mut closest,
        );
        println!("{name}: closest to (50,50) {:?}", closest);
    }
}
