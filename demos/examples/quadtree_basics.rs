// Copyright 2025 the Spatia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Overflow a leaf to watch it split, walk the nodes, then erase until the
//! children merge back.
//!
//! Run:
//! - `RUST_LOG=spatia_index=trace cargo run -p spatia_demos --example quadtree_basics`

use std::collections::HashSet;

use kurbo::{Point, Rect};
use spatia_index::{FindMode, NodeRef, QuadTree, QuadTreeConfig};
use tracing_subscriber::EnvFilter;

fn dump(node: NodeRef<'_, u32>, depth: usize) {
    let pad = "  ".repeat(depth);
    let objects: Vec<_> = (0..node.num_items())
        .filter_map(|i| node.item_object(i))
        .collect();
    println!("{pad}{:?} items={objects:?}", node.rect());
    for q in 0..4 {
        if let Some(child) = node.child(q) {
            dump(child, depth + 1);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let bounds = Rect::new(0.0, 0.0, 256.0, 256.0);
    let mut tree = QuadTree::new(bounds, QuadTreeConfig::default()).unwrap();
    println!(
        "pool holds {} nodes for {} levels",
        tree.node_capacity(),
        tree.config().max_levels
    );

    for i in 0..6_u32 {
        let x = f64::from(i) * 20.0 + 4.0;
        tree.insert(Rect::new(x, 8.0, x + 10.0, 18.0), i);
    }
    // Spans all four quadrants of the root.
    tree.insert(Rect::new(120.0, 120.0, 136.0, 136.0), 99);
    println!("{} nodes in use, {} fragments", tree.node_count(), tree.len());
    dump(tree.root(), 0);

    let mut hits = HashSet::new();
    tree.find_rect(Rect::new(100.0, 100.0, 156.0, 156.0), &mut hits);
    println!("objects near the center: {hits:?}");

    let mut closest = Vec::new();
    tree.find_point_radius(Point::new(50.0, 12.0), 30.0, FindMode::Closest, &mut closest);
    println!("closest to (50,12): {closest:?}");

    let removed = tree.erase_where(|o, _| *o >= 3);
    println!(
        "erased {removed} fragments, {} nodes in use",
        tree.node_count()
    );
    dump(tree.root(), 0);
}
