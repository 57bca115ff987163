// Copyright 2025 the Spatia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Block pool basics.
//!
//! Show LIFO reuse in a fixed pool and sub-pool growth in a pool of pools.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p spatia_demos --example pool_basics`

use spatia_pool::{FixedPool, MemoryPool, PoolConfig, PoolError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), PoolError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut fixed = FixedPool::new(4)?;
    let a = fixed.allocate("a").ok_or(PoolError::OutOfCapacity { capacity: 4 })?;
    let b = fixed.allocate("b").ok_or(PoolError::OutOfCapacity { capacity: 4 })?;
    fixed.free(a)?;
    fixed.free(b)?;
    let again = fixed.allocate("c").ok_or(PoolError::OutOfCapacity { capacity: 4 })?;
    println!("freed {a:?} then {b:?}, next allocation reuses {again:?}");
    if let Err(err) = fixed.free(a) {
        println!("double free: {err}");
    }

    let mut pool = MemoryPool::new(PoolConfig {
        pool_size: 3,
        max_pools: 2,
    })?;
    let mut blocks = Vec::new();
    loop {
        match pool.allocate(blocks.len()) {
            Ok(block) => blocks.push(block),
            Err(err) => {
                println!("stopped after {} blocks: {err}", blocks.len());
                break;
            }
        }
    }
    let tags: Vec<_> = blocks.iter().map(|b| b.tag()).collect();
    println!("sub-pool tags: {tags:?}, {pool:?}");

    for block in blocks.drain(..).rev() {
        pool.free(block)?;
    }
    println!("{} live, {} free", pool.alloc_count(), pool.free_count());
    Ok(())
}
