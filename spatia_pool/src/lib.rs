// Copyright 2025 the Spatia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatia Pool: fixed-size block pools.
//!
//! - [`FixedPool`] reserves a fixed number of equally sized blocks up front and threads
//!   the free ones into an in-place singly linked list. Allocation and release are O(1)
//!   and reuse is LIFO.
//! - [`MemoryPool`] wraps up to [`MAX_POOLS`] fixed pools of the same size and appends a
//!   new one only when every existing one is full.
//! - [`Block`] is the handle for a block: a packed 32-bit header with a 24-bit offset, a
//!   4-bit tag naming the producing sub-pool and a live bit.
//!
//! Both pools implement [`FixedAllocator`], which is what node-based data structures
//! (such as the quadtree in `spatia_index`) are written against.
//!
//! # Example
//!
//! ```rust
//! use spatia_pool::{MemoryPool, PoolConfig};
//!
//! let mut pool = MemoryPool::new(PoolConfig { pool_size: 2, max_pools: 4 }).unwrap();
//! let a = pool.allocate("a").unwrap();
//! let b = pool.allocate("b").unwrap();
//! let c = pool.allocate("c").unwrap();
//!
//! // The first sub-pool filled up, so `c` came from a second one.
//! assert_eq!((a.tag(), b.tag(), c.tag()), (0, 0, 1));
//! assert_eq!(pool.pool_count(), 2);
//!
//! assert_eq!(pool.free(b), Ok("b"));
//! assert!(pool.free(b).is_err());
//! assert_eq!(pool.alloc_count(), 2);
//! ```
//!
//! This crate is `no_std` and only needs `alloc`.

#![no_std]

extern crate alloc;

mod allocator;
mod block;
mod error;
mod fixed;
mod pool;

pub use allocator::FixedAllocator;
pub use block::{Block, BlockFlags, MAX_OFFSET, MAX_POOLS};
pub use error::PoolError;
pub use fixed::FixedPool;
pub use pool::{MemoryPool, PoolConfig};
