// Copyright 2025 the Spatia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pool errors.

use crate::block::{Block, MAX_POOLS};

/// Errors reported by [`FixedPool`](crate::FixedPool) and [`MemoryPool`](crate::MemoryPool).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// A pool must hold at least one block.
    #[error("pool size must be non-zero")]
    EmptyPool,
    /// The pool has more blocks than a 24-bit offset can address.
    #[error("pool of {capacity} blocks exceeds the 24-bit offset range")]
    OffsetOverflow {
        /// Requested number of blocks.
        capacity: usize,
    },
    /// More sub-pools were requested than the 4-bit tag can identify.
    #[error("{requested} sub-pools requested, at most {max} can be tagged", max = MAX_POOLS)]
    TooManyPools {
        /// Requested number of sub-pools.
        requested: usize,
    },
    /// Every block in every sub-pool is live and no sub-pool can be added.
    #[error("all {capacity} blocks are in use")]
    OutOfCapacity {
        /// Total number of blocks across all sub-pools.
        capacity: usize,
    },
    /// The block is not live in its pool (freed twice, or never handed out).
    #[error("{0:?} is not live")]
    DoubleFree(Block),
    /// The block was produced by another pool.
    #[error("{0:?} does not belong to this pool")]
    ForeignBlock(Block),
}
