// Copyright 2025 the Spatia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pool-of-pools wrapper that grows by appending tagged sub-pools.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::block::{Block, MAX_OFFSET, MAX_POOLS};
use crate::error::PoolError;
use crate::fixed::FixedPool;

/// Sizing for a [`MemoryPool`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Blocks per sub-pool.
    pub pool_size: usize,
    /// Upper bound on the number of sub-pools, at most [`MAX_POOLS`].
    pub max_pools: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            pool_size: 64,
            max_pools: MAX_POOLS,
        }
    }
}

impl PoolConfig {
    /// Configuration for a single sub-pool of `pool_size` blocks that never grows.
    pub const fn fixed(pool_size: usize) -> Self {
        Self {
            pool_size,
            max_pools: 1,
        }
    }

    /// Check the limits imposed by the block header layout.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.pool_size == 0 || self.max_pools == 0 {
            return Err(PoolError::EmptyPool);
        }
        if self.max_pools > MAX_POOLS {
            return Err(PoolError::TooManyPools {
                requested: self.max_pools,
            });
        }
        if self.pool_size - 1 > MAX_OFFSET as usize {
            return Err(PoolError::OffsetOverflow {
                capacity: self.pool_size,
            });
        }
        Ok(())
    }
}

/// Growable block pool made of equally sized [`FixedPool`]s.
///
/// Starts with one sub-pool. When every existing sub-pool is full a new one is
/// appended, up to [`PoolConfig::max_pools`]. The index of the producing
/// sub-pool is written into each block's tag so [`free`](Self::free) can route
/// the block back without a side table.
pub struct MemoryPool<T> {
    pools: Vec<FixedPool<T>>,
    config: PoolConfig,
    cursor: usize,
}

impl<T> MemoryPool<T> {
    /// Create a pool with one sub-pool allocated.
    pub fn new(config: PoolConfig) -> Result<Self, PoolError> {
        config.validate()?;
        let first = FixedPool::with_tag(config.pool_size, 0)?;
        Ok(Self {
            pools: vec![first],
            config,
            cursor: 0,
        })
    }

    /// Store `value` in a free block.
    ///
    /// Sub-pools are searched round-robin starting at the one that served the
    /// previous allocation. A sub-pool is appended only when all are full.
    pub fn allocate(&mut self, value: T) -> Result<Block, PoolError> {
        let count = self.pools.len();
        let found = (0..count)
            .map(|step| (self.cursor + step) % count)
            .find(|&i| self.pools[i].has_free());
        let index = match found {
            Some(index) => index,
            None => self.grow()?,
        };
        self.cursor = index;
        match self.pools[index].allocate(value) {
            Some(block) => Ok(block),
            None => unreachable!("sub-pool {index} reported free blocks"),
        }
    }

    /// Return a block to the sub-pool named by its tag.
    pub fn free(&mut self, block: Block) -> Result<T, PoolError> {
        self.pools
            .get_mut(usize::from(block.tag()))
            .ok_or(PoolError::ForeignBlock(block))?
            .free(block)
    }

    /// Borrow the value in a live block.
    pub fn get(&self, block: Block) -> Option<&T> {
        self.pools.get(usize::from(block.tag()))?.get(block)
    }

    /// Mutably borrow the value in a live block.
    pub fn get_mut(&mut self, block: Block) -> Option<&mut T> {
        self.pools.get_mut(usize::from(block.tag()))?.get_mut(block)
    }

    /// Number of live blocks across all sub-pools.
    pub fn alloc_count(&self) -> usize {
        self.pools.iter().map(FixedPool::alloc_count).sum()
    }

    /// Number of free blocks in the sub-pools allocated so far.
    pub fn free_count(&self) -> usize {
        self.capacity() - self.alloc_count()
    }

    /// Number of blocks in the sub-pools allocated so far.
    pub fn capacity(&self) -> usize {
        self.pools.len() * self.config.pool_size
    }

    /// Number of sub-pools allocated so far.
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    /// The configuration this pool was built with.
    pub fn config(&self) -> PoolConfig {
        self.config
    }

    fn grow(&mut self) -> Result<usize, PoolError> {
        let index = self.pools.len();
        if index >= self.config.max_pools {
            tracing::warn!(
                pools = index,
                capacity = self.capacity(),
                "block pool exhausted"
            );
            return Err(PoolError::OutOfCapacity {
                capacity: self.capacity(),
            });
        }
        let tag = u8::try_from(index).map_err(|_| PoolError::TooManyPools {
            requested: index + 1,
        })?;
        self.pools
            .push(FixedPool::with_tag(self.config.pool_size, tag)?);
        tracing::debug!(
            pools = index + 1,
            pool_size = self.config.pool_size,
            "appended sub-pool"
        );
        Ok(index)
    }
}

impl<T> Debug for MemoryPool<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MemoryPool")
            .field("config", &self.config)
            .field("pools", &self.pools.len())
            .field("live", &self.alloc_count())
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
