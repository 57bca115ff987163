// Copyright 2025 the Spatia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The allocator seam shared by [`FixedPool`] and [`MemoryPool`].

use crate::block::Block;
use crate::error::PoolError;
use crate::fixed::FixedPool;
use crate::pool::MemoryPool;

/// Storage that hands out [`Block`] handles for values of a single type.
///
/// Data structures that keep their nodes in a pool are generic over this trait
/// so either a fixed pool or a growable pool can back them.
pub trait FixedAllocator<T> {
    /// Store `value` and return its handle.
    fn allocate(&mut self, value: T) -> Result<Block, PoolError>;
    /// Release `block` and return the value it held.
    fn free(&mut self, block: Block) -> Result<T, PoolError>;
    /// Borrow the value behind `block`.
    fn get(&self, block: Block) -> Option<&T>;
    /// Mutably borrow the value behind `block`.
    fn get_mut(&mut self, block: Block) -> Option<&mut T>;
    /// Number of live blocks.
    fn alloc_count(&self) -> usize;
}

impl<T> FixedAllocator<T> for FixedPool<T> {
    fn allocate(&mut self, value: T) -> Result<Block, PoolError> {
        let capacity = self.capacity();
        Self::allocate(self, value).ok_or(PoolError::OutOfCapacity { capacity })
    }

    fn free(&mut self, block: Block) -> Result<T, PoolError> {
        Self::free(self, block)
    }

    fn get(&self, block: Block) -> Option<&T> {
        Self::get(self, block)
    }

    fn get_mut(&mut self, block: Block) -> Option<&mut T> {
        Self::get_mut(self, block)
    }

    fn alloc_count(&self) -> usize {
        Self::alloc_count(self)
    }
}

impl<T> FixedAllocator<T> for MemoryPool<T> {
    fn allocate(&mut self, value: T) -> Result<Block, PoolError> {
        Self::allocate(self, value)
    }

    fn free(&mut self, block: Block) -> Result<T, PoolError> {
        Self::free(self, block)
    }

    fn get(&self, block: Block) -> Option<&T> {
        Self::get(self, block)
    }

    fn get_mut(&mut self, block: Block) -> Option<&mut T> {
        Self::get_mut(self, block)
    }

    fn alloc_count(&self) -> usize {
        Self::alloc_count(self)
    }
}
