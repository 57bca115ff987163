// Copyright 2025 the Spatia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single fixed-capacity pool with an in-place free list.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::block::{Block, MAX_OFFSET};
use crate::error::PoolError;

// A free slot stores its free-list link where a live slot stores its value.
enum Slot<T> {
    Free { header: Block, next: Option<u32> },
    Live { header: Block, value: T },
}

/// Fixed-capacity pool of equally sized blocks.
///
/// All storage is reserved up front. Free blocks are threaded into a singly
/// linked list through their own slots, so `allocate` and `free` are O(1) and
/// never touch the heap. Reuse is LIFO: the most recently freed block is the next
/// one handed out.
pub struct FixedPool<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<u32>,
    live: usize,
    tag: u8,
}

impl<T> FixedPool<T> {
    /// Create a pool with room for `capacity` blocks.
    ///
    /// Fails if `capacity` is zero or exceeds the 24-bit offset range.
    pub fn new(capacity: usize) -> Result<Self, PoolError> {
        Self::with_tag(capacity, 0)
    }

    pub(crate) fn with_tag(capacity: usize, tag: u8) -> Result<Self, PoolError> {
        if capacity == 0 {
            return Err(PoolError::EmptyPool);
        }
        let last = u32::try_from(capacity - 1)
            .ok()
            .filter(|&offset| offset <= MAX_OFFSET)
            .ok_or(PoolError::OffsetOverflow { capacity })?;

        let mut slots = Vec::with_capacity(capacity);
        for offset in 0..=last {
            slots.push(Slot::Free {
                header: Block::with_tag(tag, offset),
                next: (offset < last).then_some(offset + 1),
            });
        }
        Ok(Self {
            slots,
            free_head: Some(0),
            live: 0,
            tag,
        })
    }

    /// Pop the head of the free list and store `value` in it.
    ///
    /// Returns `None` (dropping `value`) when every block is live.
    pub fn allocate(&mut self, value: T) -> Option<Block> {
        let offset = self.free_head?;
        let slot = &mut self.slots[offset as usize];
        let (header, next) = match slot {
            Slot::Free { header, next } => (header.live(), *next),
            Slot::Live { .. } => unreachable!("free list links a live block"),
        };
        *slot = Slot::Live { header, value };
        self.free_head = next;
        self.live += 1;
        Some(header)
    }

    /// Return a block to the head of the free list and hand back its value.
    pub fn free(&mut self, block: Block) -> Result<T, PoolError> {
        if block.tag() != self.tag {
            return Err(PoolError::ForeignBlock(block));
        }
        let head = self.free_head;
        let slot = self
            .slots
            .get_mut(block.offset() as usize)
            .ok_or(PoolError::ForeignBlock(block))?;
        if !matches!(slot, Slot::Live { header, .. } if *header == block) {
            return Err(PoolError::DoubleFree(block));
        }
        let link = Slot::Free {
            header: block.released(),
            next: head,
        };
        let Slot::Live { value, .. } = core::mem::replace(slot, link) else {
            unreachable!("slot was checked live");
        };
        self.free_head = Some(block.offset());
        self.live -= 1;
        Ok(value)
    }

    /// Borrow the value in a live block.
    pub fn get(&self, block: Block) -> Option<&T> {
        match self.slots.get(block.offset() as usize)? {
            Slot::Live { header, value } if *header == block => Some(value),
            _ => None,
        }
    }

    /// Mutably borrow the value in a live block.
    pub fn get_mut(&mut self, block: Block) -> Option<&mut T> {
        match self.slots.get_mut(block.offset() as usize)? {
            Slot::Live { header, value } if *header == block => Some(value),
            _ => None,
        }
    }

    /// Iterate live blocks in offset order.
    pub fn iter(&self) -> impl Iterator<Item = (Block, &T)> + '_ {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Live { header, value } => Some((*header, value)),
            Slot::Free { .. } => None,
        })
    }

    /// True if at least one block is free.
    pub fn has_free(&self) -> bool {
        self.free_head.is_some()
    }

    /// Number of live blocks.
    pub fn alloc_count(&self) -> usize {
        self.live
    }

    /// Number of free blocks.
    pub fn free_count(&self) -> usize {
        self.slots.len() - self.live
    }

    /// Total number of blocks.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Sub-pool tag stamped into every block header.
    pub fn tag(&self) -> u8 {
        self.tag
    }
}

impl<T> Debug for FixedPool<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FixedPool")
            .field("tag", &self.tag)
            .field("capacity", &self.slots.len())
            .field("live", &self.live)
            .field("free_head", &self.free_head)
            .finish_non_exhaustive()
    }
}
