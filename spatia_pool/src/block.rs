// Copyright 2025 the Spatia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Block handles and the packed block header.

use core::fmt;

/// Largest offset addressable by a block header (24 bits).
pub const MAX_OFFSET: u32 = 0x00FF_FFFF;

/// Maximum number of sub-pools in a [`MemoryPool`](crate::MemoryPool).
///
/// Sixteen sub-pools is what fits the 4-bit tag in [`BlockFlags::TAG`].
pub const MAX_POOLS: usize = 16;

const FLAGS_SHIFT: u32 = 24;

bitflags::bitflags! {
    /// The 8-bit flags half of a block header.
    ///
    /// The low nibble carries the tag of the sub-pool that produced the block and
    /// the high bit records whether the block is currently handed out.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct BlockFlags: u8 {
        /// Block is owned by a caller and not linked into a free list.
        const LIVE = 0b1000_0000;
        /// Sub-pool tag bits.
        const TAG  = 0b0000_1111;
    }
}

/// Handle to a block in a pool.
///
/// The handle is the block header itself: 8 bits of [`BlockFlags`] followed by a
/// 24-bit offset into the owning sub-pool. The same header is kept at the front
/// of the block's slot, so a handle can be validated against the pool on
/// [`free`](crate::FixedPool::free).
///
/// Handles carry no generation. A handle kept past `free` refers to whatever
/// the slot holds next.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Block(u32);

impl Block {
    pub(crate) const fn new(flags: BlockFlags, offset: u32) -> Self {
        debug_assert!(offset <= MAX_OFFSET, "block offset exceeds 24 bits");
        Self(((flags.bits() as u32) << FLAGS_SHIFT) | (offset & MAX_OFFSET))
    }

    pub(crate) fn with_tag(tag: u8, offset: u32) -> Self {
        Self::new(BlockFlags::from_bits_retain(tag) & BlockFlags::TAG, offset)
    }

    /// Offset of the block inside its sub-pool.
    pub const fn offset(self) -> u32 {
        self.0 & MAX_OFFSET
    }

    /// Header flags.
    pub const fn flags(self) -> BlockFlags {
        BlockFlags::from_bits_retain(self.0.to_be_bytes()[0])
    }

    /// Tag of the sub-pool that produced this block.
    pub const fn tag(self) -> u8 {
        self.flags().intersection(BlockFlags::TAG).bits()
    }

    /// Whether the header is marked live.
    pub const fn is_live(self) -> bool {
        self.flags().contains(BlockFlags::LIVE)
    }

    pub(crate) const fn live(self) -> Self {
        Self::new(self.flags().union(BlockFlags::LIVE), self.offset())
    }

    pub(crate) const fn released(self) -> Self {
        Self::new(self.flags().difference(BlockFlags::LIVE), self.offset())
    }

    /// Raw packed header.
    pub const fn to_bits(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("tag", &self.tag())
            .field("offset", &self.offset())
            .field("live", &self.is_live())
            .finish()
    }
}
