//! Fixed-block memory pool with allocation diagnostics.
//!
//! A deterministic, allocation-free pool over a caller-provided byte buffer:
//! the buffer is split into equally sized blocks and a linear scan over an
//! in-use table finds the first free one. Collaborators such as the
//! scheduler can draw per-task context storage from a pool carved at setup
//! time.
//!
//! Blocks are addressed through opaque [`BlockHandle`]s rather than raw
//! pointers; a handle for a freed block simply stops resolving, so
//! use-after-free reads are impossible.

use core::fmt;

use heapless::Vec;

/// Maximum number of blocks a pool can manage, regardless of buffer size.
pub const MAX_BLOCKS: usize = 32;

/// Opaque handle to an allocated block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHandle(usize);

impl BlockHandle {
    /// Block index within the pool.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Pool diagnostics counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Blocks the pool manages
    pub total_blocks: usize,
    /// Blocks currently free
    pub free_blocks: usize,
    /// Total successful allocations
    pub alloc_count: usize,
    /// Total frees
    pub free_count: usize,
    /// Allocation attempts while the pool was exhausted
    pub failed_allocs: usize,
}

impl fmt::Display for PoolStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[pool diagnostics]")?;
        writeln!(f, "total blocks : {}", self.total_blocks)?;
        writeln!(f, "free blocks  : {}", self.free_blocks)?;
        writeln!(f, "alloc count  : {}", self.alloc_count)?;
        writeln!(f, "free count   : {}", self.free_count)?;
        writeln!(f, "failed allocs: {}", self.failed_allocs)?;
        Ok(())
    }
}

/// Static fixed-block allocator over a borrowed buffer.
///
/// # Example
///
/// ```
/// use tickwheel_core::pool::BlockPool;
///
/// let mut buffer = [0u8; 64];
/// let mut pool = BlockPool::new(&mut buffer, 16);
///
/// let handle = pool.alloc().unwrap();
/// pool.block_mut(handle).unwrap()[0] = 0xAB;
/// assert_eq!(pool.free_blocks(), 3);
///
/// pool.free(handle);
/// assert_eq!(pool.free_blocks(), 4);
/// ```
pub struct BlockPool<'a> {
    buffer: &'a mut [u8],
    block_size: usize,
    in_use: Vec<bool, MAX_BLOCKS>,
    alloc_count: usize,
    free_count: usize,
    failed_allocs: usize,
}

impl<'a> BlockPool<'a> {
    /// Creates a pool of `buffer.len() / block_size` blocks (capped at
    /// [`MAX_BLOCKS`]) and zeroes the buffer.
    ///
    /// # Panics
    ///
    /// Panics if `block_size == 0`.
    pub fn new(buffer: &'a mut [u8], block_size: usize) -> Self {
        assert!(block_size > 0, "block_size must be non-zero");

        buffer.fill(0);
        let block_count = (buffer.len() / block_size).min(MAX_BLOCKS);
        let mut in_use = Vec::new();
        for _ in 0..block_count {
            // Capacity is MAX_BLOCKS and block_count is capped to it
            let _ = in_use.push(false);
        }

        Self {
            buffer,
            block_size,
            in_use,
            alloc_count: 0,
            free_count: 0,
            failed_allocs: 0,
        }
    }

    /// Allocates the first free block, scanning in index order.
    ///
    /// Returns `None` and counts a failed allocation when the pool is
    /// exhausted; the caller may retry after freeing.
    pub fn alloc(&mut self) -> Option<BlockHandle> {
        for (index, used) in self.in_use.iter_mut().enumerate() {
            if !*used {
                *used = true;
                self.alloc_count += 1;
                return Some(BlockHandle(index));
            }
        }
        self.failed_allocs += 1;
        None
    }

    /// Returns a block to the pool.
    ///
    /// Freeing a handle that is not currently allocated is ignored, so a
    /// double free cannot corrupt the counters.
    pub fn free(&mut self, handle: BlockHandle) {
        if let Some(used) = self.in_use.get_mut(handle.0) {
            if *used {
                *used = false;
                self.free_count += 1;
            }
        }
    }

    /// Read access to an allocated block, or `None` if the handle does not
    /// resolve to a live allocation.
    pub fn block(&self, handle: BlockHandle) -> Option<&[u8]> {
        if !self.is_allocated(handle) {
            return None;
        }
        let start = handle.0 * self.block_size;
        Some(&self.buffer[start..start + self.block_size])
    }

    /// Write access to an allocated block, or `None` if the handle does not
    /// resolve to a live allocation.
    pub fn block_mut(&mut self, handle: BlockHandle) -> Option<&mut [u8]> {
        if !self.is_allocated(handle) {
            return None;
        }
        let start = handle.0 * self.block_size;
        Some(&mut self.buffer[start..start + self.block_size])
    }

    /// Block size this pool was carved with.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of blocks currently free.
    pub fn free_blocks(&self) -> usize {
        self.in_use.iter().filter(|used| !**used).count()
    }

    /// Diagnostics counters.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            total_blocks: self.in_use.len(),
            free_blocks: self.free_blocks(),
            alloc_count: self.alloc_count,
            free_count: self.free_count,
            failed_allocs: self.failed_allocs,
        }
    }

    fn is_allocated(&self, handle: BlockHandle) -> bool {
        self.in_use.get(handle.0).copied().unwrap_or(false)
    }
}
