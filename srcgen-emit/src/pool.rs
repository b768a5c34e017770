//! Shared pool of reusable string storage.

use std::sync::{
    Arc, OnceLock,
    atomic::{AtomicUsize, Ordering},
};

use parking_lot::Mutex;

/// Thread-safe pool of `String` blocks.
///
/// Buffers that outgrow their initial storage rent a larger block here and
/// hand it back when they are dropped. A rented block is owned exclusively
/// by the renter until it is given back.
#[derive(Debug)]
pub struct BufferPool {
    blocks: Mutex<Vec<String>>,
    max_retained: usize,
    max_block_len: usize,
    rented: AtomicUsize,
    returned: AtomicUsize,
}

impl BufferPool {
    /// Default number of idle blocks kept for reuse.
    pub const DEFAULT_MAX_RETAINED: usize = 32;

    /// Default upper bound on the capacity of a retained block.
    pub const DEFAULT_MAX_BLOCK_LEN: usize = 1 << 20;

    /// Create a pool with default limits.
    pub fn new() -> Self {
        Self::with_limits(Self::DEFAULT_MAX_RETAINED, Self::DEFAULT_MAX_BLOCK_LEN)
    }

    /// Create a pool that keeps at most `max_retained` idle blocks, each with
    /// a capacity of at most `max_block_len` bytes.
    pub fn with_limits(max_retained: usize, max_block_len: usize) -> Self {
        Self {
            blocks: Mutex::new(Vec::new()),
            max_retained,
            max_block_len,
            rented: AtomicUsize::new(0),
            returned: AtomicUsize::new(0),
        }
    }

    /// The process-wide pool.
    pub fn shared() -> Arc<BufferPool> {
        static SHARED: OnceLock<Arc<BufferPool>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(BufferPool::new())))
    }

    /// Rent an empty block with capacity of at least `min_capacity` bytes.
    pub fn rent(&self, min_capacity: usize) -> String {
        self.rented.fetch_add(1, Ordering::Relaxed);

        let reused = {
            let mut blocks = self.blocks.lock();
            blocks
                .iter()
                .position(|block| block.capacity() >= min_capacity)
                .map(|index| blocks.swap_remove(index))
        };

        match reused {
            Some(block) => {
                tracing::trace!(min_capacity, capacity = block.capacity(), "reusing pooled block");
                block
            }
            None => {
                tracing::debug!(min_capacity, "buffer pool miss, allocating");
                String::with_capacity(min_capacity)
            }
        }
    }

    /// Give a block back to the pool.
    ///
    /// The block is cleared and kept for reuse unless the pool is full or
    /// the block is larger than the retention limit.
    pub fn give_back(&self, mut block: String) {
        self.returned.fetch_add(1, Ordering::Relaxed);

        if block.capacity() > self.max_block_len {
            tracing::trace!(capacity = block.capacity(), "dropping oversized block");
            return;
        }

        block.clear();
        let mut blocks = self.blocks.lock();
        if blocks.len() < self.max_retained {
            blocks.push(block);
        }
    }

    /// Total number of blocks rented since creation.
    pub fn rented(&self) -> usize {
        self.rented.load(Ordering::Relaxed)
    }

    /// Total number of blocks given back since creation.
    pub fn returned(&self) -> usize {
        self.returned.load(Ordering::Relaxed)
    }

    /// Blocks currently rented and not yet given back.
    pub fn outstanding(&self) -> usize {
        self.rented().saturating_sub(self.returned())
    }

    /// Idle blocks currently held for reuse.
    pub fn retained(&self) -> usize {
        self.blocks.lock().len()
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new()
    }
}
