//! Growable text storage backed by the buffer pool.

use std::{fmt, mem, sync::Arc};

use crate::pool::BufferPool;

/// Capacity, in bytes, of the owned storage a buffer starts with.
pub const INLINE_CAPACITY: usize = 256;

/// Append-only text buffer with explicit, pool-backed growth.
///
/// A buffer starts on owned storage of a fixed initial capacity. When an
/// append does not fit, it rents a block of
/// `max(capacity * 2, len + incoming)` bytes from its [`BufferPool`], copies
/// the current content over and gives the previous block back if that one
/// was pooled too. Pooled storage is returned only when the buffer drops.
///
/// Lengths and capacities are measured in UTF-8 bytes.
///
/// # Example
///
/// ```
/// use srcgen_emit::GrowableBuffer;
///
/// let mut buffer = GrowableBuffer::with_capacity(4);
/// buffer.append("hello");
/// buffer.append_char('!');
/// assert_eq!(buffer.as_str(), "hello!");
/// assert!(buffer.is_pooled());
/// ```
#[derive(Debug)]
pub struct GrowableBuffer {
    storage: String,
    capacity: usize,
    pooled: bool,
    pool: Arc<BufferPool>,
}

impl GrowableBuffer {
    /// Create a buffer with [`INLINE_CAPACITY`] bytes of initial storage,
    /// growing through the shared pool.
    pub fn new() -> Self {
        Self::with_capacity(INLINE_CAPACITY)
    }

    /// Create a buffer with `capacity` bytes of initial storage, growing
    /// through the shared pool.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_pool(capacity, BufferPool::shared())
    }

    /// Create a buffer that grows through the given pool.
    pub fn with_pool(capacity: usize, pool: Arc<BufferPool>) -> Self {
        Self {
            storage: String::with_capacity(capacity),
            capacity,
            pooled: false,
            pool,
        }
    }

    /// Append a string slice.
    pub fn append(&mut self, s: &str) {
        if s.len() > self.remaining() {
            self.grow(s.len());
        }
        self.storage.push_str(s);
    }

    /// Append a single character.
    pub fn append_char(&mut self, c: char) {
        let width = c.len_utf8();
        if width > self.remaining() {
            self.grow(width);
        }
        self.storage.push(c);
    }

    fn remaining(&self) -> usize {
        self.capacity - self.storage.len()
    }

    fn grow(&mut self, additional: usize) {
        let new_capacity = (self.capacity * 2).max(self.storage.len() + additional);
        tracing::trace!(
            from = self.capacity,
            to = new_capacity,
            len = self.storage.len(),
            "growing buffer"
        );

        let mut block = self.pool.rent(new_capacity);
        block.push_str(&self.storage);
        let previous = mem::replace(&mut self.storage, block);
        if self.pooled {
            self.pool.give_back(previous);
        }

        self.pooled = true;
        self.capacity = new_capacity;
    }

    /// Current content length in bytes.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Usable capacity in bytes. Always at least [`len`](Self::len).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the current storage was rented from the pool.
    pub fn is_pooled(&self) -> bool {
        self.pooled
    }

    /// Shorten the content to `len` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `len` is greater than the current length or does not fall
    /// on a character boundary.
    pub fn truncate(&mut self, len: usize) {
        assert!(
            len <= self.storage.len(),
            "cannot truncate to {len} bytes; buffer holds {}",
            self.storage.len()
        );
        assert!(
            self.storage.is_char_boundary(len),
            "truncation at byte {len} splits a character"
        );
        self.storage.truncate(len);
    }

    /// Remove all content, keeping the current storage.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// The current content.
    pub fn as_str(&self) -> &str {
        &self.storage
    }

    /// The current content with leading and trailing whitespace removed.
    pub fn to_trim_string(&self) -> String {
        self.storage.trim().to_string()
    }

    /// Consume the buffer and return its content.
    ///
    /// Owned storage is handed over as is; pooled storage is copied out so
    /// the block can go back to the pool.
    pub fn into_string(mut self) -> String {
        if self.pooled {
            self.storage.clone()
        } else {
            mem::take(&mut self.storage)
        }
    }
}

impl Default for GrowableBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for GrowableBuffer {
    fn drop(&mut self) {
        if self.pooled {
            self.pool.give_back(mem::take(&mut self.storage));
        }
    }
}

impl fmt::Display for GrowableBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.storage)
    }
}

impl fmt::Write for GrowableBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.append_char(c);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Write;

    use super::*;

    fn local_pool() -> Arc<BufferPool> {
        Arc::new(BufferPool::new())
    }

    #[test]
    fn test_append_within_capacity_stays_owned() {
        let mut buffer = GrowableBuffer::with_pool(16, local_pool());
        buffer.append("abc");
        buffer.append_char('d');
        assert_eq!(buffer.as_str(), "abcd");
        assert_eq!(buffer.capacity(), 16);
        assert!(!buffer.is_pooled());
    }

    #[test]
    fn test_growth_doubles_capacity() {
        let pool = local_pool();
        let mut buffer = GrowableBuffer::with_pool(8, Arc::clone(&pool));
        buffer.append("12345678");
        buffer.append_char('9');
        assert_eq!(buffer.capacity(), 16);
        assert!(buffer.is_pooled());
        assert_eq!(buffer.as_str(), "123456789");
        assert_eq!(pool.rented(), 1);
    }

    #[test]
    fn test_growth_fits_large_write() {
        let mut buffer = GrowableBuffer::with_pool(8, local_pool());
        buffer.append("ab");
        let long = "x".repeat(40);
        buffer.append(&long);
        assert_eq!(buffer.capacity(), 42);
        assert_eq!(buffer.len(), 42);
    }

    #[test]
    fn test_first_write_into_zero_capacity_fits_exactly() {
        let mut buffer = GrowableBuffer::with_pool(0, local_pool());
        buffer.append("hello");
        assert_eq!(buffer.capacity(), 5);
        assert_eq!(buffer.as_str(), "hello");
    }

    #[test]
    fn test_multibyte_char_triggers_growth() {
        let mut buffer = GrowableBuffer::with_pool(2, local_pool());
        buffer.append_char('a');
        buffer.append_char('é');
        assert_eq!(buffer.as_str(), "aé");
        assert!(buffer.len() <= buffer.capacity());
    }

    #[test]
    fn test_repeated_growth_returns_previous_blocks() {
        let pool = local_pool();
        {
            let mut buffer = GrowableBuffer::with_pool(1, Arc::clone(&pool));
            for _ in 0..100 {
                buffer.append("chunk;");
            }
            assert_eq!(buffer.len(), 600);
            assert_eq!(pool.outstanding(), 1);
        }
        assert_eq!(pool.outstanding(), 0);
        assert!(pool.retained() > 0);
    }

    #[test]
    fn test_drop_without_growth_touches_no_pool() {
        let pool = local_pool();
        {
            let mut buffer = GrowableBuffer::with_pool(64, Arc::clone(&pool));
            buffer.append("small");
        }
        assert_eq!(pool.rented(), 0);
        assert_eq!(pool.returned(), 0);
    }

    #[test]
    fn test_into_string_returns_pooled_block() {
        let pool = local_pool();
        let mut buffer = GrowableBuffer::with_pool(2, Arc::clone(&pool));
        buffer.append("grown past inline");
        let text = buffer.into_string();
        assert_eq!(text, "grown past inline");
        assert_eq!(pool.outstanding(), 0);
    }

    #[test]
    fn test_trim_and_truncate() {
        let mut buffer = GrowableBuffer::with_pool(32, local_pool());
        buffer.append("  body, \n");
        assert_eq!(buffer.to_trim_string(), "body,");
        buffer.truncate(6);
        assert_eq!(buffer.as_str(), "  body");
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 32);
    }

    #[test]
    #[should_panic(expected = "splits a character")]
    fn test_truncate_inside_char_panics() {
        let mut buffer = GrowableBuffer::with_pool(8, local_pool());
        buffer.append("é");
        buffer.truncate(1);
    }

    #[test]
    #[should_panic(expected = "cannot truncate")]
    fn test_truncate_past_end_panics() {
        let mut buffer = GrowableBuffer::with_pool(8, local_pool());
        buffer.append("ab");
        buffer.truncate(3);
    }

    #[test]
    fn test_fmt_write() {
        let mut buffer = GrowableBuffer::with_pool(4, local_pool());
        write!(buffer, "{}-{:03}", "id", 7).unwrap();
        assert_eq!(buffer.to_string(), "id-007");
    }
}
