use crate::invariants::{
    debug_assert_bounded_len, debug_assert_masked_cursor, debug_assert_occupied_read,
};
use crate::{Config, RingError};
use std::fmt;

/// Fixed-capacity circular FIFO queue - the core building block.
///
/// A bounded queue over an array of slots, with two cursors advanced modulo
/// capacity via a bitmask. The buffer never resizes and never inspects the
/// values it stores; `T` is an opaque handle whose meaning and external
/// lifetime accounting belong entirely to the caller. The buffer's only stake
/// in a stored value is the `Some` it holds in the slot, dropped on `pop`,
/// `clear`, or buffer drop.
///
/// This is a plain sequential structure: every mutating operation takes
/// `&mut self`, so exclusive ownership is a compile-time fact. There are no
/// atomics, no blocking, and no internal synchronization; callers that need
/// concurrent access must supply their own.
///
/// Capacity is always a power of two, and one slot is sacrificed to
/// disambiguate full from empty, so a buffer of capacity `K` holds at most
/// `K - 1` live elements.
pub struct RingBuffer<T> {
    /// Slot array, length = `config.capacity()`. `None` marks a vacant slot.
    storage: Box<[Option<T>]>,
    config: Config,
    /// Next slot to read. Only the low `log2(capacity)` bits are significant.
    read_pos: usize,
    /// Next slot to write.
    write_pos: usize,
}

impl<T> RingBuffer<T> {
    /// Creates a ring buffer from an explicit configuration.
    ///
    /// Allocation failure is reported as [`RingError::AllocationFailed`]; no
    /// partial buffer is produced.
    pub fn new(config: Config) -> Result<Self, RingError> {
        let capacity = config.capacity();

        // Fallible allocation: surface OOM as an error instead of aborting.
        let mut storage = Vec::new();
        storage
            .try_reserve_exact(capacity)
            .map_err(|_| RingError::AllocationFailed { capacity })?;
        storage.resize_with(capacity, || None);

        Ok(Self {
            storage: storage.into_boxed_slice(),
            config,
            read_pos: 0,
            write_pos: 0,
        })
    }

    /// Creates a ring buffer with at least `requested` slots.
    ///
    /// The request is rounded up to the next power of two (see
    /// [`Config::new`]).
    pub fn with_capacity(requested: usize) -> Result<Self, RingError> {
        Self::new(Config::new(requested))
    }

    // ---------------------------------------------------------------------
    // STATUS
    // ---------------------------------------------------------------------

    /// Returns the slot count of the backing storage.
    ///
    /// The buffer holds at most `capacity() - 1` live elements.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.config.capacity()
    }

    /// Returns the mask for cursor wrapping.
    #[inline]
    const fn mask(&self) -> usize {
        self.config.mask()
    }

    /// Returns the current number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        let len = if self.write_pos >= self.read_pos {
            self.write_pos - self.read_pos
        } else {
            self.capacity() - (self.read_pos - self.write_pos)
        };
        debug_assert_bounded_len!(len, self.capacity());
        len
    }

    /// Returns `true` if the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.read_pos == self.write_pos
    }

    /// Returns `true` if the buffer cannot accept another push.
    #[inline]
    pub fn is_full(&self) -> bool {
        (self.write_pos + 1) & self.mask() == self.read_pos
    }

    // ---------------------------------------------------------------------
    // SINGLE-ELEMENT OPERATIONS
    // ---------------------------------------------------------------------

    /// Pushes one item onto the tail of the queue.
    ///
    /// Returns `false` without touching any state if the buffer is full; the
    /// caller decides whether to retry, drop, or apply backpressure. A caller
    /// that acquired an external lifetime stake for `item` before the push
    /// must release it again when `false` comes back.
    #[inline]
    pub fn push(&mut self, item: T) -> bool {
        if self.is_full() {
            return false;
        }

        self.storage[self.write_pos] = Some(item);
        self.write_pos = (self.write_pos + 1) & self.mask();
        debug_assert_masked_cursor!("write", self.write_pos, self.capacity());
        true
    }

    /// Pops one item from the head of the queue.
    ///
    /// Returns `None` without side effects if the buffer is empty. On success
    /// the slot is vacated and ownership of the item transfers to the caller.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let item = self.storage[self.read_pos].take();
        debug_assert_occupied_read!(item.is_some(), self.read_pos);
        self.read_pos = (self.read_pos + 1) & self.mask();
        debug_assert_masked_cursor!("read", self.read_pos, self.capacity());
        item
    }

    // ---------------------------------------------------------------------
    // BATCH OPERATIONS
    // ---------------------------------------------------------------------
    //
    // Batches are plain per-item loops, not reservations: each item lands or
    // fails individually, and the first failure stops the batch. A caller
    // observing the buffer between iterations sees the partial state.
    // ---------------------------------------------------------------------

    /// Pushes clones of `items` in order, stopping at the first rejection.
    ///
    /// Returns the number of items actually written; the remainder of the
    /// slice is untouched. A return value smaller than `items.len()` means
    /// the buffer is full.
    pub fn push_batch(&mut self, items: &[T]) -> usize
    where
        T: Clone,
    {
        let mut written = 0;
        for item in items {
            if !self.push(item.clone()) {
                break;
            }
            written += 1;
        }
        written
    }

    /// Pops items into `out` in FIFO order, stopping when the buffer runs
    /// empty or `out` is exhausted.
    ///
    /// Returns the number of slots of `out` actually filled; slots beyond
    /// that count keep their previous values.
    pub fn pop_batch(&mut self, out: &mut [T]) -> usize {
        let mut read = 0;
        for slot in out.iter_mut() {
            match self.pop() {
                Some(item) => {
                    *slot = item;
                    read += 1;
                }
                None => break,
            }
        }
        read
    }

    // ---------------------------------------------------------------------
    // LIFECYCLE
    // ---------------------------------------------------------------------

    /// Discards all stored elements and resets both cursors to zero.
    ///
    /// Each occupied slot is vacated, dropping the buffer's own stake in the
    /// value. Callers holding external lifetime accounting against stored
    /// items must settle it before or during the clear - the buffer does not
    /// notify anyone about what it discards. Drain via [`pop`](Self::pop) if
    /// per-item release is required.
    pub fn clear(&mut self) {
        self.read_pos = 0;
        self.write_pos = 0;
        for slot in self.storage.iter_mut() {
            *slot = None;
        }
    }
}

impl<T> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Elements are opaque; render structure only.
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .field("read_pos", &self.read_pos)
            .field("write_pos", &self.write_pos)
            .finish()
    }
}
