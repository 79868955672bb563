/// Configuration for a [`RingBuffer`](crate::RingBuffer).
///
/// Capacity is always a power of two so slot indices can be derived from the
/// cursors with a single bitwise AND instead of a modulo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    capacity: usize,
}

impl Config {
    /// Creates a configuration for the given requested capacity.
    ///
    /// A request that is not a power of two is rounded up to the next power
    /// of two; a request of `0` yields a capacity of `1`. Rejecting zero
    /// outright is left to the caller embedding the buffer.
    pub fn new(requested: usize) -> Self {
        Self {
            capacity: requested.max(1).next_power_of_two(),
        }
    }

    /// Returns the slot count of the backing storage.
    ///
    /// Note the buffer holds at most `capacity() - 1` live elements; one slot
    /// is sacrificed to distinguish full from empty with two cursors.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the mask for cursor wrapping.
    #[inline]
    pub const fn mask(&self) -> usize {
        self.capacity - 1
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { capacity: 1024 }
    }
}
