//! Error types for ring buffer construction.

use thiserror::Error;

/// Errors that can occur when building a [`RingBuffer`](crate::RingBuffer).
///
/// Full-buffer pushes and empty-buffer pops are ordinary data results
/// (`false` / `None`), not errors; allocation failure at construction is the
/// only fault this crate reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingError {
    /// The backing slot array could not be allocated.
    #[error("failed to allocate ring storage for {capacity} slots")]
    AllocationFailed {
        /// The (already rounded) slot count that was requested.
        capacity: usize,
    },
}
