//! seqring - Fixed-Capacity Circular FIFO Queue
//!
//! A bounded FIFO queue over a power-of-two slot array, with two cursors
//! wrapped by a bitmask. The buffer stores opaque handles: it never inspects,
//! clones, or otherwise interprets its elements, and any external lifetime
//! accounting attached to them (reference counts, arena indices) is the
//! caller's business.
//!
//! # Key Properties
//!
//! - Capacity rounds up to a power of two; indexing is `cursor & mask`
//! - At most `capacity - 1` live elements (one slot disambiguates full/empty)
//! - Reject-on-full `push`, `None`-on-empty `pop` - conditions as data, never
//!   panics
//! - Batch push/pop that stop at the first rejection and report the count
//! - Strictly sequential: `&mut self` everywhere, no atomics, no blocking
//!
//! # Example
//!
//! ```
//! use seqring::RingBuffer;
//!
//! let mut ring = RingBuffer::with_capacity(8).unwrap();
//!
//! assert!(ring.push("a"));
//! assert!(ring.push("b"));
//!
//! assert_eq!(ring.pop(), Some("a"));
//! assert_eq!(ring.pop(), Some("b"));
//! assert_eq!(ring.pop(), None); // empty, not an error
//! ```

mod config;
mod error;
mod invariants;
mod ring;

pub use config::Config;
pub use error::RingError;
pub use ring::RingBuffer;
