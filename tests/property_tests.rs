//! Property-based tests checking the ring buffer against a reference model.
//!
//! A `VecDeque` capped at `capacity - 1` elements is an exact model of the
//! buffer's observable behavior: same FIFO order, same reject-on-full policy,
//! same empty sentinel.

use proptest::collection::vec;
use proptest::prelude::*;
use seqring::RingBuffer;
use std::collections::VecDeque;

/// One step of the interleaved workload applied to both implementations.
#[derive(Debug, Clone)]
enum Op {
    Push(u64),
    Pop,
    PushBatch(Vec<u64>),
    PopBatch(usize),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        5 => any::<u64>().prop_map(Op::Push),
        5 => Just(Op::Pop),
        2 => vec(any::<u64>(), 0..20).prop_map(Op::PushBatch),
        2 => (0usize..20).prop_map(Op::PopBatch),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    /// The buffer agrees with the capped VecDeque model on every operation
    /// result and every status query, for any interleaving.
    #[test]
    fn prop_matches_deque_model(
        requested in 1usize..64,
        ops in vec(op_strategy(), 0..200),
    ) {
        let mut ring = RingBuffer::with_capacity(requested).unwrap();
        let live_max = ring.capacity() - 1;
        let mut model: VecDeque<u64> = VecDeque::new();

        for op in ops {
            match op {
                Op::Push(item) => {
                    let accepted = ring.push(item);
                    prop_assert_eq!(accepted, model.len() < live_max);
                    if accepted {
                        model.push_back(item);
                    }
                }
                Op::Pop => {
                    prop_assert_eq!(ring.pop(), model.pop_front());
                }
                Op::PushBatch(items) => {
                    let written = ring.push_batch(&items);
                    let room = live_max - model.len();
                    prop_assert_eq!(written, items.len().min(room));
                    model.extend(&items[..written]);
                }
                Op::PopBatch(n) => {
                    let mut out = vec![0u64; n];
                    let read = ring.pop_batch(&mut out);
                    prop_assert_eq!(read, n.min(model.len()));
                    for slot in out.iter().take(read) {
                        prop_assert_eq!(Some(*slot), model.pop_front());
                    }
                }
                Op::Clear => {
                    ring.clear();
                    model.clear();
                }
            }

            // Status queries agree after every step.
            prop_assert_eq!(ring.len(), model.len());
            prop_assert_eq!(ring.is_empty(), model.is_empty());
            prop_assert_eq!(ring.is_full(), model.len() == live_max);
        }
    }

    /// Capacity is a power of two no smaller than the request, for any
    /// request.
    #[test]
    fn prop_capacity_rounding(requested in 1usize..100_000) {
        let ring = RingBuffer::<u8>::with_capacity(requested).unwrap();
        prop_assert!(ring.capacity().is_power_of_two());
        prop_assert!(ring.capacity() >= requested);
        // Rounding is tight: half the capacity would not fit the request.
        prop_assert!(ring.capacity() / 2 < requested);
    }

    /// Live count never reaches capacity, no matter the workload.
    #[test]
    fn prop_bounded_len(
        requested in 1usize..32,
        ops in vec(op_strategy(), 0..200),
    ) {
        let mut ring = RingBuffer::with_capacity(requested).unwrap();
        let capacity = ring.capacity();

        for op in ops {
            match op {
                Op::Push(item) => { ring.push(item); }
                Op::Pop => { ring.pop(); }
                Op::PushBatch(items) => { ring.push_batch(&items); }
                Op::PopBatch(n) => {
                    let mut out = vec![0u64; n];
                    ring.pop_batch(&mut out);
                }
                Op::Clear => ring.clear(),
            }
            prop_assert!(ring.len() < capacity,
                "len {} reached capacity {}", ring.len(), capacity);
        }
    }

    /// Fill/drain cycles far past the cursor width of the storage preserve
    /// FIFO order and the full/empty reports.
    #[test]
    fn prop_wraparound_round_trip(cycles in 1usize..200) {
        let mut ring = RingBuffer::with_capacity(8).unwrap();
        let live = ring.capacity() - 1;
        let mut sequence = 0u64;
        let mut expected = 0u64;

        for _ in 0..cycles {
            for _ in 0..live {
                prop_assert!(ring.push(sequence));
                sequence += 1;
            }
            prop_assert!(ring.is_full());
            prop_assert!(!ring.push(u64::MAX));

            for _ in 0..live {
                prop_assert_eq!(ring.pop(), Some(expected));
                expected += 1;
            }
            prop_assert!(ring.is_empty());
            prop_assert_eq!(ring.pop(), None);
        }
    }
}
