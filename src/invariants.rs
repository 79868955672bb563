//! Debug assertion macros for ring buffer structural invariants.
//!
//! Only active in debug builds (`debug_assertions`), so there is zero
//! overhead in release builds.

/// Assert that the live element count never reaches capacity.
///
/// With two masked cursors, at most `capacity - 1` slots can be live; a count
/// equal to capacity would make full indistinguishable from empty.
macro_rules! debug_assert_bounded_len {
    ($len:expr, $capacity:expr) => {
        debug_assert!(
            $len < $capacity,
            "live count {} reached capacity {}",
            $len,
            $capacity
        )
    };
}

/// Assert that a cursor stays inside the storage after masking.
macro_rules! debug_assert_masked_cursor {
    ($name:literal, $pos:expr, $capacity:expr) => {
        debug_assert!(
            $pos < $capacity,
            "{} cursor {} escaped capacity {}",
            $name,
            $pos,
            $capacity
        )
    };
}

/// Assert that a pop from a non-empty buffer found an occupied slot.
///
/// Every slot in `[read_pos, write_pos)` must hold a value; a vacant slot
/// there means a cursor update went wrong.
macro_rules! debug_assert_occupied_read {
    ($occupied:expr, $pos:expr) => {
        debug_assert!($occupied, "read cursor {} points at a vacant slot", $pos)
    };
}

pub(crate) use debug_assert_bounded_len;
pub(crate) use debug_assert_masked_cursor;
pub(crate) use debug_assert_occupied_read;
