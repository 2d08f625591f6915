//! Capacity constants and the array growth policy.
//!
//! Growth is geometric: a full array grows by half its current capacity, so
//! the total copy work across `n` appends stays O(n). The result is bounded by
//! a ceiling that keeps the byte size of the backing buffer representable.

use core::mem;

use crate::{Result, SequenceError};

/// Capacity used by [`GrowableArray::new`](crate::GrowableArray::new), and the
/// padding added on top of an initial element sequence.
pub const DEFAULT_CAPACITY: usize = 10;

/// Slots held back from the platform ceiling.
pub const RESERVED_SLOTS: usize = 8;

/// Largest capacity a `GrowableArray<T>` can have on this platform.
///
/// The byte size of `capacity` slots must fit in `isize::MAX`; a few slots are
/// reserved below that so allocation never sits on the exact limit. Returns 0
/// for element types too large to leave any slot above the reserve.
#[inline]
pub const fn max_capacity<T>() -> usize {
    let slot = mem::size_of::<Option<T>>();
    let limit = if slot == 0 {
        isize::MAX as usize
    } else {
        isize::MAX as usize / slot
    };
    limit.saturating_sub(RESERVED_SLOTS)
}

/// Computes the capacity to grow to when `current` slots are full and at
/// least `min_capacity` are needed.
///
/// # Errors
///
/// Returns [`SequenceError::CapacityExceeded`] if `min_capacity > max`.
///
/// # Example
///
/// ```
/// use nexus_sequence::capacity::grow;
///
/// assert_eq!(grow(10, 11, 1000), Ok(15));
/// assert_eq!(grow(3, 4, 1000), Ok(4));
/// assert_eq!(grow(1, 2, 1000), Ok(2));
/// assert_eq!(grow(600, 601, 700), Ok(700));
/// assert!(grow(8, 9, 8).is_err());
/// ```
pub fn grow(current: usize, min_capacity: usize, max: usize) -> Result<usize> {
    if min_capacity > max {
        return Err(SequenceError::CapacityExceeded {
            required: min_capacity,
            max,
        });
    }

    let grown = match current.checked_add(current >> 1) {
        Some(grown) if grown >= min_capacity => grown,
        _ => min_capacity,
    };

    Ok(grown.min(max))
}

/// Capacity for an array seeded with `len` elements: `len` plus
/// [`DEFAULT_CAPACITY`] slots of headroom.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] if the padded capacity overflows
/// or exceeds `max`.
pub fn padded(len: usize, max: usize) -> Result<usize> {
    match len.checked_add(DEFAULT_CAPACITY) {
        Some(capacity) if capacity <= max => Ok(capacity),
        _ => Err(SequenceError::InvalidArgument {
            reason: "initial sequence too large",
        }),
    }
}
