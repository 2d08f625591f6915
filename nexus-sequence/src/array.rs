//! Contiguous growable array.
//!
//! Elements live in a boxed slice of `Option<T>` slots. Slots `[0, len)` hold
//! live elements and every slot past `len` is `None`, so a removed value is
//! never kept alive by the buffer.
//!
//! # Growth
//!
//! A full array grows by half its capacity on the next insert (see
//! [`capacity::grow`]). The new buffer is allocated, live elements are moved
//! across, and the old buffer is dropped.
//!
//! # Index Ranges
//!
//! [`add`](GrowableArray::add) only accepts `index < len`: inserting at the
//! current end goes through [`add_last`](GrowableArray::add_last). As a
//! consequence [`add_first`](GrowableArray::add_first) fails on an empty array.
//!
//! # Example
//!
//! ```
//! use nexus_sequence::GrowableArray;
//!
//! let mut array = GrowableArray::with_capacity(3).unwrap();
//! for i in 1..=4 {
//!     array.add_last(i).unwrap();
//! }
//!
//! assert_eq!(array.len(), 4);
//! assert_eq!(array.capacity(), 4);
//! assert_eq!(array.get_last(), Ok(&4));
//! assert_eq!(array.to_string(), "[1,2,3,4]");
//! ```

use core::fmt;
use core::iter;
use core::slice;

use crate::capacity::{self, DEFAULT_CAPACITY};
use crate::sequence::impl_sequence;
use crate::{Result, SequenceError};

// =============================================================================
// ArrayBuilder
// =============================================================================

/// Builder for [`GrowableArray`].
///
/// Defaults: capacity [`DEFAULT_CAPACITY`], ceiling
/// [`capacity::max_capacity`] for the element type.
///
/// # Example
///
/// ```
/// use nexus_sequence::{ArrayBuilder, GrowableArray, SequenceError};
///
/// let mut array: GrowableArray<u64> = ArrayBuilder::new()
///     .capacity(2)
///     .max_capacity(3)
///     .build()
///     .unwrap();
///
/// array.add_last(1).unwrap();
/// array.add_last(2).unwrap();
/// array.add_last(3).unwrap();
/// assert!(matches!(
///     array.add_last(4),
///     Err(SequenceError::CapacityExceeded { required: 4, max: 3 })
/// ));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ArrayBuilder {
    capacity: Option<usize>,
    max_capacity: Option<usize>,
}

impl ArrayBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial number of slots. Must be > 0.
    pub fn capacity(mut self, slots: usize) -> Self {
        self.capacity = Some(slots);
        self
    }

    /// Ceiling the array may grow to. Must be > 0 and no larger than the
    /// platform ceiling for the element type.
    pub fn max_capacity(mut self, slots: usize) -> Self {
        self.max_capacity = Some(slots);
        self
    }

    /// Builds an empty array.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if the capacity is zero, the
    /// ceiling is zero or above the platform ceiling, the element type is too
    /// large to hold any slots, or the capacity exceeds the ceiling.
    pub fn build<T>(self) -> Result<GrowableArray<T>> {
        let max_capacity = self.resolve_max::<T>()?;
        let capacity = self.capacity.unwrap_or(DEFAULT_CAPACITY);

        if capacity == 0 {
            return Err(SequenceError::InvalidArgument {
                reason: "capacity must be > 0",
            });
        }
        if capacity > max_capacity {
            return Err(SequenceError::InvalidArgument {
                reason: "capacity exceeds max capacity",
            });
        }

        tracing::debug!(capacity, max_capacity, "building growable array");

        Ok(GrowableArray {
            storage: empty_slots(capacity),
            len: 0,
            max_capacity,
        })
    }

    /// Builds an array holding `items` in order.
    ///
    /// The capacity is `items.len()` plus [`DEFAULT_CAPACITY`]; a capacity set
    /// on the builder is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if the padded capacity
    /// overflows or exceeds the ceiling, or the ceiling itself is invalid.
    pub fn build_from<T>(self, items: Vec<T>) -> Result<GrowableArray<T>> {
        let max_capacity = self.resolve_max::<T>()?;
        let len = items.len();
        let capacity = capacity::padded(len, max_capacity)?;

        tracing::debug!(
            capacity,
            max_capacity,
            len,
            "building growable array from items"
        );

        let storage = items
            .into_iter()
            .map(Some)
            .chain(iter::repeat_with(|| None))
            .take(capacity)
            .collect();

        Ok(GrowableArray {
            storage,
            len,
            max_capacity,
        })
    }

    fn resolve_max<T>(&self) -> Result<usize> {
        let ceiling = capacity::max_capacity::<T>();
        if ceiling == 0 {
            return Err(SequenceError::InvalidArgument {
                reason: "element type too large",
            });
        }
        match self.max_capacity {
            None => Ok(ceiling),
            Some(0) => Err(SequenceError::InvalidArgument {
                reason: "max capacity must be > 0",
            }),
            Some(max) if max > ceiling => Err(SequenceError::InvalidArgument {
                reason: "max capacity exceeds platform ceiling",
            }),
            Some(max) => Ok(max),
        }
    }
}

// =============================================================================
// GrowableArray
// =============================================================================

/// A contiguous, index-addressable array that grows on demand.
///
/// # Example
///
/// ```
/// use nexus_sequence::GrowableArray;
///
/// let mut array = GrowableArray::from_vec(vec![1, 2, 3, 4, 5]).unwrap();
/// assert_eq!(array.capacity(), 15);
///
/// assert_eq!(array.remove(1), Ok(2));
/// assert_eq!(array.update(0, 10), Ok(1));
/// assert_eq!(array.to_string(), "[10,3,4,5]");
/// ```
pub struct GrowableArray<T> {
    /// Backing slots; its length is the capacity.
    storage: Box<[Option<T>]>,
    len: usize,
    max_capacity: usize,
}

impl<T> GrowableArray<T> {
    /// Creates an empty array with [`DEFAULT_CAPACITY`] slots.
    ///
    /// # Panics
    ///
    /// Panics if `DEFAULT_CAPACITY` slots of `T` do not fit in memory. Use
    /// [`ArrayBuilder`] to get an error instead.
    pub fn new() -> Self {
        Self {
            storage: empty_slots(DEFAULT_CAPACITY),
            len: 0,
            max_capacity: capacity::max_capacity::<T>(),
        }
    }

    /// Creates an empty array with `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if `capacity` is zero or
    /// above the platform ceiling.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        ArrayBuilder::default().capacity(capacity).build()
    }

    /// Creates an array holding `items` in order, with
    /// [`DEFAULT_CAPACITY`] spare slots.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if the padded capacity would
    /// overflow the platform ceiling.
    pub fn from_vec(items: Vec<T>) -> Result<Self> {
        ArrayBuilder::default().build_from(items)
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the ceiling this array may grow to.
    #[inline]
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    // ========================================================================
    // Insert
    // ========================================================================

    /// Inserts `item` at the front.
    ///
    /// Same as `add(0, item)`, so this fails on an empty array.
    ///
    /// # Errors
    ///
    /// See [`add`](Self::add).
    #[inline]
    pub fn add_first(&mut self, item: T) -> Result<()> {
        self.add(0, item)
    }

    /// Appends `item`, growing the buffer if it is full.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::CapacityExceeded`] if the array is at its
    /// ceiling.
    pub fn add_last(&mut self, item: T) -> Result<()> {
        self.reserve_one()?;
        self.storage[self.len] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Inserts `item` at `index`, shifting `[index, len)` one slot right.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] unless `index < len`, and
    /// [`SequenceError::CapacityExceeded`] if the array is at its ceiling.
    pub fn add(&mut self, index: usize, item: T) -> Result<()> {
        self.check_index(index)?;
        self.reserve_one()?;

        // The empty slot at `len` rotates down to `index`.
        self.storage[index..=self.len].rotate_right(1);
        self.storage[index] = Some(item);
        self.len += 1;
        Ok(())
    }

    // ========================================================================
    // Remove
    // ========================================================================

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidState`] if the array is empty.
    #[inline]
    pub fn remove_first(&mut self) -> Result<T> {
        self.check_not_empty("remove_first")?;
        self.remove(0)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidState`] if the array is empty.
    pub fn remove_last(&mut self) -> Result<T> {
        self.check_not_empty("remove_last")?;
        let item = self.take_slot(self.len - 1)?;
        self.len -= 1;
        Ok(item)
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] unless `index < len`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;

        let item = self.take_slot(index)?;
        // The now-empty slot rotates up to `len - 1`.
        self.storage[index..self.len].rotate_left(1);
        self.len -= 1;
        Ok(item)
    }

    /// Removes all elements, keeping the capacity.
    pub fn clear(&mut self) {
        tracing::trace!(len = self.len, "clearing growable array");
        for slot in &mut self.storage[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    // ========================================================================
    // Update
    // ========================================================================

    /// Replaces the first element, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidState`] if the array is empty.
    #[inline]
    pub fn update_first(&mut self, item: T) -> Result<T> {
        self.check_not_empty("update_first")?;
        self.update(0, item)
    }

    /// Replaces the last element, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidState`] if the array is empty.
    #[inline]
    pub fn update_last(&mut self, item: T) -> Result<T> {
        self.check_not_empty("update_last")?;
        self.update(self.len - 1, item)
    }

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] unless `index < len`.
    pub fn update(&mut self, index: usize, item: T) -> Result<T> {
        self.check_index(index)?;
        let len = self.len;
        self.storage[index]
            .replace(item)
            .ok_or(SequenceError::IndexOutOfRange { index, len })
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidState`] if the array is empty.
    #[inline]
    pub fn get_first(&self) -> Result<&T> {
        self.check_not_empty("get_first")?;
        self.get(0)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidState`] if the array is empty.
    #[inline]
    pub fn get_last(&self) -> Result<&T> {
        self.check_not_empty("get_last")?;
        self.get(self.len - 1)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] unless `index < len`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        self.storage[index]
            .as_ref()
            .ok_or(SequenceError::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    /// Returns an iterator over the elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.storage[..self.len].iter(),
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(SequenceError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    #[inline]
    fn check_not_empty(&self, op: &'static str) -> Result<()> {
        if self.is_empty() {
            Err(SequenceError::InvalidState { op })
        } else {
            Ok(())
        }
    }

    fn take_slot(&mut self, index: usize) -> Result<T> {
        let len = self.len;
        self.storage[index]
            .take()
            .ok_or(SequenceError::IndexOutOfRange { index, len })
    }

    /// Makes sure one more element fits, growing if every slot is taken.
    fn reserve_one(&mut self) -> Result<()> {
        let capacity = self.capacity();
        if self.len < capacity {
            return Ok(());
        }

        let min_capacity = self
            .len
            .checked_add(1)
            .ok_or(SequenceError::CapacityExceeded {
                required: usize::MAX,
                max: self.max_capacity,
            })?;
        let grown = capacity::grow(capacity, min_capacity, self.max_capacity)?;

        tracing::trace!(
            from = capacity,
            to = grown,
            len = self.len,
            "growing backing storage"
        );

        let mut storage = empty_slots(grown);
        for (dst, src) in storage.iter_mut().zip(&mut self.storage[..self.len]) {
            *dst = src.take();
        }
        self.storage = storage;
        Ok(())
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(capacity).collect()
}

impl_sequence!(GrowableArray);

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TryFrom<Vec<T>> for GrowableArray<T> {
    type Error = SequenceError;

    fn try_from(items: Vec<T>) -> Result<Self> {
        Self::from_vec(items)
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            len: self.len,
            max_capacity: self.max_capacity,
        }
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders as `[e1,e2,...,en]`, or `[]` when empty.
impl<T: fmt::Display> fmt::Display for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over references to the elements of a [`GrowableArray`].
///
/// Walks the occupied prefix of the backing slots, so the length is exact.
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().and_then(Option::as_ref)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> GrowableArray<u64> {
        GrowableArray::from_vec(vec![1, 2, 3, 4, 5]).unwrap()
    }

    fn values(array: &GrowableArray<u64>) -> Vec<u64> {
        array.iter().copied().collect()
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn new_is_empty() {
        let array: GrowableArray<u64> = GrowableArray::new();
        assert!(array.is_empty());
        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn with_capacity() {
        let array: GrowableArray<String> = GrowableArray::with_capacity(5).unwrap();
        assert!(array.is_empty());
        assert_eq!(array.capacity(), 5);
    }

    #[test]
    fn zero_capacity_rejected() {
        let result: Result<GrowableArray<u64>> = GrowableArray::with_capacity(0);
        assert!(matches!(
            result,
            Err(SequenceError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn from_vec_pads_capacity() {
        let array = populated();
        assert_eq!(array.len(), 5);
        assert_eq!(array.capacity(), 5 + DEFAULT_CAPACITY);
        assert_eq!(array.get_first(), Ok(&1));
        assert_eq!(array.get_last(), Ok(&5));
        assert_eq!(values(&array), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn from_vec_empty() {
        let array: GrowableArray<u64> = GrowableArray::try_from(Vec::new()).unwrap();
        assert!(array.is_empty());
        assert_eq!(array.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn builder_rejects_invalid_config() {
        let zero_max: Result<GrowableArray<u64>> = ArrayBuilder::default().max_capacity(0).build();
        assert!(matches!(
            zero_max,
            Err(SequenceError::InvalidArgument { .. })
        ));

        let above_max: Result<GrowableArray<u64>> = ArrayBuilder::default()
            .capacity(10)
            .max_capacity(5)
            .build();
        assert!(matches!(
            above_max,
            Err(SequenceError::InvalidArgument { .. })
        ));

        let above_platform: Result<GrowableArray<u64>> = ArrayBuilder::default()
            .max_capacity(usize::MAX)
            .build();
        assert!(matches!(
            above_platform,
            Err(SequenceError::InvalidArgument { .. })
        ));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn builder_rejects_oversized_element() {
        type Huge = [u8; (1 << 60) + 64];

        assert_eq!(
            ArrayBuilder::new().resolve_max::<Huge>(),
            Err(SequenceError::InvalidArgument {
                reason: "element type too large"
            })
        );
        assert!(ArrayBuilder::new().resolve_max::<u64>().is_ok());
    }

    #[test]
    fn builder_from_items_over_ceiling() {
        let result = ArrayBuilder::default()
            .max_capacity(12)
            .build_from(vec![1u64, 2, 3]);
        assert!(matches!(
            result,
            Err(SequenceError::InvalidArgument { .. })
        ));

        let array = ArrayBuilder::default()
            .max_capacity(13)
            .build_from(vec![1u64, 2, 3])
            .unwrap();
        assert_eq!(array.capacity(), 13);
        assert_eq!(array.max_capacity(), 13);
    }

    // =========================================================================
    // Insert
    // =========================================================================

    #[test]
    fn add_operations() {
        let mut array: GrowableArray<u64> = GrowableArray::new();

        array.add_last(10).unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array.get_last(), Ok(&10));

        array.add_first(5).unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array.get_first(), Ok(&5));

        array.add(1, 7).unwrap();
        assert_eq!(array.len(), 3);
        assert_eq!(array.get(1), Ok(&7));
        assert_eq!(values(&array), vec![5, 7, 10]);
    }

    #[test]
    fn add_at_len_rejected() {
        let mut array = populated();
        assert_eq!(
            array.add(5, 100),
            Err(SequenceError::IndexOutOfRange { index: 5, len: 5 })
        );
        assert_eq!(values(&array), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn add_first_on_empty_rejected() {
        let mut array: GrowableArray<u64> = GrowableArray::new();
        assert_eq!(
            array.add_first(1),
            Err(SequenceError::IndexOutOfRange { index: 0, len: 0 })
        );
        assert!(array.is_empty());
    }

    #[test]
    fn add_when_full_grows() {
        let mut array = GrowableArray::with_capacity(3).unwrap();
        array.add_last(1u64).unwrap();
        array.add_last(3).unwrap();
        array.add_last(4).unwrap();

        array.add(1, 2).unwrap();
        assert_eq!(array.capacity(), 4);
        assert_eq!(values(&array), vec![1, 2, 3, 4]);
    }

    // =========================================================================
    // Growth
    // =========================================================================

    #[test]
    fn growth_from_three() {
        let mut array = GrowableArray::with_capacity(3).unwrap();
        for i in 1..=4u64 {
            array.add_last(i).unwrap();
        }

        assert_eq!(array.len(), 4);
        assert_eq!(array.capacity(), 4);
        assert_eq!(array.get_last(), Ok(&4));
    }

    #[test]
    fn growth_sequence_from_default() {
        let mut array = GrowableArray::new();
        let mut capacities = vec![array.capacity()];

        for i in 0..40u64 {
            array.add_last(i).unwrap();
            if *capacities.last().unwrap() != array.capacity() {
                capacities.push(array.capacity());
            }
        }

        assert_eq!(capacities, vec![10, 15, 22, 33, 49]);
        assert_eq!(values(&array), (0..40).collect::<Vec<_>>());
    }

    #[test]
    fn growth_from_one() {
        let mut array = GrowableArray::with_capacity(1).unwrap();
        array.add_last(1u64).unwrap();
        array.add_last(2).unwrap();
        assert_eq!(array.capacity(), 2);
        array.add_last(3).unwrap();
        assert_eq!(array.capacity(), 3);
    }

    #[test]
    fn growth_stops_at_ceiling() {
        let mut array: GrowableArray<u64> = ArrayBuilder::default()
            .capacity(4)
            .max_capacity(5)
            .build()
            .unwrap();

        for i in 0..5 {
            array.add_last(i).unwrap();
        }
        assert_eq!(array.capacity(), 5);

        assert_eq!(
            array.add_last(5),
            Err(SequenceError::CapacityExceeded {
                required: 6,
                max: 5
            })
        );
        assert_eq!(
            array.add(0, 5),
            Err(SequenceError::CapacityExceeded {
                required: 6,
                max: 5
            })
        );
        assert_eq!(values(&array), vec![0, 1, 2, 3, 4]);
    }

    // =========================================================================
    // Remove
    // =========================================================================

    #[test]
    fn remove_operations() {
        let mut array = populated();

        assert_eq!(array.remove_last(), Ok(5));
        assert_eq!(array.len(), 4);
        assert_eq!(array.get_last(), Ok(&4));

        assert_eq!(array.remove_first(), Ok(1));
        assert_eq!(array.len(), 3);
        assert_eq!(array.get_first(), Ok(&2));

        assert_eq!(array.remove(1), Ok(3));
        assert_eq!(array.len(), 2);
        assert_eq!(values(&array), vec![2, 4]);

        assert_eq!(
            array.remove(2),
            Err(SequenceError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn remove_clears_vacated_slot() {
        let mut array = populated();
        array.remove(0).unwrap();
        array.remove_last().unwrap();

        assert!(array.storage[array.len()..].iter().all(Option::is_none));
    }

    #[test]
    fn remove_from_empty() {
        let mut array: GrowableArray<u64> = GrowableArray::new();
        assert_eq!(
            array.remove_last(),
            Err(SequenceError::InvalidState { op: "remove_last" })
        );
        assert_eq!(
            array.remove_first(),
            Err(SequenceError::InvalidState { op: "remove_first" })
        );
    }

    #[test]
    fn removed_item_is_handed_back() {
        use std::rc::Rc;

        let item = Rc::new(7u64);
        let mut array = GrowableArray::new();
        array.add_last(Rc::clone(&item)).unwrap();
        assert_eq!(Rc::strong_count(&item), 2);

        let removed = array.remove_last().unwrap();
        assert_eq!(Rc::strong_count(&item), 2);
        drop(removed);
        assert_eq!(Rc::strong_count(&item), 1);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut array = populated();
        array.clear();

        assert!(array.is_empty());
        assert_eq!(array.capacity(), 15);
        assert_eq!(array.to_string(), "[]");

        array.add_last(9).unwrap();
        assert_eq!(values(&array), vec![9]);
    }

    // =========================================================================
    // Update / Access
    // =========================================================================

    #[test]
    fn update_operations() {
        let mut array = populated();

        assert_eq!(array.update(2, 30), Ok(3));
        assert_eq!(array.get(2), Ok(&30));

        assert_eq!(array.update_first(10), Ok(1));
        assert_eq!(array.get_first(), Ok(&10));

        assert_eq!(array.update_last(50), Ok(5));
        assert_eq!(array.get_last(), Ok(&50));

        assert_eq!(
            array.update(5, 100),
            Err(SequenceError::IndexOutOfRange { index: 5, len: 5 })
        );
    }

    #[test]
    fn get_operations() {
        let array = populated();

        assert_eq!(array.get(2), Ok(&3));
        assert_eq!(array.get_first(), Ok(&1));
        assert_eq!(array.get_last(), Ok(&5));
        assert_eq!(
            array.get(5),
            Err(SequenceError::IndexOutOfRange { index: 5, len: 5 })
        );
    }

    #[test]
    fn empty_access() {
        let mut array: GrowableArray<u64> = GrowableArray::new();
        assert!(matches!(
            array.get_first(),
            Err(SequenceError::InvalidState { .. })
        ));
        assert!(matches!(
            array.get_last(),
            Err(SequenceError::InvalidState { .. })
        ));
        assert!(matches!(
            array.update_first(1),
            Err(SequenceError::InvalidState { .. })
        ));
        assert!(matches!(
            array.update_last(1),
            Err(SequenceError::InvalidState { .. })
        ));
    }

    // =========================================================================
    // Traits
    // =========================================================================

    #[test]
    fn display_and_debug() {
        let array = populated();
        assert_eq!(array.to_string(), "[1,2,3,4,5]");
        assert_eq!(format!("{array:?}"), "[1, 2, 3, 4, 5]");

        let empty: GrowableArray<u64> = GrowableArray::new();
        assert_eq!(empty.to_string(), "[]");
    }

    #[test]
    fn iter_rev() {
        let array = populated();
        let values: Vec<_> = array.iter().rev().copied().collect();
        assert_eq!(values, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn iter_is_exact() {
        let array = GrowableArray::from_vec(vec![1, 2, 3]).unwrap();
        assert!(array.capacity() > array.len());

        let mut iter = array.iter();
        assert_eq!(iter.size_hint(), (3, Some(3)));
        assert_eq!(iter.len(), 3);

        iter.next();
        iter.next_back();
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn clone_and_eq_ignore_capacity() {
        let array = populated();
        let cloned = array.clone();
        assert_eq!(array, cloned);

        let mut other = GrowableArray::with_capacity(5).unwrap();
        for i in 1..=5 {
            other.add_last(i).unwrap();
        }
        assert_ne!(array.capacity(), other.capacity());
        assert_eq!(array, other);
    }
}
