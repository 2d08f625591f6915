//! Shared vocabulary of the index-addressable containers.

use crate::Result;

/// An ordered, index-addressable sequence of `T`.
///
/// Both [`GrowableArray`](crate::GrowableArray) and
/// [`LinkedSequence`](crate::LinkedSequence) implement this by delegating to
/// their inherent methods, so generic code can drive either one. The accepted
/// index range of [`add`](Sequence::add) differs between implementations; see
/// each type's documentation.
///
/// # Example
///
/// ```
/// use nexus_sequence::{GrowableArray, LinkedSequence, Sequence};
///
/// fn fill<S: Sequence<u32>>(seq: &mut S) {
///     for i in 0..4 {
///         seq.add_last(i).unwrap();
///     }
/// }
///
/// let mut array = GrowableArray::new();
/// let mut linked = LinkedSequence::new();
/// fill(&mut array);
/// fill(&mut linked);
///
/// assert_eq!(Sequence::get(&array, 2), Ok(&2));
/// assert_eq!(Sequence::get(&linked, 2), Ok(&2));
/// ```
pub trait Sequence<T> {
    /// Number of live elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `item` at `index`, shifting later elements back by one.
    fn add(&mut self, index: usize, item: T) -> Result<()>;

    /// Inserts `item` at the front.
    fn add_first(&mut self, item: T) -> Result<()>;

    /// Appends `item` at the back.
    fn add_last(&mut self, item: T) -> Result<()>;

    /// Removes and returns the element at `index`.
    fn remove(&mut self, index: usize) -> Result<T>;

    /// Removes and returns the first element.
    fn remove_first(&mut self) -> Result<T>;

    /// Removes and returns the last element.
    fn remove_last(&mut self) -> Result<T>;

    /// Replaces the element at `index`, returning the previous value.
    fn update(&mut self, index: usize, item: T) -> Result<T>;

    /// Replaces the first element, returning the previous value.
    fn update_first(&mut self, item: T) -> Result<T>;

    /// Replaces the last element, returning the previous value.
    fn update_last(&mut self, item: T) -> Result<T>;

    /// Returns a reference to the element at `index`.
    fn get(&self, index: usize) -> Result<&T>;

    /// Returns a reference to the first element.
    fn get_first(&self) -> Result<&T>;

    /// Returns a reference to the last element.
    fn get_last(&self) -> Result<&T>;
}

/// Implements [`Sequence`] for a type whose inherent methods already match
/// the trait signatures.
macro_rules! impl_sequence {
    ($ty:ident) => {
        impl<T> $crate::Sequence<T> for $ty<T> {
            #[inline]
            fn len(&self) -> usize {
                $ty::len(self)
            }

            #[inline]
            fn add(&mut self, index: usize, item: T) -> $crate::Result<()> {
                $ty::add(self, index, item)
            }

            #[inline]
            fn add_first(&mut self, item: T) -> $crate::Result<()> {
                $ty::add_first(self, item)
            }

            #[inline]
            fn add_last(&mut self, item: T) -> $crate::Result<()> {
                $ty::add_last(self, item)
            }

            #[inline]
            fn remove(&mut self, index: usize) -> $crate::Result<T> {
                $ty::remove(self, index)
            }

            #[inline]
            fn remove_first(&mut self) -> $crate::Result<T> {
                $ty::remove_first(self)
            }

            #[inline]
            fn remove_last(&mut self) -> $crate::Result<T> {
                $ty::remove_last(self)
            }

            #[inline]
            fn update(&mut self, index: usize, item: T) -> $crate::Result<T> {
                $ty::update(self, index, item)
            }

            #[inline]
            fn update_first(&mut self, item: T) -> $crate::Result<T> {
                $ty::update_first(self, item)
            }

            #[inline]
            fn update_last(&mut self, item: T) -> $crate::Result<T> {
                $ty::update_last(self, item)
            }

            #[inline]
            fn get(&self, index: usize) -> $crate::Result<&T> {
                $ty::get(self, index)
            }

            #[inline]
            fn get_first(&self) -> $crate::Result<&T> {
                $ty::get_first(self)
            }

            #[inline]
            fn get_last(&self) -> $crate::Result<&T> {
                $ty::get_last(self)
            }
        }
    };
}

pub(crate) use impl_sequence;
