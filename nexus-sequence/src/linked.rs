//! Singly linked sequence with a sentinel head.
//!
//! Each node exclusively owns its successor, so the chain is strictly forward
//! and acyclic. The sequence keeps a permanent sentinel link in front of the
//! first node; every positional operation walks `index` links from it to reach
//! the predecessor slot, which makes insertion at the front, the middle and the
//! back the same splice.
//!
//! Unlike [`GrowableArray`](crate::GrowableArray), [`add`](LinkedSequence::add)
//! accepts `index == len` and appends.
//!
//! # Example
//!
//! ```
//! use nexus_sequence::LinkedSequence;
//!
//! let mut seq = LinkedSequence::from_vec(vec![1, 2, 3, 4, 5]);
//!
//! assert_eq!(seq.remove(1), Ok(2));
//! assert_eq!(seq.to_string(), "[1,3,4,5]");
//!
//! seq.add(seq.len(), 6).unwrap();
//! assert_eq!(seq.get_last(), Ok(&6));
//! ```

use core::fmt;

use crate::sequence::impl_sequence;
use crate::{Result, SequenceError};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    item: T,
    next: Link<T>,
}

/// A singly linked, index-addressable sequence.
///
/// Access by index is O(index); splicing is O(1) once the position is found.
pub struct LinkedSequence<T> {
    /// Sentinel link. Never holds an item, never counted in `len`.
    head: Link<T>,
    len: usize,
}

impl<T> LinkedSequence<T> {
    /// Creates an empty sequence.
    #[inline]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Creates a sequence holding `items` in order.
    ///
    /// Nodes are built back to front so each one is allocated exactly once.
    pub fn from_vec(items: Vec<T>) -> Self {
        let len = items.len();
        let mut head = None;
        for item in items.into_iter().rev() {
            head = Some(Box::new(Node { item, next: head }));
        }
        Self { head, len }
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    // ========================================================================
    // Insert
    // ========================================================================

    /// Inserts `item` at the front.
    #[inline]
    pub fn add_first(&mut self, item: T) -> Result<()> {
        self.add(0, item)
    }

    /// Appends `item` at the back. O(len).
    #[inline]
    pub fn add_last(&mut self, item: T) -> Result<()> {
        self.add(self.len, item)
    }

    /// Inserts `item` so that it ends up at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] unless `index <= len`.
    pub fn add(&mut self, index: usize, item: T) -> Result<()> {
        if index > self.len {
            return Err(SequenceError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        let link = self.link_mut(index);
        let next = link.take();
        *link = Some(Box::new(Node { item, next }));
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
    /// Returns [`SequenceError::InvalidState`] if the sequence is empty.
    #[inline]
    pub fn remove_first(&mut self) -> Result<T> {
        self.check_not_empty("remove_first")?;
        self.remove(0)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidState`] if the sequence is empty.
    #[inline]
    pub fn remove_last(&mut self) -> Result<T> {
        self.check_not_empty("remove_last")?;
        self.remove(self.len - 1)
    }

    /// Unlinks and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] unless `index < len`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;

        let len = self.len;
        let link = self.link_mut(index);
        let mut node = link
            .take()
            .ok_or(SequenceError::IndexOutOfRange { index, len })?;
        *link = node.next.take();
        self.len -= 1;
        Ok(node.item)
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        tracing::trace!(len = self.len, "clearing linked sequence");
        self.unlink_all();
    }

    // ========================================================================
    // Update
    // ========================================================================

    /// Replaces the first element, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidState`] if the sequence is empty.
    #[inline]
    pub fn update_first(&mut self, item: T) -> Result<T> {
        self.check_not_empty("update_first")?;
        self.update(0, item)
    }

    /// Replaces the last element, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidState`] if the sequence is empty.
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
        let node = self
            .link_mut(index)
            .as_deref_mut()
            .ok_or(SequenceError::IndexOutOfRange { index, len })?;
        Ok(core::mem::replace(&mut node.item, item))
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidState`] if the sequence is empty.
    #[inline]
    pub fn get_first(&self) -> Result<&T> {
        self.check_not_empty("get_first")?;
        self.get(0)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidState`] if the sequence is empty.
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

        self.link(index)
            .as_deref()
            .map(|node| &node.item)
            .ok_or(SequenceError::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    /// Returns an iterator over the elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// The link reached after `steps` hops from the sentinel.
    fn link(&self, steps: usize) -> &Link<T> {
        let mut link = &self.head;
        for _ in 0..steps {
            if let Some(node) = link {
                link = &node.next;
            }
        }
        link
    }

    /// Mutable counterpart of [`link`](Self::link).
    fn link_mut(&mut self, steps: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..steps {
            if let Some(node) = link {
                link = &mut node.next;
            }
        }
        link
    }

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

    /// Drops the chain one node at a time so long sequences don't recurse
    /// through nested `Box` drops.
    fn unlink_all(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }
}

impl_sequence!(LinkedSequence);

impl<T> Drop for LinkedSequence<T> {
    fn drop(&mut self) {
        self.unlink_all();
    }
}

impl<T> Default for LinkedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for LinkedSequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T> FromIterator<T> for LinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Clone> Clone for LinkedSequence<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedSequence<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders as `[e1,e2,...,en]`, or `[]` when empty.
impl<T: fmt::Display> fmt::Display for LinkedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut items = self.iter();
        if let Some(first) = items.next() {
            write!(f, "{first}")?;
            for item in items {
                write!(f, ",{item}")?;
            }
        }
        f.write_str("]")
    }
}

impl<'a, T> IntoIterator for &'a LinkedSequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over references to the elements of a [`LinkedSequence`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
