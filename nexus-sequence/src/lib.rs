//! Index-addressable sequence containers.
//!
//! Two containers share one vocabulary of positional operations:
//!
//! ```text
//! GrowableArray<T>   - contiguous Option<T> slots, amortized 1.5x growth
//! LinkedSequence<T>  - forward-owned node chain behind a sentinel head
//! ```
//!
//! Both offer `add*`, `remove*`, `update*` and `get*` by index or at either
//! end, and both implement [`Sequence`] so generic code can drive either one.
//! Every operation validates its arguments before touching the container: a
//! call either applies completely or returns a [`SequenceError`] and leaves
//! the sequence unchanged.
//!
//! # Quick Start
//!
//! ```
//! use nexus_sequence::{GrowableArray, LinkedSequence, SequenceError};
//!
//! let mut array = GrowableArray::from_vec(vec![1, 2, 3]).unwrap();
//! array.add_last(4).unwrap();
//! assert_eq!(array.to_string(), "[1,2,3,4]");
//!
//! let mut linked = LinkedSequence::from_vec(vec![1, 2, 3]);
//! linked.add(3, 4).unwrap();
//! assert_eq!(linked.to_string(), "[1,2,3,4]");
//!
//! assert_eq!(
//!     array.get(4),
//!     Err(SequenceError::IndexOutOfRange { index: 4, len: 4 })
//! );
//! ```
//!
//! # Index Ranges
//!
//! | Operation | `GrowableArray` | `LinkedSequence` |
//! |-----------|-----------------|------------------|
//! | `add(index, _)` | `index < len` | `index <= len` |
//! | `remove`/`update`/`get` | `index < len` | `index < len` |
//! | `*_first`/`*_last` on empty | `InvalidState` | `InvalidState` |
//!
//! The array cannot insert at its current end through `add`; use `add_last`.
//!
//! # Costs
//!
//! | Operation | `GrowableArray` | `LinkedSequence` |
//! |-----------|-----------------|------------------|
//! | append | O(1) amortized | O(len) |
//! | insert/remove at `i` | O(len - i) | O(i) |
//! | get/update at `i` | O(1) | O(i) |
//!
//! # Threading
//!
//! Neither container is internally synchronized. Share them across threads
//! only behind external synchronization.

#![warn(missing_docs)]

pub mod array;
pub mod capacity;
pub mod error;
pub mod linked;
pub mod sequence;

pub use array::{ArrayBuilder, GrowableArray};
pub use capacity::DEFAULT_CAPACITY;
pub use error::{Result, SequenceError};
pub use linked::LinkedSequence;
pub use sequence::Sequence;
