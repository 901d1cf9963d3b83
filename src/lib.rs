//! `BoxVec`: a growable vector built on fixed-capacity owned buffers.
//!
//! `BoxVec` implements the full dynamic-array surface — amortized-O(1)
//! append, random access, insertion and removal at arbitrary positions, and
//! explicit capacity control — on top of [`FixedBuffer`], a move-only handle
//! over a fixed-length block of slots. The growth policy, element shifting,
//! and ownership transfer all live in `BoxVec`; the buffer handle only
//! allocates, swaps, and indexes. `Vec` is never used internally.
//!
//! Slots beyond the logical length hold default-valued placeholders, so the
//! element type must implement `Default` for every operation that creates or
//! vacates slots.
//!
//! ```
//! use boxvec::BoxVec;
//!
//! let mut vec = BoxVec::from([1, 2, 3]);
//! assert_eq!(vec.len(), 3);
//! assert_eq!(vec.capacity(), 3);
//!
//! vec.push_back(4);
//! assert_eq!(vec.as_slice(), &[1, 2, 3, 4]);
//! assert_eq!(vec.capacity(), 6); // max(4, 3 * 2)
//!
//! assert_eq!(vec.remove(1), 2);
//! assert_eq!(vec.as_slice(), &[1, 3, 4]);
//! ```
//!
//! # Growth Policy
//!
//! When an operation needs more room than the current capacity, the buffer
//! is reallocated to `max(needed_size, capacity * 2)` slots and the live
//! elements are moved across. Doubling from capacity 0 yields 0, so the
//! first allocation is exactly the needed size. The trajectory is
//! observable through [`BoxVec::capacity`]:
//!
//! ```
//! use boxvec::BoxVec;
//!
//! let mut vec: BoxVec<u8> = BoxVec::new();
//! vec.push_back(1); // capacity: max(1, 0) = 1
//! vec.push_back(2); // capacity: max(2, 2) = 2
//! vec.push_back(3); // capacity: max(3, 4) = 4
//! assert_eq!(vec.capacity(), 4);
//! ```
//!
//! [`BoxVec::reserve`] grows the buffer to an exact capacity ahead of time,
//! and the [`Reserve`] request constructs an empty vector with a
//! pre-allocated buffer:
//!
//! ```
//! use boxvec::{BoxVec, Reserve};
//!
//! let mut vec: BoxVec<u8> = BoxVec::with_reserve(Reserve(5));
//! assert_eq!((vec.len(), vec.capacity()), (0, 5));
//!
//! for byte in 0..5 {
//!     vec.push_back(byte); // no reallocation
//! }
//! assert_eq!(vec.capacity(), 5);
//! ```
//!
//! # Checked and Unchecked Access
//!
//! Indexing through `vec[i]` is the unchecked fast path: it performs no
//! comparison against the length, and reading a position at or beyond
//! `len()` is a caller error with unspecified results. [`BoxVec::at`] is the
//! checked counterpart, returning a descriptive error instead:
//!
//! ```
//! use boxvec::{BoxVec, BoxVecError};
//!
//! let vec = BoxVec::from([10, 20, 30]);
//! assert_eq!(vec[1], 20);
//! assert_eq!(vec.at(1), Ok(&20));
//! assert_eq!(
//!     vec.at(10),
//!     Err(BoxVecError::IndexOutOfBounds { index: 10, length: 3 })
//! );
//! ```
//!
//! # Copies and Moves
//!
//! Cloning allocates a buffer of exactly the source's length, so copies are
//! never over-provisioned. `clone_from` builds the replacement first and
//! then swaps it in, leaving the destination untouched if cloning fails
//! partway. Moving a `BoxVec` transfers buffer ownership without touching
//! the elements; [`BoxVec::take`] does the same while leaving the source
//! usable, empty, with capacity 0.
//!
//! ```
//! use boxvec::{BoxVec, Reserve};
//!
//! let mut original: BoxVec<u32> = BoxVec::with_reserve(Reserve(10));
//! original.push_back(1);
//! original.push_back(2);
//!
//! let copy = original.clone();
//! assert_eq!(copy, original);
//! assert_eq!(copy.capacity(), 2); // normalized to the length, not 10
//! ```

mod buffer;
mod core;
mod error;
mod iter;

// Re-export public types and traits
pub use crate::core::{BoxVec, Reserve};
pub use buffer::FixedBuffer;
pub use error::BoxVecError;
pub use iter::IntoIter;
