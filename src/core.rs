use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};
use std::slice;

use crate::buffer::FixedBuffer;
use crate::error::BoxVecError;
use crate::iter::IntoIter;

/// A capacity-reservation request.
///
/// Carries only the desired capacity; it exists so that "reserve capacity
/// without creating elements" is a distinct construction form from
/// "create `n` elements":
///
/// ```
/// use boxvec::{BoxVec, Reserve};
///
/// let reserved: BoxVec<u32> = BoxVec::with_reserve(Reserve(5));
/// assert_eq!(reserved.len(), 0);
/// assert_eq!(reserved.capacity(), 5);
///
/// let sized: BoxVec<u32> = BoxVec::with_size(5);
/// assert_eq!(sized.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reserve(pub usize);

/// A growable vector built on a fixed-capacity owned buffer.
///
/// `BoxVec` owns exactly one [`FixedBuffer`] plus a logical length. Slots at
/// positions `[0, len)` hold live elements; slots at `[len, capacity)` hold
/// default-valued placeholders. The capacity always equals the buffer length.
///
/// Growth uses a doubling policy with an explicit floor: when an operation
/// needs more room than the current capacity, the new capacity is
/// `max(needed, capacity * 2)`. From capacity 0 the doubling term is 0, so
/// the needed size itself becomes the capacity.
pub struct BoxVec<T> {
    pub(crate) items: FixedBuffer<T>,
    pub(crate) size: usize,
}

impl<T> Default for BoxVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BoxVec<T> {
    /// Creates an empty vector with no allocation. Length and capacity are 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: FixedBuffer::default(),
            size: 0,
        }
    }

    /// Returns the number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of slots in the owned buffer.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Returns a reference to the element at `index`, checked against the
    /// current length.
    ///
    /// Returns `None` if `index >= len()`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, checked
    /// against the current length.
    ///
    /// Returns `None` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `BoxVecError::IndexOutOfBounds` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, BoxVecError> {
        self.as_slice().get(index).ok_or(BoxVecError::IndexOutOfBounds {
            index,
            length: self.size,
        })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `BoxVecError::IndexOutOfBounds` if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, BoxVecError> {
        let length = self.size;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(BoxVecError::IndexOutOfBounds { index, length })
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the live elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items.as_slice()[..self.size]
    }

    /// Returns the live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items.as_mut_slice()[..self.size]
    }

    /// Returns an iterator over the live elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a mutable iterator over the live elements.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Removes the last element by decrementing the length. Does nothing on
    /// an empty vector.
    ///
    /// The vacated slot keeps its value until a later operation overwrites
    /// it; no element is dropped here.
    pub fn pop_back(&mut self) {
        if self.size > 0 {
            self.size -= 1;
        }
    }

    /// Sets the length to 0. The buffer is retained, so the capacity is
    /// unchanged and no deallocation occurs.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Exchanges contents with `other` in O(1): the buffer handles and the
    /// lengths swap, the elements themselves do not move.
    pub fn swap(&mut self, other: &mut Self) {
        self.items.swap(&mut other.items);
        mem::swap(&mut self.size, &mut other.size);
    }

    /// Moves the contents out, leaving `self` empty with capacity 0.
    ///
    /// ```
    /// use boxvec::BoxVec;
    ///
    /// let mut source = BoxVec::from([1, 2, 3]);
    /// let moved = source.take();
    /// assert_eq!(moved.as_slice(), &[1, 2, 3]);
    /// assert_eq!(source.len(), 0);
    /// assert_eq!(source.capacity(), 0);
    /// ```
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }
}

impl<T: Default> BoxVec<T> {
    /// Creates a vector of `size` default-valued elements. Length and
    /// capacity both equal `size`.
    #[must_use]
    pub fn with_size(size: usize) -> Self {
        Self {
            items: FixedBuffer::allocate(size),
            size,
        }
    }

    /// Creates a vector of `size` clones of `value`. Length and capacity
    /// both equal `size`.
    #[must_use]
    pub fn filled(size: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut vec = Self::with_size(size);
        for slot in vec.as_mut_slice() {
            *slot = value.clone();
        }
        vec
    }

    /// Creates an empty vector whose buffer holds `reserve.0` slots.
    #[must_use]
    pub fn with_reserve(reserve: Reserve) -> Self {
        Self {
            items: FixedBuffer::allocate(reserve.0),
            size: 0,
        }
    }

    /// Creates an empty vector with at least `capacity` slots. Equivalent to
    /// `with_reserve(Reserve(capacity))`.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_reserve(Reserve(capacity))
    }

    /// Sets the length to `new_size`.
    ///
    /// Shrinking only moves the length; the buffer is untouched. Growing
    /// within capacity resets the newly exposed slots to `T::default()`.
    /// Growing beyond capacity reallocates to `max(new_size, capacity * 2)`
    /// slots and moves the live elements across, invalidating any borrowed
    /// slices.
    pub fn resize(&mut self, new_size: usize) {
        if new_size <= self.size {
            self.size = new_size;
        } else if new_size <= self.capacity() {
            for slot in &mut self.items.as_mut_slice()[self.size..new_size] {
                *slot = T::default();
            }
            self.size = new_size;
        } else {
            let new_capacity = usize::max(new_size, self.capacity() * 2);
            let mut replacement = FixedBuffer::allocate(new_capacity);
            replacement.as_mut_slice()[..self.size]
                .swap_with_slice(&mut self.items.as_mut_slice()[..self.size]);
            self.items.swap(&mut replacement);
            self.size = new_size;
        }
    }

    /// Grows the buffer to exactly `new_capacity` slots, moving the live
    /// elements across. Does nothing if `new_capacity <= capacity()`; the
    /// length never changes.
    ///
    /// ```
    /// use boxvec::BoxVec;
    ///
    /// let mut vec: BoxVec<u8> = BoxVec::new();
    /// vec.reserve(5);
    /// assert_eq!(vec.capacity(), 5);
    /// assert_eq!(vec.len(), 0);
    /// ```
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity() {
            return;
        }
        let mut replacement = FixedBuffer::allocate(new_capacity);
        replacement.as_mut_slice()[..self.size]
            .swap_with_slice(&mut self.items.as_mut_slice()[..self.size]);
        self.items.swap(&mut replacement);
    }

    /// Appends an element. Amortized O(1); reallocation follows the doubling
    /// policy of [`resize`](Self::resize).
    pub fn push_back(&mut self, value: T) {
        self.resize(self.size + 1);
        self.items[self.size - 1] = value;
    }

    /// Inserts `value` at `index`, shifting everything from `index` onward
    /// one slot toward the tail. Inserting at `len()` appends. Returns a
    /// reference to the inserted element. O(len).
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        assert!(
            index <= self.size,
            "Insert index {} out of bounds for vector of length {}",
            index,
            self.size
        );
        let old_len = self.size;
        self.resize(old_len + 1);
        // The placeholder exposed at old_len rotates into the gap at index,
        // shifting [index, old_len) tail-first so the overlap is safe.
        self.items.as_mut_slice()[index..=old_len].rotate_right(1);
        self.items[index] = value;
        &mut self.items[index]
    }

    /// Inserts `value` at `index`, returning a reference to it.
    ///
    /// # Errors
    ///
    /// Returns `BoxVecError::IndexOutOfBounds` if `index > len()`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, BoxVecError> {
        if index > self.size {
            return Err(BoxVecError::IndexOutOfBounds {
                index,
                length: self.size,
            });
        }
        Ok(self.insert(index, value))
    }

    /// Removes and returns the element at `index`, shifting everything after
    /// it one slot toward the head. The vacated slot at the tail is reset to
    /// `T::default()`. O(len).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.size,
            "Remove index {} out of bounds for vector of length {}",
            index,
            self.size
        );
        // Rotate the removed element past the logical boundary, then move it
        // out of the placeholder region.
        self.items.as_mut_slice()[index..self.size].rotate_left(1);
        self.size -= 1;
        mem::take(&mut self.items[self.size])
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `BoxVecError::IndexOutOfBounds` if `index >= len()`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, BoxVecError> {
        if index >= self.size {
            return Err(BoxVecError::IndexOutOfBounds {
                index,
                length: self.size,
            });
        }
        Ok(self.remove(index))
    }
}

/// Unchecked element access: the caller must ensure `index < len()`.
///
/// No check against the length is performed. Indexing into the placeholder
/// region `[len, capacity)` yields an unspecified value; indexing at or
/// beyond the capacity panics in the underlying buffer.
impl<T> Index<usize> for BoxVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for BoxVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T: Clone + Default> Clone for BoxVec<T> {
    /// Clones into a buffer of exactly `len()` slots: a clone's capacity
    /// equals its length, regardless of the source's capacity.
    fn clone(&self) -> Self {
        let mut items = FixedBuffer::allocate(self.size);
        for (slot, value) in items.as_mut_slice().iter_mut().zip(self.as_slice()) {
            *slot = value.clone();
        }
        Self {
            items,
            size: self.size,
        }
    }

    /// Copy-and-swap: builds a fully-formed clone first, then exchanges it
    /// with `self`, so `self` is untouched if cloning panics.
    fn clone_from(&mut self, source: &Self) {
        let mut replacement = source.clone();
        mem::swap(self, &mut replacement);
    }
}

impl<T: Default, const N: usize> From<[T; N]> for BoxVec<T> {
    /// Moves the array's elements into a vector with length and capacity `N`.
    fn from(values: [T; N]) -> Self {
        let mut items = FixedBuffer::allocate(N);
        for (slot, value) in items.as_mut_slice().iter_mut().zip(values) {
            *slot = value;
        }
        Self { items, size: N }
    }
}

impl<T: Default> From<Reserve> for BoxVec<T> {
    fn from(reserve: Reserve) -> Self {
        Self::with_reserve(reserve)
    }
}

impl<T: Default> FromIterator<T> for BoxVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T: Default> Extend<T> for BoxVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(self.size.saturating_add(lower));
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: PartialEq> PartialEq for BoxVec<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size {
            return false;
        }
        // Identical backing storage means identical contents.
        if std::ptr::eq(self.as_slice().as_ptr(), other.as_slice().as_ptr()) {
            return true;
        }
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for BoxVec<T> {}

impl<T: PartialOrd> PartialOrd for BoxVec<T> {
    /// Lexicographic comparison of the live element sequences.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for BoxVec<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: fmt::Debug> fmt::Debug for BoxVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for &'a BoxVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut BoxVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Default> IntoIterator for BoxVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
