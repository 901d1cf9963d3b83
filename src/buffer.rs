use std::ops::{Index, IndexMut};

/// An exclusive-ownership handle over a fixed-length block of slots.
///
/// `FixedBuffer` is the raw-storage collaborator underneath [`BoxVec`]: it
/// allocates a block of exactly `len` default-valued slots, hands out element
/// references by position, and exchanges ownership with another handle in
/// O(1). It never grows, never shrinks, and is move-only; the block is
/// released when the handle is dropped.
///
/// All growth-policy logic lives in [`BoxVec`], which is implemented against
/// this interface alone.
///
/// [`BoxVec`]: crate::BoxVec
#[derive(Debug)]
pub struct FixedBuffer<T> {
    slots: Box<[T]>,
}

/// An empty handle with no allocation. Not bounded on `T: Default`: no slot
/// is ever created here.
impl<T> Default for FixedBuffer<T> {
    fn default() -> Self {
        Self {
            slots: Box::default(),
        }
    }
}

impl<T> FixedBuffer<T> {
    /// Allocates a buffer of exactly `len` slots, each holding `T::default()`.
    ///
    /// `allocate(0)` performs no heap allocation.
    #[must_use]
    pub fn allocate(len: usize) -> Self
    where
        T: Default,
    {
        Self {
            slots: std::iter::repeat_with(T::default).take(len).collect(),
        }
    }

    /// Returns the number of slots in the block.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Exchanges the owned blocks of `self` and `other` in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.slots, &mut other.slots);
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }
}

impl<T> Index<usize> for FixedBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}

impl<T> IndexMut<usize> for FixedBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }
}
