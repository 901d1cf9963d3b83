use std::mem;

use crate::buffer::FixedBuffer;
use crate::core::BoxVec;

/// Owning iterator over the elements of a `BoxVec`.
///
/// Elements are moved out of the buffer as the iterator advances; each
/// vacated slot is reset to `T::default()`. The buffer itself is released
/// when the iterator is dropped.
#[derive(Debug)]
pub struct IntoIter<T> {
    buffer: FixedBuffer<T>,
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(vec: BoxVec<T>) -> Self {
        let BoxVec { items, size } = vec;
        Self {
            buffer: items,
            front: 0,
            back: size,
        }
    }
}

impl<T: Default> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let value = mem::take(&mut self.buffer[self.front]);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Default> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(mem::take(&mut self.buffer[self.back]))
    }
}

impl<T: Default> ExactSizeIterator for IntoIter<T> {}
