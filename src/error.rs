use thiserror::Error;

/// Error types for `BoxVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum BoxVecError {
    /// Index is beyond the current vector length
    #[error("Index out of bounds: index {index} is beyond vector length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
}
