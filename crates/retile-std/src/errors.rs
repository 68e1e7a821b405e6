use alloc::vec::Vec;
use thiserror::Error;

use crate::DType;

/// An error raised while turning a requested shape into a valid [Shape](crate::Shape).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// A dimension of the requested shape is negative.
    #[error("Negative dimension {size} at axis {axis} is not a valid shape size")]
    NegativeDim {
        /// The axis holding the negative size.
        axis: usize,
        /// The negative size.
        size: i64,
    },
    /// A dimension of the requested shape does not fit in `usize`.
    #[error("Dimension {size} at axis {axis} does not fit in usize")]
    DimOverflow {
        /// The axis holding the size.
        axis: usize,
        /// The requested size.
        size: i128,
    },
    /// The number of elements described by the shape does not fit in `usize`.
    #[error("Shape {dims:?} has too many elements")]
    Overflow {
        /// The requested dimensions.
        dims: Vec<usize>,
    },
}

/// An error raised while reading raw [TensorData](crate::TensorData).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// The data is stored with a different element type than the one requested.
    #[error("Data type mismatch (expected {expected}, found {found})")]
    TypeMismatch {
        /// The requested data type.
        expected: DType,
        /// The stored data type.
        found: DType,
    },
    /// The bytes don't form valid elements of the stored type.
    #[error("Invalid bit pattern for the stored data type: {0}")]
    CastError(bytemuck::checked::CheckedCastError),
    /// The number of bytes required by the shape and data type doesn't fit in `usize`.
    #[error("Shape {shape:?} requires more bytes than can be addressed")]
    ShapeOverflow {
        /// The stored shape.
        shape: Vec<usize>,
    },
    /// The number of bytes doesn't match the shape and data type.
    #[error("Data holds {bytes} bytes but its shape and data type require {expected}")]
    InvalidLength {
        /// The number of bytes stored.
        bytes: usize,
        /// The number of bytes required.
        expected: usize,
    },
}

/// An error raised when a value can't be interpreted as a dense array.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Nested rows don't all have the same length.
    #[error("Ragged nested sequence: row {row} has {found} elements, expected {expected}")]
    Ragged {
        /// The index of the offending row.
        row: usize,
        /// The length of the first row.
        expected: usize,
        /// The length of the offending row.
        found: usize,
    },
    /// The number of elements doesn't match the provided shape.
    #[error("Cannot interpret {elements} elements with shape {shape:?}")]
    ShapeMismatch {
        /// The number of elements provided.
        elements: usize,
        /// The provided shape.
        shape: Vec<usize>,
    },
    /// The provided tensor data is invalid.
    #[error("Invalid tensor data: {0}")]
    InvalidData(#[from] DataError),
    /// The provided shape is invalid.
    #[error("Invalid shape: {0}")]
    InvalidShape(#[from] ShapeError),
}
