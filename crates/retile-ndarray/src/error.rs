use retile_std::{ConversionError, ShapeError};

/// An error raised by [resize](crate::resize).
///
/// Conversion of the input is always attempted before validation of the requested shape, so an
/// input that isn't array-like is reported even when the shape is invalid too.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ResizeError {
    /// The input can't be interpreted as an array.
    #[error("Resize error => Invalid input: {0}")]
    Conversion(#[from] ConversionError),

    /// The requested shape is invalid.
    #[error("Resize error => Invalid shape: {0}")]
    Shape(#[from] ShapeError),
}
