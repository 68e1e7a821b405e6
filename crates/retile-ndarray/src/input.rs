use retile_std::{bf16, f16, ConversionError, DType, Scalar};

use crate::{ArrayLike, NdArrayTensor};

/// The three kinds of input handled by [resize](crate::resize).
#[derive(Debug, Clone)]
pub enum ResizeInput {
    /// A single value, which is not an array.
    Scalar(Scalar),
    /// An array without any element, only its data type matters.
    EmptyArray(DType),
    /// An array holding at least one element.
    NonEmptyArray(NdArrayTensor),
}

impl ResizeInput {
    /// Classifies an array depending on whether it holds elements.
    pub fn from_array(tensor: NdArrayTensor) -> Self {
        if tensor.is_empty() {
            ResizeInput::EmptyArray(tensor.dtype())
        } else {
            ResizeInput::NonEmptyArray(tensor)
        }
    }

    /// Returns the data type of the input.
    pub fn dtype(&self) -> DType {
        match self {
            ResizeInput::Scalar(value) => value.dtype(),
            ResizeInput::EmptyArray(dtype) => *dtype,
            ResizeInput::NonEmptyArray(tensor) => tensor.dtype(),
        }
    }
}

/// Conversion of any value accepted by [resize](crate::resize).
pub trait IntoResizeInput {
    /// Converts and classifies the value.
    fn into_resize_input(self) -> Result<ResizeInput, ConversionError>;
}

impl<A: ArrayLike> IntoResizeInput for A {
    fn into_resize_input(self) -> Result<ResizeInput, ConversionError> {
        Ok(ResizeInput::from_array(self.into_ndarray()?))
    }
}

impl IntoResizeInput for Scalar {
    fn into_resize_input(self) -> Result<ResizeInput, ConversionError> {
        Ok(ResizeInput::Scalar(self))
    }
}

macro_rules! scalar_input {
    ($($ty:ty),*) => {
        $(
            impl IntoResizeInput for $ty {
                fn into_resize_input(self) -> Result<ResizeInput, ConversionError> {
                    Ok(ResizeInput::Scalar(Scalar::from(self)))
                }
            }
        )*
    };
}

scalar_input!(f64, f32, f16, bf16, i64, i32, i16, i8, u64, u32, u16, u8, bool);
