use alloc::vec::Vec;

use ndarray::{ArcArray, IxDyn};
use retile_std::{bf16, f16, DType, DataError, Shape, TensorData};

use crate::element::NdArrayElement;

/// Concrete storage type for ndarray.
pub type SharedArray<E> = ArcArray<E, IxDyn>;

/// Tensor primitive used by the ndarray backend.
///
/// The data type is carried by the variant, so a single tensor type can hold every
/// [element](NdArrayElement) supported by the backend.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub enum NdArrayTensor {
    F64(SharedArray<f64>),
    F32(SharedArray<f32>),
    F16(SharedArray<f16>),
    BF16(SharedArray<bf16>),
    I64(SharedArray<i64>),
    I32(SharedArray<i32>),
    I16(SharedArray<i16>),
    I8(SharedArray<i8>),
    U64(SharedArray<u64>),
    U32(SharedArray<u32>),
    U16(SharedArray<u16>),
    U8(SharedArray<u8>),
    Bool(SharedArray<bool>),
}

/// Macro to execute an operation on the array held by a [tensor](NdArrayTensor), whatever its
/// element type.
///
/// The `$array` identifier is bound to the inner [SharedArray] in `$body`. When the element
/// type is needed, it is aliased to `$element`.
#[macro_export]
macro_rules! execute_with_dtype {
    // Op where the element type is needed
    ($tensor:expr, $element:ident, $array:ident => $body:expr) => {{
        match $tensor {
            $crate::NdArrayTensor::F64($array) => {
                type $element = f64;
                $body
            }
            $crate::NdArrayTensor::F32($array) => {
                type $element = f32;
                $body
            }
            $crate::NdArrayTensor::F16($array) => {
                type $element = $crate::f16;
                $body
            }
            $crate::NdArrayTensor::BF16($array) => {
                type $element = $crate::bf16;
                $body
            }
            $crate::NdArrayTensor::I64($array) => {
                type $element = i64;
                $body
            }
            $crate::NdArrayTensor::I32($array) => {
                type $element = i32;
                $body
            }
            $crate::NdArrayTensor::I16($array) => {
                type $element = i16;
                $body
            }
            $crate::NdArrayTensor::I8($array) => {
                type $element = i8;
                $body
            }
            $crate::NdArrayTensor::U64($array) => {
                type $element = u64;
                $body
            }
            $crate::NdArrayTensor::U32($array) => {
                type $element = u32;
                $body
            }
            $crate::NdArrayTensor::U16($array) => {
                type $element = u16;
                $body
            }
            $crate::NdArrayTensor::U8($array) => {
                type $element = u8;
                $body
            }
            $crate::NdArrayTensor::Bool($array) => {
                type $element = bool;
                $body
            }
        }
    }};

    // Op where the element type is inferred by the compiler
    ($tensor:expr, $array:ident => $body:expr) => {{
        match $tensor {
            $crate::NdArrayTensor::F64($array) => $body,
            $crate::NdArrayTensor::F32($array) => $body,
            $crate::NdArrayTensor::F16($array) => $body,
            $crate::NdArrayTensor::BF16($array) => $body,
            $crate::NdArrayTensor::I64($array) => $body,
            $crate::NdArrayTensor::I32($array) => $body,
            $crate::NdArrayTensor::I16($array) => $body,
            $crate::NdArrayTensor::I8($array) => $body,
            $crate::NdArrayTensor::U64($array) => $body,
            $crate::NdArrayTensor::U32($array) => $body,
            $crate::NdArrayTensor::U16($array) => $body,
            $crate::NdArrayTensor::U8($array) => $body,
            $crate::NdArrayTensor::Bool($array) => $body,
        }
    }};
}

/// Macro to execute an operation for the element type matching a [DType](retile_std::DType).
#[macro_export]
macro_rules! execute_for_dtype {
    ($dtype:expr, $element:ident => $body:expr) => {{
        match $dtype {
            $crate::DType::F64 => {
                type $element = f64;
                $body
            }
            $crate::DType::F32 => {
                type $element = f32;
                $body
            }
            $crate::DType::F16 => {
                type $element = $crate::f16;
                $body
            }
            $crate::DType::BF16 => {
                type $element = $crate::bf16;
                $body
            }
            $crate::DType::I64 => {
                type $element = i64;
                $body
            }
            $crate::DType::I32 => {
                type $element = i32;
                $body
            }
            $crate::DType::I16 => {
                type $element = i16;
                $body
            }
            $crate::DType::I8 => {
                type $element = i8;
                $body
            }
            $crate::DType::U64 => {
                type $element = u64;
                $body
            }
            $crate::DType::U32 => {
                type $element = u32;
                $body
            }
            $crate::DType::U16 => {
                type $element = u16;
                $body
            }
            $crate::DType::U8 => {
                type $element = u8;
                $body
            }
            $crate::DType::Bool => {
                type $element = bool;
                $body
            }
        }
    }};
}

impl NdArrayTensor {
    /// Returns the data type of the tensor.
    pub fn dtype(&self) -> DType {
        match self {
            NdArrayTensor::F64(_) => DType::F64,
            NdArrayTensor::F32(_) => DType::F32,
            NdArrayTensor::F16(_) => DType::F16,
            NdArrayTensor::BF16(_) => DType::BF16,
            NdArrayTensor::I64(_) => DType::I64,
            NdArrayTensor::I32(_) => DType::I32,
            NdArrayTensor::I16(_) => DType::I16,
            NdArrayTensor::I8(_) => DType::I8,
            NdArrayTensor::U64(_) => DType::U64,
            NdArrayTensor::U32(_) => DType::U32,
            NdArrayTensor::U16(_) => DType::U16,
            NdArrayTensor::U8(_) => DType::U8,
            NdArrayTensor::Bool(_) => DType::Bool,
        }
    }

    /// Returns the shape of the tensor.
    pub fn shape(&self) -> Shape {
        execute_with_dtype!(self, array => Shape::from(array.shape()))
    }

    /// Returns the number of elements of the tensor.
    pub fn num_elements(&self) -> usize {
        execute_with_dtype!(self, array => array.len())
    }

    /// Returns true if the tensor doesn't hold any element.
    pub fn is_empty(&self) -> bool {
        self.num_elements() == 0
    }

    /// Returns true if the elements are laid out contiguously in row-major order.
    pub fn is_standard_layout(&self) -> bool {
        execute_with_dtype!(self, array => array.is_standard_layout())
    }

    /// Returns the inner array if the tensor holds elements of type `E`.
    pub fn into_array<E: NdArrayElement>(self) -> Result<SharedArray<E>, DataError> {
        let found = self.dtype();
        E::from_tensor(self).ok_or(DataError::TypeMismatch {
            expected: E::dtype(),
            found,
        })
    }

    /// Create a tensor from [tensor data](TensorData).
    pub fn from_data(data: TensorData) -> Result<NdArrayTensor, DataError> {
        execute_for_dtype!(data.dtype, E => array_from_data::<E>(data).map(NdArrayTensor::from))
    }

    /// Converts the tensor into [tensor data](TensorData).
    ///
    /// Elements are written in row-major order, whatever the memory layout of the tensor.
    pub fn into_data(self) -> TensorData {
        let shape = self.shape();
        execute_with_dtype!(self, array => {
            let values: Vec<_> = array.iter().copied().collect();
            TensorData::new(values, shape)
        })
    }
}

fn array_from_data<E: NdArrayElement>(data: TensorData) -> Result<SharedArray<E>, DataError> {
    let shape = data.shape.clone();
    let values = data.into_vec::<E>()?;

    // The length was validated against the shape, only the isize limit of ndarray remains.
    ArcArray::from_shape_vec(IxDyn(&shape), values)
        .map_err(|_| DataError::ShapeOverflow { shape })
}

macro_rules! tensor_from_array {
    ($($ty:ty => $variant:ident),*) => {
        $(
            impl From<SharedArray<$ty>> for NdArrayTensor {
                fn from(value: SharedArray<$ty>) -> NdArrayTensor {
                    NdArrayTensor::$variant(value)
                }
            }
        )*
    };
}

tensor_from_array!(
    f64 => F64,
    f32 => F32,
    f16 => F16,
    bf16 => BF16,
    i64 => I64,
    i32 => I32,
    i16 => I16,
    i8 => I8,
    u64 => U64,
    u32 => U32,
    u16 => U16,
    u8 => U8,
    bool => Bool
);
