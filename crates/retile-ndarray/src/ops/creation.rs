use retile_std::{AsShape, DType, Scalar, ShapeError};

use crate::{NdArrayOps, NdArrayTensor};

/// Creates a tensor of the given shape filled with `value`.
///
/// The data type of the tensor is the one of the [scalar](Scalar).
pub fn full<S: AsShape>(shape: S, value: impl Into<Scalar>) -> Result<NdArrayTensor, ShapeError> {
    let shape = shape.into_shape()?;
    let value: Scalar = value.into();

    macro_rules! full_scalar {
        ($($variant:ident),*) => {
            match value {
                $(Scalar::$variant(value) => NdArrayOps::full(shape, value).map(NdArrayTensor::from),)*
            }
        };
    }

    full_scalar!(F64, F32, F16, BF16, I64, I32, I16, I8, U64, U32, U16, U8, Bool)
}

/// Creates a tensor of the given shape and data type filled with zeros.
pub fn zeros<S: AsShape>(shape: S, dtype: DType) -> Result<NdArrayTensor, ShapeError> {
    full(shape, Scalar::zero(dtype))
}

/// Creates a tensor of the given shape and data type.
///
/// Elements are always initialized to zero, reading an empty tensor is never undefined.
pub fn empty<S: AsShape>(shape: S, dtype: DType) -> Result<NdArrayTensor, ShapeError> {
    zeros(shape, dtype)
}

#[cfg(test)]
mod tests {
    use super::*;
    use retile_std::{f16, Shape, TensorData};

    #[test]
    fn full_should_keep_scalar_dtype() {
        let tensor = full([2, 2], 3i16).unwrap();

        assert_eq!(tensor.dtype(), DType::I16);
        tensor
            .into_data()
            .assert_eq(&TensorData::from([[3i16, 3], [3, 3]]), true);
    }

    #[test]
    fn zeros_should_support_half_precision() {
        let tensor = zeros(3usize, DType::F16).unwrap();

        tensor
            .into_data()
            .assert_eq(&TensorData::from([f16::from_f32(0.0); 3]), true);
    }

    #[test]
    fn zeros_should_support_bool() {
        let tensor = zeros([1, 2], DType::Bool).unwrap();

        tensor
            .into_data()
            .assert_eq(&TensorData::from([[false, false]]), true);
    }

    #[test]
    fn empty_should_be_zero_initialized() {
        let tensor = empty([0, 4], DType::F32).unwrap();
        assert_eq!(tensor.shape(), Shape::from([0, 4]));

        let tensor = empty([4], DType::U32).unwrap();
        tensor
            .into_data()
            .assert_eq(&TensorData::from([0u32; 4]), true);
    }

    #[test]
    fn should_reject_negative_dims() {
        let err = zeros([2, -3], DType::I64).unwrap_err();

        assert_eq!(err, ShapeError::NegativeDim { axis: 1, size: -3 });
    }

    #[test]
    fn should_reject_huge_allocations() {
        let err = full([isize::MAX as usize / 2], 1u64).unwrap_err();

        assert!(matches!(err, ShapeError::Overflow { .. }));
    }
}
